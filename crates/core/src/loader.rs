//! Loading the action registry from a configuration file.
//!
//! The configuration is a YAML mapping. One key holds the list of action
//! identifiers, either as a `;`-separated string or as a YAML sequence.
//! Each identifier is resolved against an [`ActionCatalog`] and built with
//! its factory. Problems with individual identifiers never abort the load;
//! they are collected as [`LoadWarning`]s. Only a configuration source that
//! cannot be read or parsed is an error.

use std::fmt::{Display, Formatter};
use std::fs::File;

use log::debug;
use serde_yaml::Value;

use crate::action::Action;
use crate::catalog::{ActionCatalog, Resolution};
use crate::error::{Error, Result};
use crate::registry::ActionRegistry;

/// Separator between identifiers in the string form of the action list.
pub const IDENTIFIER_SEPARATOR: char = ';';

/// A non-fatal problem found while loading actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The key is missing or holds no identifiers.
    NoActionsConfigured { key: String },
    /// No catalog entry for the identifier.
    NotFound { identifier: String },
    /// The identifier is known but does not provide the action capability set.
    NotAnAction { identifier: String },
    /// The factory for the identifier failed.
    ConstructionFailed { identifier: String, reason: String },
}

impl Display for LoadWarning {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::NoActionsConfigured { key } => write!(
                formatter,
                "No actions were specified under the `{key}` key of the configuration file."
            ),
            LoadWarning::NotFound { identifier } => write!(
                formatter,
                "No action named `{identifier}` was found. Check the identifier for typos."
            ),
            LoadWarning::NotAnAction { identifier } => {
                write!(formatter, "`{identifier}` is not an action.")
            }
            LoadWarning::ConstructionFailed { identifier, reason } => {
                write!(formatter, "Failed to create action `{identifier}`: {reason}")
            }
        }
    }
}

/// The loaded registry together with every warning raised while building it.
pub struct LoadOutcome {
    pub registry: ActionRegistry,
    pub warnings: Vec<LoadWarning>,
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Splits a `;`-separated identifier list, trimming each identifier and
/// dropping the empty ones.
#[must_use]
pub fn split_identifiers(value: &str) -> Vec<String> {
    value
        .split(IDENTIFIER_SEPARATOR)
        .map(str::trim)
        .filter(|identifier| !identifier.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Text of a YAML scalar. Numbers and booleans are read as their written
/// form, so `7` is an identifier like any other.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

fn identifiers_from_document(document: &Value, key: &str, source: &str) -> Result<Vec<String>> {
    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        // An empty file is an empty configuration, not a malformed one
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(Error::NotAMapping {
                path: source.to_string(),
            })
        }
    };

    let Some(value) = mapping.get(key) else {
        return Ok(Vec::new());
    };

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => {
            let mut identifiers = Vec::with_capacity(items.len());
            for item in items {
                if item.is_null() {
                    continue;
                }

                let identifier =
                    scalar_text(item).ok_or_else(|| Error::invalid_action_list(key, source))?;
                let identifier = identifier.trim();
                if !identifier.is_empty() {
                    identifiers.push(identifier.to_string());
                }
            }
            Ok(identifiers)
        }
        scalar => scalar_text(scalar)
            .map(|text| split_identifiers(&text))
            .ok_or_else(|| Error::invalid_action_list(key, source)),
    }
}

/// Resolves and builds each identifier in order.
///
/// Identifiers that cannot be resolved or built are skipped with a warning;
/// the remaining actions keep their relative order.
pub fn resolve_actions<S: AsRef<str>>(identifiers: &[S], catalog: &ActionCatalog) -> LoadOutcome {
    let mut actions: Vec<Box<dyn Action>> = Vec::with_capacity(identifiers.len());
    let mut warnings = Vec::new();

    for identifier in identifiers {
        let identifier = identifier.as_ref();

        let outcome = match catalog.resolve(identifier) {
            Resolution::Factory(factory) => {
                factory().map_err(|e| LoadWarning::ConstructionFailed {
                    identifier: identifier.to_string(),
                    reason: e.to_string(),
                })
            }
            Resolution::NotAnAction => Err(LoadWarning::NotAnAction {
                identifier: identifier.to_string(),
            }),
            Resolution::NotFound => Err(LoadWarning::NotFound {
                identifier: identifier.to_string(),
            }),
        };

        match outcome {
            Ok(action) => {
                debug!("Loaded action `{}` as `{}`", identifier, action.menu_name());
                actions.push(action);
            }
            Err(warning) => {
                debug!("Skipped action: {warning}");
                warnings.push(warning);
            }
        }
    }

    LoadOutcome {
        registry: ActionRegistry::new(actions),
        warnings,
    }
}

/// Loads actions from configuration text that has already been read.
///
/// `source` names where the text came from and is only used in messages.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML, is not a mapping, or the
/// value under `key` is a mapping or holds nested collections.
pub fn load_actions_from_str(
    content: &str,
    source: &str,
    key: &str,
    catalog: &ActionCatalog,
) -> Result<LoadOutcome> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            source.to_string(),
            e,
        )
    })?;

    load_from_document(&document, source, key, catalog)
}

fn load_from_document(
    document: &Value,
    source: &str,
    key: &str,
    catalog: &ActionCatalog,
) -> Result<LoadOutcome> {
    let identifiers = identifiers_from_document(document, key, source)?;

    if identifiers.is_empty() {
        let warning = LoadWarning::NoActionsConfigured {
            key: key.to_string(),
        };
        debug!("{warning}");
        return Ok(LoadOutcome {
            registry: ActionRegistry::empty(),
            warnings: vec![warning],
        });
    }

    debug!("Resolving {} action identifier(s)", identifiers.len());
    Ok(resolve_actions(&identifiers, catalog))
}

/// Loads actions from the configuration file at `config_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be opened or read
/// - The file contains invalid YAML or is not a mapping
/// - The value under `key` has an unsupported shape
///
/// Unknown identifiers, identifiers that are not actions and failing
/// factories are reported in [`LoadOutcome::warnings`] instead.
///
/// # Examples
///
/// ```no_run
/// use action_menu_core::catalog::ActionCatalog;
/// use action_menu_core::loader::load_actions;
///
/// let catalog = ActionCatalog::new();
/// let outcome = load_actions("menu.yml", "actions", &catalog)?;
/// for warning in &outcome.warnings {
///     eprintln!("{warning}");
/// }
/// # Ok::<(), action_menu_core::error::Error>(())
/// ```
pub fn load_actions(config_path: &str, key: &str, catalog: &ActionCatalog) -> Result<LoadOutcome> {
    let config_reader = get_reader("config", config_path)?;

    let document: Value = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    load_from_document(&document, config_path, key, catalog)
}
