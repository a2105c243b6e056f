//! Integration tests for action-menu-core
//!
//! These tests verify that the core functionality works together correctly
//! by loading complete configuration files end-to-end.

use action_menu_core::{
    action::{Action, MenuEntry},
    catalog::ActionCatalog,
    config::{get_actions_key, get_config_path},
    error::{Error, Result},
    loader::{load_actions, LoadWarning},
};
use std::cell::Cell;
use std::io::Write;
use tempfile::NamedTempFile;

struct Report {
    name: &'static str,
    description: &'static str,
    runs: Cell<u32>,
}

impl Action for Report {
    fn menu_name(&self) -> &str {
        self.name
    }

    fn menu_description(&self) -> &str {
        self.description
    }

    fn execute(&self) -> Result<()> {
        self.runs.set(self.runs.get() + 1);
        Ok(())
    }
}

fn build_sales() -> Result<Box<dyn Action>> {
    Ok(Box::new(Report {
        name: "Sales",
        description: "Monthly sales report",
        runs: Cell::new(0),
    }))
}

fn build_stock() -> Result<Box<dyn Action>> {
    Ok(Box::new(Report {
        name: "Stock",
        description: "Current stock levels",
        runs: Cell::new(0),
    }))
}

fn build_needs_database() -> Result<Box<dyn Action>> {
    Err(Error::Misc("database unavailable".to_string()))
}

fn catalog() -> ActionCatalog {
    let mut catalog = ActionCatalog::new();
    catalog
        .register("reports.Sales", build_sales)
        .register("reports.Stock", build_stock)
        .register("reports.Audit", build_needs_database)
        .register_non_action("reports.Settings");
    catalog
}

fn config_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

/// Test loading a configuration mixing every kind of identifier
#[test]
fn test_complete_configuration_workflow() {
    let yaml_content = r#"
title: "Back office"
actions: "reports.Sales; reports.Missing ;reports.Settings;; reports.Audit; reports.Stock"
"#;

    let temp_file = config_file(yaml_content);
    let temp_path = temp_file.path().to_str().unwrap();

    let outcome = load_actions(temp_path, get_actions_key(None), &catalog()).unwrap();

    let entries: Vec<String> = outcome
        .registry
        .options()
        .map(|(option, action)| format!("{option}. {}", MenuEntry(action)))
        .collect();
    assert_eq!(
        entries,
        vec![
            "1. Sales (Monthly sales report)",
            "2. Stock (Current stock levels)"
        ]
    );
    assert_eq!(outcome.registry.exit_option(), 3);

    // One warning per dropped identifier, in configuration order
    assert_eq!(outcome.warnings.len(), 3);
    assert_eq!(
        outcome.warnings[0],
        LoadWarning::NotFound {
            identifier: "reports.Missing".to_string()
        }
    );
    assert_eq!(
        outcome.warnings[1],
        LoadWarning::NotAnAction {
            identifier: "reports.Settings".to_string()
        }
    );
    assert!(matches!(
        &outcome.warnings[2],
        LoadWarning::ConstructionFailed { identifier, reason }
            if identifier == "reports.Audit" && reason.contains("database unavailable")
    ));
}

/// Test that loaded actions are independent instances that can be executed
#[test]
fn test_loaded_actions_execute() {
    let temp_file = config_file("actions: reports.Sales;reports.Sales");
    let temp_path = temp_file.path().to_str().unwrap();

    let outcome = load_actions(temp_path, "actions", &catalog()).unwrap();
    assert_eq!(outcome.registry.len(), 2);

    let first = outcome.registry.by_option(1).unwrap();
    assert!(first.execute().is_ok());
    assert!(first.execute().is_ok());
    assert!(outcome.registry.by_option(2).unwrap().execute().is_ok());
}

/// Test that an empty configuration still yields a usable, empty registry
#[test]
fn test_empty_configuration_workflow() {
    let temp_file = config_file("actions: \"\"\n");
    let temp_path = temp_file.path().to_str().unwrap();

    let outcome = load_actions(temp_path, "actions", &catalog()).unwrap();

    assert!(outcome.registry.is_empty());
    assert_eq!(outcome.registry.exit_option(), 1);
    assert_eq!(
        outcome.warnings,
        vec![LoadWarning::NoActionsConfigured {
            key: "actions".to_string()
        }]
    );
}

/// Test that a custom key is honoured and other keys are ignored
#[test]
fn test_custom_key_workflow() {
    let yaml_content = r#"
acciones:
  - reports.Stock
actions: reports.Sales
"#;
    let temp_file = config_file(yaml_content);
    let temp_path = temp_file.path().to_str().unwrap();

    let outcome = load_actions(temp_path, get_actions_key(Some("acciones")), &catalog()).unwrap();
    let names: Vec<&str> = outcome.registry.names().collect();
    assert_eq!(names, vec!["Stock"]);
}

/// Test error handling for unreadable and malformed configuration
#[test]
fn test_fatal_configuration_errors() {
    let missing = load_actions("/nonexistent/path/menu.yml", "actions", &catalog());
    assert!(matches!(missing, Err(Error::Io { .. })));

    let temp_file = config_file("actions: [unterminated");
    let temp_path = temp_file.path().to_str().unwrap();
    let malformed = load_actions(temp_path, "actions", &catalog());
    assert!(matches!(malformed, Err(Error::Yaml { .. })));
}

/// Test configuration path resolution workflow
#[test]
fn test_configuration_path_workflow() {
    let default_config = get_config_path(None);
    assert!(default_config.contains("config.yml"));
    assert!(!default_config.starts_with('~')); // Should be expanded

    let custom_config = get_config_path(Some("/tmp/menu.yml"));
    assert_eq!(custom_config, "/tmp/menu.yml");
}
