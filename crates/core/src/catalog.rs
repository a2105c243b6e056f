//! Identifier to factory registration table.
//!
//! Configuration names actions by identifier. The catalog is where a host
//! binary declares which identifiers exist and how to build each one, so that
//! resolving an identifier is a plain lookup.

use indexmap::IndexMap;

use crate::action::Action;
use crate::error::Result;

/// Builds a fresh action instance. Takes no arguments; may fail.
pub type ActionFactory = fn() -> Result<Box<dyn Action>>;

/// What the catalog knows about an identifier.
#[derive(Clone, Copy)]
pub enum CatalogEntry {
    /// The identifier names an action and this is how to build it.
    Action(ActionFactory),
    /// The identifier is known to the host but does not provide the action
    /// capability set (for example a settings holder).
    NotAnAction,
}

/// Outcome of looking up an identifier.
pub enum Resolution {
    Factory(ActionFactory),
    NotAnAction,
    NotFound,
}

#[derive(Default)]
pub struct ActionCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl ActionCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action factory under `identifier`, replacing any previous
    /// entry with the same identifier.
    pub fn register(&mut self, identifier: &str, factory: ActionFactory) -> &mut Self {
        self.entries
            .insert(identifier.to_string(), CatalogEntry::Action(factory));
        self
    }

    /// Registers an identifier that exists but cannot be used as an action.
    pub fn register_non_action(&mut self, identifier: &str) -> &mut Self {
        self.entries
            .insert(identifier.to_string(), CatalogEntry::NotAnAction);
        self
    }

    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Resolution {
        match self.entries.get(identifier) {
            Some(CatalogEntry::Action(factory)) => Resolution::Factory(*factory),
            Some(CatalogEntry::NotAnAction) => Resolution::NotAnAction,
            None => Resolution::NotFound,
        }
    }

    /// Identifiers that resolve to actions, in registration order.
    pub fn action_identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, CatalogEntry::Action(_)))
            .map(|(identifier, _)| identifier.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
