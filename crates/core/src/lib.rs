//! Action Menu Core Library
//!
//! This crate provides the core functionality for action-menu, a
//! configuration-driven menu runner. A configuration file lists action
//! identifiers; each identifier is resolved against a catalog of factories
//! registered by the host binary, and the resulting actions are offered in a
//! numbered menu.
//!
//! # Key Features
//!
//! - **Action Contract**: The [`action::Action`] trait every menu entry implements
//! - **Action Catalog**: Identifier to factory registration table
//! - **Registry Loading**: Parse YAML configuration and build the ordered action registry
//! - **Configuration Management**: Handle configuration file paths and settings
//! - **Error Handling**: Error types for fatal failures, warnings for recoverable ones
//!
//! # Examples
//!
//! Loading actions from a configuration file:
//!
//! ```no_run
//! use action_menu_core::catalog::ActionCatalog;
//! use action_menu_core::loader::load_actions;
//!
//! let catalog = ActionCatalog::new();
//! let outcome = load_actions("menu.yml", "actions", &catalog)?;
//! for (option, action) in outcome.registry.options() {
//!     println!("{option}. {}", action.menu_name());
//! }
//! # Ok::<(), action_menu_core::error::Error>(())
//! ```

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod execution;
pub mod loader;
pub mod registry;
