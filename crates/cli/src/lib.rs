//! Action Menu CLI Library
//!
//! This crate provides the command-line front end for action-menu: it loads
//! the configured actions from the built-in catalog and runs the interactive
//! numbered menu over them.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`actions`]: Built-in actions and the catalog they are registered in
//! - [`menu`]: The render / read / dispatch loop
//!
//! # Examples
//!
//! The CLI binary (`amenu`) can be used in several ways:
//!
//! ```bash
//! # Run the menu from ~/.action-menu/config.yml
//! amenu
//!
//! # Use another configuration file and key
//! amenu -c ./menu.yml -k acciones
//!
//! # Show which identifiers can be put in the configuration
//! amenu --list-actions
//! ```
//!
//! A configuration file names actions under the `actions` key, either as a
//! `;`-separated string or as a list:
//!
//! ```yaml
//! actions: "menu.actions.Greeting; menu.actions.Uptime"
//! ```

pub mod actions;
pub mod cli_args;
pub mod menu;
