//! The interactive menu loop.
//!
//! This module renders the numbered action menu, reads the user's choice one
//! line at a time and runs the chosen action, until the exit option is
//! picked or input runs out.
//!
//! # Behaviour
//!
//! - Options are numbered from 1 in registry order; the last option is exit
//! - Non-numeric input and numbers outside the menu are reported, then the
//!   menu is shown again
//! - A failing action is reported against its name and never ends the session

pub mod colors;
pub mod controller;
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use controller::{run_interactive, MenuController};
pub use types::{MenuOutcome, MenuState, Selection};
