//! Type definitions for the menu loop.
//!
//! This module defines the states of the menu state machine, how a parsed
//! option maps onto the registry, and how a session ends.

use action_menu_core::action::Action;
use action_menu_core::registry::ActionRegistry;

/// States of the menu loop.
///
/// Every iteration renders the menu, waits for one line of input and, when
/// the line is a number, dispatches it. `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Render,
    AwaitInput,
    Dispatch(i64),
    Exit(MenuOutcome),
}

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user picked the exit option.
    ExitSelected,
    /// The input stream ran out before the exit option was picked.
    InputClosed,
}

/// What a numeric option refers to in a given registry.
pub enum Selection<'a> {
    Action(&'a dyn Action),
    Exit,
    OutOfRange,
}

impl<'a> Selection<'a> {
    /// Maps `option` onto `registry`: `1..=len` are its actions and
    /// `len + 1` is exit.
    #[must_use]
    pub fn classify(option: i64, registry: &'a ActionRegistry) -> Self {
        let Ok(option) = usize::try_from(option) else {
            return Selection::OutOfRange;
        };

        if option == registry.exit_option() {
            return Selection::Exit;
        }

        registry
            .by_option(option)
            .map_or(Selection::OutOfRange, Selection::Action)
    }
}
