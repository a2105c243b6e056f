use std::fmt::{Display, Formatter};

use crate::error::Result;

/// A unit of work that can be selected from the menu.
///
/// Implementors supply a short name and a description for the menu entry,
/// and the work itself in [`Action::execute`]. A failing action reports the
/// failure through the returned error; the menu keeps running.
pub trait Action {
    /// Short, human-readable name shown in the menu.
    fn menu_name(&self) -> &str;

    /// One-line description shown next to the name.
    fn menu_description(&self) -> &str;

    /// Runs the action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action could not complete.
    fn execute(&self) -> Result<()>;
}

/// Formats an action the way it appears in a menu entry: `name (description)`.
pub struct MenuEntry<'a>(pub &'a dyn Action);

impl Display for MenuEntry<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} ({})",
            self.0.menu_name(),
            self.0.menu_description()
        )
    }
}
