//! Menu rendering and the fixed messages printed by the menu loop.

use std::io::Write;

use action_menu_core::action::MenuEntry;
use action_menu_core::registry::ActionRegistry;

pub const HEADER: &str = "Welcome, these are your options:";
pub const PROMPT: &str = "Enter your option: ";
pub const EXIT_LABEL: &str = "Exit";
pub const SEPARATOR: &str = "---";
pub const FAREWELL: &str = "Exiting the program. Goodbye!";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Writes the numbered menu: one line per action, then the exit option.
pub fn render_menu<W: Write>(output: &mut W, registry: &ActionRegistry) -> std::io::Result<()> {
    writeln!(output, "{HEADER}")?;
    for (option, action) in registry.options() {
        writeln!(output, "{option}. {}", MenuEntry(action))?;
    }
    writeln!(output, "{}. {EXIT_LABEL}", registry.exit_option())
}

/// Writes the input prompt and flushes so it shows before blocking on input.
pub fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()
}

#[must_use]
pub fn executing_message(name: &str) -> String {
    format!("Executing: {name}...")
}

#[must_use]
pub fn success_message(name: &str) -> String {
    format!("Action '{name}' executed successfully.")
}

#[must_use]
pub fn failure_message(name: &str, error: &dyn std::fmt::Display) -> String {
    format!("Error executing action '{name}': {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use action_menu_core::action::Action;
    use action_menu_core::error::Result;

    struct Labelled(&'static str, &'static str);

    impl Action for Labelled {
        fn menu_name(&self) -> &str {
            self.0
        }

        fn menu_description(&self) -> &str {
            self.1
        }

        fn execute(&self) -> Result<()> {
            Ok(())
        }
    }

    fn rendered(registry: &ActionRegistry) -> String {
        let mut output = Vec::new();
        render_menu(&mut output, registry).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_menu_lists_actions_then_exit() {
        let actions: Vec<Box<dyn Action>> = vec![
            Box::new(Labelled("A", "first")),
            Box::new(Labelled("B", "second")),
        ];
        let registry = ActionRegistry::new(actions);

        assert_eq!(
            rendered(&registry),
            "Welcome, these are your options:\n1. A (first)\n2. B (second)\n3. Exit\n"
        );
    }

    #[test]
    fn test_render_empty_menu_has_only_exit() {
        assert_eq!(
            rendered(&ActionRegistry::empty()),
            "Welcome, these are your options:\n1. Exit\n"
        );
    }

    #[test]
    fn test_status_messages_name_the_action() {
        assert_eq!(executing_message("Backup"), "Executing: Backup...");
        assert_eq!(success_message("Backup"), "Action 'Backup' executed successfully.");
        assert_eq!(
            failure_message("Backup", &"disk full"),
            "Error executing action 'Backup': disk full"
        );
    }
}
