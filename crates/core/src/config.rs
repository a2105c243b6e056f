//! Configuration path utilities for action-menu.
//!
//! This module provides the default configuration locations and resolves
//! shell variables like `~` in paths.

/// Default path for the menu configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.action-menu/config.yml";

/// Key in the configuration file that lists the action identifiers
pub const DEFAULT_ACTIONS_KEY: &str = "actions";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use action_menu_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(None);
///
/// // Use custom path
/// let custom_path = get_config_path(Some("/path/to/config.yml"));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the key holding the action list, falling back to
/// [`DEFAULT_ACTIONS_KEY`].
#[must_use]
pub fn get_actions_key(key_arg: Option<&str>) -> &str {
    key_arg.unwrap_or(DEFAULT_ACTIONS_KEY)
}

/// Picks the shell used to run commands: the given value (usually `$SHELL`)
/// when set and non-empty, otherwise [`DEFAULT_SHELL`].
#[must_use]
pub fn get_shell(shell_var: Option<String>) -> String {
    shell_var
        .filter(|shell| !shell.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let result = get_config_path(Some("/custom/path/config.yml"));
        assert_eq!(result, "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".action-menu/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-menu.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-menu.yml"));
    }

    #[test]
    fn test_get_actions_key() {
        assert_eq!(get_actions_key(None), "actions");
        assert_eq!(get_actions_key(Some("acciones")), "acciones");
    }

    #[test]
    fn test_get_shell() {
        assert_eq!(get_shell(Some("/bin/zsh".to_string())), "/bin/zsh");
        assert_eq!(get_shell(Some(String::new())), DEFAULT_SHELL);
        assert_eq!(get_shell(None), DEFAULT_SHELL);
    }
}
