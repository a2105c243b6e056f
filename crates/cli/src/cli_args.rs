//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the `amenu` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use action_menu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["amenu", "-c", "menu.yml", "--no-color"]);
/// assert_eq!(args.config_path.as_deref(), Some("menu.yml"));
/// assert!(args.no_color);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menu configuration file YAML.
    ///
    /// If not provided, defaults to `~/.action-menu/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Key in the configuration file that lists the action identifiers.
    ///
    /// If not provided, defaults to `actions`.
    #[arg(long, short = 'k')]
    pub key: Option<String>,

    /// Disable colored status messages.
    #[arg(long, action)]
    pub no_color: bool,

    /// Print the identifiers of all built-in actions and exit.
    #[arg(long, short = 'L', action)]
    pub list_actions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["amenu"]);
        assert!(args.config_path.is_none());
        assert!(args.key.is_none());
        assert!(!args.no_color);
        assert!(!args.list_actions);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["amenu", "-c", "/tmp/menu.yml", "-k", "acciones", "-L"]);
        assert_eq!(args.config_path.as_deref(), Some("/tmp/menu.yml"));
        assert_eq!(args.key.as_deref(), Some("acciones"));
        assert!(args.list_actions);
    }

    #[test]
    fn test_unknown_positional_is_rejected() {
        assert!(Args::try_parse_from(["amenu", "extra"]).is_err());
    }
}
