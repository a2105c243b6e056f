//! Built-in actions shipped with the `amenu` binary.
//!
//! Configuration files name these by identifier; [`builtin_catalog`] is the
//! registration table the loader resolves them against.

use std::env;

use action_menu_core::action::Action;
use action_menu_core::catalog::ActionCatalog;
use action_menu_core::config;
use action_menu_core::error::{Error, Result};
use action_menu_core::execution;
use itertools::Itertools;

pub const GREETING: &str = "menu.actions.Greeting";
pub const WORKING_DIRECTORY: &str = "menu.actions.WorkingDirectory";
pub const HOME_DIRECTORY: &str = "menu.actions.HomeDirectory";
pub const ENVIRONMENT: &str = "menu.actions.Environment";
pub const UPTIME: &str = "menu.actions.Uptime";
/// Known to the catalog, but holds settings rather than doing anything.
pub const SETTINGS: &str = "menu.actions.Settings";

pub struct Greeting;

impl Action for Greeting {
    fn menu_name(&self) -> &str {
        "Greeting"
    }

    fn menu_description(&self) -> &str {
        "Say hello"
    }

    fn execute(&self) -> Result<()> {
        println!("Hello! Pick another option or exit when you are done.");
        Ok(())
    }
}

pub struct WorkingDirectory;

impl Action for WorkingDirectory {
    fn menu_name(&self) -> &str {
        "Working directory"
    }

    fn menu_description(&self) -> &str {
        "Show the current working directory"
    }

    fn execute(&self) -> Result<()> {
        let current_dir = env::current_dir()
            .map_err(|e| Error::ActionFailed(format!("cannot read working directory: {e}")))?;
        println!("{}", current_dir.display());
        Ok(())
    }
}

pub struct HomeDirectory {
    home: String,
}

impl HomeDirectory {
    /// Fails when `HOME` is not set.
    pub fn from_env() -> Result<Self> {
        let home = env::var("HOME").map_err(|_| Error::Misc("`HOME` is not set".to_string()))?;
        Ok(Self { home })
    }
}

impl Action for HomeDirectory {
    fn menu_name(&self) -> &str {
        "Home directory"
    }

    fn menu_description(&self) -> &str {
        "Show the home directory"
    }

    fn execute(&self) -> Result<()> {
        println!("{}", self.home);
        Ok(())
    }
}

pub struct Environment;

impl Action for Environment {
    fn menu_name(&self) -> &str {
        "Environment"
    }

    fn menu_description(&self) -> &str {
        "List environment variables"
    }

    fn execute(&self) -> Result<()> {
        for (key, value) in env::vars().sorted() {
            println!("\t\"{key}\": \"{value}\"");
        }
        Ok(())
    }
}

pub struct Uptime {
    shell: String,
}

impl Uptime {
    #[must_use]
    pub fn new(shell: String) -> Self {
        Self { shell }
    }
}

impl Action for Uptime {
    fn menu_name(&self) -> &str {
        "Uptime"
    }

    fn menu_description(&self) -> &str {
        "Run `uptime` in your shell"
    }

    fn execute(&self) -> Result<()> {
        execution::execute_shell_script(&self.shell, "uptime")
    }
}

fn build_greeting() -> Result<Box<dyn Action>> {
    Ok(Box::new(Greeting))
}

fn build_working_directory() -> Result<Box<dyn Action>> {
    Ok(Box::new(WorkingDirectory))
}

fn build_home_directory() -> Result<Box<dyn Action>> {
    Ok(Box::new(HomeDirectory::from_env()?))
}

fn build_environment() -> Result<Box<dyn Action>> {
    Ok(Box::new(Environment))
}

fn build_uptime() -> Result<Box<dyn Action>> {
    let shell = config::get_shell(env::var("SHELL").ok());
    Ok(Box::new(Uptime::new(shell)))
}

/// Catalog of every built-in action identifier.
#[must_use]
pub fn builtin_catalog() -> ActionCatalog {
    let mut catalog = ActionCatalog::new();
    catalog
        .register(GREETING, build_greeting)
        .register(WORKING_DIRECTORY, build_working_directory)
        .register(HOME_DIRECTORY, build_home_directory)
        .register(ENVIRONMENT, build_environment)
        .register(UPTIME, build_uptime)
        .register_non_action(SETTINGS);
    catalog
}
