use std::io::{stdout, IsTerminal};
use std::process::ExitCode;

use action_menu_cli::actions::builtin_catalog;
use action_menu_cli::cli_args::Args;
use action_menu_cli::menu;
use action_menu_cli::menu::colors::{paint, Notice};
use action_menu_core::config;
use action_menu_core::error::Result;
use action_menu_core::loader;
use clap::Parser;
use itertools::Itertools;
use log::{debug, info};

fn execute() -> Result<()> {
    let args = Args::parse();
    let catalog = builtin_catalog();

    if args.list_actions {
        for identifier in catalog.action_identifiers().sorted() {
            println!("{identifier}");
        }
        return Ok(());
    }

    let use_color = !args.no_color && stdout().is_terminal();

    let config_path = config::get_config_path(args.config_path.as_deref());
    let key = config::get_actions_key(args.key.as_deref());
    debug!("Config path: `{}`, key: `{}`", config_path, key);

    let outcome = loader::load_actions(&config_path, key, &catalog)?;

    for warning in &outcome.warnings {
        eprintln!("{}", paint(&warning.to_string(), Notice::Warning, use_color));
    }
    info!("Loaded {} action(s)", outcome.registry.len());

    let menu_outcome = menu::run_interactive(&outcome.registry, use_color)?;
    debug!("Session ended: {menu_outcome:?}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
