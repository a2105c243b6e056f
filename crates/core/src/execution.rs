use std::collections::HashMap;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Executes a command with optional environment variables, attached to the
/// terminal's stdio.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or exits with non-zero status.
pub fn execute_command<S: ::std::hash::BuildHasher>(
    mut command: Command,
    environment: Option<HashMap<String, String, S>>,
) -> Result<()> {
    let mut command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(environment) = environment {
        info!("Executing with environment variables: {:?}", environment);
        command = command.envs(environment);
    };

    let subprocess_exit_success = command.spawn()?.wait()?.success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}

/// Runs `script` through `shell -c`.
///
/// # Errors
///
/// See [`execute_command`].
pub fn execute_shell_script(shell: &str, script: &str) -> Result<()> {
    let mut command = Command::new(shell);
    command.args(["-c", script]);

    execute_command::<std::hash::RandomState>(command, None)
}
