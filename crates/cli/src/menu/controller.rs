use std::io::{BufRead, Write};

use action_menu_core::action::Action;
use action_menu_core::error::{Error, Result};
use action_menu_core::registry::ActionRegistry;
use log::{debug, info, warn};

use super::colors::{paint, Notice};
use super::input::{parse_option, read_line};
use super::types::{MenuOutcome, MenuState, Selection};
use super::ui;

/// Drives the menu: render, read a line, dispatch, repeat until exit.
///
/// Menu text and status messages go to `output`; action failures go to
/// `errors`. The streams are held for the lifetime of the controller.
pub struct MenuController<'a, R, W, E> {
    registry: &'a ActionRegistry,
    input: R,
    output: W,
    errors: E,
    use_color: bool,
}

impl<'a, R: BufRead, W: Write, E: Write> MenuController<'a, R, W, E> {
    pub fn new(registry: &'a ActionRegistry, input: R, output: W, errors: E) -> Self {
        Self {
            registry,
            input,
            output,
            errors,
            use_color: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Runs the loop until the exit option is picked or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Failing actions and invalid input are reported and the loop goes on.
    pub fn run(&mut self) -> Result<MenuOutcome> {
        let mut state = MenuState::Render;

        loop {
            state = match state {
                MenuState::Render => {
                    ui::render_menu(&mut self.output, self.registry).map_err(Error::Stdio)?;
                    MenuState::AwaitInput
                }
                MenuState::AwaitInput => self.await_input()?,
                MenuState::Dispatch(option) => self.dispatch(option)?,
                MenuState::Exit(outcome) => {
                    debug!("Menu loop finished: {outcome:?}");
                    return Ok(outcome);
                }
            };
        }
    }

    fn await_input(&mut self) -> Result<MenuState> {
        ui::prompt(&mut self.output).map_err(Error::Stdio)?;

        let Some(line) = read_line(&mut self.input)? else {
            info!("Input closed, leaving the menu");
            // The prompt left the cursor mid-line
            writeln!(self.output).map_err(Error::Stdio)?;
            self.say(ui::FAREWELL)?;
            self.say(ui::SEPARATOR)?;
            return Ok(MenuState::Exit(MenuOutcome::InputClosed));
        };

        match parse_option(&line) {
            Some(option) => Ok(MenuState::Dispatch(option)),
            None => {
                debug!("Rejected non-numeric input {line:?}");
                let message = paint(ui::INVALID_INPUT, Notice::Warning, self.use_color);
                self.say(&message)?;
                self.say(ui::SEPARATOR)?;
                Ok(MenuState::Render)
            }
        }
    }

    fn dispatch(&mut self, option: i64) -> Result<MenuState> {
        match Selection::classify(option, self.registry) {
            Selection::Action(action) => {
                self.run_action(action)?;
                self.say(ui::SEPARATOR)?;
                Ok(MenuState::Render)
            }
            Selection::Exit => {
                self.say(ui::FAREWELL)?;
                self.say(ui::SEPARATOR)?;
                Ok(MenuState::Exit(MenuOutcome::ExitSelected))
            }
            Selection::OutOfRange => {
                debug!("Rejected out of range option {option}");
                let message = paint(ui::INVALID_OPTION, Notice::Warning, self.use_color);
                self.say(&message)?;
                self.say(ui::SEPARATOR)?;
                Ok(MenuState::Render)
            }
        }
    }

    fn run_action(&mut self, action: &dyn Action) -> Result<()> {
        let name = action.menu_name();
        self.say(&ui::executing_message(name))?;
        // Anything the action prints must come after the notice
        self.output.flush().map_err(Error::Stdio)?;

        match action.execute() {
            Ok(()) => {
                info!("Action `{name}` succeeded");
                let message = paint(&ui::success_message(name), Notice::Success, self.use_color);
                self.say(&message)
            }
            Err(e) => {
                warn!("Action `{name}` failed: {e}");
                let message = paint(
                    &ui::failure_message(name, &e),
                    Notice::Failure,
                    self.use_color,
                );
                writeln!(self.errors, "{message}").map_err(Error::Stdio)?;
                self.errors.flush().map_err(Error::Stdio)
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(Error::Stdio)
    }
}

/// Runs the menu on the process's stdin, stdout and stderr.
///
/// # Errors
///
/// See [`MenuController::run`].
pub fn run_interactive(registry: &ActionRegistry, use_color: bool) -> Result<MenuOutcome> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let stderr = std::io::stderr();

    MenuController::new(registry, stdin, stdout, stderr)
        .with_color(use_color)
        .run()
}
