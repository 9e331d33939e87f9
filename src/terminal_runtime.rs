use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

use crate::logging;

/// Full-screen game display.
///
/// While a session is alive the terminal is in raw mode on the alternate
/// screen and stderr logging is held back. Dropping it undoes both.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        logging::hold_stderr();

        let terminal = enter_screen().inspect_err(|_| leave_screen())?;
        log::debug!("took over the terminal");

        Ok(Self { terminal })
    }

    /// Draws one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave_screen();
    }
}

/// Makes sure a panic message lands on a usable terminal.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        leave_screen();
        default_hook(panic_info);
    }));
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Best-effort restore; safe to call more than once.
fn leave_screen() {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    logging::release_stderr();

    if let Err(error) = raw.and(screen) {
        log::warn!("failed to restore terminal: {error}");
    }
}
