//! Raw-mode, alternate-screen terminal setup and teardown.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    cursor::Show,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen. The terminal is put back even
/// if the quiz panics.
pub fn init() -> io::Result<QuizTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    if let Err(err) = io::stdout().execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    log::debug!("Terminal initialised");
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    log::debug!("Terminal restored");
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
