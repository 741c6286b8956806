use std::io::{self, Stdout};
use std::panic;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode on the alternate screen.
///
/// Installs a panic hook that restores the terminal before the default hook
/// prints, so a panic never leaves the shell in raw mode.
pub fn init() -> io::Result<AppTerminal> {
    install_restore_on_panic();
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn install_restore_on_panic() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        default_hook(panic_info);
    }));
}
