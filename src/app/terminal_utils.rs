use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub fn prepare_terminal_for_app_exit(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Puts the terminal in raw mode on the alternate screen. Raw mode is
/// switched back off if the screen cannot be set up.
pub fn create_terminal(
) -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    terminal::enable_raw_mode()?;
    undo_raw_mode_on_error(enter_alternate_screen())
}

fn enter_alternate_screen(
) -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn undo_raw_mode_on_error<T>(
    setup: Result<T, Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Err(error) = &setup {
        tracing::error!("Terminal setup failed: {error}");
        if let Err(error) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to leave raw mode: {error}");
        }
    }
    setup
}
