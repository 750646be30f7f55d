use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, prelude::Backend};
use tracing::warn;

use crate::error::AppResult;
use crate::ui::model::UiRenderData;

use super::frame::draw_frame;

/// The live dashboard: owns the terminal while raw mode and the alternate
/// screen are active, and restores both when dropped.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Dashboard {
    /// Switches the terminal to raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails. The terminal is restored
    /// before returning.
    pub fn open() -> AppResult<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err.into());
        }
        let prepared = Terminal::new(CrosstermBackend::new(io::stdout())).and_then(|mut terminal| {
            terminal.clear()?;
            Ok(terminal)
        });
        match prepared {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore_terminal();
                Err(err.into())
            }
        }
    }

    /// Redraws the whole dashboard from a state snapshot.
    pub fn draw(&mut self, data: &UiRenderData) {
        draw_snapshot(&mut self.terminal, data);
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        restore_terminal();
        self.terminal.show_cursor().ok();
    }
}

/// Draws one frame of the dashboard on any backend. A failed draw is logged
/// and the next snapshot retries.
pub fn draw_snapshot<B: Backend>(terminal: &mut Terminal<B>, data: &UiRenderData) {
    if let Err(err) = terminal.draw(|f| draw_frame(f, data)) {
        warn!("Failed to draw dashboard: {}", err);
    }
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}
