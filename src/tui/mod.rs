//! Terminal user interface

pub mod input;
pub mod render;

use crate::app::{Actions, App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Run the TUI until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.tick_rate_ms);
    let result = run_loop(&mut terminal, &mut app, &event_handler, Actions::new());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    info!("Terminal restored");

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
    action_handler: Actions,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Key(key) => {
                let height = terminal.size()?.height;
                input::handle_key_event(app, action_handler, key.code, key.modifiers, height);
            }
            Event::Paste(text) => input::handle_paste(app, &text),
            Event::Tick | Event::Resize(_, _) => {}
        }
    }
    Ok(())
}
