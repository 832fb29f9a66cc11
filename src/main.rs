mod app;
mod feed;
mod global_prefs;
mod handlers;
mod model;
mod seed;
mod services;
mod state;
mod ui;

use std::{error::Error, io, time::Duration};

use app::App;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize global preferences
    global_prefs::init_global_prefs();

    // Enable terminal raw mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance; the content store loads the feed snapshot or
    // falls back to the seed set
    let mut app = App::new();

    // Create event loop channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal event handler
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(50));
        loop {
            interval.tick().await;

            // Check for terminal events (non-blocking)
            if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if event_tx_clone.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
            }

            // Send tick event
            if event_tx_clone.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Main application loop
    while !app.ui.should_quit {
        // Render UI
        terminal.draw(|f| ui::ui(f, &mut app))?;

        // Handle events
        if let Some(event) = event_rx.recv().await {
            match event {
                AppEvent::Terminal(terminal_event) => {
                    if let CEvent::Key(key) = terminal_event {
                        handlers::handle_key_event(key, &mut app);
                    }
                }
                AppEvent::Tick => {
                    app.on_tick();
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
