pub mod chat;
pub mod donation;
pub mod feed;
pub mod navigation;

use crate::app::App;
use crate::state::AppMode;
use crossterm::event::KeyEvent;

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Handle quit confirmation dialog first (highest priority)
    if app.ui.show_quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    // Handle global shortcuts
    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    // An active toast closes on any key press
    if app.notifications.current_notification.is_some() {
        app.notifications.clear_notification();
        return;
    }

    match app.ui.mode {
        AppMode::Feed | AppMode::PostView => feed::handle_feed_input(key, app),
        AppMode::Donate => donation::handle_donation_input(key, app),
        AppMode::Chat => chat::handle_chat_input(key, app),
        AppMode::Input => navigation::handle_input_mode(key, app),
        _ => navigation::handle_general_navigation(key, app),
    }
}

fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Left | KeyCode::Right => {
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            if app.ui.quit_confirm_selected == 0 {
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}
