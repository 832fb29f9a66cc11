use crate::app::App;
use crate::services::{ChatbotService, ComposeService};
use crate::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle helpline chat input
pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => {
            app.chat.input.push(c);
        }
        KeyCode::Backspace => {
            app.chat.input.pop();
        }
        KeyCode::PageUp => {
            app.chat.scroll_offset = app.chat.scroll_offset.saturating_add(5);
        }
        KeyCode::PageDown => {
            app.chat.scroll_offset = app.chat.scroll_offset.saturating_sub(5);
        }
        KeyCode::Enter => {
            let input = app.chat.input.clone();
            match ComposeService::validate(&input, app.config.max_chat_length) {
                Ok(message) => {
                    app.chat.input.clear();
                    let reply = ChatbotService::reply_for(&message);
                    app.chat.push_visitor(message);
                    let due = app.ui.tick_count + app.config.bot_reply_delay_ticks;
                    app.chat.queue_reply(reply, due);
                }
                Err(reason) => {
                    if input.trim().is_empty() {
                        // an empty send is ignored, like hitting Enter
                        // on a blank line
                        app.chat.input.clear();
                    } else {
                        app.toast(reason);
                    }
                }
            }
        }
        KeyCode::Esc => {
            app.ui.set_mode(AppMode::MainMenu);
        }
        _ => {}
    }
}
