use crate::app::App;
use crate::feed::FeedAction;
use crate::global_prefs::{global_prefs, global_prefs_mut};
use crate::services::ComposeService;
use crate::state::{AppMode, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const MAIN_MENU_ITEMS: [(&str, &str); 5] = [
    ("Community Feed", "Stories, milestones, and appeals from the field"),
    ("Donate", "Make a one-time or monthly gift"),
    ("Helpline Chat", "Ask our guide about programs and giving"),
    ("About", "Mission, history, and impact at a glance"),
    ("Quit", "Leave the hub"),
];

const PREFERENCE_COUNT: usize = 3;

/// Handle global shortcuts that work across all modes
pub fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1; // Default to "No"
            return true;
        }
        KeyCode::F(2) => {
            if app.ui.mode != AppMode::Input {
                app.ui.set_mode(AppMode::Preferences);
                return true;
            }
        }
        _ => {}
    }
    false
}

/// Handle general navigation (main menu, about, preferences)
pub fn handle_general_navigation(key: KeyEvent, app: &mut App) {
    match app.ui.mode {
        AppMode::MainMenu => handle_main_menu_input(key, app),
        AppMode::About => handle_about_input(key, app),
        AppMode::Preferences => handle_preferences_input(key, app),
        _ => {}
    }
}

fn handle_main_menu_input(key: KeyEvent, app: &mut App) {
    let len = MAIN_MENU_ITEMS.len();
    match key.code {
        KeyCode::Down => {
            let current = app.ui.main_menu_state.selected().unwrap_or(0);
            app.ui.main_menu_state.select(Some((current + 1) % len));
        }
        KeyCode::Up => {
            let current = app.ui.main_menu_state.selected().unwrap_or(0);
            app.ui.main_menu_state.select(Some((current + len - 1) % len));
        }
        KeyCode::Enter => match app.ui.main_menu_state.selected().unwrap_or(0) {
            0 => {
                app.feed.clamp_selection();
                app.ui.set_mode(AppMode::Feed);
            }
            1 => app.ui.set_mode(AppMode::Donate),
            2 => app.ui.set_mode(AppMode::Chat),
            3 => app.ui.set_mode(AppMode::About),
            _ => {
                app.ui.show_quit_confirm = true;
                app.ui.quit_confirm_selected = 1;
            }
        },
        KeyCode::Esc | KeyCode::Char('q') => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1;
        }
        _ => {}
    }
}

fn handle_about_input(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        app.ui.set_mode(AppMode::MainMenu);
    }
}

fn handle_preferences_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => {
            app.ui.preferences_selected = (app.ui.preferences_selected + 1) % PREFERENCE_COUNT;
        }
        KeyCode::Up => {
            app.ui.preferences_selected =
                (app.ui.preferences_selected + PREFERENCE_COUNT - 1) % PREFERENCE_COUNT;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            {
                let mut prefs = global_prefs_mut();
                match app.ui.preferences_selected {
                    0 => prefs.relative_timestamps = !prefs.relative_timestamps,
                    1 => prefs.show_engagement_badges = !prefs.show_engagement_badges,
                    _ => prefs.default_sort = prefs.default_sort.next(),
                }
                prefs.save();
            }
            if app.ui.preferences_selected == 2 {
                // apply the new default to the live query as well
                app.feed.query.sort = global_prefs().default_sort;
                app.feed.clamp_selection();
            }
        }
        KeyCode::Esc | KeyCode::F(2) => {
            app.ui.set_mode(AppMode::MainMenu);
        }
        _ => {}
    }
}

/// Handle the modal input popup (feed search, new comment)
pub fn handle_input_mode(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => {
            app.ui.current_input.push(c);
        }
        KeyCode::Backspace => {
            app.ui.current_input.pop();
        }
        KeyCode::Esc => {
            app.ui.close_input();
        }
        KeyCode::Enter => {
            let input = app.ui.current_input.clone();
            match app.ui.input_mode {
                Some(InputMode::SearchFeed) => {
                    app.feed.query.search = input.trim().to_string();
                    app.feed.clamp_selection();
                    app.ui.close_input();
                }
                Some(InputMode::NewComment) => submit_comment(app, &input),
                None => app.ui.close_input(),
            }
        }
        _ => {}
    }
}

fn submit_comment(app: &mut App, input: &str) {
    let Some(post_id) = app.feed.selected_post_id.clone() else {
        app.ui.close_input();
        return;
    };
    match ComposeService::validate(input, app.config.max_comment_length) {
        Ok(text) => {
            let mentions = ComposeService::extract_mentions(&text);
            app.dispatch(FeedAction::AddComment { post_id: post_id.clone(), text });
            // make sure the fresh comment is visible
            if !app.feed.comments_expanded(&post_id) {
                app.feed.toggle_comments(&post_id);
            }
            app.ui.close_input();
            if mentions.is_empty() {
                app.toast("Comment posted");
            } else {
                app.toast(format!("Comment posted, mentioning @{}", mentions.join(", @")));
            }
        }
        Err(reason) => {
            app.set_notification(reason, None, false);
        }
    }
}
