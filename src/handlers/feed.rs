use crate::app::App;
use crate::feed::FeedAction;
use crate::model::ReactionKind;
use crate::state::{AppMode, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle feed-related input (feed list and post detail)
pub fn handle_feed_input(key: KeyEvent, app: &mut App) {
    match app.ui.mode {
        AppMode::Feed => handle_feed_list_input(key, app),
        AppMode::PostView => handle_post_view_input(key, app),
        _ => {}
    }
}

fn handle_feed_list_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => app.feed.select_next(),
        KeyCode::Up => app.feed.select_prev(),
        KeyCode::Enter => {
            if let Some(post_id) = app.feed.selected_id_in_view() {
                app.feed.open_post(post_id);
                app.ui.set_mode(AppMode::PostView);
            }
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            if let Some(post_id) = app.feed.selected_id_in_view() {
                toggle_like(app, post_id);
            }
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            if let Some(post_id) = app.feed.selected_id_in_view() {
                toggle_bookmark(app, post_id);
            }
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.feed.query.cycle_category();
            app.feed.clamp_selection();
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.feed.query.sort = app.feed.query.sort.next();
            app.feed.clamp_selection();
        }
        KeyCode::Char('/') => {
            app.enter_input_mode(InputMode::SearchFeed);
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if !app.feed.query.search.is_empty() {
                app.feed.query.search.clear();
                app.feed.clamp_selection();
                app.toast("Search cleared");
            }
        }
        KeyCode::Esc => {
            app.ui.set_mode(AppMode::MainMenu);
        }
        _ => {}
    }
}

fn handle_post_view_input(key: KeyEvent, app: &mut App) {
    let Some(post_id) = app.feed.selected_post_id.clone() else {
        app.ui.set_mode(AppMode::Feed);
        return;
    };

    match key.code {
        KeyCode::Down => {
            app.feed.detail_scroll = app.feed.detail_scroll.saturating_add(1);
        }
        KeyCode::Up => {
            app.feed.detail_scroll = app.feed.detail_scroll.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Char('L') => toggle_like(app, post_id),
        KeyCode::Char('b') | KeyCode::Char('B') => toggle_bookmark(app, post_id),
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.dispatch(FeedAction::ToggleComments { post_id });
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.enter_input_mode(InputMode::NewComment);
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            let kind = ReactionKind::ALL[index];
            toggle_reaction(app, post_id, kind);
        }
        KeyCode::Esc => {
            app.feed.selected_post_id = None;
            app.ui.set_mode(AppMode::Feed);
        }
        _ => {}
    }
}

fn toggle_like(app: &mut App, post_id: String) {
    app.dispatch(FeedAction::Like { post_id: post_id.clone() });
    let liked = app
        .feed
        .store
        .find(&post_id)
        .map(|p| p.user_liked)
        .unwrap_or(false);
    app.toast(if liked { "Liked" } else { "Like removed" });
}

fn toggle_bookmark(app: &mut App, post_id: String) {
    app.dispatch(FeedAction::Bookmark { post_id: post_id.clone() });
    let bookmarked = app
        .feed
        .store
        .find(&post_id)
        .map(|p| p.bookmarked)
        .unwrap_or(false);
    app.toast(if bookmarked { "Added to bookmarks" } else { "Removed from bookmarks" });
}

fn toggle_reaction(app: &mut App, post_id: String, kind: ReactionKind) {
    app.dispatch(FeedAction::React { post_id: post_id.clone(), kind });
    let reacted = app
        .feed
        .store
        .find(&post_id)
        .map(|p| p.reactions.get(kind).user_reacted)
        .unwrap_or(false);
    if reacted {
        app.toast(format!("{} {}", kind.glyph(), kind.label()));
    } else {
        app.toast(format!("{} removed", kind.label()));
    }
}
