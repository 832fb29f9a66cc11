//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod about;
pub mod banner;
pub mod chat;
pub mod donation;
pub mod feed;
pub mod main_menu;
pub mod popups;
pub mod preferences;
pub mod time_format;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::state::AppMode;
use crate::ui::about::draw_about;
use crate::ui::banner::{draw_full_banner, draw_min_banner};
use crate::ui::chat::draw_chat;
use crate::ui::donation::draw_donation;
use crate::ui::feed::{draw_feed_list, draw_post_view};
use crate::ui::main_menu::draw_main_menu;
use crate::ui::popups::{draw_input_popup, draw_notification_popup, draw_quit_confirm_popup};
use crate::ui::preferences::draw_preferences;

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let (banner_height, use_full_banner) = match app.ui.mode {
        AppMode::MainMenu | AppMode::About => (9, true),
        _ => (3, false),
    };
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(banner_height), // Banner
            Constraint::Min(0),                // Main content
            Constraint::Length(3),             // Footer
        ])
        .split(size);

    if use_full_banner {
        draw_full_banner(f, app, chunks[0]);
    } else {
        draw_min_banner(f, app, chunks[0]);
    }

    let help_text = match app.ui.mode {
        AppMode::MainMenu => "[↑↓] Navigate | [Enter] Select | [F2] Preferences | [Ctrl+C] Quit",
        AppMode::Feed => {
            "[↑↓] Nav | [Enter] Open | [l] Like | [b] Bookmark | [f] Filter | [s] Sort\n[/] Search | [x] Clear search | [Esc] Menu"
        }
        AppMode::PostView => {
            "[l] Like | [1-5] React | [b] Bookmark | [c] Comments | [n] New comment\n[↑↓] Scroll | [Esc] Back"
        }
        AppMode::Donate => "[←→/Tab] Choose | [↑↓] Fund | [Enter] Continue | [Esc] Back",
        AppMode::Chat => "Type your question | [Enter] Send | [PgUp/PgDn] Scroll | [Esc] Menu",
        AppMode::Preferences => "[↑↓] Navigate | [Enter/Space] Toggle | [Esc] Done",
        AppMode::Input => "[Enter] Submit | [Esc] Cancel",
        AppMode::About => "[Esc] Back to menu",
    };
    let status_text = {
        let bookmarks = app.feed.bookmarked_count();
        if bookmarks == 1 {
            "1 bookmark · local session".to_string()
        } else {
            format!("{} bookmarks · local session", bookmarks)
        }
    };

    let footer_chunks = Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    f.render_widget(
        Paragraph::new(help_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(status_text, Style::default().fg(Color::Yellow)))
            .alignment(ratatui::layout::Alignment::Right)
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[1],
    );

    let main_area = chunks[1];
    match app.ui.mode {
        AppMode::MainMenu => draw_main_menu(f, app, main_area),
        AppMode::Feed => draw_feed_list(f, app, main_area),
        AppMode::PostView => draw_post_view(f, app, main_area),
        AppMode::Donate => draw_donation(f, app, main_area),
        AppMode::Chat => draw_chat(f, app, main_area),
        AppMode::About => draw_about(f, app, main_area),
        AppMode::Preferences => draw_preferences(f, app, main_area),
        AppMode::Input => {
            // draw the screen the popup floats over, then the popup
            match app.ui.input_return_mode {
                AppMode::PostView => draw_post_view(f, app, main_area),
                _ => draw_feed_list(f, app, main_area),
            }
            draw_input_popup(f, app);
        }
    }

    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
    draw_notification_popup(f, app);
}
