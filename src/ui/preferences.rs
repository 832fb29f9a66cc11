//! Preferences screen (persisted via global prefs).

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::global_prefs::global_prefs;

pub fn draw_preferences(f: &mut Frame, app: &mut App, area: Rect) {
    let prefs = global_prefs();
    let rows: [(&str, String); 3] = [
        (
            "Relative timestamps",
            if prefs.relative_timestamps { "on".to_string() } else { "off".to_string() },
        ),
        (
            "Engagement badges",
            if prefs.show_engagement_badges { "on".to_string() } else { "off".to_string() },
        ),
        ("Default sort", prefs.default_sort.label().to_string()),
    ];
    drop(prefs);

    let mut lines = vec![Line::from("")];
    for (i, (name, value)) in rows.iter().enumerate() {
        let marker = if app.ui.preferences_selected == i { "» " } else { "  " };
        let style = if app.ui.preferences_selected == i {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<24}", marker, name), style),
            Span::styled(value.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Preferences are saved to your home directory.",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Preferences ")
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}
