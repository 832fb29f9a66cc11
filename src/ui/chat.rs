//! Helpline chat widget.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::state::ChatAuthor;
use crate::ui::time_format::format_message_timestamp;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    draw_message_log(f, app, layout[0]);
    draw_chat_input(f, app, layout[1]);
}

fn draw_message_log(f: &mut Frame, app: &App, area: Rect) {
    let now = chrono::Local::now();
    let mut lines: Vec<Line> = Vec::new();

    for message in &app.chat.messages {
        let (name, color) = match message.author {
            ChatAuthor::Guide => ("Harborlight Guide", Color::Cyan),
            ChatAuthor::Visitor => ("You", Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", format_message_timestamp(message.timestamp, now)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::raw(message.content.clone())));
        lines.push(Line::from(""));
    }

    if app.chat.is_guide_typing() {
        let dots = match (app.ui.tick_count / 6) % 4 {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        };
        lines.push(Line::from(Span::styled(
            format!("Harborlight Guide is typing{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // keep the tail in view, minus any manual scrollback
    let inner_height = area.height.saturating_sub(2) as usize;
    let overflow = lines.len().saturating_sub(inner_height);
    let scroll = overflow.saturating_sub(app.chat.scroll_offset) as u16;

    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(" Helpline ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(log, area);
}

fn draw_chat_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(format!("{}▏", app.chat.input)).block(
        Block::default()
            .title(" Your question ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);
}
