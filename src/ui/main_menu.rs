//! Main menu screen with the impact status strip.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::handlers::navigation::MAIN_MENU_ITEMS;

pub fn draw_main_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(5)])
        .margin(1)
        .split(area);

    let items: Vec<ListItem> = MAIN_MENU_ITEMS
        .iter()
        .map(|(name, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", name),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("◆ WELCOME ◆")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 10))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    f.render_stateful_widget(list, layout[0], &mut app.ui.main_menu_state);

    draw_impact_strip(f, app, layout[1]);
}

fn draw_impact_strip(f: &mut Frame, app: &App, area: Rect) {
    let tick = app.ui.tick_count;
    let pulse_char = if tick % 20 < 10 { "●" } else { "○" };

    let strip = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let cells: [(&str, &str, &str, Color); 3] = [
        ("◆ SCHOLARS ◆", "312", "scholarships awarded in 2024", Color::Cyan),
        ("◆ CLEAN WATER ◆", "41 wells", "serving ~23,000 people daily", Color::Green),
        ("◆ PROGRAM SPEND ◆", "87%", "of every dollar to programs", Color::Yellow),
    ];

    for (i, (title, headline, detail, color)) in cells.iter().enumerate() {
        let text = vec![
            Line::from(vec![
                Span::styled(pulse_char, Style::default().fg(*color)),
                Span::raw(" "),
                Span::styled(
                    *headline,
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(*detail, Style::default().fg(Color::Gray))),
        ];
        let block = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title(*title)
                .title_style(Style::default().fg(*color))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(*color)),
        );
        f.render_widget(block, strip[i]);
    }
}
