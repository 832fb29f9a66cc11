//! Popups: modal input, toast notifications, quit confirmation.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::state::InputMode;

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw_input_popup(f: &mut Frame, app: &App) {
    let title = match app.ui.input_mode {
        Some(InputMode::SearchFeed) => "Search the feed",
        Some(InputMode::NewComment) => "Write a comment",
        None => "Input",
    };

    let input_str = app.ui.current_input.as_str();
    let base_area = draw_centered_rect(f.area(), 60, 25);
    let input_inner_width = base_area.width.saturating_sub(2);

    let estimated_lines = if input_inner_width > 0 && !input_str.is_empty() {
        (input_str.len() as u16 + input_inner_width - 1) / input_inner_width
    } else {
        1
    };
    let min_height = (estimated_lines + 4).clamp(8, 30);
    let height_percent = if base_area.height < min_height {
        ((min_height as f32 / f.area().height as f32) * 100.0).min(80.0) as u16
    } else {
        25
    };

    let area = draw_centered_rect(f.area(), 60, height_percent);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let input_field = Paragraph::new(input_str).wrap(Wrap { trim: true }).block(block);
    f.render_widget(Clear, area);
    f.render_widget(input_field, area);

    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    if inner_area.width > 0 {
        let col = (input_str.len() as u16) % inner_area.width;
        let row = (input_str.len() as u16) / inner_area.width;
        let cursor_x = inner_area.x + col;
        let cursor_y = inner_area.y + row;
        if cursor_y < inner_area.y + inner_area.height {
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

pub fn draw_notification_popup(f: &mut Frame, app: &App) {
    let Some((message, _, minimal)) = &app.notifications.current_notification else {
        return;
    };

    if *minimal {
        // slim toast pinned to the bottom-right corner
        let width = (message.chars().count() as u16 + 4).min(f.area().width);
        let area = Rect {
            x: f.area().width.saturating_sub(width + 1),
            y: f.area().height.saturating_sub(4),
            width,
            height: 3,
        };
        let toast = Paragraph::new(message.as_str()).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(Clear, area);
        f.render_widget(toast, area);
    } else {
        let area = draw_centered_rect(f.area(), 50, 20);
        let popup = Paragraph::new(message.as_str())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Notice ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red)),
            );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

pub fn draw_quit_confirm_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 40, 20);
    let yes_style = if app.ui.quit_confirm_selected == 0 {
        Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let no_style = if app.ui.quit_confirm_selected == 1 {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        Line::from(""),
        Line::from("Leave the Harborlight hub?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Yes  ", yes_style),
            Span::raw("     "),
            Span::styled("  No  ", no_style),
        ]),
    ];
    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
