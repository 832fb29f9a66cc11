//! Banner drawing utilities for the UI.

use figlet_rs::FIGfont;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

const TITLE: &str = "HARBORLIGHT";
const TAGLINE: &str = "community hub · every gift carries light";

/// Figlet title with a slow lighthouse-sweep highlight driven by the
/// tick counter.
pub fn draw_full_banner(f: &mut Frame, app: &App, area: Rect) {
    let lines = styled_banner_lines(area.width, app.ui.tick_count);
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}

pub fn draw_min_banner(f: &mut Frame, app: &App, area: Rect) {
    let _ = app;
    let line = Line::from(vec![
        Span::styled(
            "⚓ HARBORLIGHT",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(TAGLINE, Style::default().fg(Color::DarkGray)),
    ]);
    let banner = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}

fn styled_banner_lines(width: u16, tick_count: u64) -> Vec<Line<'static>> {
    let Ok(font) = FIGfont::standard() else {
        return fallback_lines();
    };
    let Some(figure) = font.convert(TITLE) else {
        return fallback_lines();
    };

    let figlet_string = figure.to_string();
    let figlet_width = figlet_string
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    // figlet output for a wide title overflows narrow terminals
    if figlet_width > width as usize {
        return fallback_lines();
    }

    // the "beam": a band of brighter columns sweeping left to right
    let beam_width = (figlet_width / 6).max(3);
    let beam_center = (tick_count / 2) as usize % (figlet_width + beam_width);

    let mut lines: Vec<Line<'static>> = figlet_string
        .lines()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    let in_beam = x + beam_width >= beam_center && x <= beam_center;
                    let style = if ch == ' ' {
                        Style::default()
                    } else if in_beam {
                        Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Yellow)
                    };
                    Span::styled(ch.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn fallback_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("⚓ {} ⚓", TITLE),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
    ]
}
