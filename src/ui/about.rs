//! Static mission and impact page.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

const MISSION: &str = "The Harborlight Foundation exists so that no child's future \
is decided by where they were born. Since 2009 we have worked alongside rural \
communities on education, healthcare, clean water, and economic empowerment: \
projects chosen by the communities themselves, run by local teams, and \
reported transparently down to the last cent.";

const MILESTONES: [(&str, &str); 5] = [
    ("2009", "Founded with a single scholarship class of 14 students"),
    ("2014", "First mobile clinic van begins its village rotation"),
    ("2018", "Well-drilling program launches; 10 wells in the first year"),
    ("2022", "Women's cooperative program graduates its 500th member"),
    ("2024", "312 scholarships awarded; 41 wells now flowing"),
];

pub fn draw_about(f: &mut Frame, app: &mut App, area: Rect) {
    let _ = app;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let mission = Paragraph::new(MISSION)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .title(" Our Mission ")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(mission, layout[0]);

    let mut lines = Vec::new();
    for (year, event) in MILESTONES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", year),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(event, Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(""));
    }
    let history = Paragraph::new(lines).block(
        Block::default()
            .title(" Milestones ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, layout[1]);
}
