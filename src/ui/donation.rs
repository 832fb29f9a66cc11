//! Multi-step donation form.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::state::donation::{DetailsFocus, AMOUNT_PRESETS, FUNDS};
use crate::state::{DonationStep, Frequency};

const STEPS: [(DonationStep, &str); 4] = [
    (DonationStep::Amount, "Amount"),
    (DonationStep::Frequency, "Frequency"),
    (DonationStep::Details, "Details"),
    (DonationStep::Review, "Review"),
];

pub fn draw_donation(f: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(2)])
        .margin(1)
        .split(area);

    draw_step_tracker(f, app, layout[0]);

    match app.donation.step {
        DonationStep::Amount => draw_amount_step(f, app, layout[1]),
        DonationStep::Frequency => draw_frequency_step(f, app, layout[1]),
        DonationStep::Details => draw_details_step(f, app, layout[1]),
        DonationStep::Review => draw_review_step(f, app, layout[1]),
        DonationStep::Processing => draw_processing_step(f, app, layout[1]),
        DonationStep::Confirmed => draw_confirmed_step(f, app, layout[1]),
    }

    if let Some(error) = &app.donation.error {
        let warning = Paragraph::new(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(warning, layout[2]);
    }
}

fn draw_step_tracker(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (step, label)) in STEPS.iter().enumerate() {
        let style = if *step == app.donation.step {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}. {}", i + 1, label), style));
        if i + 1 < STEPS.len() {
            spans.push(Span::styled("  ▸  ", Style::default().fg(Color::DarkGray)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn form_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
}

fn draw_amount_step(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.donation;
    let mut lines = vec![
        Line::from("How much would you like to give?"),
        Line::from(""),
    ];

    let mut amount_spans = Vec::new();
    for (i, preset) in AMOUNT_PRESETS.iter().enumerate() {
        let style = if form.preset_selected == i {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        amount_spans.push(Span::styled(format!("  ${}  ", preset), style));
        amount_spans.push(Span::raw(" "));
    }
    let custom_label = if form.custom_amount.is_empty() {
        "  $ custom…  ".to_string()
    } else {
        format!("  ${}▏ ", form.custom_amount)
    };
    let custom_style = if form.custom_slot_selected() {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    amount_spans.push(Span::styled(custom_label, custom_style));
    lines.push(Line::from(amount_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type digits for a custom amount. 87% of every dollar goes directly to programs.",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).block(form_block("Your gift")), area);
}

fn draw_frequency_step(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.donation;
    let selected =
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD);
    let unselected = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from("How often, and toward what?"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  One-time  ",
                if form.frequency == Frequency::OneTime { selected } else { unselected },
            ),
            Span::raw("   "),
            Span::styled(
                "  Monthly  ",
                if form.frequency == Frequency::Monthly { selected } else { unselected },
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Designated fund (↑↓):", Style::default().fg(Color::Gray))),
    ];
    for (i, fund) in FUNDS.iter().enumerate() {
        let marker = if form.fund_selected == i { "● " } else { "○ " };
        let style = if form.fund_selected == i {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("  {}{}", marker, fund), style)));
    }

    f.render_widget(Paragraph::new(lines).block(form_block("Gift options")), area);
}

fn draw_details_step(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.donation;
    let focused = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let blurred = Style::default().fg(Color::Gray);

    let name_style = if form.details_focus == DetailsFocus::Name { focused } else { blurred };
    let email_style = if form.details_focus == DetailsFocus::Email { focused } else { blurred };

    let cursor = "▏";
    let name_value = if form.details_focus == DetailsFocus::Name {
        format!("{}{}", form.donor_name, cursor)
    } else {
        form.donor_name.clone()
    };
    let email_value = if form.details_focus == DetailsFocus::Email {
        format!("{}{}", form.donor_email, cursor)
    } else {
        form.donor_email.clone()
    };

    let lines = vec![
        Line::from("Who is this gift from? (for the thank-you note only)"),
        Line::from(""),
        Line::from(vec![Span::styled("  Name:  ", name_style), Span::raw(name_value)]),
        Line::from(""),
        Line::from(vec![Span::styled("  Email: ", email_style), Span::raw(email_value)]),
        Line::from(""),
        Line::from(Span::styled(
            "Nothing is sent anywhere; this is a local demonstration.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(form_block("Your details")), area);
}

fn draw_review_step(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.donation;
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from("Please review your gift:"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Amount:     ", label),
            Span::styled(format!("${}", form.amount_text()), value),
        ]),
        Line::from(vec![
            Span::styled("  Frequency:  ", label),
            Span::styled(form.frequency.label(), value),
        ]),
        Line::from(vec![
            Span::styled("  Fund:       ", label),
            Span::styled(form.fund_label(), value),
        ]),
        Line::from(vec![
            Span::styled("  From:       ", label),
            Span::styled(format!("{} <{}>", form.donor_name, form.donor_email), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Confirm gift   [e] Start over   [Esc] Back",
            Style::default().fg(Color::Green),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(form_block("Review")), area);
}

fn draw_processing_step(f: &mut Frame, app: &App, area: Rect) {
    let spinner = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let frame = spinner[(app.ui.tick_count / 2) as usize % spinner.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Processing your gift…", frame),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(form_block("One moment")),
        area,
    );
}

fn draw_confirmed_step(f: &mut Frame, app: &App, area: Rect) {
    let reference = app.donation.reference.as_deref().unwrap_or("—");
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔ Thank you! Your gift has been recorded.",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::styled(reference, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Back to the menu",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(form_block("Confirmed")),
        area,
    );
}
