//! Community feed screens: the filtered list and the post detail view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::feed::visible_posts;
use crate::global_prefs::global_prefs;
use crate::model::{Category, Comment, MediaKind, Post};
use crate::ui::time_format::{format_date_long, format_feed_date};

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Impact => Color::Green,
        Category::Scholarship => Color::Cyan,
        Category::Healthcare => Color::LightBlue,
        Category::Empowerment => Color::Magenta,
        Category::News => Color::Gray,
        Category::Story => Color::LightMagenta,
        Category::Urgent => Color::Red,
    }
}

pub fn draw_feed_list(f: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    draw_query_header(f, app, layout[0]);

    let (relative, badges) = {
        let prefs = global_prefs();
        (prefs.relative_timestamps, prefs.show_engagement_badges)
    };
    let now = chrono::Local::now();

    let visible = visible_posts(app.feed.store.posts(), &app.feed.query);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|post| feed_list_item(post, now, relative, badges))
        .collect();

    let title = format!(" Community Feed ({}) ", visible.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::Rgb(25, 35, 45)))
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, layout[1], &mut app.feed.list_state);
}

fn draw_query_header(f: &mut Frame, app: &App, area: Rect) {
    let query = &app.feed.query;
    let category = query
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| "All".to_string());
    let mut spans = vec![
        Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(category, Style::default().fg(Color::Cyan)),
        Span::styled("  Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.sort.label(), Style::default().fg(Color::Cyan)),
    ];
    if !query.search.is_empty() {
        spans.push(Span::styled("  Search: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("\"{}\"", query.search),
            Style::default().fg(Color::Yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn feed_list_item(
    post: &Post,
    now: chrono::DateTime<chrono::Local>,
    relative: bool,
    badges: bool,
) -> ListItem<'static> {
    let color = category_color(post.category);

    let mut header = Vec::new();
    if post.pinned {
        header.push(Span::styled("📌 ", Style::default().fg(Color::Yellow)));
    }
    header.push(Span::styled(
        format!("[{}] ", post.category.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    header.push(Span::styled(
        format!("{} {}", post.avatar, post.author),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    header.push(Span::styled(
        format!(" · {}", format_feed_date(post.date, now, relative)),
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(location) = &post.location {
        header.push(Span::styled(
            format!(" · {}", location),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let preview: String = {
        let flat = post.content.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut p: String = flat.chars().take(90).collect();
        if flat.chars().count() > 90 {
            p.push('…');
        }
        p
    };

    let mut counters = vec![
        Span::styled(
            format!("♥ {}", post.likes),
            if post.user_liked {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::styled(
            format!("  💬 {}", post.comment_count()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("  ↗ {}", post.shares), Style::default().fg(Color::Gray)),
    ];
    if post.bookmarked {
        counters.push(Span::styled("  🔖", Style::default().fg(Color::Yellow)));
    }
    if badges {
        counters.push(Span::styled(
            format!("  ⚡{}", post.engagement),
            Style::default().fg(Color::LightYellow),
        ));
    }

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(preview, Style::default().fg(Color::Gray))),
        Line::from(counters),
        Line::from(""),
    ])
}

pub fn draw_post_view(f: &mut Frame, app: &mut App, area: Rect) {
    let post = app
        .feed
        .selected_post_id
        .as_deref()
        .and_then(|id| app.feed.store.find(id));

    let Some(post) = post else {
        let empty = Paragraph::new("Post no longer available.")
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let expanded = app
        .feed
        .selected_post_id
        .as_deref()
        .map(|id| app.feed.comments_expanded(id))
        .unwrap_or(false);

    let mut lines: Vec<Line> = Vec::new();
    let color = category_color(post.category);

    // --- header ---
    let mut header = Vec::new();
    if post.pinned {
        header.push(Span::styled("📌 PINNED  ", Style::default().fg(Color::Yellow)));
    }
    header.push(Span::styled(
        format!("[{}]", post.category.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(header));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {}", post.avatar, post.author),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", post.role), Style::default().fg(Color::Cyan)),
    ]));
    let mut meta = vec![Span::styled(
        format_date_long(post.date),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(location) = &post.location {
        meta.push(Span::styled(
            format!(" · {}", location),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(meta));
    lines.push(Line::from(""));

    // --- body ---
    lines.push(Line::from(Span::raw(post.content.clone())));
    lines.push(Line::from(""));

    if let Some(media) = &post.media {
        let (icon, label) = match media.kind {
            MediaKind::Image => ("🖼", "image"),
            MediaKind::Video => ("🎞", "video"),
            MediaKind::Document => ("📄", "document"),
        };
        lines.push(Line::from(Span::styled(
            format!("{} attached {}: {}", icon, label, media.source),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !post.tags.is_empty() {
        let tags = post
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(tags, Style::default().fg(Color::Blue))));
    }
    if let Some(cta) = &post.cta {
        lines.push(Line::from(Span::styled(
            format!("➤ {} ({})", cta.label, cta.target),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    // --- reactions bar ---
    let mut reaction_spans = Vec::new();
    for (i, (kind, state)) in post.reactions.iter().enumerate() {
        let style = if state.user_reacted {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        reaction_spans.push(Span::styled(
            format!("[{}] {} {}   ", i + 1, kind.glyph(), state.count),
            style,
        ));
    }
    lines.push(Line::from(reaction_spans));

    let like_style = if post.user_liked {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut stats = vec![
        Span::styled(format!("♥ {} likes", post.likes), like_style),
        Span::styled(
            format!(
                "   {} reactions   👁 {} views   ↗ {} shares",
                post.reactions.total(),
                post.views,
                post.shares
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if post.bookmarked {
        stats.push(Span::styled("   🔖 bookmarked", Style::default().fg(Color::Yellow)));
    }
    lines.push(Line::from(stats));
    lines.push(Line::from(""));

    // --- comments ---
    let count = post.comment_count();
    if expanded {
        lines.push(Line::from(Span::styled(
            format!("─── Comments ({}) ───", count),
            Style::default().fg(Color::Cyan),
        )));
        if post.comments.is_empty() {
            lines.push(Line::from(Span::styled(
                "No comments yet. Press [n] to write the first one.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let now = chrono::Local::now();
        let relative = global_prefs().relative_timestamps;
        for comment in &post.comments {
            push_comment_lines(&mut lines, comment, now, relative, 0);
            for reply in &comment.replies {
                push_comment_lines(&mut lines, reply, now, relative, 1);
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            format!("💬 {} comments (press [c] to show)", count),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.feed.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .title(" Post "),
        );
    f.render_widget(paragraph, area);
}

fn push_comment_lines(
    lines: &mut Vec<Line<'static>>,
    comment: &Comment,
    now: chrono::DateTime<chrono::Local>,
    relative: bool,
    depth: usize,
) {
    let indent = "  ".repeat(depth + 1);
    let mut header = vec![
        Span::raw(indent.clone()),
        Span::styled(
            format!("{} {}", comment.avatar, comment.author),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(role) = &comment.role {
        header.push(Span::styled(
            format!(" ({})", role),
            Style::default().fg(Color::Cyan),
        ));
    }
    header.push(Span::styled(
        format!(" · {}", format_feed_date(comment.date, now, relative)),
        Style::default().fg(Color::DarkGray),
    ));
    if comment.likes > 0 {
        header.push(Span::styled(
            format!(" · ♥ {}", comment.likes),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(header));
    lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(comment.content.clone(), Style::default().fg(Color::Gray)),
    ]));
}
