use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::embed::{resolve_embed, VideoHost};
use crate::model::Category;
use crate::ui::colors::{accent_color, BORDER, HIGHLIGHT_BG, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::truncate;

/// Category index: list on the left, preview of the focused one on the right
pub fn render_edits(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = app
        .registry
        .iter()
        .map(|c| {
            let accent = accent_color(&c.accent_color);
            ListItem::new(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(accent)),
                Span::styled(c.name.clone(), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(format!("  ({})", c.video_count()), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" My Edits ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER)),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    f.render_stateful_widget(list, chunks[0], &mut app.category_list_state);

    let preview = match app.selected_category() {
        Some(category) => category_preview(category),
        None => vec![Line::from(Span::styled(
            "No categories loaded",
            Style::default().fg(TEXT_DIM),
        ))],
    };
    let p = Paragraph::new(preview).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER)),
    );
    f.render_widget(p, chunks[1]);
}

fn category_preview(category: &Category) -> Vec<Line<'static>> {
    let accent = accent_color(&category.accent_color);
    let mut lines = vec![
        Line::from(Span::styled(
            category.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            category.description.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
    ];
    for (number, video) in category.numbered_videos() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", number), Style::default().fg(accent)),
            Span::styled(truncate(&video.title, 60), Style::default().fg(TEXT_PRIMARY)),
        ]));
    }
    lines
}

/// Videos of the active category
pub fn render_videos(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(category) = app.active_category().cloned() else {
        let p = Paragraph::new("Category not found. Press Esc to go back to the categories.")
            .style(Style::default().fg(TEXT_SECONDARY))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };
    let accent = accent_color(&category.accent_color);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Videos
            Constraint::Length(3), // "Want to see more?"
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            category.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            category.description.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let items: Vec<ListItem> = category
        .numbered_videos()
        .map(|(number, video)| {
            let host = VideoHost::classify(&video.link);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", number), Style::default().fg(accent)),
                Span::styled(format!("[{:<3}] ", host.badge()), Style::default().fg(TEXT_DIM)),
                Span::styled(truncate(&video.title, 48), Style::default().fg(TEXT_PRIMARY)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    f.render_stateful_widget(list, body[0], &mut app.video_list_state);

    let details = match category.videos.get(app.selected_video_index) {
        Some(video) => {
            let host = VideoHost::classify(&video.link);
            let playback = if resolve_embed(&video.link).is_some() {
                "Plays inline"
            } else {
                "Opens on the hosting platform"
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    video.title.clone(),
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            if let Some(description) = &video.description {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(TEXT_SECONDARY),
                )));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled("Source: ", Style::default().fg(TEXT_DIM)),
                Span::styled(host.display_name(), Style::default().fg(accent)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Player: ", Style::default().fg(TEXT_DIM)),
                Span::styled(playback, Style::default().fg(TEXT_SECONDARY)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Thumbnail: ", Style::default().fg(TEXT_DIM)),
                Span::styled(video.thumbnail.clone(), Style::default().fg(TEXT_SECONDARY)),
            ]));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No videos in this category yet.",
            Style::default().fg(TEXT_DIM),
        ))],
    };
    let p = Paragraph::new(details).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER)),
    );
    f.render_widget(p, body[1]);

    let more = Paragraph::new(Line::from(vec![
        Span::styled(" Want to see more? ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled("press ", Style::default().fg(TEXT_DIM)),
        Span::styled("m", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(" to open the full collection", Style::default().fg(TEXT_DIM)),
    ]))
    .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(BORDER)));
    f.render_widget(more, chunks[2]);
}

/// Search results across every category
pub fn render_search_results(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .search_results
        .iter()
        .map(|hit| {
            ListItem::new(Line::from(vec![
                Span::styled(truncate(&hit.title, 60), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(format!("  {}", hit.category_name), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let title = if app.search_query.is_empty() {
        " Type to search ".to_string()
    } else {
        format!(" {} result(s) ", app.search_results.len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER)),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    f.render_stateful_widget(list, area, &mut app.search_list_state);
}
