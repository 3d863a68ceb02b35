use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::carousel::CarouselState;
use crate::embed::{PlaybackMode, VideoHost};
use crate::ui::colors::{accent_color, BORDER, BRAND_TEAL, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::centered_rect;

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(BRAND_TEAL));

    let area = centered_rect(60, 60, area);
    f.render_widget(Clear, area);

    let shortcuts = vec![
        "  Tab / 1-5   - Switch Page",
        "  j / k       - Navigate Down / Up",
        "  Enter       - Open / Play",
        "  /           - Search Videos (Edits)",
        "  o           - Open Link Externally",
        "  m           - Open Full Collection",
        "  y           - Copy Link",
        "  \u{2190} / \u{2192}       - Switch Tab / Step Lightbox",
        "  Esc         - Back / Close",
        "  q           - Quit",
    ];
    let p = Paragraph::new(shortcuts.join("\n"))
        .style(Style::default().fg(Color::White))
        .block(block);
    f.render_widget(p, area);
}

/// Inline player preview or the external-content fallback
pub fn render_video_modal(f: &mut Frame, app: &App, area: Rect) {
    let Some(modal) = &app.video_modal else {
        return;
    };
    let accent = app
        .registry
        .lookup(&modal.category_id)
        .map(|c| accent_color(&c.accent_color))
        .unwrap_or(BRAND_TEAL);

    let area = centered_rect(80, 70, area);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", modal.video.title),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(4),    // Player / fallback
            Constraint::Length(2), // Actions
        ])
        .split(inner);

    if let Some(description) = &modal.video.description {
        let p = Paragraph::new(description.as_str())
            .style(Style::default().fg(TEXT_SECONDARY))
            .wrap(Wrap { trim: true });
        f.render_widget(p, chunks[0]);
    }

    let body = match &modal.mode {
        PlaybackMode::Inline(target) => vec![
            Line::from(Span::styled(
                "▶  Embedded player",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(target.url.clone(), Style::default().fg(TEXT_PRIMARY))),
            Line::from(Span::styled(
                format!("video id {}", target.video_id),
                Style::default().fg(TEXT_DIM),
            )),
        ],
        PlaybackMode::External(link) => vec![
            Line::from(Span::styled(
                "External Content",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "This video is hosted on {}",
                    VideoHost::classify(link).display_name()
                ),
                Style::default().fg(TEXT_DIM),
            )),
        ],
    };
    let player = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER)),
        );
    f.render_widget(player, chunks[1]);

    let open_label = if modal.mode.is_inline() {
        "View on Platform"
    } else {
        "Open Video"
    };
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let actions = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", key_style),
        Span::styled(format!("{}  ", open_label), Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" y ", key_style),
        Span::styled("Copy Link  ", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" Esc ", key_style),
        Span::styled("Close", Style::default().fg(TEXT_PRIMARY)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(actions, chunks[2]);
}

pub fn render_lightbox(f: &mut Frame, state: &CarouselState, area: Rect) {
    let image = state.current();
    let area = centered_rect(60, 50, area);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            image.label,
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(image.path, Style::default().fg(TEXT_DIM))),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{2190} ", Style::default().fg(BRAND_TEAL)),
            Span::styled(state.position_label(), Style::default().fg(TEXT_SECONDARY)),
            Span::styled(" \u{2192}", Style::default().fg(BRAND_TEAL)),
        ]),
    ];

    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", state.kind().label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(BRAND_TEAL)),
    );
    f.render_widget(p, area);
}
