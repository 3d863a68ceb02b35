use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::content::{HERO_STATS, OWNER_NAME};
use crate::ui::colors::{BORDER, BRAND_PINK, BRAND_TEAL, BRAND_VIOLET, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};

pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Hero
            Constraint::Length(5), // Stats
        ])
        .split(area);

    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Hi, I'm",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(Span::styled(
            OWNER_NAME,
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Video Editor", Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD)),
            Span::styled("  ·  ", Style::default().fg(TEXT_DIM)),
            Span::styled("Storyteller", Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD)),
            Span::styled("  ·  ", Style::default().fg(TEXT_DIM)),
            Span::styled("Graphic Designer", Style::default().fg(BRAND_VIOLET).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} galleries · {} edits. Press Enter to browse my work.",
                app.registry.len(),
                app.registry.total_videos()
            ),
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let p = Paragraph::new(hero)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, layout[0]);

    let constraints: Vec<Constraint> = HERO_STATS
        .iter()
        .map(|_| Constraint::Ratio(1, HERO_STATS.len() as u32))
        .collect();
    let stat_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(layout[1]);

    for (stat, stat_area) in HERO_STATS.iter().zip(stat_areas.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label, Style::default().fg(TEXT_DIM))),
        ];
        let p = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        );
        f.render_widget(p, *stat_area);
    }
}
