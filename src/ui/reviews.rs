use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use crate::app::App;
use crate::carousel::GalleryKind;
use crate::content::{ReviewsTab, REVIEWS};
use crate::ui::colors::{BORDER, BRAND_PINK, BRAND_TEAL, HIGHLIGHT_BG, STAR_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::stars;

pub fn render_reviews(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = ReviewsTab::all()
        .iter()
        .map(|t| Line::from(t.display_name()))
        .collect();
    let selected = ReviewsTab::all()
        .iter()
        .position(|t| *t == app.reviews_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER)))
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(Style::default().fg(Color::Black).bg(BRAND_TEAL).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.gallery_kind() {
        None => render_review_cards(f, app, chunks[1]),
        Some(kind) => render_gallery(f, app, kind, chunks[1]),
    }
}

fn render_review_cards(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            REVIEWS
                .iter()
                .map(|_| Constraint::Ratio(1, REVIEWS.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (i, (review, row)) in REVIEWS.iter().zip(rows.iter()).enumerate() {
        let focused = i == app.selected_review_index;
        let lines = vec![
            Line::from(vec![
                Span::styled(stars(review.rating), Style::default().fg(STAR_GOLD)),
                Span::styled(format!("  {}", review.tag), Style::default().fg(BRAND_PINK)),
            ]),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", review.quote),
                Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::ITALIC),
            )),
        ];
        let mut block = Block::default()
            .title(Span::styled(
                format!(" {} ", review.title),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { BRAND_TEAL } else { BORDER }));
        if focused {
            block = block.style(Style::default().bg(HIGHLIGHT_BG));
        }
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), *row);
    }
}

fn render_gallery(f: &mut Frame, app: &App, kind: GalleryKind, area: Rect) {
    let lines: Vec<Line> = kind
        .images()
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            let focused = i == app.selected_image_index;
            let marker = if focused { "» " } else { "  " };
            let style = if focused {
                Style::default().fg(TEXT_PRIMARY).bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(BRAND_TEAL)),
                Span::styled(format!("{:<18}", image.label), style),
                Span::styled(image.path, Style::default().fg(TEXT_DIM)),
            ])
        })
        .collect();

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} · Enter to view ", kind.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER)),
    );
    f.render_widget(p, area);
}
