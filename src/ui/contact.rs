use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::content::{CONTACT_LINKS, PHONE};
use crate::ui::colors::{BORDER, BRAND_TEAL, HIGHLIGHT_BG, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::truncate;

pub fn render_contact(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Let's work together",
            Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Feel free to reach out via phone or connect with me on social platforms.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled("Phone: ", Style::default().fg(TEXT_DIM)),
            Span::styled(PHONE, Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        ]),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = CONTACT_LINKS
        .iter()
        .map(|link| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", link.label), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(truncate(link.href, 70), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Social Links ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER)),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    f.render_stateful_widget(list, chunks[1], &mut app.contact_list_state);
}
