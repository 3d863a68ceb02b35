use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::app::{App, CurrentScreen};
use crate::content::OWNER_NAME;
use crate::ui::colors::{BORDER, BRAND_TEAL, TEXT_DIM};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    if app.search_mode {
        let search_text = format!(" Search videos: {}_", app.search_query);
        let p = Paragraph::new(search_text)
            .style(Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" SEARCH ")
                    .border_style(Style::default().fg(BRAND_TEAL)),
            );
        f.render_widget(p, area);
        return;
    }

    let style_active = Style::default()
        .bg(BRAND_TEAL)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let style_idle = Style::default().fg(TEXT_DIM);

    let mut spans = vec![Span::styled(
        format!(" {} ", OWNER_NAME),
        Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(" │ ", Style::default().fg(BORDER)));

    let current = match app.current_screen {
        CurrentScreen::Videos => CurrentScreen::Edits,
        other => other,
    };
    for (i, screen) in CurrentScreen::nav().iter().enumerate() {
        let style = if *screen == current { style_active } else { style_idle };
        spans.push(Span::styled(format!(" {} {} ", i + 1, screen.title()), style));
        spans.push(Span::raw(" "));
    }

    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    );
    f.render_widget(p, area);
}
