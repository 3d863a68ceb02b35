use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::{App, CurrentScreen};
use crate::ui::colors::STAR_GOLD;

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::White);

    if let Some(status) = &app.status_message {
        let first_line = status.lines().next().unwrap_or_default();
        let p = Paragraph::new(Span::styled(
            format!(" {}", first_line),
            Style::default().fg(STAR_GOLD),
        ));
        f.render_widget(p, area);
        return;
    }

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
        Span::styled(" Esc ", key_style),
        Span::styled("Back  ", label_style),
        Span::styled(" Tab ", key_style),
        Span::styled("Next Page  ", label_style),
    ];

    match app.current_screen {
        CurrentScreen::Edits | CurrentScreen::Videos => {
            spans.push(Span::styled(" Enter ", key_style));
            spans.push(Span::styled("Open  ", label_style));
            spans.push(Span::styled(" / ", key_style));
            spans.push(Span::styled("Search  ", label_style));
            spans.push(Span::styled(" o ", key_style));
            spans.push(Span::styled("Open Externally  ", label_style));
        }
        CurrentScreen::Reviews => {
            spans.push(Span::styled(" \u{2190}\u{2192} ", key_style));
            spans.push(Span::styled("Tabs  ", label_style));
            spans.push(Span::styled(" Enter ", key_style));
            spans.push(Span::styled("View Image  ", label_style));
        }
        CurrentScreen::Contact => {
            spans.push(Span::styled(" Enter ", key_style));
            spans.push(Span::styled("Open Link  ", label_style));
            spans.push(Span::styled(" y ", key_style));
            spans.push(Span::styled("Copy  ", label_style));
        }
        CurrentScreen::Home | CurrentScreen::About => {}
    }

    spans.push(Span::styled(" ? ", key_style));
    spans.push(Span::styled("Help", label_style));

    let p = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    f.render_widget(p, area);
}
