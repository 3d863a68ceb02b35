pub mod colors;
pub mod utils;
pub mod header;
pub mod footer;
pub mod home;
pub mod about;
pub mod edits;
pub mod reviews;
pub mod contact;
pub mod popups;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, CurrentScreen};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    footer::render_footer(f, app, chunks[2]);

    let content_area = chunks[1];

    if app.search_mode {
        edits::render_search_results(f, app, content_area);
    } else {
        match app.current_screen {
            CurrentScreen::Home => home::render_home(f, app, content_area),
            CurrentScreen::About => about::render_about(f, content_area),
            CurrentScreen::Edits => edits::render_edits(f, app, content_area),
            CurrentScreen::Videos => edits::render_videos(f, app, content_area),
            CurrentScreen::Reviews => reviews::render_reviews(f, app, content_area),
            CurrentScreen::Contact => contact::render_contact(f, app, content_area),
        }
    }

    // Overlays
    if app.video_modal.is_some() {
        popups::render_video_modal(f, app, area);
    }

    if let Some(state) = &app.lightbox {
        popups::render_lightbox(f, state, area);
    }

    if app.show_help {
        popups::render_help_popup(f, area);
    }
}
