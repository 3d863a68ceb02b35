use crate::app::{App, CurrentScreen};
use crate::browser;
use crate::carousel::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> InputResult {
    // Only process key press events, not release (Windows sends both)
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return InputResult::Quit;
    }

    // Priority 1: Help Popup
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return InputResult::Continue;
    }

    // Priority 2: Video modal
    if app.video_modal.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_video(),
            KeyCode::Enter | KeyCode::Char('o') => {
                // "Open Video" closes the modal once the link is handed off
                let link = app.external_link();
                if open_link(app, link) {
                    app.close_video();
                }
            }
            KeyCode::Char('y') => {
                let link = app.external_link();
                copy_link(app, link);
            }
            _ => {}
        }
        return InputResult::Continue;
    }

    // Priority 3: Lightbox
    if app.lightbox.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_lightbox(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                app.step_lightbox(Direction::Next)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                app.step_lightbox(Direction::Prev)
            }
            _ => {}
        }
        return InputResult::Continue;
    }

    // Priority 4: Search input
    if app.search_mode {
        match key.code {
            KeyCode::Esc => app.exit_search(),
            KeyCode::Enter => {
                app.open_selected_search_result();
            }
            KeyCode::Down => app.move_selection(true),
            KeyCode::Up => app.move_selection(false),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return InputResult::Quit;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Tab => app.next_screen(),
        KeyCode::BackTab => app.prev_screen(),
        KeyCode::Char(c @ '1'..='5') => {
            let pos = c as usize - '1' as usize;
            if let Some(screen) = CurrentScreen::nav().get(pos) {
                app.go_to(*screen);
            }
        }
        KeyCode::Char('/') => {
            if matches!(app.current_screen, CurrentScreen::Edits | CurrentScreen::Videos) {
                app.start_search();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Left | KeyCode::Char('h') => {
            if app.current_screen == CurrentScreen::Reviews {
                app.prev_tab();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.current_screen == CurrentScreen::Reviews {
                app.next_tab();
            }
        }
        KeyCode::Enter => match app.current_screen {
            CurrentScreen::Home => app.go_to(CurrentScreen::Edits),
            CurrentScreen::Edits => {
                app.open_selected_category();
            }
            CurrentScreen::Videos => {
                app.open_selected_video();
            }
            CurrentScreen::Reviews => {
                app.open_selected_image();
            }
            CurrentScreen::Contact => {
                let link = app.external_link();
                open_link(app, link);
            }
            CurrentScreen::About => {}
        },
        KeyCode::Char('o') => {
            let link = app.external_link();
            open_link(app, link);
        }
        KeyCode::Char('m') => {
            if app.current_screen == CurrentScreen::Videos {
                let link = app.collection_link();
                open_link(app, link);
            }
        }
        KeyCode::Char('y') => {
            let link = app.external_link();
            copy_link(app, link);
        }
        _ => {}
    }

    InputResult::Continue
}

/// Hand a link to the browser, or the clipboard when browsing is disabled.
/// Returns true when the link left the app.
fn open_link(app: &mut App, link: Option<String>) -> bool {
    let Some(link) = link else {
        return false;
    };
    if !app.config.open_links_in_browser {
        return copy_link(app, Some(link));
    }
    match browser::open_external(&link) {
        Ok(()) => {
            app.set_status(format!("Opened {}", link));
            true
        }
        Err(e) => {
            log::warn!("open failed: {}", e);
            app.set_status(e.diagnostics());
            false
        }
    }
}

fn copy_link(app: &mut App, link: Option<String>) -> bool {
    let Some(link) = link else {
        return false;
    };
    match browser::copy_to_clipboard(&link) {
        Ok(()) => {
            app.set_status("Link copied to clipboard");
            true
        }
        Err(e) => {
            log::warn!("copy failed: {}", e);
            app.set_status(e.diagnostics());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit() {
        let mut app = App::with_builtin();
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('q'))), InputResult::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_browse_to_video_and_back() {
        let mut app = App::with_builtin();
        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.current_screen, CurrentScreen::Edits);
        handle_key_event(&mut app, press(KeyCode::Down));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.active_category.as_deref(), Some("motivation-business"));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(app.video_modal.as_ref().unwrap().mode.is_inline());

        // 'q' inside the modal closes it rather than quitting
        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Char('q'))),
            InputResult::Continue
        );
        assert!(app.video_modal.is_none());
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.current_screen, CurrentScreen::Edits);
    }

    #[test]
    fn test_lightbox_keys() {
        let mut app = App::with_builtin();
        handle_key_event(&mut app, press(KeyCode::Char('4')));
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.gallery_kind(), Some(crate::carousel::GalleryKind::Photo));
        handle_key_event(&mut app, press(KeyCode::Enter));
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.lightbox.unwrap().index(), 2);
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.lightbox.unwrap().index(), 0);
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.lightbox.is_none());
        assert_eq!(app.current_screen, CurrentScreen::Reviews);
    }

    #[test]
    fn test_search_typing() {
        let mut app = App::with_builtin();
        handle_key_event(&mut app, press(KeyCode::Char('3')));
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        assert!(app.search_mode);
        for c in "knit".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.search_query, "knit");
        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.search_query, "kni");
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.search_mode);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::with_builtin();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(&mut app, key), InputResult::Continue);
        assert!(!app.should_quit);
    }
}
