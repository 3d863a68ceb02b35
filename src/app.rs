use crate::carousel::{CarouselState, Direction, GalleryKind};
use crate::config::{AppConfig, StartScreen};
use crate::content::{ReviewsTab, CONTACT_LINKS, REVIEWS};
use crate::embed::PlaybackMode;
use crate::model::{Category, VideoEntry};
use crate::registry::CategoryRegistry;
use ratatui::widgets::ListState;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CurrentScreen {
    Home,    // Hero + stats
    About,   // Skills and achievements
    Edits,   // Category index
    Videos,  // Videos of the active category
    Reviews, // Reviews / graphics / photos tabs
    Contact, // Phone and social links
}

impl CurrentScreen {
    /// Screens reachable from the top navigation bar, in bar order
    pub fn nav() -> &'static [CurrentScreen] {
        &[
            CurrentScreen::Home,
            CurrentScreen::About,
            CurrentScreen::Edits,
            CurrentScreen::Reviews,
            CurrentScreen::Contact,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            CurrentScreen::Home => "Home",
            CurrentScreen::About => "About Me",
            CurrentScreen::Edits | CurrentScreen::Videos => "Edits",
            CurrentScreen::Reviews => "Reviews and More",
            CurrentScreen::Contact => "Contact",
        }
    }

    fn nav_position(&self) -> usize {
        let this = match self {
            CurrentScreen::Videos => CurrentScreen::Edits,
            other => *other,
        };
        Self::nav().iter().position(|s| *s == this).unwrap_or(0)
    }
}

impl From<StartScreen> for CurrentScreen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Home => CurrentScreen::Home,
            StartScreen::Edits => CurrentScreen::Edits,
            StartScreen::Reviews => CurrentScreen::Reviews,
        }
    }
}

/// The open video modal
#[derive(Debug, Clone, PartialEq)]
pub struct VideoModal {
    pub category_id: String,
    pub video_index: usize,
    pub video: VideoEntry,
    pub mode: PlaybackMode,
}

/// A search hit stored by position so it outlives the query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub category_id: String,
    pub category_name: String,
    pub video_index: usize,
    pub title: String,
}

pub struct App {
    pub config: AppConfig,
    pub registry: CategoryRegistry,
    pub current_screen: CurrentScreen,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<String>,

    // Edits
    pub selected_category_index: usize,
    pub category_list_state: ListState,
    pub active_category: Option<String>,
    pub selected_video_index: usize,
    pub video_list_state: ListState,
    pub video_modal: Option<VideoModal>,

    // Reviews and More
    pub reviews_tab: ReviewsTab,
    pub selected_review_index: usize,
    pub selected_image_index: usize,
    pub lightbox: Option<CarouselState>,

    // Contact
    pub selected_contact_index: usize,
    pub contact_list_state: ListState,

    // Search
    pub search_mode: bool,
    pub search_query: String,
    pub search_results: Vec<SearchHit>,
    pub selected_search_index: usize,
    pub search_list_state: ListState,
}

impl App {
    pub fn new(config: AppConfig, registry: CategoryRegistry) -> Self {
        let current_screen = CurrentScreen::from(config.start_screen);
        let selected_category_index = config
            .last_category
            .as_deref()
            .and_then(|id| registry.position(id))
            .unwrap_or(0);

        let mut category_list_state = ListState::default();
        category_list_state.select(Some(selected_category_index));
        let mut video_list_state = ListState::default();
        video_list_state.select(Some(0));
        let mut contact_list_state = ListState::default();
        contact_list_state.select(Some(0));

        Self {
            config,
            registry,
            current_screen,
            should_quit: false,
            show_help: false,
            status_message: None,
            selected_category_index,
            category_list_state,
            active_category: None,
            selected_video_index: 0,
            video_list_state,
            video_modal: None,
            reviews_tab: ReviewsTab::default(),
            selected_review_index: 0,
            selected_image_index: 0,
            lightbox: None,
            selected_contact_index: 0,
            contact_list_state,
            search_mode: false,
            search_query: String::new(),
            search_results: Vec::new(),
            selected_search_index: 0,
            search_list_state: ListState::default(),
        }
    }

    /// App over the built-in content with default settings
    pub fn with_builtin() -> Self {
        Self::new(AppConfig::default(), CategoryRegistry::builtin().clone())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // --- Navigation -------------------------------------------------------

    pub fn go_to(&mut self, screen: CurrentScreen) {
        self.current_screen = screen;
        self.search_mode = false;
        self.status_message = None;
    }

    pub fn next_screen(&mut self) {
        let nav = CurrentScreen::nav();
        let pos = (self.current_screen.nav_position() + 1) % nav.len();
        self.go_to(nav[pos]);
    }

    pub fn prev_screen(&mut self) {
        let nav = CurrentScreen::nav();
        let pos = self.current_screen.nav_position();
        let pos = if pos == 0 { nav.len() - 1 } else { pos - 1 };
        self.go_to(nav[pos]);
    }

    /// Close the innermost layer: modal, lightbox, search, then screen.
    pub fn back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.video_modal.is_some() {
            self.close_video();
        } else if self.lightbox.is_some() {
            self.close_lightbox();
        } else if self.search_mode {
            self.exit_search();
        } else if self.current_screen == CurrentScreen::Videos {
            self.go_to(CurrentScreen::Edits);
        } else if self.current_screen != CurrentScreen::Home {
            self.go_to(CurrentScreen::Home);
        }
    }

    /// Move the selection of whichever list has focus
    pub fn move_selection(&mut self, down: bool) {
        if self.search_mode {
            let len = self.search_results.len();
            self.selected_search_index = step_clamped(self.selected_search_index, down, len);
            self.search_list_state.select(Some(self.selected_search_index));
            return;
        }

        match self.current_screen {
            CurrentScreen::Edits => {
                let len = self.registry.len();
                self.selected_category_index =
                    step_clamped(self.selected_category_index, down, len);
                self.category_list_state
                    .select(Some(self.selected_category_index));
            }
            CurrentScreen::Videos => {
                let len = self.active_category().map(|c| c.videos.len()).unwrap_or(0);
                self.selected_video_index = step_clamped(self.selected_video_index, down, len);
                self.video_list_state.select(Some(self.selected_video_index));
            }
            CurrentScreen::Reviews => match self.reviews_tab {
                ReviewsTab::Reviews => {
                    self.selected_review_index =
                        step_clamped(self.selected_review_index, down, REVIEWS.len());
                }
                ReviewsTab::Graphics | ReviewsTab::Photos => {
                    let len = self.gallery_kind().map(|k| k.count()).unwrap_or(0);
                    self.selected_image_index =
                        step_clamped(self.selected_image_index, down, len);
                }
            },
            CurrentScreen::Contact => {
                self.selected_contact_index =
                    step_clamped(self.selected_contact_index, down, CONTACT_LINKS.len());
                self.contact_list_state
                    .select(Some(self.selected_contact_index));
            }
            CurrentScreen::Home | CurrentScreen::About => {}
        }
    }

    // --- Edits --------------------------------------------------------------

    pub fn active_category(&self) -> Option<&Category> {
        self.registry.lookup(self.active_category.as_deref()?)
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.registry.get_index(self.selected_category_index)
    }

    /// Show the videos of `id`. Unknown ids leave the screen unchanged and
    /// report "Category not found".
    pub fn open_category(&mut self, id: &str) -> bool {
        let Some(pos) = self.registry.position(id) else {
            self.set_status(format!("Category not found: {}", id));
            return false;
        };

        self.selected_category_index = pos;
        self.category_list_state.select(Some(pos));
        self.active_category = Some(id.to_string());
        self.selected_video_index = 0;
        self.video_list_state.select(Some(0));
        self.config.set_last_category(id);
        self.go_to(CurrentScreen::Videos);
        true
    }

    pub fn open_selected_category(&mut self) -> bool {
        match self.selected_category().map(|c| c.id.clone()) {
            Some(id) => self.open_category(&id),
            None => false,
        }
    }

    pub fn open_video(&mut self, category_id: &str, video_index: usize) -> bool {
        let Some(video) = self.registry.video(category_id, video_index).cloned() else {
            return false;
        };
        let mode = PlaybackMode::for_link(&video.link);
        self.video_modal = Some(VideoModal {
            category_id: category_id.to_string(),
            video_index,
            video,
            mode,
        });
        true
    }

    pub fn open_selected_video(&mut self) -> bool {
        match self.active_category.clone() {
            Some(id) => self.open_video(&id, self.selected_video_index),
            None => false,
        }
    }

    pub fn close_video(&mut self) {
        self.video_modal = None;
    }

    /// Link handed to the browser for the current context.
    ///
    /// The open modal wins (its original link, not the embed url), then the
    /// focused list entry.
    pub fn external_link(&self) -> Option<String> {
        if let Some(modal) = &self.video_modal {
            return Some(modal.video.link.clone());
        }
        match self.current_screen {
            CurrentScreen::Edits => self.selected_category().map(|c| c.external_link.clone()),
            CurrentScreen::Videos => self
                .active_category()
                .and_then(|c| c.videos.get(self.selected_video_index))
                .map(|v| v.link.clone()),
            CurrentScreen::Contact => CONTACT_LINKS
                .get(self.selected_contact_index)
                .map(|l| l.href.to_string()),
            _ => None,
        }
    }

    /// "Want to see more?" link of the active category
    pub fn collection_link(&self) -> Option<String> {
        self.active_category().map(|c| c.external_link.clone())
    }

    // --- Reviews and More ---------------------------------------------------

    pub fn gallery_kind(&self) -> Option<GalleryKind> {
        match self.reviews_tab {
            ReviewsTab::Reviews => None,
            ReviewsTab::Graphics => Some(GalleryKind::Graphic),
            ReviewsTab::Photos => Some(GalleryKind::Photo),
        }
    }

    pub fn next_tab(&mut self) {
        self.reviews_tab = self.reviews_tab.next();
        self.selected_image_index = 0;
    }

    pub fn prev_tab(&mut self) {
        self.reviews_tab = self.reviews_tab.prev();
        self.selected_image_index = 0;
    }

    pub fn open_lightbox(&mut self, kind: GalleryKind, index: usize) {
        self.lightbox = Some(CarouselState::open(kind, index));
    }

    pub fn open_selected_image(&mut self) -> bool {
        match self.gallery_kind() {
            Some(kind) => {
                self.open_lightbox(kind, self.selected_image_index);
                true
            }
            None => false,
        }
    }

    pub fn step_lightbox(&mut self, direction: Direction) {
        if let Some(state) = self.lightbox.as_mut() {
            state.step(direction);
            self.selected_image_index = state.index();
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    // --- Search -------------------------------------------------------------

    pub fn start_search(&mut self) {
        self.search_mode = true;
        self.search_query.clear();
        self.update_search();
    }

    pub fn exit_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.search_results.clear();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.update_search();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.update_search();
    }

    pub fn update_search(&mut self) {
        self.search_results = self
            .registry
            .search(&self.search_query)
            .into_iter()
            .map(|hit| SearchHit {
                category_id: hit.category.id.clone(),
                category_name: hit.category.name.clone(),
                video_index: hit.video_index,
                title: hit.video.title.clone(),
            })
            .collect();
        self.selected_search_index = 0;
        self.search_list_state.select(if self.search_results.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    /// Jump to the hit's category and open its video
    pub fn open_selected_search_result(&mut self) -> bool {
        let Some(hit) = self.search_results.get(self.selected_search_index).cloned() else {
            return false;
        };
        self.exit_search();
        if !self.open_category(&hit.category_id) {
            return false;
        }
        self.selected_video_index = hit.video_index;
        self.video_list_state.select(Some(hit.video_index));
        self.open_video(&hit.category_id, hit.video_index)
    }
}

fn step_clamped(index: usize, down: bool, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (index + 1).min(len - 1)
    } else {
        index.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let app = App::with_builtin();
        assert_eq!(app.current_screen, CurrentScreen::Home);
        assert!(app.video_modal.is_none());
    }

    #[test]
    fn test_start_screen_and_last_category_from_config() {
        let config = AppConfig {
            start_screen: StartScreen::Edits,
            last_category: Some("fashion".to_string()),
            ..Default::default()
        };
        let app = App::new(config, CategoryRegistry::builtin().clone());
        assert_eq!(app.current_screen, CurrentScreen::Edits);
        assert_eq!(app.selected_category().unwrap().id, "fashion");
    }

    #[test]
    fn test_open_unknown_category_reports_not_found() {
        let mut app = App::with_builtin();
        app.go_to(CurrentScreen::Edits);
        assert!(!app.open_category("weddings"));
        assert_eq!(app.current_screen, CurrentScreen::Edits);
        assert_eq!(app.status_message.as_deref(), Some("Category not found: weddings"));
    }

    #[test]
    fn test_video_modal_modes() {
        let mut app = App::with_builtin();
        assert!(app.open_category("motivation-business"));
        assert!(app.open_selected_video());
        let modal = app.video_modal.as_ref().unwrap();
        assert_eq!(
            modal.mode,
            PlaybackMode::Inline(crate::embed::resolve_embed(&modal.video.link).unwrap())
        );

        app.back();
        assert!(app.video_modal.is_none());
        assert_eq!(app.current_screen, CurrentScreen::Videos);

        assert!(app.open_category("fashion"));
        assert!(app.open_selected_video());
        assert!(!app.video_modal.as_ref().unwrap().mode.is_inline());
        assert_eq!(
            app.external_link().as_deref(),
            Some("https://www.instagram.com/reel/DFH-OSOS_xq/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==")
        );
    }

    #[test]
    fn test_inline_modal_link_is_the_posted_link() {
        let mut app = App::with_builtin();
        assert!(app.open_category("motivation-business"));
        assert!(app.open_selected_video());
        let modal = app.video_modal.as_ref().unwrap();
        assert!(modal.mode.is_inline());
        let posted = modal.video.link.clone();
        let embed = modal.mode.target_url().to_string();

        assert_ne!(posted, embed);
        assert_eq!(app.external_link(), Some(posted));
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut app = App::with_builtin();
        app.open_category("bts");
        app.move_selection(true);
        app.move_selection(true);
        assert_eq!(app.selected_video_index, 0);
        app.move_selection(false);
        assert_eq!(app.selected_video_index, 0);
    }

    #[test]
    fn test_back_unwinds_layers() {
        let mut app = App::with_builtin();
        app.open_category("fashion");
        app.open_selected_video();
        app.back();
        app.back();
        assert_eq!(app.current_screen, CurrentScreen::Edits);
        app.back();
        assert_eq!(app.current_screen, CurrentScreen::Home);
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut app = App::with_builtin();
        app.go_to(CurrentScreen::Reviews);
        app.next_tab();
        assert_eq!(app.gallery_kind(), Some(GalleryKind::Graphic));
        assert!(app.open_selected_image());
        app.step_lightbox(Direction::Prev);
        let state = app.lightbox.unwrap();
        assert_eq!(state.index(), 8);
        assert_eq!(state.current().path, "/graphics/design-9.png");
        assert_eq!(app.selected_image_index, 8);
    }

    #[test]
    fn test_reviews_tab_has_no_lightbox() {
        let mut app = App::with_builtin();
        app.go_to(CurrentScreen::Reviews);
        assert!(!app.open_selected_image());
        assert!(app.lightbox.is_none());
    }

    #[test]
    fn test_nav_cycles_and_videos_counts_as_edits() {
        let mut app = App::with_builtin();
        app.prev_screen();
        assert_eq!(app.current_screen, CurrentScreen::Contact);
        app.open_category("bts");
        app.next_screen();
        assert_eq!(app.current_screen, CurrentScreen::Reviews);
    }

    #[test]
    fn test_search_opens_video() {
        let mut app = App::with_builtin();
        app.start_search();
        for c in "clutch".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.search_results[0].title, "DIY Clutch");
        assert!(app.open_selected_search_result());
        assert!(!app.search_mode);
        assert_eq!(app.active_category.as_deref(), Some("tutorial-products"));
        assert_eq!(app.selected_video_index, 1);
        assert_eq!(app.video_modal.as_ref().unwrap().video.title, "DIY Clutch");
    }

    #[test]
    fn test_open_category_remembers_last() {
        let mut app = App::with_builtin();
        app.open_category("stop-motion");
        assert_eq!(app.config.last_category.as_deref(), Some("stop-motion"));
    }
}
