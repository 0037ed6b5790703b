//! Central `AppState` container owned by the runtime.

use ratatui::layout::Rect;

use crate::state::modal::Modal;
use crate::state::types::{Article, ArticleId, CategoryFilter, RefreshMode, UiState};

/// Dashboard controller state shared by the event, networking, and UI layers.
///
/// Exactly one instance exists per run. It is created by `app::run` and lent
/// by `&mut` to the event and channel handlers; nothing reaches it globally.
#[derive(Debug)]
pub struct AppState {
    /// Current article list in display order. Replaced wholesale on each load.
    pub articles: Vec<Article>,
    /// Active category filter.
    pub filter: CategoryFilter,
    /// Visible body region and refresh-button state.
    pub ui_state: UiState,
    /// Active overlay, if any.
    pub modal: Modal,
    /// Index into the filtered list of the highlighted card.
    pub selected: usize,
    /// First card row shown in the grid (scroll offset in rows).
    pub grid_row_offset: usize,
    /// Cards per grid row at the last render; drives up/down movement.
    pub grid_columns: usize,
    /// Localized text of the last update time; empty before the first load.
    pub last_update_label: String,
    /// Manual refresh behavior, fixed at startup.
    pub refresh_mode: RefreshMode,
    /// Whether the terminal has focus; stands in for page visibility.
    pub terminal_focused: bool,
    /// Whether the push channel is configured.
    pub stream_enabled: bool,
    /// Poll period in minutes, for the footer.
    pub poll_minutes: u64,
    /// Default filter chips from settings, shown before categories found in data.
    pub default_categories: Vec<String>,
    /// Spinner frame counter advanced by the UI tick.
    pub spinner_frame: usize,

    // Hit-test rectangles recorded during render for mouse handling.
    /// Refresh button area in the header.
    pub refresh_button_rect: Option<Rect>,
    /// Filter chip areas with the filter each one selects.
    pub filter_chip_rects: Vec<(CategoryFilter, Rect)>,
    /// Card areas with the article each one shows.
    pub card_rects: Vec<(ArticleId, Rect)>,
    /// Popup area while a modal is open.
    pub modal_rect: Option<Rect>,
    /// Open-link line inside the article modal, when the article has a URL.
    pub modal_link_rect: Option<Rect>,
    /// Related-article lines inside the article modal.
    pub modal_related_rects: Vec<(ArticleId, Rect)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            filter: CategoryFilter::All,
            ui_state: UiState::Loading,
            modal: Modal::None,
            selected: 0,
            grid_row_offset: 0,
            grid_columns: 1,
            last_update_label: String::new(),
            refresh_mode: RefreshMode::Simulated,
            terminal_focused: true,
            stream_enabled: true,
            poll_minutes: crate::theme::DEFAULT_POLL_MINUTES,
            default_categories: Vec::new(),
            spinner_frame: 0,
            refresh_button_rect: None,
            filter_chip_rects: Vec::new(),
            card_rects: Vec::new(),
            modal_rect: None,
            modal_link_rect: None,
            modal_related_rects: Vec::new(),
        }
    }
}

impl AppState {
    /// What: Articles passing the active filter, in list order.
    #[must_use]
    pub fn visible_articles(&self) -> Vec<&Article> {
        crate::logic::filter::filter_articles(&self.articles, &self.filter)
    }

    /// What: Look up an article by its stable id in the unfiltered list.
    #[must_use]
    pub fn article_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// What: Article under the card highlight, if any.
    #[must_use]
    pub fn selected_article(&self) -> Option<&Article> {
        self.visible_articles().get(self.selected).copied()
    }

    /// What: Whether a visible load is in progress (refresh button disabled, icon spinning).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.ui_state, UiState::Loading)
    }

    /// What: Whether the filter bar is shown.
    ///
    /// Details:
    /// - Only once articles are loaded and the list is non-empty.
    #[must_use]
    pub fn filter_bar_visible(&self) -> bool {
        matches!(self.ui_state, UiState::Loaded) && !self.articles.is_empty()
    }

    /// What: Keep `selected` inside the filtered list after it changed size.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_articles().len();
        if len == 0 {
            self.selected = 0;
            self.grid_row_offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
