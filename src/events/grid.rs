//! Card grid navigation.

use crate::state::{AppState, Modal, UiState};

/// Highlight movement within the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Previous card.
    Prev,
    /// Next card.
    Next,
    /// Same column, one row up.
    RowUp,
    /// Same column, one row down.
    RowDown,
    /// First card.
    First,
    /// Last card.
    Last,
}

/// What: Move the card highlight.
///
/// Inputs:
/// - `app`: Application state (uses `grid_columns` from the last render)
/// - `mv`: Direction
///
/// Details:
/// - Movement stops at the edges; a row move that would leave the grid keeps the highlight.
pub fn move_selection(app: &mut AppState, mv: Move) {
    let len = app.visible_articles().len();
    if len == 0 {
        app.selected = 0;
        return;
    }
    let cols = app.grid_columns.max(1);
    let cur = app.selected.min(len - 1);
    app.selected = match mv {
        Move::Prev => cur.saturating_sub(1),
        Move::Next => (cur + 1).min(len - 1),
        Move::RowUp if cur >= cols => cur - cols,
        Move::RowDown if cur + cols < len => cur + cols,
        Move::RowUp | Move::RowDown => cur,
        Move::First => 0,
        Move::Last => len - 1,
    };
}

/// What: Open the detail popup for the highlighted card.
///
/// Output:
/// - `true` when a popup was opened.
///
/// Details:
/// - The popup stores the article id, so later filter changes cannot retarget it.
/// - Does nothing unless the card grid is shown (`Loaded`).
pub fn open_selected(app: &mut AppState) -> bool {
    if app.ui_state != UiState::Loaded {
        return false;
    }
    let Some(id) = app.selected_article().map(|a| a.id) else {
        return false;
    };
    tracing::debug!(article = %id, "article popup opened");
    app.modal = Modal::Article { id };
    true
}

/// What: Open the link of the highlighted card in the browser.
///
/// Details:
/// - Does nothing while the spinner or the error banner hides the grid.
pub fn open_selected_link(app: &AppState) {
    if app.ui_state != UiState::Loaded {
        return;
    }
    if let Some(url) = app.selected_article().and_then(|a| a.url.as_deref()) {
        crate::util::open_url(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArticleId, CategoryFilter};
    use crate::test_utils::article;

    fn grid(n: usize, cols: usize) -> AppState {
        AppState {
            articles: (1..=n).map(|i| article(i, &format!("t{i}"), "x")).collect(),
            ui_state: UiState::Loaded,
            grid_columns: cols,
            ..AppState::default()
        }
    }

    #[test]
    /// What: Row moves keep the column and stop at the grid edges.
    ///
    /// Inputs:
    /// - Seven cards in three columns.
    ///
    /// Output:
    /// - Down from 1 reaches 4; a second down stays because index 7 is past the end.
    fn row_moves_respect_edges() {
        let mut app = grid(7, 3);
        app.selected = 1;
        move_selection(&mut app, Move::RowDown);
        assert_eq!(app.selected, 4);
        move_selection(&mut app, Move::RowDown);
        assert_eq!(app.selected, 4);
        move_selection(&mut app, Move::RowUp);
        move_selection(&mut app, Move::RowUp);
        assert_eq!(app.selected, 1);
        move_selection(&mut app, Move::Last);
        assert_eq!(app.selected, 6);
        move_selection(&mut app, Move::Next);
        assert_eq!(app.selected, 6);
        move_selection(&mut app, Move::First);
        move_selection(&mut app, Move::Prev);
        assert_eq!(app.selected, 0);
    }

    #[test]
    /// What: The popup opens for the highlighted card under a filter, by id.
    fn open_selected_uses_filtered_card_id() {
        let mut app = AppState {
            articles: vec![
                article(1, "a", "tech"),
                article(2, "b", "policy"),
                article(3, "c", "policy"),
            ],
            ui_state: UiState::Loaded,
            filter: CategoryFilter::Category("policy".into()),
            selected: 1,
            ..AppState::default()
        };
        assert!(open_selected(&mut app));
        assert_eq!(app.modal, Modal::Article { id: ArticleId(3) });

        app.filter = CategoryFilter::Category("none".into());
        app.modal = Modal::None;
        assert!(!open_selected(&mut app));
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Cards hidden behind the spinner or the error banner cannot be opened.
    ///
    /// Inputs:
    /// - A populated list in `Loading`, then in `Error`.
    ///
    /// Output:
    /// - No popup in either state; opening works again once `Loaded`.
    fn hidden_cards_do_not_open() {
        let mut app = grid(3, 1);
        app.ui_state = UiState::Loading;
        assert!(!open_selected(&mut app));
        assert_eq!(app.modal, Modal::None);

        app.ui_state = UiState::Error("boom".into());
        assert!(!open_selected(&mut app));
        assert_eq!(app.modal, Modal::None);

        app.ui_state = UiState::Loaded;
        assert!(open_selected(&mut app));
        assert_eq!(app.modal, Modal::Article { id: ArticleId(1) });
    }
}
