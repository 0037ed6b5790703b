//! Mouse event handling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::logic::{RefreshSenders, request_manual_refresh, set_filter};
use crate::state::{AppState, Modal, UiState};

use super::grid::{Move, move_selection};
use super::modals::open_article_link;

/// What: Whether the cell at (`x`, `y`) lies inside `rect`.
fn hit(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position { x, y })
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event including position and button
/// - `app`: Application state (uses the hit rectangles recorded by the last render)
/// - `senders`: Request channels for the refresh button
///
/// Details:
/// - Modal-first: while a popup is open, a click outside it closes it, a click on the
///   link opens the article URL and a click on a related article switches to it.
/// - Otherwise: the refresh button refreshes, a chip activates its filter and a card
///   opens its popup.
/// - The wheel moves the card highlight by rows.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState, senders: &RefreshSenders) {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollDown if !app.modal.is_open() => {
            move_selection(app, Move::RowDown);
        }
        MouseEventKind::ScrollUp if !app.modal.is_open() => {
            move_selection(app, Move::RowUp);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_open() {
                handle_modal_click(app, mx, my);
            } else {
                handle_dashboard_click(app, senders, mx, my);
            }
        }
        _ => {}
    }
}

/// What: Click while a popup is open.
fn handle_modal_click(app: &mut AppState, mx: u16, my: u16) {
    let inside = app.modal_rect.is_some_and(|r| hit(r, mx, my));
    if !inside {
        app.modal = Modal::None;
        return;
    }
    let Modal::Article { id } = app.modal else {
        return;
    };
    if app.modal_link_rect.is_some_and(|r| hit(r, mx, my)) {
        open_article_link(app, id);
        return;
    }
    if let Some((next, _)) = app
        .modal_related_rects
        .iter()
        .find(|(_, r)| hit(*r, mx, my))
    {
        app.modal = Modal::Article { id: *next };
    }
}

/// What: Click on the dashboard with no popup open.
fn handle_dashboard_click(app: &mut AppState, senders: &RefreshSenders, mx: u16, my: u16) {
    if app.refresh_button_rect.is_some_and(|r| hit(r, mx, my)) {
        request_manual_refresh(app, senders);
        return;
    }
    if let Some(filter) = app
        .filter_chip_rects
        .iter()
        .find(|(_, r)| hit(*r, mx, my))
        .map(|(f, _)| f.clone())
    {
        set_filter(app, filter);
        return;
    }
    if app.ui_state != UiState::Loaded {
        return;
    }
    let Some(id) = app
        .card_rects
        .iter()
        .find(|(_, r)| hit(*r, mx, my))
        .map(|(id, _)| *id)
    else {
        return;
    };
    if let Some(pos) = app.visible_articles().iter().position(|a| a.id == id) {
        app.selected = pos;
    }
    if app.article_by_id(id).is_some() {
        tracing::debug!(article = %id, "article popup opened by click");
        app.modal = Modal::Article { id };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    use crate::state::{ArticleId, CategoryFilter};
    use crate::test_utils::article;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn senders() -> RefreshSenders {
        let (load_tx, _load_rx) = mpsc::unbounded_channel();
        let (simulated_tx, _sim_rx) = mpsc::unbounded_channel();
        RefreshSenders {
            load_tx,
            simulated_tx,
        }
    }

    #[test]
    /// What: Clicking a card under a filter opens the popup for that card's article.
    ///
    /// Inputs:
    /// - Filter `policy`; the recorded card rect belongs to article 3.
    ///
    /// Output:
    /// - Popup for id 3 and the highlight on its filtered position.
    fn card_click_opens_by_id() {
        let mut app = AppState {
            articles: vec![
                article(1, "a", "tech"),
                article(2, "b", "policy"),
                article(3, "c", "policy"),
            ],
            ui_state: UiState::Loaded,
            filter: CategoryFilter::Category("policy".into()),
            card_rects: vec![
                (ArticleId(2), Rect::new(0, 5, 20, 6)),
                (ArticleId(3), Rect::new(20, 5, 20, 6)),
            ],
            ..AppState::default()
        };
        handle_mouse_event(click(25, 7), &mut app, &senders());
        assert_eq!(app.modal, Modal::Article { id: ArticleId(3) });
        assert_eq!(app.selected, 1);
    }

    #[test]
    /// What: A click outside the popup closes it; a click inside keeps it.
    fn outside_click_closes_popup() {
        let mut app = AppState {
            articles: vec![article(1, "a", "tech")],
            modal: Modal::Article { id: ArticleId(1) },
            modal_rect: Some(Rect::new(10, 5, 30, 10)),
            ..AppState::default()
        };
        handle_mouse_event(click(12, 6), &mut app, &senders());
        assert_eq!(app.modal, Modal::Article { id: ArticleId(1) });
        handle_mouse_event(click(1, 1), &mut app, &senders());
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: A chip click activates its filter.
    fn chip_click_sets_filter() {
        let mut app = AppState {
            articles: vec![article(1, "a", "tech")],
            ui_state: UiState::Loaded,
            filter_chip_rects: vec![
                (CategoryFilter::All, Rect::new(0, 3, 5, 1)),
                (CategoryFilter::Category("tech".into()), Rect::new(6, 3, 6, 1)),
            ],
            ..AppState::default()
        };
        handle_mouse_event(click(7, 3), &mut app, &senders());
        assert_eq!(app.filter, CategoryFilter::Category("tech".into()));
    }
}
