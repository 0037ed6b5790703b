//! Event handling layer: keys, mouse and terminal focus.
//!
//! `handle_event` is the single entry point used by the runtime; popups consume
//! keys first, then the global dashboard bindings apply.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::filter::select_filter_index;
use crate::logic::{RefreshSenders, cycle_filter, request_manual_refresh, retry_load};
use crate::state::{AppState, Modal, UiState};

mod grid;
mod modals;
mod mouse;

pub use grid::{Move, move_selection, open_selected};
pub use modals::RELATED_LIMIT;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// What: Route keys, mouse events and focus changes.
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `senders`: Request channels for refreshes
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Focus changes stand in for page visibility: poll ticks are skipped while unfocused.
/// - Key releases and repeats are ignored.
pub fn handle_event(ev: &CEvent, app: &mut AppState, senders: &RefreshSenders) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app, senders),
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(*m, app, senders);
            false
        }
        CEvent::FocusGained => {
            tracing::debug!("terminal focus gained");
            app.terminal_focused = true;
            false
        }
        CEvent::FocusLost => {
            tracing::debug!("terminal focus lost");
            app.terminal_focused = false;
            false
        }
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Details:
/// - `Ctrl+C` always quits; `q` quits when no popup is open.
/// - `r`/`F5` refresh; `Enter` retries in the error state and opens the highlighted
///   card otherwise.
/// - `Tab`/`Shift+Tab` cycle filter chips; `0`-`9` jump to a chip.
/// - Arrows, `hjkl`, `Home`/`End` and `PageUp`/`PageDown` move the highlight.
fn handle_key(ke: KeyEvent, app: &mut AppState, senders: &RefreshSenders) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if app.modal.is_open() {
        modals::handle_modal_key(ke, app);
        return false;
    }
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Char('r') | KeyCode::F(5) => {
            request_manual_refresh(app, senders);
        }
        KeyCode::Enter => {
            if matches!(app.ui_state, UiState::Error(_)) {
                retry_load(app, senders);
            } else {
                open_selected(app);
            }
        }
        KeyCode::Char('o') => grid::open_selected_link(app),
        KeyCode::Tab => cycle_filter(app, true),
        KeyCode::BackTab => cycle_filter(app, false),
        KeyCode::Char(c @ '0'..='9') => select_filter_index(app, c as usize - '0' as usize),
        KeyCode::Left | KeyCode::Char('h') => move_selection(app, Move::Prev),
        KeyCode::Right | KeyCode::Char('l') => move_selection(app, Move::Next),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => move_selection(app, Move::RowUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
            move_selection(app, Move::RowDown);
        }
        KeyCode::Home | KeyCode::Char('g') => move_selection(app, Move::First),
        KeyCode::End | KeyCode::Char('G') => move_selection(app, Move::Last),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    use crate::state::{ArticleId, CategoryFilter, LoadEndpoint, LoadRequest, RefreshMode};
    use crate::test_utils::article;

    fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn senders() -> (
        RefreshSenders,
        mpsc::UnboundedReceiver<LoadRequest>,
        mpsc::UnboundedReceiver<()>,
    ) {
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        let (simulated_tx, sim_rx) = mpsc::unbounded_channel();
        (
            RefreshSenders {
                load_tx,
                simulated_tx,
            },
            load_rx,
            sim_rx,
        )
    }

    fn loaded() -> AppState {
        AppState {
            articles: vec![
                article(1, "a", "tech"),
                article(2, "b", "policy"),
                article(3, "c", "tech"),
            ],
            ui_state: UiState::Loaded,
            ..AppState::default()
        }
    }

    #[test]
    /// What: Focus events toggle the visibility flag used by polling.
    fn focus_events_track_visibility() {
        let (s, _l, _r) = senders();
        let mut app = loaded();
        assert!(!handle_event(&CEvent::FocusLost, &mut app, &s));
        assert!(!app.terminal_focused);
        handle_event(&CEvent::FocusGained, &mut app, &s);
        assert!(app.terminal_focused);
    }

    #[test]
    /// What: Quit keys exit only outside popups (Ctrl+C always exits).
    fn quit_keys() {
        let (s, _l, _r) = senders();
        let mut app = loaded();
        app.modal = Modal::Help;
        assert!(!handle_event(&press(KeyCode::Char('q')), &mut app, &s));
        assert_eq!(app.modal, Modal::None);
        assert!(handle_event(&press(KeyCode::Char('q')), &mut app, &s));
        app.modal = Modal::Help;
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&ctrl_c, &mut app, &s));
    }

    #[test]
    /// What: Filtering then Enter opens the highlighted filtered article by id.
    ///
    /// Inputs:
    /// - Chip `2` (`policy`, after `All` and `tech`) then Enter.
    ///
    /// Output:
    /// - Popup for article 2.
    fn filter_then_open() {
        let (s, _l, _r) = senders();
        let mut app = loaded();
        handle_event(&press(KeyCode::Char('2')), &mut app, &s);
        assert_eq!(app.filter, CategoryFilter::Category("policy".into()));
        handle_event(&press(KeyCode::Enter), &mut app, &s);
        assert_eq!(app.modal, Modal::Article { id: ArticleId(2) });
    }

    #[test]
    /// What: Enter retries from the error state; `r` refreshes in the configured mode.
    fn enter_retries_and_r_refreshes() {
        let (s, mut load_rx, mut sim_rx) = senders();
        let mut app = loaded();
        app.ui_state = UiState::Error("boom".into());
        handle_event(&press(KeyCode::Enter), &mut app, &s);
        assert_eq!(app.ui_state, UiState::Loading);
        let req = load_rx.try_recv().expect("retry queued");
        assert_eq!(req.endpoint, LoadEndpoint::News);

        // Busy: refresh is ignored.
        handle_event(&press(KeyCode::Char('r')), &mut app, &s);
        assert!(sim_rx.try_recv().is_err());

        app.ui_state = UiState::Loaded;
        app.refresh_mode = RefreshMode::Real;
        handle_event(&press(KeyCode::Char('r')), &mut app, &s);
        let req = load_rx.try_recv().expect("refresh queued");
        assert_eq!(req.endpoint, LoadEndpoint::Refresh);
    }
}
