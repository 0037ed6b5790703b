//! Key handling while a popup is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::related_articles;
use crate::state::{AppState, ArticleId, Modal};

/// Related articles listed in the article popup.
pub const RELATED_LIMIT: usize = 3;

/// What: Handle a key while a popup is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Application state
///
/// Details:
/// - Help: `Esc`, `Enter`, `q` or `?` close it.
/// - Article: `Esc`, `Enter`, `q` or `Backspace` close it; `o` opens the link when the
///   article has one; `1`-`3` switch to a related article.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    match app.modal {
        Modal::None => {}
        Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::Article { id } => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.modal = Modal::None;
            }
            KeyCode::Char('o') => open_article_link(app, id),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                let target = related_articles(&app.articles, id, RELATED_LIMIT)
                    .get(index)
                    .map(|a| a.id);
                if let Some(next) = target {
                    app.modal = Modal::Article { id: next };
                }
            }
            _ => {}
        },
    }
}

/// What: Open the link of article `id`, if it has one.
pub fn open_article_link(app: &AppState, id: ArticleId) {
    if let Some(url) = app.article_by_id(id).and_then(|a| a.url.as_deref()) {
        tracing::debug!(article = %id, "opening article link");
        crate::util::open_url(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::test_utils::article;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    /// What: Digit keys switch the popup to a related article of the same category.
    ///
    /// Inputs:
    /// - Popup on article 1 with related articles 3 and 4.
    ///
    /// Output:
    /// - `2` opens article 4, `3` (no third related article) keeps it, `Esc` closes.
    fn related_article_navigation() {
        let mut app = AppState {
            articles: vec![
                article(1, "a", "tech"),
                article(2, "b", "policy"),
                article(3, "c", "tech"),
                article(4, "d", "tech"),
            ],
            modal: Modal::Article { id: ArticleId(1) },
            ..AppState::default()
        };
        handle_modal_key(key(KeyCode::Char('2')), &mut app);
        assert_eq!(app.modal, Modal::Article { id: ArticleId(4) });
        handle_modal_key(key(KeyCode::Char('3')), &mut app);
        assert_eq!(app.modal, Modal::Article { id: ArticleId(4) });
        handle_modal_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: The help overlay closes on `?` and ignores unrelated keys.
    fn help_closes_on_question_mark() {
        let mut app = AppState {
            modal: Modal::Help,
            ..AppState::default()
        };
        handle_modal_key(key(KeyCode::Char('x')), &mut app);
        assert_eq!(app.modal, Modal::Help);
        handle_modal_key(key(KeyCode::Char('?')), &mut app);
        assert_eq!(app.modal, Modal::None);
    }
}
