//! Applying load results to the controller state.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::sources::NewsError;
use crate::state::{AppState, LoadRequest, Modal, NewsSnapshot, UiState};
use crate::util::format_update_time;

/// What: Replace the article list with a fresh snapshot.
///
/// Inputs:
/// - `app`: Application state
/// - `snapshot`: Successful load result
/// - `now`: Client clock, used when the snapshot carries no timestamp
///
/// Details:
/// - The list is replaced wholesale, never merged.
/// - The filter is kept; the highlight is clamped into the new filtered list.
/// - Ids are positions in the new list, so an open article popup is re-pointed to the
///   same story in the new list, or closed when the story is gone.
pub fn apply_snapshot(app: &mut AppState, snapshot: NewsSnapshot, now: DateTime<Local>) {
    if let Some(count) = snapshot.count
        && count != snapshot.articles.len()
    {
        debug!(
            count,
            received = snapshot.articles.len(),
            "server count differs from data length"
        );
    }
    let open = match app.modal {
        Modal::Article { id } => app.article_by_id(id).cloned(),
        _ => None,
    };
    app.articles = snapshot.articles;
    app.ui_state = UiState::Loaded;
    app.last_update_label = format_update_time(snapshot.last_update.as_deref(), now);
    app.clamp_selection();
    if matches!(app.modal, Modal::Article { .. }) {
        app.modal = open
            .and_then(|old| app.articles.iter().find(|a| a.same_story(&old)))
            .map_or(Modal::None, |a| Modal::Article { id: a.id });
    }
}

/// What: Apply the outcome of one load request.
///
/// Inputs:
/// - `app`: Application state
/// - `request`: The request this outcome answers
/// - `outcome`: Snapshot or error from the load worker
///
/// Details:
/// - Results are applied in arrival order; a late answer to an older request still
///   overwrites newer state.
/// - Failures move the UI to `Error` regardless of `silent`.
pub fn apply_load_outcome(
    app: &mut AppState,
    request: LoadRequest,
    outcome: Result<NewsSnapshot, NewsError>,
) {
    match outcome {
        Ok(snapshot) => {
            info!(
                trigger = ?request.trigger,
                endpoint = request.endpoint.path(),
                silent = request.silent,
                articles = snapshot.articles.len(),
                "news loaded"
            );
            apply_snapshot(app, snapshot, Local::now());
        }
        Err(e) => {
            warn!(
                trigger = ?request.trigger,
                endpoint = request.endpoint.path(),
                silent = request.silent,
                error = %e,
                "news load failed"
            );
            app.ui_state = UiState::Error(e.to_string());
        }
    }
}
