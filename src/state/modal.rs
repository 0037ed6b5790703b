//! Overlay state for the UI.

use crate::state::types::ArticleId;

/// What: Overlay currently drawn above the dashboard.
///
/// - Input: Set by key and mouse handlers.
/// - Output: Tells the renderer which popup to draw and the event layer which
///   keys the popup consumes.
/// - Details: The article popup stores the stable id, not a list position, so
///   the lookup stays correct under any filter or after a rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Detail view for one article.
    Article {
        /// Article shown in the popup.
        id: ArticleId,
    },
    /// Key binding reference.
    Help,
}

impl Modal {
    /// What: Whether any overlay is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}
