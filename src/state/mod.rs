//! Controller state for the dashboard.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Article, ArticleId, CategoryFilter, LoadEndpoint, LoadRequest, LoadTrigger, NewsSnapshot,
    RefreshMode, UiState,
};
