//! Core value types used by newsdeck state.

use std::fmt;

/// Stable identifier of an article within one loaded list.
///
/// Assigned as the 1-based position in server order when a load succeeds and
/// carried unchanged through filtering and simulated rotation, so a card
/// always resolves to the article it displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub usize);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single news article as displayed by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    /// Stable identifier, see [`ArticleId`].
    pub id: ArticleId,
    /// Headline text.
    pub title: String,
    /// Category label as sent by the server (matched case-sensitively).
    pub category: String,
    /// Plain summary text.
    pub summary: String,
    /// Optional rewritten summary that takes precedence over `summary`.
    pub ai_summary: Option<String>,
    /// Publishing site, when known.
    pub source: Option<String>,
    /// Display time string (not parsed).
    pub time: String,
    /// Link to the original article, when known.
    pub url: Option<String>,
}

/// Placeholder shown when an article has no source.
pub const UNKNOWN_SOURCE: &str = "Unknown source";

impl Article {
    /// What: Text to show as the article body.
    ///
    /// Output:
    /// - `ai_summary` when present, otherwise `summary`.
    #[must_use]
    pub fn display_summary(&self) -> &str {
        self.ai_summary.as_deref().unwrap_or(&self.summary)
    }

    /// What: Whether `other` is the same story, independent of its list position.
    ///
    /// Details:
    /// - Compares links when both have one, otherwise title and time.
    #[must_use]
    pub fn same_story(&self, other: &Self) -> bool {
        match (self.url.as_deref(), other.url.as_deref()) {
            (Some(a), Some(b)) => a == b,
            _ => self.title == other.title && self.time == other.time,
        }
    }

    /// What: Source label with the fixed placeholder for missing sources.
    #[must_use]
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }
}

/// Active category filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every article passes.
    #[default]
    All,
    /// Only articles whose category equals this value exactly.
    Category(String),
}

impl CategoryFilter {
    /// What: Whether `article` passes this filter.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => article.category == *c,
        }
    }

    /// What: Short chip label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(c) => c,
        }
    }
}

/// Outcome of the last load attempt; selects the visible body region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    /// A visible load is in flight (spinner shown, refresh disabled).
    #[default]
    Loading,
    /// The last load failed with this message.
    Error(String),
    /// Articles are displayed.
    Loaded,
}

/// How a manual refresh behaves. Chosen once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Show the loading state for a fixed delay, then rotate the list locally.
    #[default]
    Simulated,
    /// Call the refresh endpoint and replace the list with its result.
    Real,
}

/// Backend endpoint a load targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEndpoint {
    /// `GET /api/news`
    News,
    /// `GET /api/refresh`
    Refresh,
}

impl LoadEndpoint {
    /// What: Request path relative to the server base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::News => "/api/news",
            Self::Refresh => "/api/refresh",
        }
    }
}

/// What caused a load; used for logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTrigger {
    /// First load after startup.
    Startup,
    /// User pressed refresh (or retried after an error).
    Manual,
    /// Poll timer fired while the terminal was focused.
    Poll,
    /// Push channel reported `news_updated`.
    Push,
}

/// Message sent from the controller to the load worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    /// Endpoint to call.
    pub endpoint: LoadEndpoint,
    /// When true the UI did not enter the Loading state for this request.
    pub silent: bool,
    /// What caused the request.
    pub trigger: LoadTrigger,
}

/// Successful load result handed back to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsSnapshot {
    /// Articles in server order with ids assigned.
    pub articles: Vec<Article>,
    /// Server update timestamp (`last_update`, else `timestamp`).
    pub last_update: Option<String>,
    /// Server-reported article count, when sent.
    pub count: Option<usize>,
}
