//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::{AppState, Article, ArticleId};

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}

#[cfg(test)]
/// What: Build a minimal article with the given id, title and category.
///
/// Inputs:
/// - `id`: 1-based stable id
/// - `title`: Headline
/// - `category`: Category label
///
/// Output: `Article` with a summary derived from the title and no optional fields
pub fn article(id: usize, title: &str, category: &str) -> Article {
    Article {
        id: ArticleId(id),
        title: title.to_string(),
        category: category.to_string(),
        summary: format!("{title} summary"),
        ai_summary: None,
        source: None,
        time: "2024-01-01 08:00".to_string(),
        url: None,
    }
}
