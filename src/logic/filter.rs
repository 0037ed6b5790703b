//! Category filtering and filter chip options.

use crate::state::{AppState, Article, ArticleId, CategoryFilter};

/// What: Project the article list through a category filter.
///
/// Inputs:
/// - `articles`: Full list in display order
/// - `filter`: Active filter
///
/// Output:
/// - References to the passing articles, relative order preserved.
///
/// Details:
/// - `All` keeps everything; a category keeps exact, case-sensitive matches only.
#[must_use]
pub fn filter_articles<'a>(articles: &'a [Article], filter: &CategoryFilter) -> Vec<&'a Article> {
    articles.iter().filter(|a| filter.matches(a)).collect()
}

/// What: Chips offered in the filter bar.
///
/// Inputs:
/// - `articles`: Current list
/// - `defaults`: Configured default categories
///
/// Output:
/// - `All`, then each default, then categories seen in the data that are not
///   defaults, in first-appearance order. No duplicates, empty categories skipped.
#[must_use]
pub fn filter_options(articles: &[Article], defaults: &[String]) -> Vec<CategoryFilter> {
    let mut names: Vec<&str> = Vec::with_capacity(defaults.len() + 4);
    let candidates = defaults
        .iter()
        .map(String::as_str)
        .chain(articles.iter().map(|a| a.category.as_str()));
    for name in candidates {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    std::iter::once(CategoryFilter::All)
        .chain(names.into_iter().map(|n| CategoryFilter::Category(n.to_string())))
        .collect()
}

/// What: Other articles of the same category as `id`.
///
/// Inputs:
/// - `articles`: Full list
/// - `id`: Article whose neighbours are wanted
/// - `limit`: Maximum number returned
///
/// Output:
/// - Up to `limit` articles sharing the category, in list order, excluding `id`
///   itself. Empty when `id` is unknown.
#[must_use]
pub fn related_articles(articles: &[Article], id: ArticleId, limit: usize) -> Vec<&Article> {
    let Some(current) = articles.iter().find(|a| a.id == id) else {
        return Vec::new();
    };
    articles
        .iter()
        .filter(|a| a.id != id && a.category == current.category)
        .take(limit)
        .collect()
}

/// What: Activate a filter and reset the card highlight.
///
/// Inputs:
/// - `app`: Application state
/// - `filter`: Filter to activate
///
/// Details:
/// - Never touches `app.articles`; only the projection changes.
pub fn set_filter(app: &mut AppState, filter: CategoryFilter) {
    if app.filter == filter {
        return;
    }
    tracing::debug!(filter = filter.label(), "category filter changed");
    app.filter = filter;
    app.selected = 0;
    app.grid_row_offset = 0;
}

/// What: Move to the previous/next chip, wrapping around.
///
/// Inputs:
/// - `app`: Application state
/// - `forward`: `true` for the next chip, `false` for the previous one
///
/// Details:
/// - Does nothing while the filter bar is hidden.
/// - An active filter that is no longer offered counts as position 0.
pub fn cycle_filter(app: &mut AppState, forward: bool) {
    if !app.filter_bar_visible() {
        return;
    }
    let options = filter_options(&app.articles, &app.default_categories);
    let len = options.len();
    let current = options.iter().position(|f| *f == app.filter).unwrap_or(0);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    if let Some(f) = options.into_iter().nth(next) {
        set_filter(app, f);
    }
}

/// What: Jump directly to the chip at `index` (0 = All).
pub fn select_filter_index(app: &mut AppState, index: usize) {
    if !app.filter_bar_visible() {
        return;
    }
    if let Some(f) = filter_options(&app.articles, &app.default_categories)
        .into_iter()
        .nth(index)
    {
        set_filter(app, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UiState;
    use crate::test_utils::article;

    fn sample() -> Vec<Article> {
        vec![
            article(1, "a", "tech"),
            article(2, "b", "policy"),
            article(3, "c", "tech"),
            article(4, "d", "Tech"),
        ]
    }

    #[test]
    /// What: Filtering keeps exact matches in order and `All` keeps everything.
    ///
    /// Inputs:
    /// - Four articles across `tech`, `policy` and `Tech`.
    ///
    /// Output:
    /// - `tech` yields ids 1 and 3 (case-sensitive), `All` yields 1..=4, unknown yields none.
    fn filter_is_exact_and_order_preserving() {
        let list = sample();
        let ids = |f: &CategoryFilter| -> Vec<usize> {
            filter_articles(&list, f).iter().map(|a| a.id.0).collect()
        };
        assert_eq!(ids(&CategoryFilter::All), vec![1, 2, 3, 4]);
        assert_eq!(ids(&CategoryFilter::Category("tech".into())), vec![1, 3]);
        assert_eq!(ids(&CategoryFilter::Category("Tech".into())), vec![4]);
        assert!(ids(&CategoryFilter::Category("te".into())).is_empty());
    }

    #[test]
    /// What: Chip options list defaults first, then new categories, without duplicates.
    fn options_merge_defaults_and_data() {
        let defaults = vec!["policy".to_string(), "funding".to_string()];
        let opts = filter_options(&sample(), &defaults);
        let labels: Vec<&str> = opts.iter().map(CategoryFilter::label).collect();
        assert_eq!(labels, vec!["All", "policy", "funding", "tech", "Tech"]);
    }

    #[test]
    /// What: Related articles share the category, exclude the source article and respect the limit.
    fn related_excludes_self_and_limits() {
        let mut list = sample();
        list.push(article(5, "e", "tech"));
        list.push(article(6, "f", "tech"));
        let rel: Vec<usize> = related_articles(&list, ArticleId(3), 3)
            .iter()
            .map(|a| a.id.0)
            .collect();
        assert_eq!(rel, vec![1, 5, 6]);
        assert!(related_articles(&list, ArticleId(2), 3).is_empty());
        assert!(related_articles(&list, ArticleId(99), 3).is_empty());
    }

    #[test]
    /// What: Cycling wraps in both directions and resets the highlight.
    fn cycle_wraps_and_resets_selection() {
        let mut app = AppState {
            articles: sample(),
            ui_state: UiState::Loaded,
            selected: 2,
            ..AppState::default()
        };
        cycle_filter(&mut app, false);
        assert_eq!(app.filter, CategoryFilter::Category("Tech".into()));
        assert_eq!(app.selected, 0);
        cycle_filter(&mut app, true);
        assert_eq!(app.filter, CategoryFilter::All);
        select_filter_index(&mut app, 2);
        assert_eq!(app.filter, CategoryFilter::Category("policy".into()));
        assert_eq!(app.articles.len(), 4, "filtering never mutates the list");
    }

    #[test]
    /// What: Filter changes are ignored while the filter bar is hidden.
    fn cycle_ignored_when_bar_hidden() {
        let mut app = AppState {
            articles: sample(),
            ui_state: UiState::Loading,
            ..AppState::default()
        };
        cycle_filter(&mut app, true);
        assert_eq!(app.filter, CategoryFilter::All);
    }
}
