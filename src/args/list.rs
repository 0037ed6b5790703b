//! Command-line article listing.

use newsdeck::app::RunConfig;
use newsdeck::logic::filter_articles;
use newsdeck::sources::NewsClient;
use newsdeck::state::{Article, CategoryFilter, LoadEndpoint};
use newsdeck::util::format_update_time;

/// What: Format articles as plain text blocks for stdout.
///
/// Inputs:
/// - `articles`: Articles to print, in order
///
/// Output:
/// - One block per article: `[category] title`, source and time, the summary and the link.
pub fn format_articles(articles: &[&Article]) -> Vec<String> {
    articles
        .iter()
        .map(|a| {
            let mut block = format!(
                "[{}] {}\n    {} | {}\n    {}",
                a.category,
                a.title,
                a.source_label(),
                a.time,
                a.display_summary()
            );
            if let Some(url) = a.url.as_deref() {
                block.push_str("\n    ");
                block.push_str(url);
            }
            block
        })
        .collect()
}

/// What: Fetch the article list once and print it.
///
/// Inputs:
/// - `config`: Effective configuration (server URL)
/// - `category`: Optional exact category to keep
///
/// Output:
/// - Process exit code: `0` on success, `1` when the load failed.
pub async fn handle_list(config: &RunConfig, category: Option<&str>) -> i32 {
    tracing::info!(server = %config.server_url, category = ?category, "list mode requested from CLI");
    let client = match NewsClient::new(&config.server_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let snapshot = match client.fetch(LoadEndpoint::News).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "list mode load failed");
            eprintln!("error: {e}");
            return 1;
        }
    };
    let filter = category.map_or(CategoryFilter::All, |c| CategoryFilter::Category(c.to_string()));
    let shown = filter_articles(&snapshot.articles, &filter);
    println!(
        "Updated: {}  ({} articles)\n",
        format_update_time(snapshot.last_update.as_deref(), chrono::Local::now()),
        shown.len()
    );
    for block in format_articles(&shown) {
        println!("{block}\n");
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdeck::state::ArticleId;

    #[test]
    /// What: Blocks use the placeholder source and include the link only when present.
    fn blocks_include_placeholder_and_optional_link() {
        let plain = Article {
            id: ArticleId(1),
            title: "A".into(),
            category: "tech".into(),
            summary: "s".into(),
            ai_summary: None,
            source: None,
            time: "t".into(),
            url: None,
        };
        let linked = Article {
            id: ArticleId(2),
            url: Some("https://e.x/2".into()),
            ai_summary: Some("better".into()),
            ..plain.clone()
        };
        let out = format_articles(&[&plain, &linked]);
        assert_eq!(out[0], "[tech] A\n    Unknown source | t\n    s");
        assert_eq!(
            out[1],
            "[tech] A\n    Unknown source | t\n    better\n    https://e.x/2"
        );
    }
}
