use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::events::RELATED_LIMIT;
use crate::logic::related_articles;
use crate::state::{AppState, ArticleId, Modal};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Draw the article detail popup.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state; popup, link and related rectangles are recorded
/// - `id`: Article to show, looked up in the unfiltered list
/// - `area`: Full screen area
///
/// Details:
/// - The article body prefers `ai_summary`; a missing source shows `Unknown source`.
/// - The link line exists only when the article has a URL.
/// - Up to three related articles of the same category are listed.
/// - An id that no longer resolves closes the popup.
pub fn render_article(f: &mut Frame, app: &mut AppState, id: ArticleId, area: Rect) {
    let th = theme();
    let Some(article) = app.article_by_id(id).cloned() else {
        app.modal = Modal::None;
        return;
    };
    let related: Vec<(ArticleId, String)> = related_articles(&app.articles, id, RELATED_LIMIT)
        .into_iter()
        .map(|a| (a.id, a.title.clone()))
        .collect();

    let (rect, inner) = super::popup_frame(f, area, 90, 30, &article.category);
    app.modal_rect = Some(rect);
    let width = usize::from(inner.width);

    let link_h = if article.url.is_some() { 2 } else { 0 };
    let related_h = if related.is_empty() {
        0
    } else {
        u16::try_from(related.len() + 2).unwrap_or(0)
    };
    let sections = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(link_h),
        Constraint::Length(related_h),
        Constraint::Length(1),
    ])
    .split(inner);

    let head = vec![
        Line::from(Span::styled(
            truncate_to_width(&article.title, width),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(article.source_label().to_string(), Style::default().fg(th.sapphire)),
            Span::styled(format!(" · {}", article.time), Style::default().fg(th.overlay1)),
        ]),
    ];
    f.render_widget(Paragraph::new(head), sections[0]);

    f.render_widget(
        Paragraph::new(article.display_summary().to_string())
            .style(Style::default().fg(th.text))
            .wrap(Wrap { trim: true }),
        sections[1],
    );

    if let Some(url) = article.url.as_deref()
        && sections[2].height >= 2
    {
        let line_rect = Rect::new(sections[2].x, sections[2].y + 1, sections[2].width, 1);
        let text = truncate_to_width(&format!("Open original (o): {url}"), width);
        f.render_widget(
            Paragraph::new(Span::styled(
                text,
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            line_rect,
        );
        app.modal_link_rect = Some(line_rect);
    }

    if sections[3].height > 0 {
        let s = sections[3];
        f.render_widget(
            Paragraph::new(Span::styled(
                "Related",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            )),
            Rect::new(s.x, s.y + 1, s.width, 1),
        );
        for (i, (rid, title)) in related.iter().enumerate() {
            let y = s.y + 2 + u16::try_from(i).unwrap_or(0);
            if y >= s.y + s.height {
                break;
            }
            let line_rect = Rect::new(s.x, y, s.width, 1);
            let text = truncate_to_width(&format!("{}. {title}", i + 1), width);
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(th.subtext0))),
                line_rect,
            );
            app.modal_related_rects.push((*rid, line_rect));
        }
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "Esc close · o open link · 1-3 related",
            Style::default().fg(th.overlay1),
        )),
        sections[4],
    );
}
