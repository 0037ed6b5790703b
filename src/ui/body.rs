use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, Article, UiState};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Minimum card width; the grid fits as many columns as this allows.
const CARD_MIN_WIDTH: u16 = 34;
/// Card height including borders.
const CARD_HEIGHT: u16 = 7;

/// What: Draw the body region for the current UI state.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state; `card_rects`, `grid_columns` and `grid_row_offset` are updated
/// - `area`: Body region
///
/// Details:
/// - Exactly one of spinner, error banner or card grid is drawn.
pub fn render_body(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.card_rects.clear();
    if let UiState::Error(message) = &app.ui_state {
        render_error(f, message, area);
    } else if app.is_busy() {
        render_loading(f, app, area);
    } else {
        render_grid(f, app, area);
    }
}

/// What: Centered spinner with a caption.
fn render_loading(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let y = area.y + area.height / 2;
    let line = Line::from(vec![
        Span::styled(
            super::spinner_glyph(app.spinner_frame),
            Style::default().fg(th.sapphire),
        ),
        Span::styled(" Loading news…", Style::default().fg(th.subtext0)),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, 1),
    );
}

/// What: Error banner with the failure message and the retry hint.
fn render_error(f: &mut Frame, message: &str, area: Rect) {
    let th = theme();
    let h = area.height.min(6);
    let rect = Rect::new(area.x, area.y + (area.height - h) / 2, area.width, h);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to retry or r to refresh",
            Style::default().fg(th.overlay1),
        )),
    ];
    let block = Block::default()
        .title(Span::styled(" Error ", Style::default().fg(th.red)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.red));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

/// What: Card grid for the filtered articles, scrolled so the highlight is visible.
fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let visible: Vec<Article> = app.visible_articles().into_iter().cloned().collect();
    if visible.is_empty() {
        let text = if app.articles.is_empty() {
            "No articles yet"
        } else {
            "No articles in this category"
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1)))
                .alignment(Alignment::Center),
            Rect::new(area.x, area.y + area.height / 2, area.width, 1),
        );
        return;
    }

    let cols = usize::from((area.width / CARD_MIN_WIDTH).max(1));
    let rows_fit = usize::from((area.height / CARD_HEIGHT).max(1));
    app.grid_columns = cols;
    app.clamp_selection();
    let selected_row = app.selected / cols;
    if selected_row < app.grid_row_offset {
        app.grid_row_offset = selected_row;
    } else if selected_row >= app.grid_row_offset + rows_fit {
        app.grid_row_offset = selected_row + 1 - rows_fit;
    }

    let card_w = area.width / u16::try_from(cols).unwrap_or(1);
    let first = app.grid_row_offset * cols;
    for (offset, article) in visible.iter().skip(first).take(rows_fit * cols).enumerate() {
        let (row, col) = (offset / cols, offset % cols);
        let x = area.x + card_w * u16::try_from(col).unwrap_or(0);
        let y = area.y + CARD_HEIGHT * u16::try_from(row).unwrap_or(0);
        let h = CARD_HEIGHT.min(area.y + area.height - y);
        let rect = Rect::new(x, y, card_w, h);
        render_card(f, article, first + offset == app.selected, rect);
        app.card_rects.push((article.id, rect));
    }
}

/// What: One article card: title, category (and source when known), summary, time.
fn render_card(f: &mut Frame, article: &Article, selected: bool, rect: Rect) {
    let th = theme();
    let inner_w = usize::from(rect.width.saturating_sub(2));
    let border = if selected { th.lavender } else { th.surface1 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title_bottom(Span::styled(
            truncate_to_width(&format!(" {} ", article.time), inner_w),
            Style::default().fg(th.overlay1),
        ));
    let mut tags = vec![Span::styled(
        article.category.clone(),
        Style::default().fg(th.mauve),
    )];
    if let Some(source) = article.source.as_deref() {
        tags.push(Span::styled(
            format!(" · {source}"),
            Style::default().fg(th.overlay1),
        ));
    }
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&article.title, inner_w),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(tags),
        Line::from(Span::styled(
            article.display_summary().to_string(),
            Style::default().fg(th.subtext0),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}
