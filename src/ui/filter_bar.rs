use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::filter_options;
use crate::state::AppState;
use crate::theme::theme;

/// What: Draw the category chips and record their rectangles.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state; `filter_chip_rects` is rebuilt
/// - `area`: Filter bar region
///
/// Details:
/// - Chips that do not fit on the line are not drawn; they stay reachable with `Tab`.
pub fn render_filter_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(" Categories ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.filter_chip_rects.clear();
    let right = inner.x.saturating_add(inner.width);
    let mut x = inner.x;
    for (index, option) in filter_options(&app.articles, &app.default_categories)
        .into_iter()
        .enumerate()
    {
        let text = if index < 10 {
            format!(" {index} {} ", option.label())
        } else {
            format!(" {} ", option.label())
        };
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        if x.saturating_add(w) > right {
            break;
        }
        let style = if option == app.filter {
            Style::default()
                .fg(th.base)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text).bg(th.surface1)
        };
        let rect = Rect::new(x, inner.y, w, 1);
        f.render_widget(Paragraph::new(Span::styled(text, style)), rect);
        app.filter_chip_rects.push((option, rect));
        x = x.saturating_add(w + 1);
    }
}
