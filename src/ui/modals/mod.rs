use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::theme::theme;

mod article;
mod help;

pub use article::render_article;
pub use help::render_help;

/// What: Draw the scrim and an empty popup frame centered in `area`.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `max_w`/`max_h`: Size limits of the popup
/// - `title`: Border title
///
/// Output:
/// - `(outer, inner)` rectangles of the popup.
pub(super) fn popup_frame(
    f: &mut Frame,
    area: Rect,
    max_w: u16,
    max_h: u16,
    title: &str,
) -> (Rect, Rect) {
    let th = theme();
    f.render_widget(Block::default().style(Style::default().bg(th.mantle)), area);
    let w = area.width.saturating_sub(8).min(max_w);
    let h = area.height.saturating_sub(4).min(max_h);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    (rect, inner)
}
