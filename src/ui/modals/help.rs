use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

/// Key bindings listed in the help overlay.
const BINDINGS: [(&str, &str); 12] = [
    ("Quit", "q / Ctrl+C"),
    ("Refresh", "r / F5"),
    ("Retry after error", "Enter"),
    ("Next / previous category", "Tab / Shift+Tab"),
    ("Jump to category", "0-9"),
    ("Move highlight", "Arrows / h j k l"),
    ("First / last card", "Home / End"),
    ("Open article", "Enter / click"),
    ("Open link", "o"),
    ("Related article (in popup)", "1-3"),
    ("Close popup", "Esc"),
    ("This help", "?"),
];

/// What: Draw the key binding overlay.
pub fn render_help(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let (rect, inner) = super::popup_frame(f, area, 64, 18, "Help");
    app.modal_rect = Some(rect);
    let lines: Vec<Line<'static>> = BINDINGS
        .iter()
        .map(|(label, keys)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:28}"),
                    Style::default()
                        .fg(th.overlay1)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("[{keys}]"), Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
