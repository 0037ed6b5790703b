use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, RefreshMode};
use crate::theme::theme;

/// What: Draw the header: update label, refresh mode and the refresh button.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state; `refresh_button_rect` is recorded
/// - `area`: Header region
///
/// Details:
/// - The button shows a spinner and is drawn disabled while a visible load runs.
pub fn render_header(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            " newsdeck ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let busy = app.is_busy();
    let button = if busy {
        format!("[ {} Refreshing ]", super::spinner_glyph(app.spinner_frame))
    } else {
        "[ ⟳ Refresh ]".to_string()
    };
    let button_w = u16::try_from(button.width()).unwrap_or(u16::MAX);
    let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(button_w)]).split(inner);

    let label = if app.last_update_label.is_empty() {
        "—".to_string()
    } else {
        app.last_update_label.clone()
    };
    let mode = match app.refresh_mode {
        RefreshMode::Simulated => "simulated refresh",
        RefreshMode::Real => "live refresh",
    };
    let left = Line::from(vec![
        Span::styled("Updated: ", Style::default().fg(th.overlay1)),
        Span::styled(label, Style::default().fg(th.text)),
        Span::styled(format!("   {mode}"), Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(Paragraph::new(left), cols[0]);

    let button_style = if busy {
        Style::default().fg(th.yellow)
    } else {
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
    };
    f.render_widget(Paragraph::new(Span::styled(button, button_style)), cols[1]);
    app.refresh_button_rect = (cols[1].width > 0).then_some(cols[1]);
}
