use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Draw the key hints and the background refresh status line.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let push = if app.stream_enabled { "push on" } else { "push off" };
    let mut spans = vec![
        Span::styled(
            "q quit  r refresh  Tab filter  Enter open  ? help",
            Style::default().fg(th.overlay1),
        ),
        Span::styled(
            format!("   poll {}m · {push}", app.poll_minutes),
            Style::default().fg(th.subtext0),
        ),
    ];
    if !app.terminal_focused {
        spans.push(Span::styled(" · paused", Style::default().fg(th.yellow)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
