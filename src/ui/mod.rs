//! Terminal rendering of the dashboard.
//!
//! The screen is split into fixed regions: header (update label and refresh
//! button), filter bar, body (spinner, error banner or card grid) and footer,
//! with popups drawn on top. Rendering records hit rectangles in `AppState` for
//! mouse handling.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

mod body;
mod filter_bar;
mod footer;
mod header;
mod modals;

/// Braille spinner frames advanced by the UI tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What: Spinner glyph for the current frame counter.
#[must_use]
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// What: Draw one frame of the dashboard.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; hit rectangles are refreshed as a side effect
///
/// Details:
/// - The filter bar takes no space unless articles are loaded.
/// - Popups are drawn last; their rectangles are cleared when closed.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let filter_h = if app.filter_bar_visible() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(filter_h),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    header::render_header(f, app, chunks[0]);
    if filter_h > 0 {
        filter_bar::render_filter_bar(f, app, chunks[1]);
    } else {
        app.filter_chip_rects.clear();
    }
    body::render_body(f, app, chunks[2]);
    footer::render_footer(f, app, chunks[3]);

    app.modal_rect = None;
    app.modal_link_rect = None;
    app.modal_related_rects.clear();
    match app.modal {
        Modal::None => {}
        Modal::Article { id } => modals::render_article(f, app, id, area),
        Modal::Help => modals::render_help(f, app, area),
    }
}
