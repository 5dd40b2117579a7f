// src/ui/widgets/status_bar.rs
//! Bottom line: last message plus the keys for the active view.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Mode;

/// Key hints for `mode`.
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Player => "space play/pause · p prev (x2 skip) · n next · +/- vol · o open · q quit",
        Mode::Browse => "↑/↓ move · enter open · ← up · s select · esc cancel",
    }
}

pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, mode: Mode, message: &str) {
    let mut spans = Vec::new();
    if !message.is_empty() {
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(key_hints(mode), Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
