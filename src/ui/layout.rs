// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this stack the panels vertically.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedLayout {
    /// Track list, or the directory browser while it is open
    pub list_area: Rect,
    pub player_area: Rect,
    /// One line at the bottom
    pub status_area: Rect,
}

/// Compute the layout for the total terminal area.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let (main_area, status_area) = (rows[0], rows[1]);

    let panels = if main_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_area)
    } else {
        // Portrait: list on top, player below
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(9)])
            .split(main_area)
    };

    ComputedLayout {
        list_area: panels[0],
        player_area: panels[1],
        status_area,
    }
}
