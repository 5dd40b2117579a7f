// src/ui/widgets/mod.rs
//! Custom widgets for the tapedeck UI.

pub mod file_list;
pub mod player_panel;
pub mod status_bar;

// Re-export widget rendering functions
pub use file_list::{render_browser, render_track_list};
pub use player_panel::render_player_panel;
pub use status_bar::render_status_bar;
