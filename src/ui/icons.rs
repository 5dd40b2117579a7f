// src/ui/icons.rs
//! Icon mappings for browser entries and transport state.

use crate::transport::TransportStatus;

/// Get the appropriate icon for a file or directory entry.
pub fn icon_for_entry(is_dir: bool) -> &'static str {
    if is_dir {
        "\u{f07b}" // folder icon
    } else {
        "\u{f1c7}" // audio file icon
    }
}

/// Marker drawn next to the current track.
pub fn now_playing_icon(status: TransportStatus) -> &'static str {
    match status {
        TransportStatus::Playing => "⏵",
        TransportStatus::Stopped => "⏸",
        TransportStatus::Empty => " ",
    }
}
