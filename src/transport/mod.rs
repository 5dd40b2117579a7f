// src/transport/mod.rs
//! Transport module - playlist source, play/pause/next/previous state machine.

pub mod controller;
pub mod delayed;
pub mod fetch;
pub mod playlist;

// Re-export commonly used types
pub use controller::{
    clamp_volume, TransportController, TransportStatus, RESTART_THRESHOLD, REWIND_WINDOW,
};
pub use delayed::DelayedAction;
pub use fetch::{FetchOutcome, FetchRequest, FetchTicket, PlaybackOutput, TrackAudio, TrackFetcher};
pub use playlist::PlaylistSource;
