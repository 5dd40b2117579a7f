// src/audio/mod.rs
//! Audio module - handles playback output and stream properties.

pub mod metadata;
pub mod player;

// Re-export commonly used types
pub use metadata::probe_duration;
pub use player::{try_decode, MusicPlayer};
