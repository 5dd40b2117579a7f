// src/transport/fetch.rs
//! The seams the controller drives: fetching track bytes and playing them.

use std::{path::PathBuf, sync::Arc, time::Duration};

/// Identity of one fetch. Outcomes whose ticket no longer matches the
/// controller's pending fetch are stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    /// Playlist index the fetched bytes belong to.
    pub index: usize,
}

/// A request handed to a [`TrackFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub path: PathBuf,
}

/// Decodable audio for one track.
#[derive(Debug, Clone)]
pub struct TrackAudio {
    pub bytes: Arc<[u8]>,
    /// Stream length, when it could be probed.
    pub duration: Option<Duration>,
}

/// Result of a fetch, delivered back to the controller.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    /// `None` when the read or the decode check failed.
    pub audio: Option<TrackAudio>,
}

impl FetchOutcome {
    pub fn loaded(ticket: FetchTicket, audio: TrackAudio) -> Self {
        Self { ticket, audio: Some(audio) }
    }

    pub fn failed(ticket: FetchTicket) -> Self {
        Self { ticket, audio: None }
    }
}

/// Reads track bytes somewhere off the caller's stack. Completion is
/// reported later as a [`FetchOutcome`].
pub trait TrackFetcher {
    fn fetch(&mut self, request: FetchRequest);
}

/// The active playback element.
pub trait PlaybackOutput {
    /// Replace the current source with `audio`, paused at position 0.
    fn load(&mut self, audio: TrackAudio);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to_start(&mut self);
    /// Drop the current source entirely.
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// Position into the loaded source.
    fn position(&self) -> Duration;
    /// True once per source that played through to its end.
    fn take_finished(&mut self) -> bool;
}
