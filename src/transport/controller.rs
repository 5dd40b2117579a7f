// src/transport/controller.rs
//! Transport state machine: playlist, current track, play/pause, rewind clicks.
//!
//! Track changes go through the [`TrackFetcher`]. The controller remembers the
//! ticket of the one fetch it is waiting for and only commits the new index
//! and play state when that exact outcome arrives, so outcomes overtaken by
//! later requests are ignored. Requests made while a fetch is outstanding are
//! computed from its target, which lets repeated presses accumulate.

use std::time::{Duration, Instant};

use super::{
    delayed::DelayedAction,
    fetch::{FetchOutcome, FetchRequest, FetchTicket, PlaybackOutput, TrackFetcher},
    playlist::PlaylistSource,
};

/// Window in which a second rewind press counts as a double click.
pub const REWIND_WINDOW: Duration = Duration::from_millis(300);

/// A single rewind press restarts the track once playback is past this point.
pub const RESTART_THRESHOLD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStatus {
    /// No playlist, or a playlist without tracks.
    Empty,
    Stopped,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFetch {
    ticket: FetchTicket,
    /// Start playback when the bytes arrive.
    play: bool,
}

/// Clamp a volume to `[0, 1]`. NaN has no meaningful clamp and yields `None`.
pub fn clamp_volume(volume: f32) -> Option<f32> {
    (!volume.is_nan()).then(|| volume.clamp(0.0, 1.0))
}

pub struct TransportController<F, O> {
    fetcher: F,
    output: O,
    playlist: Option<PlaylistSource>,
    current_index: usize,
    is_playing: bool,
    volume: f32,
    /// Index whose audio currently sits in the output.
    loaded: Option<usize>,
    duration: Option<Duration>,
    pending: Option<PendingFetch>,
    generation: u64,
    rewind: DelayedAction,
}

impl<F: TrackFetcher, O: PlaybackOutput> TransportController<F, O> {
    pub fn new(fetcher: F, mut output: O, volume: f32) -> Self {
        let volume = clamp_volume(volume).unwrap_or(1.0);
        output.set_volume(volume);
        Self {
            fetcher,
            output,
            playlist: None,
            current_index: 0,
            is_playing: false,
            volume,
            loaded: None,
            duration: None,
            pending: None,
            generation: 0,
            rewind: DelayedAction::new(),
        }
    }

    pub fn status(&self) -> TransportStatus {
        if self.track_count() == 0 {
            TransportStatus::Empty
        } else if self.is_playing {
            TransportStatus::Playing
        } else {
            TransportStatus::Stopped
        }
    }

    pub fn playlist(&self) -> Option<&PlaylistSource> {
        self.playlist.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> Option<&str> {
        self.playlist.as_ref()?.track_name(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// True while a track fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_rewind_armed(&self) -> bool {
        self.rewind.is_armed()
    }

    /// Position into the current track, zero until its audio is loaded.
    pub fn position(&self) -> Duration {
        if self.loaded == Some(self.current_index) {
            self.output.position()
        } else {
            Duration::ZERO
        }
    }

    /// Length of the loaded track, if known.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fetcher_mut(&mut self) -> &mut F {
        &mut self.fetcher
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn track_count(&self) -> usize {
        self.playlist.as_ref().map_or(0, PlaylistSource::len)
    }

    /// Where the transport is headed: the outstanding fetch if any, else
    /// the committed state.
    fn intended(&self) -> (usize, bool) {
        match self.pending {
            Some(p) => (p.ticket.index, p.play),
            None => (self.current_index, self.is_playing),
        }
    }

    /// Replace the playlist. Always lands stopped on track 0 and prefetches
    /// it without playing.
    pub fn load_playlist(&mut self, source: PlaylistSource) {
        self.rewind.cancel();
        self.pending = None;
        self.output.stop();
        self.loaded = None;
        self.duration = None;
        self.current_index = 0;
        self.is_playing = false;

        log::info!(
            "loaded playlist {} with {} track(s)",
            source.directory().display(),
            source.len()
        );
        let has_tracks = !source.is_empty();
        self.playlist = Some(source);
        if has_tracks {
            self.request(0, false);
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.status() == TransportStatus::Empty {
            return;
        }

        if let Some(pending) = self.pending.as_mut() {
            if self.is_playing {
                self.output.pause();
                self.is_playing = false;
                pending.play = false;
            } else {
                pending.play = !pending.play;
            }
            return;
        }

        if self.is_playing {
            self.output.pause();
            self.is_playing = false;
            log::debug!("paused track {}", self.current_index);
        } else if self.loaded == Some(self.current_index) {
            self.output.play();
            self.is_playing = true;
            log::debug!("playing track {}", self.current_index);
        } else {
            self.request(self.current_index, true);
        }
    }

    /// Advance one track. Wrapping past the last track lands stopped on
    /// track 0 even if the transport was playing.
    pub fn next(&mut self) {
        let len = self.track_count();
        if len == 0 {
            return;
        }
        let (index, play) = self.intended();
        let target = (index + 1) % len;
        let wrapped = target == 0;
        if wrapped {
            log::debug!("wrapped to first track, stopping");
        }
        self.request(target, play && !wrapped);
    }

    /// Handle one rewind press at `now`.
    ///
    /// The first press arms the disambiguation window; the single-click
    /// action runs from [`tick`](Self::tick) once the window lapses. A second
    /// press inside the window cancels it and steps back immediately.
    pub fn previous(&mut self, now: Instant) {
        if self.status() == TransportStatus::Empty {
            return;
        }

        if self.rewind.is_pending_at(now) {
            self.rewind.cancel();
            log::debug!("rewind double click");
            self.step_back();
            return;
        }

        // A lapsed window that was never polled still owes its single click.
        if self.rewind.fire_if_due(now) {
            self.resolve_single_rewind();
        }
        self.rewind.schedule(now, REWIND_WINDOW);
    }

    /// Run scheduled work: the rewind single-click action and end-of-track
    /// advance.
    pub fn tick(&mut self, now: Instant) {
        if self.rewind.fire_if_due(now) {
            self.resolve_single_rewind();
        }

        let finished = self.output.take_finished();
        if finished && self.is_playing && self.pending.is_none() {
            log::debug!("track {} finished", self.current_index);
            self.next();
        }
    }

    /// Set the output volume, clamped to `[0, 1]`. Returns the applied value.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        if let Some(v) = clamp_volume(volume) {
            self.volume = v;
            self.output.set_volume(v);
        }
        self.volume
    }

    /// Apply a fetch outcome. Returns true if it changed the loaded track.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> bool {
        let pending = match self.pending {
            Some(p) if p.ticket == outcome.ticket => p,
            _ => {
                log::debug!(
                    "dropping stale fetch for track {} (generation {})",
                    outcome.ticket.index,
                    outcome.ticket.generation
                );
                return false;
            }
        };
        self.pending = None;

        let index = pending.ticket.index;
        if index >= self.track_count() {
            return false;
        }

        let Some(audio) = outcome.audio else {
            log::warn!(
                "could not load {}, staying on track {}",
                self.playlist
                    .as_ref()
                    .and_then(|p| p.track_name(index))
                    .unwrap_or("?"),
                self.current_index
            );
            return false;
        };

        self.duration = audio.duration;
        self.output.load(audio);
        self.current_index = index;
        self.loaded = Some(index);
        if pending.play {
            self.output.play();
            self.is_playing = true;
        } else {
            self.is_playing = false;
        }
        log::debug!(
            "track {} loaded ({})",
            index,
            if self.is_playing { "playing" } else { "stopped" }
        );
        true
    }

    fn resolve_single_rewind(&mut self) {
        if self.status() == TransportStatus::Empty {
            return;
        }
        let restart = self.pending.is_none()
            && self.loaded == Some(self.current_index)
            && self.output.position() >= RESTART_THRESHOLD;
        if restart {
            log::debug!("restarting track {}", self.current_index);
            self.output.seek_to_start();
        } else {
            self.step_back();
        }
    }

    /// Move to the previous track, keeping the play state. No-op on track 0.
    fn step_back(&mut self) {
        let (index, play) = self.intended();
        if index == 0 {
            return;
        }
        self.request(index - 1, play);
    }

    fn request(&mut self, index: usize, play: bool) {
        let Some(path) = self.playlist.as_ref().and_then(|p| p.track_path(index)) else {
            return;
        };

        if let Some(pending) = self.pending.as_mut() {
            if pending.ticket.index == index {
                pending.play = play;
                return;
            }
        }

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            index,
        };
        self.pending = Some(PendingFetch { ticket, play });
        log::debug!("fetching track {} ({})", index, path.display());
        self.fetcher.fetch(FetchRequest { ticket, path });
    }
}
