// src/fs/reader.rs
//! Reading track bytes, on the caller's thread or in the background.

use std::{
    fs,
    path::Path,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread,
};

use crate::{
    audio::{probe_duration, try_decode},
    error::PlayerError,
    transport::{FetchOutcome, FetchRequest, TrackAudio, TrackFetcher},
};

/// Read a whole track into memory.
pub fn try_read_track(path: &Path) -> Result<Vec<u8>, PlayerError> {
    fs::read(path).map_err(|source| PlayerError::TrackReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole track into memory, `None` on any error.
pub fn read_file_bytes(path: &Path) -> Option<Vec<u8>> {
    match try_read_track(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// Read a track and make sure the decoder accepts it. A file that reads
/// but does not decode fails here, before the transport commits to it.
pub fn try_load_track(path: &Path) -> Result<TrackAudio, PlayerError> {
    let bytes: Arc<[u8]> = try_read_track(path)?.into();
    try_decode(&bytes).map_err(|source| PlayerError::TrackDecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let duration = probe_duration(&bytes);
    Ok(TrackAudio { bytes, duration })
}

/// Fetcher that reads each track on its own worker thread and reports the
/// outcome over a channel drained by the UI loop.
pub struct ThreadedFetcher {
    tx: Sender<FetchOutcome>,
}

impl ThreadedFetcher {
    pub fn channel() -> (Self, Receiver<FetchOutcome>) {
        let (tx, rx) = mpsc::channel::<FetchOutcome>();
        (Self { tx }, rx)
    }
}

impl TrackFetcher for ThreadedFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = match try_load_track(&request.path) {
                Ok(audio) => FetchOutcome::loaded(request.ticket, audio),
                Err(e) => {
                    log::warn!("{e}");
                    FetchOutcome::failed(request.ticket)
                }
            };
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(outcome);
        });
    }
}
