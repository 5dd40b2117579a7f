// src/error.rs
//! Error kinds surfaced by the player core.
//!
//! None of these are fatal. A `SourceUnavailable` directory becomes an empty
//! playlist, and a failed track read or decode leaves the transport where
//! it was.

use std::{io, path::PathBuf};

use rodio::decoder::DecoderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The directory cannot be read or holds no MP3 tracks.
    #[error("no playable tracks in {}: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Reading the bytes of a track failed.
    #[error("could not read track {}", .path.display())]
    TrackReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes were read but are not a stream the decoder understands.
    #[error("could not decode track {}", .path.display())]
    TrackDecodeFailure {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },
}
