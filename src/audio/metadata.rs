// src/audio/metadata.rs
//! Stream properties read with Lofty. Tags are never looked at.

use std::{io::Cursor, time::Duration};

use anyhow::Result;
use lofty::file::AudioFile;
use lofty::probe::Probe;

/// Probe the length of an in-memory track.
pub fn try_probe_duration(bytes: &[u8]) -> Result<Duration> {
    let tagged_file = Probe::new(Cursor::new(bytes)).guess_file_type()?.read()?;
    Ok(tagged_file.properties().duration())
}

/// Length of an in-memory track, if Lofty can make sense of it.
/// This is safe to call from a background thread.
pub fn probe_duration(bytes: &[u8]) -> Option<Duration> {
    match try_probe_duration(bytes) {
        Ok(d) if !d.is_zero() => Some(d),
        Ok(_) => None,
        Err(e) => {
            log::debug!("could not probe duration: {e}");
            None
        }
    }
}
