// src/audio/player.rs
//! Music playback engine using rodio, driven from a dedicated audio thread.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rodio::{decoder::DecoderError, Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::transport::{PlaybackOutput, TrackAudio};

/// How often the audio thread refreshes position and end-of-track state.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Commands sent to the audio playback thread.
enum PlayerCommand {
    Load(Arc<[u8]>),
    Play,
    Pause,
    SeekToStart,
    SetVolume(f32),
    Stop,
}

/// State shared between the audio thread and the UI thread.
#[derive(Default)]
struct SharedFlags {
    has_source: AtomicBool,
    position_ms: AtomicU64,
    finished: AtomicBool,
}

/// Player holding one in-memory track at a time. The rodio output stream
/// lives on its own thread; this handle only sends commands and reads
/// mirrored flags.
pub struct MusicPlayer {
    /// Sender to the audio thread for commands
    cmd_tx: Sender<PlayerCommand>,
    flags: Arc<SharedFlags>,
}

/// Open a decoder over an in-memory track. Only the stream header is
/// parsed, so this is cheap enough to run as a validity check.
pub fn try_decode(bytes: &Arc<[u8]>) -> Result<Decoder<Cursor<Arc<[u8]>>>, DecoderError> {
    Decoder::new(Cursor::new(bytes.clone()))
}

/// Decode `bytes` into a fresh sink, paused at the start.
fn open_sink(handle: &OutputStreamHandle, bytes: &Arc<[u8]>, volume: f32) -> Option<Sink> {
    let sink = match Sink::try_new(handle) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("could not open audio sink: {e}");
            return None;
        }
    };
    match try_decode(bytes) {
        Ok(source) => {
            sink.pause();
            sink.set_volume(volume);
            sink.append(source);
            Some(sink)
        }
        Err(e) => {
            log::warn!("could not decode track: {e}");
            None
        }
    }
}

impl MusicPlayer {
    /// Create an idle player and start its audio thread.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCommand>();
        let flags = Arc::new(SharedFlags::default());
        let shared = flags.clone();

        thread::spawn(move || {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    // No output device: stay silent until the sender is dropped.
                    log::warn!("no audio output available: {e}");
                    while rx.recv().is_ok() {}
                    return;
                }
            };

            let mut sink: Option<Sink> = None;
            let mut bytes: Option<Arc<[u8]>> = None;
            let mut volume = 1.0_f32;

            loop {
                match rx.recv_timeout(POLL_INTERVAL) {
                    Ok(PlayerCommand::Load(new_bytes)) => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        sink = open_sink(&handle, &new_bytes, volume);
                        bytes = sink.as_ref().map(|_| new_bytes);
                        shared.has_source.store(sink.is_some(), Ordering::SeqCst);
                        shared.finished.store(false, Ordering::SeqCst);
                    }
                    Ok(PlayerCommand::Play) => {
                        if let Some(s) = &sink {
                            s.play();
                        }
                    }
                    Ok(PlayerCommand::Pause) => {
                        if let Some(s) = &sink {
                            s.pause();
                        }
                    }
                    Ok(PlayerCommand::SeekToStart) => {
                        let seeked = sink
                            .as_ref()
                            .map(|s| s.try_seek(Duration::ZERO))
                            .transpose();
                        if let Err(e) = seeked {
                            // Rebuild the source instead, keeping the pause state.
                            log::debug!("seek failed ({e}), reloading track");
                            let was_paused = sink.as_ref().is_none_or(Sink::is_paused);
                            if let Some(s) = sink.take() {
                                s.stop();
                            }
                            sink = bytes.as_ref().and_then(|b| open_sink(&handle, b, volume));
                            if let Some(s) = sink.as_ref().filter(|_| !was_paused) {
                                s.play();
                            }
                            shared.has_source.store(sink.is_some(), Ordering::SeqCst);
                        }
                        shared.finished.store(false, Ordering::SeqCst);
                    }
                    Ok(PlayerCommand::SetVolume(v)) => {
                        volume = v;
                        if let Some(s) = &sink {
                            s.set_volume(v);
                        }
                    }
                    Ok(PlayerCommand::Stop) => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        bytes = None;
                        shared.has_source.store(false, Ordering::SeqCst);
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }

                let position = sink.as_ref().map_or(Duration::ZERO, Sink::get_pos);
                shared
                    .position_ms
                    .store(position.as_millis() as u64, Ordering::SeqCst);
                if sink.as_ref().is_some_and(|s| s.empty() && !s.is_paused())
                    && shared.has_source.swap(false, Ordering::SeqCst)
                {
                    shared.finished.store(true, Ordering::SeqCst);
                }
            }

            if let Some(s) = sink.take() {
                s.stop();
            }
            // Keep stream alive until thread exits
            drop(stream);
        });

        Self { cmd_tx: tx, flags }
    }

    fn send(&self, cmd: PlayerCommand) {
        // The audio thread outlives every handle, so a send only fails at exit.
        let _ = self.cmd_tx.send(cmd);
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackOutput for MusicPlayer {
    fn load(&mut self, audio: TrackAudio) {
        self.flags.position_ms.store(0, Ordering::SeqCst);
        self.flags.finished.store(false, Ordering::SeqCst);
        self.send(PlayerCommand::Load(audio.bytes));
    }

    fn play(&mut self) {
        self.send(PlayerCommand::Play);
    }

    fn pause(&mut self) {
        self.send(PlayerCommand::Pause);
    }

    fn seek_to_start(&mut self) {
        self.flags.position_ms.store(0, Ordering::SeqCst);
        self.send(PlayerCommand::SeekToStart);
    }

    fn stop(&mut self) {
        self.flags.position_ms.store(0, Ordering::SeqCst);
        self.send(PlayerCommand::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(PlayerCommand::SetVolume(volume));
    }

    fn position(&self) -> Duration {
        Duration::from_millis(self.flags.position_ms.load(Ordering::SeqCst))
    }

    fn take_finished(&mut self) -> bool {
        self.flags.finished.swap(false, Ordering::SeqCst)
    }
}
