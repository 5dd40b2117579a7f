// src/app/state.rs
//! Application state management.

use std::{
    path::PathBuf,
    sync::mpsc::Receiver,
    time::Instant,
};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{widgets::ListState, Frame};

use crate::{
    audio::MusicPlayer,
    config::{self, Settings, SettingsStore},
    fs::{scan_reporting, tail_path, DirectoryBrowser, ThreadedFetcher},
    transport::{FetchOutcome, PlaylistSource, TransportController, TransportStatus},
    ui::{
        keybindings::{browser_key_to_action, player_key_to_action, NavigationAction},
        layout::compute_layout,
        widgets::{render_browser, render_player_panel, render_status_bar, render_track_list},
    },
};

/// Volume change per key press.
pub const VOLUME_STEP: f32 = 0.05;

/// Which view has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Player,
    /// The directory picker is open.
    Browse,
}

/// Main application state.
pub struct App {
    /// Transport over the current playlist
    pub controller: TransportController<ThreadedFetcher, MusicPlayer>,
    /// Fetch outcomes from background readers
    fetch_rx: Receiver<FetchOutcome>,

    pub mode: Mode,
    /// Directory picker
    pub browser: DirectoryBrowser,
    /// List widget state for the picker
    pub browser_state: ListState,
    /// List widget state for the track list
    pub track_state: ListState,

    settings: Settings,
    store: SettingsStore,
    /// One-line message shown under the player
    pub status: String,
}

impl App {
    /// Create the application from the user's settings.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let store = SettingsStore::in_dir(&config::config_dir());
        Ok(Self::with_store(store, cwd))
    }

    /// Create the application from `store`. Without a remembered directory
    /// the picker opens at `start_dir`.
    pub fn with_store(store: SettingsStore, start_dir: PathBuf) -> Self {
        let settings = store.load();
        let (fetcher, fetch_rx) = ThreadedFetcher::channel();
        let controller = TransportController::new(fetcher, MusicPlayer::new(), settings.volume());

        let browse_from = settings
            .last_directory
            .clone()
            .filter(|d| d.is_dir())
            .unwrap_or(start_dir);

        let mut app = Self {
            controller,
            fetch_rx,
            mode: Mode::Player,
            browser: DirectoryBrowser::new(browse_from),
            browser_state: ListState::default(),
            track_state: ListState::default(),
            settings,
            store,
            status: String::new(),
        };
        app.browser_state.select(Some(0));

        match app.settings.last_directory.clone() {
            Some(dir) => app.load_directory(dir),
            None => {
                app.mode = Mode::Browse;
                app.status = "Choose a music directory".into();
            }
        }
        app
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match self.mode {
            Mode::Player => self.on_player_key(player_key_to_action(&key)),
            Mode::Browse => self.on_browser_key(browser_key_to_action(&key)),
        }
    }

    fn on_player_key(&mut self, action: NavigationAction) -> bool {
        match action {
            NavigationAction::TogglePause => self.controller.toggle_play_pause(),
            NavigationAction::NextTrack => self.controller.next(),
            NavigationAction::PreviousTrack => self.controller.previous(Instant::now()),
            NavigationAction::VolumeUp => self.change_volume(VOLUME_STEP),
            NavigationAction::VolumeDown => self.change_volume(-VOLUME_STEP),
            NavigationAction::OpenBrowser => self.mode = Mode::Browse,
            NavigationAction::Quit => return true,
            _ => {}
        }
        false
    }

    fn on_browser_key(&mut self, action: NavigationAction) -> bool {
        match action {
            NavigationAction::Down => self.browser.down(),
            NavigationAction::Up => self.browser.up(),
            NavigationAction::Enter => {
                self.browser.enter();
            }
            NavigationAction::Back => {
                self.browser.back();
            }
            NavigationAction::Choose => {
                let dir = self.browser.choose();
                self.choose_directory(dir);
            }
            NavigationAction::Cancel => {
                // Cancelled pick: keep whatever is loaded.
                self.mode = Mode::Player;
            }
            NavigationAction::Quit => return true,
            _ => {}
        }
        self.browser_state.select(Some(self.browser.selected()));
        false
    }

    /// Adopt `dir` as the playlist source and remember it.
    pub fn choose_directory(&mut self, dir: PathBuf) {
        self.settings.last_directory = Some(dir.clone());
        self.persist();
        self.load_directory(dir);
        self.mode = Mode::Player;
    }

    /// Scan `dir` and hand the result to the transport.
    fn load_directory(&mut self, dir: PathBuf) {
        let (names, problem) = scan_reporting(&dir);
        self.status = match problem {
            Some(e) => e.to_string(),
            None => format!("{} track(s) in {}", names.len(), tail_path(&dir, 3)),
        };

        self.controller.load_playlist(PlaylistSource::new(dir, names));
        self.track_state.select(Some(0));
    }

    /// Nudge the volume and remember it.
    pub fn change_volume(&mut self, delta: f32) {
        let volume = self.controller.set_volume(self.controller.volume() + delta);
        self.settings.set_volume(volume);
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("could not save settings: {e:#}");
            self.status = "Could not save settings".into();
        }
    }

    /// Apply finished fetches and run scheduled transport work.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            self.controller.complete_fetch(outcome);
        }
        self.controller.tick(now);

        if self.controller.status() != TransportStatus::Empty {
            self.track_state.select(Some(self.controller.current_index()));
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        match self.mode {
            Mode::Browse => {
                render_browser(f, layout.list_area, &self.browser, &mut self.browser_state);
            }
            Mode::Player => {
                let title = self
                    .controller
                    .playlist()
                    .map(|p| tail_path(p.directory(), 3))
                    .unwrap_or_else(|| "No directory".into());
                let names = self
                    .controller
                    .playlist()
                    .map(PlaylistSource::track_names)
                    .unwrap_or_default();
                render_track_list(
                    f,
                    layout.list_area,
                    &title,
                    names,
                    self.controller.status(),
                    &mut self.track_state,
                );
            }
        }

        render_player_panel(f, layout.player_area, &self.controller);
        render_status_bar(f, layout.status_area, self.mode, &self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn music_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.mp3", "A.MP3", "c.txt"] {
            File::create(dir.path().join(name)).expect("create");
        }
        dir
    }

    #[test]
    fn first_run_opens_the_picker() {
        let config = tempfile::tempdir().expect("tempdir");
        let music = music_dir();
        let app = App::with_store(SettingsStore::in_dir(config.path()), music.path().into());

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.browser.current_dir(), music.path());
        assert_eq!(app.controller.status(), TransportStatus::Empty);
    }

    #[test]
    fn choosing_a_directory_loads_and_remembers_it() {
        let config = tempfile::tempdir().expect("tempdir");
        let music = music_dir();
        let store = SettingsStore::in_dir(config.path());
        let mut app = App::with_store(store.clone(), music.path().into());

        app.choose_directory(music.path().to_path_buf());

        assert_eq!(app.mode, Mode::Player);
        assert_eq!(app.controller.status(), TransportStatus::Stopped);
        assert_eq!(app.controller.current_track(), Some("A.MP3"));
        assert_eq!(store.load().last_directory, Some(music.path().to_path_buf()));
    }

    #[test]
    fn remembered_directory_and_volume_are_restored() {
        let config = tempfile::tempdir().expect("tempdir");
        let music = music_dir();
        let store = SettingsStore::in_dir(config.path());
        store
            .save(&Settings {
                last_directory: Some(music.path().to_path_buf()),
                last_volume: Some(40),
            })
            .expect("save");

        let app = App::with_store(store, PathBuf::from("/"));

        assert_eq!(app.mode, Mode::Player);
        assert_eq!(app.controller.playlist().map(PlaylistSource::len), Some(2));
        assert!((app.controller.volume() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_directory_reports_no_tracks() {
        let config = tempfile::tempdir().expect("tempdir");
        let empty = tempfile::tempdir().expect("tempdir");
        let mut app = App::with_store(SettingsStore::in_dir(config.path()), empty.path().into());

        app.choose_directory(empty.path().to_path_buf());

        assert_eq!(app.controller.status(), TransportStatus::Empty);
        assert!(app.status.contains("no MP3 files"));
    }

    #[test]
    fn unreadable_directory_reports_why() {
        let config = tempfile::tempdir().expect("tempdir");
        let music = music_dir();
        let gone = music.path().join("gone");
        let mut app = App::with_store(SettingsStore::in_dir(config.path()), music.path().into());

        app.choose_directory(gone.clone());

        assert_eq!(app.controller.status(), TransportStatus::Empty);
        assert!(app.status.starts_with(&format!("no playable tracks in {}", gone.display())));
    }

    #[test]
    fn volume_changes_are_clamped_and_persisted() {
        let config = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(config.path());
        let mut app = App::with_store(store.clone(), PathBuf::from("."));

        app.change_volume(0.5);
        assert_eq!(app.controller.volume(), 1.0);
        for _ in 0..4 {
            app.change_volume(-VOLUME_STEP);
        }

        assert_eq!(store.load().last_volume, Some(80));
        assert_eq!(app.settings().last_volume, Some(80));
    }
}
