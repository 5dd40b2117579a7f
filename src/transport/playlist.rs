// src/transport/playlist.rs
//! The ordered set of tracks built from one directory.

use std::path::{Path, PathBuf};

use crate::fs::scanner;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistSource {
    directory: PathBuf,
    track_names: Vec<String>,
}

impl PlaylistSource {
    pub fn new(directory: impl Into<PathBuf>, track_names: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            track_names,
        }
    }

    /// Build a source by scanning `directory`. An unreadable directory
    /// produces an empty source.
    pub fn scan(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let track_names = scanner::scan(&directory);
        Self { directory, track_names }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn track_names(&self) -> &[String] {
        &self.track_names
    }

    pub fn len(&self) -> usize {
        self.track_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track_names.is_empty()
    }

    pub fn track_name(&self, index: usize) -> Option<&str> {
        self.track_names.get(index).map(String::as_str)
    }

    pub fn track_path(&self, index: usize) -> Option<PathBuf> {
        self.track_name(index).map(|n| self.directory.join(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_path_joins_directory() {
        let source = PlaylistSource::new("/music", vec!["a.mp3".into(), "b.mp3".into()]);

        assert_eq!(source.track_path(1), Some(PathBuf::from("/music/b.mp3")));
        assert_eq!(source.track_path(2), None);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn scan_of_missing_directory_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = PlaylistSource::scan(dir.path().join("missing"));

        assert!(source.is_empty());
        assert_eq!(source.directory(), dir.path().join("missing"));
    }
}
