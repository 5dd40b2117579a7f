// src/fs/browser.rs
//! Directory picker: browse the filesystem and choose a music directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::scanner::is_track_name;

/// One row of the directory browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Load the entries of `dir` worth showing in the picker: subdirectories
/// first, then tracks, each group sorted case-insensitively. Other files and
/// names that are not valid UTF-8 are hidden. An unreadable directory lists
/// nothing.
pub fn load_entries(dir: &Path) -> Vec<BrowserEntry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            log::warn!("cannot browse {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut list: Vec<BrowserEntry> = read
        .filter_map(Result::ok)
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            let is_dir = e.path().is_dir();
            (is_dir || is_track_name(&name)).then_some(BrowserEntry { name, is_dir })
        })
        .collect();
    list.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));
    list
}

/// Last `n` components of `path`, for compact titles.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}

/// Browsing state of the directory picker.
#[derive(Debug, Clone)]
pub struct DirectoryBrowser {
    current_dir: PathBuf,
    entries: Vec<BrowserEntry>,
    selected: usize,
}

impl DirectoryBrowser {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        let current_dir = start.into();
        let entries = load_entries(&current_dir);
        Self {
            current_dir,
            entries,
            selected: 0,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of tracks directly inside the browsed directory.
    pub fn track_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir).count()
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Descend into the selected entry if it is a directory.
    pub fn enter(&mut self) -> bool {
        match self.entries.get(self.selected) {
            Some(entry) if entry.is_dir => {
                let next = self.current_dir.join(&entry.name);
                self.open(next);
                true
            }
            _ => false,
        }
    }

    /// Go to the parent directory, keeping the directory we left selected.
    pub fn back(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let left = self
            .current_dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned);
        self.open(parent);
        if let Some(left) = left {
            if let Some(pos) = self.entries.iter().position(|e| e.is_dir && e.name == left) {
                self.selected = pos;
            }
        }
        true
    }

    /// The directory the user is looking at, as the chosen source.
    pub fn choose(&self) -> PathBuf {
        self.current_dir.clone()
    }

    fn open(&mut self, dir: PathBuf) {
        self.entries = load_entries(&dir);
        self.current_dir = dir;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn music_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("rock")).expect("mkdir");
        fs::create_dir(dir.path().join("Ambient")).expect("mkdir");
        File::create(dir.path().join("z.mp3")).expect("create");
        File::create(dir.path().join("B.MP3")).expect("create");
        File::create(dir.path().join("notes.txt")).expect("create");
        File::create(dir.path().join("rock").join("song.mp3")).expect("create");
        dir
    }

    #[test]
    fn lists_directories_then_tracks() {
        let tree = music_tree();
        let names: Vec<(String, bool)> = load_entries(tree.path())
            .into_iter()
            .map(|e| (e.name, e.is_dir))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Ambient".to_string(), true),
                ("rock".to_string(), true),
                ("B.MP3".to_string(), false),
                ("z.mp3".to_string(), false),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn hides_names_that_are_not_utf8() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"odd\xfe"))).expect("mkdir");
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.mp3")), b"").expect("write");
        fs::write(dir.path().join("fine.mp3"), b"").expect("write");

        let names: Vec<String> = load_entries(dir.path()).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["fine.mp3"]);
    }

    #[test]
    fn enter_and_back_navigate() {
        let tree = music_tree();
        let mut browser = DirectoryBrowser::new(tree.path());
        assert_eq!(browser.track_count(), 2);

        browser.down();
        assert!(browser.enter());
        assert_eq!(browser.current_dir(), tree.path().join("rock"));
        assert_eq!(browser.track_count(), 1);
        assert!(!browser.enter());

        assert!(browser.back());
        assert_eq!(browser.current_dir(), tree.path());
        assert_eq!(browser.selected(), 1);
        assert_eq!(browser.choose(), tree.path().to_path_buf());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let tree = music_tree();
        let mut browser = DirectoryBrowser::new(tree.path());
        for _ in 0..10 {
            browser.down();
        }
        assert_eq!(browser.selected(), 3);
        for _ in 0..10 {
            browser.up();
        }
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn tail_path_keeps_last_components() {
        assert_eq!(tail_path(Path::new("/a/b/c/d"), 2), "…/c/d");
        assert_eq!(tail_path(Path::new("x/y"), 3), "x/y");
    }
}
