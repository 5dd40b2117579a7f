// src/fs/scanner.rs
//! Directory scanning: the MP3 files directly inside one directory.

use std::{fs, path::Path};

use crate::error::PlayerError;

/// Extension accepted as a track, compared case-insensitively.
pub const TRACK_EXTENSION: &str = ".mp3";

/// Returns true if `name` ends in `.mp3`, ignoring ASCII case.
pub fn is_track_name(name: &str) -> bool {
    let ext_len = TRACK_EXTENSION.len();
    name.len() >= ext_len
        && name
            .get(name.len() - ext_len..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(TRACK_EXTENSION))
}

/// Keep only track names and sort them byte-wise ascending.
pub fn filter_tracks<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut tracks: Vec<String> = names.into_iter().filter(|n| is_track_name(n)).collect();
    tracks.sort();
    tracks
}

/// Scan `dir` for tracks, reporting why nothing could be listed.
///
/// Only regular files count; subdirectories are skipped even when their name
/// ends in `.mp3`, and nothing is scanned recursively. Names that are not
/// valid UTF-8 are skipped, since they could not be joined back into a path.
pub fn try_scan(dir: &Path) -> Result<Vec<String>, PlayerError> {
    let read = fs::read_dir(dir).map_err(|e| PlayerError::SourceUnavailable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let names = read
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter_map(|e| e.file_name().into_string().ok());

    Ok(filter_tracks(names))
}

/// Scan `dir` for tracks. When the list comes back empty, the error says
/// why: the directory could not be read, or it holds no MP3 files.
pub fn scan_reporting(dir: &Path) -> (Vec<String>, Option<PlayerError>) {
    match try_scan(dir) {
        Ok(tracks) if tracks.is_empty() => (
            tracks,
            Some(PlayerError::SourceUnavailable {
                path: dir.to_path_buf(),
                reason: "no MP3 files".into(),
            }),
        ),
        Ok(tracks) => {
            log::debug!("scanned {}: {} track(s)", dir.display(), tracks.len());
            (tracks, None)
        }
        Err(e) => {
            log::warn!("{e}");
            (Vec::new(), Some(e))
        }
    }
}

/// Scan `dir` for tracks. I/O failures yield an empty list.
pub fn scan(dir: &Path) -> Vec<String> {
    scan_reporting(dir).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_mp3_files_case_insensitively_and_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.mp3", "A.MP3", "c.txt"] {
            File::create(dir.path().join(name)).expect("create");
        }

        assert_eq!(scan(dir.path()), vec!["A.MP3", "b.mp3"]);
    }

    #[cfg(unix)]
    #[test]
    fn skips_names_that_are_not_utf8() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.mp3"))).expect("create");
        File::create(dir.path().join("good.mp3")).expect("create");

        assert_eq!(scan(dir.path()), vec!["good.mp3"]);
    }

    #[test]
    fn reporting_scan_explains_empty_results() {
        let dir = tempfile::tempdir().expect("tempdir");
        File::create(dir.path().join("notes.txt")).expect("create");

        let (tracks, why) = scan_reporting(dir.path());
        assert!(tracks.is_empty());
        assert!(why.is_some_and(|e| e.to_string().ends_with("no MP3 files")));

        let (tracks, why) = scan_reporting(&dir.path().join("gone"));
        assert!(tracks.is_empty());
        assert!(matches!(why, Some(PlayerError::SourceUnavailable { .. })));

        File::create(dir.path().join("a.mp3")).expect("create");
        let (tracks, why) = scan_reporting(dir.path());
        assert_eq!(tracks, vec!["a.mp3"]);
        assert!(why.is_none());
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("album.mp3")).expect("mkdir");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        File::create(dir.path().join("nested").join("deep.mp3")).expect("create");
        File::create(dir.path().join("top.Mp3")).expect("create");

        assert_eq!(scan(dir.path()), vec!["top.Mp3"]);
    }

    #[test]
    fn missing_directory_is_empty_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone");

        assert!(scan(&missing).is_empty());
        assert!(matches!(
            try_scan(&missing),
            Err(PlayerError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn rejects_lookalike_names() {
        assert!(is_track_name("song.mp3"));
        assert!(is_track_name(".MP3"));
        assert!(!is_track_name("song.mp3.bak"));
        assert!(!is_track_name("mp3"));
        assert!(!is_track_name("song.mp4"));
        assert!(!is_track_name("ñ.mp"));
    }

    proptest::proptest! {
        #[test]
        fn filtered_names_are_tracks_in_order(names in proptest::collection::vec("[a-zA-Z0-9 ._]{0,12}", 0..40)) {
            let out = filter_tracks(names.clone());
            proptest::prop_assert!(out.iter().all(|n| n.to_ascii_lowercase().ends_with(".mp3")));
            proptest::prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
            let expected = names.iter().filter(|n| is_track_name(n)).count();
            proptest::prop_assert_eq!(out.len(), expected);
        }
    }
}
