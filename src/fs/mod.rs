// src/fs/mod.rs
//! Filesystem module - directory browsing, track scanning and reading.

pub mod browser;
pub mod reader;
pub mod scanner;

// Re-export commonly used types
pub use browser::{load_entries, tail_path, BrowserEntry, DirectoryBrowser};
pub use reader::{read_file_bytes, try_load_track, ThreadedFetcher};
pub use scanner::{scan, scan_reporting, try_scan};
