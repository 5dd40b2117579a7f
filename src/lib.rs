// src/lib.rs
//! Tapedeck - a terminal player for the MP3 files in one directory.
//!
//! This library provides the transport state machine, directory scanning,
//! audio output and the terminal UI around them.

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod transport;
pub mod ui;
