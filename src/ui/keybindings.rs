// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    // Player
    TogglePause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    OpenBrowser,
    // Directory browser
    Up,
    Down,
    Enter,
    Back,
    Choose,
    Cancel,

    Quit,
    None,
}

/// Only presses count; repeats and releases would fake double clicks.
fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key event in the player view.
pub fn player_key_to_action(key: &KeyEvent) -> NavigationAction {
    if !is_press(key) {
        return NavigationAction::None;
    }
    if is_ctrl_c(key) {
        return NavigationAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ') => NavigationAction::TogglePause,
        KeyCode::Char('n') | KeyCode::Char('>') | KeyCode::Right => NavigationAction::NextTrack,
        KeyCode::Char('p') | KeyCode::Char('<') | KeyCode::Left => NavigationAction::PreviousTrack,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => NavigationAction::VolumeUp,
        KeyCode::Char('-') | KeyCode::Down => NavigationAction::VolumeDown,
        KeyCode::Char('o') => NavigationAction::OpenBrowser,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

/// Map a key event in the directory browser.
pub fn browser_key_to_action(key: &KeyEvent) -> NavigationAction {
    if !is_press(key) {
        return NavigationAction::None;
    }
    if is_ctrl_c(key) {
        return NavigationAction::Quit;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right => NavigationAction::Enter,
        KeyCode::Left | KeyCode::Backspace => NavigationAction::Back,
        KeyCode::Char('s') => NavigationAction::Choose,
        KeyCode::Esc => NavigationAction::Cancel,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}
