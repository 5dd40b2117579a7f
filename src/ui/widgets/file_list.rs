// src/ui/widgets/file_list.rs
//! Track list and directory browser widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::{
    fs::{tail_path, DirectoryBrowser},
    transport::TransportStatus,
    ui::icons::{icon_for_entry, now_playing_icon},
};

/// Render the playlist with the current track highlighted.
pub fn render_track_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    names: &[String],
    status: TransportStatus,
    state: &mut ListState,
) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));

    if names.is_empty() {
        f.render_widget(
            Paragraph::new("No tracks. Press o to choose a directory.")
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
        return;
    }

    let current = state.selected();
    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if Some(i) == current { now_playing_icon(status) } else { " " };
            ListItem::new(format!("{marker} {name}"))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));

    f.render_stateful_widget(list, area, state);
}

/// Render the directory picker.
pub fn render_browser(
    f: &mut Frame<'_>,
    area: Rect,
    browser: &DirectoryBrowser,
    state: &mut ListState,
) {
    let title = format!(
        " Choose directory: {} ({} tracks) ",
        tail_path(browser.current_dir(), 3),
        browser.track_count()
    );

    let items: Vec<ListItem> = browser
        .entries()
        .iter()
        .map(|entry| {
            let item = ListItem::new(format!("{} {}", icon_for_entry(entry.is_dir), entry.name));
            if entry.is_dir {
                item
            } else {
                item.style(Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
