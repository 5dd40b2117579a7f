// src/ui/widgets/player_panel.rs
//! Player information panel widget.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::transport::{PlaybackOutput, TrackFetcher, TransportController, TransportStatus};

/// `mm:ss` for a duration.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render the player information panel.
pub fn render_player_panel<F: TrackFetcher, O: PlaybackOutput>(
    f: &mut Frame<'_>,
    area: Rect,
    controller: &TransportController<F, O>,
) {
    f.render_widget(Block::default().borders(Borders::ALL).title(" Player "), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let status = controller.status();
    let now_playing = match (controller.current_track(), status) {
        (_, TransportStatus::Empty) => "No track loaded".to_string(),
        (Some(name), _) if controller.is_fetching() => format!("{name}\nloading…"),
        (Some(name), _) => name.to_string(),
        (None, _) => String::new(),
    };
    f.render_widget(
        Paragraph::new(now_playing)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner[0],
    );

    // Playback control buttons
    let enabled = status != TransportStatus::Empty;
    let idle = Style::default().fg(if enabled { Color::Cyan } else { Color::DarkGray });
    let rewind_style = if controller.is_rewind_armed() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        idle
    };
    let play_pause_icon = match status {
        TransportStatus::Playing => Span::styled(" ⏸ ", Style::default().fg(Color::Green)),
        TransportStatus::Stopped => Span::styled(" ⏵ ", Style::default().fg(Color::Yellow)),
        TransportStatus::Empty => Span::styled(" ⏵ ", idle),
    };

    let controls = Line::from(vec![
        Span::styled(" ⏮ ", rewind_style), // Previous (p/<), twice to skip back
        Span::raw(" "),
        play_pause_icon, // Play/Pause (space)
        Span::raw(" "),
        Span::styled(" ⏭ ", idle), // Next (n/>)
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        inner[1],
    );

    let volume = controller.volume();
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(f64::from(volume).clamp(0.0, 1.0))
            .label(format!("Vol {:.0}%", volume * 100.0)),
        inner[2],
    );

    // Progress bar with time display
    let elapsed = controller.position();
    let duration = controller.duration().unwrap_or_default();
    let ratio = if duration.is_zero() {
        0.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    };
    let time_label = format!("{} / {}", format_time(elapsed), format_time(duration));

    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC))
            .ratio(ratio)
            .label(time_label),
        inner[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(Duration::from_secs(0)), "00:00");
        assert_eq!(format_time(Duration::from_millis(61_900)), "01:01");
        assert_eq!(format_time(Duration::from_secs(3600)), "60:00");
    }
}
