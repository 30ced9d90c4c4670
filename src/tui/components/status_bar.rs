//! Status bar component - position, playback state and key hints.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::carousel::Playback;
use crate::tui::theme::*;

/// Short description of the playback state.
pub fn playback_label(playback: Playback, now: Instant) -> String {
    match playback {
        Playback::AutoplayActive => "autoplay".to_string(),
        Playback::AutoplaySuspended { resume_at: None } => "paused".to_string(),
        Playback::AutoplaySuspended { resume_at: Some(at) } => {
            let secs = at.saturating_duration_since(now).as_secs_f64().ceil() as u64;
            format!("resumes in {}s", secs)
        }
    }
}

/// Render one dot per sighting, the current one filled.
pub fn render_page_dots(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.carousel.items().len();
    let current = app.carousel.current_index();

    let dots: Vec<Span> = (0..count)
        .map(|i| {
            if i == current {
                Span::styled("● ", Style::new().fg(LOGO_GOLD))
            } else {
                Span::styled("○ ", Style::new().fg(TEXT_DIM))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(dots)).centered(), area);
}

/// Render the bottom status line.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let carousel = &app.carousel;
    let count = carousel.items().len();

    let mut spans = vec![];
    if count > 0 {
        spans.push(Span::styled(
            format!(" {}/{} ", carousel.current_index() + 1, count),
            Style::new().fg(TEXT_WHITE).bold(),
        ));
        let color = if carousel.is_paused() { LOGO_GOLD } else { LOGO_MINT };
        spans.push(Span::styled(
            playback_label(carousel.playback(), now),
            Style::new().fg(color),
        ));
        spans.push(Span::raw("  "));
    }

    if let Some(status) = app.status() {
        spans.push(Span::styled(status, Style::new().fg(LOGO_LIGHT_BLUE)));
        spans.push(Span::raw("  "));
    }

    for (key, desc) in [("←/→", "flick"), ("drag", "scroll"), ("r", "reload"), ("q", "quit")] {
        spans.push(Span::styled(key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!(" {}  ", desc), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
