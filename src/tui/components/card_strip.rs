//! Card strip component - the visible window onto the tripled sighting list.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::feed::{Sighting, SightingStatus};
use crate::tui::theme::*;

/// A card's placement on screen, clipped to the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Position in the tripled list
    pub slot: usize,
    /// First visible column, relative to the strip
    pub column: u16,
    /// Visible width in columns
    pub width: u16,
    /// Columns cut off on the left
    pub clip_left: u16,
    /// Whether the right edge is cut off
    pub clip_right: bool,
}

/// Cards that intersect a strip of `columns` starting at `offset`.
///
/// Past the last of `slots` the strip continues with the first slot again,
/// so the view never runs out of cards near the end of the trailing copy.
pub fn visible_cards(
    offset: f64,
    pitch: f64,
    card_width: f64,
    units_per_column: f64,
    slots: usize,
    columns: u16,
) -> Vec<CardSlot> {
    if slots == 0 || pitch <= 0.0 || units_per_column <= 0.0 {
        return vec![];
    }

    let to_column = |x: f64| ((x - offset) / units_per_column).round() as i64;
    let first = (offset / pitch).floor().max(0.0) as usize;
    let columns = i64::from(columns);

    let mut cards = vec![];
    for slot in first.. {
        let start = slot as f64 * pitch;
        let left = to_column(start);
        if left >= columns {
            break;
        }
        let right = to_column(start + card_width).min(columns);
        let visible_left = left.max(0);
        if right <= visible_left {
            continue;
        }
        cards.push(CardSlot {
            slot: slot % slots,
            column: visible_left as u16,
            width: (right - visible_left) as u16,
            clip_left: (visible_left - left) as u16,
            clip_right: right == columns && to_column(start + card_width) > columns,
        });
    }
    cards
}

fn status_color(status: SightingStatus) -> ratatui::style::Color {
    match status {
        SightingStatus::Verified => STATUS_VERIFIED,
        SightingStatus::Pending => STATUS_PENDING,
        SightingStatus::Disputed => STATUS_DISPUTED,
    }
}

fn card_lines(sighting: &Sighting) -> Vec<Line<'_>> {
    let spotted = sighting
        .spotted_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "time unknown".to_string());

    let mut lines = vec![
        Line::styled(sighting.cat_name.as_str(), Style::new().fg(TEXT_WHITE).bold()),
        Line::styled(sighting.location.as_str(), Style::new().fg(LOGO_LIGHT_BLUE)),
        Line::styled(spotted, Style::new().fg(TEXT_DIM)),
        Line::styled(
            sighting.status.label(),
            Style::new().fg(status_color(sighting.status)),
        ),
    ];
    if let Some(notes) = &sighting.notes {
        lines.push(Line::raw(""));
        lines.push(Line::styled(notes.as_str(), Style::new().fg(TEXT_DIM).italic()));
    }
    lines
}

/// Render every card that is at least partly visible.
pub fn render_card_strip(frame: &mut Frame, area: Rect, app: &App) {
    let carousel = &app.carousel;
    let looped = carousel.looped_items();
    let items = carousel.items().len();

    if looped.is_empty() {
        let empty = Paragraph::new(Line::styled("No sightings yet", Style::new().fg(TEXT_DIM)))
            .centered();
        frame.render_widget(empty, area);
        return;
    }

    let cards = visible_cards(
        app.viewport.offset(),
        carousel.geometry().item_pitch(),
        carousel.config().card_width,
        app.viewport.units_per_column(),
        looped.len(),
        area.width,
    );

    for card in cards {
        let sighting = &looped[card.slot];
        let is_current = card.slot % items == carousel.current_index();

        let mut borders = Borders::TOP | Borders::BOTTOM;
        if card.clip_left == 0 {
            borders |= Borders::LEFT;
        }
        if !card.clip_right {
            borders |= Borders::RIGHT;
        }
        let border_style = if is_current {
            Style::new().fg(LOGO_GOLD)
        } else {
            Style::new().fg(TEXT_DIM)
        };

        let block = Block::default().borders(borders).border_style(border_style);
        // Keep text anchored to the card's own left edge while it slides off screen
        let text_scroll = card.clip_left.saturating_sub(1);
        let paragraph = Paragraph::new(card_lines(sighting))
            .block(block)
            .scroll((0, text_scroll));

        let rect = Rect::new(area.x + card.column, area.y, card.width, area.height);
        frame.render_widget(paragraph, rect);
    }
}
