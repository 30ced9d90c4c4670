use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use super::components::{
    render_card_strip, render_horizontal_separator, render_page_dots, render_status_bar,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main vertical layout: title, strip, dots, separator, status
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Title + spacing
        Constraint::Length(9),  // Card strip
        Constraint::Length(1),  // Page dots
        Constraint::Min(0),     // Filler
        Constraint::Length(1),  // Separator
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_card_strip(frame, main_layout[1], app);
    render_page_dots(frame, main_layout[2], app);
    render_horizontal_separator(frame, main_layout[4]);
    render_status_bar(frame, main_layout[5], app, Instant::now());
}

/// Render the colorful "catreel" title centered in the area.
fn render_title(frame: &mut Frame, area: ratatui::layout::Rect) {
    let title = "catreel";
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let padding = (area.width.saturating_sub(title.len() as u16)) / 2;

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(title.chars().zip(colors.iter().cycle()).map(|(c, color)| {
        Span::styled(c.to_string(), Style::new().fg(*color).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
