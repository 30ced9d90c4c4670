//! Separator components.

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use crate::tui::theme::*;

/// Render a horizontal separator (─ characters).
pub fn render_horizontal_separator(frame: &mut Frame, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    let line = Line::styled(separator, Style::new().fg(TEXT_DIM));
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
