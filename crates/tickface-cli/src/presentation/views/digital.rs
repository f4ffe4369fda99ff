//! Digital Face View Component
//!
//! Renders the pre-built block-glyph rows centered in the face area, in the
//! accent color the ViewModel picked.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::DigitalViewModel;

use super::accent_to_color;

/// Digital face view wrapper
pub struct DigitalView<'a> {
    model: &'a DigitalViewModel,
}

impl<'a> DigitalView<'a> {
    pub fn new(model: &'a DigitalViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DigitalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(accent_to_color(self.model.accent));
        let rows = self.model.lines.len() as u16;

        // Center the glyph block vertically; Paragraph centers horizontally.
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(rows),
            Constraint::Fill(1),
        ])
        .split(area);

        let text: Vec<Line> = self
            .model
            .lines
            .iter()
            .map(|row| Line::styled(row.clone(), style))
            .collect();

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}
