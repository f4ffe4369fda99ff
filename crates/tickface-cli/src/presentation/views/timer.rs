//! Timer Face View Component
//!
//! Renders the countdown digits with the key help line underneath. While
//! the alert rings the digits alternate between red and hidden, driven by
//! the `lit` flag the presenter already decided.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::{TimerTone, TimerViewModel};

use super::{ALARM_RED, HELP_BLUE, TIMER_BLUE};

/// Timer face view wrapper
pub struct TimerView<'a> {
    model: &'a TimerViewModel,
}

impl<'a> TimerView<'a> {
    pub fn new(model: &'a TimerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TimerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.model.lines.len() as u16;

        let chunks = Layout::vertical([
            Constraint::Fill(3),
            Constraint::Length(rows),
            Constraint::Fill(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let digits_color = match self.model.tone {
            TimerTone::Set => Some(TIMER_BLUE),
            TimerTone::Alarm { lit: true } => Some(ALARM_RED),
            // The dark half of the flash: draw nothing at all.
            TimerTone::Alarm { lit: false } => None,
        };

        if let Some(color) = digits_color {
            let style = Style::default().fg(color);
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

        Paragraph::new(Line::styled(
            self.model.help,
            Style::default().fg(HELP_BLUE),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}
