//! Status Bar View Component
//!
//! Renders the bottom bar: active face on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

/// Status bar view wrapper
pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);

        // Left: active face, plus the countdown note when there is one
        let mut left = vec![Span::styled(
            self.model.mode_label,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(note) = self.model.state_note {
            left.push(Span::raw(" | "));
            left.push(Span::styled(note, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(left)).render(chunks[0], buf);

        // Right: keyboard shortcuts
        let mut spans = Vec::new();
        for hint in &self.model.hints {
            spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(hint.action));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
