//! Analog Face View Component
//!
//! Draws the dial on a braille canvas: rim, tick marks, numerals and the
//! three hands. The geometry itself lives in `tickface_core::face`; this
//! view only scales it onto the terminal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Widget,
    },
};

use tickface_core::face;

use crate::presentation::view_models::AnalogViewModel;

use super::{DIAL_CREAM, FRAME_GRAY, SECOND_RED};

/// Analog face view wrapper
pub struct AnalogView<'a> {
    model: &'a AnalogViewModel,
}

impl<'a> AnalogView<'a> {
    pub fn new(model: &'a AnalogViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AnalogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let square = centered_square(area);
        if square.width == 0 || square.height == 0 {
            return;
        }

        let hands = self.model.hands;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(move |ctx| {
                // Dial outline, outer frame first.
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.08,
                    color: FRAME_GRAY,
                });
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: DIAL_CREAM,
                });

                for mark in face::tick_marks() {
                    ctx.draw(&CanvasLine {
                        x1: mark.inner.0,
                        y1: mark.inner.1,
                        x2: mark.outer.0,
                        y2: mark.outer.1,
                        color: if mark.major { DIAL_CREAM } else { Color::DarkGray },
                    });
                }

                draw_hand(ctx, hands.hour, DIAL_CREAM);
                draw_hand(ctx, hands.minute, DIAL_CREAM);
                draw_hand(ctx, hands.second, SECOND_RED);

                // Center hub over the hand bases.
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.03,
                    color: DIAL_CREAM,
                });

                // Numerals go on their own layer so the hands never erase them.
                ctx.layer();
                for ((x, y), numeral) in face::numerals() {
                    ctx.print(
                        x,
                        y,
                        Line::styled(numeral.to_string(), Style::default().fg(DIAL_CREAM)),
                    );
                }
            })
            .render(square, buf);
    }
}

fn draw_hand(ctx: &mut ratatui::widgets::canvas::Context<'_>, tip: (f64, f64), color: Color) {
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: tip.0,
        y2: tip.1,
        color,
    });
}

/// The largest centered rect that renders square. Braille cells pack 2x4
/// dots, and terminal cells are roughly twice as tall as wide, so a square
/// needs width = 2 * height.
fn centered_square(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = width / 2;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
