//! View components for the clock screen.
//!
//! Each view is a thin wrapper around a ViewModel that implements the
//! ratatui `Widget` trait. No formatting decisions happen here; views only
//! map ViewModel data onto widgets. Color mapping from `Accent` to ratatui
//! colors happens here.

pub mod analog;
pub mod digital;
pub mod status_bar;
pub mod timer;

pub use analog::AnalogView;
pub use digital::DigitalView;
pub use status_bar::StatusBarView;
pub use timer::TimerView;

use crate::presentation::view_models::Accent;
use ratatui::style::Color;

// The neon palette shared by the faces.
pub(crate) const NEON_ORANGE: Color = Color::Rgb(0xff, 0x66, 0x00);
pub(crate) const NEON_GREEN: Color = Color::Rgb(0x00, 0xff, 0x00);
pub(crate) const TIMER_BLUE: Color = Color::Rgb(0x00, 0xbf, 0xff);
pub(crate) const HELP_BLUE: Color = Color::Rgb(0x00, 0x99, 0xff);
pub(crate) const ALARM_RED: Color = Color::Rgb(0xff, 0x00, 0x00);

// Analog dial colors.
pub(crate) const DIAL_CREAM: Color = Color::Rgb(0xf8, 0xf5, 0xe6);
pub(crate) const SECOND_RED: Color = Color::Rgb(0xb3, 0x00, 0x00);
pub(crate) const FRAME_GRAY: Color = Color::Rgb(0x44, 0x44, 0x44);

/// Convert an Accent to its ratatui Color
pub(crate) fn accent_to_color(accent: Accent) -> Color {
    match accent {
        Accent::Orange => NEON_ORANGE,
        Accent::Green => NEON_GREEN,
    }
}
