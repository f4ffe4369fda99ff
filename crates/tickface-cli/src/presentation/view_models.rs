//! ViewModels for the clock screen.
//!
//! These define the complete data contract between the presenter and the
//! views: plain values only, every formatting decision already made. A view
//! should be able to draw its part of the screen from this data alone.

use tickface_core::face::HandEndpoints;

/// Everything on screen for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    pub face: FaceViewModel,
    /// Status bar component (always visible)
    pub status_bar: StatusBarViewModel,
}

/// The active face, with its face-specific data.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceViewModel {
    Analog(AnalogViewModel),
    Digital(DigitalViewModel),
    Timer(TimerViewModel),
}

/// Analog dial: hand tips in unit-circle coordinates. Rim, tick marks and
/// numerals are static and come straight from the geometry module.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalogViewModel {
    pub hands: HandEndpoints,
}

/// Color scheme for the digital face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Green,
}

/// Digital face: pre-rendered block-glyph rows of HH:MM:SS.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalViewModel {
    pub lines: Vec<String>,
    pub accent: Accent,
}

/// How the countdown digits should read this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTone {
    /// Counting down or waiting to start.
    Set,
    /// Expired and ringing; `lit` alternates to produce the flash.
    Alarm { lit: bool },
}

/// Timer face: block-glyph rows of MM:SS plus the key help line.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerViewModel {
    pub lines: Vec<String>,
    pub tone: TimerTone,
    pub help: &'static str,
}

/// Status bar component (bottom bar)
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarViewModel {
    pub mode_label: &'static str,
    /// Extra countdown detail, e.g. "running".
    pub state_note: Option<&'static str>,
    pub hints: Vec<KeyHint>,
}

/// One `[key]action` entry in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}
