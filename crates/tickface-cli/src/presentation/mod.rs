// Presentation layer - ViewModel construction and rendering
//
// The presenter turns ClockState plus a sampled wall-clock time into plain
// data. The views map that data onto ratatui widgets and nothing else.

pub mod presenter;
pub mod view_models;
pub mod views;
