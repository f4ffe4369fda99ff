// tickface - a full-screen terminal clock
//
// Layering:
// - tickface-core owns the state machine, geometry and formatting
// - commands.rs wires CLI flags and the config file into a starting state
// - app.rs owns the terminal and the input/tick loop
// - presentation/ turns state into ViewModels and ViewModels into widgets

mod app;
mod args;
mod commands;
mod presentation;

pub use args::{Cli, LogLevel, ModeArg};
pub use commands::run;
