// Core module - Clock semantics with no terminal dependencies
// This layer owns the state machine, face geometry and text formatting;
// rendering and input live in the CLI crate

pub mod config;
pub mod error;
pub mod face;
pub mod glyphs;
pub mod state;
pub mod timespan;

pub use config::{resolve_config_path, Config, TimerConfig};
pub use error::{Error, Result};
pub use state::{ClockState, Mode};
