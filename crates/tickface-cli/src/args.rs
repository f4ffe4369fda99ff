use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;
use tickface_core::Mode;

#[derive(Parser)]
#[command(name = "tickface")]
#[command(about = "Full-screen terminal clock with analog, digital and countdown faces", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Face to start on (overrides the config file)
    #[arg(long)]
    pub mode: Option<ModeArg>,

    /// Countdown preset, as MM:SS or a number of seconds
    #[arg(long)]
    pub duration: Option<String>,

    /// Config file path (default: the platform config directory)
    #[arg(long)]
    pub config: Option<String>,

    /// Append diagnostics to this file; the screen itself stays clean
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbosity when --log-file is set
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ModeArg {
    Analog,
    DigitalOrange,
    DigitalGreen,
    Timer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Analog => Mode::Analog,
            ModeArg::DigitalOrange => Mode::DigitalOrange,
            ModeArg::DigitalGreen => Mode::DigitalGreen,
            ModeArg::Timer => Mode::Timer,
        }
    }
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeArg::Analog => write!(f, "analog"),
            ModeArg::DigitalOrange => write!(f, "digital-orange"),
            ModeArg::DigitalGreen => write!(f, "digital-green"),
            ModeArg::Timer => write!(f, "timer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
