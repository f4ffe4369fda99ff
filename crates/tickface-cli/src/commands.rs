use crate::app::App;
use crate::args::Cli;
use anyhow::{Context, Result};
use log::info;
use simplelog::WriteLogger;
use std::path::Path;
use tickface_core::{resolve_config_path, timespan, ClockState, Config, Mode};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let state = initial_state(&cli, &config, &config_path)?;

    info!(
        "starting on the {} face with a {} preset",
        state.mode(),
        timespan::format_timer(state.timer_seconds())
    );

    App::new(state).run()
}

/// Merge flags over the config file: an explicit flag always wins, then the
/// config, then the analog face with an empty countdown.
fn initial_state(cli: &Cli, config: &Config, config_path: &Path) -> Result<ClockState> {
    let mode = cli
        .mode
        .map(Mode::from)
        .or(config.start_mode)
        .unwrap_or(Mode::Analog);

    let preset_seconds = if let Some(raw) = cli.duration.as_deref() {
        timespan::parse_timer(raw).context("invalid --duration value")?
    } else if let Some(raw) = config.timer.initial.as_deref() {
        timespan::parse_timer(raw)
            .with_context(|| format!("invalid timer.initial in {}", config_path.display()))?
    } else {
        0
    };

    Ok(ClockState::new(mode, preset_seconds))
}

/// File logging is opt-in. The alternate screen owns the terminal, so
/// diagnostics go to a side file or nowhere.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    WriteLogger::init(
        cli.log_level.to_level_filter(),
        simplelog::Config::default(),
        file,
    )?;
    info!("file logging enabled at {} level", cli.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tickface_core::TimerConfig;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tickface"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn config_with(start_mode: Option<Mode>, initial: Option<&str>) -> Config {
        Config {
            start_mode,
            timer: TimerConfig {
                initial: initial.map(str::to_string),
            },
        }
    }

    #[test]
    fn bare_invocation_starts_on_the_analog_face() {
        let cli = parse(&[]);
        let state = initial_state(&cli, &Config::default(), &PathBuf::from("unused")).unwrap();
        assert_eq!(state.mode(), Mode::Analog);
        assert_eq!(state.timer_seconds(), 0);
        assert!(!state.timer_running());
    }

    #[test]
    fn config_sets_the_start_face_when_no_flag_is_given() {
        let cli = parse(&[]);
        let config = config_with(Some(Mode::DigitalGreen), None);
        let state = initial_state(&cli, &config, &PathBuf::from("unused")).unwrap();
        assert_eq!(state.mode(), Mode::DigitalGreen);
    }

    #[test]
    fn mode_flag_wins_over_the_config() {
        let cli = parse(&["--mode", "timer"]);
        let config = config_with(Some(Mode::DigitalGreen), None);
        let state = initial_state(&cli, &config, &PathBuf::from("unused")).unwrap();
        assert_eq!(state.mode(), Mode::Timer);
    }

    #[test]
    fn duration_flag_wins_over_the_config_preset() {
        let cli = parse(&["--duration", "0:45"]);
        let config = config_with(None, Some("10:00"));
        let state = initial_state(&cli, &config, &PathBuf::from("unused")).unwrap();
        assert_eq!(state.timer_seconds(), 45);
    }

    #[test]
    fn config_preset_applies_when_no_flag_is_given() {
        let cli = parse(&[]);
        let config = config_with(None, Some("10:00"));
        let state = initial_state(&cli, &config, &PathBuf::from("unused")).unwrap();
        assert_eq!(state.timer_seconds(), 600);
    }

    #[test]
    fn broken_config_preset_is_shadowed_by_the_flag() {
        let cli = parse(&["--duration", "30"]);
        let config = config_with(None, Some("oops"));
        let state = initial_state(&cli, &config, &PathBuf::from("unused")).unwrap();
        assert_eq!(state.timer_seconds(), 30);
    }

    #[test]
    fn bad_duration_flag_points_at_the_flag() {
        let cli = parse(&["--duration", "1:75"]);
        let err = initial_state(&cli, &Config::default(), &PathBuf::from("unused")).unwrap_err();
        assert!(err.to_string().contains("--duration"));
    }

    #[test]
    fn bad_config_preset_points_at_the_file() {
        let cli = parse(&[]);
        let config = config_with(None, Some("oops"));
        let err =
            initial_state(&cli, &config, &PathBuf::from("/etc/tickface.toml")).unwrap_err();
        assert!(err.to_string().contains("timer.initial"));
        assert!(err.to_string().contains("/etc/tickface.toml"));
    }

    #[test]
    fn preset_does_not_start_the_countdown() {
        let cli = parse(&["--mode", "timer", "--duration", "05:00"]);
        let state = initial_state(&cli, &Config::default(), &PathBuf::from("unused")).unwrap();
        assert_eq!(state.mode(), Mode::Timer);
        assert_eq!(state.timer_seconds(), 300);
        assert!(!state.timer_running());
        assert!(!state.flash_on());
    }
}
