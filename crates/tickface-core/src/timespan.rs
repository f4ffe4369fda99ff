use crate::error::{Error, Result};

/// Format a countdown as `MM:SS`. The minutes field widens past 99 rather
/// than wrapping, so long presets stay honest.
pub fn format_timer(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format a wall-clock reading as `HH:MM:SS` (24-hour).
pub fn format_clock(hour: u32, minute: u32, second: u32) -> String {
    format!("{:02}:{:02}:{:02}", hour, minute, second)
}

/// Parse a countdown preset: either `MM:SS` or a bare number of seconds.
pub fn parse_timer(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    if let Some((minutes_part, seconds_part)) = trimmed.split_once(':') {
        let minutes: u32 = minutes_part
            .parse()
            .map_err(|_| bad_duration(input, "expected MM:SS or a number of seconds"))?;
        let seconds: u32 = seconds_part
            .parse()
            .map_err(|_| bad_duration(input, "expected MM:SS or a number of seconds"))?;
        if seconds >= 60 {
            return Err(bad_duration(input, "seconds must be below 60"));
        }
        minutes
            .checked_mul(60)
            .and_then(|total| total.checked_add(seconds))
            .ok_or_else(|| bad_duration(input, "value is too large"))
    } else {
        trimmed
            .parse()
            .map_err(|_| bad_duration(input, "expected MM:SS or a number of seconds"))
    }
}

fn bad_duration(input: &str, reason: &str) -> Error {
    Error::InvalidDuration(format!("'{}' ({})", input.trim(), reason))
}
