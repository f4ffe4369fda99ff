use serde::Deserialize;
use std::fmt;

/// The four faces the clock can show, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Analog,
    DigitalOrange,
    DigitalGreen,
    Timer,
}

impl Mode {
    /// The face that follows this one in the cycle.
    pub fn next(self) -> Mode {
        match self {
            Mode::Analog => Mode::DigitalOrange,
            Mode::DigitalOrange => Mode::DigitalGreen,
            Mode::DigitalGreen => Mode::Timer,
            Mode::Timer => Mode::Analog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Analog => "Analog",
            Mode::DigitalOrange => "Digital (orange)",
            Mode::DigitalGreen => "Digital (green)",
            Mode::Timer => "Timer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole-application state: the active face plus the countdown record.
///
/// Timer operations are total. A key pressed on the wrong face is a silent
/// no-op rather than an error, matching the keyboard surface they back.
/// The countdown never runs outside `Mode::Timer`; `switch_mode` enforces
/// this by stopping it on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    mode: Mode,
    timer_seconds: u32,
    timer_running: bool,
    flash_on: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            mode: Mode::Analog,
            timer_seconds: 0,
            timer_running: false,
            flash_on: false,
        }
    }
}

impl ClockState {
    /// State for a fresh session: the requested face, a stopped countdown
    /// preset to `timer_seconds`, no alert.
    pub fn new(mode: Mode, timer_seconds: u32) -> Self {
        Self {
            mode,
            timer_seconds,
            timer_running: false,
            flash_on: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Remaining countdown time in whole seconds.
    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    /// True while the expired countdown is still flashing its alert.
    pub fn flash_on(&self) -> bool {
        self.flash_on
    }

    /// Advance to the next face. Leaving the timer face stops the countdown
    /// and acknowledges any pending alert.
    pub fn switch_mode(&mut self) {
        if self.mode == Mode::Timer {
            self.timer_running = false;
            self.flash_on = false;
        }
        self.mode = self.mode.next();
    }

    /// Shift the countdown by whole minutes and seconds, clamping at zero.
    /// Ignored outside the timer face and while the countdown is running.
    pub fn adjust_timer(&mut self, minutes: i32, seconds: i32) {
        if self.mode != Mode::Timer || self.timer_running {
            return;
        }
        self.flash_on = false;
        let next = i64::from(self.timer_seconds) + i64::from(minutes) * 60 + i64::from(seconds);
        self.timer_seconds = next.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Start or pause the countdown. Ignored outside the timer face.
    pub fn toggle_running(&mut self) {
        if self.mode != Mode::Timer {
            return;
        }
        self.flash_on = false;
        self.timer_running = !self.timer_running;
    }

    /// Stop the countdown and zero the remaining time. Ignored outside the
    /// timer face.
    pub fn reset_timer(&mut self) {
        if self.mode != Mode::Timer {
            return;
        }
        self.flash_on = false;
        self.timer_running = false;
        self.timer_seconds = 0;
    }

    /// One-second tick. The clock faces re-sample wall time at render, so
    /// only the countdown reacts here: a running timer loses one second, and
    /// a running timer already showing 00:00 stops and latches the alert.
    pub fn on_tick(&mut self) {
        if !self.timer_running {
            return;
        }
        if self.timer_seconds > 0 {
            self.timer_seconds -= 1;
        } else {
            self.timer_running = false;
            self.flash_on = true;
        }
    }
}
