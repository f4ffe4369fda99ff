//! Presenter for the clock screen.
//!
//! Pure functions from `ClockState` plus a sampled wall-clock time to one
//! frame's `ScreenViewModel`. No terminal types, no side effects, so every
//! formatting rule is testable without a terminal.

use chrono::{DateTime, Local, Timelike};
use tickface_core::{face, glyphs, timespan, ClockState, Mode};

use super::view_models::{
    Accent, AnalogViewModel, DigitalViewModel, FaceViewModel, KeyHint, ScreenViewModel,
    StatusBarViewModel, TimerTone, TimerViewModel,
};

/// Key help shown under the countdown digits.
const TIMER_HELP: &str = "↑/↓ minutes   ←/→ seconds   space start/stop   r reset";

/// Build the complete screen for one frame.
pub fn build_screen(state: &ClockState, now: DateTime<Local>, flash_lit: bool) -> ScreenViewModel {
    let face = match state.mode() {
        Mode::Analog => FaceViewModel::Analog(build_analog(now)),
        Mode::DigitalOrange => FaceViewModel::Digital(build_digital(now, Accent::Orange)),
        Mode::DigitalGreen => FaceViewModel::Digital(build_digital(now, Accent::Green)),
        Mode::Timer => FaceViewModel::Timer(build_timer(state, flash_lit)),
    };

    ScreenViewModel {
        face,
        status_bar: build_status_bar(state),
    }
}

fn build_analog(now: DateTime<Local>) -> AnalogViewModel {
    AnalogViewModel {
        hands: face::hand_endpoints(now.hour(), now.minute(), now.second()),
    }
}

fn build_digital(now: DateTime<Local>, accent: Accent) -> DigitalViewModel {
    let text = timespan::format_clock(now.hour(), now.minute(), now.second());
    DigitalViewModel {
        lines: glyphs::big_lines(&text),
        accent,
    }
}

fn build_timer(state: &ClockState, flash_lit: bool) -> TimerViewModel {
    let text = timespan::format_timer(state.timer_seconds());
    let tone = if state.flash_on() {
        TimerTone::Alarm { lit: flash_lit }
    } else {
        TimerTone::Set
    };

    TimerViewModel {
        lines: glyphs::big_lines(&text),
        tone,
        help: TIMER_HELP,
    }
}

fn build_status_bar(state: &ClockState) -> StatusBarViewModel {
    let hints = if state.mode() == Mode::Timer {
        vec![
            KeyHint { key: "m", action: "ode " },
            KeyHint { key: "space", action: " start/stop " },
            KeyHint { key: "r", action: "eset " },
            KeyHint { key: "q", action: "uit" },
        ]
    } else {
        vec![
            KeyHint { key: "m", action: "ode " },
            KeyHint { key: "q", action: "uit" },
        ]
    };

    let state_note = if state.mode() != Mode::Timer {
        None
    } else if state.flash_on() {
        Some("time's up")
    } else if state.timer_running() {
        Some("running")
    } else {
        None
    };

    StatusBarViewModel {
        mode_label: state.mode().label(),
        state_note,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 3, 14, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn analog_face_carries_the_sampled_hands() {
        let state = ClockState::default();
        let screen = build_screen(&state, at(9, 0, 0), false);

        match screen.face {
            FaceViewModel::Analog(model) => {
                assert_eq!(model.hands, face::hand_endpoints(9, 0, 0));
            }
            other => panic!("expected the analog face, got {:?}", other),
        }
        assert_eq!(screen.status_bar.mode_label, "Analog");
        assert_eq!(screen.status_bar.state_note, None);
    }

    #[test]
    fn digital_faces_differ_only_in_accent() {
        let orange = build_screen(&ClockState::new(Mode::DigitalOrange, 0), at(21, 30, 5), false);
        let green = build_screen(&ClockState::new(Mode::DigitalGreen, 0), at(21, 30, 5), false);

        let (orange, green) = match (orange.face, green.face) {
            (FaceViewModel::Digital(o), FaceViewModel::Digital(g)) => (o, g),
            other => panic!("expected two digital faces, got {:?}", other),
        };

        assert_eq!(orange.accent, Accent::Orange);
        assert_eq!(green.accent, Accent::Green);
        assert_eq!(orange.lines, green.lines);
        assert_eq!(orange.lines, glyphs::big_lines("21:30:05"));
    }

    #[test]
    fn timer_face_formats_remaining_time() {
        let state = ClockState::new(Mode::Timer, 300);
        let screen = build_screen(&state, at(0, 0, 0), false);

        match screen.face {
            FaceViewModel::Timer(model) => {
                assert_eq!(model.lines, glyphs::big_lines("05:00"));
                assert_eq!(model.tone, TimerTone::Set);
                assert!(model.help.contains("space start/stop"));
            }
            other => panic!("expected the timer face, got {:?}", other),
        }
        assert_eq!(screen.status_bar.state_note, None);
    }

    #[test]
    fn running_countdown_is_noted_in_the_status_bar() {
        let mut state = ClockState::new(Mode::Timer, 60);
        state.toggle_running();

        let screen = build_screen(&state, at(0, 0, 0), false);
        assert_eq!(screen.status_bar.state_note, Some("running"));
    }

    #[test]
    fn expired_countdown_rings_with_the_flash_phase() {
        let mut state = ClockState::new(Mode::Timer, 0);
        state.toggle_running();
        state.on_tick();
        assert!(state.flash_on());

        let lit = build_screen(&state, at(0, 0, 0), true);
        match lit.face {
            FaceViewModel::Timer(model) => assert_eq!(model.tone, TimerTone::Alarm { lit: true }),
            other => panic!("expected the timer face, got {:?}", other),
        }
        assert_eq!(lit.status_bar.state_note, Some("time's up"));

        let dark = build_screen(&state, at(0, 0, 0), false);
        match dark.face {
            FaceViewModel::Timer(model) => assert_eq!(model.tone, TimerTone::Alarm { lit: false }),
            other => panic!("expected the timer face, got {:?}", other),
        }
    }

    #[test]
    fn timer_face_gets_the_longer_hint_row() {
        let clock = build_screen(&ClockState::default(), at(1, 2, 3), false);
        assert_eq!(clock.status_bar.hints.len(), 2);

        let timer = build_screen(&ClockState::new(Mode::Timer, 0), at(1, 2, 3), false);
        assert_eq!(timer.status_bar.hints.len(), 4);
        assert!(timer.status_bar.hints.iter().any(|h| h.key == "space"));
    }
}
