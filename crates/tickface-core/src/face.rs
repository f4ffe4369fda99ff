//! Analog face geometry.
//!
//! Everything here is pure math on the unit circle so the renderer can scale
//! the face onto whatever canvas area the terminal offers. Angles are in
//! degrees, measured clockwise from 12 o'clock; coordinates are (x, y) with
//! y pointing up and the dial rim at radius 1.0.

/// Hand lengths as a fraction of the dial radius.
pub const HOUR_HAND_LENGTH: f64 = 0.50;
pub const MINUTE_HAND_LENGTH: f64 = 0.75;
pub const SECOND_HAND_LENGTH: f64 = 0.85;

/// Where the printed numerals sit.
pub const NUMERAL_RADIUS: f64 = 0.72;

const MAJOR_TICK_INNER: f64 = 0.80;
const MINOR_TICK_INNER: f64 = 0.90;

/// Tip coordinates for the three hands at a given wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandEndpoints {
    pub hour: (f64, f64),
    pub minute: (f64, f64),
    pub second: (f64, f64),
}

/// One of the sixty marks around the rim. Major marks sit on the five-minute
/// positions and reach further into the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub inner: (f64, f64),
    pub outer: (f64, f64),
    pub major: bool,
}

/// The hour hand creeps: 30 degrees per hour plus half a degree per minute.
pub fn hour_angle(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5
}

/// The minute hand creeps too: 6 degrees per minute plus a tenth per second.
pub fn minute_angle(minute: u32, second: u32) -> f64 {
    f64::from(minute) * 6.0 + f64::from(second) * 0.1
}

/// The second hand steps in whole 6 degree increments.
pub fn second_angle(second: u32) -> f64 {
    f64::from(second) * 6.0
}

/// Hand tips for the given time, each at its own length along its angle.
pub fn hand_endpoints(hour: u32, minute: u32, second: u32) -> HandEndpoints {
    HandEndpoints {
        hour: polar(hour_angle(hour, minute), HOUR_HAND_LENGTH),
        minute: polar(minute_angle(minute, second), MINUTE_HAND_LENGTH),
        second: polar(second_angle(second), SECOND_HAND_LENGTH),
    }
}

/// All sixty rim marks, starting at 12 o'clock and walking clockwise.
pub fn tick_marks() -> Vec<TickMark> {
    (0..60)
        .map(|i| {
            let major = i % 5 == 0;
            let angle = f64::from(i) * 6.0;
            let inner_radius = if major {
                MAJOR_TICK_INNER
            } else {
                MINOR_TICK_INNER
            };
            TickMark {
                inner: polar(angle, inner_radius),
                outer: polar(angle, 1.0),
                major,
            }
        })
        .collect()
}

/// The numerals 1 through 12 with their dial positions.
pub fn numerals() -> Vec<((f64, f64), u8)> {
    (1..=12)
        .map(|n| (polar(f64::from(n) * 30.0, NUMERAL_RADIUS), n as u8))
        .collect()
}

fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (radius * rad.sin(), radius * rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn hour_angle_wraps_past_noon() {
        assert_eq!(hour_angle(3, 0), 90.0);
        assert_eq!(hour_angle(15, 0), 90.0);
        assert_eq!(hour_angle(0, 0), 0.0);
        assert_eq!(hour_angle(12, 0), 0.0);
    }

    #[test]
    fn hour_hand_creeps_with_the_minutes() {
        assert_eq!(hour_angle(6, 30), 195.0);
        assert_eq!(hour_angle(9, 0), 270.0);
    }

    #[test]
    fn minute_hand_creeps_with_the_seconds() {
        assert_eq!(minute_angle(45, 0), 270.0);
        assert!((minute_angle(0, 30) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn second_hand_steps_whole_positions() {
        assert_eq!(second_angle(0), 0.0);
        assert_eq!(second_angle(15), 90.0);
        assert_eq!(second_angle(45), 270.0);
    }

    #[test]
    fn hands_point_where_the_dial_says() {
        // 9:00:00 sharp: hour left, minute straight up, second straight up.
        let hands = hand_endpoints(9, 0, 0);
        assert_close(hands.hour, (-HOUR_HAND_LENGTH, 0.0));
        assert_close(hands.minute, (0.0, MINUTE_HAND_LENGTH));
        assert_close(hands.second, (0.0, SECOND_HAND_LENGTH));
    }

    #[test]
    fn second_hand_walks_the_cardinal_points() {
        assert_close(hand_endpoints(0, 0, 15).second, (SECOND_HAND_LENGTH, 0.0));
        assert_close(hand_endpoints(0, 0, 30).second, (0.0, -SECOND_HAND_LENGTH));
        assert_close(hand_endpoints(0, 0, 45).second, (-SECOND_HAND_LENGTH, 0.0));
    }

    #[test]
    fn sixty_marks_with_twelve_major() {
        let marks = tick_marks();
        assert_eq!(marks.len(), 60);
        assert_eq!(marks.iter().filter(|m| m.major).count(), 12);

        // The 12 o'clock mark is major and sits on the vertical axis.
        assert!(marks[0].major);
        assert_close(marks[0].outer, (0.0, 1.0));
        assert_close(marks[0].inner, (0.0, 0.80));

        // Minute marks are shorter.
        assert!(!marks[1].major);
        let (x, y) = marks[1].inner;
        assert!((x.hypot(y) - 0.90).abs() < 1e-9);
    }

    #[test]
    fn numerals_sit_at_their_hours() {
        let numerals = numerals();
        assert_eq!(numerals.len(), 12);

        let (pos, n) = numerals[2];
        assert_eq!(n, 3);
        assert_close(pos, (NUMERAL_RADIUS, 0.0));

        let (pos, n) = numerals[11];
        assert_eq!(n, 12);
        assert_close(pos, (0.0, NUMERAL_RADIUS));
    }
}
