//! Light-phase classification.
//!
//! An ordered decision table over the day's solar geometry. Windows
//! deliberately overlap (the sunrise window sits inside the morning golden
//! hour, high noon inside daytime); the table order encodes precedence and
//! the first matching row wins. Each call classifies from scratch: there is
//! no phase state machine and no memory between calls.

use crate::solar::{DayState, SolarGeometry};
use serde::Serialize;

/// One of the eleven light conditions.
///
/// Serialized and displayed with the exact published strings, so consumers
/// match on the enum while the wire format stays stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseLabel {
    #[serde(rename = "High Noon")]
    HighNoon,
    #[serde(rename = "Sunrise")]
    Sunrise,
    #[serde(rename = "Sunset")]
    Sunset,
    #[serde(rename = "Golden Hour (Morning)")]
    GoldenHourMorning,
    #[serde(rename = "Golden Hour (Evening)")]
    GoldenHourEvening,
    #[serde(rename = "Blue Hour (Dawn)")]
    BlueHourDawn,
    #[serde(rename = "Blue Hour (Dusk)")]
    BlueHourDusk,
    #[serde(rename = "Daytime")]
    Daytime,
    #[serde(rename = "Night")]
    Night,
    #[serde(rename = "Winter Night (Polar)")]
    WinterNightPolar,
    #[serde(rename = "Summer Day (Polar)")]
    SummerDayPolar,
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::HighNoon => "High Noon",
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::GoldenHourMorning => "Golden Hour (Morning)",
            Self::GoldenHourEvening => "Golden Hour (Evening)",
            Self::BlueHourDawn => "Blue Hour (Dawn)",
            Self::BlueHourDusk => "Blue Hour (Dusk)",
            Self::Daytime => "Daytime",
            Self::Night => "Night",
            Self::WinterNightPolar => "Winter Night (Polar)",
            Self::SummerDayPolar => "Summer Day (Polar)",
        };
        write!(f, "{}", s)
    }
}

/// Classify a local clock time (decimal hours) against the day's geometry.
///
/// Polar states win unconditionally: on a polar-night or midnight-sun day
/// there are no horizon crossings to window against.
pub fn classify_phase(time_decimal: f64, geometry: &SolarGeometry) -> PhaseLabel {
    match geometry.state {
        DayState::PolarNight => return PhaseLabel::WinterNightPolar,
        DayState::MidnightSun => return PhaseLabel::SummerDayPolar,
        DayState::Normal => {}
    }

    // Normal state guarantees these are present.
    let noon = geometry.solar_noon_local;
    let (rise, set) = match (geometry.sunrise_local, geometry.sunset_local) {
        (Some(r), Some(s)) => (r, s),
        _ => return PhaseLabel::Night,
    };
    let t = time_decimal;

    // Precedence table: first hit wins.
    let rules = [
        ((t - noon).abs() < 1.0, PhaseLabel::HighNoon),
        ((t - rise).abs() < 0.5, PhaseLabel::Sunrise),
        ((t - set).abs() < 0.5, PhaseLabel::Sunset),
        (rise < t && t < rise + 1.0, PhaseLabel::GoldenHourMorning),
        (set - 1.0 < t && t < set, PhaseLabel::GoldenHourEvening),
        ((t - rise).abs() < 1.0 && t < rise, PhaseLabel::BlueHourDawn),
        ((t - set).abs() < 1.0 && t > set, PhaseLabel::BlueHourDusk),
        (rise < t && t < set, PhaseLabel::Daytime),
    ];

    rules
        .iter()
        .find(|(hit, _)| *hit)
        .map(|(_, label)| *label)
        .unwrap_or(PhaseLabel::Night)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::{compute_geometry, Coordinate};

    /// Mid-latitude spring day: Stockholm, day 100, UTC+2.
    fn stockholm_geometry() -> SolarGeometry {
        compute_geometry(Coordinate::new(59.33, 18.07).unwrap(), 100, 2.0)
    }

    #[test]
    fn test_polar_labels_win_unconditionally() {
        let night = compute_geometry(Coordinate::new(80.0, 15.6).unwrap(), 355, 1.0);
        let day = compute_geometry(Coordinate::new(80.0, 15.6).unwrap(), 172, 1.0);
        // Every probe hour gets the polar label, including local noon.
        for h in [0.0, 6.0, 12.0, 18.0, 23.5] {
            assert_eq!(classify_phase(h, &night), PhaseLabel::WinterNightPolar);
            assert_eq!(classify_phase(h, &day), PhaseLabel::SummerDayPolar);
        }
    }

    #[test]
    fn test_noon_beats_daytime() {
        let g = stockholm_geometry();
        // Noon window overlaps the daytime window; noon has precedence.
        assert_eq!(classify_phase(g.solar_noon_local, &g), PhaseLabel::HighNoon);
        assert_eq!(classify_phase(g.solar_noon_local + 0.9, &g), PhaseLabel::HighNoon);
    }

    #[test]
    fn test_sunrise_beats_golden_and_blue() {
        let g = stockholm_geometry();
        let rise = g.sunrise_local.unwrap();
        // ±30 min around sunrise is Sunrise even though the golden-hour and
        // blue-hour windows both cover parts of it.
        assert_eq!(classify_phase(rise, &g), PhaseLabel::Sunrise);
        assert_eq!(classify_phase(rise + 0.4, &g), PhaseLabel::Sunrise);
        assert_eq!(classify_phase(rise - 0.4, &g), PhaseLabel::Sunrise);
        // Just past the window the golden hour takes over...
        assert_eq!(classify_phase(rise + 0.6, &g), PhaseLabel::GoldenHourMorning);
        // ...and just before it, the blue hour.
        assert_eq!(classify_phase(rise - 0.6, &g), PhaseLabel::BlueHourDawn);
    }

    #[test]
    fn test_sunset_windows() {
        let g = stockholm_geometry();
        let set = g.sunset_local.unwrap();
        assert_eq!(classify_phase(set, &g), PhaseLabel::Sunset);
        assert_eq!(classify_phase(set - 0.7, &g), PhaseLabel::GoldenHourEvening);
        assert_eq!(classify_phase(set + 0.7, &g), PhaseLabel::BlueHourDusk);
        assert_eq!(classify_phase(set + 1.5, &g), PhaseLabel::Night);
    }

    #[test]
    fn test_plain_daytime_and_night() {
        let g = stockholm_geometry();
        let rise = g.sunrise_local.unwrap();
        let noon = g.solar_noon_local;
        // Between golden hour and the noon window: plain daytime.
        assert_eq!(classify_phase((rise + 1.2 + noon - 1.0) / 2.0, &g), PhaseLabel::Daytime);
        // Small hours: night.
        assert_eq!(classify_phase(1.0, &g), PhaseLabel::Night);
    }

    #[test]
    fn test_full_day_phase_sequence() {
        // Sweeping the clock must visit phases in dawn-to-dusk order with
        // no inversions.
        let g = stockholm_geometry();
        let expected = [
            PhaseLabel::Night,
            PhaseLabel::BlueHourDawn,
            PhaseLabel::Sunrise,
            PhaseLabel::GoldenHourMorning,
            PhaseLabel::Daytime,
            PhaseLabel::HighNoon,
            PhaseLabel::Daytime,
            PhaseLabel::GoldenHourEvening,
            PhaseLabel::Sunset,
            PhaseLabel::BlueHourDusk,
            PhaseLabel::Night,
        ];

        let mut seen = Vec::new();
        let mut t = 0.0;
        while t < 24.0 {
            let label = classify_phase(t, &g);
            if seen.last() != Some(&label) {
                seen.push(label);
            }
            t += 1.0 / 60.0;
        }
        assert_eq!(seen, expected, "phase sequence inverted or skipped");
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(PhaseLabel::GoldenHourMorning.to_string(), "Golden Hour (Morning)");
        assert_eq!(PhaseLabel::WinterNightPolar.to_string(), "Winter Night (Polar)");
        assert_eq!(PhaseLabel::HighNoon.to_string(), "High Noon");
    }

    #[test]
    fn test_serde_rename_matches_display() {
        let json = serde_json::to_string(&PhaseLabel::BlueHourDusk).unwrap();
        assert_eq!(json, "\"Blue Hour (Dusk)\"");
        let json = serde_json::to_string(&PhaseLabel::SummerDayPolar).unwrap();
        assert_eq!(json, "\"Summer Day (Polar)\"");
    }
}
