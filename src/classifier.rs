//! The Classifier — primary public API.
//!
//! Ties the moment resolver, solar geometry, phase table, and season
//! mapping together into one serializable report, and renders the ASCII
//! day band for terminal output.

use crate::error::ClassifyError;
use crate::moment::{LocalMoment, ZonePolicy};
use crate::phase::{classify_phase, PhaseLabel};
use crate::season::{self, SeasonLabel};
use crate::solar::{self, compute_geometry, Coordinate, DayState, SolarGeometry};
use chrono::Datelike;
use chrono_tz::Tz;
use serde::Serialize;

/// A classifier bound to one position and one zone policy.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    coord: Coordinate,
    zone: ZonePolicy,
}

/// Full classification output for one moment.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub location: LocationInfo,
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub utc_offset_hours: f64,
    pub solar: SolarSummary,
    pub phase: PhaseLabel,
    pub season: SeasonLabel,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_coords: String,
}

/// Solar geometry with event times rendered as local HH:MM.
#[derive(Debug, Clone, Serialize)]
pub struct SolarSummary {
    pub state: DayState,
    pub declination_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_length_hours: Option<f64>,
    pub solar_noon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
}

impl Classifier {
    /// Build a classifier for a position. Defaults to the ambient zone;
    /// prefer `with_zone` or `with_utc_offset` so the offset is explicit.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ClassifyError> {
        Ok(Self {
            coord: Coordinate::new(lat, lon)?,
            zone: ZonePolicy::Ambient,
        })
    }

    /// Use an IANA zone for offset resolution.
    pub fn with_zone(mut self, tz: Tz) -> Self {
        self.zone = ZonePolicy::Zone(tz);
        self
    }

    /// Use a fixed UTC offset in hours.
    pub fn with_utc_offset(mut self, hours: f64) -> Self {
        self.zone = ZonePolicy::Fixed(hours);
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    /// Classify from raw date/time strings.
    pub fn classify(&self, date: &str, time: &str) -> Result<PhaseReport, ClassifyError> {
        let moment = LocalMoment::parse(date, time)?;
        Ok(self.classify_moment(&moment))
    }

    /// Classify an already-parsed moment. Infallible: the coordinate was
    /// validated at construction and the moment at parse time.
    pub fn classify_moment(&self, moment: &LocalMoment) -> PhaseReport {
        let offset = self.zone.utc_offset_hours(moment.date);
        let geometry = compute_geometry(self.coord, moment.day_of_year(), offset);
        let phase = classify_phase(moment.time_decimal(), &geometry);
        let season = season::resolve(self.coord.lat, moment.date.month0());

        PhaseReport {
            location: LocationInfo {
                latitude: self.coord.lat,
                longitude: self.coord.lon,
                formatted_coords: format_coords(self.coord.lat, self.coord.lon),
            },
            date: moment.date.to_string(),
            time: moment.time.format("%H:%M").to_string(),
            timezone: self.zone.label(),
            utc_offset_hours: offset,
            solar: summarize(&geometry),
            phase,
            season,
        }
    }

    /// The geometry alone, for callers that window the day themselves.
    pub fn geometry_for(&self, moment: &LocalMoment) -> SolarGeometry {
        let offset = self.zone.utc_offset_hours(moment.date);
        compute_geometry(self.coord, moment.day_of_year(), offset)
    }
}

fn summarize(g: &SolarGeometry) -> SolarSummary {
    SolarSummary {
        state: g.state,
        declination_deg: (g.declination_deg * 100.0).round() / 100.0,
        day_length_hours: g.half_day_hours.map(|h| (h * 2.0 * 100.0).round() / 100.0),
        solar_noon: solar::hours_to_hhmm(g.solar_noon_local),
        sunrise: g.sunrise_local.map(solar::hours_to_hhmm),
        sunset: g.sunset_local.map(solar::hours_to_hhmm),
    }
}

/// "59.33°N, 18.07°E" style coordinate formatting.
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}\u{00B0}{}, {:.2}\u{00B0}{}", lat.abs(), ns, lon.abs(), ew)
}

// ─── ASCII day band ──────────────────────────────────────────────

fn band_glyph(label: PhaseLabel) -> char {
    match label {
        PhaseLabel::HighNoon => '█',
        PhaseLabel::Daytime => '▓',
        PhaseLabel::Sunrise
        | PhaseLabel::Sunset
        | PhaseLabel::GoldenHourMorning
        | PhaseLabel::GoldenHourEvening => '▒',
        PhaseLabel::BlueHourDawn | PhaseLabel::BlueHourDusk => '░',
        PhaseLabel::Night => ' ',
        PhaseLabel::SummerDayPolar => '▓',
        PhaseLabel::WinterNightPolar => ' ',
    }
}

/// Render a 24-hour phase band (60 columns) with event markers below.
pub fn render_day_band(report: &PhaseReport, geometry: &SolarGeometry) -> String {
    let bar_width = 60usize;
    let mut out = String::new();

    out.push_str(&format!(
        "  {} \u{2014} {}  [{}]\n",
        report.location.formatted_coords, report.date, report.solar.state
    ));
    out.push_str("  ╔══════════════════════════════════════════════════════════════╗\n");

    // One glyph per 24-minute slot, classified at the slot midpoint.
    let mut band: Vec<char> = (0..bar_width)
        .map(|i| {
            let t = (i as f64 + 0.5) * 24.0 / bar_width as f64;
            band_glyph(classify_phase(t, geometry))
        })
        .collect();

    // Overlay sunrise / noon / sunset markers.
    let mut mark = |hours: f64| {
        let wrapped = ((hours % 24.0) + 24.0) % 24.0;
        let pos = ((wrapped / 24.0) * bar_width as f64) as usize;
        band[pos.min(bar_width - 1)] = '│';
    };
    if let Some(rise) = geometry.sunrise_local {
        mark(rise);
    }
    mark(geometry.solar_noon_local);
    if let Some(set) = geometry.sunset_local {
        mark(set);
    }

    out.push_str("  ║ ");
    out.push_str(&band.iter().collect::<String>());
    out.push_str(" ║\n");
    out.push_str("  ╚══════════════════════════════════════════════════════════════╝\n");
    out.push_str("    00:00          06:00          12:00          18:00       23:59\n");

    // Event list
    let dash = "\u{2014}\u{2014}:\u{2014}\u{2014}";
    out.push_str(&format!(
        "    Sunrise {}   Noon {}   Sunset {}\n",
        report.solar.sunrise.as_deref().unwrap_or(dash),
        report.solar.solar_noon,
        report.solar.sunset.as_deref().unwrap_or(dash),
    ));
    out.push_str(&format!(
        "    {} \u{2192} {} ({})\n",
        report.time, report.phase, report.season
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyc_equinox_noon_is_high_noon() {
        // 40.7N 74.0W at the standard zone for that meridian (UTC-5):
        // solar noon lands within the high-noon window of 12:00 clock time.
        let classifier = Classifier::new(40.7, -74.0).unwrap().with_utc_offset(-5.0);
        let report = classifier.classify("2026-03-20", "12:00").unwrap();

        println!("{}", serde_json::to_string_pretty(&report).unwrap());

        assert_eq!(report.phase, PhaseLabel::HighNoon);
        assert_eq!(report.season, SeasonLabel::Spring);
        assert_eq!(report.solar.state, DayState::Normal);
        assert_eq!(report.utc_offset_hours, -5.0);
    }

    #[test]
    fn test_determinism_repeated_calls() {
        let classifier = Classifier::new(59.33, 18.07).unwrap().with_utc_offset(2.0);
        let a = classifier.classify("2026-04-10", "06:15").unwrap();
        for _ in 0..10 {
            let b = classifier.classify("2026-04-10", "06:15").unwrap();
            assert_eq!(a.phase, b.phase);
            assert_eq!(a.solar.sunrise, b.solar.sunrise);
        }
    }

    #[test]
    fn test_svalbard_december_polar_night_report() {
        let classifier = Classifier::new(78.22, 15.63).unwrap().with_utc_offset(1.0);
        let report = classifier.classify("2025-12-21", "12:00").unwrap();

        assert_eq!(report.phase, PhaseLabel::WinterNightPolar);
        assert_eq!(report.solar.state, DayState::PolarNight);
        assert!(report.solar.sunrise.is_none(), "PolarNight: sunrise must be None");
        assert!(report.solar.sunset.is_none(), "PolarNight: sunset must be None");
        assert_eq!(report.season, SeasonLabel::Winter);

        // Serialized form omits the absent events entirely.
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("\"sunrise\""));
        assert!(json.contains("Winter Night (Polar)"));
    }

    #[test]
    fn test_tromso_midnight_sun_report() {
        let classifier = Classifier::new(69.65, 18.96).unwrap().with_utc_offset(2.0);
        let report = classifier.classify("2026-06-21", "01:30").unwrap();
        assert_eq!(report.phase, PhaseLabel::SummerDayPolar);
        assert_eq!(report.solar.state, DayState::MidnightSun);
    }

    #[test]
    fn test_zone_policy_flows_into_report() {
        let tz: Tz = "Asia/Riyadh".parse().unwrap();
        let classifier = Classifier::new(21.42, 39.83).unwrap().with_zone(tz);
        let report = classifier.classify("2026-02-14", "12:10").unwrap();
        assert_eq!(report.timezone, "Asia/Riyadh");
        assert_eq!(report.utc_offset_hours, 3.0);
        // Mecca at 12:10 local in February: around solar noon.
        assert_eq!(report.phase, PhaseLabel::HighNoon);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let err = Classifier::new(95.0, 0.0).unwrap_err();
        assert_eq!(err, ClassifyError::InvalidLatitude(95.0));
    }

    #[test]
    fn test_bad_date_rejected() {
        let classifier = Classifier::new(40.7, -74.0).unwrap().with_utc_offset(-5.0);
        let err = classifier.classify("not-a-date", "12:00").unwrap_err();
        assert!(matches!(err, ClassifyError::ParseDate(_)));
    }

    #[test]
    fn test_format_coords() {
        assert_eq!(format_coords(59.33, 18.07), "59.33\u{00B0}N, 18.07\u{00B0}E");
        assert_eq!(format_coords(-33.87, -151.21), "33.87\u{00B0}S, 151.21\u{00B0}W");
    }

    #[test]
    fn test_day_band_normal_day() {
        let classifier = Classifier::new(59.33, 18.07).unwrap().with_utc_offset(2.0);
        let moment = LocalMoment::parse("2026-04-10", "12:00").unwrap();
        let report = classifier.classify_moment(&moment);
        let geometry = classifier.geometry_for(&moment);
        let band = render_day_band(&report, &geometry);
        println!("{}", band);
        assert!(band.contains('│'), "band must carry event markers");
        assert!(band.contains("Sunrise"));
        assert!(band.contains("High Noon") || band.contains("Daytime"));
    }

    #[test]
    fn test_day_band_polar_night_has_no_markers() {
        let classifier = Classifier::new(78.22, 15.63).unwrap().with_utc_offset(1.0);
        let moment = LocalMoment::parse("2025-12-21", "12:00").unwrap();
        let report = classifier.classify_moment(&moment);
        let geometry = classifier.geometry_for(&moment);
        let band = render_day_band(&report, &geometry);
        println!("{}", band);
        assert!(band.contains("PolarNight"));
        assert!(band.contains("\u{2014}\u{2014}:\u{2014}\u{2014}"), "missing events render as dashes");
    }
}
