//! Solar geometry from closed-form approximations.
//!
//! Computes declination, half-day length, and local solar noon / sunrise /
//! sunset for any latitude and day of year. Accuracy is intentionally
//! coarse (no refraction, no equation-of-time correction): the consumer is
//! a light-condition classifier working in hour-wide windows, not an
//! almanac.

use crate::error::ClassifyError;
use serde::Serialize;
use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;

/// Peak solar declination over the year, degrees (axial tilt).
const MAX_DECLINATION: f64 = 23.45;

/// A validated geographic position.
///
/// Construction is the only place coordinates are range-checked; everything
/// downstream can assume finite, in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ClassifyError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ClassifyError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ClassifyError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }
}

/// The state of the solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    /// Sun rises and sets normally.
    Normal,
    /// Sun never sets (polar day).
    MidnightSun,
    /// Sun never rises (polar night).
    PolarNight,
}

impl std::fmt::Display for DayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayState::Normal => write!(f, "Normal"),
            DayState::MidnightSun => write!(f, "MidnightSun"),
            DayState::PolarNight => write!(f, "PolarNight"),
        }
    }
}

/// Computed solar geometry for one (position, day) pair.
///
/// On a MidnightSun or PolarNight day there is no horizon crossing, so
/// half-day length and sunrise/sunset are None. Never faked: a polar day is
/// reported as polar, not approximated into a 0- or 24-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarGeometry {
    pub declination_deg: f64,
    pub state: DayState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_day_hours: Option<f64>,
    /// Local clock hours; may fall outside [0, 24) near the antimeridian.
    pub solar_noon_local: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise_local: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_local: Option<f64>,
}

/// Solar declination in degrees for a 1-indexed day of year.
///
/// Sinusoidal approximation anchored at the March equinox (day 81).
pub fn declination_deg(day_of_year: u32) -> f64 {
    MAX_DECLINATION * ((2.0 * PI / 365.0) * (day_of_year as f64 - 81.0)).sin()
}

/// Compute the full geometry for a position, day of year, and UTC offset.
///
/// Pure: identical inputs yield bit-identical output.
pub fn compute_geometry(coord: Coordinate, day_of_year: u32, utc_offset_hours: f64) -> SolarGeometry {
    let decl = declination_deg(day_of_year);

    // Hour-angle cosine at the horizon. |cos_h| > 1 means the horizon is
    // never crossed that day: the sign tells which polar state.
    let cos_h = -(coord.lat * DEG).tan() * (decl * DEG).tan();

    let solar_noon_local = 12.0 - coord.lon / 15.0 + utc_offset_hours;

    if cos_h > 1.0 {
        return SolarGeometry {
            declination_deg: decl,
            state: DayState::PolarNight,
            half_day_hours: None,
            solar_noon_local,
            sunrise_local: None,
            sunset_local: None,
        };
    }
    if cos_h < -1.0 {
        return SolarGeometry {
            declination_deg: decl,
            state: DayState::MidnightSun,
            half_day_hours: None,
            solar_noon_local,
            sunrise_local: None,
            sunset_local: None,
        };
    }

    // Clamp absorbs float overshoot at the exact boundary; genuine
    // degeneracy was already dispatched above.
    let half_day = cos_h.clamp(-1.0, 1.0).acos() / DEG / 15.0;

    SolarGeometry {
        declination_deg: decl,
        state: DayState::Normal,
        half_day_hours: Some(half_day),
        solar_noon_local,
        sunrise_local: Some(solar_noon_local - half_day),
        sunset_local: Some(solar_noon_local + half_day),
    }
}

/// Convert decimal local hours to an HH:MM string, wrapping into [0, 24).
pub fn hours_to_hhmm(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    let total = ((total % 1440) + 1440) % 1440;
    format!("{:02}:{:02}", total / 60, total % 60)
}
