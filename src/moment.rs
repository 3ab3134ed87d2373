//! Calendar moment handling: parsing, day-of-year, decimal hours,
//! and UTC offset resolution.
//!
//! The solar calculator never touches strings or timezones itself; this
//! module turns the caller's (date, time) pair into the numeric inputs it
//! needs, and resolves the UTC offset under an explicit policy.

use crate::error::ClassifyError;
use chrono::{Datelike, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Timelike};
use chrono_tz::Tz;

/// A calendar date plus a wall-clock time, in the caller's local context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl LocalMoment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse from "YYYY-MM-DD" and "HH:MM" (seconds optional).
    ///
    /// Fails fast: a malformed string never produces a partial or default
    /// moment.
    pub fn parse(date: &str, time: &str) -> Result<Self, ClassifyError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ClassifyError::ParseDate(date.to_string()))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .map_err(|_| ClassifyError::ParseTime(time.to_string()))?;
        Ok(Self { date, time })
    }

    /// 1-indexed ordinal day within the year, leap-aware (1..=366).
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// Wall-clock time as decimal hours in [0, 24).
    pub fn time_decimal(&self) -> f64 {
        self.time.hour() as f64
            + self.time.minute() as f64 / 60.0
            + self.time.second() as f64 / 3600.0
    }
}

/// Where the UTC offset for a moment comes from.
///
/// The offset is an explicit input to the solar calculation, not something
/// it derives. `Ambient` reproduces the behavior of reading the process
/// timezone and is only appropriate when the machine running the
/// calculation sits in the zone being modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZonePolicy {
    /// A fixed offset in hours east of UTC.
    Fixed(f64),
    /// An IANA zone; offset taken at the date's local noon.
    Zone(Tz),
    /// The executing environment's local zone.
    Ambient,
}

impl ZonePolicy {
    /// Resolve the policy to an offset (hours east of UTC) for a date.
    ///
    /// Noon is used as the probe instant so DST gaps at midnight cannot
    /// make the local datetime ambiguous or nonexistent.
    pub fn utc_offset_hours(&self, date: NaiveDate) -> f64 {
        match self {
            Self::Fixed(hours) => *hours,
            Self::Zone(tz) => offset_at_noon(*tz, date),
            Self::Ambient => {
                let noon = date.and_hms_opt(12, 0, 0).unwrap();
                match Local.from_local_datetime(&noon).earliest() {
                    Some(dt) => dt.offset().fix().local_minus_utc() as f64 / 3600.0,
                    None => 0.0,
                }
            }
        }
    }

    /// Human-readable label for reports ("UTC-05:00", "Europe/Oslo", ...).
    pub fn label(&self) -> String {
        match self {
            Self::Fixed(hours) => {
                let sign = if *hours < 0.0 { '-' } else { '+' };
                let abs = hours.abs();
                let h = abs.trunc() as i64;
                let m = ((abs - abs.trunc()) * 60.0).round() as i64;
                format!("UTC{}{:02}:{:02}", sign, h, m)
            }
            Self::Zone(tz) => tz.to_string(),
            Self::Ambient => "Local (ambient)".to_string(),
        }
    }
}

fn offset_at_noon(tz: Tz, date: NaiveDate) -> f64 {
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    match tz.from_local_datetime(&noon).earliest() {
        Some(dt) => {
            let fixed: FixedOffset = dt.offset().fix();
            fixed.local_minus_utc() as f64 / 3600.0
        }
        None => 0.0,
    }
}

/// Parse an IANA zone name.
pub fn parse_zone(name: &str) -> Result<Tz, ClassifyError> {
    name.parse()
        .map_err(|_| ClassifyError::UnknownTimezone(name.to_string()))
}
