//! Error types for the classifier.

use std::fmt;

/// Everything that can go wrong turning caller input into a label.
///
/// The computation itself is pure and total: once the inputs pass
/// validation, no call can fail. All failures are input failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// Latitude outside [-90, 90] or non-finite.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] or non-finite.
    InvalidLongitude(f64),
    /// Month index outside 0..=11.
    InvalidMonth(u32),
    /// Date string not parseable as YYYY-MM-DD.
    ParseDate(String),
    /// Time string not parseable as HH:MM or HH:MM:SS.
    ParseTime(String),
    /// Not a known IANA timezone identifier.
    UnknownTimezone(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude(v) => {
                write!(f, "Invalid latitude {}: must be finite and in -90..90", v)
            }
            Self::InvalidLongitude(v) => {
                write!(f, "Invalid longitude {}: must be finite and in -180..180", v)
            }
            Self::InvalidMonth(m) => {
                write!(f, "Invalid month index {}: must be 0 (January) to 11 (December)", m)
            }
            Self::ParseDate(s) => write!(f, "Invalid date '{}': expected YYYY-MM-DD", s),
            Self::ParseTime(s) => write!(f, "Invalid time '{}': expected HH:MM or HH:MM:SS", s),
            Self::UnknownTimezone(s) => {
                write!(f, "Unknown timezone '{}'. Use IANA format (e.g. Europe/Oslo).", s)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}
