//! Astronomical season from latitude and calendar month.
//!
//! Fixed quarter buckets (Mar-May, Jun-Aug, Sep-Nov, Dec-Feb), mirrored
//! for the southern hemisphere. Independent of the solar geometry: the
//! season is a calendar fact, not a function of day length.

use serde::Serialize;

/// One of the four seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeasonLabel {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl std::fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Autumn => write!(f, "Autumn"),
            Self::Winter => write!(f, "Winter"),
        }
    }
}

/// Resolve the season for a latitude and 0-indexed month (0 = January).
///
/// Callers validate the month at the crate boundary; out-of-range values
/// fall into the December-February bucket here and are rejected before
/// this point.
pub fn resolve(lat: f64, month0: u32) -> SeasonLabel {
    let northern = lat >= 0.0;
    match month0 {
        2..=4 => {
            if northern { SeasonLabel::Spring } else { SeasonLabel::Autumn }
        }
        5..=7 => {
            if northern { SeasonLabel::Summer } else { SeasonLabel::Winter }
        }
        8..=10 => {
            if northern { SeasonLabel::Autumn } else { SeasonLabel::Spring }
        }
        _ => {
            if northern { SeasonLabel::Winter } else { SeasonLabel::Summer }
        }
    }
}
