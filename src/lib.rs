//! skyphase — deterministic solar-phase and season classification.
//!
//! Given a position, a date, and a local clock time, produce one of eleven
//! light-condition labels ("Sunrise", "Golden Hour (Morning)", "Night", ...);
//! given a latitude and a month, produce the astronomical season. Both are
//! pure, synchronous functions: no ephemeris lookup, no caching, no state.
//!
//! ```no_run
//! use skyphase::Classifier;
//!
//! let report = Classifier::new(59.33, 18.07)?
//!     .with_utc_offset(2.0)
//!     .classify("2026-06-21", "03:40")?;
//! println!("{}", report.phase);
//! # Ok::<(), skyphase::ClassifyError>(())
//! ```

pub mod classifier;
pub mod error;
pub mod moment;
pub mod phase;
pub mod season;
pub mod server;
pub mod solar;

pub use classifier::{Classifier, PhaseReport};
pub use error::ClassifyError;
pub use moment::{LocalMoment, ZonePolicy};
pub use phase::PhaseLabel;
pub use season::SeasonLabel;
pub use solar::{Coordinate, DayState, SolarGeometry};

/// Classify the light condition at a position and local moment.
///
/// Boundary convenience over [`Classifier`]: resolves the UTC offset from
/// the executing environment's zone, which is only correct when the process
/// runs in the zone being modeled. Callers that know the offset should use
/// [`Classifier::with_utc_offset`] or [`Classifier::with_zone`] instead.
pub fn classify_solar_phase(
    lat: f64,
    lon: f64,
    date: &str,
    time: &str,
) -> Result<PhaseLabel, ClassifyError> {
    let report = Classifier::new(lat, lon)?.classify(date, time)?;
    Ok(report.phase)
}

/// Resolve the season for a latitude and 0-indexed month (0 = January).
pub fn resolve_season(lat: f64, month0: u32) -> Result<SeasonLabel, ClassifyError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ClassifyError::InvalidLatitude(lat));
    }
    if month0 > 11 {
        return Err(ClassifyError::InvalidMonth(month0));
    }
    Ok(season::resolve(lat, month0))
}
