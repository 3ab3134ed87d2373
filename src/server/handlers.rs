use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, PhaseReport};
use crate::error::ClassifyError;
use crate::moment::parse_zone;
use crate::season::SeasonLabel;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        ApiError(StatusCode::BAD_REQUEST, err.to_string())
    }
}

// ─── GET /api/phase ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PhaseQuery {
    pub lat: f64,
    pub lon: f64,
    /// YYYY-MM-DD; defaults to today (UTC).
    pub date: Option<String>,
    /// HH:MM; defaults to the current UTC time.
    pub time: Option<String>,
    /// IANA zone. Without `tz` or `utc_offset` the offset falls back to
    /// UTC, never to the server machine's own zone.
    pub tz: Option<String>,
    /// Fixed offset in hours east of UTC; takes precedence over `tz`.
    pub utc_offset: Option<f64>,
}

pub async fn phase(Query(params): Query<PhaseQuery>) -> Result<Json<PhaseReport>, ApiError> {
    let mut classifier = Classifier::new(params.lat, params.lon)?;

    classifier = if let Some(hours) = params.utc_offset {
        classifier.with_utc_offset(hours)
    } else if let Some(ref name) = params.tz {
        classifier.with_zone(parse_zone(name)?)
    } else {
        classifier.with_utc_offset(0.0)
    };

    let now = Utc::now();
    let date = params.date.unwrap_or_else(|| now.date_naive().to_string());
    let time = params
        .time
        .unwrap_or_else(|| format!("{:02}:{:02}", now.hour(), now.minute()));

    let report = classifier.classify(&date, &time)?;
    Ok(Json(report))
}

// ─── GET /api/season ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SeasonQuery {
    pub lat: f64,
    /// 0-indexed month (0 = January).
    pub month: u32,
}

#[derive(Serialize)]
pub struct SeasonResponse {
    pub latitude: f64,
    pub month: u32,
    pub season: SeasonLabel,
}

pub async fn season(Query(params): Query<SeasonQuery>) -> Result<Json<SeasonResponse>, ApiError> {
    let season = crate::resolve_season(params.lat, params.month)?;
    Ok(Json(SeasonResponse {
        latitude: params.lat,
        month: params.month,
        season,
    }))
}
