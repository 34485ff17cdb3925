//! HTTP API for the briefing pipeline
//!
//! One endpoint: `GET /briefing?codes=KJFK,KBOS`. The handler is the
//! orchestrator: it validates the code list, fetches METARs then TAFs
//! (each fetch soft-fails to an empty list), composes the briefing and
//! assembles the response payload. Only a missing `codes` parameter is
//! surfaced as an error; every upstream failure degrades to fallback
//! content inside a 200 response.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::briefing::BriefingComposer;
use crate::error::BriefingError;
use crate::models::{MetarReport, RouteCodes, TafReport};
use crate::weather::WeatherDataClient;

/// Shared per-process state, immutable after startup
#[derive(Clone)]
pub struct AppState {
    /// Weather data source
    pub weather: Arc<dyn WeatherDataClient>,
    /// Briefing composer holding the AI backend handle
    pub composer: Arc<BriefingComposer>,
}

#[derive(Debug, Deserialize)]
pub struct BriefingParams {
    #[serde(default)]
    codes: Option<String>,
}

/// Response payload of `GET /briefing`
#[derive(Debug, Serialize, Deserialize)]
pub struct BriefingResponse {
    /// HTML fragment, or the plain not-enough-data string
    pub summary: String,
    /// METAR records forwarded from the data source
    pub metar_reports: Vec<MetarReport>,
    /// TAF records forwarded from the data source
    pub taf_reports: Vec<TafReport>,
}

/// Build the API router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/briefing", get(get_briefing))
        .with_state(state)
}

#[instrument(skip(state))]
async fn get_briefing(
    State(state): State<AppState>,
    Query(params): Query<BriefingParams>,
) -> Result<Json<BriefingResponse>, BriefingError> {
    let route = RouteCodes::parse(params.codes.as_deref().unwrap_or_default())?;
    info!("Generating briefing for route {}", route.to_query_value());

    let metar_reports = match state.weather.fetch_metars(&route).await {
        Ok(reports) => reports,
        Err(e) => {
            warn!("METAR fetch failed, continuing with empty reports: {e}");
            Vec::new()
        }
    };

    let taf_reports = match state.weather.fetch_tafs(&route).await {
        Ok(reports) => reports,
        Err(e) => {
            warn!("TAF fetch failed, continuing with empty reports: {e}");
            Vec::new()
        }
    };

    let summary = state.composer.compose(&metar_reports, &taf_reports).await;

    Ok(Json(BriefingResponse {
        summary,
        metar_reports,
        taf_reports,
    }))
}
