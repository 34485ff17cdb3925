//! Aviation weather data client
//!
//! Fetches METAR and TAF reports for a route from the
//! aviationweather.gov data API. Every fetch is a single GET with no
//! retries; failures are reported as [`BriefingError::UpstreamFetch`]
//! and downgraded to empty report lists by the orchestrator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::AVIATION_WEATHER_BASE_URL;
use crate::error::BriefingError;
use crate::models::{MetarReport, RouteCodes, TafReport};
use crate::Result;

/// Source of METAR and TAF reports for a route.
///
/// Abstracted behind a trait so tests can substitute a stub without
/// reaching the network.
#[async_trait]
pub trait WeatherDataClient: Send + Sync {
    /// Fetch current METARs for the given route
    async fn fetch_metars(&self, route: &RouteCodes) -> Result<Vec<MetarReport>>;
    /// Fetch current TAFs for the given route
    async fn fetch_tafs(&self, route: &RouteCodes) -> Result<Vec<TafReport>>;
}

/// HTTP client for the aviationweather.gov data API
pub struct AviationWeatherClient {
    client: Client,
    base_url: String,
}

impl AviationWeatherClient {
    /// Create a client against the production data API
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(AVIATION_WEATHER_BASE_URL)
    }

    /// Create a client against an alternate base URL (used by tests)
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("AeroBrief/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_reports<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>> {
        debug!("Fetching weather reports from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BriefingError::upstream(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BriefingError::upstream(format!(
                "data source returned {}",
                response.status()
            )));
        }

        let reports: Vec<T> = response
            .json()
            .await
            .map_err(|e| BriefingError::upstream(format!("malformed response: {e}")))?;

        info!("Fetched {} reports", reports.len());
        Ok(reports)
    }
}

impl Default for AviationWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherDataClient for AviationWeatherClient {
    async fn fetch_metars(&self, route: &RouteCodes) -> Result<Vec<MetarReport>> {
        let url = format!(
            "{}/metar?ids={}&format=json&latlon=true",
            self.base_url,
            urlencoding::encode(&route.to_query_value())
        );
        self.fetch_reports(url).await
    }

    async fn fetch_tafs(&self, route: &RouteCodes) -> Result<Vec<TafReport>> {
        let url = format!(
            "{}/taf?ids={}&format=json",
            self.base_url,
            urlencoding::encode(&route.to_query_value())
        );
        self.fetch_reports(url).await
    }
}
