use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use aerobrief::api::AppState;
use aerobrief::briefing::BriefingComposer;
use aerobrief::config::AppConfig;
use aerobrief::summarizer::{GeminiBackend, SummaryBackend};
use aerobrief::weather::AviationWeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let backend: Option<Arc<dyn SummaryBackend>> = match &config.gemini_api_key {
        Some(key) => {
            tracing::info!("Gemini API configured successfully");
            Some(Arc::new(GeminiBackend::new(key.clone())))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, briefings use the deterministic fallback");
            None
        }
    };

    let state = AppState {
        weather: Arc::new(AviationWeatherClient::new()),
        composer: Arc::new(BriefingComposer::new(backend, config.pilot_profile.clone())),
    };

    aerobrief::web::run(state, config.port).await
}
