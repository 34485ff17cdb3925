//! Configuration for the `AeroBrief` service
//!
//! All settings come from process environment variables, read once at
//! startup. The AI credential is optional: its absence selects the
//! deterministic fallback briefing path instead of failing startup.

use std::env;

use anyhow::{Context, Result};

/// Base URL of the aviation weather data source
pub const AVIATION_WEATHER_BASE_URL: &str = "https://aviationweather.gov/api/data";

const DEFAULT_PILOT_PROFILE: &str = "General aviation VFR pilot";
const DEFAULT_PORT: u16 = 5001;

/// Process-wide configuration, immutable after load
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key; `None` means the AI path is disabled
    pub gemini_api_key: Option<String>,
    /// Audience descriptor embedded in the AI prompt
    pub pilot_profile: String,
    /// Port the HTTP server binds to
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` and `PILOT_PROFILE` are optional;
    /// `AEROBRIEF_PORT` must parse as a port number when set.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let pilot_profile = env::var("PILOT_PROFILE")
            .ok()
            .filter(|profile| !profile.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PILOT_PROFILE.to_string());

        let port = match env::var("AEROBRIEF_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid AEROBRIEF_PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            pilot_profile,
            port,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            pilot_profile: DEFAULT_PILOT_PROFILE.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
