//! `AeroBrief` - Aviation weather briefing service
//!
//! This library provides the core functionality for fetching METAR/TAF
//! reports along a route, composing an AI-generated flight briefing,
//! and falling back to a deterministic briefing when the AI backend is
//! unavailable.

pub mod api;
pub mod briefing;
pub mod config;
pub mod error;
pub mod models;
pub mod summarizer;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use briefing::BriefingComposer;
pub use config::AppConfig;
pub use error::BriefingError;
pub use models::{MetarReport, RouteCodes, TafReport};
pub use summarizer::{GeminiBackend, SummaryBackend};
pub use weather::{AviationWeatherClient, WeatherDataClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BriefingError>;
