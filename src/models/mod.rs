//! Data models for the `AeroBrief` service
//!
//! This module contains the core domain models organized by concern:
//! - Report: METAR and TAF upstream report records
//! - Route: the ordered ICAO code list supplied by the caller

pub mod report;
pub mod route;

// Re-export all public types for convenient access
pub use report::{MetarReport, TafReport};
pub use route::RouteCodes;
