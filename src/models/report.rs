//! METAR and TAF report records
//!
//! The pipeline only reads the station identifier and the raw encoded
//! text; every other upstream field is kept in a flattened map and
//! forwarded to the caller unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One routine surface observation (METAR) for a station
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetarReport {
    /// ICAO identifier of the reporting station
    #[serde(rename = "stationId", skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    /// Raw encoded observation text
    #[serde(rename = "rawOb", skip_serializing_if = "Option::is_none")]
    pub raw_ob: Option<String>,
    /// Upstream fields the pipeline never inspects, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One terminal aerodrome forecast (TAF) for a station
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TafReport {
    /// ICAO identifier of the forecast station
    #[serde(rename = "stationId", skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    /// Raw encoded forecast text
    #[serde(rename = "rawTAF", skip_serializing_if = "Option::is_none")]
    pub raw_taf: Option<String>,
    /// Upstream fields the pipeline never inspects, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetarReport {
    /// Create a report carrying only the fields the pipeline reads
    #[must_use]
    pub fn new(station_id: &str, raw_ob: &str) -> Self {
        Self {
            station_id: Some(station_id.to_string()),
            raw_ob: Some(raw_ob.to_string()),
            extra: Map::new(),
        }
    }
}

impl TafReport {
    /// Create a report carrying only the fields the pipeline reads
    #[must_use]
    pub fn new(station_id: &str, raw_taf: &str) -> Self {
        Self {
            station_id: Some(station_id.to_string()),
            raw_taf: Some(raw_taf.to_string()),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metar_extra_fields_pass_through() {
        let upstream = json!({
            "stationId": "KJFK",
            "rawOb": "KJFK 121251Z 31008KT 10SM FEW250 03/M08 A3033",
            "lat": 40.639,
            "lon": -73.778,
            "temp": 3.0
        });

        let report: MetarReport = serde_json::from_value(upstream.clone()).unwrap();
        assert_eq!(report.station_id.as_deref(), Some("KJFK"));
        assert_eq!(report.extra.get("lat"), Some(&json!(40.639)));

        // Re-serialization must forward every upstream field unchanged
        let round_tripped = serde_json::to_value(&report).unwrap();
        assert_eq!(round_tripped, upstream);
    }

    #[test]
    fn test_taf_missing_raw_text_is_not_an_error() {
        let report: TafReport = serde_json::from_value(json!({ "stationId": "KBOS" })).unwrap();
        assert_eq!(report.station_id.as_deref(), Some("KBOS"));
        assert!(report.raw_taf.is_none());
    }
}
