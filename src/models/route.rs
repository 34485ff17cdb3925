//! Route model for the caller-supplied ICAO code list

use crate::error::BriefingError;

/// Ordered ICAO codes parsed from the `codes` query parameter.
///
/// Insertion order is route order and is preserved; it defines the
/// direction shown in briefing summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCodes(Vec<String>);

impl RouteCodes {
    /// Parse a comma-delimited code list.
    ///
    /// Codes are trimmed and uppercased; empty segments are dropped.
    /// An input with no codes left after parsing is rejected with
    /// [`BriefingError::MissingParameter`].
    pub fn parse(raw: &str) -> Result<Self, BriefingError> {
        let codes: Vec<String> = raw
            .split(',')
            .map(|code| code.trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() {
            return Err(BriefingError::MissingParameter);
        }
        Ok(Self(codes))
    }

    /// Codes in route order
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.0
    }

    /// Render as the comma-delimited `ids` value the upstream API expects
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.0.join(",")
    }
}
