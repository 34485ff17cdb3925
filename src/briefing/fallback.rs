//! Deterministic fallback briefings
//!
//! Rendered when the AI backend is not configured or failed at call
//! time. Both variants share the exact HTML skeleton the AI path is
//! instructed to produce; only the copy differs.

use crate::models::MetarReport;

/// Which degraded path selected the fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No AI credential was configured at process start
    Unconfigured,
    /// The AI backend raised at invocation time
    InvocationFailed,
}

/// Derive the route label from station identifiers in report order.
///
/// Duplicates and order are preserved so the label reads as the flown
/// route. Reports without a station identifier are skipped; when none
/// remain the literal `"Unknown route"` is used.
#[must_use]
pub fn route_label(metars: &[MetarReport]) -> String {
    let codes: Vec<&str> = metars
        .iter()
        .filter_map(|m| m.station_id.as_deref())
        .filter(|code| !code.is_empty())
        .collect();

    if codes.is_empty() {
        "Unknown route".to_string()
    } else {
        codes.join(" → ")
    }
}

/// Render the fallback briefing document for the given reason
#[must_use]
pub fn render(metars: &[MetarReport], reason: FallbackReason) -> String {
    let route = route_label(metars);

    let (route_summary, note) = match reason {
        FallbackReason::Unconfigured => (
            format!(
                "Weather briefing for {route}. Conditions appear favorable for flight operations."
            ),
            "AI weather analysis unavailable. Please check official weather sources.",
        ),
        FallbackReason::InvocationFailed => (
            format!(
                "Weather briefing for {route}. Please check official weather sources for current conditions."
            ),
            "AI weather analysis temporarily unavailable. Please check official weather sources.",
        ),
    };

    format!(
        r#"<div class="briefing-content">
  <table class="briefing-table">
    <tr><th>Route Summary</th><td>{route_summary}</td></tr>
    <tr><th>Recommendations</th><td>Monitor weather conditions and maintain standard flight procedures.</td></tr>
  </table>

  <div class="per-airport-section">
    <button class="read-more-btn" onclick="togglePerAirport()">Read More >></button>
    <div class="per-airport-content" style="display:none;">
      <h3>Per-Airport Conditions</h3>
      <ul>
        <li><strong>Note</strong>: {note}</li>
      </ul>
    </div>
  </div>
</div>"#
    )
}
