//! AI prompt construction
//!
//! The prompt pins the HTML structure the model must return and
//! carries the severity-filter and mention-all-codes instructions
//! unchanged; precedence between those two is left to the model.

use std::collections::BTreeSet;

use crate::models::MetarReport;

/// Build the single-turn briefing prompt.
///
/// The airport directory is deduplicated and sorted for a stable
/// prompt; this is deliberately different from the route-order label
/// used by fallback briefings.
#[must_use]
pub fn build(
    pilot_profile: &str,
    metars: &[MetarReport],
    metar_block: &str,
    taf_block: &str,
) -> String {
    let directory: BTreeSet<&str> = metars
        .iter()
        .filter_map(|m| m.station_id.as_deref())
        .filter(|code| !code.is_empty())
        .collect();
    let airport_directory = directory.into_iter().collect::<Vec<_>>().join(" → ");

    format!(
        r#"You are an expert aviation weather briefer. Audience pilot profile: '{pilot_profile}'.

Task:
- Produce a very concise flight weather briefing (HTML format).
- Route summary: Max 2–3 lines, clear & safety-focused.
- Per-airport summary: **exactly 1 line per ICAO**, include only if conditions are extreme
  (low vis, strong winds, storms, icing, turbulence, etc.).
- Keep plain language, avoid unnecessary details.

HTML Output Structure:
<div class="briefing-content">
  <table class="briefing-table">
    <tr><th>Route Summary</th><td>Brief overall conditions for the route</td></tr>
    <tr><th>Recommendations</th><td>Speed, altitude, or diversion advice</td></tr>
  </table>

  <div class="per-airport-section">
    <button class="read-more-btn" onclick="togglePerAirport()">Read More >></button>
    <div class="per-airport-content" style="display:none;">
      <h3>Per-Airport Conditions</h3>
      <ul>
        <li><strong>ICAO</strong>: 1-line summary (mention all given icao codes)</li>
      </ul>
    </div>
  </div>
</div>

AIRPORT DIRECTORY:
{airport_directory}

RAW WEATHER DATA START
METARs:
{metar_block}
TAFs:
{taf_block}
RAW WEATHER DATA END"#
    )
}
