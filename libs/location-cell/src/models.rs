use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::geo::{LatLng, DEFAULT_CENTER, DEFAULT_ZOOM};

// ==============================================================================
// SEARCH TUNING
// ==============================================================================

/// Autocomplete results are restricted to this country.
pub const COUNTRY_RESTRICTION: &str = "ps";
/// Appended to queries that do not already name the city.
pub const LOCALITY_SUFFIX: &str = "Ramallah";
const LOCALITY_ALIASES: [&str; 2] = ["ramallah", "رام الله"];
/// Shorter queries never reach the places service.
pub const MIN_QUERY_CHARS: usize = 2;

/// Adds the locality suffix unless the query already mentions the city.
pub fn biased_query(query: &str) -> String {
    let query = query.trim();
    let lowered = query.to_lowercase();

    if LOCALITY_ALIASES.iter().any(|alias| lowered.contains(alias)) {
        query.to_string()
    } else {
        format!("{}, {}", query, LOCALITY_SUFFIX)
    }
}

// ==============================================================================
// VIEW STATE
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub marker: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            marker: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// The clinic form's latitude/longitude inputs, kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoordinateFields {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateFields {
    pub fn from_position(position: LatLng) -> Self {
        Self {
            latitude: position.lat.to_string(),
            longitude: position.lng.to_string(),
        }
    }

    pub fn position(&self) -> Option<LatLng> {
        LatLng::parse(&self.latitude, &self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub description: String,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "suggestions", rename_all = "snake_case")]
pub enum SuggestionPanel {
    #[default]
    Hidden,
    /// Shown with a "no results" message.
    Empty,
    Results(Vec<Suggestion>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub location: LatLng,
    pub formatted_address: Option<String>,
}

/// Everything the clinics tab needs to draw the location widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub map: Option<MapView>,
    pub fields: CoordinateFields,
    pub address: String,
    pub panel: SuggestionPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was too short; nothing was sent.
    Skipped,
    Applied,
    /// A newer search or selection started while this one was in flight.
    Stale,
}

// ==============================================================================
// GOOGLE MAPS WIRE TYPES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Suggestion>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Mapping service not configured")]
    NotConfigured,

    #[error("Mapping service returned {status}: {message}")]
    Service { status: String, message: String },

    #[error("Mapping service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected mapping service response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biased_query_appends_locality() {
        assert_eq!(biased_query("Irsal street"), "Irsal street, Ramallah");
        assert_eq!(biased_query("  Irsal street "), "Irsal street, Ramallah");
    }

    #[test]
    fn test_biased_query_keeps_existing_locality() {
        assert_eq!(biased_query("Al-Manara, RAMALLAH"), "Al-Manara, RAMALLAH");
        assert_eq!(biased_query("دوار المنارة رام الله"), "دوار المنارة رام الله");
    }

    #[test]
    fn test_coordinate_fields_from_position() {
        let fields = CoordinateFields::from_position(LatLng::new(31.9038, 35.2034));
        assert_eq!(fields.latitude, "31.9038");
        assert_eq!(fields.position(), Some(LatLng::new(31.9038, 35.2034)));
    }

    #[test]
    fn test_panel_serializes_with_state_tag() {
        let json = serde_json::to_value(SuggestionPanel::Empty).unwrap();
        assert_eq!(json["state"], "empty");
    }
}
