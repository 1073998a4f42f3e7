use serde::{Deserialize, Serialize};

/// Ramallah city center. Both the initial map view and the view restored
/// after a clinic is saved.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 31.9038,
    lng: 35.2034,
};

pub const DEFAULT_ZOOM: u8 = 12;
pub const RESOLVED_ZOOM: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parses a pair of text fields. Both must hold finite numbers.
    pub fn parse(lat: &str, lng: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lng = lng.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self { lat, lng })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(LatLng::parse(" 31.5 ", "35"), Some(LatLng::new(31.5, 35.0)));
        assert_eq!(LatLng::parse("31.5", ""), None);
        assert_eq!(LatLng::parse("abc", "35.1"), None);
        assert_eq!(LatLng::parse("NaN", "35.1"), None);
    }
}
