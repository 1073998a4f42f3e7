//! # Location Cell
//!
//! Keeps a clinic's location consistent across three representations: the
//! map marker, the latitude/longitude form fields and the free-text address
//! search box.
//!
//! ## Features
//!
//! - **Lazy map**: the map model only exists once the clinics tab is opened
//! - **Marker sync**: drag, click and manual coordinate edits update each other
//! - **Address search**: Google Places autocomplete biased to Ramallah
//! - **Geocoding**: a chosen suggestion moves the marker to its coordinates
//! - **Stale-response guard**: only the latest search or selection is applied
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                  Location Cell                      |
//! +-----------------------------------------------------+
//! |  models.rs       |  Map view, fields, suggestions   |
//! |  services/       |                                  |
//! |    providers.rs  |  Places / geocoding seams        |
//! |    google.rs     |  Google Maps web service client  |
//! |    resolver.rs   |  Synchronization rules           |
//! +-----------------------------------------------------+
//! ```
//!
//! ## Configuration
//!
//! - `GOOGLE_MAPS_API_KEY` - key for the Places and Geocoding APIs
//! - `GOOGLE_MAPS_BASE_URL` - API base URL (optional, defaults to production)

pub mod models;
pub mod services;

pub use models::{
    CoordinateFields, GeocodeResult, LocationError, LocationSnapshot, MapView, SearchOutcome,
    Suggestion, SuggestionPanel,
};

pub use services::{Geocoder, GoogleMapsClient, LocationResolver, PlacesProvider};
