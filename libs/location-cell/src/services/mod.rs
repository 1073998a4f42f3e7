pub mod google;
pub mod providers;
pub mod resolver;

pub use google::GoogleMapsClient;
pub use providers::{Geocoder, PlacesProvider};
pub use resolver::LocationResolver;
