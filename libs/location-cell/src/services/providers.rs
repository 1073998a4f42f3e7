use async_trait::async_trait;

use crate::models::{GeocodeResult, LocationError, Suggestion};

/// Address autocomplete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn suggest(&self, input: &str, country: &str) -> Result<Vec<Suggestion>, LocationError>;
}

/// Address to coordinates. `Ok(None)` means the address matched nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, LocationError>;
}
