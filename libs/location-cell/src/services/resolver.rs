use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use notification_cell::{AlertKind, NotificationBoard};
use shared_models::geo::{LatLng, DEFAULT_CENTER, RESOLVED_ZOOM};
use shared_models::messages;

use crate::models::{
    biased_query, CoordinateFields, LocationSnapshot, MapView, SearchOutcome, SuggestionPanel,
    COUNTRY_RESTRICTION, MIN_QUERY_CHARS,
};
use crate::services::providers::{Geocoder, PlacesProvider};

#[derive(Debug, Default)]
struct LocationState {
    map: Option<MapView>,
    fields: CoordinateFields,
    address: String,
    panel: SuggestionPanel,
}

/// Applies the marker/field/address synchronization rules of the clinic form.
///
/// State is locked only between network calls. Every search and selection
/// takes a ticket; a response whose ticket is no longer the latest is dropped.
/// Tickets are only issued and checked while `state` is held.
pub struct LocationResolver {
    places: Arc<dyn PlacesProvider>,
    geocoder: Arc<dyn Geocoder>,
    notifications: NotificationBoard,
    state: Mutex<LocationState>,
    latest_ticket: AtomicU64,
}

impl LocationResolver {
    pub fn new(
        places: Arc<dyn PlacesProvider>,
        geocoder: Arc<dyn Geocoder>,
        notifications: NotificationBoard,
    ) -> Self {
        Self {
            places,
            geocoder,
            notifications,
            state: Mutex::new(LocationState::default()),
            latest_ticket: AtomicU64::new(0),
        }
    }

    fn next_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    /// Builds the map on first use. Returns `true` only for that first call.
    pub async fn activate(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.map.is_some() {
            return false;
        }

        state.map = Some(MapView::default());
        info!("Map initialized at default center");
        true
    }

    pub async fn snapshot(&self) -> LocationSnapshot {
        let state = self.state.lock().await;
        LocationSnapshot {
            map: state.map,
            fields: state.fields.clone(),
            address: state.address.clone(),
            panel: state.panel.clone(),
        }
    }

    /// Marker drag finished at `position`.
    pub async fn marker_dragged(&self, position: LatLng) {
        let mut state = self.state.lock().await;
        let Some(map) = state.map.as_mut() else {
            debug!("Ignoring marker drag before map initialization");
            return;
        };

        map.marker = position;
        state.fields = CoordinateFields::from_position(position);
    }

    pub async fn map_clicked(&self, position: LatLng) {
        let mut state = self.state.lock().await;
        let Some(map) = state.map.as_mut() else {
            debug!("Ignoring map click before map initialization");
            return;
        };

        map.marker = position;
        state.fields = CoordinateFields::from_position(position);
    }

    /// The administrator typed into the coordinate fields. The marker only
    /// follows once both fields hold numbers.
    pub async fn coordinates_edited(&self, latitude: &str, longitude: &str) {
        let mut state = self.state.lock().await;
        if state.map.is_none() {
            debug!("Ignoring coordinate edit before map initialization");
            return;
        }

        state.fields = CoordinateFields {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        };

        if let (Some(position), Some(map)) = (state.fields.position(), state.map.as_mut()) {
            map.marker = position;
            map.center = position;
        }
    }

    /// Puts back an address the administrator typed without searching for it.
    pub async fn restore_address(&self, address: &str) {
        let mut state = self.state.lock().await;
        state.address = address.to_string();
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            let ticket = self.next_ticket();
            state.address = query.to_string();

            if query.trim().chars().count() < MIN_QUERY_CHARS {
                state.panel = SuggestionPanel::Hidden;
                return SearchOutcome::Skipped;
            }
            ticket
        };

        let result = self
            .places
            .suggest(&biased_query(query), COUNTRY_RESTRICTION)
            .await;

        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            debug!(ticket, "Discarding stale suggestions");
            return SearchOutcome::Stale;
        }

        match result {
            Ok(suggestions) if suggestions.is_empty() => {
                state.panel = SuggestionPanel::Empty;
            }
            Ok(suggestions) => {
                state.panel = SuggestionPanel::Results(suggestions);
            }
            Err(e) => {
                warn!("Address suggestions failed: {}", e);
                state.panel = SuggestionPanel::Hidden;
                drop(state);
                self.notifications
                    .notify(AlertKind::Error, messages::ADDRESS_SEARCH_FAILED)
                    .await;
            }
        }

        SearchOutcome::Applied
    }

    /// A suggestion was picked: fill the address, close the list, geocode and
    /// move the marker there. Fields and map stay untouched when geocoding
    /// finds nothing.
    #[instrument(skip(self))]
    pub async fn select(&self, description: &str) -> SearchOutcome {
        let ticket = {
            let mut state = self.state.lock().await;
            state.address = description.to_string();
            state.panel = SuggestionPanel::Hidden;
            self.next_ticket()
        };

        let result = self.geocoder.geocode(description).await;

        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            debug!(ticket, "Discarding stale geocode result");
            return SearchOutcome::Stale;
        }

        match result {
            Ok(Some(resolved)) => {
                let position = resolved.location;

                if let Some(map) = state.map.as_mut() {
                    map.marker = position;
                    map.center = position;
                    map.zoom = RESOLVED_ZOOM;
                }
                state.fields = CoordinateFields::from_position(position);
                info!(lat = position.lat, lng = position.lng, "Address resolved");
            }
            Ok(None) => {
                drop(state);
                self.notifications
                    .notify(AlertKind::Error, messages::ADDRESS_NOT_FOUND)
                    .await;
            }
            Err(e) => {
                drop(state);
                warn!("Geocoding failed: {}", e);
                self.notifications
                    .notify(AlertKind::Error, messages::ADDRESS_NOT_FOUND)
                    .await;
            }
        }

        SearchOutcome::Applied
    }

    /// Back to the default position after a clinic is saved. Pending searches
    /// are invalidated so they cannot reopen the suggestion list.
    pub async fn reset_to_default(&self) {
        let mut state = self.state.lock().await;
        self.next_ticket();

        if let Some(map) = state.map.as_mut() {
            map.marker = DEFAULT_CENTER;
            map.center = DEFAULT_CENTER;
        }
        state.fields = CoordinateFields::from_position(DEFAULT_CENTER);
        state.address.clear();
        state.panel = SuggestionPanel::Hidden;
    }
}
