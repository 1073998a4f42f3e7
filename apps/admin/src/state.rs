use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use directory_cell::{ClinicForm, DataStore, DirectoryService, DoctorForm, SpecialtyForm};
use location_cell::{GoogleMapsClient, LocationResolver};
use notification_cell::NotificationBoard;
use session_cell::{SessionManager, SessionStorage};
use shared_api::ClinicApiClient;
use shared_config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Specialties,
    Doctors,
    Clinics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Specialties, Tab::Doctors, Tab::Clinics];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Specialties => "specialties",
            Tab::Doctors => "doctors",
            Tab::Clinics => "clinics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Specialties => "Specialties",
            Tab::Doctors => "Doctors",
            Tab::Clinics => "Clinics",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "specialties" => Ok(Tab::Specialties),
            "doctors" => Ok(Tab::Doctors),
            "clinics" => Ok(Tab::Clinics),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Form input kept between requests so a failed submit does not lose it.
#[derive(Debug, Clone, Default)]
pub struct Drafts {
    pub specialty: SpecialtyForm,
    pub doctor: DoctorForm,
    pub clinic: ClinicForm,
}

/// Everything one administrator's dashboard shows, mutated one command at a time.
pub struct Dashboard {
    pub session: SessionManager,
    pub store: DataStore,
    pub drafts: Drafts,
    pub active_tab: Tab,
}

pub struct AdminState {
    pub config: AppConfig,
    pub directory: DirectoryService,
    pub location: LocationResolver,
    pub notifications: NotificationBoard,
    pub dashboard: Mutex<Dashboard>,
}

impl AdminState {
    pub fn new(config: AppConfig, storage: Arc<dyn SessionStorage>) -> Self {
        let api = ClinicApiClient::new(&config);
        let maps = Arc::new(GoogleMapsClient::new(&config));
        let notifications = NotificationBoard::new();

        let location = LocationResolver::new(maps.clone(), maps, notifications.clone());

        let dashboard = Dashboard {
            session: SessionManager::restore(storage),
            store: DataStore::new(),
            drafts: Drafts::default(),
            active_tab: Tab::default(),
        };

        Self {
            config,
            directory: DirectoryService::new(api),
            location,
            notifications,
            dashboard: Mutex::new(dashboard),
        }
    }

    /// Loads the directory when a persisted session was restored.
    pub async fn bootstrap(&self) {
        let mut dashboard = self.dashboard.lock().await;
        if dashboard.session.is_logged_in() {
            info!("Restored session, loading directory");
            dashboard.store.load_all(self.directory.api()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.slug().parse::<Tab>(), Ok(tab));
        }
        assert!("settings".parse::<Tab>().is_err());
    }
}
