use tracing::{debug, error, instrument};

use shared_api::ClinicApiClient;
use shared_models::directory::{Clinic, Doctor, Specialty, Stats};

/// In-memory mirror of the three directory collections.
///
/// Each collection is a full snapshot of the last successful fetch. A failed
/// fetch leaves the previous snapshot in place.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
    clinics: Vec<Clinic>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn stats(&self) -> Stats {
        Stats {
            doctors: self.doctors.len(),
            clinics: self.clinics.len(),
            specialties: self.specialties.len(),
        }
    }

    /// Fetches specialties, doctors and clinics one after another. A failure
    /// in one does not stop the others.
    #[instrument(skip_all)]
    pub async fn load_all(&mut self, api: &ClinicApiClient) {
        self.refresh_specialties(api).await;
        self.refresh_doctors(api).await;
        self.refresh_clinics(api).await;
        debug!(stats = ?self.stats(), "Directory loaded");
    }

    pub async fn refresh_specialties(&mut self, api: &ClinicApiClient) -> bool {
        match api.list_specialties().await {
            Ok(specialties) => {
                self.specialties = specialties;
                true
            }
            Err(e) => {
                error!("Error loading specialties: {}", e);
                false
            }
        }
    }

    pub async fn refresh_doctors(&mut self, api: &ClinicApiClient) -> bool {
        match api.list_doctors().await {
            Ok(doctors) => {
                self.doctors = doctors;
                true
            }
            Err(e) => {
                error!("Error loading doctors: {}", e);
                false
            }
        }
    }

    pub async fn refresh_clinics(&mut self, api: &ClinicApiClient) -> bool {
        match api.list_clinics().await {
            Ok(clinics) => {
                self.clinics = clinics;
                true
            }
            Err(e) => {
                error!("Error loading clinics: {}", e);
                false
            }
        }
    }
}
