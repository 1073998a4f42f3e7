use tracing::{info, instrument, warn};

use shared_api::ClinicApiClient;
use shared_models::messages;

use crate::models::{
    ClinicForm, Confirmation, DeleteOutcome, DoctorForm, FormOutcome, SpecialtyForm,
};
use crate::services::store::DataStore;

/// Form controllers for the three directory entities.
///
/// Every successful mutation is followed by a full re-fetch of the affected
/// collections; the store is never edited speculatively.
pub struct DirectoryService {
    api: ClinicApiClient,
}

impl DirectoryService {
    pub fn new(api: ClinicApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ClinicApiClient {
        &self.api
    }

    #[instrument(skip_all)]
    pub async fn add_specialty(
        &self,
        store: &mut DataStore,
        auth_token: &str,
        form: &SpecialtyForm,
    ) -> FormOutcome {
        match self.api.create_specialty(&form.to_request(), auth_token).await {
            Ok(()) => {
                info!("Specialty created: {}", form.name);
                store.refresh_specialties(&self.api).await;
                FormOutcome::Saved(messages::SPECIALTY_ADDED.to_string())
            }
            Err(e) => {
                warn!("Specialty creation failed: {}", e);
                FormOutcome::Failed(e.form_message(messages::SPECIALTY_FAILED))
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn add_doctor(
        &self,
        store: &mut DataStore,
        auth_token: &str,
        form: &DoctorForm,
    ) -> FormOutcome {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => return FormOutcome::Failed(e.message().to_string()),
        };

        match self.api.create_doctor(&request, auth_token).await {
            Ok(()) => {
                info!("Doctor created: {}", request.name);
                store.refresh_doctors(&self.api).await;
                FormOutcome::Saved(messages::DOCTOR_ADDED.to_string())
            }
            Err(e) => {
                warn!("Doctor creation failed: {}", e);
                FormOutcome::Failed(e.form_message(messages::DOCTOR_FAILED))
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn add_clinic(
        &self,
        store: &mut DataStore,
        auth_token: &str,
        form: &ClinicForm,
    ) -> FormOutcome {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => return FormOutcome::Failed(e.message().to_string()),
        };

        match self.api.create_clinic(&request, auth_token).await {
            Ok(()) => {
                info!("Clinic created: {}", request.name);
                store.refresh_clinics(&self.api).await;
                FormOutcome::Saved(messages::CLINIC_ADDED.to_string())
            }
            Err(e) => {
                warn!("Clinic creation failed: {}", e);
                FormOutcome::Failed(e.form_message(messages::CLINIC_FAILED))
            }
        }
    }

    /// Deleting a doctor also removes their clinics server-side, so both
    /// collections are re-fetched.
    #[instrument(skip(self, store, auth_token, confirmation))]
    pub async fn delete_doctor(
        &self,
        store: &mut DataStore,
        auth_token: &str,
        doctor_id: i64,
        confirmation: &impl Confirmation,
    ) -> DeleteOutcome {
        if !confirmation.confirm(messages::DOCTOR_DELETE_CONFIRM) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_doctor(doctor_id, auth_token).await {
            Ok(()) => {
                info!("Doctor {} deleted", doctor_id);
                store.refresh_doctors(&self.api).await;
                store.refresh_clinics(&self.api).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!("Doctor deletion failed: {}", e);
                let message = if e.is_connectivity() {
                    messages::CONNECTIVITY
                } else {
                    messages::DOCTOR_DELETE_FAILED
                };
                DeleteOutcome::Failed(message.to_string())
            }
        }
    }

    #[instrument(skip(self, store, auth_token, confirmation))]
    pub async fn delete_clinic(
        &self,
        store: &mut DataStore,
        auth_token: &str,
        clinic_id: i64,
        confirmation: &impl Confirmation,
    ) -> DeleteOutcome {
        if !confirmation.confirm(messages::CLINIC_DELETE_CONFIRM) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_clinic(clinic_id, auth_token).await {
            Ok(()) => {
                info!("Clinic {} deleted", clinic_id);
                store.refresh_clinics(&self.api).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!("Clinic deletion failed: {}", e);
                let message = if e.is_connectivity() {
                    messages::CONNECTIVITY
                } else {
                    messages::CLINIC_DELETE_FAILED
                };
                DeleteOutcome::Failed(message.to_string())
            }
        }
    }
}
