use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use directory_cell::{ClinicForm, DeleteOutcome, DoctorForm, FormOutcome, SpecialtyForm};
use location_cell::LocationSnapshot;
use notification_cell::{AlertArea, AlertKind, Notice};
use shared_models::error::AppError;
use shared_models::geo::LatLng;
use shared_models::messages;

use crate::page::{self, Feedback};
use crate::state::{AdminState, Tab};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Delete buttons post `confirmed=true` only after the browser prompt was accepted.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirmed: Option<String>,
}

impl DeleteForm {
    fn is_confirmed(&self) -> bool {
        matches!(self.confirmed.as_deref(), Some("true") | Some("on") | Some("1"))
    }
}

#[derive(Debug, Deserialize)]
pub struct PositionForm {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesForm {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    #[serde(default)]
    pub description: String,
}

/// Location widgets plus any notices raised while resolving an address.
#[derive(Debug, Serialize)]
pub struct MapStateResponse {
    pub location: LocationSnapshot,
    pub notices: Vec<Notice>,
}

fn back_to_dashboard() -> Response {
    Redirect::to("/").into_response()
}

async fn map_state(state: &AdminState) -> Json<MapStateResponse> {
    Json(MapStateResponse {
        location: state.location.snapshot().await,
        notices: state.notifications.take_notices().await,
    })
}

// ==============================================================================
// PAGE & SESSION
// ==============================================================================

pub async fn index(State(state): State<Arc<AdminState>>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    let feedback = Feedback::collect(&state.notifications).await;

    if !dashboard.session.is_logged_in() {
        return Html(page::login_page(&feedback));
    }

    let location = state.location.snapshot().await;
    Html(page::dashboard_page(
        &dashboard,
        &location,
        &feedback,
        &state.config.google_maps_api_key,
    ))
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    let api = state.directory.api();

    match dashboard.session.login(api, &form.username, &form.password).await {
        Ok(_) => {
            dashboard.store.load_all(api).await;
            state
                .notifications
                .show_alert(AlertArea::Login, AlertKind::Success, messages::LOGIN_SUCCESS)
                .await;
        }
        Err(e) => {
            state
                .notifications
                .show_alert(AlertArea::Login, AlertKind::Error, e.message())
                .await;
        }
    }

    back_to_dashboard()
}

pub async fn logout(State(state): State<Arc<AdminState>>) -> Result<Response, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard
        .session
        .logout()
        .map_err(|e| AppError::Storage(e.to_string()))?;
    state.notifications.clear_all().await;

    info!("Admin logged out");
    Ok(back_to_dashboard())
}

pub async fn switch_tab(
    State(state): State<Arc<AdminState>>,
    Path(tab): Path<String>,
) -> Result<Response, AppError> {
    let tab: Tab = tab.parse().map_err(AppError::NotFound)?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.active_tab = tab;
    drop(dashboard);

    if tab == Tab::Clinics && state.location.activate().await {
        debug!("Clinics tab opened for the first time");
    }

    Ok(back_to_dashboard())
}

pub async fn dismiss_dialog(State(state): State<Arc<AdminState>>) -> Response {
    state.notifications.acknowledge().await;
    back_to_dashboard()
}

// ==============================================================================
// DIRECTORY FORMS
// ==============================================================================

async fn report(state: &AdminState, area: AlertArea, outcome: &FormOutcome) {
    let kind = if outcome.is_saved() {
        AlertKind::Success
    } else {
        AlertKind::Error
    };
    state.notifications.show_alert(area, kind, outcome.message()).await;
}

pub async fn add_specialty(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<SpecialtyForm>,
) -> Response {
    let mut guard = state.dashboard.lock().await;
    let dashboard = &mut *guard;
    let Some(token) = dashboard.session.auth_token().map(str::to_string) else {
        return back_to_dashboard();
    };

    let outcome = state
        .directory
        .add_specialty(&mut dashboard.store, &token, &form)
        .await;

    dashboard.drafts.specialty = if outcome.is_saved() { SpecialtyForm::default() } else { form };
    report(&state, AlertArea::Specialty, &outcome).await;
    back_to_dashboard()
}

pub async fn add_doctor(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<DoctorForm>,
) -> Response {
    let mut guard = state.dashboard.lock().await;
    let dashboard = &mut *guard;
    let Some(token) = dashboard.session.auth_token().map(str::to_string) else {
        return back_to_dashboard();
    };

    let outcome = state
        .directory
        .add_doctor(&mut dashboard.store, &token, &form)
        .await;

    dashboard.drafts.doctor = if outcome.is_saved() { DoctorForm::default() } else { form };
    report(&state, AlertArea::Doctor, &outcome).await;
    back_to_dashboard()
}

pub async fn add_clinic(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<ClinicForm>,
) -> Response {
    let mut guard = state.dashboard.lock().await;
    let dashboard = &mut *guard;
    let Some(token) = dashboard.session.auth_token().map(str::to_string) else {
        return back_to_dashboard();
    };

    let outcome = state
        .directory
        .add_clinic(&mut dashboard.store, &token, &form)
        .await;

    if outcome.is_saved() {
        dashboard.drafts.clinic = ClinicForm::default();
        state.location.reset_to_default().await;
    } else {
        state
            .location
            .coordinates_edited(&form.latitude, &form.longitude)
            .await;
        state.location.restore_address(&form.address).await;
        dashboard.drafts.clinic = form;
    }

    report(&state, AlertArea::Clinic, &outcome).await;
    back_to_dashboard()
}

async fn report_delete(state: &AdminState, outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Cancelled => debug!("Delete cancelled"),
        DeleteOutcome::Deleted => {}
        DeleteOutcome::Failed(message) => state.notifications.block(message).await,
    }
}

pub async fn delete_doctor(
    State(state): State<Arc<AdminState>>,
    Path(doctor_id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let mut guard = state.dashboard.lock().await;
    let dashboard = &mut *guard;
    let Some(token) = dashboard.session.auth_token().map(str::to_string) else {
        return back_to_dashboard();
    };

    let confirmed = form.is_confirmed();
    let outcome = state
        .directory
        .delete_doctor(&mut dashboard.store, &token, doctor_id, &|_: &str| confirmed)
        .await;

    report_delete(&state, outcome).await;
    back_to_dashboard()
}

pub async fn delete_clinic(
    State(state): State<Arc<AdminState>>,
    Path(clinic_id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let mut guard = state.dashboard.lock().await;
    let dashboard = &mut *guard;
    let Some(token) = dashboard.session.auth_token().map(str::to_string) else {
        return back_to_dashboard();
    };

    let confirmed = form.is_confirmed();
    let outcome = state
        .directory
        .delete_clinic(&mut dashboard.store, &token, clinic_id, &|_: &str| confirmed)
        .await;

    report_delete(&state, outcome).await;
    back_to_dashboard()
}

// ==============================================================================
// MAP & ADDRESS SEARCH
// ==============================================================================
//
// These never take the dashboard lock, so a slow mapping call does not block
// the rest of the dashboard.

pub async fn get_map_state(State(state): State<Arc<AdminState>>) -> Json<MapStateResponse> {
    map_state(&state).await
}

pub async fn marker_dragged(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<PositionForm>,
) -> Json<MapStateResponse> {
    state.location.marker_dragged(LatLng::new(form.lat, form.lng)).await;
    map_state(&state).await
}

pub async fn map_clicked(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<PositionForm>,
) -> Json<MapStateResponse> {
    state.location.map_clicked(LatLng::new(form.lat, form.lng)).await;
    map_state(&state).await
}

pub async fn coordinates_edited(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<CoordinatesForm>,
) -> Json<MapStateResponse> {
    state
        .location
        .coordinates_edited(&form.latitude, &form.longitude)
        .await;
    map_state(&state).await
}

pub async fn search_address(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<SuggestionQuery>,
) -> Json<MapStateResponse> {
    state.location.search(&query.q).await;
    map_state(&state).await
}

pub async fn select_suggestion(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<SelectForm>,
) -> Response {
    state.location.select(&form.description).await;
    back_to_dashboard()
}
