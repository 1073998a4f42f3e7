use std::sync::Arc;

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AdminState;

const ADMIN_SCRIPT: &str = include_str!("../assets/admin.js");

async fn admin_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], ADMIN_SCRIPT)
}

pub fn create_router(state: Arc<AdminState>) -> Router {
    // Session & page
    let page_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/tabs/{tab}", post(handlers::switch_tab))
        .route("/dialog/dismiss", post(handlers::dismiss_dialog))
        .route("/static/admin.js", get(admin_script));

    // Directory forms
    let directory_routes = Router::new()
        .route("/specialties", post(handlers::add_specialty))
        .route("/doctors", post(handlers::add_doctor))
        .route("/doctors/{doctor_id}/delete", post(handlers::delete_doctor))
        .route("/clinics", post(handlers::add_clinic))
        .route("/clinics/{clinic_id}/delete", post(handlers::delete_clinic));

    // Map widget & address search
    let map_routes = Router::new()
        .route("/state", get(handlers::get_map_state))
        .route("/marker", post(handlers::marker_dragged))
        .route("/click", post(handlers::map_clicked))
        .route("/coordinates", post(handlers::coordinates_edited))
        .route("/suggestions", get(handlers::search_address))
        .route("/suggestions/select", post(handlers::select_suggestion));

    Router::new()
        .merge(page_routes)
        .merge(directory_routes)
        .nest("/map", map_routes)
        .with_state(state)
}
