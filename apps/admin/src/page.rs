//! Full-page HTML for the login view and the dashboard.
//!
//! The browser script only forwards events; every piece of state shown here
//! comes from the server-side dashboard, the location resolver and the
//! notification board.

use directory_cell::render;
use location_cell::{LocationSnapshot, SuggestionPanel};
use notification_cell::{Alert, AlertArea, Notice, NotificationBoard};
use shared_models::geo::DEFAULT_CENTER;
use shared_models::messages;
use shared_utils::escape_html;

use crate::state::{Dashboard, Tab};

/// Feedback visible at render time. Expired entries are already gone.
pub struct Feedback {
    alerts: Vec<(AlertArea, Alert)>,
    notices: Vec<Notice>,
    dialog: Option<String>,
}

impl Feedback {
    pub async fn collect(board: &NotificationBoard) -> Self {
        let mut alerts = Vec::new();
        for area in [
            AlertArea::Login,
            AlertArea::Specialty,
            AlertArea::Doctor,
            AlertArea::Clinic,
        ] {
            if let Some(alert) = board.alert(area).await {
                alerts.push((area, alert));
            }
        }

        Self {
            alerts,
            notices: board.take_notices().await,
            dialog: board.dialog().await,
        }
    }

    fn alert_slot(&self, area: AlertArea) -> String {
        match self.alerts.iter().find(|(a, _)| *a == area) {
            Some((_, alert)) => format!(
                "<div id=\"{}\" class=\"alert {}\" data-expires=\"{}\">{}</div>",
                area.element_id(),
                alert.kind.css_class(),
                alert.expires_at.to_rfc3339(),
                escape_html(&alert.message)
            ),
            None => format!("<div id=\"{}\" class=\"alert\" hidden></div>", area.element_id()),
        }
    }

    fn overlays(&self) -> String {
        let mut html = String::from("<div id=\"notices\">");
        for notice in &self.notices {
            html.push_str(&format!(
                "<div class=\"notice {}\" data-expires=\"{}\">{}</div>",
                notice.kind.css_class(),
                notice.expires_at.to_rfc3339(),
                escape_html(&notice.message)
            ));
        }
        html.push_str("</div>");

        if let Some(message) = &self.dialog {
            html.push_str(&format!(
                "<div id=\"errorDialog\" class=\"dialog\" role=\"alertdialog\"><p>{}</p>\
<form method=\"post\" action=\"/dialog/dismiss\"><button type=\"submit\">OK</button></form></div>",
                escape_html(message)
            ));
        }
        html
    }
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>Clinic Admin</title></head>\
<body>{}<script src=\"/static/admin.js\"></script></body></html>",
        body
    )
}

pub fn login_page(feedback: &Feedback) -> String {
    document(&format!(
        "<section id=\"loginSection\"><h1>Admin Login</h1>{}\
<form id=\"loginForm\" method=\"post\" action=\"/login\">\
<input name=\"username\" placeholder=\"Username\" required>\
<input name=\"password\" type=\"password\" placeholder=\"Password\" required>\
<button type=\"submit\">Login</button></form></section>{}",
        feedback.alert_slot(AlertArea::Login),
        feedback.overlays()
    ))
}

fn text_input(name: &str, value: &str, placeholder: &str, required: bool) -> String {
    format!(
        "<input name=\"{}\" value=\"{}\" placeholder=\"{}\"{}>",
        name,
        escape_html(value),
        placeholder,
        if required { " required" } else { "" }
    )
}

fn tab_bar(active: Tab) -> String {
    let mut html = String::from("<nav class=\"tabs\">");
    for tab in Tab::ALL {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/tabs/{}\"><button class=\"tab{}\" type=\"submit\">{}</button></form>",
            tab.slug(),
            if tab == active { " active" } else { "" },
            tab.label()
        ));
    }
    html.push_str("</nav>");
    html
}

fn panel(tab: Tab, active: Tab, content: String) -> String {
    format!(
        "<section id=\"{}Tab\" class=\"tab-content\"{}>{}</section>",
        tab.slug(),
        if tab == active { "" } else { " hidden" },
        content
    )
}

fn suggestion_panel(panel: &SuggestionPanel) -> String {
    match panel {
        SuggestionPanel::Hidden => "<div id=\"addressSuggestions\" hidden></div>".to_string(),
        SuggestionPanel::Empty => format!(
            "<div id=\"addressSuggestions\"><div class=\"suggestion empty\">{}</div></div>",
            messages::NO_SUGGESTIONS
        ),
        SuggestionPanel::Results(suggestions) => {
            let mut html = String::from("<div id=\"addressSuggestions\">");
            for suggestion in suggestions {
                let description = escape_html(&suggestion.description);
                html.push_str(&format!(
                    "<form class=\"suggestion\" method=\"post\" action=\"/map/suggestions/select\">\
<input type=\"hidden\" name=\"description\" value=\"{}\"><button type=\"submit\">{}</button></form>",
                    description, description
                ));
            }
            html.push_str("</div>");
            html
        }
    }
}

fn map_widget(location: &LocationSnapshot, maps_key: &str) -> String {
    match &location.map {
        Some(map) => format!(
            "<div id=\"map\" data-center-lat=\"{}\" data-center-lng=\"{}\" \
data-marker-lat=\"{}\" data-marker-lng=\"{}\" data-zoom=\"{}\"></div>\
<script async src=\"https://maps.googleapis.com/maps/api/js?key={}&callback=initClinicMap\"></script>",
            map.center.lat,
            map.center.lng,
            map.marker.lat,
            map.marker.lng,
            map.zoom,
            escape_html(maps_key)
        ),
        None => "<div id=\"map\"></div>".to_string(),
    }
}

fn specialties_panel(dashboard: &Dashboard, feedback: &Feedback) -> String {
    let store = &dashboard.store;
    format!(
        "{}<form id=\"specialtyForm\" method=\"post\" action=\"/specialties\">{}\
<button type=\"submit\">Add specialty</button></form>\
<table><thead><tr><th>#</th><th>Name</th><th>Doctors</th></tr></thead>\
<tbody id=\"specialtiesTable\">{}</tbody></table>",
        feedback.alert_slot(AlertArea::Specialty),
        text_input("name", &dashboard.drafts.specialty.name, "Specialty name", true),
        render::specialties_table(store.specialties(), store.doctors())
    )
}

fn doctors_panel(dashboard: &Dashboard, feedback: &Feedback) -> String {
    let store = &dashboard.store;
    let draft = &dashboard.drafts.doctor;
    format!(
        "{}<form id=\"doctorForm\" method=\"post\" action=\"/doctors\">{}\
<select name=\"specialty_id\" required>{}</select>{}{}\
<textarea name=\"bio\" placeholder=\"Bio\">{}</textarea>\
<button type=\"submit\">Add doctor</button></form>\
<table><thead><tr><th>Name</th><th>Specialty</th><th>Phone</th><th>Email</th><th></th></tr></thead>\
<tbody id=\"doctorsTable\">{}</tbody></table>",
        feedback.alert_slot(AlertArea::Doctor),
        text_input("name", &draft.name, "Doctor name", true),
        render::specialty_options(store.specialties(), &draft.specialty_id),
        text_input("phone", &draft.phone, "Phone", false),
        text_input("email", &draft.email, "Email", false),
        escape_html(&draft.bio),
        render::doctors_table(store.doctors())
    )
}

fn clinics_panel(
    dashboard: &Dashboard,
    location: &LocationSnapshot,
    feedback: &Feedback,
    maps_key: &str,
) -> String {
    let store = &dashboard.store;
    let draft = &dashboard.drafts.clinic;

    // Untouched coordinate fields show the default marker position.
    let fields = &location.fields;
    let (latitude, longitude) = if fields.latitude.is_empty() && fields.longitude.is_empty() {
        (DEFAULT_CENTER.lat.to_string(), DEFAULT_CENTER.lng.to_string())
    } else {
        (fields.latitude.clone(), fields.longitude.clone())
    };

    format!(
        "{}<form id=\"clinicForm\" method=\"post\" action=\"/clinics\">\
<select name=\"doctor_id\" required>{}</select>{}\
<input id=\"clinicAddress\" name=\"address\" value=\"{}\" placeholder=\"Address\" autocomplete=\"off\" required>{}\
{}<input id=\"clinicLat\" name=\"latitude\" value=\"{}\" required>\
<input id=\"clinicLng\" name=\"longitude\" value=\"{}\" required>{}{}\
<button type=\"submit\">Add clinic</button></form>\
<table><thead><tr><th>Name</th><th>Doctor</th><th>Address</th><th>Phone</th><th>Hours</th><th></th></tr></thead>\
<tbody id=\"clinicsTable\">{}</tbody></table>",
        feedback.alert_slot(AlertArea::Clinic),
        render::doctor_options(store.doctors(), &draft.doctor_id),
        text_input("name", &draft.name, "Clinic name", true),
        escape_html(&location.address),
        suggestion_panel(&location.panel),
        map_widget(location, maps_key),
        escape_html(&latitude),
        escape_html(&longitude),
        text_input("phone", &draft.phone, "Phone", false),
        text_input("working_hours", &draft.working_hours, "Working hours", false),
        render::clinics_table(store.clinics())
    )
}

pub fn dashboard_page(
    dashboard: &Dashboard,
    location: &LocationSnapshot,
    feedback: &Feedback,
    maps_key: &str,
) -> String {
    let username = dashboard
        .session
        .current_admin()
        .and_then(|admin| admin.username.as_deref())
        .map(|name| format!("<span id=\"adminName\">{}</span>", escape_html(name)))
        .unwrap_or_default();

    let active = dashboard.active_tab;

    document(&format!(
        "<header id=\"dashboard\"><h1>Clinic Admin</h1>{}\
<form method=\"post\" action=\"/logout\"><button type=\"submit\">Logout</button></form></header>\
{}<div class=\"stats\">{}</div>{}{}{}{}{}",
        username,
        feedback.alert_slot(AlertArea::Login),
        render::stats_cards(&dashboard.store.stats()),
        tab_bar(active),
        panel(Tab::Specialties, active, specialties_panel(dashboard, feedback)),
        panel(Tab::Doctors, active, doctors_panel(dashboard, feedback)),
        panel(Tab::Clinics, active, clinics_panel(dashboard, location, feedback, maps_key)),
        feedback.overlays()
    ))
}
