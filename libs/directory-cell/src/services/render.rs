//! HTML fragments for the dashboard tables, dropdowns and stat cards.
//!
//! Everything here is a pure function of the collections passed in.

use shared_models::directory::{Clinic, Doctor, Specialty, Stats};
use shared_models::messages;
use shared_utils::escape_html;

/// Number of doctors practising the given specialty.
pub fn doctor_count(specialty_id: i64, doctors: &[Doctor]) -> usize {
    doctors
        .iter()
        .filter(|d| d.specialty_id() == specialty_id)
        .count()
}

fn empty_row(colspan: usize, text: &str) -> String {
    format!(
        "<tr class=\"empty\"><td colspan=\"{}\" style=\"text-align: center;\">{}</td></tr>",
        colspan,
        escape_html(text)
    )
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => "-".to_string(),
    }
}

fn delete_button(action: &str, prompt: &str) -> String {
    format!(
        "<form class=\"actions\" method=\"post\" action=\"{}\" data-confirm=\"{}\">\
<input type=\"hidden\" name=\"confirmed\" value=\"false\">\
<button class=\"btn btn-danger btn-sm\" type=\"submit\">Delete</button></form>",
        action,
        escape_html(prompt)
    )
}

pub fn specialties_table(specialties: &[Specialty], doctors: &[Doctor]) -> String {
    if specialties.is_empty() {
        return empty_row(3, messages::NO_SPECIALTIES);
    }

    specialties
        .iter()
        .enumerate()
        .map(|(index, specialty)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                index + 1,
                escape_html(&specialty.name),
                doctor_count(specialty.id, doctors)
            )
        })
        .collect()
}

pub fn doctors_table(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return empty_row(5, messages::NO_DOCTORS);
    }

    doctors
        .iter()
        .map(|doctor| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&doctor.name),
                escape_html(&doctor.specialty.name),
                or_dash(doctor.phone.as_deref()),
                or_dash(doctor.email.as_deref()),
                delete_button(
                    &format!("/doctors/{}/delete", doctor.id),
                    messages::DOCTOR_DELETE_CONFIRM
                )
            )
        })
        .collect()
}

pub fn clinics_table(clinics: &[Clinic]) -> String {
    if clinics.is_empty() {
        return empty_row(6, messages::NO_CLINICS);
    }

    clinics
        .iter()
        .map(|clinic| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&clinic.name),
                escape_html(&clinic.doctor.name),
                escape_html(&clinic.address),
                or_dash(clinic.phone.as_deref()),
                or_dash(clinic.working_hours.as_deref()),
                delete_button(
                    &format!("/clinics/{}/delete", clinic.id),
                    messages::CLINIC_DELETE_CONFIRM
                )
            )
        })
        .collect()
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

/// Options for the doctor form's specialty select. `selected` keeps a
/// previously chosen value across a failed submit.
pub fn specialty_options(specialties: &[Specialty], selected: &str) -> String {
    let mut html = option("", messages::SELECT_SPECIALTY, selected.is_empty());
    for specialty in specialties {
        let id = specialty.id.to_string();
        html.push_str(&option(&id, &specialty.name, id == selected));
    }
    html
}

pub fn doctor_options(doctors: &[Doctor], selected: &str) -> String {
    let mut html = option("", messages::SELECT_DOCTOR, selected.is_empty());
    for doctor in doctors {
        let id = doctor.id.to_string();
        let label = format!("{} - {}", doctor.name, doctor.specialty.name);
        html.push_str(&option(&id, &label, id == selected));
    }
    html
}

pub fn stats_cards(stats: &Stats) -> String {
    format!(
        "<div class=\"stat\"><span id=\"totalDoctors\">{}</span></div>\
<div class=\"stat\"><span id=\"totalClinics\">{}</span></div>\
<div class=\"stat\"><span id=\"totalSpecialties\">{}</span></div>",
        stats.doctors, stats.clinics, stats.specialties
    )
}
