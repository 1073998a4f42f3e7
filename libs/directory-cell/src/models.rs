use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::directory::{NewClinic, NewDoctor, NewSpecialty};
use shared_models::messages;

// ==============================================================================
// FORM INPUT
// ==============================================================================
//
// Field values arrive as the raw text the administrator typed. Coercion turns
// ids and coordinates into numbers and blank optional fields into `None`.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialty_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicForm {
    #[serde(default)]
    pub doctor_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub working_hours: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("specialty id is not a number")]
    InvalidSpecialty,

    #[error("doctor id is not a number")]
    InvalidDoctor,

    #[error("coordinates are not numbers")]
    InvalidCoordinates,
}

impl FormError {
    pub fn message(&self) -> &'static str {
        match self {
            FormError::InvalidSpecialty => messages::INVALID_SPECIALTY,
            FormError::InvalidDoctor => messages::INVALID_DOCTOR,
            FormError::InvalidCoordinates => messages::INVALID_COORDINATES,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_id(value: &str, err: FormError) -> Result<i64, FormError> {
    value.trim().parse::<i64>().map_err(|_| err)
}

fn parse_coordinate(value: &str) -> Result<f64, FormError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormError::InvalidCoordinates)
}

impl SpecialtyForm {
    pub fn to_request(&self) -> NewSpecialty {
        NewSpecialty {
            name: self.name.clone(),
        }
    }
}

impl DoctorForm {
    pub fn to_request(&self) -> Result<NewDoctor, FormError> {
        Ok(NewDoctor {
            name: self.name.clone(),
            specialty_id: parse_id(&self.specialty_id, FormError::InvalidSpecialty)?,
            phone: optional(&self.phone),
            email: optional(&self.email),
            bio: optional(&self.bio),
        })
    }
}

impl ClinicForm {
    pub fn to_request(&self) -> Result<NewClinic, FormError> {
        Ok(NewClinic {
            doctor_id: parse_id(&self.doctor_id, FormError::InvalidDoctor)?,
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: parse_coordinate(&self.latitude)?,
            longitude: parse_coordinate(&self.longitude)?,
            phone: optional(&self.phone),
            working_hours: optional(&self.working_hours),
        })
    }
}

// ==============================================================================
// OUTCOMES
// ==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Saved and the affected collections were re-fetched.
    Saved(String),
    /// Nothing changed; the message explains why.
    Failed(String),
}

impl FormOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FormOutcome::Saved(_))
    }

    pub fn message(&self) -> &str {
        match self {
            FormOutcome::Saved(msg) | FormOutcome::Failed(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The administrator declined; no request was sent.
    Cancelled,
    Deleted,
    Failed(String),
}

/// Interactive yes/no gate in front of destructive actions.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
