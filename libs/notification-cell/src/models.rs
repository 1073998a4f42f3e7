// =====================================================================================
// NOTIFICATION CELL MODELS
// =====================================================================================

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How long a form alert stays visible.
pub const ALERT_DISPLAY_SECS: i64 = 5;
/// How long an address-resolution notice stays visible.
pub const NOTICE_DISPLAY_SECS: i64 = 3;

/// The per-form alert slots of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertArea {
    Login,
    Specialty,
    Doctor,
    Clinic,
}

impl AlertArea {
    pub fn element_id(&self) -> &'static str {
        match self {
            AlertArea::Login => "loginAlert",
            AlertArea::Specialty => "specialtyAlert",
            AlertArea::Doctor => "doctorAlert",
            AlertArea::Clinic => "clinicAlert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at,
            expires_at: shown_at + Duration::seconds(ALERT_DISPLAY_SECS),
        }
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Self-dismissing overlay message, independent of the form alert slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: AlertKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: AlertKind, message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            expires_at: shown_at + Duration::seconds(NOTICE_DISPLAY_SECS),
        }
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
