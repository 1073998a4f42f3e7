//! User-facing text shown by the dashboard.

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_CONNECTIVITY: &str =
    "Could not connect to the server. Make sure the backend is running";

pub const CONNECTIVITY: &str = "Could not connect to the server";

pub const SPECIALTY_ADDED: &str = "Specialty added successfully!";
pub const SPECIALTY_FAILED: &str = "Failed to add specialty";
pub const DOCTOR_ADDED: &str = "Doctor added successfully!";
pub const DOCTOR_FAILED: &str = "Failed to add doctor";
pub const CLINIC_ADDED: &str = "Clinic added successfully!";
pub const CLINIC_FAILED: &str = "Failed to add clinic";

pub const DOCTOR_DELETE_CONFIRM: &str =
    "Are you sure you want to delete this doctor? All of their clinics will be deleted too.";
pub const DOCTOR_DELETE_FAILED: &str = "Failed to delete doctor";
pub const CLINIC_DELETE_CONFIRM: &str = "Are you sure you want to delete this clinic?";
pub const CLINIC_DELETE_FAILED: &str = "Failed to delete clinic";

pub const NO_SPECIALTIES: &str = "No specialties";
pub const NO_DOCTORS: &str = "No doctors";
pub const NO_CLINICS: &str = "No clinics";
pub const SELECT_SPECIALTY: &str = "Select specialty";
pub const SELECT_DOCTOR: &str = "Select doctor";

pub const INVALID_SPECIALTY: &str = "Please choose a specialty";
pub const INVALID_DOCTOR: &str = "Please choose a doctor";
pub const INVALID_COORDINATES: &str = "Please pick the clinic location on the map";

pub const NO_SUGGESTIONS: &str = "No results";
pub const ADDRESS_NOT_FOUND: &str = "Could not find this address on the map";
pub const ADDRESS_SEARCH_FAILED: &str = "Address search is unavailable right now";
