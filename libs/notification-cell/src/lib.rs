// =====================================================================================
// NOTIFICATION CELL - TRANSIENT ALERTS, OVERLAY NOTICES, BLOCKING DIALOGS
// =====================================================================================

pub mod models;
pub mod services;

pub use models::{Alert, AlertArea, AlertKind, Notice};
pub use services::NotificationBoard;
