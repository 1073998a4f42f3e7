// =====================================================================================
// NOTIFICATION BOARD SERVICE
// =====================================================================================

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{Alert, AlertArea, AlertKind, Notice};

/// Holds everything the dashboard currently shows as feedback: one alert per
/// form area, a stack of overlay notices and at most one blocking dialog.
///
/// Expired alerts and notices are dropped lazily whenever they are read.
#[derive(Clone, Default)]
pub struct NotificationBoard {
    alerts: Arc<RwLock<HashMap<AlertArea, Alert>>>,
    notices: Arc<RwLock<Vec<Notice>>>,
    dialog: Arc<RwLock<Option<String>>>,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever alert the area was showing.
    pub async fn show_alert(&self, area: AlertArea, kind: AlertKind, message: impl Into<String>) {
        self.show_alert_at(area, kind, message, Utc::now()).await;
    }

    pub async fn show_alert_at(
        &self,
        area: AlertArea,
        kind: AlertKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let alert = Alert::new(kind, message, now);
        debug!(area = ?area, kind = ?kind, "Showing alert: {}", alert.message);

        let mut alerts = self.alerts.write().await;
        alerts.insert(area, alert);
    }

    pub async fn alert(&self, area: AlertArea) -> Option<Alert> {
        self.alert_at(area, Utc::now()).await
    }

    pub async fn alert_at(&self, area: AlertArea, now: DateTime<Utc>) -> Option<Alert> {
        let mut alerts = self.alerts.write().await;
        match alerts.get(&area) {
            Some(alert) if alert.is_visible_at(now) => Some(alert.clone()),
            Some(_) => {
                alerts.remove(&area);
                None
            }
            None => None,
        }
    }

    pub async fn notify(&self, kind: AlertKind, message: impl Into<String>) -> Uuid {
        self.notify_at(kind, message, Utc::now()).await
    }

    pub async fn notify_at(
        &self,
        kind: AlertKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Uuid {
        let notice = Notice::new(kind, message, now);
        let id = notice.id;
        debug!(notice_id = %id, "Showing notice: {}", notice.message);

        let mut notices = self.notices.write().await;
        notices.push(notice);
        id
    }

    /// Hands pending notices to the page once. The browser removes each one
    /// when its `expires_at` passes, so a delivered notice is never resent.
    pub async fn take_notices(&self) -> Vec<Notice> {
        self.take_notices_at(Utc::now()).await
    }

    pub async fn take_notices_at(&self, now: DateTime<Utc>) -> Vec<Notice> {
        let mut notices = self.notices.write().await;
        notices.retain(|n| n.is_visible_at(now));
        std::mem::take(&mut *notices)
    }

    /// Raises an error that stays up until the administrator dismisses it.
    pub async fn block(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("Blocking error shown: {}", message);

        let mut dialog = self.dialog.write().await;
        *dialog = Some(message);
    }

    pub async fn dialog(&self) -> Option<String> {
        self.dialog.read().await.clone()
    }

    pub async fn acknowledge(&self) -> bool {
        let mut dialog = self.dialog.write().await;
        dialog.take().is_some()
    }

    pub async fn clear_all(&self) {
        self.alerts.write().await.clear();
        self.notices.write().await.clear();
        self.dialog.write().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_alert_replaces_previous_in_same_area() {
        let board = NotificationBoard::new();
        let now = Utc::now();

        board.show_alert_at(AlertArea::Doctor, AlertKind::Error, "first", now).await;
        board.show_alert_at(AlertArea::Doctor, AlertKind::Success, "second", now).await;
        board.show_alert_at(AlertArea::Clinic, AlertKind::Error, "other", now).await;

        let alert = board.alert_at(AlertArea::Doctor, now).await.unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(board.alert_at(AlertArea::Clinic, now).await.unwrap().message, "other");
        assert!(board.alert_at(AlertArea::Login, now).await.is_none());
    }

    #[tokio::test]
    async fn test_alert_expires_after_five_seconds() {
        let board = NotificationBoard::new();
        let now = Utc::now();

        board.show_alert_at(AlertArea::Login, AlertKind::Error, "Login failed", now).await;

        assert!(board.alert_at(AlertArea::Login, now + Duration::seconds(4)).await.is_some());
        assert!(board.alert_at(AlertArea::Login, now + Duration::seconds(5)).await.is_none());
        // Gone for good once expired.
        assert!(board.alert_at(AlertArea::Login, now).await.is_none());
    }

    #[tokio::test]
    async fn test_newer_alert_restarts_timer() {
        let board = NotificationBoard::new();
        let now = Utc::now();

        board.show_alert_at(AlertArea::Specialty, AlertKind::Error, "old", now).await;
        board
            .show_alert_at(AlertArea::Specialty, AlertKind::Success, "new", now + Duration::seconds(4))
            .await;

        let alert = board.alert_at(AlertArea::Specialty, now + Duration::seconds(6)).await;
        assert_eq!(alert.unwrap().message, "new");
    }

    #[tokio::test]
    async fn test_expired_notices_are_never_delivered() {
        let board = NotificationBoard::new();
        let now = Utc::now();

        board.notify_at(AlertKind::Error, "not found", now).await;
        board.notify_at(AlertKind::Error, "later", now + Duration::seconds(2)).await;

        let delivered = board.take_notices_at(now + Duration::seconds(3)).await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].message, "later");
        assert_eq!(delivered[0].expires_at, now + Duration::seconds(5));
    }

    #[tokio::test]
    async fn test_notice_is_delivered_once() {
        let board = NotificationBoard::new();
        let now = Utc::now();

        let id = board.notify_at(AlertKind::Error, "not found", now).await;

        let first = board.take_notices_at(now).await;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, id);
        assert!(board.take_notices_at(now).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_drops_every_kind() {
        let board = NotificationBoard::new();

        board.show_alert(AlertArea::Doctor, AlertKind::Success, "saved").await;
        board.notify(AlertKind::Error, "not found").await;
        board.block("Failed to delete clinic").await;

        board.clear_all().await;

        assert!(board.alert(AlertArea::Doctor).await.is_none());
        assert!(board.take_notices().await.is_empty());
        assert!(board.dialog().await.is_none());
    }

    #[tokio::test]
    async fn test_dialog_stays_until_acknowledged() {
        let board = NotificationBoard::new();

        assert!(!board.acknowledge().await);
        board.block("Failed to delete doctor").await;
        assert_eq!(board.dialog().await.as_deref(), Some("Failed to delete doctor"));
        assert!(board.acknowledge().await);
        assert!(board.dialog().await.is_none());
    }
}
