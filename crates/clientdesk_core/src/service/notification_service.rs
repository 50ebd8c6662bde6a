//! Notification use-case service.
//!
//! # Responsibility
//! - CRUD over the notification store plus read-state helpers.
//! - Subscribe to project completion and record it as a notification.
//!
//! # Invariants
//! - The store is newest-first: `create` inserts at the front, through
//!   every handle to the store.
//! - `create` forces `read = false` and stamps `created_at`.
//! - `mark_as_read` reports a miss as `None`, not as an error.

use crate::config::{LatencyProfile, Operation};
use crate::events::{ListenerError, ProjectCompleted, ProjectEventListener};
use crate::model::id::RecordId;
use crate::model::notification::{NewNotification, Notification, NotificationPatch};
use crate::service::{
    insert_into_store, remove_from_store, simulate_latency, update_in_store, ServiceResult,
};
use crate::store::{EntityStore, InsertPosition};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

/// Async facade over the notification store.
#[derive(Clone)]
pub struct NotificationService {
    store: EntityStore<Notification>,
    latency: Arc<LatencyProfile>,
}

impl NotificationService {
    /// Wraps `store`, switching it (and every clone of it) to newest-first
    /// insertion.
    pub fn new(store: EntityStore<Notification>, latency: Arc<LatencyProfile>) -> Self {
        Self {
            store: store.with_insert_position(InsertPosition::Front),
            latency,
        }
    }

    pub async fn get_all(&self) -> Vec<Notification> {
        simulate_latency(&self.latency, Operation::List).await;
        self.store.snapshot()
    }

    pub async fn get_by_id(&self, id: RecordId) -> Option<Notification> {
        simulate_latency(&self.latency, Operation::Get).await;
        self.store.find(id)
    }

    pub async fn get_by_project_id(&self, project_id: RecordId) -> Vec<Notification> {
        simulate_latency(&self.latency, Operation::ParentLookup).await;
        self.store.filter(|notification| notification.project_id == Some(project_id))
    }

    /// Unread notifications in store order.
    pub async fn get_unread(&self) -> Vec<Notification> {
        simulate_latency(&self.latency, Operation::NotificationRead).await;
        self.store.filter(|notification| !notification.read)
    }

    /// Marks one notification read. Returns `None` when `id` is unknown.
    pub async fn mark_as_read(&self, id: RecordId) -> Option<Notification> {
        simulate_latency(&self.latency, Operation::MarkRead).await;
        let notification = self.store.modify(id, |notification| {
            notification.read = true;
            notification.clone()
        });
        debug!(
            "event=notification_mark_read module=notification_service status=ok id={} found={}",
            id,
            notification.is_some()
        );
        notification
    }

    /// Marks every notification read and returns the whole store.
    pub async fn mark_all_as_read(&self) -> Vec<Notification> {
        simulate_latency(&self.latency, Operation::MarkAllRead).await;
        let notifications = self.store.modify_all(|notification| notification.read = true);
        info!(
            "event=notification_mark_all_read module=notification_service status=ok count={}",
            notifications.len()
        );
        notifications
    }

    pub async fn create(&self, new_notification: NewNotification) -> ServiceResult<Notification> {
        simulate_latency(&self.latency, Operation::NotificationWrite).await;
        let created_at = Utc::now();
        let notification = insert_into_store(&self.store, |id| {
            new_notification.into_record(id, created_at)
        })?;
        info!(
            "event=notification_create module=notification_service status=ok id={} kind={:?}",
            notification.id, notification.kind
        );
        Ok(notification)
    }

    /// Records a `success` notification for a completed project.
    pub async fn create_project_completion_notification(
        &self,
        project_title: &str,
        project_id: RecordId,
    ) -> ServiceResult<Notification> {
        self.create(NewNotification::project_completed(project_title, project_id))
            .await
    }

    pub async fn update(
        &self,
        id: RecordId,
        patch: NotificationPatch,
    ) -> ServiceResult<Notification> {
        simulate_latency(&self.latency, Operation::Update).await;
        let notification = update_in_store(&self.store, id, patch)?;
        info!("event=notification_update module=notification_service status=ok id={id}");
        Ok(notification)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<Notification> {
        simulate_latency(&self.latency, Operation::Delete).await;
        let notification = remove_from_store(&self.store, id)?;
        info!("event=notification_delete module=notification_service status=ok id={id}");
        Ok(notification)
    }
}

#[async_trait]
impl ProjectEventListener for NotificationService {
    fn name(&self) -> &'static str {
        "notification_service"
    }

    async fn on_project_completed(&self, event: &ProjectCompleted) -> Result<(), ListenerError> {
        self.create_project_completion_notification(&event.project_title, event.project_id)
            .await
            .map(|_| ())
            .map_err(|err| ListenerError::new(self.name(), err.to_string()))
    }
}
