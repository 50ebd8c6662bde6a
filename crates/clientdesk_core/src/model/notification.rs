//! Notification record model.
//!
//! Notifications are produced by system events (project completion) rather
//! than user forms, but share the generic record contract.

use crate::model::id::RecordId;
use crate::model::{EntityKind, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used for project completion notifications.
pub const PROJECT_COMPLETED_TITLE: &str = "Project Completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Notification record as stored and returned by `NotificationService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub project_id: Option<RecordId>,
}

/// Input for `NotificationService::create`; `read` and `createdAt` are
/// assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub project_id: Option<RecordId>,
}

impl NewNotification {
    /// Synthesized notification for a project reaching `Completed`.
    pub fn project_completed(project_title: &str, project_id: RecordId) -> Self {
        Self {
            title: PROJECT_COMPLETED_TITLE.to_string(),
            message: format!("{project_title} project has been completed successfully!"),
            kind: NotificationKind::Success,
            project_id: Some(project_id),
        }
    }

    pub(crate) fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            read: false,
            created_at,
            project_id: self.project_id,
        }
    }
}

/// Shallow-merge patch for a notification.
///
/// `project_id: Some(None)` detaches the notification from its project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NotificationKind>,
    pub read: Option<bool>,
    #[serde(deserialize_with = "deserialize_present")]
    pub project_id: Option<Option<RecordId>>,
}

// Maps a present-but-null field to `Some(None)`; absent fields stay `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<RecordId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<RecordId>::deserialize(deserializer).map(Some)
}

impl Record for Notification {
    const KIND: EntityKind = EntityKind::Notification;
    type Patch = NotificationPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewNotification, NotificationKind, NotificationPatch, PROJECT_COMPLETED_TITLE};
    use crate::model::id::RecordId;

    #[test]
    fn project_completed_message_interpolates_title() {
        let id = RecordId::new(4).unwrap();
        let new = NewNotification::project_completed("Mobile App", id);
        assert_eq!(new.title, PROJECT_COMPLETED_TITLE);
        assert_eq!(
            new.message,
            "Mobile App project has been completed successfully!"
        );
        assert_eq!(new.kind, NotificationKind::Success);
        assert_eq!(new.project_id, Some(id));
    }

    #[test]
    fn patch_distinguishes_null_from_absent_project() {
        let absent: NotificationPatch = serde_json::from_str(r#"{"read": true}"#).unwrap();
        assert_eq!(absent.project_id, None);

        let cleared: NotificationPatch = serde_json::from_str(r#"{"projectId": null}"#).unwrap();
        assert_eq!(cleared.project_id, Some(None));
    }
}
