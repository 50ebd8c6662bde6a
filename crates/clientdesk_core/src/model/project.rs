//! Project record model.
//!
//! # Invariants
//! - New projects always start at `progress = 0` and `NotStarted`.
//! - `progress` is a percentage in `0..=100`; range checks belong to callers.

use crate::model::id::RecordId;
use crate::model::{EntityKind, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    /// Whether the dashboard counts this project as active work.
    pub fn is_active(self) -> bool {
        matches!(self, Self::InProgress | Self::Review)
    }
}

/// Project record as stored and returned by `ProjectService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub client_id: RecordId,
    pub deadline: NaiveDate,
    pub status: ProjectStatus,
    pub progress: u8,
}

/// Input for `ProjectService::create`.
///
/// Status and progress are not part of the input; creation resets them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub client_id: RecordId,
    pub deadline: NaiveDate,
}

impl NewProject {
    pub fn new(title: impl Into<String>, client_id: RecordId, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            client_id,
            deadline,
        }
    }

    pub(crate) fn into_record(self, id: RecordId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            client_id: self.client_id,
            deadline: self.deadline,
            status: ProjectStatus::NotStarted,
            progress: 0,
        }
    }
}

/// Shallow-merge patch for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<RecordId>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
}

impl ProjectPatch {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for Project {
    const KIND: EntityKind = EntityKind::Project;
    type Patch = ProjectPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        let json = serde_json::to_value(ProjectStatus::NotStarted).unwrap();
        assert_eq!(json, "Not Started");
        let decoded: ProjectStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(decoded, ProjectStatus::InProgress);
    }

    #[test]
    fn decodes_fixture_shape() {
        let project: Project = serde_json::from_str(
            r#"{
                "Id": 3,
                "title": "Brand Identity Design",
                "description": "Logo and guidelines",
                "clientId": 2,
                "deadline": "2024-03-01",
                "status": "Review",
                "progress": 80
            }"#,
        )
        .unwrap();
        assert_eq!(project.id.get(), 3);
        assert_eq!(project.client_id.get(), 2);
        assert!(project.status.is_active());
    }
}
