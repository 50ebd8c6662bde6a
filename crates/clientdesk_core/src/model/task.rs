//! Task record model.

use crate::model::id::RecordId;
use crate::model::{EntityKind, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Task record as stored and returned by `TaskService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub project_id: RecordId,
    pub completed: bool,
}

/// Input for `TaskService::create`. New tasks always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub project_id: RecordId,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        priority: TaskPriority,
        due_date: NaiveDate,
        project_id: RecordId,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
            due_date,
            project_id,
        }
    }

    pub(crate) fn into_record(self, id: RecordId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            project_id: self.project_id,
            completed: false,
        }
    }
}

/// Shallow-merge patch for a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<RecordId>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch used by the task list checkbox.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

impl Record for Task {
    const KIND: EntityKind = EntityKind::Task;
    type Patch = TaskPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}
