//! Search and filter queries over records.
//!
//! # Responsibility
//! - Express the list filters the dashboard pages offer.
//! - Keep matching rules next to the record types they inspect.
//!
//! # Invariants
//! - Text matching is case-insensitive substring matching.
//! - Blank text matches every record.
//! - Queries never mutate stores; they filter snapshots.

use crate::model::client::Client;
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskPriority};

/// Filter applied by a service's `search` operation.
pub trait RecordQuery<T> {
    fn matches(&self, record: &T) -> bool;

    /// Reorders matches in place. Store order is kept by default.
    fn sort(&self, _records: &mut [T]) {}
}

/// Client list search across name, company and email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientQuery {
    pub text: Option<String>,
}

impl ClientQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl RecordQuery<Client> for ClientQuery {
    fn matches(&self, client: &Client) -> bool {
        match normalized_needle(self.text.as_deref()) {
            None => true,
            Some(needle) => [&client.name, &client.company, &client.email]
                .into_iter()
                .any(|field| contains_folded(field, &needle)),
        }
    }
}

/// Project list search over title/description plus a status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub text: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl RecordQuery<Project> for ProjectQuery {
    fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        match normalized_needle(self.text.as_deref()) {
            None => true,
            Some(needle) => {
                contains_folded(&project.title, &needle)
                    || contains_folded(&project.description, &needle)
            }
        }
    }
}

/// Completion filter for task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskCompletion {
    #[default]
    All,
    Pending,
    Completed,
}

/// Task list search; results are ordered pending first, then by due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub text: Option<String>,
    pub priority: Option<TaskPriority>,
    pub completion: TaskCompletion,
}

impl RecordQuery<Task> for TaskQuery {
    fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        let completion_ok = match self.completion {
            TaskCompletion::All => true,
            TaskCompletion::Pending => !task.completed,
            TaskCompletion::Completed => task.completed,
        };
        if !completion_ok {
            return false;
        }
        match normalized_needle(self.text.as_deref()) {
            None => true,
            Some(needle) => contains_folded(&task.title, &needle),
        }
    }

    fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by_key(|task| (task.completed, task.due_date));
    }
}

fn normalized_needle(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
