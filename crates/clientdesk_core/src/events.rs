//! Project lifecycle events.
//!
//! # Responsibility
//! - Define the "project completed" event emitted by `ProjectService`.
//! - Define the listener seam other services subscribe through.
//!
//! # Invariants
//! - The event fires only on a transition into `Completed`, after the
//!   project update has been committed.
//! - Listener failures never propagate to the caller of the project update.

use crate::model::id::RecordId;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Emitted once when a project's status moves into `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCompleted {
    pub project_id: RecordId,
    pub project_title: String,
}

/// Failure reported by a listener. Logged by the emitter, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    pub listener: &'static str,
    pub message: String,
}

impl ListenerError {
    pub fn new(listener: &'static str, message: impl Into<String>) -> Self {
        Self {
            listener,
            message: message.into(),
        }
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} listener failed: {}", self.listener, self.message)
    }
}

impl Error for ListenerError {}

/// Subscriber to project lifecycle events.
#[async_trait]
pub trait ProjectEventListener: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    async fn on_project_completed(&self, event: &ProjectCompleted) -> Result<(), ListenerError>;
}
