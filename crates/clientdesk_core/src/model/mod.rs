//! Dashboard domain model.
//!
//! # Responsibility
//! - Define record shapes for clients, projects, tasks and notifications.
//! - Define creation inputs and shallow-merge patches per record type.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its type.
//! - Patch types never carry an id, so updates cannot re-key a record.
//! - Foreign keys are plain ids; no referential integrity is enforced.

use std::fmt::{Display, Formatter};

pub mod client;
pub mod id;
pub mod notification;
pub mod project;
pub mod task;

use id::RecordId;

/// Entity type tag carried by errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Client,
    Project,
    Task,
    Notification,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Project => "project",
            Self::Task => "task",
            Self::Notification => "notification",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common contract for records held in an entity store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity type tag for this record.
    const KIND: EntityKind;

    /// Partial update shape; fields set to `Some` overwrite.
    type Patch;

    fn id(&self) -> RecordId;

    /// Shallow-merges `patch` into this record.
    fn apply_patch(&mut self, patch: Self::Patch);
}
