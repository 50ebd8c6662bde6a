//! Data-service layer for the ClientDesk dashboard.
//! Owns the in-memory stores and every invariant the UI relies on.

pub mod config;
pub mod context;
pub mod dashboard;
pub mod events;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig, FixtureSource, LatencyProfile, LoggingConfig};
pub use context::{AppContext, ContextError};
pub use dashboard::DashboardMetrics;
pub use events::{ListenerError, ProjectCompleted, ProjectEventListener};
pub use fixtures::{FixtureError, SeedSet};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::client::{Client, ClientPatch, ClientStatus, NewClient};
pub use model::id::{InvalidRecordId, RecordId};
pub use model::notification::{NewNotification, Notification, NotificationKind, NotificationPatch};
pub use model::project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use model::task::{NewTask, Task, TaskPatch, TaskPriority};
pub use model::{EntityKind, Record};
pub use query::{ClientQuery, ProjectQuery, RecordQuery, TaskCompletion, TaskQuery};
pub use service::client_service::ClientService;
pub use service::notification_service::NotificationService;
pub use service::project_service::ProjectService;
pub use service::task_service::TaskService;
pub use service::{ServiceError, ServiceResult};
pub use store::{EntityStore, InsertPosition};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
