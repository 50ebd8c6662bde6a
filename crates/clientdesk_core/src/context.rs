//! Composition root for stores and services.
//!
//! # Responsibility
//! - Own one store per entity type and the services over them.
//! - Wire the notification service as a project event listener.
//!
//! # Invariants
//! - Two contexts never share a store.
//! - Cloning a context shares its stores.

use crate::config::{CoreConfig, LatencyProfile};
use crate::fixtures::{FixtureError, SeedSet};
use crate::logging::{init_logging, LoggingError};
use crate::service::client_service::ClientService;
use crate::service::notification_service::NotificationService;
use crate::service::project_service::ProjectService;
use crate::service::task_service::TaskService;
use crate::store::EntityStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug)]
pub enum ContextError {
    Fixtures(FixtureError),
    Logging(LoggingError),
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixtures(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fixtures(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<FixtureError> for ContextError {
    fn from(value: FixtureError) -> Self {
        Self::Fixtures(value)
    }
}

impl From<LoggingError> for ContextError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Services backed by one isolated set of stores.
#[derive(Clone)]
pub struct AppContext {
    clients: ClientService,
    projects: ProjectService,
    tasks: TaskService,
    notifications: NotificationService,
}

impl AppContext {
    /// Builds a context from configuration, starting logging if requested.
    pub fn from_config(config: &CoreConfig) -> Result<Self, ContextError> {
        if let Some(logging) = &config.logging {
            init_logging(logging)?;
        }
        let seeds = SeedSet::load(&config.fixtures)?;
        Ok(Self::with_seeds(config.latency.clone(), seeds))
    }

    /// Builds a context over explicit seeds.
    pub fn with_seeds(latency: LatencyProfile, seeds: SeedSet) -> Self {
        let latency = Arc::new(latency);
        info!(
            "event=context_init module=context status=ok clients={} projects={} tasks={} notifications={}",
            seeds.clients.len(),
            seeds.projects.len(),
            seeds.tasks.len(),
            seeds.notifications.len()
        );

        let clients = ClientService::new(EntityStore::seeded(seeds.clients), Arc::clone(&latency));
        let projects =
            ProjectService::new(EntityStore::seeded(seeds.projects), Arc::clone(&latency));
        let tasks = TaskService::new(EntityStore::seeded(seeds.tasks), Arc::clone(&latency));
        let notifications =
            NotificationService::new(EntityStore::seeded(seeds.notifications), latency);

        projects.subscribe(Arc::new(notifications.clone()));

        Self {
            clients,
            projects,
            tasks,
            notifications,
        }
    }

    /// Empty stores and zero latency.
    pub fn in_memory() -> Self {
        Self::with_seeds(LatencyProfile::instant(), SeedSet::default())
    }

    pub fn clients(&self) -> &ClientService {
        &self.clients
    }

    pub fn projects(&self) -> &ProjectService {
        &self.projects
    }

    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }
}
