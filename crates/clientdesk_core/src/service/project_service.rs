//! Project use-case service.
//!
//! # Responsibility
//! - CRUD, client lookup and search over the project store.
//! - Emit `ProjectCompleted` to subscribed listeners.
//!
//! # Invariants
//! - `create` forces `progress = 0` and `NotStarted`.
//! - The completion event fires once per transition into `Completed`, after
//!   the update is committed; repeated `Completed` updates stay silent.
//! - Listener failures are logged and never fail `update`.

use crate::config::{LatencyProfile, Operation};
use crate::events::{ProjectCompleted, ProjectEventListener};
use crate::model::id::RecordId;
use crate::model::project::{NewProject, Project, ProjectPatch, ProjectStatus};
use crate::model::{EntityKind, Record};
use crate::query::{ProjectQuery, RecordQuery};
use crate::service::{
    insert_into_store, remove_from_store, simulate_latency, ServiceError, ServiceResult,
};
use crate::store::EntityStore;
use log::{debug, error, info};
use parking_lot::RwLock;
use std::sync::Arc;

type ListenerList = Vec<Arc<dyn ProjectEventListener>>;

/// Async facade over the project store.
#[derive(Clone)]
pub struct ProjectService {
    store: EntityStore<Project>,
    latency: Arc<LatencyProfile>,
    listeners: Arc<RwLock<ListenerList>>,
}

impl ProjectService {
    pub fn new(store: EntityStore<Project>, latency: Arc<LatencyProfile>) -> Self {
        Self {
            store,
            latency,
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Registers a listener for project lifecycle events.
    pub fn subscribe(&self, listener: Arc<dyn ProjectEventListener>) {
        debug!(
            "event=listener_subscribe module=project_service status=ok listener={}",
            listener.name()
        );
        self.listeners.write().push(listener);
    }

    pub async fn get_all(&self) -> Vec<Project> {
        simulate_latency(&self.latency, Operation::List).await;
        self.store.snapshot()
    }

    pub async fn get_by_id(&self, id: RecordId) -> Option<Project> {
        simulate_latency(&self.latency, Operation::Get).await;
        self.store.find(id)
    }

    /// Projects owned by `client_id`, in store order.
    pub async fn get_by_client_id(&self, client_id: RecordId) -> Vec<Project> {
        simulate_latency(&self.latency, Operation::ParentLookup).await;
        self.store.filter(|project| project.client_id == client_id)
    }

    pub async fn search(&self, query: &ProjectQuery) -> Vec<Project> {
        simulate_latency(&self.latency, Operation::List).await;
        let mut matches = self.store.filter(|project| query.matches(project));
        query.sort(&mut matches);
        matches
    }

    pub async fn create(&self, new_project: NewProject) -> ServiceResult<Project> {
        simulate_latency(&self.latency, Operation::Create).await;
        let project = insert_into_store(&self.store, |id| new_project.into_record(id))?;
        info!(
            "event=project_create module=project_service status=ok id={} client_id={}",
            project.id, project.client_id
        );
        Ok(project)
    }

    /// Shallow-merges `patch` and announces a fresh completion.
    pub async fn update(&self, id: RecordId, patch: ProjectPatch) -> ServiceResult<Project> {
        simulate_latency(&self.latency, Operation::Update).await;
        let (previous_status, project) = self
            .store
            .modify(id, |project| {
                let previous_status = project.status;
                project.apply_patch(patch);
                (previous_status, project.clone())
            })
            .ok_or(ServiceError::NotFound {
                entity: EntityKind::Project,
                id,
            })?;
        info!(
            "event=project_update module=project_service status=ok id={} project_status={:?}",
            id, project.status
        );

        if previous_status != ProjectStatus::Completed
            && project.status == ProjectStatus::Completed
        {
            self.emit_completed(&project).await;
        }

        Ok(project)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<Project> {
        simulate_latency(&self.latency, Operation::Delete).await;
        let project = remove_from_store(&self.store, id)?;
        info!("event=project_delete module=project_service status=ok id={id}");
        Ok(project)
    }

    async fn emit_completed(&self, project: &Project) {
        let event = ProjectCompleted {
            project_id: project.id(),
            project_title: project.title.clone(),
        };
        let listeners: ListenerList = self.listeners.read().clone();
        for listener in listeners {
            match listener.on_project_completed(&event).await {
                Ok(()) => debug!(
                    "event=project_completed module=project_service status=ok id={} listener={}",
                    event.project_id,
                    listener.name()
                ),
                Err(err) => error!(
                    "event=project_completed module=project_service status=error id={} listener={} error={}",
                    event.project_id,
                    listener.name(),
                    err
                ),
            }
        }
    }
}
