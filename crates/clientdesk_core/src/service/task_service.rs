//! Task use-case service.

use crate::config::{LatencyProfile, Operation};
use crate::model::id::RecordId;
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::query::{RecordQuery, TaskQuery};
use crate::service::{
    insert_into_store, remove_from_store, simulate_latency, update_in_store, ServiceResult,
};
use crate::store::EntityStore;
use log::info;
use std::sync::Arc;

/// Async facade over the task store. New tasks always start incomplete.
#[derive(Clone)]
pub struct TaskService {
    store: EntityStore<Task>,
    latency: Arc<LatencyProfile>,
}

impl TaskService {
    pub fn new(store: EntityStore<Task>, latency: Arc<LatencyProfile>) -> Self {
        Self { store, latency }
    }

    pub async fn get_all(&self) -> Vec<Task> {
        simulate_latency(&self.latency, Operation::List).await;
        self.store.snapshot()
    }

    pub async fn get_by_id(&self, id: RecordId) -> Option<Task> {
        simulate_latency(&self.latency, Operation::Get).await;
        self.store.find(id)
    }

    pub async fn get_by_project_id(&self, project_id: RecordId) -> Vec<Task> {
        simulate_latency(&self.latency, Operation::ParentLookup).await;
        self.store.filter(|task| task.project_id == project_id)
    }

    /// Filtered tasks, pending first and then by due date.
    pub async fn search(&self, query: &TaskQuery) -> Vec<Task> {
        simulate_latency(&self.latency, Operation::List).await;
        let mut matches = self.store.filter(|task| query.matches(task));
        query.sort(&mut matches);
        matches
    }

    pub async fn create(&self, new_task: NewTask) -> ServiceResult<Task> {
        simulate_latency(&self.latency, Operation::Create).await;
        let task = insert_into_store(&self.store, |id| new_task.into_record(id))?;
        info!(
            "event=task_create module=task_service status=ok id={} project_id={}",
            task.id, task.project_id
        );
        Ok(task)
    }

    pub async fn update(&self, id: RecordId, patch: TaskPatch) -> ServiceResult<Task> {
        simulate_latency(&self.latency, Operation::Update).await;
        let task = update_in_store(&self.store, id, patch)?;
        info!(
            "event=task_update module=task_service status=ok id={} completed={}",
            id, task.completed
        );
        Ok(task)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<Task> {
        simulate_latency(&self.latency, Operation::Delete).await;
        let task = remove_from_store(&self.store, id)?;
        info!("event=task_delete module=task_service status=ok id={id}");
        Ok(task)
    }
}
