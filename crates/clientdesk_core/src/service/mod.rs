//! Record services over the in-memory stores.
//!
//! # Responsibility
//! - Expose async CRUD entry points per entity type.
//! - Apply creation defaults and shallow-merge updates.
//! - Model backend latency with one artificial delay per call.
//!
//! # Invariants
//! - Each call sleeps once, then mutates its store synchronously.
//! - `update`/`delete` on a missing id return `ServiceError::NotFound`.
//! - `create` fails with `ServiceError::IdsExhausted` rather than reusing an id.
//! - Concurrent updates of the same id are last-writer-wins.

use crate::config::{LatencyProfile, Operation};
use crate::model::id::RecordId;
use crate::model::{EntityKind, Record};
use crate::store::EntityStore;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod client_service;
pub mod notification_service;
pub mod project_service;
pub mod task_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by record services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    NotFound { entity: EntityKind, id: RecordId },
    /// The store already holds id `u64::MAX`; no new id can be assigned.
    IdsExhausted { entity: EntityKind },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::IdsExhausted { entity } => write!(f, "{entity} ids exhausted"),
        }
    }
}

impl Error for ServiceError {}

pub(crate) async fn simulate_latency(latency: &LatencyProfile, operation: Operation) {
    let delay = latency.delay_for(operation);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub(crate) fn insert_into_store<T, F>(store: &EntityStore<T>, build: F) -> ServiceResult<T>
where
    T: Record,
    F: FnOnce(RecordId) -> T,
{
    store.insert_with(build).ok_or_else(|| {
        warn!(
            "event=record_create module=service status=error entity={} reason=ids_exhausted",
            T::KIND
        );
        ServiceError::IdsExhausted { entity: T::KIND }
    })
}

pub(crate) fn update_in_store<T: Record>(
    store: &EntityStore<T>,
    id: RecordId,
    patch: T::Patch,
) -> ServiceResult<T> {
    store
        .modify(id, |record| {
            record.apply_patch(patch);
            record.clone()
        })
        .ok_or(ServiceError::NotFound {
            entity: T::KIND,
            id,
        })
}

pub(crate) fn remove_from_store<T: Record>(
    store: &EntityStore<T>,
    id: RecordId,
) -> ServiceResult<T> {
    store.remove(id).ok_or(ServiceError::NotFound {
        entity: T::KIND,
        id,
    })
}
