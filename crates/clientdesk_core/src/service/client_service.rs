//! Client use-case service.
//!
//! # Responsibility
//! - CRUD and search over the client store.
//! - Stamp `created_at` on new clients.
//!
//! # Invariants
//! - Deleting a client leaves its projects untouched.

use crate::config::{LatencyProfile, Operation};
use crate::model::client::{Client, ClientPatch, NewClient};
use crate::model::id::RecordId;
use crate::query::{ClientQuery, RecordQuery};
use crate::service::{
    insert_into_store, remove_from_store, simulate_latency, update_in_store, ServiceResult,
};
use crate::store::EntityStore;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

/// Async facade over the client store.
#[derive(Clone)]
pub struct ClientService {
    store: EntityStore<Client>,
    latency: Arc<LatencyProfile>,
}

impl ClientService {
    pub fn new(store: EntityStore<Client>, latency: Arc<LatencyProfile>) -> Self {
        Self { store, latency }
    }

    /// Returns every client in store order.
    pub async fn get_all(&self) -> Vec<Client> {
        simulate_latency(&self.latency, Operation::List).await;
        self.store.snapshot()
    }

    pub async fn get_by_id(&self, id: RecordId) -> Option<Client> {
        simulate_latency(&self.latency, Operation::Get).await;
        let client = self.store.find(id);
        debug!(
            "event=client_get module=client_service status=ok id={} found={}",
            id,
            client.is_some()
        );
        client
    }

    /// Clients whose name, company or email contain the query text.
    pub async fn search(&self, query: &ClientQuery) -> Vec<Client> {
        simulate_latency(&self.latency, Operation::List).await;
        let mut matches = self.store.filter(|client| query.matches(client));
        query.sort(&mut matches);
        matches
    }

    pub async fn create(&self, new_client: NewClient) -> ServiceResult<Client> {
        simulate_latency(&self.latency, Operation::Create).await;
        let created_at = Utc::now();
        let client = insert_into_store(&self.store, |id| new_client.into_record(id, created_at))?;
        info!(
            "event=client_create module=client_service status=ok id={}",
            client.id
        );
        Ok(client)
    }

    /// Shallow-merges `patch` into the client with `id`.
    pub async fn update(&self, id: RecordId, patch: ClientPatch) -> ServiceResult<Client> {
        simulate_latency(&self.latency, Operation::Update).await;
        let client = update_in_store(&self.store, id, patch)?;
        info!("event=client_update module=client_service status=ok id={id}");
        Ok(client)
    }

    /// Removes the client and returns it.
    pub async fn delete(&self, id: RecordId) -> ServiceResult<Client> {
        simulate_latency(&self.latency, Operation::Delete).await;
        let client = remove_from_store(&self.store, id)?;
        info!("event=client_delete module=client_service status=ok id={id}");
        Ok(client)
    }
}
