//! Client record model.

use crate::model::id::RecordId;
use crate::model::{EntityKind, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relationship state of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
    Prospect,
}

/// Client record as stored and returned by `ClientService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    /// Left unset unless the caller chooses one.
    #[serde(default)]
    pub status: Option<ClientStatus>,
    pub created_at: DateTime<Utc>,
}

/// Input for `ClientService::create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewClient {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub status: Option<ClientStatus>,
}

impl NewClient {
    /// Minimal input with the three fields the add-client form requires.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Client {
        Client {
            id,
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            status: self.status,
            created_at,
        }
    }
}

/// Shallow-merge patch for a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: Option<ClientStatus>,
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Client;
    type Patch = ClientPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(status) = patch.status {
            self.status = Some(status);
        }
    }
}
