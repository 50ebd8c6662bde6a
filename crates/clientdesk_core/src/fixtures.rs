//! Seed documents for the entity stores.
//!
//! # Responsibility
//! - Decode the per-entity JSON seed arrays.
//! - Resolve a `FixtureSource` into a `SeedSet`.
//!
//! # Invariants
//! - Seed order is preserved as store order.
//! - A seed file with duplicate ids is rejected rather than loaded.

use crate::config::FixtureSource;
use crate::model::client::Client;
use crate::model::id::RecordId;
use crate::model::notification::Notification;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::Record;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const CLIENTS_FILE: &str = "clients.json";
const PROJECTS_FILE: &str = "projects.json";
const TASKS_FILE: &str = "tasks.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";

const BUNDLED_CLIENTS: &str = include_str!("../fixtures/clients.json");
const BUNDLED_PROJECTS: &str = include_str!("../fixtures/projects.json");
const BUNDLED_TASKS: &str = include_str!("../fixtures/tasks.json");
const BUNDLED_NOTIFICATIONS: &str = include_str!("../fixtures/notifications.json");

#[derive(Debug)]
pub enum FixtureError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        file: String,
        source: serde_json::Error,
    },
    DuplicateId {
        file: String,
        id: RecordId,
    },
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read fixture `{}`: {source}", path.display())
            }
            Self::Decode { file, source } => write!(f, "invalid fixture `{file}`: {source}"),
            Self::DuplicateId { file, id } => write!(f, "duplicate id {id} in fixture `{file}`"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::DuplicateId { .. } => None,
        }
    }
}

/// Initial contents for every store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
}

impl SeedSet {
    /// Seeds compiled into the crate.
    pub fn bundled() -> Result<Self, FixtureError> {
        Ok(Self {
            clients: decode(CLIENTS_FILE, BUNDLED_CLIENTS)?,
            projects: decode(PROJECTS_FILE, BUNDLED_PROJECTS)?,
            tasks: decode(TASKS_FILE, BUNDLED_TASKS)?,
            notifications: decode(NOTIFICATIONS_FILE, BUNDLED_NOTIFICATIONS)?,
        })
    }

    /// Reads the four seed files from `dir`. A missing file seeds nothing.
    pub fn from_dir(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            clients: read_optional(dir, CLIENTS_FILE)?,
            projects: read_optional(dir, PROJECTS_FILE)?,
            tasks: read_optional(dir, TASKS_FILE)?,
            notifications: read_optional(dir, NOTIFICATIONS_FILE)?,
        })
    }

    pub fn load(source: &FixtureSource) -> Result<Self, FixtureError> {
        match source {
            FixtureSource::Bundled => Self::bundled(),
            FixtureSource::Empty => Ok(Self::default()),
            FixtureSource::Directory(dir) => Self::from_dir(dir),
        }
    }
}

fn read_optional<T>(dir: &Path, file: &str) -> Result<Vec<T>, FixtureError>
where
    T: Record + DeserializeOwned,
{
    let path = dir.join(file);
    match std::fs::read_to_string(&path) {
        Ok(source) => decode(file, &source),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(FixtureError::Io { path, source: err }),
    }
}

fn decode<T>(file: &str, source: &str) -> Result<Vec<T>, FixtureError>
where
    T: Record + DeserializeOwned,
{
    let records: Vec<T> = serde_json::from_str(source).map_err(|err| FixtureError::Decode {
        file: file.to_string(),
        source: err,
    })?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(FixtureError::DuplicateId {
                file: file.to_string(),
                id: record.id(),
            });
        }
    }
    Ok(records)
}
