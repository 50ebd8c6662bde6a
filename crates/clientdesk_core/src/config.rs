//! Core configuration.
//!
//! # Responsibility
//! - Describe simulated latency, seed source and logging settings.
//! - Load those settings from a JSON document.
//!
//! # Invariants
//! - Every field has a default, so `{}` is a valid config.
//! - Latency never changes behavior, only when an operation commits.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Service operation classes that carry their own artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    ParentLookup,
    Create,
    Update,
    Delete,
    NotificationRead,
    NotificationWrite,
    MarkRead,
    MarkAllRead,
}

/// Artificial per-operation delay in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub list_ms: u64,
    pub get_ms: u64,
    pub parent_lookup_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub notification_read_ms: u64,
    pub notification_write_ms: u64,
    pub mark_read_ms: u64,
    pub mark_all_read_ms: u64,
}

impl LatencyProfile {
    /// Delays modelled on the dashboard's mock backend.
    pub fn simulated() -> Self {
        Self {
            list_ms: 300,
            get_ms: 200,
            parent_lookup_ms: 250,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
            notification_read_ms: 150,
            notification_write_ms: 150,
            mark_read_ms: 100,
            mark_all_read_ms: 200,
        }
    }

    /// Zero delay everywhere.
    pub fn instant() -> Self {
        Self {
            list_ms: 0,
            get_ms: 0,
            parent_lookup_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            notification_read_ms: 0,
            notification_write_ms: 0,
            mark_read_ms: 0,
            mark_all_read_ms: 0,
        }
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        let millis = match operation {
            Operation::List => self.list_ms,
            Operation::Get => self.get_ms,
            Operation::ParentLookup => self.parent_lookup_ms,
            Operation::Create => self.create_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
            Operation::NotificationRead => self.notification_read_ms,
            Operation::NotificationWrite => self.notification_write_ms,
            Operation::MarkRead => self.mark_read_ms,
            Operation::MarkAllRead => self.mark_all_read_ms,
        };
        Duration::from_millis(millis)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Where initial store contents come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureSource {
    /// Seed documents compiled into the crate.
    #[default]
    Bundled,
    /// Every store starts empty.
    Empty,
    /// `clients.json`, `projects.json`, `tasks.json` and
    /// `notifications.json` read from this directory.
    Directory(PathBuf),
}

/// Rolling file log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for log files.
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join("clientdesk-logs"),
        }
    }
}

/// Top-level configuration for an `AppContext`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub latency: LatencyProfile,
    pub fixtures: FixtureSource,
    /// Logging stays off unless configured.
    pub logging: Option<LoggingConfig>,
}

impl CoreConfig {
    /// Zero-latency config over the given seed source.
    pub fn instant(fixtures: FixtureSource) -> Self {
        Self {
            latency: LatencyProfile::instant(),
            fixtures,
            logging: None,
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_json_str(&source)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, FixtureSource, LatencyProfile, Operation};
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.fixtures, FixtureSource::Bundled);
        assert!(config.logging.is_none());
    }

    #[test]
    fn partial_latency_keeps_other_defaults() {
        let config =
            CoreConfig::from_json_str(r#"{"latency": {"create_ms": 5}, "fixtures": "empty"}"#)
                .unwrap();
        assert_eq!(
            config.latency.delay_for(Operation::Create),
            Duration::from_millis(5)
        );
        assert_eq!(
            config.latency.delay_for(Operation::Update),
            LatencyProfile::simulated().delay_for(Operation::Update)
        );
        assert_eq!(config.fixtures, FixtureSource::Empty);
    }

    #[test]
    fn directory_fixture_source_parses() {
        let config =
            CoreConfig::from_json_str(r#"{"fixtures": {"directory": "/srv/seed"}}"#).unwrap();
        assert_eq!(
            config.fixtures,
            FixtureSource::Directory(PathBuf::from("/srv/seed"))
        );
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"logging": {{"level": "warn", "log_dir": "/tmp/cd"}}}}"#
        )
        .unwrap();

        let config = CoreConfig::load(file.path()).unwrap();
        let logging = config.logging.unwrap();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.log_dir, PathBuf::from("/tmp/cd"));

        let missing = CoreConfig::load(&file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn instant_profile_has_no_delay() {
        let profile = LatencyProfile::instant();
        assert_eq!(profile.delay_for(Operation::List), Duration::ZERO);
        assert_eq!(profile.delay_for(Operation::MarkRead), Duration::ZERO);
        assert_eq!(profile.delay_for(Operation::MarkAllRead), Duration::ZERO);
    }

    #[test]
    fn notification_writes_have_their_own_delays() {
        let profile = LatencyProfile::simulated();
        assert_eq!(
            profile.delay_for(Operation::NotificationWrite),
            Duration::from_millis(150)
        );
        assert_eq!(
            profile.delay_for(Operation::MarkAllRead),
            Duration::from_millis(200)
        );

        let config =
            CoreConfig::from_json_str(r#"{"latency": {"mark_all_read_ms": 7}}"#).unwrap();
        assert_eq!(
            config.latency.delay_for(Operation::MarkAllRead),
            Duration::from_millis(7)
        );
        assert_eq!(
            config.latency.delay_for(Operation::List),
            Duration::from_millis(300)
        );
    }
}
