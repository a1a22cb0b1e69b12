//! # Connection Settings
//!
//! Where the Senzing gRPC server lives and how to talk to it. Settings can be built in
//! code or loaded from a JSON file:
//!
//! ```json
//! {
//!   "url": "http://localhost:8261",
//!   "connect_timeout_ms": 5000,
//!   "timeout_ms": 30000,
//!   "headers": { "authorization": "Bearer token" }
//! }
//! ```
use crate::error::SzError;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use tonic::metadata::{MetadataKey, MetadataMap, MetadataValue};

pub const DEFAULT_URL: &str = "http://localhost:8261";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{0}': '{1}'")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Invalid settings file '{0}': '{1}'")]
    Parse(PathBuf, #[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionSettings {
    pub url: String,
    /// Milliseconds allowed for establishing the connection.
    pub connect_timeout_ms: Option<u64>,
    /// Deadline applied to every call, in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Metadata sent with every call.
    pub headers: BTreeMap<String, String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            connect_timeout_ms: None,
            timeout_ms: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ConnectionSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(millis(timeout));
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(millis(timeout));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| SettingsError::Parse(path.to_path_buf(), e))
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Converts `headers` into gRPC metadata, rejecting keys or values that are not valid
    /// ASCII metadata.
    pub fn metadata(&self) -> Result<MetadataMap, SzError> {
        let mut metadata = MetadataMap::new();
        for (key, value) in &self.headers {
            let key = MetadataKey::from_str(&key.to_ascii_lowercase()).map_err(|e| {
                SzError::usage("connect", "headers", format!("invalid header name '{key}': {e}"))
            })?;
            let value = MetadataValue::from_str(value).map_err(|e| {
                SzError::usage("connect", "headers", format!("invalid value for '{key}': {e}"))
            })?;
            metadata.insert(key, value);
        }
        Ok(metadata)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
