//! # CLI
//!
//! This module defines the command-line interface of `szgrpc` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring headers
//! are `key:value` and record definitions are JSON). Connection options are global so they can
//! be given before or after the subcommand.
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use sz_grpc_core::{ConnectionSettings, RecordKey, SettingsError};

#[derive(Parser, Debug)]
#[command(name = "szgrpc", version, about = "Senzing entity resolution over gRPC")]
pub struct Cli {
    /// The server URL to connect to [default: http://localhost:8261]
    #[arg(long, global = true, env = "SENZING_GRPC_URL")]
    pub url: Option<String>,

    /// Deadline applied to every call, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Metadata sent with every call (key:value)
    #[arg(short = 'H', long = "header", global = true, value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Connection settings file (JSON). Command line options take precedence.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log every remote call
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Response detail flag by name (e.g. ENTITY_INCLUDE_RECORD_DATA). Repeatable.
    ///
    /// When omitted, each command uses its default flags.
    #[arg(long = "flag", global = true)]
    pub flags: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The settings file, if any, overlaid with the command line options.
    pub fn connection_settings(&self) -> Result<ConnectionSettings, SettingsError> {
        let mut settings = match &self.settings {
            Some(path) => ConnectionSettings::from_json_file(path)?,
            None => ConnectionSettings::default(),
        };

        if let Some(url) = &self.url {
            settings.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings = settings.with_timeout(Duration::from_secs(timeout));
        }
        for (key, value) in &self.headers {
            settings = settings.with_header(key, value);
        }
        Ok(settings)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the engine version
    Version,

    /// Show the engine license
    License,

    /// Inspect and switch registered configurations
    Configs {
        #[command(subcommand)]
        sub: ConfigCommands,
    },

    /// List or add data sources of the default configuration
    DataSources {
        #[command(subcommand)]
        sub: DataSourceCommands,
    },

    /// Load, read and delete records
    Record {
        #[command(subcommand)]
        sub: RecordCommands,
    },

    /// Retrieve, search and explain resolved entities
    Entity {
        #[command(subcommand)]
        sub: EntityCommands,
    },

    /// Export every resolved entity
    Export {
        #[command(subcommand)]
        sub: ExportCommands,
    },

    /// Inspect the datastore
    Diagnostic {
        #[command(subcommand)]
        sub: DiagnosticCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// List registered configurations
    List,
    /// Print a registered configuration definition
    Get { config_id: i64 },
    /// Print the default configuration id
    Default,
    /// Make a configuration the default unconditionally
    SetDefault { config_id: i64 },
    /// Make a configuration the default only if the default is still `current`
    ReplaceDefault { current: i64, new: i64 },
}

#[derive(Subcommand, Debug)]
pub enum DataSourceCommands {
    /// List the data sources of the default configuration
    List,
    /// Register a new default configuration with one more data source
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// szgrpc data-sources add CUSTOMERS
    /// ```
    Add { code: String },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add or replace a record
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// szgrpc record add CUSTOMERS 1001 '{"NAME_FULL": "Robert Smith"}'
    /// ```
    Add {
        data_source: String,
        record_id: String,
        /// The record definition as a JSON object
        #[arg(value_parser = parse_json)]
        definition: serde_json::Value,
    },
    Get {
        data_source: String,
        record_id: String,
    },
    Delete {
        data_source: String,
        record_id: String,
    },
}

/// An entity given either by id (`42`) or by one of its records (`CUSTOMERS:1001`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Id(i64),
    Record(RecordKey),
}

#[derive(Subcommand, Debug)]
pub enum EntityCommands {
    /// Print an entity by id or by DATA_SOURCE:RECORD_ID
    Get {
        #[arg(value_parser = parse_entity_ref)]
        entity: EntityRef,
    },
    /// Search entities by attributes
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// szgrpc entity search '{"NAME_FULL": "Robert Smith"}'
    /// ```
    Search {
        #[arg(value_parser = parse_json)]
        attributes: serde_json::Value,
        /// Search profile, the engine default when empty
        #[arg(long, default_value = "")]
        profile: String,
    },
    /// Explain why two entities (or two records) resolved the way they did
    Why {
        #[arg(value_parser = parse_entity_ref)]
        first: EntityRef,
        #[arg(value_parser = parse_entity_ref)]
        second: EntityRef,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// One JSON document per line
    Json,
    /// CSV with a header line
    Csv {
        /// Comma separated columns, `*` for all
        #[arg(long, default_value = "*")]
        columns: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DiagnosticCommands {
    /// Datastore location and type
    Info,
    /// Run the datastore insert benchmark
    Performance {
        #[arg(default_value_t = 3, allow_negative_numbers = true)]
        seconds: i32,
    },
    /// Print a feature by its library id
    Feature { feature_id: i64 },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}

fn parse_json(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}

fn parse_entity_ref(value: &str) -> Result<EntityRef, String> {
    if let Ok(id) = value.parse() {
        return Ok(EntityRef::Id(id));
    }

    let (data_source, record_id) = value.split_once(':').ok_or_else(|| {
        format!("Invalid entity: '{value}'. Expected an entity id or 'DATA_SOURCE:RECORD_ID'")
    })?;

    if data_source.trim().is_empty() || record_id.trim().is_empty() {
        return Err("Data source and record id cannot be empty".to_string());
    }

    Ok(EntityRef::Record(RecordKey::new(data_source.trim(), record_id.trim())))
}
