//! # Subsystem Capabilities
//!
//! One trait per Senzing subsystem. The gRPC wrappers in [`crate::client`] implement them;
//! code written against the traits does not depend on the transport.
//!
//! Every method issues exactly one remote call, except the pager helpers which open a
//! handle and hand it to a [`Pager`]. Arguments are checked locally first: malformed JSON,
//! unknown handles and out of range values fail with [`SzError::Usage`] without touching
//! the network.
use crate::{
    error::SzError,
    flags::SzFlags,
    handle::{ConfigHandle, EntityListHandle, ExportHandle},
    json::{JsonInput, RecordKey},
    paging::Pager,
};
use async_trait::async_trait;
use futures_util::stream::BoxStream;

#[async_trait]
pub trait SzProduct: Send + Sync {
    /// License details of the engine as a JSON document.
    async fn get_license(&self) -> Result<String, SzError>;

    /// Version details of the engine as a JSON document.
    async fn get_version(&self) -> Result<String, SzError>;
}

/// In-memory configuration editing.
///
/// Changes made through a [`ConfigHandle`] live only in the server's memory until the
/// exported definition is registered with [`SzConfigManager::register_config`].
#[async_trait]
pub trait SzConfig: Send + Sync {
    /// Opens a new configuration populated from the engine's template.
    async fn create_config(&self) -> Result<ConfigHandle, SzError>;

    /// Opens a configuration from an existing definition.
    async fn import_config(&self, config_definition: JsonInput) -> Result<ConfigHandle, SzError>;

    async fn export_config(&self, config_handle: &ConfigHandle) -> Result<String, SzError>;

    async fn close_config(&self, config_handle: ConfigHandle) -> Result<(), SzError>;

    /// Adds a data source, e.g. `{"DSRC_CODE": "CUSTOMERS"}`.
    ///
    /// The result carries the `DSRC_ID` the engine assigned.
    async fn add_data_source(
        &self,
        config_handle: &ConfigHandle,
        data_source_definition: JsonInput,
    ) -> Result<String, SzError>;

    async fn delete_data_source(
        &self,
        config_handle: &ConfigHandle,
        data_source_definition: JsonInput,
    ) -> Result<(), SzError>;

    async fn get_data_sources(&self, config_handle: &ConfigHandle) -> Result<String, SzError>;
}

/// The registry of persisted configurations and the default configuration pointer.
#[async_trait]
pub trait SzConfigManager: Send + Sync {
    /// Persists a configuration definition and returns its new id.
    async fn register_config(
        &self,
        config_definition: JsonInput,
        config_comment: &str,
    ) -> Result<i64, SzError>;

    async fn get_config(&self, config_id: i64) -> Result<String, SzError>;

    async fn get_configs(&self) -> Result<String, SzError>;

    async fn get_default_config_id(&self) -> Result<i64, SzError>;

    /// Moves the default to `new_default_config_id` only if it is still
    /// `current_default_config_id`.
    ///
    /// When another writer got there first the call fails with
    /// [`EngineErrorKind::ReplaceConflict`](crate::error::EngineErrorKind::ReplaceConflict)
    /// and the registry is left untouched.
    async fn replace_default_config_id(
        &self,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> Result<(), SzError>;

    async fn set_default_config_id(&self, config_id: i64) -> Result<(), SzError>;

    /// Registers a definition and makes it the default in one call.
    async fn set_default_config(
        &self,
        config_definition: JsonInput,
        config_comment: &str,
    ) -> Result<i64, SzError>;
}

#[async_trait]
pub trait SzDiagnostic: Send + Sync {
    /// Runs a datastore insert benchmark for `seconds_to_run` seconds.
    ///
    /// Negative durations are rejected locally.
    async fn check_datastore_performance(&self, seconds_to_run: i32) -> Result<String, SzError>;

    async fn get_datastore_info(&self) -> Result<String, SzError>;

    async fn get_feature(&self, feature_id: i64) -> Result<String, SzError>;

    /// Deletes every record and entity in the repository.
    async fn purge_repository(&self) -> Result<(), SzError>;

    /// Switches the server to `config_id`. On failure the previous configuration stays active.
    async fn reinitialize(&self, config_id: i64) -> Result<(), SzError>;

    async fn get_entity_list_by_size(&self, entity_size: i64) -> Result<EntityListHandle, SzError>;

    /// Next chunk of the entity list, `None` at the end.
    async fn fetch_next_entity_by_size(
        &self,
        entity_list_handle: &EntityListHandle,
    ) -> Result<Option<String>, SzError>;

    async fn close_entity_list_by_size(
        &self,
        entity_list_handle: EntityListHandle,
    ) -> Result<(), SzError>;

    /// Opens the entity list for `entity_size` behind a [`Pager`].
    async fn entities_by_size(
        &self,
        entity_size: i64,
    ) -> Result<Pager<Self, EntityListHandle>, SzError>
    where
        Self: Clone + Sized + 'static,
    {
        let handle = self.get_entity_list_by_size(entity_size).await?;
        Ok(Pager::new(self.clone(), handle))
    }
}

/// Record ingestion, entity retrieval and relationship analysis.
///
/// Mutating calls only return an info document when [`SzFlags::WITH_INFO`] is set; without
/// it the result is an empty string.
#[async_trait]
pub trait SzEngine: Send + Sync {
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        record_definition: JsonInput,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn delete_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn get_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn reevaluate_entity(&self, entity_id: i64, flags: SzFlags) -> Result<String, SzError>;

    async fn reevaluate_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    /// Describes the features a record would produce without loading it.
    async fn preprocess_record(
        &self,
        record_definition: JsonInput,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn get_entity_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    /// `search_profile` may be empty to use the engine's default profile.
    async fn search_by_attributes(
        &self,
        attributes: JsonInput,
        search_profile: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn why_search(
        &self,
        attributes: JsonInput,
        entity_id: i64,
        search_profile: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn find_interesting_entities_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn find_interesting_entities_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn find_network_by_entity_id(
        &self,
        entity_ids: &[i64],
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn find_network_by_record_id(
        &self,
        record_keys: &[RecordKey],
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    /// Empty `avoid_entity_ids` or `required_data_sources` place no constraint on the path.
    async fn find_path_by_entity_id(
        &self,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &[i64],
        required_data_sources: &[&str],
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn find_path_by_record_id(
        &self,
        start: &RecordKey,
        end: &RecordKey,
        max_degrees: i64,
        avoid_record_keys: &[RecordKey],
        required_data_sources: &[&str],
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn why_entities(
        &self,
        entity_id1: i64,
        entity_id2: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn why_records(
        &self,
        first: &RecordKey,
        second: &RecordKey,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn why_record_in_entity(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn how_entity_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn get_virtual_entity_by_record_id(
        &self,
        record_keys: &[RecordKey],
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn count_redo_records(&self) -> Result<i64, SzError>;

    /// Next pending redo record, an empty string when there is none.
    async fn get_redo_record(&self) -> Result<String, SzError>;

    async fn process_redo_record(
        &self,
        redo_record: &str,
        flags: SzFlags,
    ) -> Result<String, SzError>;

    async fn get_active_config_id(&self) -> Result<i64, SzError>;

    async fn get_stats(&self) -> Result<String, SzError>;

    async fn prime_engine(&self) -> Result<(), SzError>;

    /// Switches the server to `config_id`. On failure the previous configuration stays active.
    async fn reinitialize(&self, config_id: i64) -> Result<(), SzError>;

    async fn export_json_entity_report(&self, flags: SzFlags) -> Result<ExportHandle, SzError>;

    /// `csv_column_list` is a comma separated list of columns, `*` for all of them.
    async fn export_csv_entity_report(
        &self,
        csv_column_list: &str,
        flags: SzFlags,
    ) -> Result<ExportHandle, SzError>;

    /// Next chunk of an export report, `None` at the end.
    async fn fetch_next(&self, export_handle: &ExportHandle) -> Result<Option<String>, SzError>;

    async fn close_export(&self, export_handle: ExportHandle) -> Result<(), SzError>;

    /// Server-side streaming form of the JSON export. No handle is involved.
    async fn stream_export_json_entity_report(
        &self,
        flags: SzFlags,
    ) -> Result<BoxStream<'static, Result<String, SzError>>, SzError>;

    /// Opens a JSON export behind a [`Pager`].
    async fn json_entity_report(
        &self,
        flags: SzFlags,
    ) -> Result<Pager<Self, ExportHandle>, SzError>
    where
        Self: Clone + Sized + 'static,
    {
        let handle = self.export_json_entity_report(flags).await?;
        Ok(Pager::new(self.clone(), handle))
    }

    /// Opens a CSV export behind a [`Pager`].
    async fn csv_entity_report(
        &self,
        csv_column_list: &str,
        flags: SzFlags,
    ) -> Result<Pager<Self, ExportHandle>, SzError>
    where
        Self: Clone + Sized + 'static,
    {
        let handle = self.export_csv_entity_report(csv_column_list, flags).await?;
        Ok(Pager::new(self.clone(), handle))
    }
}
