// An in-memory Senzing server good enough to exercise the client wrappers.
// It is passed directly as the tonic service, no sockets involved.
#![allow(dead_code)]

use serde_json::{Value, json};
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    convert::Infallible,
    future::Ready,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicBool, Ordering},
    },
    task::{Context, Poll},
};
use sz_grpc_core::{
    SzConnection,
    generated::{szconfig, szconfigmanager, szdiagnostic, szengine, szproduct},
};
use tonic::{Status, body::Body, codegen::BoxFuture};
use tonic_prost::ProstCodec;

pub const VERSION: &str =
    r#"{"PRODUCT_NAME":"Senzing SDK","VERSION":"4.0.0","BUILD_NUMBER":"2025_05_01__00_00"}"#;
pub const LICENSE: &str =
    r#"{"customer":"Senzing Public Test License","licenseType":"EVAL (Solely for non-productive use)","recordLimit":50000}"#;

const WITH_INFO: i64 = 1 << 62;
const RECORD_JSON_DATA: i64 = 1 << 16;

pub fn connect() -> (FakeSenzing, SzConnection<FakeSenzing>) {
    let fake = FakeSenzing::default();
    let connection = SzConnection::from_service(fake.clone());
    (fake, connection)
}

fn engine_error(code: u32, text: impl std::fmt::Display) -> Status {
    Status::unknown(format!(r#"{{"reason":"SENZ{code:04}|{text}"}}"#))
}

fn template_config() -> Value {
    json!({
        "G2_CONFIG": {
            "CFG_DSRC": [
                {"DSRC_ID": 1, "DSRC_CODE": "TEST"},
                {"DSRC_ID": 2, "DSRC_CODE": "SEARCH"}
            ]
        }
    })
}

fn data_source_codes(config: &Value) -> Vec<String> {
    config
        .pointer("/G2_CONFIG/CFG_DSRC")
        .and_then(Value::as_array)
        .map(|sources| {
            sources
                .iter()
                .filter_map(|source| source["DSRC_CODE"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_json(raw: &str) -> Result<Value, Status> {
    serde_json::from_str(raw).map_err(|e| engine_error(2, format!("Invalid JSON: {e}")))
}

#[derive(Debug, Clone)]
struct StoredRecord {
    entity_id: i64,
    data: Value,
}

#[derive(Debug, Clone)]
struct RegisteredConfig {
    definition: String,
    comment: String,
}

#[derive(Debug)]
pub struct State {
    /// Every path that reached the server, in order.
    pub calls: Vec<String>,
    /// The `x-tenant` header of the last request, if any.
    pub last_tenant: Option<String>,
    configs: BTreeMap<i64, RegisteredConfig>,
    default_config_id: i64,
    active_config_id: i64,
    open_configs: HashMap<i64, Value>,
    records: BTreeMap<(String, String), StoredRecord>,
    next_entity_id: i64,
    cursors: HashMap<i64, VecDeque<String>>,
    next_handle: i64,
    redo: VecDeque<String>,
}

impl Default for State {
    fn default() -> Self {
        let mut configs = BTreeMap::new();
        configs.insert(
            1,
            RegisteredConfig {
                definition: template_config().to_string(),
                comment: "Initial configuration".to_string(),
            },
        );

        Self {
            calls: Vec::new(),
            last_tenant: None,
            configs,
            default_config_id: 1,
            active_config_id: 1,
            open_configs: HashMap::new(),
            records: BTreeMap::new(),
            next_entity_id: 1,
            cursors: HashMap::new(),
            next_handle: 100,
            redo: VecDeque::from([
                r#"{"REASON":"deferred","DATA_SOURCE":"TEST","RECORD_ID":"R1"}"#.to_string(),
                r#"{"REASON":"deferred","DATA_SOURCE":"TEST","RECORD_ID":"R2"}"#.to_string(),
            ]),
        }
    }
}

impl State {
    pub fn calls_to(&self, method: &str) -> usize {
        self.calls.iter().filter(|path| path.ends_with(method)).count()
    }

    pub fn open_cursors(&self) -> usize {
        self.cursors.len()
    }

    pub fn open_configs(&self) -> usize {
        self.open_configs.len()
    }

    fn handle(&mut self) -> i64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn active_data_sources(&self) -> Vec<String> {
        self.configs
            .get(&self.active_config_id)
            .and_then(|config| serde_json::from_str(&config.definition).ok())
            .map(|config: Value| data_source_codes(&config))
            .unwrap_or_default()
    }

    fn open_config(&mut self, handle: i64) -> Result<&mut Value, Status> {
        self.open_configs
            .get_mut(&handle)
            .ok_or_else(|| engine_error(7220, format!("Invalid config handle [{handle}]")))
    }

    fn record(&self, data_source: &str, record_id: &str) -> Result<&StoredRecord, Status> {
        self.records
            .get(&(data_source.to_string(), record_id.to_string()))
            .ok_or_else(|| {
                engine_error(
                    33,
                    format!("Unknown record: dsrc[{data_source}], record[{record_id}]"),
                )
            })
    }

    fn entity_records(&self, entity_id: i64) -> Vec<Value> {
        self.records
            .iter()
            .filter(|(_, record)| record.entity_id == entity_id)
            .map(|((data_source, record_id), _)| {
                json!({"DATA_SOURCE": data_source, "RECORD_ID": record_id})
            })
            .collect()
    }

    fn entity(&self, entity_id: i64) -> Result<Value, Status> {
        let records = self.entity_records(entity_id);
        if records.is_empty() {
            return Err(engine_error(
                37,
                format!("Unknown resolved entity value '{entity_id}'"),
            ));
        }
        Ok(json!({"RESOLVED_ENTITY": {"ENTITY_ID": entity_id, "RECORDS": records}}))
    }

    fn entity_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.records.values().map(|record| record.entity_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn with_info(flags: i64, data_source: &str, record_id: &str, entity_ids: &[i64]) -> String {
        if flags & WITH_INFO == 0 {
            return String::new();
        }
        let affected: Vec<Value> = entity_ids.iter().map(|id| json!({"ENTITY_ID": id})).collect();
        json!({
            "DATA_SOURCE": data_source,
            "RECORD_ID": record_id,
            "AFFECTED_ENTITIES": affected,
            "INTERESTING_ENTITIES": {"ENTITIES": []}
        })
        .to_string()
    }

    fn open_cursor(&mut self, lines: Vec<String>) -> i64 {
        let handle = self.handle();
        self.cursors.insert(handle, lines.into());
        handle
    }

    fn fetch_cursor(&mut self, handle: i64) -> Result<String, Status> {
        let cursor = self
            .cursors
            .get_mut(&handle)
            .ok_or_else(|| engine_error(7233, format!("Invalid handle [{handle}]")))?;
        Ok(cursor.pop_front().unwrap_or_default())
    }

    fn close_cursor(&mut self, handle: i64) -> Result<(), Status> {
        self.cursors
            .remove(&handle)
            .map(|_| ())
            .ok_or_else(|| engine_error(7233, format!("Invalid handle [{handle}]")))
    }

    fn entity_lines(&self) -> Vec<String> {
        self.entity_ids()
            .into_iter()
            .filter_map(|id| self.entity(id).ok())
            .map(|entity| format!("{entity}\n"))
            .collect()
    }

    fn reinitialize(&mut self, config_id: i64) -> Result<(), Status> {
        if !self.configs.contains_key(&config_id) {
            return Err(engine_error(7221, format!("Config ID [{config_id}] not found")));
        }
        self.active_config_id = config_id;
        Ok(())
    }

    fn register(&mut self, definition: String, comment: String) -> Result<i64, Status> {
        parse_json(&definition)?;
        let id = self.configs.keys().next_back().copied().unwrap_or(0) + 1;
        self.configs.insert(id, RegisteredConfig { definition, comment });
        Ok(id)
    }

    // szproduct

    fn get_license(
        &mut self,
        _: szproduct::GetLicenseRequest,
    ) -> Result<szproduct::GetLicenseResponse, Status> {
        Ok(szproduct::GetLicenseResponse {
            result: LICENSE.to_string(),
        })
    }

    fn get_version(
        &mut self,
        _: szproduct::GetVersionRequest,
    ) -> Result<szproduct::GetVersionResponse, Status> {
        Ok(szproduct::GetVersionResponse {
            result: VERSION.to_string(),
        })
    }

    // szconfig

    fn create_config(
        &mut self,
        _: szconfig::CreateConfigRequest,
    ) -> Result<szconfig::CreateConfigResponse, Status> {
        let handle = self.handle();
        self.open_configs.insert(handle, template_config());
        Ok(szconfig::CreateConfigResponse { result: handle })
    }

    fn import_config(
        &mut self,
        request: szconfig::ImportConfigRequest,
    ) -> Result<szconfig::ImportConfigResponse, Status> {
        let config = parse_json(&request.config_definition)?;
        let handle = self.handle();
        self.open_configs.insert(handle, config);
        Ok(szconfig::ImportConfigResponse { result: handle })
    }

    fn export_config(
        &mut self,
        request: szconfig::ExportConfigRequest,
    ) -> Result<szconfig::ExportConfigResponse, Status> {
        let config = self.open_config(request.config_handle)?;
        Ok(szconfig::ExportConfigResponse {
            result: config.to_string(),
        })
    }

    fn close_config(
        &mut self,
        request: szconfig::CloseConfigRequest,
    ) -> Result<szconfig::CloseConfigResponse, Status> {
        self.open_config(request.config_handle)?;
        self.open_configs.remove(&request.config_handle);
        Ok(szconfig::CloseConfigResponse {})
    }

    fn add_data_source(
        &mut self,
        request: szconfig::AddDataSourceRequest,
    ) -> Result<szconfig::AddDataSourceResponse, Status> {
        let definition = parse_json(&request.data_source_definition)?;
        let code = definition["DSRC_CODE"]
            .as_str()
            .ok_or_else(|| engine_error(7005, "Missing DSRC_CODE"))?
            .to_ascii_uppercase();

        let config = self.open_config(request.config_handle)?;
        if data_source_codes(config).contains(&code) {
            return Err(engine_error(7230, format!("Data source code [{code}] already exists")));
        }
        let sources = config
            .pointer_mut("/G2_CONFIG/CFG_DSRC")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| engine_error(7220, "Configuration has no CFG_DSRC"))?;
        let next_id = sources
            .iter()
            .filter_map(|source| source["DSRC_ID"].as_i64())
            .max()
            .unwrap_or(0)
            .max(1000)
            + 1;
        sources.push(json!({"DSRC_ID": next_id, "DSRC_CODE": code}));

        Ok(szconfig::AddDataSourceResponse {
            result: json!({"DSRC_ID": next_id}).to_string(),
        })
    }

    fn delete_data_source(
        &mut self,
        request: szconfig::DeleteDataSourceRequest,
    ) -> Result<szconfig::DeleteDataSourceResponse, Status> {
        let definition = parse_json(&request.data_source_definition)?;
        let code = definition["DSRC_CODE"].as_str().unwrap_or_default().to_string();
        let config = self.open_config(request.config_handle)?;
        if let Some(sources) = config
            .pointer_mut("/G2_CONFIG/CFG_DSRC")
            .and_then(Value::as_array_mut)
        {
            sources.retain(|source| source["DSRC_CODE"] != code.as_str());
        }
        Ok(szconfig::DeleteDataSourceResponse {})
    }

    fn get_data_sources(
        &mut self,
        request: szconfig::GetDataSourcesRequest,
    ) -> Result<szconfig::GetDataSourcesResponse, Status> {
        let config = self.open_config(request.config_handle)?;
        let sources = config
            .pointer("/G2_CONFIG/CFG_DSRC")
            .cloned()
            .unwrap_or_else(|| json!([]));
        Ok(szconfig::GetDataSourcesResponse {
            result: json!({"DATA_SOURCES": sources}).to_string(),
        })
    }

    // szconfigmanager

    fn get_config(
        &mut self,
        request: szconfigmanager::GetConfigRequest,
    ) -> Result<szconfigmanager::GetConfigResponse, Status> {
        let config = self.configs.get(&request.config_id).ok_or_else(|| {
            engine_error(7221, format!("Config ID [{}] not found", request.config_id))
        })?;
        Ok(szconfigmanager::GetConfigResponse {
            result: config.definition.clone(),
        })
    }

    fn get_configs(
        &mut self,
        _: szconfigmanager::GetConfigsRequest,
    ) -> Result<szconfigmanager::GetConfigsResponse, Status> {
        let configs: Vec<Value> = self
            .configs
            .iter()
            .map(|(id, config)| json!({"CONFIG_ID": id, "CONFIG_COMMENT": config.comment}))
            .collect();
        Ok(szconfigmanager::GetConfigsResponse {
            result: json!({"CONFIGS": configs}).to_string(),
        })
    }

    fn get_default_config_id(
        &mut self,
        _: szconfigmanager::GetDefaultConfigIdRequest,
    ) -> Result<szconfigmanager::GetDefaultConfigIdResponse, Status> {
        Ok(szconfigmanager::GetDefaultConfigIdResponse {
            result: self.default_config_id,
        })
    }

    fn register_config(
        &mut self,
        request: szconfigmanager::RegisterConfigRequest,
    ) -> Result<szconfigmanager::RegisterConfigResponse, Status> {
        let id = self.register(request.config_definition, request.config_comment)?;
        Ok(szconfigmanager::RegisterConfigResponse { result: id })
    }

    fn replace_default_config_id(
        &mut self,
        request: szconfigmanager::ReplaceDefaultConfigIdRequest,
    ) -> Result<szconfigmanager::ReplaceDefaultConfigIdResponse, Status> {
        if request.current_default_config_id != self.default_config_id {
            return Err(engine_error(
                7245,
                format!(
                    "Current configuration ID does not match specified data [{}]",
                    request.current_default_config_id
                ),
            ));
        }
        if !self.configs.contains_key(&request.new_default_config_id) {
            return Err(engine_error(
                7221,
                format!("Config ID [{}] not found", request.new_default_config_id),
            ));
        }
        self.default_config_id = request.new_default_config_id;
        Ok(szconfigmanager::ReplaceDefaultConfigIdResponse {})
    }

    fn set_default_config(
        &mut self,
        request: szconfigmanager::SetDefaultConfigRequest,
    ) -> Result<szconfigmanager::SetDefaultConfigResponse, Status> {
        let id = self.register(request.config_definition, request.config_comment)?;
        self.default_config_id = id;
        Ok(szconfigmanager::SetDefaultConfigResponse { result: id })
    }

    fn set_default_config_id(
        &mut self,
        request: szconfigmanager::SetDefaultConfigIdRequest,
    ) -> Result<szconfigmanager::SetDefaultConfigIdResponse, Status> {
        if !self.configs.contains_key(&request.config_id) {
            return Err(engine_error(
                7221,
                format!("Config ID [{}] not found", request.config_id),
            ));
        }
        self.default_config_id = request.config_id;
        Ok(szconfigmanager::SetDefaultConfigIdResponse {})
    }

    // szdiagnostic

    fn check_datastore_performance(
        &mut self,
        request: szdiagnostic::CheckDatastorePerformanceRequest,
    ) -> Result<szdiagnostic::CheckDatastorePerformanceResponse, Status> {
        Ok(szdiagnostic::CheckDatastorePerformanceResponse {
            result: json!({
                "numRecordsInserted": 200 * request.seconds_to_run,
                "insertTime": 1000 * request.seconds_to_run
            })
            .to_string(),
        })
    }

    fn get_datastore_info(
        &mut self,
        _: szdiagnostic::GetDatastoreInfoRequest,
    ) -> Result<szdiagnostic::GetDatastoreInfoResponse, Status> {
        Ok(szdiagnostic::GetDatastoreInfoResponse {
            result: json!({
                "dataStores": [{"id": "CORE", "type": "sqlite3", "location": "/tmp/sqlite/G2C.db"}]
            })
            .to_string(),
        })
    }

    fn get_feature(
        &mut self,
        request: szdiagnostic::GetFeatureRequest,
    ) -> Result<szdiagnostic::GetFeatureResponse, Status> {
        if request.feature_id <= 0 {
            return Err(engine_error(
                63,
                format!("Unknown feature ID [{}]", request.feature_id),
            ));
        }
        Ok(szdiagnostic::GetFeatureResponse {
            result: json!({
                "LIB_FEAT_ID": request.feature_id,
                "FTYPE_CODE": "NAME",
                "ELEMENTS": [{"FELEM_CODE": "FULL_NAME", "FELEM_VALUE": "Robert Smith"}]
            })
            .to_string(),
        })
    }

    fn purge_repository(
        &mut self,
        _: szdiagnostic::PurgeRepositoryRequest,
    ) -> Result<szdiagnostic::PurgeRepositoryResponse, Status> {
        self.records.clear();
        self.redo.clear();
        Ok(szdiagnostic::PurgeRepositoryResponse {})
    }

    fn diagnostic_reinitialize(
        &mut self,
        request: szdiagnostic::ReinitializeRequest,
    ) -> Result<szdiagnostic::ReinitializeResponse, Status> {
        self.reinitialize(request.config_id)?;
        Ok(szdiagnostic::ReinitializeResponse {})
    }

    fn get_entity_list_by_size(
        &mut self,
        request: szdiagnostic::GetEntityListBySizeRequest,
    ) -> Result<szdiagnostic::GetEntityListBySizeResponse, Status> {
        let lines = self
            .entity_ids()
            .into_iter()
            .filter(|id| self.entity_records(*id).len() as i64 == request.entity_size)
            .map(|id| format!("{}\n", json!({"ENTITY_ID": id, "ENTITY_SIZE": request.entity_size})))
            .collect();
        let handle = self.open_cursor(lines);
        Ok(szdiagnostic::GetEntityListBySizeResponse { result: handle })
    }

    fn fetch_next_entity_by_size(
        &mut self,
        request: szdiagnostic::FetchNextEntityBySizeRequest,
    ) -> Result<szdiagnostic::FetchNextEntityBySizeResponse, Status> {
        let result = self.fetch_cursor(request.entity_list_by_size_handle)?;
        Ok(szdiagnostic::FetchNextEntityBySizeResponse { result })
    }

    fn close_entity_list_by_size(
        &mut self,
        request: szdiagnostic::CloseEntityListBySizeRequest,
    ) -> Result<szdiagnostic::CloseEntityListBySizeResponse, Status> {
        self.close_cursor(request.entity_list_by_size_handle)?;
        Ok(szdiagnostic::CloseEntityListBySizeResponse {})
    }

    // szengine

    fn add_record(
        &mut self,
        request: szengine::AddRecordRequest,
    ) -> Result<szengine::AddRecordResponse, Status> {
        if !self.active_data_sources().contains(&request.data_source_code) {
            return Err(engine_error(
                2207,
                format!("Data source code [{}] does not exist.", request.data_source_code),
            ));
        }
        let data = parse_json(&request.record_definition)?;
        let key = (request.data_source_code.clone(), request.record_id.clone());
        let entity_id = match self.records.get(&key) {
            Some(existing) => existing.entity_id,
            None => {
                let id = self.next_entity_id;
                self.next_entity_id += 1;
                id
            }
        };
        self.records.insert(key, StoredRecord { entity_id, data });

        Ok(szengine::AddRecordResponse {
            result: Self::with_info(
                request.flags,
                &request.data_source_code,
                &request.record_id,
                &[entity_id],
            ),
        })
    }

    fn delete_record(
        &mut self,
        request: szengine::DeleteRecordRequest,
    ) -> Result<szengine::DeleteRecordResponse, Status> {
        let removed = self
            .records
            .remove(&(request.data_source_code.clone(), request.record_id.clone()));
        let affected: Vec<i64> = removed.iter().map(|record| record.entity_id).collect();
        Ok(szengine::DeleteRecordResponse {
            result: Self::with_info(
                request.flags,
                &request.data_source_code,
                &request.record_id,
                &affected,
            ),
        })
    }

    fn get_record(
        &mut self,
        request: szengine::GetRecordRequest,
    ) -> Result<szengine::GetRecordResponse, Status> {
        let record = self.record(&request.data_source_code, &request.record_id)?;
        let mut result = json!({
            "DATA_SOURCE": request.data_source_code,
            "RECORD_ID": request.record_id,
        });
        if request.flags & RECORD_JSON_DATA != 0 {
            result["JSON_DATA"] = record.data.clone();
        }
        Ok(szengine::GetRecordResponse {
            result: result.to_string(),
        })
    }

    fn reevaluate_entity(
        &mut self,
        request: szengine::ReevaluateEntityRequest,
    ) -> Result<szengine::ReevaluateEntityResponse, Status> {
        self.entity(request.entity_id)?;
        let result = if request.flags & WITH_INFO == 0 {
            String::new()
        } else {
            json!({"AFFECTED_ENTITIES": [{"ENTITY_ID": request.entity_id}]}).to_string()
        };
        Ok(szengine::ReevaluateEntityResponse { result })
    }

    fn reevaluate_record(
        &mut self,
        request: szengine::ReevaluateRecordRequest,
    ) -> Result<szengine::ReevaluateRecordResponse, Status> {
        let entity_id = self
            .record(&request.data_source_code, &request.record_id)?
            .entity_id;
        Ok(szengine::ReevaluateRecordResponse {
            result: Self::with_info(
                request.flags,
                &request.data_source_code,
                &request.record_id,
                &[entity_id],
            ),
        })
    }

    fn preprocess_record(
        &mut self,
        request: szengine::PreprocessRecordRequest,
    ) -> Result<szengine::PreprocessRecordResponse, Status> {
        let data = parse_json(&request.record_definition)?;
        let features: Vec<Value> = data
            .as_object()
            .map(|fields| fields.keys().map(|key| json!({"FEAT_DESC": key})).collect())
            .unwrap_or_default();
        Ok(szengine::PreprocessRecordResponse {
            result: json!({"FEATURES": features, "FLAGS": request.flags}).to_string(),
        })
    }

    fn get_entity_by_entity_id(
        &mut self,
        request: szengine::GetEntityByEntityIdRequest,
    ) -> Result<szengine::GetEntityByEntityIdResponse, Status> {
        Ok(szengine::GetEntityByEntityIdResponse {
            result: self.entity(request.entity_id)?.to_string(),
        })
    }

    fn get_entity_by_record_id(
        &mut self,
        request: szengine::GetEntityByRecordIdRequest,
    ) -> Result<szengine::GetEntityByRecordIdResponse, Status> {
        let entity_id = self
            .record(&request.data_source_code, &request.record_id)?
            .entity_id;
        Ok(szengine::GetEntityByRecordIdResponse {
            result: self.entity(entity_id)?.to_string(),
        })
    }

    fn search_by_attributes(
        &mut self,
        request: szengine::SearchByAttributesRequest,
    ) -> Result<szengine::SearchByAttributesResponse, Status> {
        let attributes = parse_json(&request.attributes)?;
        let wanted = attributes.as_object().cloned().unwrap_or_default();
        let mut ids: Vec<i64> = self
            .records
            .values()
            .filter(|record| {
                !wanted.is_empty()
                    && wanted
                        .iter()
                        .all(|(key, value)| record.data.get(key) == Some(value))
            })
            .map(|record| record.entity_id)
            .collect();
        ids.dedup();

        let entities: Vec<Value> = ids
            .into_iter()
            .map(|id| json!({"ENTITY": {"RESOLVED_ENTITY": {"ENTITY_ID": id}}}))
            .collect();
        Ok(szengine::SearchByAttributesResponse {
            result: json!({
                "RESOLVED_ENTITIES": entities,
                "SEARCH_PROFILE": request.search_profile
            })
            .to_string(),
        })
    }

    fn why_search(
        &mut self,
        request: szengine::WhySearchRequest,
    ) -> Result<szengine::WhySearchResponse, Status> {
        self.entity(request.entity_id)?;
        Ok(szengine::WhySearchResponse {
            result: json!({
                "WHY_RESULTS": [{"ENTITY_ID": request.entity_id}],
                "SEARCH_REQUEST": parse_json(&request.attributes)?
            })
            .to_string(),
        })
    }

    fn find_interesting_entities_by_entity_id(
        &mut self,
        request: szengine::FindInterestingEntitiesByEntityIdRequest,
    ) -> Result<szengine::FindInterestingEntitiesByEntityIdResponse, Status> {
        self.entity(request.entity_id)?;
        Ok(szengine::FindInterestingEntitiesByEntityIdResponse {
            result: json!({"INTERESTING_ENTITIES": {"ENTITIES": []}}).to_string(),
        })
    }

    fn find_interesting_entities_by_record_id(
        &mut self,
        request: szengine::FindInterestingEntitiesByRecordIdRequest,
    ) -> Result<szengine::FindInterestingEntitiesByRecordIdResponse, Status> {
        self.record(&request.data_source_code, &request.record_id)?;
        Ok(szengine::FindInterestingEntitiesByRecordIdResponse {
            result: json!({"INTERESTING_ENTITIES": {"ENTITIES": []}}).to_string(),
        })
    }

    fn find_network_by_entity_id(
        &mut self,
        request: szengine::FindNetworkByEntityIdRequest,
    ) -> Result<szengine::FindNetworkByEntityIdResponse, Status> {
        Ok(szengine::FindNetworkByEntityIdResponse {
            result: json!({
                "REQUEST": {
                    "ENTITY_IDS": parse_json(&request.entity_ids)?,
                    "MAX_DEGREES": request.max_degrees,
                    "BUILD_OUT_DEGREES": request.build_out_degrees,
                    "BUILD_OUT_MAX_ENTITIES": request.build_out_max_entities,
                    "FLAGS": request.flags
                },
                "ENTITY_PATHS": []
            })
            .to_string(),
        })
    }

    fn find_network_by_record_id(
        &mut self,
        request: szengine::FindNetworkByRecordIdRequest,
    ) -> Result<szengine::FindNetworkByRecordIdResponse, Status> {
        Ok(szengine::FindNetworkByRecordIdResponse {
            result: json!({
                "REQUEST": {
                    "RECORD_KEYS": parse_json(&request.record_keys)?,
                    "MAX_DEGREES": request.max_degrees,
                    "FLAGS": request.flags
                },
                "ENTITY_PATHS": []
            })
            .to_string(),
        })
    }

    fn find_path_by_entity_id(
        &mut self,
        request: szengine::FindPathByEntityIdRequest,
    ) -> Result<szengine::FindPathByEntityIdResponse, Status> {
        self.entity(request.start_entity_id)?;
        self.entity(request.end_entity_id)?;
        Ok(szengine::FindPathByEntityIdResponse {
            result: json!({
                "REQUEST": {
                    "START": request.start_entity_id,
                    "END": request.end_entity_id,
                    "MAX_DEGREES": request.max_degrees,
                    "AVOID": request.avoid_entity_ids,
                    "REQUIRED_DATA_SOURCES": request.required_data_sources,
                    "FLAGS": request.flags
                },
                "ENTITY_PATHS": [{
                    "START_ENTITY_ID": request.start_entity_id,
                    "END_ENTITY_ID": request.end_entity_id,
                    "ENTITIES": [request.start_entity_id, request.end_entity_id]
                }]
            })
            .to_string(),
        })
    }

    fn find_path_by_record_id(
        &mut self,
        request: szengine::FindPathByRecordIdRequest,
    ) -> Result<szengine::FindPathByRecordIdResponse, Status> {
        let start = self
            .record(&request.start_data_source_code, &request.start_record_id)?
            .entity_id;
        let end = self
            .record(&request.end_data_source_code, &request.end_record_id)?
            .entity_id;
        Ok(szengine::FindPathByRecordIdResponse {
            result: json!({
                "REQUEST": {
                    "AVOID": request.avoid_record_keys,
                    "REQUIRED_DATA_SOURCES": request.required_data_sources,
                    "MAX_DEGREES": request.max_degrees
                },
                "ENTITY_PATHS": [{"START_ENTITY_ID": start, "END_ENTITY_ID": end}]
            })
            .to_string(),
        })
    }

    fn why_entities(
        &mut self,
        request: szengine::WhyEntitiesRequest,
    ) -> Result<szengine::WhyEntitiesResponse, Status> {
        self.entity(request.entity_id1)?;
        self.entity(request.entity_id2)?;
        Ok(szengine::WhyEntitiesResponse {
            result: json!({
                "WHY_RESULTS": [{
                    "ENTITY_ID": request.entity_id1,
                    "ENTITY_ID_2": request.entity_id2,
                    "MATCH_INFO": {"WHY_KEY": "+NAME", "WHY_ERRULE_CODE": "CNAME"}
                }]
            })
            .to_string(),
        })
    }

    fn why_records(
        &mut self,
        request: szengine::WhyRecordsRequest,
    ) -> Result<szengine::WhyRecordsResponse, Status> {
        let first = self
            .record(&request.data_source_code1, &request.record_id1)?
            .entity_id;
        let second = self
            .record(&request.data_source_code2, &request.record_id2)?
            .entity_id;
        Ok(szengine::WhyRecordsResponse {
            result: json!({
                "WHY_RESULTS": [{
                    "INTERNAL_ID": first,
                    "ENTITY_ID": first,
                    "INTERNAL_ID_2": second,
                    "ENTITY_ID_2": second
                }]
            })
            .to_string(),
        })
    }

    fn why_record_in_entity(
        &mut self,
        request: szengine::WhyRecordInEntityRequest,
    ) -> Result<szengine::WhyRecordInEntityResponse, Status> {
        let entity_id = self
            .record(&request.data_source_code, &request.record_id)?
            .entity_id;
        Ok(szengine::WhyRecordInEntityResponse {
            result: json!({"WHY_RESULTS": [{"ENTITY_ID": entity_id}]}).to_string(),
        })
    }

    fn how_entity_by_entity_id(
        &mut self,
        request: szengine::HowEntityByEntityIdRequest,
    ) -> Result<szengine::HowEntityByEntityIdResponse, Status> {
        self.entity(request.entity_id)?;
        Ok(szengine::HowEntityByEntityIdResponse {
            result: json!({"HOW_RESULTS": {"RESOLUTION_STEPS": [], "FINAL_STATE": {"NEED_REEVALUATION": 0}}})
                .to_string(),
        })
    }

    fn get_virtual_entity_by_record_id(
        &mut self,
        request: szengine::GetVirtualEntityByRecordIdRequest,
    ) -> Result<szengine::GetVirtualEntityByRecordIdResponse, Status> {
        let keys = parse_json(&request.record_keys)?;
        let records = keys["RECORDS"].as_array().cloned().unwrap_or_default();
        for key in &records {
            self.record(
                key["DATA_SOURCE"].as_str().unwrap_or_default(),
                key["RECORD_ID"].as_str().unwrap_or_default(),
            )?;
        }
        Ok(szengine::GetVirtualEntityByRecordIdResponse {
            result: json!({"RESOLVED_ENTITY": {"ENTITY_ID": 0, "RECORDS": records}}).to_string(),
        })
    }

    fn count_redo_records(
        &mut self,
        _: szengine::CountRedoRecordsRequest,
    ) -> Result<szengine::CountRedoRecordsResponse, Status> {
        Ok(szengine::CountRedoRecordsResponse {
            result: self.redo.len() as i64,
        })
    }

    fn get_redo_record(
        &mut self,
        _: szengine::GetRedoRecordRequest,
    ) -> Result<szengine::GetRedoRecordResponse, Status> {
        Ok(szengine::GetRedoRecordResponse {
            result: self.redo.pop_front().unwrap_or_default(),
        })
    }

    fn process_redo_record(
        &mut self,
        request: szengine::ProcessRedoRecordRequest,
    ) -> Result<szengine::ProcessRedoRecordResponse, Status> {
        let redo = parse_json(&request.redo_record)?;
        Ok(szengine::ProcessRedoRecordResponse {
            result: Self::with_info(
                request.flags,
                redo["DATA_SOURCE"].as_str().unwrap_or_default(),
                redo["RECORD_ID"].as_str().unwrap_or_default(),
                &[],
            ),
        })
    }

    fn get_active_config_id(
        &mut self,
        _: szengine::GetActiveConfigIdRequest,
    ) -> Result<szengine::GetActiveConfigIdResponse, Status> {
        Ok(szengine::GetActiveConfigIdResponse {
            result: self.active_config_id,
        })
    }

    fn get_stats(
        &mut self,
        _: szengine::GetStatsRequest,
    ) -> Result<szengine::GetStatsResponse, Status> {
        Ok(szengine::GetStatsResponse {
            result: json!({"workload": {"loadedRecords": self.records.len()}}).to_string(),
        })
    }

    fn prime_engine(
        &mut self,
        _: szengine::PrimeEngineRequest,
    ) -> Result<szengine::PrimeEngineResponse, Status> {
        Ok(szengine::PrimeEngineResponse {})
    }

    fn engine_reinitialize(
        &mut self,
        request: szengine::ReinitializeRequest,
    ) -> Result<szengine::ReinitializeResponse, Status> {
        self.reinitialize(request.config_id)?;
        Ok(szengine::ReinitializeResponse {})
    }

    fn export_json_entity_report(
        &mut self,
        _: szengine::ExportJsonEntityReportRequest,
    ) -> Result<szengine::ExportJsonEntityReportResponse, Status> {
        let lines = self.entity_lines();
        Ok(szengine::ExportJsonEntityReportResponse {
            result: self.open_cursor(lines),
        })
    }

    fn export_csv_entity_report(
        &mut self,
        request: szengine::ExportCsvEntityReportRequest,
    ) -> Result<szengine::ExportCsvEntityReportResponse, Status> {
        let mut lines = vec![format!("{}\n", request.csv_column_list)];
        lines.extend(self.records.iter().map(|((data_source, record_id), record)| {
            format!("{},{data_source},{record_id}\n", record.entity_id)
        }));
        Ok(szengine::ExportCsvEntityReportResponse {
            result: self.open_cursor(lines),
        })
    }

    fn fetch_next(
        &mut self,
        request: szengine::FetchNextRequest,
    ) -> Result<szengine::FetchNextResponse, Status> {
        Ok(szengine::FetchNextResponse {
            result: self.fetch_cursor(request.export_handle)?,
        })
    }

    fn close_export(
        &mut self,
        request: szengine::CloseExportRequest,
    ) -> Result<szengine::CloseExportResponse, Status> {
        self.close_cursor(request.export_handle)?;
        Ok(szengine::CloseExportResponse {})
    }

    fn stream_export_json_entity_report(
        &mut self,
        _: szengine::StreamExportJsonEntityReportRequest,
    ) -> Result<Vec<szengine::StreamExportJsonEntityReportResponse>, Status> {
        Ok(self
            .entity_lines()
            .into_iter()
            .map(|result| szengine::StreamExportJsonEntityReportResponse { result })
            .collect())
    }
}

/// The fake server. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeSenzing {
    state: Arc<Mutex<State>>,
}

impl FakeSenzing {
    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

struct Handler<F>(F);

impl<Req, Res, F> tonic::server::UnaryService<Req> for Handler<F>
where
    F: FnMut(Req) -> Result<Res, Status>,
{
    type Response = Res;
    type Future = Ready<Result<tonic::Response<Res>, Status>>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        std::future::ready((self.0)(request.into_inner()).map(tonic::Response::new))
    }
}

struct StreamHandler<F>(F);

impl<Req, Res, F> tonic::server::ServerStreamingService<Req> for StreamHandler<F>
where
    F: FnMut(Req) -> Result<Vec<Res>, Status>,
    Res: Send + 'static,
{
    type Response = Res;
    type ResponseStream = tokio_stream::Iter<std::vec::IntoIter<Result<Res, Status>>>;
    type Future = Ready<Result<tonic::Response<Self::ResponseStream>, Status>>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        let items = (self.0)(request.into_inner()).map(|items| {
            let items: Vec<Result<Res, Status>> = items.into_iter().map(Ok).collect();
            tonic::Response::new(tokio_stream::iter(items))
        });
        std::future::ready(items)
    }
}

async fn unary<Req, Res, F>(request: http::Request<Body>, handler: F) -> http::Response<Body>
where
    Req: prost::Message + Default + Send + 'static,
    Res: prost::Message + Send + 'static,
    F: FnMut(Req) -> Result<Res, Status> + Send + 'static,
{
    let mut grpc = tonic::server::Grpc::new(ProstCodec::<Res, Req>::default());
    grpc.unary(Handler(handler), request).await
}

async fn server_streaming<Req, Res, F>(
    request: http::Request<Body>,
    handler: F,
) -> http::Response<Body>
where
    Req: prost::Message + Default + Send + 'static,
    Res: prost::Message + Send + 'static,
    F: FnMut(Req) -> Result<Vec<Res>, Status> + Send + 'static,
{
    let mut grpc = tonic::server::Grpc::new(ProstCodec::<Res, Req>::default());
    grpc.server_streaming(StreamHandler(handler), request).await
}

macro_rules! route {
    ($request:ident, $state:ident, $method:ident) => {
        unary($request, move |message| $state.lock().unwrap().$method(message)).await
    };
}

impl tonic::codegen::Service<http::Request<Body>> for FakeSenzing {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<Body>) -> Self::Future {
        let path = request.uri().path().to_string();
        {
            let mut state = self.state();
            state.calls.push(path.clone());
            state.last_tenant = request
                .headers()
                .get("x-tenant")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
        }

        let state = self.state.clone();
        Box::pin(async move {
            let response = match path.as_str() {
                "/szproduct.SzProduct/GetLicense" => route!(request, state, get_license),
                "/szproduct.SzProduct/GetVersion" => route!(request, state, get_version),

                "/szconfig.SzConfig/AddDataSource" => route!(request, state, add_data_source),
                "/szconfig.SzConfig/CloseConfig" => route!(request, state, close_config),
                "/szconfig.SzConfig/CreateConfig" => route!(request, state, create_config),
                "/szconfig.SzConfig/DeleteDataSource" => {
                    route!(request, state, delete_data_source)
                }
                "/szconfig.SzConfig/ExportConfig" => route!(request, state, export_config),
                "/szconfig.SzConfig/GetDataSources" => route!(request, state, get_data_sources),
                "/szconfig.SzConfig/ImportConfig" => route!(request, state, import_config),

                "/szconfigmanager.SzConfigManager/GetConfig" => route!(request, state, get_config),
                "/szconfigmanager.SzConfigManager/GetConfigs" => {
                    route!(request, state, get_configs)
                }
                "/szconfigmanager.SzConfigManager/GetDefaultConfigId" => {
                    route!(request, state, get_default_config_id)
                }
                "/szconfigmanager.SzConfigManager/RegisterConfig" => {
                    route!(request, state, register_config)
                }
                "/szconfigmanager.SzConfigManager/ReplaceDefaultConfigId" => {
                    route!(request, state, replace_default_config_id)
                }
                "/szconfigmanager.SzConfigManager/SetDefaultConfig" => {
                    route!(request, state, set_default_config)
                }
                "/szconfigmanager.SzConfigManager/SetDefaultConfigId" => {
                    route!(request, state, set_default_config_id)
                }

                "/szdiagnostic.SzDiagnostic/CheckDatastorePerformance" => {
                    route!(request, state, check_datastore_performance)
                }
                "/szdiagnostic.SzDiagnostic/CloseEntityListBySize" => {
                    route!(request, state, close_entity_list_by_size)
                }
                "/szdiagnostic.SzDiagnostic/FetchNextEntityBySize" => {
                    route!(request, state, fetch_next_entity_by_size)
                }
                "/szdiagnostic.SzDiagnostic/GetDatastoreInfo" => {
                    route!(request, state, get_datastore_info)
                }
                "/szdiagnostic.SzDiagnostic/GetEntityListBySize" => {
                    route!(request, state, get_entity_list_by_size)
                }
                "/szdiagnostic.SzDiagnostic/GetFeature" => route!(request, state, get_feature),
                "/szdiagnostic.SzDiagnostic/PurgeRepository" => {
                    route!(request, state, purge_repository)
                }
                "/szdiagnostic.SzDiagnostic/Reinitialize" => {
                    route!(request, state, diagnostic_reinitialize)
                }

                "/szengine.SzEngine/AddRecord" => route!(request, state, add_record),
                "/szengine.SzEngine/CloseExport" => route!(request, state, close_export),
                "/szengine.SzEngine/CountRedoRecords" => {
                    route!(request, state, count_redo_records)
                }
                "/szengine.SzEngine/DeleteRecord" => route!(request, state, delete_record),
                "/szengine.SzEngine/ExportCsvEntityReport" => {
                    route!(request, state, export_csv_entity_report)
                }
                "/szengine.SzEngine/ExportJsonEntityReport" => {
                    route!(request, state, export_json_entity_report)
                }
                "/szengine.SzEngine/FetchNext" => route!(request, state, fetch_next),
                "/szengine.SzEngine/FindInterestingEntitiesByEntityId" => {
                    route!(request, state, find_interesting_entities_by_entity_id)
                }
                "/szengine.SzEngine/FindInterestingEntitiesByRecordId" => {
                    route!(request, state, find_interesting_entities_by_record_id)
                }
                "/szengine.SzEngine/FindNetworkByEntityId" => {
                    route!(request, state, find_network_by_entity_id)
                }
                "/szengine.SzEngine/FindNetworkByRecordId" => {
                    route!(request, state, find_network_by_record_id)
                }
                "/szengine.SzEngine/FindPathByEntityId" => {
                    route!(request, state, find_path_by_entity_id)
                }
                "/szengine.SzEngine/FindPathByRecordId" => {
                    route!(request, state, find_path_by_record_id)
                }
                "/szengine.SzEngine/GetActiveConfigId" => {
                    route!(request, state, get_active_config_id)
                }
                "/szengine.SzEngine/GetEntityByEntityId" => {
                    route!(request, state, get_entity_by_entity_id)
                }
                "/szengine.SzEngine/GetEntityByRecordId" => {
                    route!(request, state, get_entity_by_record_id)
                }
                "/szengine.SzEngine/GetRecord" => route!(request, state, get_record),
                "/szengine.SzEngine/GetRedoRecord" => route!(request, state, get_redo_record),
                "/szengine.SzEngine/GetStats" => route!(request, state, get_stats),
                "/szengine.SzEngine/GetVirtualEntityByRecordId" => {
                    route!(request, state, get_virtual_entity_by_record_id)
                }
                "/szengine.SzEngine/HowEntityByEntityId" => {
                    route!(request, state, how_entity_by_entity_id)
                }
                "/szengine.SzEngine/PreprocessRecord" => {
                    route!(request, state, preprocess_record)
                }
                "/szengine.SzEngine/PrimeEngine" => route!(request, state, prime_engine),
                "/szengine.SzEngine/ProcessRedoRecord" => {
                    route!(request, state, process_redo_record)
                }
                "/szengine.SzEngine/ReevaluateEntity" => {
                    route!(request, state, reevaluate_entity)
                }
                "/szengine.SzEngine/ReevaluateRecord" => {
                    route!(request, state, reevaluate_record)
                }
                "/szengine.SzEngine/Reinitialize" => route!(request, state, engine_reinitialize),
                "/szengine.SzEngine/SearchByAttributes" => {
                    route!(request, state, search_by_attributes)
                }
                "/szengine.SzEngine/StreamExportJsonEntityReport" => {
                    server_streaming(request, move |message| {
                        state.lock().unwrap().stream_export_json_entity_report(message)
                    })
                    .await
                }
                "/szengine.SzEngine/WhyEntities" => route!(request, state, why_entities),
                "/szengine.SzEngine/WhyRecordInEntity" => {
                    route!(request, state, why_record_in_entity)
                }
                "/szengine.SzEngine/WhyRecords" => route!(request, state, why_records),
                "/szengine.SzEngine/WhySearch" => route!(request, state, why_search),

                other => Status::unimplemented(format!("unknown method {other}")).into_http(),
            };
            Ok(response)
        })
    }
}

/// Drops the first call to `path` with a transport failure, then behaves like `inner`.
#[derive(Debug, Clone)]
pub struct FailFirst {
    inner: FakeSenzing,
    path: &'static str,
    failed: Arc<AtomicBool>,
}

impl FailFirst {
    pub fn new(inner: FakeSenzing, path: &'static str) -> Self {
        Self {
            inner,
            path,
            failed: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl tonic::codegen::Service<http::Request<Body>> for FailFirst {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: http::Request<Body>) -> Self::Future {
        if request.uri().path() == self.path && !self.failed.swap(true, Ordering::SeqCst) {
            self.inner.state().calls.push(self.path.to_string());
            return Box::pin(async { Ok(Status::unavailable("connection reset").into_http()) });
        }
        self.inner.call(request)
    }
}
