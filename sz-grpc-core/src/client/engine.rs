use super::{
    impl_lifecycle,
    stub::{Rpc, Stub},
};
use crate::{
    BoxError,
    api::SzEngine,
    error::SzError,
    flags::SzFlags,
    generated::szengine as pb,
    grpc::client::GrpcClient,
    handle::ExportHandle,
    json::{self, JsonInput, RecordKey},
};
use async_trait::async_trait;
use futures_util::{StreamExt, stream::BoxStream};
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

const SERVICE: &str = "szengine.SzEngine";

const ADD_RECORD: Rpc = Rpc::new("add_record", "AddRecord");
const CLOSE_EXPORT: Rpc = Rpc::new("close_export", "CloseExport");
const COUNT_REDO_RECORDS: Rpc = Rpc::new("count_redo_records", "CountRedoRecords");
const DELETE_RECORD: Rpc = Rpc::new("delete_record", "DeleteRecord");
const EXPORT_CSV_ENTITY_REPORT: Rpc = Rpc::new("export_csv_entity_report", "ExportCsvEntityReport");
const EXPORT_JSON_ENTITY_REPORT: Rpc =
    Rpc::new("export_json_entity_report", "ExportJsonEntityReport");
const FETCH_NEXT: Rpc = Rpc::new("fetch_next", "FetchNext");
const FIND_INTERESTING_ENTITIES_BY_ENTITY_ID: Rpc = Rpc::new(
    "find_interesting_entities_by_entity_id",
    "FindInterestingEntitiesByEntityId",
);
const FIND_INTERESTING_ENTITIES_BY_RECORD_ID: Rpc = Rpc::new(
    "find_interesting_entities_by_record_id",
    "FindInterestingEntitiesByRecordId",
);
const FIND_NETWORK_BY_ENTITY_ID: Rpc =
    Rpc::new("find_network_by_entity_id", "FindNetworkByEntityId");
const FIND_NETWORK_BY_RECORD_ID: Rpc =
    Rpc::new("find_network_by_record_id", "FindNetworkByRecordId");
const FIND_PATH_BY_ENTITY_ID: Rpc = Rpc::new("find_path_by_entity_id", "FindPathByEntityId");
const FIND_PATH_BY_RECORD_ID: Rpc = Rpc::new("find_path_by_record_id", "FindPathByRecordId");
const GET_ACTIVE_CONFIG_ID: Rpc = Rpc::new("get_active_config_id", "GetActiveConfigId");
const GET_ENTITY_BY_ENTITY_ID: Rpc = Rpc::new("get_entity_by_entity_id", "GetEntityByEntityId");
const GET_ENTITY_BY_RECORD_ID: Rpc = Rpc::new("get_entity_by_record_id", "GetEntityByRecordId");
const GET_RECORD: Rpc = Rpc::new("get_record", "GetRecord");
const GET_REDO_RECORD: Rpc = Rpc::new("get_redo_record", "GetRedoRecord");
const GET_STATS: Rpc = Rpc::new("get_stats", "GetStats");
const GET_VIRTUAL_ENTITY_BY_RECORD_ID: Rpc =
    Rpc::new("get_virtual_entity_by_record_id", "GetVirtualEntityByRecordId");
const HOW_ENTITY_BY_ENTITY_ID: Rpc = Rpc::new("how_entity_by_entity_id", "HowEntityByEntityId");
const PREPROCESS_RECORD: Rpc = Rpc::new("preprocess_record", "PreprocessRecord");
const PRIME_ENGINE: Rpc = Rpc::new("prime_engine", "PrimeEngine");
const PROCESS_REDO_RECORD: Rpc = Rpc::new("process_redo_record", "ProcessRedoRecord");
const REEVALUATE_ENTITY: Rpc = Rpc::new("reevaluate_entity", "ReevaluateEntity");
const REEVALUATE_RECORD: Rpc = Rpc::new("reevaluate_record", "ReevaluateRecord");
const REINITIALIZE: Rpc = Rpc::new("reinitialize", "Reinitialize");
const SEARCH_BY_ATTRIBUTES: Rpc = Rpc::new("search_by_attributes", "SearchByAttributes");
const STREAM_EXPORT_JSON_ENTITY_REPORT: Rpc = Rpc::new(
    "stream_export_json_entity_report",
    "StreamExportJsonEntityReport",
);
const WHY_ENTITIES: Rpc = Rpc::new("why_entities", "WhyEntities");
const WHY_RECORD_IN_ENTITY: Rpc = Rpc::new("why_record_in_entity", "WhyRecordInEntity");
const WHY_RECORDS: Rpc = Rpc::new("why_records", "WhyRecords");
const WHY_SEARCH: Rpc = Rpc::new("why_search", "WhySearch");

/// [`SzEngine`] over gRPC.
#[derive(Debug, Clone)]
pub struct SzEngineGrpc<S = Channel> {
    stub: Stub<S>,
}

impl<S> SzEngineGrpc<S> {
    pub(crate) fn new(grpc: GrpcClient<S>) -> Self {
        Self {
            stub: Stub::new(SERVICE, "SzEngine", grpc),
        }
    }

    fn check_export(&self, operation: &'static str, handle: &ExportHandle) -> Result<(), SzError> {
        self.stub
            .handles()
            .check(operation, "export_handle", handle.as_raw())
    }
}

impl_lifecycle!(SzEngineGrpc);

#[async_trait]
impl<S> SzEngine for SzEngineGrpc<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        record_definition: JsonInput,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let response: pb::AddRecordResponse = self
            .stub
            .call_with(ADD_RECORD, || {
                Ok(pb::AddRecordRequest {
                    data_source_code: data_source_code.to_string(),
                    record_id: record_id.to_string(),
                    record_definition: record_definition
                        .render(ADD_RECORD.operation, "record_definition")?,
                    flags: flags.to_wire(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn delete_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::DeleteRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::DeleteRecordResponse = self.stub.call(DELETE_RECORD, request).await?;
        Ok(response.result)
    }

    async fn get_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::GetRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::GetRecordResponse = self.stub.call(GET_RECORD, request).await?;
        Ok(response.result)
    }

    async fn reevaluate_entity(&self, entity_id: i64, flags: SzFlags) -> Result<String, SzError> {
        let request = pb::ReevaluateEntityRequest {
            entity_id,
            flags: flags.to_wire(),
        };
        let response: pb::ReevaluateEntityResponse =
            self.stub.call(REEVALUATE_ENTITY, request).await?;
        Ok(response.result)
    }

    async fn reevaluate_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::ReevaluateRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::ReevaluateRecordResponse =
            self.stub.call(REEVALUATE_RECORD, request).await?;
        Ok(response.result)
    }

    async fn preprocess_record(
        &self,
        record_definition: JsonInput,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let response: pb::PreprocessRecordResponse = self
            .stub
            .call_with(PREPROCESS_RECORD, || {
                Ok(pb::PreprocessRecordRequest {
                    record_definition: record_definition
                        .render(PREPROCESS_RECORD.operation, "record_definition")?,
                    flags: flags.to_wire(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn get_entity_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::GetEntityByEntityIdRequest {
            entity_id,
            flags: flags.to_wire(),
        };
        let response: pb::GetEntityByEntityIdResponse =
            self.stub.call(GET_ENTITY_BY_ENTITY_ID, request).await?;
        Ok(response.result)
    }

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::GetEntityByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::GetEntityByRecordIdResponse =
            self.stub.call(GET_ENTITY_BY_RECORD_ID, request).await?;
        Ok(response.result)
    }

    async fn search_by_attributes(
        &self,
        attributes: JsonInput,
        search_profile: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let response: pb::SearchByAttributesResponse = self
            .stub
            .call_with(SEARCH_BY_ATTRIBUTES, || {
                Ok(pb::SearchByAttributesRequest {
                    attributes: attributes.render(SEARCH_BY_ATTRIBUTES.operation, "attributes")?,
                    search_profile: search_profile.to_string(),
                    flags: flags.to_wire(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn why_search(
        &self,
        attributes: JsonInput,
        entity_id: i64,
        search_profile: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let response: pb::WhySearchResponse = self
            .stub
            .call_with(WHY_SEARCH, || {
                Ok(pb::WhySearchRequest {
                    attributes: attributes.render(WHY_SEARCH.operation, "attributes")?,
                    entity_id,
                    search_profile: search_profile.to_string(),
                    flags: flags.to_wire(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindInterestingEntitiesByEntityIdRequest {
            entity_id,
            flags: flags.to_wire(),
        };
        let response: pb::FindInterestingEntitiesByEntityIdResponse = self
            .stub
            .call(FIND_INTERESTING_ENTITIES_BY_ENTITY_ID, request)
            .await?;
        Ok(response.result)
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindInterestingEntitiesByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::FindInterestingEntitiesByRecordIdResponse = self
            .stub
            .call(FIND_INTERESTING_ENTITIES_BY_RECORD_ID, request)
            .await?;
        Ok(response.result)
    }

    async fn find_network_by_entity_id(
        &self,
        entity_ids: &[i64],
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindNetworkByEntityIdRequest {
            entity_ids: json::entity_ids(entity_ids),
            max_degrees,
            build_out_degrees,
            build_out_max_entities,
            flags: flags.to_wire(),
        };
        let response: pb::FindNetworkByEntityIdResponse =
            self.stub.call(FIND_NETWORK_BY_ENTITY_ID, request).await?;
        Ok(response.result)
    }

    async fn find_network_by_record_id(
        &self,
        record_keys: &[RecordKey],
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindNetworkByRecordIdRequest {
            record_keys: json::record_keys(record_keys),
            max_degrees,
            build_out_degrees,
            build_out_max_entities,
            flags: flags.to_wire(),
        };
        let response: pb::FindNetworkByRecordIdResponse =
            self.stub.call(FIND_NETWORK_BY_RECORD_ID, request).await?;
        Ok(response.result)
    }

    async fn find_path_by_entity_id(
        &self,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &[i64],
        required_data_sources: &[&str],
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindPathByEntityIdRequest {
            start_entity_id,
            end_entity_id,
            max_degrees,
            avoid_entity_ids: json::entity_ids(avoid_entity_ids),
            required_data_sources: json::data_sources(required_data_sources),
            flags: flags.to_wire(),
        };
        let response: pb::FindPathByEntityIdResponse =
            self.stub.call(FIND_PATH_BY_ENTITY_ID, request).await?;
        Ok(response.result)
    }

    async fn find_path_by_record_id(
        &self,
        start: &RecordKey,
        end: &RecordKey,
        max_degrees: i64,
        avoid_record_keys: &[RecordKey],
        required_data_sources: &[&str],
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::FindPathByRecordIdRequest {
            start_data_source_code: start.data_source_code.clone(),
            start_record_id: start.record_id.clone(),
            end_data_source_code: end.data_source_code.clone(),
            end_record_id: end.record_id.clone(),
            max_degrees,
            avoid_record_keys: json::record_keys(avoid_record_keys),
            required_data_sources: json::data_sources(required_data_sources),
            flags: flags.to_wire(),
        };
        let response: pb::FindPathByRecordIdResponse =
            self.stub.call(FIND_PATH_BY_RECORD_ID, request).await?;
        Ok(response.result)
    }

    async fn why_entities(
        &self,
        entity_id1: i64,
        entity_id2: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::WhyEntitiesRequest {
            entity_id1,
            entity_id2,
            flags: flags.to_wire(),
        };
        let response: pb::WhyEntitiesResponse = self.stub.call(WHY_ENTITIES, request).await?;
        Ok(response.result)
    }

    async fn why_records(
        &self,
        first: &RecordKey,
        second: &RecordKey,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::WhyRecordsRequest {
            data_source_code1: first.data_source_code.clone(),
            record_id1: first.record_id.clone(),
            data_source_code2: second.data_source_code.clone(),
            record_id2: second.record_id.clone(),
            flags: flags.to_wire(),
        };
        let response: pb::WhyRecordsResponse = self.stub.call(WHY_RECORDS, request).await?;
        Ok(response.result)
    }

    async fn why_record_in_entity(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::WhyRecordInEntityRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::WhyRecordInEntityResponse =
            self.stub.call(WHY_RECORD_IN_ENTITY, request).await?;
        Ok(response.result)
    }

    async fn how_entity_by_entity_id(
        &self,
        entity_id: i64,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::HowEntityByEntityIdRequest {
            entity_id,
            flags: flags.to_wire(),
        };
        let response: pb::HowEntityByEntityIdResponse =
            self.stub.call(HOW_ENTITY_BY_ENTITY_ID, request).await?;
        Ok(response.result)
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        record_keys: &[RecordKey],
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let response: pb::GetVirtualEntityByRecordIdResponse = self
            .stub
            .call_with(GET_VIRTUAL_ENTITY_BY_RECORD_ID, || {
                if record_keys.is_empty() {
                    return Err(SzError::usage(
                        GET_VIRTUAL_ENTITY_BY_RECORD_ID.operation,
                        "record_keys",
                        "at least one record is required",
                    ));
                }
                Ok(pb::GetVirtualEntityByRecordIdRequest {
                    record_keys: json::record_keys(record_keys),
                    flags: flags.to_wire(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn count_redo_records(&self) -> Result<i64, SzError> {
        let response: pb::CountRedoRecordsResponse = self
            .stub
            .call(COUNT_REDO_RECORDS, pb::CountRedoRecordsRequest {})
            .await?;
        Ok(response.result)
    }

    async fn get_redo_record(&self) -> Result<String, SzError> {
        let response: pb::GetRedoRecordResponse = self
            .stub
            .call(GET_REDO_RECORD, pb::GetRedoRecordRequest {})
            .await?;
        Ok(response.result)
    }

    async fn process_redo_record(
        &self,
        redo_record: &str,
        flags: SzFlags,
    ) -> Result<String, SzError> {
        let request = pb::ProcessRedoRecordRequest {
            redo_record: redo_record.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::ProcessRedoRecordResponse =
            self.stub.call(PROCESS_REDO_RECORD, request).await?;
        Ok(response.result)
    }

    async fn get_active_config_id(&self) -> Result<i64, SzError> {
        let response: pb::GetActiveConfigIdResponse = self
            .stub
            .call(GET_ACTIVE_CONFIG_ID, pb::GetActiveConfigIdRequest {})
            .await?;
        Ok(response.result)
    }

    async fn get_stats(&self) -> Result<String, SzError> {
        let response: pb::GetStatsResponse =
            self.stub.call(GET_STATS, pb::GetStatsRequest {}).await?;
        Ok(response.result)
    }

    async fn prime_engine(&self) -> Result<(), SzError> {
        let _: pb::PrimeEngineResponse =
            self.stub.call(PRIME_ENGINE, pb::PrimeEngineRequest {}).await?;
        Ok(())
    }

    async fn reinitialize(&self, config_id: i64) -> Result<(), SzError> {
        let _: pb::ReinitializeResponse = self
            .stub
            .call(REINITIALIZE, pb::ReinitializeRequest { config_id })
            .await?;
        Ok(())
    }

    async fn export_json_entity_report(&self, flags: SzFlags) -> Result<ExportHandle, SzError> {
        let request = pb::ExportJsonEntityReportRequest {
            flags: flags.to_wire(),
        };
        let response: pb::ExportJsonEntityReportResponse =
            self.stub.call(EXPORT_JSON_ENTITY_REPORT, request).await?;
        self.stub.handles().register(response.result);
        Ok(ExportHandle::from_raw(response.result))
    }

    async fn export_csv_entity_report(
        &self,
        csv_column_list: &str,
        flags: SzFlags,
    ) -> Result<ExportHandle, SzError> {
        let request = pb::ExportCsvEntityReportRequest {
            csv_column_list: csv_column_list.to_string(),
            flags: flags.to_wire(),
        };
        let response: pb::ExportCsvEntityReportResponse =
            self.stub.call(EXPORT_CSV_ENTITY_REPORT, request).await?;
        self.stub.handles().register(response.result);
        Ok(ExportHandle::from_raw(response.result))
    }

    async fn fetch_next(&self, export_handle: &ExportHandle) -> Result<Option<String>, SzError> {
        let response: pb::FetchNextResponse = self
            .stub
            .call_with(FETCH_NEXT, || {
                self.check_export(FETCH_NEXT.operation, export_handle)?;
                Ok(pb::FetchNextRequest {
                    export_handle: export_handle.as_raw(),
                })
            })
            .await?;
        Ok(Some(response.result).filter(|chunk| !chunk.is_empty()))
    }

    async fn close_export(&self, export_handle: ExportHandle) -> Result<(), SzError> {
        let _: pb::CloseExportResponse = self
            .stub
            .call_with(CLOSE_EXPORT, || {
                self.stub.handles().check(
                    CLOSE_EXPORT.operation,
                    "export_handle",
                    export_handle.as_raw(),
                )?;
                Ok(pb::CloseExportRequest {
                    export_handle: export_handle.as_raw(),
                })
            })
            .await?;
        self.stub.handles().release(export_handle.as_raw());
        Ok(())
    }

    async fn stream_export_json_entity_report(
        &self,
        flags: SzFlags,
    ) -> Result<BoxStream<'static, Result<String, SzError>>, SzError> {
        let request = pb::StreamExportJsonEntityReportRequest {
            flags: flags.to_wire(),
        };
        let stream = self
            .stub
            .call_streaming::<_, pb::StreamExportJsonEntityReportResponse>(
                STREAM_EXPORT_JSON_ENTITY_REPORT,
                request,
            )
            .await?;

        let operation = STREAM_EXPORT_JSON_ENTITY_REPORT.operation;
        Ok(stream
            .map(move |item| {
                item.map(|response| response.result)
                    .map_err(|status| SzError::from_status(operation, status))
            })
            .boxed())
    }
}
