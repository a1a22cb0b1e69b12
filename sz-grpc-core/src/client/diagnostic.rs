use super::{
    impl_lifecycle,
    stub::{Rpc, Stub},
};
use crate::{
    BoxError, api::SzDiagnostic, error::SzError, generated::szdiagnostic as pb,
    grpc::client::GrpcClient, handle::EntityListHandle,
};
use async_trait::async_trait;
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

const SERVICE: &str = "szdiagnostic.SzDiagnostic";

const CHECK_DATASTORE_PERFORMANCE: Rpc =
    Rpc::new("check_datastore_performance", "CheckDatastorePerformance");
const CLOSE_ENTITY_LIST_BY_SIZE: Rpc =
    Rpc::new("close_entity_list_by_size", "CloseEntityListBySize");
const FETCH_NEXT_ENTITY_BY_SIZE: Rpc =
    Rpc::new("fetch_next_entity_by_size", "FetchNextEntityBySize");
const GET_DATASTORE_INFO: Rpc = Rpc::new("get_datastore_info", "GetDatastoreInfo");
const GET_ENTITY_LIST_BY_SIZE: Rpc = Rpc::new("get_entity_list_by_size", "GetEntityListBySize");
const GET_FEATURE: Rpc = Rpc::new("get_feature", "GetFeature");
const PURGE_REPOSITORY: Rpc = Rpc::new("purge_repository", "PurgeRepository");
const REINITIALIZE: Rpc = Rpc::new("reinitialize", "Reinitialize");

/// [`SzDiagnostic`] over gRPC.
#[derive(Debug, Clone)]
pub struct SzDiagnosticGrpc<S = Channel> {
    stub: Stub<S>,
}

impl<S> SzDiagnosticGrpc<S> {
    pub(crate) fn new(grpc: GrpcClient<S>) -> Self {
        Self {
            stub: Stub::new(SERVICE, "SzDiagnostic", grpc),
        }
    }
}

impl_lifecycle!(SzDiagnosticGrpc);

#[async_trait]
impl<S> SzDiagnostic for SzDiagnosticGrpc<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn check_datastore_performance(&self, seconds_to_run: i32) -> Result<String, SzError> {
        let response: pb::CheckDatastorePerformanceResponse = self
            .stub
            .call_with(CHECK_DATASTORE_PERFORMANCE, || {
                if seconds_to_run < 0 {
                    return Err(SzError::usage(
                        CHECK_DATASTORE_PERFORMANCE.operation,
                        "seconds_to_run",
                        format!("must not be negative, got {seconds_to_run}"),
                    ));
                }
                Ok(pb::CheckDatastorePerformanceRequest { seconds_to_run })
            })
            .await?;
        Ok(response.result)
    }

    async fn get_datastore_info(&self) -> Result<String, SzError> {
        let response: pb::GetDatastoreInfoResponse = self
            .stub
            .call(GET_DATASTORE_INFO, pb::GetDatastoreInfoRequest {})
            .await?;
        Ok(response.result)
    }

    async fn get_feature(&self, feature_id: i64) -> Result<String, SzError> {
        let response: pb::GetFeatureResponse = self
            .stub
            .call(GET_FEATURE, pb::GetFeatureRequest { feature_id })
            .await?;
        Ok(response.result)
    }

    async fn purge_repository(&self) -> Result<(), SzError> {
        let _: pb::PurgeRepositoryResponse = self
            .stub
            .call(PURGE_REPOSITORY, pb::PurgeRepositoryRequest {})
            .await?;
        tracing::info!("repository purged");
        Ok(())
    }

    async fn reinitialize(&self, config_id: i64) -> Result<(), SzError> {
        let _: pb::ReinitializeResponse = self
            .stub
            .call(REINITIALIZE, pb::ReinitializeRequest { config_id })
            .await?;
        Ok(())
    }

    async fn get_entity_list_by_size(&self, entity_size: i64) -> Result<EntityListHandle, SzError> {
        let response: pb::GetEntityListBySizeResponse = self
            .stub
            .call(GET_ENTITY_LIST_BY_SIZE, pb::GetEntityListBySizeRequest { entity_size })
            .await?;
        self.stub.handles().register(response.result);
        Ok(EntityListHandle::from_raw(response.result))
    }

    async fn fetch_next_entity_by_size(
        &self,
        entity_list_handle: &EntityListHandle,
    ) -> Result<Option<String>, SzError> {
        let response: pb::FetchNextEntityBySizeResponse = self
            .stub
            .call_with(FETCH_NEXT_ENTITY_BY_SIZE, || {
                self.stub.handles().check(
                    FETCH_NEXT_ENTITY_BY_SIZE.operation,
                    "entity_list_handle",
                    entity_list_handle.as_raw(),
                )?;
                Ok(pb::FetchNextEntityBySizeRequest {
                    entity_list_by_size_handle: entity_list_handle.as_raw(),
                })
            })
            .await?;
        Ok(Some(response.result).filter(|chunk| !chunk.is_empty()))
    }

    async fn close_entity_list_by_size(
        &self,
        entity_list_handle: EntityListHandle,
    ) -> Result<(), SzError> {
        let _: pb::CloseEntityListBySizeResponse = self
            .stub
            .call_with(CLOSE_ENTITY_LIST_BY_SIZE, || {
                self.stub.handles().check(
                    CLOSE_ENTITY_LIST_BY_SIZE.operation,
                    "entity_list_handle",
                    entity_list_handle.as_raw(),
                )?;
                Ok(pb::CloseEntityListBySizeRequest {
                    entity_list_by_size_handle: entity_list_handle.as_raw(),
                })
            })
            .await?;
        self.stub.handles().release(entity_list_handle.as_raw());
        Ok(())
    }
}
