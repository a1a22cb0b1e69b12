use super::{
    impl_lifecycle,
    stub::{Rpc, Stub},
};
use crate::{
    BoxError, api::SzConfig, error::SzError, generated::szconfig as pb, grpc::client::GrpcClient,
    handle::ConfigHandle, json::JsonInput,
};
use async_trait::async_trait;
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

const SERVICE: &str = "szconfig.SzConfig";

const ADD_DATA_SOURCE: Rpc = Rpc::new("add_data_source", "AddDataSource");
const CLOSE_CONFIG: Rpc = Rpc::new("close_config", "CloseConfig");
const CREATE_CONFIG: Rpc = Rpc::new("create_config", "CreateConfig");
const DELETE_DATA_SOURCE: Rpc = Rpc::new("delete_data_source", "DeleteDataSource");
const EXPORT_CONFIG: Rpc = Rpc::new("export_config", "ExportConfig");
const GET_DATA_SOURCES: Rpc = Rpc::new("get_data_sources", "GetDataSources");
const IMPORT_CONFIG: Rpc = Rpc::new("import_config", "ImportConfig");

/// [`SzConfig`] over gRPC.
///
/// Only handles returned by this wrapper (or one of its clones) are accepted.
#[derive(Debug, Clone)]
pub struct SzConfigGrpc<S = Channel> {
    stub: Stub<S>,
}

impl<S> SzConfigGrpc<S> {
    pub(crate) fn new(grpc: GrpcClient<S>) -> Self {
        Self {
            stub: Stub::new(SERVICE, "SzConfig", grpc),
        }
    }

    fn opened(&self, raw: i64) -> ConfigHandle {
        self.stub.handles().register(raw);
        ConfigHandle::from_raw(raw)
    }
}

impl_lifecycle!(SzConfigGrpc);

#[async_trait]
impl<S> SzConfig for SzConfigGrpc<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn create_config(&self) -> Result<ConfigHandle, SzError> {
        let response: pb::CreateConfigResponse =
            self.stub.call(CREATE_CONFIG, pb::CreateConfigRequest {}).await?;
        Ok(self.opened(response.result))
    }

    async fn import_config(&self, config_definition: JsonInput) -> Result<ConfigHandle, SzError> {
        let response: pb::ImportConfigResponse = self
            .stub
            .call_with(IMPORT_CONFIG, || {
                Ok(pb::ImportConfigRequest {
                    config_definition: config_definition
                        .render(IMPORT_CONFIG.operation, "config_definition")?,
                })
            })
            .await?;
        Ok(self.opened(response.result))
    }

    async fn export_config(&self, config_handle: &ConfigHandle) -> Result<String, SzError> {
        let response: pb::ExportConfigResponse = self
            .stub
            .call_with(EXPORT_CONFIG, || {
                self.stub.handles().check(
                    EXPORT_CONFIG.operation,
                    "config_handle",
                    config_handle.as_raw(),
                )?;
                Ok(pb::ExportConfigRequest {
                    config_handle: config_handle.as_raw(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn close_config(&self, config_handle: ConfigHandle) -> Result<(), SzError> {
        let _: pb::CloseConfigResponse = self
            .stub
            .call_with(CLOSE_CONFIG, || {
                self.stub.handles().check(
                    CLOSE_CONFIG.operation,
                    "config_handle",
                    config_handle.as_raw(),
                )?;
                Ok(pb::CloseConfigRequest {
                    config_handle: config_handle.as_raw(),
                })
            })
            .await?;
        self.stub.handles().release(config_handle.as_raw());
        Ok(())
    }

    async fn add_data_source(
        &self,
        config_handle: &ConfigHandle,
        data_source_definition: JsonInput,
    ) -> Result<String, SzError> {
        let response: pb::AddDataSourceResponse = self
            .stub
            .call_with(ADD_DATA_SOURCE, || {
                self.stub.handles().check(
                    ADD_DATA_SOURCE.operation,
                    "config_handle",
                    config_handle.as_raw(),
                )?;
                Ok(pb::AddDataSourceRequest {
                    config_handle: config_handle.as_raw(),
                    data_source_definition: data_source_definition
                        .render(ADD_DATA_SOURCE.operation, "data_source_definition")?,
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn delete_data_source(
        &self,
        config_handle: &ConfigHandle,
        data_source_definition: JsonInput,
    ) -> Result<(), SzError> {
        let _: pb::DeleteDataSourceResponse = self
            .stub
            .call_with(DELETE_DATA_SOURCE, || {
                self.stub.handles().check(
                    DELETE_DATA_SOURCE.operation,
                    "config_handle",
                    config_handle.as_raw(),
                )?;
                Ok(pb::DeleteDataSourceRequest {
                    config_handle: config_handle.as_raw(),
                    data_source_definition: data_source_definition
                        .render(DELETE_DATA_SOURCE.operation, "data_source_definition")?,
                })
            })
            .await?;
        Ok(())
    }

    async fn get_data_sources(&self, config_handle: &ConfigHandle) -> Result<String, SzError> {
        let response: pb::GetDataSourcesResponse = self
            .stub
            .call_with(GET_DATA_SOURCES, || {
                self.stub.handles().check(
                    GET_DATA_SOURCES.operation,
                    "config_handle",
                    config_handle.as_raw(),
                )?;
                Ok(pb::GetDataSourcesRequest {
                    config_handle: config_handle.as_raw(),
                })
            })
            .await?;
        Ok(response.result)
    }
}
