use super::{
    impl_lifecycle,
    stub::{Rpc, Stub},
};
use crate::{
    BoxError, api::SzConfigManager, error::SzError, generated::szconfigmanager as pb,
    grpc::client::GrpcClient, json::JsonInput,
};
use async_trait::async_trait;
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

const SERVICE: &str = "szconfigmanager.SzConfigManager";

const GET_CONFIG: Rpc = Rpc::new("get_config", "GetConfig");
const GET_CONFIGS: Rpc = Rpc::new("get_configs", "GetConfigs");
const GET_DEFAULT_CONFIG_ID: Rpc = Rpc::new("get_default_config_id", "GetDefaultConfigId");
const REGISTER_CONFIG: Rpc = Rpc::new("register_config", "RegisterConfig");
const REPLACE_DEFAULT_CONFIG_ID: Rpc =
    Rpc::new("replace_default_config_id", "ReplaceDefaultConfigId");
const SET_DEFAULT_CONFIG: Rpc = Rpc::new("set_default_config", "SetDefaultConfig");
const SET_DEFAULT_CONFIG_ID: Rpc = Rpc::new("set_default_config_id", "SetDefaultConfigId");

/// [`SzConfigManager`] over gRPC.
#[derive(Debug, Clone)]
pub struct SzConfigManagerGrpc<S = Channel> {
    stub: Stub<S>,
}

impl<S> SzConfigManagerGrpc<S> {
    pub(crate) fn new(grpc: GrpcClient<S>) -> Self {
        Self {
            stub: Stub::new(SERVICE, "SzConfigManager", grpc),
        }
    }
}

impl_lifecycle!(SzConfigManagerGrpc);

#[async_trait]
impl<S> SzConfigManager for SzConfigManagerGrpc<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn register_config(
        &self,
        config_definition: JsonInput,
        config_comment: &str,
    ) -> Result<i64, SzError> {
        let response: pb::RegisterConfigResponse = self
            .stub
            .call_with(REGISTER_CONFIG, || {
                Ok(pb::RegisterConfigRequest {
                    config_definition: config_definition
                        .render(REGISTER_CONFIG.operation, "config_definition")?,
                    config_comment: config_comment.to_string(),
                })
            })
            .await?;
        Ok(response.result)
    }

    async fn get_config(&self, config_id: i64) -> Result<String, SzError> {
        let response: pb::GetConfigResponse = self
            .stub
            .call(GET_CONFIG, pb::GetConfigRequest { config_id })
            .await?;
        Ok(response.result)
    }

    async fn get_configs(&self) -> Result<String, SzError> {
        let response: pb::GetConfigsResponse =
            self.stub.call(GET_CONFIGS, pb::GetConfigsRequest {}).await?;
        Ok(response.result)
    }

    async fn get_default_config_id(&self) -> Result<i64, SzError> {
        let response: pb::GetDefaultConfigIdResponse = self
            .stub
            .call(GET_DEFAULT_CONFIG_ID, pb::GetDefaultConfigIdRequest {})
            .await?;
        Ok(response.result)
    }

    async fn replace_default_config_id(
        &self,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> Result<(), SzError> {
        let request = pb::ReplaceDefaultConfigIdRequest {
            current_default_config_id,
            new_default_config_id,
        };
        let _: pb::ReplaceDefaultConfigIdResponse =
            self.stub.call(REPLACE_DEFAULT_CONFIG_ID, request).await?;
        Ok(())
    }

    async fn set_default_config_id(&self, config_id: i64) -> Result<(), SzError> {
        let _: pb::SetDefaultConfigIdResponse = self
            .stub
            .call(SET_DEFAULT_CONFIG_ID, pb::SetDefaultConfigIdRequest { config_id })
            .await?;
        Ok(())
    }

    async fn set_default_config(
        &self,
        config_definition: JsonInput,
        config_comment: &str,
    ) -> Result<i64, SzError> {
        let response: pb::SetDefaultConfigResponse = self
            .stub
            .call_with(SET_DEFAULT_CONFIG, || {
                Ok(pb::SetDefaultConfigRequest {
                    config_definition: config_definition
                        .render(SET_DEFAULT_CONFIG.operation, "config_definition")?,
                    config_comment: config_comment.to_string(),
                })
            })
            .await?;
        Ok(response.result)
    }
}
