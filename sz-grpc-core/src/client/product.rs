use super::{
    impl_lifecycle,
    stub::{Rpc, Stub},
};
use crate::{
    BoxError, api::SzProduct, error::SzError, generated::szproduct as pb, grpc::client::GrpcClient,
};
use async_trait::async_trait;
use http_body::Body as HttpBody;
use tonic::{client::GrpcService, transport::Channel};

const SERVICE: &str = "szproduct.SzProduct";

const GET_LICENSE: Rpc = Rpc::new("get_license", "GetLicense");
const GET_VERSION: Rpc = Rpc::new("get_version", "GetVersion");

/// [`SzProduct`] over gRPC.
#[derive(Debug, Clone)]
pub struct SzProductGrpc<S = Channel> {
    stub: Stub<S>,
}

impl<S> SzProductGrpc<S> {
    pub(crate) fn new(grpc: GrpcClient<S>) -> Self {
        Self {
            stub: Stub::new(SERVICE, "SzProduct", grpc),
        }
    }
}

impl_lifecycle!(SzProductGrpc);

#[async_trait]
impl<S> SzProduct for SzProductGrpc<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    async fn get_license(&self) -> Result<String, SzError> {
        let response: pb::GetLicenseResponse =
            self.stub.call(GET_LICENSE, pb::GetLicenseRequest {}).await?;
        Ok(response.result)
    }

    async fn get_version(&self) -> Result<String, SzError> {
        let response: pb::GetVersionResponse =
            self.stub.call(GET_VERSION, pb::GetVersionRequest {}).await?;
        Ok(response.result)
    }
}
