//! # Typed gRPC Client
//!
//! This module wraps a standard `tonic` client to provide the single transport used by
//! every Senzing subsystem wrapper. It is agnostic to the specific Protobuf messages being
//! exchanged: callers hand it a method path and a `prost` message and get the decoded
//! response back.
//!
//! ## How it works
//!
//! The [`GrpcClient`] uses `tonic_prost::ProstCodec` to encode requests and decode responses.
//! The HTTP/2 path (e.g. `/szengine.SzEngine/AddRecord`) is built from the service and method
//! names, so no generated client stubs are needed.
//!
//! ## Features
//!
//! * **Shared metadata**: headers configured on the connection are attached to every request.
//! * **Per-call deadline**: an optional timeout is forwarded as the `grpc-timeout` header.
//! * **Access Patterns**: Unary and Server Streaming calls, the only shapes the Senzing
//!   services use.
use crate::BoxError;
use http_body::Body as HttpBody;
use std::{str::FromStr, time::Duration};
use tonic::{Streaming, client::GrpcService, metadata::MetadataMap, transport::Channel};
use tonic_prost::ProstCodec;

#[derive(thiserror::Error, Debug)]
pub enum GrpcRequestError {
    #[error("Internal error, the client was not ready: '{0}'")]
    ClientNotReady(#[source] BoxError),
}

/// A generic client that performs typed calls against any Senzing service path.
#[derive(Debug, Clone)]
pub struct GrpcClient<S = Channel> {
    client: tonic::client::Grpc<S>,
    metadata: MetadataMap,
    timeout: Option<Duration>,
}

impl<S> GrpcClient<S> {
    pub fn new(service: S) -> Self {
        let client = tonic::client::Grpc::new(service);
        Self {
            client,
            metadata: MetadataMap::new(),
            timeout: None,
        }
    }

    /// Attaches `metadata` to every request sent through this client.
    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }

    /// Sets the deadline forwarded with every request.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        *request.metadata_mut() = self.metadata.clone();
        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }
        request
    }
}

impl<S> GrpcClient<S>
where
    S: GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Performs a Unary gRPC call (Single Request -> Single Response).
    ///
    /// # Returns
    /// * `Ok(Ok(Res))` - Successful RPC execution.
    /// * `Ok(Err(Status))` - RPC executed, but server returned an error.
    /// * `Err(GrpcRequestError)` - Failed to send request or connect.
    pub async fn unary<Req, Res>(
        &self,
        path: http::uri::PathAndQuery,
        message: Req,
    ) -> Result<Result<Res, tonic::Status>, GrpcRequestError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let mut client = self.client.clone();
        client
            .ready()
            .await
            .map_err(|e| GrpcRequestError::ClientNotReady(e.into()))?;

        let codec = ProstCodec::<Req, Res>::default();
        let request = self.build_request(message);

        match client.unary(request, path, codec).await {
            Ok(response) => Ok(Ok(response.into_inner())),
            Err(status) => Ok(Err(status)),
        }
    }

    /// Performs a Server Streaming gRPC call (Single Request -> Stream of Responses).
    ///
    /// # Returns
    ///
    /// * `Ok(Ok(Streaming))` - Successful RPC execution.
    /// * `Ok(Err(Status))` - RPC executed, but server returned an error.
    /// * `Err(GrpcRequestError)` - Failed to send request or connect.
    pub async fn server_streaming<Req, Res>(
        &self,
        path: http::uri::PathAndQuery,
        message: Req,
    ) -> Result<Result<Streaming<Res>, tonic::Status>, GrpcRequestError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let mut client = self.client.clone();
        client
            .ready()
            .await
            .map_err(|e| GrpcRequestError::ClientNotReady(e.into()))?;

        let codec = ProstCodec::<Req, Res>::default();
        let request = self.build_request(message);

        match client.server_streaming(request, path, codec).await {
            Ok(response) => Ok(Ok(response.into_inner())),
            Err(status) => Ok(Err(status)),
        }
    }
}

/// Builds the HTTP/2 path for `method` on the fully qualified `service`.
pub fn http_path(service: &str, method: &str) -> http::uri::PathAndQuery {
    let path = format!("/{service}/{method}");
    http::uri::PathAndQuery::from_str(&path).expect("valid gRPC path")
}
