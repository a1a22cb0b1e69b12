//! Shared plumbing behind every subsystem wrapper: lifecycle admission, request
//! logging and status translation for one remote procedure.
use crate::{
    BoxError,
    error::SzError,
    grpc::client::{GrpcClient, http_path},
    handle::HandleRegistry,
    lifecycle::Lifecycle,
};
use http_body::Body as HttpBody;
use tonic::{Streaming, client::GrpcService, transport::Channel};

/// A remote procedure: the public operation name and the method on the wire.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rpc {
    pub(crate) operation: &'static str,
    pub(crate) method: &'static str,
}

impl Rpc {
    pub(crate) const fn new(operation: &'static str, method: &'static str) -> Self {
        Self { operation, method }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Stub<S = Channel> {
    service: &'static str,
    grpc: GrpcClient<S>,
    lifecycle: Lifecycle,
    handles: HandleRegistry,
}

impl<S> Stub<S> {
    pub(crate) fn new(service: &'static str, component: &'static str, grpc: GrpcClient<S>) -> Self {
        Self {
            service,
            grpc,
            lifecycle: Lifecycle::new(component),
            handles: HandleRegistry::default(),
        }
    }

    pub(crate) fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub(crate) fn handles(&self) -> &HandleRegistry {
        &self.handles
    }

    /// Checks the lifecycle, builds the request and logs the call.
    fn prepare<Req>(
        &self,
        rpc: Rpc,
        build: impl FnOnce() -> Result<Req, SzError>,
    ) -> Result<(http::uri::PathAndQuery, Req), SzError> {
        let verbose = self.lifecycle.admit(rpc.operation)?;
        let request = build()?;
        let path = http_path(self.service, rpc.method);

        if verbose {
            tracing::info!(operation = rpc.operation, path = %path, "calling senzing");
        } else {
            tracing::debug!(operation = rpc.operation, path = %path, "calling senzing");
        }

        Ok((path, request))
    }
}

impl<S> Stub<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Performs `rpc` with a request that needs no local validation.
    pub(crate) async fn call<Req, Res>(&self, rpc: Rpc, request: Req) -> Result<Res, SzError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        self.call_with(rpc, || Ok(request)).await
    }

    /// Performs `rpc`, building the request only once the wrapper is known to be initialized.
    pub(crate) async fn call_with<Req, Res>(
        &self,
        rpc: Rpc,
        build: impl FnOnce() -> Result<Req, SzError> + Send,
    ) -> Result<Res, SzError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let (path, request) = self.prepare(rpc, build)?;

        self.grpc
            .unary(path, request)
            .await
            .map_err(|e| SzError::from_request_error(rpc.operation, e))?
            .map_err(|status| SzError::from_status(rpc.operation, status))
    }

    pub(crate) async fn call_streaming<Req, Res>(
        &self,
        rpc: Rpc,
        request: Req,
    ) -> Result<Streaming<Res>, SzError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let (path, request) = self.prepare(rpc, || Ok(request))?;

        self.grpc
            .server_streaming(path, request)
            .await
            .map_err(|e| SzError::from_request_error(rpc.operation, e))?
            .map_err(|status| SzError::from_status(rpc.operation, status))
    }
}
