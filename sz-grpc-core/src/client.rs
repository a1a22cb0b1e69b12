//! # Senzing Connection
//!
//! [`SzConnection`] is an open transport to a Senzing gRPC server. It hands out one typed
//! wrapper per subsystem; all of them share the underlying channel, headers and deadline.
//!
//! Each wrapper starts `Uninitialized` and must be initialized before use, either
//! explicitly or through [`Scoped`](crate::lifecycle::Scoped).
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use sz_grpc_core::{ConnectionSettings, InitOptions, SzConnection, SzEngine, SzFlags, SzLifecycle};
//!
//! # async fn run() -> Result<(), sz_grpc_core::SzError> {
//! let connection = SzConnection::connect(&ConnectionSettings::new("http://localhost:8261")).await?;
//!
//! let engine = connection.engine();
//! engine.initialize(InitOptions::new("loader"))?;
//!
//! engine
//!     .add_record("CUSTOMERS", "1001", json!({"NAME_FULL": "Robert Smith"}).into(), SzFlags::NO_FLAGS)
//!     .await?;
//! let record = engine.get_record("CUSTOMERS", "1001", SzFlags::RECORD_DEFAULT_FLAGS).await?;
//!
//! engine.destroy();
//! # Ok(())
//! # }
//! ```
mod config;
mod config_manager;
mod diagnostic;
mod engine;
mod product;
mod stub;

pub use config::SzConfigGrpc;
pub use config_manager::SzConfigManagerGrpc;
pub use diagnostic::SzDiagnosticGrpc;
pub use engine::SzEngineGrpc;
pub use product::SzProductGrpc;

use crate::{
    error::{ConnectionFailure, SzError},
    grpc::client::GrpcClient,
    settings::ConnectionSettings,
};
use tonic::transport::{Channel, Endpoint};

#[derive(Debug, Clone)]
pub struct SzConnection<S = Channel> {
    grpc: GrpcClient<S>,
}

impl SzConnection<Channel> {
    /// Connects to the server described by `settings`.
    ///
    /// # Returns
    ///
    /// * `Ok(SzConnection)` - The connected transport.
    /// * `Err(SzError::Usage)` - If the URL or a header is invalid.
    /// * `Err(SzError::Connection)` - If the server cannot be reached.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, SzError> {
        let channel = endpoint(settings)?
            .connect()
            .await
            .map_err(|e| SzError::connection("connect", ConnectionFailure::Transport(e)))?;

        tracing::debug!(url = %settings.url, "connected to senzing");
        Self::with_settings(channel, settings)
    }

    /// Builds a connection that dials the server on first use.
    ///
    /// An unreachable server is only reported by the first call, as a connection error.
    pub fn connect_lazy(settings: &ConnectionSettings) -> Result<Self, SzError> {
        let channel = endpoint(settings)?.connect_lazy();
        Self::with_settings(channel, settings)
    }
}

impl<S> SzConnection<S> {
    /// Uses an existing tonic service as the transport, e.g. an in-process server.
    pub fn from_service(service: S) -> Self {
        Self {
            grpc: GrpcClient::new(service),
        }
    }

    /// Uses `service` as the transport with the headers and deadline from `settings`.
    pub fn with_settings(service: S, settings: &ConnectionSettings) -> Result<Self, SzError> {
        let grpc = GrpcClient::new(service)
            .with_metadata(settings.metadata()?)
            .with_timeout(settings.timeout());
        Ok(Self { grpc })
    }
}

impl<S: Clone> SzConnection<S> {
    pub fn config(&self) -> SzConfigGrpc<S> {
        SzConfigGrpc::new(self.grpc.clone())
    }

    pub fn config_manager(&self) -> SzConfigManagerGrpc<S> {
        SzConfigManagerGrpc::new(self.grpc.clone())
    }

    pub fn diagnostic(&self) -> SzDiagnosticGrpc<S> {
        SzDiagnosticGrpc::new(self.grpc.clone())
    }

    pub fn engine(&self) -> SzEngineGrpc<S> {
        SzEngineGrpc::new(self.grpc.clone())
    }

    pub fn product(&self) -> SzProductGrpc<S> {
        SzProductGrpc::new(self.grpc.clone())
    }
}

fn endpoint(settings: &ConnectionSettings) -> Result<Endpoint, SzError> {
    let mut endpoint = Endpoint::new(settings.url.clone()).map_err(|e| {
        SzError::usage("connect", "url", format!("invalid URL '{}': {e}", settings.url))
    })?;

    if let Some(timeout) = settings.connect_timeout() {
        endpoint = endpoint.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.timeout() {
        endpoint = endpoint.timeout(timeout);
    }
    Ok(endpoint)
}

/// Forwards [`SzLifecycle`](crate::lifecycle::SzLifecycle) to the wrapper's stub.
macro_rules! impl_lifecycle {
    ($wrapper:ident) => {
        impl<S> $crate::lifecycle::SzLifecycle for $wrapper<S> {
            fn initialize(
                &self,
                options: $crate::lifecycle::InitOptions,
            ) -> Result<(), $crate::error::SzError> {
                self.stub.lifecycle().initialize(options)
            }

            fn destroy(&self) {
                self.stub.lifecycle().destroy()
            }

            fn state(&self) -> $crate::lifecycle::LifecycleState {
                self.stub.lifecycle().state()
            }
        }
    };
}
pub(crate) use impl_lifecycle;
