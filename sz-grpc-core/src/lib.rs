//! # Senzing gRPC Core
//!
//! `sz_grpc_core` is a client SDK for a remote Senzing entity resolution engine served over
//! gRPC. It powers the `szgrpc` CLI. Entity resolution itself happens on the server; this
//! crate marshals requests, tracks handles and translates failures.
//!
//! ## Key Components
//!
//! * **[`SzConnection`]:** The entry point. Opens the transport and hands out one wrapper
//!   per Senzing subsystem.
//! * **[`SzConfig`], [`SzConfigManager`], [`SzDiagnostic`], [`SzEngine`], [`SzProduct`]:**
//!   One capability trait per subsystem, implemented over gRPC by the `Sz*Grpc` wrappers.
//! * **[`SzLifecycle`] & [`Scoped`]:** Wrappers must be initialized before use and are
//!   unusable once destroyed. `Scoped` does both around a Rust scope.
//! * **[`SzError`]:** One error type for the whole API, separating usage mistakes,
//!   lifecycle violations, transport failures and engine reported failures.
//! * **[`SzFlags`]:** The engine's response detail bitmask with its named presets.
//! * **[`Pager`]:** Forward-only reader over export reports and entity lists.
//!
//! ## Internal clients
//!
//! * **[`GrpcClient`](grpc::client::GrpcClient):** The typed transport shared by every
//!   wrapper, exposed for callers that need a procedure this crate does not wrap.
//!
//! ## Feature Flags (Internal use only)
//!
//! * `gen-proto`: Enables the binary that regenerates [`generated`] from `proto/`.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost` and `tonic` to ensure that consumers use compatible
//! versions of these underlying dependencies.
//!
//! See the README.md for more details about usage.
pub mod api;
pub mod client;
pub mod error;
pub mod flags;
pub mod generated;
pub mod grpc;
pub mod handle;
pub mod json;
pub mod lifecycle;
pub mod paging;
pub mod settings;

pub use api::{SzConfig, SzConfigManager, SzDiagnostic, SzEngine, SzProduct};
pub use client::{
    SzConfigGrpc, SzConfigManagerGrpc, SzConnection, SzDiagnosticGrpc, SzEngineGrpc,
    SzProductGrpc,
};
pub use error::{ConnectionFailure, EngineErrorKind, SzError};
pub use flags::SzFlags;
pub use handle::{ConfigHandle, EntityListHandle, ExportHandle};
pub use json::{JsonInput, RecordKey};
pub use lifecycle::{InitOptions, LifecycleState, Scoped, SzLifecycle};
pub use paging::{PageSource, Pager};
pub use settings::{ConnectionSettings, SettingsError};

// Re-exports
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
