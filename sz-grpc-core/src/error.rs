//! # Errors
//!
//! Every public operation returns [`SzError`]. It separates failures that were detected
//! locally (bad arguments, wrong lifecycle state) from failures of the transport and from
//! failures the remote engine reported.
//!
//! Engine failures reach the client as a gRPC status whose message embeds the engine
//! reason, e.g. `SENZ0033|Unknown record: dsrc[TEST], record[1]`. The numeric part is the
//! engine error code and is mapped onto an [`EngineErrorKind`].
use crate::{BoxError, grpc::client::GrpcRequestError, lifecycle::LifecycleState};
use std::fmt;
use tonic::Code;

#[derive(Debug, thiserror::Error)]
pub enum SzError {
    /// The caller passed a wrong or invalid argument. Raised before any remote call.
    #[error("{operation}: invalid argument '{argument}': {message}")]
    Usage {
        operation: &'static str,
        argument: &'static str,
        message: String,
    },
    /// A data operation was attempted outside the `Initialized` state.
    #[error("{operation}: the wrapper is {state}, call initialize() first")]
    NotInitialized {
        operation: &'static str,
        state: LifecycleState,
    },
    /// The endpoint was unreachable, timed out, dropped the call, or answered garbage.
    #[error("{operation}: connection failure: {source}")]
    Connection {
        operation: &'static str,
        #[source]
        source: ConnectionFailure,
    },
    /// The remote engine executed the call and reported a failure.
    #[error("{operation}: {kind} error: {message}")]
    Engine {
        operation: &'static str,
        kind: EngineErrorKind,
        code: Option<i64>,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectionFailure {
    #[error("transport error: '{0}'")]
    Transport(#[source] tonic::transport::Error),
    #[error("the client was not ready: '{0}'")]
    NotReady(#[source] BoxError),
    #[error("status {:?}: {}", .0.code(), .0.message())]
    Status(tonic::Status),
    #[error("malformed response: '{0}'")]
    MalformedResponse(#[source] serde_json::Error),
}

/// The class of failure reported by the remote engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineErrorKind {
    BadInput,
    NotFound,
    UnknownDataSource,
    Configuration,
    ConfigurationNotFound,
    ReplaceConflict,
    Retryable,
    DatabaseConnectionLost,
    RetryTimeoutExceeded,
    Unrecoverable,
    Database,
    License,
    NotInitialized,
    Unhandled,
    General,
}

impl EngineErrorKind {
    /// Maps a Senzing engine error code onto its error class.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 | 7 | 22..=27 | 32 | 35 | 36 | 51 | 53 | 61 | 62 | 64 | 88 | 1007 | 7426 => {
                EngineErrorKind::BadInput
            }
            33 | 37 | 63 => EngineErrorKind::NotFound,
            2207 | 2209 | 2210 => EngineErrorKind::UnknownDataSource,
            14 | 34 | 48..=50 | 2134 | 7220 | 7223 => EngineErrorKind::Configuration,
            7221 | 7222 => EngineErrorKind::ConfigurationNotFound,
            7245 | 7246 => EngineErrorKind::ReplaceConflict,
            10 | 30 | 1002 | 7209 | 7211 => EngineErrorKind::Retryable,
            1006 | 1008 | 2202 => EngineErrorKind::DatabaseConnectionLost,
            8000 => EngineErrorKind::RetryTimeoutExceeded,
            1 | 5 | 1000 | 1001 | 1003..=1005 | 1009 | 2222 => EngineErrorKind::Database,
            999 | 9000 | 9001 => EngineErrorKind::License,
            48000 | 7217 => EngineErrorKind::NotInitialized,
            87 | 1010 => EngineErrorKind::Unhandled,
            _ => EngineErrorKind::General,
        }
    }

    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            EngineErrorKind::BadInput
                | EngineErrorKind::NotFound
                | EngineErrorKind::UnknownDataSource
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineErrorKind::Configuration | EngineErrorKind::ConfigurationNotFound
        )
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            EngineErrorKind::Retryable
                | EngineErrorKind::DatabaseConnectionLost
                | EngineErrorKind::RetryTimeoutExceeded
        )
    }

    pub fn is_unrecoverable(&self) -> bool {
        matches!(
            self,
            EngineErrorKind::Unrecoverable
                | EngineErrorKind::Database
                | EngineErrorKind::License
                | EngineErrorKind::NotInitialized
                | EngineErrorKind::Unhandled
        )
    }
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineErrorKind::BadInput => "bad input",
            EngineErrorKind::NotFound => "not found",
            EngineErrorKind::UnknownDataSource => "unknown data source",
            EngineErrorKind::Configuration => "configuration",
            EngineErrorKind::ConfigurationNotFound => "configuration not found",
            EngineErrorKind::ReplaceConflict => "replace conflict",
            EngineErrorKind::Retryable => "retryable",
            EngineErrorKind::DatabaseConnectionLost => "database connection lost",
            EngineErrorKind::RetryTimeoutExceeded => "retry timeout exceeded",
            EngineErrorKind::Unrecoverable => "unrecoverable",
            EngineErrorKind::Database => "database",
            EngineErrorKind::License => "license",
            EngineErrorKind::NotInitialized => "engine not initialized",
            EngineErrorKind::Unhandled => "unhandled",
            EngineErrorKind::General => "general",
        };
        f.write_str(name)
    }
}

impl SzError {
    pub(crate) fn usage(
        operation: &'static str,
        argument: &'static str,
        message: impl Into<String>,
    ) -> Self {
        SzError::Usage {
            operation,
            argument,
            message: message.into(),
        }
    }

    pub(crate) fn connection(operation: &'static str, source: ConnectionFailure) -> Self {
        SzError::Connection { operation, source }
    }

    /// Translates a status returned by the remote side.
    pub(crate) fn from_status(operation: &'static str, status: tonic::Status) -> Self {
        if let Some((code, reason)) = engine_reason(status.message()) {
            return SzError::Engine {
                operation,
                kind: EngineErrorKind::from_code(code),
                code: Some(code),
                message: reason.to_string(),
            };
        }

        let kind = match status.code() {
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled | Code::Unknown => {
                return SzError::connection(operation, ConnectionFailure::Status(status));
            }
            Code::InvalidArgument | Code::OutOfRange => EngineErrorKind::BadInput,
            Code::NotFound => EngineErrorKind::NotFound,
            Code::ResourceExhausted => EngineErrorKind::Retryable,
            Code::Unimplemented => EngineErrorKind::Unhandled,
            _ => EngineErrorKind::General,
        };

        SzError::Engine {
            operation,
            kind,
            code: None,
            message: status.message().to_string(),
        }
    }

    pub(crate) fn from_request_error(operation: &'static str, err: GrpcRequestError) -> Self {
        match err {
            GrpcRequestError::ClientNotReady(source) => {
                SzError::connection(operation, ConnectionFailure::NotReady(source))
            }
        }
    }

    /// The name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            SzError::Usage { operation, .. }
            | SzError::NotInitialized { operation, .. }
            | SzError::Connection { operation, .. }
            | SzError::Engine { operation, .. } => operation,
        }
    }

    /// The engine error code, when the remote engine reported one.
    pub fn code(&self) -> Option<i64> {
        match self {
            SzError::Engine { code, .. } => *code,
            _ => None,
        }
    }

    /// The engine error class, for [`SzError::Engine`] only.
    pub fn engine_kind(&self) -> Option<EngineErrorKind> {
        match self {
            SzError::Engine { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.engine_kind().is_some_and(|kind| kind.is_retryable())
    }
}

/// Extracts the engine code and reason (`SENZnnnn|text`) embedded in a status message.
///
/// The reason ends at the first double quote so that JSON-wrapped server messages
/// yield only the engine text.
fn engine_reason(message: &str) -> Option<(i64, &str)> {
    message.match_indices("SENZ").find_map(|(idx, _)| {
        let tail = &message[idx..];
        let digits: String = tail[4..].chars().take_while(|c| c.is_ascii_digit()).collect();
        let code = digits.parse().ok()?;
        let end = tail.find('"').unwrap_or(tail.len());
        Some((code, &tail[..end]))
    })
}
