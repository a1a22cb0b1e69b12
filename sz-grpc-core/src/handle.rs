//! # Opaque Handles
//!
//! Config sessions, export reports and entity lists are addressed by integer handles
//! issued by the server. The handle types here are move-only: the `close_*` operation
//! consumes them, so a closed handle cannot be passed again by accident.
//!
//! Raw integers can still re-enter through `from_raw`. Each wrapper keeps a
//! [`HandleRegistry`] of the handles it opened and rejects anything else with a usage
//! error before issuing a remote call. A handle leaves the registry only after the server
//! confirms its close, so a close that failed can be retried through `from_raw`.
use crate::error::SzError;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

macro_rules! handle_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Hash)]
        pub struct $name(i64);

        impl $name {
            /// The integer the server issued for this handle.
            pub fn as_raw(&self) -> i64 {
                self.0
            }

            /// Wraps an integer obtained elsewhere. Wrappers only accept it if they issued it.
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

handle_type!(
    /// An in-memory configuration opened by `create_config` or `import_config`.
    ConfigHandle
);
handle_type!(
    /// An open entity export report.
    ExportHandle
);
handle_type!(
    /// An open list of entities of a given size.
    EntityListHandle
);

/// Set of handles a wrapper opened and has not closed yet. Clones share the set.
#[derive(Debug, Clone, Default)]
pub(crate) struct HandleRegistry {
    open: Arc<Mutex<HashSet<i64>>>,
}

impl HandleRegistry {
    fn with_open<T>(&self, f: impl FnOnce(&mut HashSet<i64>) -> T) -> T {
        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut open)
    }

    pub(crate) fn register(&self, raw: i64) {
        self.with_open(|open| open.insert(raw));
    }

    /// Fails unless `raw` is currently open.
    pub(crate) fn check(
        &self,
        operation: &'static str,
        argument: &'static str,
        raw: i64,
    ) -> Result<(), SzError> {
        if self.with_open(|open| open.contains(&raw)) {
            Ok(())
        } else {
            Err(unknown_handle(operation, argument, raw))
        }
    }

    /// Forgets `raw` once the server has confirmed the close.
    pub(crate) fn release(&self, raw: i64) {
        self.with_open(|open| open.remove(&raw));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.with_open(|open| open.len())
    }
}

fn unknown_handle(operation: &'static str, argument: &'static str, raw: i64) -> SzError {
    SzError::usage(
        operation,
        argument,
        format!("handle {raw} is closed or was not opened by this wrapper"),
    )
}
