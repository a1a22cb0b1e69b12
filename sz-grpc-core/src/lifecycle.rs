//! # Wrapper Lifecycle
//!
//! Every subsystem wrapper moves through `Uninitialized -> Initialized -> Destroyed`.
//! Data operations are only accepted while `Initialized`; outside of it they fail with
//! [`SzError::NotInitialized`] before anything is sent to the server.
//!
//! [`Scoped`] ties the lifecycle to a Rust scope: it initializes on construction and
//! destroys on drop.
use crate::{error::SzError, json::JsonInput};
use std::{
    fmt,
    ops::Deref,
    sync::{Mutex, MutexGuard, PoisonError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Uninitialized,
    Initialized,
    Destroyed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Initialized => "initialized",
            LifecycleState::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// Options recorded by `initialize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitOptions {
    pub instance_name: String,
    /// Engine settings document. Checked to be valid JSON at initialize.
    pub settings: Option<JsonInput>,
    /// Logs every remote call at `info` instead of `debug`.
    pub verbose_logging: bool,
}

impl InitOptions {
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            ..Default::default()
        }
    }

    pub fn with_settings(mut self, settings: impl Into<JsonInput>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    pub fn with_verbose_logging(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }
}

/// Lifecycle control shared by all subsystem wrappers.
pub trait SzLifecycle {
    /// Moves an `Uninitialized` wrapper to `Initialized`.
    ///
    /// Calling it again while initialized is a no-op that keeps the first options.
    /// Calling it after `destroy` is a usage error.
    fn initialize(&self, options: InitOptions) -> Result<(), SzError>;

    /// Moves the wrapper to `Destroyed`. Repeated calls are no-ops.
    fn destroy(&self);

    fn state(&self) -> LifecycleState;
}

#[derive(Debug)]
struct LifecycleInner {
    state: LifecycleState,
    options: Option<InitOptions>,
}

/// Per-wrapper state machine. Cloning copies the current state into an independent one.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    component: &'static str,
    inner: Mutex<LifecycleInner>,
}

impl Lifecycle {
    pub(crate) fn new(component: &'static str) -> Self {
        Self {
            component,
            inner: Mutex::new(LifecycleInner {
                state: LifecycleState::Uninitialized,
                options: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LifecycleInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn initialize(&self, options: InitOptions) -> Result<(), SzError> {
        if let Some(settings) = &options.settings {
            settings.render("initialize", "settings")?;
        }

        let mut inner = self.lock();
        match inner.state {
            LifecycleState::Uninitialized => {
                tracing::info!(
                    component = self.component,
                    instance = %options.instance_name,
                    "initialized"
                );
                inner.state = LifecycleState::Initialized;
                inner.options = Some(options);
                Ok(())
            }
            LifecycleState::Initialized => {
                tracing::debug!(component = self.component, "already initialized");
                Ok(())
            }
            LifecycleState::Destroyed => Err(SzError::usage(
                "initialize",
                "state",
                format!("{} was destroyed and cannot be initialized again", self.component),
            )),
        }
    }

    pub(crate) fn destroy(&self) {
        let mut inner = self.lock();
        if inner.state != LifecycleState::Destroyed {
            tracing::info!(component = self.component, from = %inner.state, "destroyed");
            inner.state = LifecycleState::Destroyed;
        }
    }

    pub(crate) fn state(&self) -> LifecycleState {
        self.lock().state
    }

    #[cfg(test)]
    pub(crate) fn options(&self) -> Option<InitOptions> {
        self.lock().options.clone()
    }

    /// Admits a data operation. Returns whether verbose logging was requested.
    pub(crate) fn admit(&self, operation: &'static str) -> Result<bool, SzError> {
        let inner = self.lock();
        match inner.state {
            LifecycleState::Initialized => Ok(inner
                .options
                .as_ref()
                .is_some_and(|options| options.verbose_logging)),
            state => Err(SzError::NotInitialized { operation, state }),
        }
    }
}

impl Clone for Lifecycle {
    fn clone(&self) -> Self {
        let inner = self.lock();
        Self {
            component: self.component,
            inner: Mutex::new(LifecycleInner {
                state: inner.state,
                options: inner.options.clone(),
            }),
        }
    }
}

/// Keeps a wrapper initialized for as long as the guard lives.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), sz_grpc_core::SzError> {
/// use sz_grpc_core::{ConnectionSettings, InitOptions, Scoped, SzConnection, SzProduct};
///
/// let connection = SzConnection::connect(&ConnectionSettings::new("http://localhost:8261")).await?;
/// let product = Scoped::new(connection.product(), InitOptions::new("example"))?;
/// println!("{}", product.get_version().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Scoped<W: SzLifecycle> {
    wrapper: W,
}

impl<W: SzLifecycle> Scoped<W> {
    pub fn new(wrapper: W, options: InitOptions) -> Result<Self, SzError> {
        wrapper.initialize(options)?;
        Ok(Self { wrapper })
    }
}

impl<W: SzLifecycle> Deref for Scoped<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.wrapper
    }
}

impl<W: SzLifecycle> Drop for Scoped<W> {
    fn drop(&mut self) {
        self.wrapper.destroy();
    }
}
