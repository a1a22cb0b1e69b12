//! # Handle Paging
//!
//! Entity export reports and entity lists are read through a server side cursor:
//! open it, fetch chunks until an empty one arrives, close it exactly once.
//!
//! [`Pager`] owns the handle for the whole read. Once it has seen the end it never asks the
//! server again, and if it is dropped before being closed it schedules the close on the
//! current Tokio runtime.
//!
//! ```rust,no_run
//! # async fn run(engine: sz_grpc_core::SzEngineGrpc) -> Result<(), sz_grpc_core::SzError> {
//! use futures_util::TryStreamExt;
//! use sz_grpc_core::{SzEngine, SzFlags};
//!
//! let mut report = engine.json_entity_report(SzFlags::EXPORT_DEFAULT_FLAGS).await?;
//! while let Some(line) = report.fetch_next().await? {
//!     println!("{line}");
//! }
//! report.close().await?;
//!
//! // Or as a stream that closes itself once exhausted.
//! let lines: Vec<String> = engine
//!     .json_entity_report(SzFlags::EXPORT_DEFAULT_FLAGS)
//!     .await?
//!     .into_stream()
//!     .try_collect()
//!     .await?;
//! # Ok(())
//! # }
//! ```
use crate::{
    api::{SzDiagnostic, SzEngine},
    error::SzError,
    handle::{EntityListHandle, ExportHandle},
};
use async_trait::async_trait;
use futures_util::{Stream, stream};

/// Something that can read and release the cursor behind a handle of type `H`.
#[async_trait]
pub trait PageSource<H>: Clone + Send + Sync + 'static
where
    H: Send + Sync + 'static,
{
    /// Reads the next chunk, `None` once the cursor is exhausted.
    async fn fetch_page(&self, handle: &H) -> Result<Option<String>, SzError>;

    async fn close_page(&self, handle: H) -> Result<(), SzError>;
}

#[async_trait]
impl<E> PageSource<ExportHandle> for E
where
    E: SzEngine + Clone + 'static,
{
    async fn fetch_page(&self, handle: &ExportHandle) -> Result<Option<String>, SzError> {
        self.fetch_next(handle).await
    }

    async fn close_page(&self, handle: ExportHandle) -> Result<(), SzError> {
        self.close_export(handle).await
    }
}

#[async_trait]
impl<D> PageSource<EntityListHandle> for D
where
    D: SzDiagnostic + Clone + 'static,
{
    async fn fetch_page(&self, handle: &EntityListHandle) -> Result<Option<String>, SzError> {
        self.fetch_next_entity_by_size(handle).await
    }

    async fn close_page(&self, handle: EntityListHandle) -> Result<(), SzError> {
        self.close_entity_list_by_size(handle).await
    }
}

/// A forward-only reader over one open handle.
pub struct Pager<P, H>
where
    P: PageSource<H>,
    H: Send + Sync + 'static,
{
    source: P,
    handle: Option<H>,
    exhausted: bool,
}

impl<P, H> Pager<P, H>
where
    P: PageSource<H>,
    H: Send + Sync + 'static,
{
    pub fn new(source: P, handle: H) -> Self {
        Self {
            source,
            handle: Some(handle),
            exhausted: false,
        }
    }

    /// The open handle, `None` once the pager has been closed.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetches the next chunk.
    ///
    /// Returns `Ok(None)` at the end of the data, and keeps returning it without contacting
    /// the server on later calls.
    pub async fn fetch_next(&mut self) -> Result<Option<String>, SzError> {
        if self.exhausted {
            return Ok(None);
        }
        let Some(handle) = &self.handle else {
            return Ok(None);
        };

        let page = self.source.fetch_page(handle).await?;
        if page.is_none() {
            self.exhausted = true;
        }
        Ok(page)
    }

    /// Releases the handle on the server.
    pub async fn close(mut self) -> Result<(), SzError> {
        match self.handle.take() {
            Some(handle) => self.source.close_page(handle).await,
            None => Ok(()),
        }
    }

    /// Turns the pager into a lazy stream of chunks that closes the handle once exhausted.
    pub fn into_stream(self) -> impl Stream<Item = Result<String, SzError>> + Send + 'static {
        stream::try_unfold(self, |mut pager| async move {
            match pager.fetch_next().await? {
                Some(page) => Ok(Some((page, pager))),
                None => {
                    pager.close().await?;
                    Ok(None)
                }
            }
        })
    }
}

impl<P, H> Drop for Pager<P, H>
where
    P: PageSource<H>,
    H: Send + Sync + 'static,
{
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                tracing::warn!("pager dropped while open, closing its handle in the background");
                let source = self.source.clone();
                runtime.spawn(async move {
                    if let Err(err) = source.close_page(handle).await {
                        tracing::warn!(error = %err, "failed to close a dropped pager");
                    }
                });
            }
            Err(_) => {
                tracing::warn!("pager dropped outside a Tokio runtime, its handle was not closed");
            }
        }
    }
}
