use futures::future::{AbortHandle, Abortable};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::CoreError;

type HandleMap = Arc<Mutex<HashMap<u64, AbortHandle>>>;

/// Ties in-flight requests to the lifetime of a view.
///
/// Every future passed through [`FetchScope::track`] or [`FetchScope::spawn`]
/// is aborted when the scope is cancelled or dropped, and then resolves to
/// `CoreError::Cancelled` instead of delivering data to a view that is gone.
pub struct FetchScope {
    name: String,
    handles: HandleMap,
    next_id: AtomicU64,
    cancelled: AtomicBool,
}

/// Removes a tracked handle once its future finishes or is dropped.
struct Registered {
    handles: HandleMap,
    id: u64,
}

impl Drop for Registered {
    fn drop(&mut self) {
        self.handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}

impl FetchScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handles: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap a request so it stops when the scope ends. Futures tracked after
    /// cancellation resolve to `Cancelled` without being polled.
    pub fn track<F, T>(&self, fut: F) -> impl Future<Output = Result<T, CoreError>>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let registered = if self.is_cancelled() {
            handle.abort();
            None
        } else {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            self.handles
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(id, handle);
            Some(Registered {
                handles: Arc::clone(&self.handles),
                id,
            })
        };
        let aborted = Abortable::new(fut, registration);
        async move {
            let outcome = aborted.await;
            drop(registered);
            match outcome {
                Ok(result) => result,
                Err(aborted) => Err(CoreError::from(aborted)),
            }
        }
    }

    /// Run a tracked request on the tokio runtime.
    pub fn spawn<F, T>(&self, fut: F) -> JoinHandle<Result<T, CoreError>>
    where
        F: Future<Output = Result<T, CoreError>> + Send + 'static,
        T: Send + 'static,
    {
        tokio::spawn(self.track(fut))
    }

    /// Number of tracked requests that have not finished yet.
    pub fn pending(&self) -> usize {
        self.handles.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Abort everything tracked so far and anything tracked later.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles = std::mem::take(&mut *self.handles.lock().unwrap_or_else(|e| e.into_inner()));
        debug!(scope = %self.name, pending = handles.len(), "cancelling fetch scope");
        for handle in handles.into_values() {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for FetchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchScope")
            .field("name", &self.name)
            .field("pending", &self.pending())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
