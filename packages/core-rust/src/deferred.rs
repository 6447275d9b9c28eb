//! Callback-to-deferred adapter.
//!
//! [`promisify`] wraps a [`LegacyOperation`] into a [`DeferredOperation`]. Each
//! [`DeferredOperation::call`] invokes the legacy operation once and returns a
//! [`Deferred`] future that settles when the completion handler fires:
//!
//! 1. `Success { payload }` resolves to `Ok(payload)`
//! 2. `Error { message }` resolves to `Err(OperationError::OperationFailed { message })`
//!
//! Settlement travels over a single-send `oneshot` channel, so the handler may
//! run synchronously inside `invoke` or later from any task or thread. There is
//! no cancellation and no timeout: dropping a `Deferred` discards the eventual
//! report but does not stop the legacy operation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tower::Service;

use crate::error::OperationError;
use crate::traits::LegacyOperation;
use crate::types::TaggedResult;

// ---------------------------------------------------------------------------
// promisify
// ---------------------------------------------------------------------------

/// Adapts a callback-style operation into one that returns a [`Deferred`] value.
///
/// The operation is labelled with its type name in trace output; use
/// [`DeferredOperation::named`] for a shorter label.
pub fn promisify<T, L>(op: L) -> DeferredOperation<T>
where
    T: Send + 'static,
    L: LegacyOperation<T>,
{
    DeferredOperation {
        op: Arc::new(op),
        name: std::any::type_name::<L>(),
    }
}

// ---------------------------------------------------------------------------
// DeferredOperation
// ---------------------------------------------------------------------------

/// Promisified form of a [`LegacyOperation`].
///
/// Cloning shares the wrapped operation; calls never share state.
pub struct DeferredOperation<T> {
    op: Arc<dyn LegacyOperation<T>>,
    name: &'static str,
}

impl<T> Clone for DeferredOperation<T> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            name: self.name,
        }
    }
}

impl<T> std::fmt::Debug for DeferredOperation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredOperation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> DeferredOperation<T> {
    /// Replaces the label used in trace output.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Label used in trace output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the legacy operation and returns the value it will settle.
    pub fn call(&self) -> Deferred<T> {
        let (tx, rx) = oneshot::channel::<TaggedResult<T>>();

        tracing::debug!(operation = self.name, "invoking legacy operation");
        self.op.invoke(Box::new(move |report| {
            // Receiver is gone when the caller dropped the Deferred.
            let _ = tx.send(report);
        }));

        Deferred {
            rx,
            name: self.name,
        }
    }
}

impl<T: Send + 'static> Service<()> for DeferredOperation<T> {
    type Response = T;
    type Error = OperationError;
    type Future = Deferred<T>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, (): ()) -> Self::Future {
        DeferredOperation::call(self)
    }
}

// ---------------------------------------------------------------------------
// Deferred
// ---------------------------------------------------------------------------

/// Value that settles once with the legacy operation's report.
#[must_use = "a Deferred does nothing unless awaited"]
#[derive(Debug)]
pub struct Deferred<T> {
    rx: oneshot::Receiver<TaggedResult<T>>,
    name: &'static str,
}

impl<T> Future for Deferred<T> {
    type Output = Result<T, OperationError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let name = self.name;
        let settled = match Pin::new(&mut self.rx).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Ok(report)) => report
                .into_result()
                .map_err(|message| OperationError::OperationFailed { message }),
            Poll::Ready(Err(_)) => Err(OperationError::Abandoned),
        };

        match &settled {
            Ok(_) => tracing::debug!(operation = name, outcome = "ok", "deferred settled"),
            Err(e) => tracing::debug!(
                operation = name,
                outcome = "error",
                error = %e,
                "deferred settled"
            ),
        }

        Poll::Ready(settled)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
