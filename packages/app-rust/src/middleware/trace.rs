//! Call tracing middleware.
//!
//! Wraps any `Service<()>` failing with `OperationError` (such as a
//! `DeferredOperation`) and records call duration and outcome on a `tracing` span.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use promisify_core::OperationError;
use tower::{Layer, Service};
use tracing::{info_span, Instrument};

// ---------------------------------------------------------------------------
// CallTraceLayer
// ---------------------------------------------------------------------------

/// Tower layer that instruments a single promisified call.
#[derive(Debug, Clone)]
pub struct CallTraceLayer {
    operation: &'static str,
    call_id: u64,
}

impl CallTraceLayer {
    #[must_use]
    pub fn new(operation: &'static str, call_id: u64) -> Self {
        Self { operation, call_id }
    }
}

impl<S> Layer<S> for CallTraceLayer {
    type Service = CallTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CallTraceService {
            inner,
            operation: self.operation,
            call_id: self.call_id,
        }
    }
}

// ---------------------------------------------------------------------------
// CallTraceService
// ---------------------------------------------------------------------------

/// Service wrapper that records call duration and outcome in tracing spans.
#[derive(Debug, Clone)]
pub struct CallTraceService<S> {
    inner: S,
    operation: &'static str,
    call_id: u64,
}

impl<S> Service<()> for CallTraceService<S>
where
    S: Service<(), Error = OperationError> + Send,
    S::Response: Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = OperationError;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, OperationError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, (): ()) -> Self::Future {
        let operation = self.operation;
        let call_id = self.call_id;

        let span = info_span!(
            "promisified_call",
            operation = operation,
            call_id = call_id,
            duration_ms = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        let fut = self.inner.call(());

        Box::pin(
            async move {
                let start = Instant::now();
                let result = fut.await;

                #[allow(clippy::cast_possible_truncation)]
                let duration_ms = start.elapsed().as_millis() as u64;
                let outcome = match &result {
                    Ok(_) => "ok",
                    Err(OperationError::OperationFailed { .. }) => "failed",
                    Err(OperationError::Abandoned) => "abandoned",
                };

                tracing::Span::current().record("duration_ms", duration_ms);
                tracing::Span::current().record("outcome", outcome);

                match &result {
                    Ok(_) => tracing::info!(
                        operation = operation,
                        call_id = call_id,
                        duration_ms = duration_ms,
                        "call complete"
                    ),
                    Err(e @ OperationError::OperationFailed { .. }) => tracing::info!(
                        operation = operation,
                        call_id = call_id,
                        duration_ms = duration_ms,
                        error = %e,
                        "call failed"
                    ),
                    Err(e @ OperationError::Abandoned) => tracing::warn!(
                        operation = operation,
                        call_id = call_id,
                        duration_ms = duration_ms,
                        error = %e,
                        "call abandoned by legacy operation"
                    ),
                }

                result
            }
            .instrument(span),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use promisify_core::{promisify, Completion, DeferredOperation, TaggedResult};
    use tower::ServiceExt;

    use super::*;

    fn answer(done: Completion<u32>) {
        done(TaggedResult::success(42));
    }

    fn refuse(done: Completion<u32>) {
        done(TaggedResult::error("refused"));
    }

    #[tokio::test]
    async fn passes_through_payload() {
        let op: DeferredOperation<u32> = promisify(answer);
        let svc = CallTraceLayer::new("answer", 1).layer(op);
        assert_eq!(svc.oneshot(()).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn passes_through_failure() {
        let op: DeferredOperation<u32> = promisify(refuse);
        let svc = CallTraceLayer::new("refuse", 2).layer(op);
        let err = svc.oneshot(()).await.unwrap_err();
        assert_eq!(err.message(), "refused");
    }

    #[tokio::test]
    async fn layered_service_can_be_called_repeatedly() {
        let op: DeferredOperation<u32> = promisify(answer);
        let mut svc = CallTraceLayer::new("answer", 3).layer(op);
        for _ in 0..3 {
            let value = svc.ready().await.unwrap().call(()).await.unwrap();
            assert_eq!(value, 42);
        }
    }
}
