//! Promisified counterpart of [`OldApi`].

use std::sync::atomic::{AtomicU64, Ordering};

use promisify_core::{promisify, DeferredOperation, OperationError};
use tower::{Layer, ServiceExt};

use super::legacy::OldApi;
use super::person::{Admin, User};
use crate::middleware::CallTraceLayer;

/// Future-returning data providers, one per legacy request.
#[derive(Debug)]
pub struct Api {
    admins: DeferredOperation<Vec<Admin>>,
    users: DeferredOperation<Vec<User>>,
    server_time: DeferredOperation<u64>,
    queue_length: DeferredOperation<u64>,
    next_call_id: AtomicU64,
}

impl Api {
    /// Promisifies every request of `old`.
    #[must_use]
    pub fn new(old: &OldApi) -> Self {
        Self::from_operations(
            promisify(old.request_admins()).named("request_admins"),
            promisify(old.request_users()).named("request_users"),
            promisify(old.request_current_server_time()).named("request_current_server_time"),
            promisify(old.request_coffee_machine_queue_length())
                .named("request_coffee_machine_queue_length"),
        )
    }

    /// Assembles an API from already-adapted operations.
    #[must_use]
    pub fn from_operations(
        admins: DeferredOperation<Vec<Admin>>,
        users: DeferredOperation<Vec<User>>,
        server_time: DeferredOperation<u64>,
        queue_length: DeferredOperation<u64>,
    ) -> Self {
        Self {
            admins,
            users,
            server_time,
            queue_length,
            next_call_id: AtomicU64::new(1),
        }
    }

    /// # Errors
    ///
    /// Relays the legacy request's reported failure.
    pub async fn request_admins(&self) -> Result<Vec<Admin>, OperationError> {
        self.traced(&self.admins).await
    }

    /// # Errors
    ///
    /// Relays the legacy request's reported failure.
    pub async fn request_users(&self) -> Result<Vec<User>, OperationError> {
        self.traced(&self.users).await
    }

    /// Milliseconds since Unix epoch.
    ///
    /// # Errors
    ///
    /// Relays the legacy request's reported failure.
    pub async fn request_current_server_time(&self) -> Result<u64, OperationError> {
        self.traced(&self.server_time).await
    }

    /// # Errors
    ///
    /// Relays the legacy request's reported failure.
    pub async fn request_coffee_machine_queue_length(&self) -> Result<u64, OperationError> {
        self.traced(&self.queue_length).await
    }

    async fn traced<T: Send + 'static>(
        &self,
        op: &DeferredOperation<T>,
    ) -> Result<T, OperationError> {
        let call_id = self.next_call_id.fetch_add(1, Ordering::Relaxed);
        CallTraceLayer::new(op.name(), call_id)
            .layer(op.clone())
            .oneshot(())
            .await
    }
}
