//! Callback-based fixture API.
//!
//! Every request takes a completion handler and reports a [`TaggedResult`].
//! Most requests report before returning; the server-time request reports
//! from a spawned task when a tokio runtime is available.

use std::sync::Arc;

use promisify_core::{Completion, LegacyOperation, TaggedResult};

use super::person::{admins, users, Admin, User};
use crate::clock::ClockSource;

/// Reason reported by the coffee-machine queue request.
pub const QUEUE_LENGTH_OVERFLOW: &str = "Numeric value has exceeded Number.MAX_SAFE_INTEGER.";

/// Callback-style data providers.
#[derive(Clone)]
pub struct OldApi {
    clock: Arc<dyn ClockSource>,
}

impl OldApi {
    #[must_use]
    pub fn new(clock: Arc<dyn ClockSource>) -> Self {
        Self { clock }
    }

    /// Reports the admin list.
    pub fn request_admins(&self) -> impl LegacyOperation<Vec<Admin>> {
        |done: Completion<Vec<Admin>>| done(TaggedResult::success(admins()))
    }

    /// Reports the user list.
    pub fn request_users(&self) -> impl LegacyOperation<Vec<User>> {
        |done: Completion<Vec<User>>| done(TaggedResult::success(users()))
    }

    /// Reports the current server time in milliseconds since Unix epoch.
    pub fn request_current_server_time(&self) -> impl LegacyOperation<u64> {
        let clock = Arc::clone(&self.clock);
        move |done: Completion<u64>| {
            let now = clock.now();
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move { done(TaggedResult::success(now)) });
                }
                Err(_) => done(TaggedResult::success(now)),
            }
        }
    }

    /// Always reports [`QUEUE_LENGTH_OVERFLOW`].
    pub fn request_coffee_machine_queue_length(&self) -> impl LegacyOperation<u64> {
        |done: Completion<u64>| done(TaggedResult::error(QUEUE_LENGTH_OVERFLOW))
    }
}

impl std::fmt::Debug for OldApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OldApi").finish_non_exhaustive()
    }
}
