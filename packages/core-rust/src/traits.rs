use crate::types::TaggedResult;

/// One-shot completion handler handed to a legacy operation.
///
/// `FnOnce` makes a second invocation unrepresentable.
pub type Completion<T> = Box<dyn FnOnce(TaggedResult<T>) + Send + 'static>;

/// Callback-style operation that reports its outcome through a completion handler.
///
/// Implementations must invoke `done` exactly once, either before `invoke`
/// returns or later from another task or thread. Dropping `done` without
/// calling it is a contract violation that the adapter surfaces as
/// [`OperationError::Abandoned`](crate::OperationError::Abandoned).
pub trait LegacyOperation<T>: Send + Sync + 'static {
    /// Starts the operation.
    fn invoke(&self, done: Completion<T>);
}

impl<T, F> LegacyOperation<T> for F
where
    F: Fn(Completion<T>) + Send + Sync + 'static,
{
    fn invoke(&self, done: Completion<T>) {
        self(done);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn answer(done: Completion<u32>) {
        done(TaggedResult::success(42));
    }

    #[test]
    fn plain_fn_is_a_legacy_operation() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        LegacyOperation::<u32>::invoke(&answer, Box::new(move |report| {
            *sink.lock().unwrap() = Some(report);
        }));
        assert_eq!(*seen.lock().unwrap(), Some(TaggedResult::success(42)));
    }

    #[test]
    fn closure_is_a_legacy_operation() {
        let reason = String::from("offline");
        let op = move |done: Completion<u32>| done(TaggedResult::error(reason.clone()));

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        LegacyOperation::<u32>::invoke(&op, Box::new(move |report| {
            *sink.lock().unwrap() = Some(report);
        }));
        assert_eq!(*seen.lock().unwrap(), Some(TaggedResult::error("offline")));
    }
}
