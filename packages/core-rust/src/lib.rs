//! Promisify Core — tagged results, callback-style legacy operations, and the
//! adapter that turns them into futures.

pub mod deferred;
pub mod error;
pub mod traits;
pub mod types;

pub use deferred::{promisify, Deferred, DeferredOperation};
pub use error::OperationError;
pub use traits::{Completion, LegacyOperation};
pub use types::TaggedResult;
