//! Tower middleware for promisified operations.

pub mod trace;

pub use trace::{CallTraceLayer, CallTraceService};
