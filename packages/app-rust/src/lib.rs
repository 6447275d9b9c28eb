//! Promisify App — callback-style fixture API, its promisified form, and the
//! terminal program that walks through it.

pub mod api;
pub mod clock;
pub mod config;
pub mod display;
pub mod middleware;
pub mod runner;

pub use api::{Api, OldApi};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use config::AppConfig;
pub use display::Printer;
pub use runner::{run, start_the_app, RunError};

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
