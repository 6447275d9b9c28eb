//! Fixture data providers in callback style and their promisified form.

pub mod legacy;
pub mod person;
pub mod promised;

pub use legacy::{OldApi, QUEUE_LENGTH_OVERFLOW};
pub use person::{Admin, Person, User};
pub use promised::Api;
