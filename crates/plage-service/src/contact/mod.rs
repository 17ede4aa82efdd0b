//! Contact message services.

pub mod service;

pub use service::{ContactRequest, ContactService};
