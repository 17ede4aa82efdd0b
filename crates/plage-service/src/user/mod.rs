//! Account services.

pub mod service;

pub use service::{AuthSession, SignupRequest, UserService};
