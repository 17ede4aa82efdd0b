//! Menu services.

pub mod service;

pub use service::MenuService;
