//! Food order services.

pub mod service;

pub use service::{AdminOrder, OrderLine, OrderRequest, OrderService, OrderWithItems};
