//! CORS layer construction.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use plage_core::config::app::CorsConfig;

const WILDCARD: &str = "*";

/// Translates the `[server.cors]` section into a tower-http layer.
///
/// A literal `*` in a list allows everything for that dimension. Entries
/// that fail to parse are skipped with a warning instead of aborting boot.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins(&config.allowed_origins))
        .allow_methods(methods(&config.allowed_methods))
        .allow_headers(headers(&config.allowed_headers))
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn origins(values: &[String]) -> AllowOrigin {
    if values.iter().any(|v| v == WILDCARD) {
        return AllowOrigin::any();
    }
    AllowOrigin::list(parsed::<HeaderValue>(values, "origin"))
}

fn methods(values: &[String]) -> AllowMethods {
    if values.iter().any(|v| v == WILDCARD) {
        return AllowMethods::any();
    }
    AllowMethods::list(parsed::<Method>(values, "method"))
}

fn headers(values: &[String]) -> AllowHeaders {
    if values.iter().any(|v| v == WILDCARD) {
        return AllowHeaders::any();
    }
    AllowHeaders::list(parsed::<HeaderName>(values, "header"))
}

fn parsed<T: std::str::FromStr>(values: &[String], what: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(value = %v, "Ignoring unparsable CORS {what}");
                None
            }
        })
        .collect()
}
