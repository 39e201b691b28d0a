//! CORS policy for the booking web client.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use courtbook_core::config::CorsConfig;

/// Build the CORS layer. Unparseable origins and methods are skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    let methods = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse::<Method>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
