/// Relay API - HTTP surface for the contact relay service
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins allowed to call the API (local development frontends).
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Builds the application router.
pub fn router(ctx: Arc<ApiContext>) -> Router {
    // Credentialed CORS cannot use wildcards, so methods and headers mirror
    // the preflight request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(api::health::handler))
        .route("/contact", post(api::contact::handler))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(cors)
        .with_state(ctx)
}
