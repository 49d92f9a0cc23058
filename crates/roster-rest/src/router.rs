//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use roster_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    // Create CORS layer
    let cors = create_cors_layer(server_config);

    // Build the API router
    let api_router = Router::new()
        .nest("/users", user_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Add middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Roster API v1"
}
