//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use roster_core::ErrorResponse;
use roster_service::{CreateUserRequest, UpdateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "User-account management API",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
