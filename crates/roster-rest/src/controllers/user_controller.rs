//! User management controller.

use crate::{
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use roster_service::{CreateUserRequest, UpdateUserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route(
            "/:user_name",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing user_name or email"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<crate::responses::ApiResponse<UserResponse>>), AppError> {
    debug!("Create user request: {}", request.user_name);

    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// Get a user by username.
#[utoipa::path(
    get,
    path = "/users/{user_name}",
    tag = "users",
    params(
        ("user_name" = String, Path, description = "Username of the user")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", user_name);

    let response = state.user_service.get_user(&user_name).await?;
    ok(response)
}

/// Apply a partial update to a user.
///
/// The path segment names the user as currently stored; a `user_name` in the
/// body renames the user.
#[utoipa::path(
    patch,
    path = "/users/{user_name}",
    tag = "users",
    params(
        ("user_name" = String, Path, description = "Current username of the user")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Provided field was empty"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", user_name);

    let response = state.user_service.update_user(&user_name, request).await?;
    ok(response)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{user_name}",
    tag = "users",
    params(
        ("user_name" = String, Path, description = "Username of the user")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", user_name);

    state.user_service.delete_user(&user_name).await?;
    Ok(no_content())
}
