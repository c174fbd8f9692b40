use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        user::{CreateUserRequest, UsersResponse},
    },
    error::AppError,
    services::user_service,
    state::SharedState,
};

/// Routes handling player registration and listings.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(get_users))
        .route("/users/rankings", get(get_user_rankings))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 409, description = "User name already taken")
    )
)]
/// Register a new player; the name must be unique.
pub async fn create_user(
    State(state): State<SharedState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;
    let response = user_service::create_user(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "user",
    responses((status = 200, description = "All players", body = UsersResponse))
)]
/// Return every registered player in registration order.
pub async fn get_users(
    State(state): State<SharedState>,
) -> Result<Json<UsersResponse>, AppError> {
    let response = user_service::get_users(&state).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/users/rankings",
    tag = "user",
    responses((status = 200, description = "Players ordered by descending score", body = UsersResponse))
)]
/// Return every registered player ordered by descending score.
pub async fn get_user_rankings(
    State(state): State<SharedState>,
) -> Result<Json<UsersResponse>, AppError> {
    let response = user_service::get_user_rankings(&state).await?;
    Ok(Json(response))
}
