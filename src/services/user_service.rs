use std::time::SystemTime;

use tracing::info;

use crate::{
    dao::models::UserEntity,
    dto::{
        common::MessageResponse,
        user::{CreateUserRequest, UsersResponse},
    },
    error::ServiceError,
    state::SharedState,
};

/// Register a new player; the name must not be taken yet.
pub async fn create_user(
    state: &SharedState,
    request: CreateUserRequest,
) -> Result<MessageResponse, ServiceError> {
    let user = UserEntity {
        name: request.name.clone(),
        email: request.email,
        score: 0,
        active_games: 0,
        created_at: SystemTime::now(),
    };

    state.store().create_user(user).await?;

    info!(user = %request.name, "registered new user");
    Ok(MessageResponse::new(format!(
        "User {} created!",
        request.name
    )))
}

/// All registered players in registration order.
pub async fn get_users(state: &SharedState) -> Result<UsersResponse, ServiceError> {
    let users = state.store().list_users().await?;
    Ok(users.into())
}

/// All registered players ordered by descending score.
pub async fn get_user_rankings(state: &SharedState) -> Result<UsersResponse, ServiceError> {
    let users = state.store().list_users_ranked().await?;
    Ok(users.into())
}
