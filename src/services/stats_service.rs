use tokio::sync::mpsc;
use tracing::warn;

use crate::{dto::common::MessageResponse, error::ServiceError, state::SharedState};

/// Consume refresh requests and recompute the average-attempts cache.
///
/// Requests are sent fire-and-forget after every game creation; the loop
/// ends when the sending side (the shared state) is dropped. Failures are
/// logged and the next request is awaited, never propagated.
pub async fn run(state: SharedState, mut trigger: mpsc::UnboundedReceiver<()>) {
    while trigger.recv().await.is_some() {
        if let Err(err) = refresh_average_attempts(&state).await {
            warn!(error = %err, "failed to refresh average attempts cache");
        }
    }
}

/// Recompute the mean of `attempts_remaining` over all active games and
/// store it in the cache slot. With no active games the cache is left as
/// it is.
pub async fn refresh_average_attempts(state: &SharedState) -> Result<(), ServiceError> {
    let games = state.store().list_active_games().await?;
    if games.is_empty() {
        return Ok(());
    }

    let total: u64 = games.iter().map(|game| u64::from(game.attempts_remaining)).sum();
    let average = total as f64 / games.len() as f64;
    state
        .set_average_attempts(format!("The average moves remaining is {average:.2}"))
        .await;
    Ok(())
}

/// The cached average-attempts line, or an empty message if it was never
/// computed.
pub async fn get_average_attempts(state: &SharedState) -> MessageResponse {
    MessageResponse::new(state.average_attempts().await.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::game_store::memory::MemoryGameStore,
        dto::{
            game::{GuessRequest, NewGameRequest},
            user::CreateUserRequest,
        },
        services::{game_service, user_service},
        state::AppState,
    };

    async fn state_with_user(name: &str) -> SharedState {
        let (state, _stats_rx) = AppState::new(AppConfig::default(), Arc::new(MemoryGameStore::new()));
        user_service::create_user(
            &state,
            CreateUserRequest {
                name: name.into(),
                email: None,
            },
        )
        .await
        .unwrap();
        state
    }

    #[tokio::test]
    async fn cache_is_empty_until_first_refresh() {
        let state = state_with_user("alice").await;
        assert_eq!(get_average_attempts(&state).await.message, "");
    }

    #[tokio::test]
    async fn refresh_averages_active_games_only() {
        let state = state_with_user("alice").await;
        let first = game_service::new_game(
            &state,
            NewGameRequest {
                user_name: "alice".into(),
                attempts: Some(5),
            },
        )
        .await
        .unwrap();
        game_service::new_game(
            &state,
            NewGameRequest {
                user_name: "alice".into(),
                attempts: Some(5),
            },
        )
        .await
        .unwrap();

        // One missed guess brings the first game down to 4 attempts.
        game_service::guess_character(&state, first.id, GuessRequest { guess: "b".into() })
            .await
            .unwrap();

        refresh_average_attempts(&state).await.unwrap();
        assert_eq!(
            get_average_attempts(&state).await.message,
            "The average moves remaining is 4.50"
        );
    }

    #[tokio::test]
    async fn refresh_without_games_keeps_the_previous_value() {
        let state = state_with_user("alice").await;
        state.set_average_attempts("The average moves remaining is 3.00".into()).await;

        refresh_average_attempts(&state).await.unwrap();
        assert_eq!(
            get_average_attempts(&state).await.message,
            "The average moves remaining is 3.00"
        );
    }
}
