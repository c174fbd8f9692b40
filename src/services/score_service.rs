use crate::{dto::score::ScoresResponse, error::ServiceError, state::SharedState};

/// All recorded scores, in completion order.
pub async fn get_scores(state: &SharedState) -> Result<ScoresResponse, ServiceError> {
    let scores = state.store().list_scores().await?;
    Ok(scores.into())
}

/// Winning scores ordered by fewest guesses, truncated to `limit` entries.
pub async fn get_high_scores(
    state: &SharedState,
    limit: Option<usize>,
) -> Result<ScoresResponse, ServiceError> {
    let scores = state.store().list_high_scores(limit).await?;
    Ok(scores.into())
}

/// All scores recorded for the named player.
pub async fn get_user_scores(
    state: &SharedState,
    user_name: &str,
) -> Result<ScoresResponse, ServiceError> {
    let store = state.store();
    store
        .find_user(user_name)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("user `{user_name}` does not exist")))?;

    let scores = store.list_user_scores(user_name).await?;
    Ok(scores.into())
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

    /// Play one full game to a win, spending `wrong_guesses` attempts first.
    async fn win_game(state: &SharedState, user: &str, attempts: u32, wrong_guesses: u32) {
        let view = game_service::new_game(
            state,
            NewGameRequest {
                user_name: user.into(),
                attempts: Some(attempts),
            },
        )
        .await
        .unwrap();

        for _ in 0..wrong_guesses {
            game_service::guess_answer(
                state,
                view.id,
                GuessRequest {
                    guess: "definitely not the answer".into(),
                },
            )
            .await
            .unwrap();
        }

        let answer = state
            .store()
            .find_game(view.id)
            .await
            .unwrap()
            .unwrap()
            .answer;
        let won = game_service::guess_answer(state, view.id, GuessRequest { guess: answer })
            .await
            .unwrap();
        assert_eq!(won.message, "You win!");
    }

    #[tokio::test]
    async fn high_scores_rank_wins_by_fewest_guesses() {
        let state = state_with_user("alice").await;
        win_game(&state, "alice", 5, 2).await; // 3 guesses
        win_game(&state, "alice", 5, 0).await; // 1 guess
        win_game(&state, "alice", 7, 4).await; // 5 guesses

        let top = get_high_scores(&state, Some(2)).await.unwrap();
        let guesses: Vec<u32> = top.items.iter().map(|s| s.guesses).collect();
        assert_eq!(guesses, [1, 3]);

        let all = get_scores(&state).await.unwrap();
        assert_eq!(all.items.len(), 3);
    }

    #[tokio::test]
    async fn user_scores_require_a_known_user() {
        let state = state_with_user("alice").await;
        win_game(&state, "alice", 5, 0).await;

        let scores = get_user_scores(&state, "alice").await.unwrap();
        assert_eq!(scores.items.len(), 1);
        assert!(scores.items[0].won);

        assert!(matches!(
            get_user_scores(&state, "ghost").await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
