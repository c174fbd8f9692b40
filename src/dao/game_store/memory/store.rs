use std::sync::Arc;

use futures::future::BoxFuture;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, ScoreEntity, UserEntity},
    storage::{StorageError, StorageResult},
};

/// In-process storage backend keeping every table behind a single lock.
///
/// One `RwLock` guards users, games, and scores together, so multi-record
/// writes such as [`GameStore::complete_game`] are atomic: a reader never
/// observes a terminated game without its score record or with a stale
/// owner.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    inner: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    /// Users keyed by name, in registration order.
    users: IndexMap<String, UserEntity>,
    /// Games keyed by identifier, in creation order.
    games: IndexMap<Uuid, GameEntity>,
    /// Scores in completion order.
    scores: Vec<ScoreEntity>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn create_user(&self, user: UserEntity) -> StorageResult<()> {
        let mut tables = self.inner.write().await;
        if tables.users.contains_key(&user.name) {
            return Err(StorageError::Conflict(format!(
                "user `{}` already exists",
                user.name
            )));
        }
        tables.users.insert(user.name.clone(), user);
        Ok(())
    }

    async fn find_user(&self, name: &str) -> StorageResult<Option<UserEntity>> {
        let tables = self.inner.read().await;
        Ok(tables.users.get(name).cloned())
    }

    async fn save_user(&self, user: UserEntity) -> StorageResult<()> {
        let mut tables = self.inner.write().await;
        tables.users.insert(user.name.clone(), user);
        Ok(())
    }

    async fn list_users(&self) -> StorageResult<Vec<UserEntity>> {
        let tables = self.inner.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn list_users_ranked(&self) -> StorageResult<Vec<UserEntity>> {
        let tables = self.inner.read().await;
        let mut users: Vec<UserEntity> = tables.users.values().cloned().collect();
        // Stable sort keeps registration order between equal scores.
        users.sort_by_key(|user| std::cmp::Reverse(user.score));
        Ok(users)
    }

    async fn save_game(&self, game: GameEntity) -> StorageResult<()> {
        let mut tables = self.inner.write().await;
        tables.games.insert(game.id, game);
        Ok(())
    }

    async fn find_game(&self, id: Uuid) -> StorageResult<Option<GameEntity>> {
        let tables = self.inner.read().await;
        Ok(tables.games.get(&id).cloned())
    }

    async fn delete_game(&self, id: Uuid) -> StorageResult<bool> {
        let mut tables = self.inner.write().await;
        Ok(tables.games.shift_remove(&id).is_some())
    }

    async fn list_user_games(&self, name: &str) -> StorageResult<Vec<GameEntity>> {
        let tables = self.inner.read().await;
        Ok(tables
            .games
            .values()
            .filter(|game| game.user_name == name)
            .cloned()
            .collect())
    }

    async fn list_active_games(&self) -> StorageResult<Vec<GameEntity>> {
        let tables = self.inner.read().await;
        Ok(tables
            .games
            .values()
            .filter(|game| !game.game_over)
            .cloned()
            .collect())
    }

    async fn complete_game(
        &self,
        game: GameEntity,
        score: ScoreEntity,
        user: UserEntity,
    ) -> StorageResult<()> {
        let mut tables = self.inner.write().await;
        tables.games.insert(game.id, game);
        tables.scores.push(score);
        tables.users.insert(user.name.clone(), user);
        Ok(())
    }

    async fn list_scores(&self) -> StorageResult<Vec<ScoreEntity>> {
        let tables = self.inner.read().await;
        Ok(tables.scores.clone())
    }

    async fn list_high_scores(&self, limit: Option<usize>) -> StorageResult<Vec<ScoreEntity>> {
        let tables = self.inner.read().await;
        let mut scores: Vec<ScoreEntity> = tables
            .scores
            .iter()
            .filter(|score| score.won)
            .cloned()
            .collect();
        scores.sort_by_key(|score| score.guesses);
        if let Some(limit) = limit {
            scores.truncate(limit);
        }
        Ok(scores)
    }

    async fn list_user_scores(&self, name: &str) -> StorageResult<Vec<ScoreEntity>> {
        let tables = self.inner.read().await;
        Ok(tables
            .scores
            .iter()
            .filter(|score| score.user_name == name)
            .cloned()
            .collect())
    }
}

impl GameStore for MemoryGameStore {
    fn create_user(&self, user: UserEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.create_user(user).await })
    }

    fn find_user(&self, name: &str) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let store = self.clone();
        let name = name.to_owned();
        Box::pin(async move { store.find_user(&name).await })
    }

    fn save_user(&self, user: UserEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_user(user).await })
    }

    fn list_users(&self) -> BoxFuture<'static, StorageResult<Vec<UserEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_users().await })
    }

    fn list_users_ranked(&self) -> BoxFuture<'static, StorageResult<Vec<UserEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_users_ranked().await })
    }

    fn save_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_game(game).await })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_game(id).await })
    }

    fn list_user_games(&self, name: &str) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        let name = name.to_owned();
        Box::pin(async move { store.list_user_games(&name).await })
    }

    fn list_active_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_active_games().await })
    }

    fn complete_game(
        &self,
        game: GameEntity,
        score: ScoreEntity,
        user: UserEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.complete_game(game, score, user).await })
    }

    fn list_scores(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_scores().await })
    }

    fn list_high_scores(
        &self,
        limit: Option<usize>,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_high_scores(limit).await })
    }

    fn list_user_scores(&self, name: &str) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let store = self.clone();
        let name = name.to_owned();
        Box::pin(async move { store.list_user_scores(&name).await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn user(name: &str, score: i64) -> UserEntity {
        UserEntity {
            name: name.into(),
            email: None,
            score,
            active_games: 0,
            created_at: SystemTime::now(),
        }
    }

    fn game(user_name: &str, game_over: bool) -> GameEntity {
        GameEntity {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            answer: "hangman".into(),
            attempts_allowed: 5,
            attempts_remaining: if game_over { 0 } else { 5 },
            game_over,
            won: false,
            history: Vec::new(),
            created_at: SystemTime::now(),
            updated_at: SystemTime::now(),
        }
    }

    fn score(user_name: &str, won: bool, guesses: u32) -> ScoreEntity {
        ScoreEntity {
            user_name: user_name.into(),
            date: SystemTime::now(),
            won,
            guesses,
        }
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let store = MemoryGameStore::new();
        store.create_user(user("alice", 0)).await.unwrap();

        let err = store.create_user(user("alice", 0)).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn users_list_in_registration_order_and_rank_by_score() {
        let store = MemoryGameStore::new();
        store.create_user(user("alice", 1)).await.unwrap();
        store.create_user(user("bob", 3)).await.unwrap();
        store.create_user(user("carol", 2)).await.unwrap();

        let names: Vec<String> = store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["alice", "bob", "carol"]);

        let ranked: Vec<String> = store
            .list_users_ranked()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(ranked, ["bob", "carol", "alice"]);
    }

    #[tokio::test]
    async fn delete_game_reports_existence() {
        let store = MemoryGameStore::new();
        let game = game("alice", false);
        let id = game.id;
        store.save_game(game).await.unwrap();

        assert!(store.delete_game(id).await.unwrap());
        assert!(!store.delete_game(id).await.unwrap());
        assert!(store.find_game(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn active_games_exclude_terminal_ones() {
        let store = MemoryGameStore::new();
        store.save_game(game("alice", false)).await.unwrap();
        store.save_game(game("alice", true)).await.unwrap();
        store.save_game(game("bob", false)).await.unwrap();

        assert_eq!(store.list_active_games().await.unwrap().len(), 2);
        assert_eq!(store.list_user_games("alice").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn complete_game_updates_all_three_tables() {
        let store = MemoryGameStore::new();
        store.create_user(user("alice", 0)).await.unwrap();
        let mut game = game("alice", false);
        store.save_game(game.clone()).await.unwrap();

        game.game_over = true;
        game.attempts_remaining = 0;
        let mut owner = store.find_user("alice").await.unwrap().unwrap();
        owner.score -= 1;
        store
            .complete_game(game.clone(), score("alice", false, 5), owner)
            .await
            .unwrap();

        assert!(store.find_game(game.id).await.unwrap().unwrap().game_over);
        assert_eq!(store.list_scores().await.unwrap().len(), 1);
        assert_eq!(store.find_user("alice").await.unwrap().unwrap().score, -1);
    }

    #[tokio::test]
    async fn high_scores_keep_winners_with_fewest_guesses() {
        let store = MemoryGameStore::new();
        for (won, guesses) in [(true, 3), (true, 1), (false, 2), (true, 5)] {
            store
                .complete_game(game("alice", true), score("alice", won, guesses), user("alice", 0))
                .await
                .unwrap();
        }

        let top: Vec<u32> = store
            .list_high_scores(Some(2))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.guesses)
            .collect();
        assert_eq!(top, [1, 3]);

        let all: Vec<u32> = store
            .list_high_scores(None)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.guesses)
            .collect();
        assert_eq!(all, [1, 3, 5]);
    }

    #[tokio::test]
    async fn user_scores_are_filtered_by_owner() {
        let store = MemoryGameStore::new();
        store
            .complete_game(game("alice", true), score("alice", true, 2), user("alice", 1))
            .await
            .unwrap();
        store
            .complete_game(game("bob", true), score("bob", false, 5), user("bob", -1))
            .await
            .unwrap();

        let scores = store.list_user_scores("bob").await.unwrap();
        assert_eq!(scores.len(), 1);
        assert!(!scores[0].won);
    }
}
