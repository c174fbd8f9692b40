pub mod memory;

use crate::dao::models::{GameEntity, ScoreEntity, UserEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;
use uuid::Uuid;

/// Abstraction over the persistence layer for users, games, and scores.
pub trait GameStore: Send + Sync {
    /// Register a new user; fails with a conflict when the name is taken.
    fn create_user(&self, user: UserEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a user by name.
    fn find_user(&self, name: &str) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;
    /// Overwrite an existing user record.
    fn save_user(&self, user: UserEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// All users in registration order.
    fn list_users(&self) -> BoxFuture<'static, StorageResult<Vec<UserEntity>>>;
    /// All users ordered by descending score.
    fn list_users_ranked(&self) -> BoxFuture<'static, StorageResult<Vec<UserEntity>>>;
    /// Insert or overwrite a game record.
    fn save_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a game by identifier.
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Delete a game record, reporting whether it existed.
    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    /// All games owned by the named user, in creation order.
    fn list_user_games(&self, name: &str) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// All games that have not reached a terminal state yet.
    fn list_active_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Persist a concluded game, its score record, and the updated owner in
    /// one atomic operation.
    fn complete_game(
        &self,
        game: GameEntity,
        score: ScoreEntity,
        user: UserEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    /// All score records, in completion order.
    fn list_scores(&self) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    /// Winning scores ordered by fewest guesses, optionally truncated.
    fn list_high_scores(
        &self,
        limit: Option<usize>,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    /// All score records belonging to the named user.
    fn list_user_scores(&self, name: &str) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    /// Probe the backend for liveness.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
