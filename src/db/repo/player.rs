use crate::db::DbResult;
use crate::models::player::{CreatePlayerParams, Player, UpdatePlayerGoldParams, UpdatePlayerLevelParams};
use crate::models::types::PlayerId;

#[async_trait::async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Inserts a player with level 1 and no gold
    async fn create(&self, params: CreatePlayerParams) -> DbResult<Player>;

    async fn get_all(&self) -> DbResult<Vec<Player>>;

    /// Fails with `DbError::NotFound` when no player has this id
    async fn get_by_id(&self, id: PlayerId) -> DbResult<Player>;

    /// Fails with `DbError::NotFound` when no player has this username
    async fn get_by_username(&self, username: &str) -> DbResult<Player>;

    async fn update_level(&self, params: UpdatePlayerLevelParams) -> DbResult<()>;
    async fn increase_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()>;
    async fn decrease_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()>;
    async fn delete_by_id(&self, id: PlayerId) -> DbResult<()>;
}
