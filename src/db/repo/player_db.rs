use crate::db::repo::player::PlayerRepo;
use crate::db::{Db, DbResult};
use crate::models::player::{CreatePlayerParams, Player, UpdatePlayerGoldParams, UpdatePlayerLevelParams};
use crate::models::types::PlayerId;
use std::sync::Arc;

pub struct PlayerRepository {
    db: Arc<Db>,
}

impl PlayerRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl PlayerRepo for PlayerRepository {
    async fn create(&self, params: CreatePlayerParams) -> DbResult<Player> {
        self.db
            .query_one_in_tx(
                r#"
                INSERT INTO player (username, class, level, gold, created_at, updated_at)
                VALUES ($1, $2, 1, 0, now(), now())
                RETURNING id, username, class, level, gold, created_at, updated_at
                "#,
                &[&params.username, &params.class],
                "inserting player",
                Player::try_from_row,
            )
            .await
    }

    async fn get_all(&self) -> DbResult<Vec<Player>> {
        self.db
            .query_all(
                "SELECT id, username, class, level, gold, created_at, updated_at FROM player ORDER BY id",
                &[],
                "querying for all players",
                Player::try_from_row,
            )
            .await
    }

    async fn get_by_id(&self, id: PlayerId) -> DbResult<Player> {
        self.db
            .query_one(
                "SELECT id, username, class, level, gold, created_at, updated_at FROM player WHERE id = $1",
                &[&id],
                "querying player by id",
                Player::try_from_row,
            )
            .await
    }

    async fn get_by_username(&self, username: &str) -> DbResult<Player> {
        self.db
            .query_one(
                "SELECT id, username, class, level, gold, created_at, updated_at FROM player WHERE username = $1",
                &[&username],
                "querying player by username",
                Player::try_from_row,
            )
            .await
    }

    async fn update_level(&self, params: UpdatePlayerLevelParams) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "UPDATE player SET level = $2, updated_at = now() WHERE id = $1",
                &[&params.id, &params.level],
                "updating player level",
            )
            .await?;
        Ok(())
    }

    async fn increase_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "UPDATE player SET gold = gold + $2, updated_at = now() WHERE id = $1",
                &[&params.id, &params.amount],
                "increasing player gold",
            )
            .await?;
        Ok(())
    }

    async fn decrease_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "UPDATE player SET gold = gold - $2, updated_at = now() WHERE id = $1",
                &[&params.id, &params.amount],
                "decreasing player gold",
            )
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: PlayerId) -> DbResult<()> {
        self.db
            .execute_in_tx("DELETE FROM player WHERE id = $1", &[&id], "deleting player")
            .await?;
        Ok(())
    }
}
