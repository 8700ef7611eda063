use crate::db::repo::PlayerRepo;
use crate::models::player::{CreatePlayerParams, Player, UpdatePlayerGoldParams, UpdatePlayerLevelParams};
use crate::models::types::PlayerId;
use crate::services::{ServiceError, ServiceResult};
use std::sync::Arc;

const USERNAME_TAKEN: &str = "username already in use";

pub struct PlayerService {
    repo: Arc<dyn PlayerRepo>,
}

impl PlayerService {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// Creates a new player after checking the username is free. The store enforces the
    /// same uniqueness, so a create that loses a race is still reported as a conflict.
    pub async fn create_player(&self, username: &str, class: &str) -> ServiceResult<Player> {
        match self.repo.get_by_username(username).await {
            Ok(_) => return Err(ServiceError::Conflict(USERNAME_TAKEN.into())),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(ServiceError::database(format!("checking username '{username}'"), e)),
        }

        let params = CreatePlayerParams {
            username: username.to_string(),
            class: class.to_string(),
        };

        match self.repo.create(params).await {
            Ok(player) => {
                tracing::info!(id = %player.id, username, "player created");
                Ok(player)
            }
            Err(e) if e.is_unique_violation() => Err(ServiceError::Conflict(USERNAME_TAKEN.into())),
            Err(e) => Err(ServiceError::database("creating new player", e)),
        }
    }

    pub async fn get_all_players(&self) -> ServiceResult<Vec<Player>> {
        self.repo
            .get_all()
            .await
            .map_err(|e| ServiceError::database("getting all players", e))
    }

    pub async fn get_player_by_id(&self, id: PlayerId) -> ServiceResult<Player> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::from_lookup(e, "player", "id", id))
    }

    pub async fn get_player_by_username(&self, username: &str) -> ServiceResult<Player> {
        self.repo
            .get_by_username(username)
            .await
            .map_err(|e| ServiceError::from_lookup(e, "player", "username", username))
    }

    /// Sets the level. Updating an unknown id is not an error.
    pub async fn update_player_level(&self, id: PlayerId, level: i32) -> ServiceResult<()> {
        self.repo
            .update_level(UpdatePlayerLevelParams { id, level })
            .await
            .map_err(|e| ServiceError::database(format!("updating level for player with id {id}"), e))
    }

    pub async fn increase_player_gold(&self, id: PlayerId, amount: i32) -> ServiceResult<()> {
        self.repo
            .increase_gold(UpdatePlayerGoldParams { id, amount })
            .await
            .map_err(|e| ServiceError::database(format!("increasing gold for player with id {id}"), e))
    }

    /// No lower bound is enforced; gold may go negative.
    pub async fn decrease_player_gold(&self, id: PlayerId, amount: i32) -> ServiceResult<()> {
        self.repo
            .decrease_gold(UpdatePlayerGoldParams { id, amount })
            .await
            .map_err(|e| ServiceError::database(format!("decreasing gold for player with id {id}"), e))
    }

    pub async fn delete_player_by_id(&self, id: PlayerId) -> ServiceResult<()> {
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| ServiceError::database(format!("deleting player with id {id}"), e))
    }
}
