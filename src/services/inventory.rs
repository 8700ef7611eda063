use crate::db::repo::InventoryRepo;
use crate::models::inventory::Inventory;
use crate::models::item::Item;
use crate::models::types::{ItemId, PlayerId};
use crate::services::{ServiceError, ServiceResult};
use std::sync::Arc;

/// Player and item ids are not checked here; the store's foreign keys reject unknown ones.
pub struct InventoryService {
    repo: Arc<dyn InventoryRepo>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn InventoryRepo>) -> Self {
        Self { repo }
    }

    pub async fn add_item(&self, player_id: PlayerId, item_id: ItemId) -> ServiceResult<Inventory> {
        let entry = Inventory { player_id, item_id };

        self.repo.add_item(entry).await.map_err(|e| {
            ServiceError::database(
                format!("adding item with id {item_id} to inventory of player with id {player_id}"),
                e,
            )
        })?;

        Ok(entry)
    }

    pub async fn list_player_items(&self, player_id: PlayerId) -> ServiceResult<Vec<Item>> {
        self.repo
            .list_player_items(player_id)
            .await
            .map_err(|e| ServiceError::database(format!("getting items for player with id {player_id}"), e))
    }

    pub async fn remove_item(&self, player_id: PlayerId, item_id: ItemId) -> ServiceResult<()> {
        self.repo
            .remove_item(Inventory { player_id, item_id })
            .await
            .map_err(|e| {
                ServiceError::database(
                    format!("removing item with id {item_id} from inventory of player with id {player_id}"),
                    e,
                )
            })
    }
}
