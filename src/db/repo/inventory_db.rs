use crate::db::repo::inventory::InventoryRepo;
use crate::db::{Db, DbResult};
use crate::models::inventory::Inventory;
use crate::models::item::Item;
use crate::models::types::PlayerId;
use std::sync::Arc;

pub struct InventoryRepository {
    db: Arc<Db>,
}

impl InventoryRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl InventoryRepo for InventoryRepository {
    async fn add_item(&self, entry: Inventory) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "INSERT INTO inventory (player_id, item_id) VALUES ($1, $2)",
                &[&entry.player_id, &entry.item_id],
                "adding item to player's inventory",
            )
            .await?;
        Ok(())
    }

    async fn list_player_items(&self, player_id: PlayerId) -> DbResult<Vec<Item>> {
        self.db
            .query_all(
                r#"
                SELECT item.id, item.name, item.value
                FROM inventory
                JOIN item ON item.id = inventory.item_id
                WHERE inventory.player_id = $1
                "#,
                &[&player_id],
                "getting all items for player",
                Item::try_from_row,
            )
            .await
    }

    async fn remove_item(&self, entry: Inventory) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "DELETE FROM inventory WHERE player_id = $1 AND item_id = $2",
                &[&entry.player_id, &entry.item_id],
                "removing item from player's inventory",
            )
            .await?;
        Ok(())
    }
}
