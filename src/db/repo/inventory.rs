use crate::db::DbResult;
use crate::models::inventory::Inventory;
use crate::models::item::Item;
use crate::models::types::PlayerId;

#[async_trait::async_trait]
pub trait InventoryRepo: Send + Sync {
    /// Adds the (player, item) pair. Adding an existing pair again adds a second row.
    async fn add_item(&self, entry: Inventory) -> DbResult<()>;

    /// Items owned by the player, one entry per inventory row
    async fn list_player_items(&self, player_id: PlayerId) -> DbResult<Vec<Item>>;

    /// Removes every row matching the exact pair
    async fn remove_item(&self, entry: Inventory) -> DbResult<()>;
}
