use crate::db::DbResult;
use crate::models::item::{CreateItemParams, Item, UpdateItemValueParams};
use crate::models::types::ItemId;

#[async_trait::async_trait]
pub trait ItemRepo: Send + Sync {
    async fn create(&self, params: CreateItemParams) -> DbResult<Item>;
    async fn get_all(&self) -> DbResult<Vec<Item>>;
    async fn get_by_id(&self, id: ItemId) -> DbResult<Item>;
    async fn get_by_name(&self, name: &str) -> DbResult<Item>;
    async fn update_value(&self, params: UpdateItemValueParams) -> DbResult<()>;
    async fn delete_by_id(&self, id: ItemId) -> DbResult<()>;
}
