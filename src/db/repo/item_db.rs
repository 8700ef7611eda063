use crate::db::repo::item::ItemRepo;
use crate::db::{Db, DbResult};
use crate::models::item::{CreateItemParams, Item, UpdateItemValueParams};
use crate::models::types::ItemId;
use std::sync::Arc;

pub struct ItemRepository {
    db: Arc<Db>,
}

impl ItemRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ItemRepo for ItemRepository {
    async fn create(&self, params: CreateItemParams) -> DbResult<Item> {
        let id = ItemId::new();

        self.db
            .query_one_in_tx(
                r#"
                INSERT INTO item (id, name, value)
                VALUES ($1, $2, $3)
                RETURNING id, name, value
                "#,
                &[&id, &params.name, &params.value],
                "inserting item",
                Item::try_from_row,
            )
            .await
    }

    async fn get_all(&self) -> DbResult<Vec<Item>> {
        self.db
            .query_all(
                "SELECT id, name, value FROM item ORDER BY name",
                &[],
                "querying for all items",
                Item::try_from_row,
            )
            .await
    }

    async fn get_by_id(&self, id: ItemId) -> DbResult<Item> {
        self.db
            .query_one(
                "SELECT id, name, value FROM item WHERE id = $1",
                &[&id],
                "querying item by id",
                Item::try_from_row,
            )
            .await
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Item> {
        self.db
            .query_one(
                "SELECT id, name, value FROM item WHERE name = $1",
                &[&name],
                "querying item by name",
                Item::try_from_row,
            )
            .await
    }

    async fn update_value(&self, params: UpdateItemValueParams) -> DbResult<()> {
        self.db
            .execute_in_tx(
                "UPDATE item SET value = $2 WHERE id = $1",
                &[&params.id, &params.new_value],
                "updating item value",
            )
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: ItemId) -> DbResult<()> {
        self.db
            .execute_in_tx("DELETE FROM item WHERE id = $1", &[&id], "deleting item")
            .await?;
        Ok(())
    }
}
