use crate::db::repo::ItemRepo;
use crate::models::item::{CreateItemParams, Item, UpdateItemValueParams};
use crate::models::types::ItemId;
use crate::services::{ServiceError, ServiceResult};
use std::sync::Arc;

pub struct ItemService {
    repo: Arc<dyn ItemRepo>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepo>) -> Self {
        Self { repo }
    }

    pub async fn create_item(&self, name: &str, value: i32) -> ServiceResult<Item> {
        let taken = || ServiceError::Conflict(format!("item with name '{name}' already exists"));

        match self.repo.get_by_name(name).await {
            Ok(_) => return Err(taken()),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(ServiceError::database(format!("checking item name '{name}'"), e)),
        }

        let params = CreateItemParams {
            name: name.to_string(),
            value,
        };

        match self.repo.create(params).await {
            Ok(item) => {
                tracing::info!(id = %item.id, name, "item created");
                Ok(item)
            }
            Err(e) if e.is_unique_violation() => Err(taken()),
            Err(e) => Err(ServiceError::database("creating new item", e)),
        }
    }

    pub async fn get_all_items(&self) -> ServiceResult<Vec<Item>> {
        self.repo
            .get_all()
            .await
            .map_err(|e| ServiceError::database("getting all items", e))
    }

    pub async fn get_item_by_id(&self, id: ItemId) -> ServiceResult<Item> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::from_lookup(e, "item", "id", id))
    }

    pub async fn get_item_by_name(&self, name: &str) -> ServiceResult<Item> {
        self.repo
            .get_by_name(name)
            .await
            .map_err(|e| ServiceError::from_lookup(e, "item", "name", name))
    }

    pub async fn update_item_value(&self, id: ItemId, new_value: i32) -> ServiceResult<()> {
        self.repo
            .update_value(UpdateItemValueParams { id, new_value })
            .await
            .map_err(|e| ServiceError::database(format!("updating value for item with id {id}"), e))
    }

    pub async fn delete_item_by_id(&self, id: ItemId) -> ServiceResult<()> {
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| ServiceError::database(format!("deleting item with id {id}"), e))
    }
}
