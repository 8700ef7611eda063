use crate::db::DbResult;
use crate::models::types::ItemId;
use crate::models::ValidationError;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: i32,
}

impl Item {
    /// Positional: expects `id, name, value` in that order.
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            value: row.try_get(2)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemParams {
    pub name: String,
    #[serde(default)]
    pub value: i32,
}

impl CreateItemParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError("name cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateItemValueParams {
    pub id: ItemId,
    pub new_value: i32,
}
