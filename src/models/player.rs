use crate::db::DbResult;
use crate::models::types::PlayerId;
use crate::models::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub class: String,
    pub level: i32,
    pub gold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Positional: expects `id, username, class, level, gold, created_at, updated_at`.
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get(0)?,
            username: row.try_get(1)?,
            class: row.try_get(2)?,
            level: row.try_get(3)?,
            gold: row.try_get(4)?,
            created_at: row.try_get(5)?,
            updated_at: row.try_get(6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlayerParams {
    pub username: String,
    pub class: String,
}

impl CreatePlayerParams {
    /// Both fields are required; the message does not say which one was missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.class.is_empty() {
            return Err(ValidationError("username and/or class cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePlayerLevelParams {
    pub id: PlayerId,
    pub level: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePlayerGoldParams {
    pub id: PlayerId,
    pub amount: i32,
}
