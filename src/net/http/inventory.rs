use super::AppState;
use super::error::{ApiError, ApiResult};
use super::item::parse_item_id;
use super::player::parse_player_id;
use crate::models::inventory::Inventory;
use crate::models::item::Item;
use crate::models::types::ItemId;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item_id: ItemId,
}

pub async fn list_player_items(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let player_id = parse_player_id(&raw_id)?;
    let items = state.registry.services.inventory.list_player_items(player_id).await?;
    Ok(Json(items))
}

pub async fn add_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Inventory>)> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let player_id = parse_player_id(&raw_id)?;
    let Json(req) = body.map_err(|e| ApiError::decode("AddItemRequest", e))?;

    let entry = state.registry.services.inventory.add_item(player_id, req.item_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn remove_item(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((raw_player_id, raw_item_id)) = path.map_err(ApiError::path)?;
    let player_id = parse_player_id(&raw_player_id)?;
    let item_id = parse_item_id(&raw_item_id)?;

    state.registry.services.inventory.remove_item(player_id, item_id).await?;
    Ok(StatusCode::OK)
}
