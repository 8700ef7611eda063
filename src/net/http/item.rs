use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::models::item::{CreateItemParams, Item};
use crate::models::types::ItemId;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateValueRequest {
    pub value: i32,
}

pub(super) fn parse_item_id(raw: &str) -> ApiResult<ItemId> {
    raw.parse().map_err(|_| ApiError::invalid_id(raw))
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItemParams>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(params) = body.map_err(|e| ApiError::decode("CreateItemParams", e))?;
    params.validate()?;

    let item = state
        .registry
        .services
        .item
        .create_item(&params.name, params.value)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /item` lists the catalog; `GET /item?name=x` looks up a single item.
pub async fn get_all_items(
    State(state): State<AppState>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(ApiError::query)?;
    let items = &state.registry.services.item;

    match query.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => Ok(Json(items.get_item_by_name(name).await?).into_response()),
        None => Ok(Json(items.get_all_items().await?).into_response()),
    }
}

pub async fn get_item_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_item_id(&raw_id)?;
    let item = state.registry.services.item.get_item_by_id(id).await?;
    Ok(Json(item))
}

pub async fn update_item_value(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateValueRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_item_id(&raw_id)?;
    let Json(req) = body.map_err(|e| ApiError::decode("UpdateValueRequest", e))?;

    state.registry.services.item.update_item_value(id, req.value).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_item_id(&raw_id)?;
    state.registry.services.item.delete_item_by_id(id).await?;
    Ok(StatusCode::OK)
}
