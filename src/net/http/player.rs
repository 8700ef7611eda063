use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::models::player::{CreatePlayerParams, Player};
use crate::models::types::PlayerId;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLevelRequest {
    pub level: i32,
}

#[derive(Debug, Deserialize)]
pub struct GoldRequest {
    pub amount: i32,
}

pub(super) fn parse_player_id(raw: &str) -> ApiResult<PlayerId> {
    raw.parse().map_err(|_| ApiError::invalid_id(raw))
}

pub async fn create_player(
    State(state): State<AppState>,
    body: Result<Json<CreatePlayerParams>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let Json(params) = body.map_err(|e| ApiError::decode("CreatePlayerParams", e))?;
    params.validate()?;

    let player = state
        .registry
        .services
        .player
        .create_player(&params.username, &params.class)
        .await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// `GET /player` lists everyone; `GET /player?username=x` looks up a single player.
pub async fn get_all_players(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(ApiError::query)?;
    let players = &state.registry.services.player;

    match query.username.as_deref().filter(|u| !u.is_empty()) {
        Some(username) => {
            let player = players.get_player_by_username(username).await?;
            Ok(Json(player).into_response())
        }
        None => {
            let all = players.get_all_players().await?;
            Ok(Json(all).into_response())
        }
    }
}

pub async fn get_player_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Player>> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_player_id(&raw_id)?;
    let player = state.registry.services.player.get_player_by_id(id).await?;
    Ok(Json(player))
}

pub async fn update_player_level(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateLevelRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_player_id(&raw_id)?;
    let Json(req) = body.map_err(|e| ApiError::decode("UpdateLevelRequest", e))?;

    state.registry.services.player.update_player_level(id, req.level).await?;
    Ok(StatusCode::OK)
}

pub async fn increase_player_gold(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<GoldRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_player_id(&raw_id)?;
    let Json(req) = body.map_err(|e| ApiError::decode("GoldRequest", e))?;

    state.registry.services.player.increase_player_gold(id, req.amount).await?;
    Ok(StatusCode::OK)
}

pub async fn decrease_player_gold(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<GoldRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_player_id(&raw_id)?;
    let Json(req) = body.map_err(|e| ApiError::decode("GoldRequest", e))?;

    state.registry.services.player.decrease_player_gold(id, req.amount).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_player(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(ApiError::path)?;
    let id = parse_player_id(&raw_id)?;
    state.registry.services.player.delete_player_by_id(id).await?;
    Ok(StatusCode::OK)
}
