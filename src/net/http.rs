use crate::state::registry::Registry;
use axum::{
    Router,
    http::{Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod inventory;
pub mod item;
pub mod player;

use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Binds one route per (method, path). The registry is shared by every request.
pub fn router(registry: Arc<Registry>) -> Router {
    let timeout = registry.config.request_timeout();

    Router::new()
        .route("/player", get(player::get_all_players).post(player::create_player))
        .route("/player/{id}", get(player::get_player_by_id).delete(player::delete_player))
        .route("/player/{id}/level", put(player::update_player_level))
        .route("/player/{id}/gold/increase", post(player::increase_player_gold))
        .route("/player/{id}/gold/decrease", post(player::decrease_player_gold))
        .route(
            "/player/{id}/items",
            get(inventory::list_player_items).post(inventory::add_item),
        )
        .route("/player/{id}/items/{item_id}", delete(inventory::remove_item))
        .route("/item", get(item::get_all_items).post(item::create_item))
        .route("/item/{id}", get(item::get_item_by_id).delete(item::delete_item))
        .route("/item/{id}/value", put(item::update_item_value))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(AppState { registry })
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(middleware::map_response(timeout_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

pub async fn serve(addr: SocketAddr, registry: Arc<Registry>) -> anyhow::Result<()> {
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server shut down gracefully");
    Ok(())
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("method {method} not allowed for {}", uri.path()))
}

/// The timeout layer answers with a bare status; give it the same envelope as every other error.
async fn timeout_envelope(resp: Response) -> Response {
    if resp.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::Timeout.into_response();
    }
    resp
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
