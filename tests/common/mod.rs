#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use deadpool_postgres::PoolError;
use guildhall::config::Config;
use guildhall::db::DbResult;
use guildhall::db::error::DbError;
use guildhall::db::repo::{InventoryRepo, ItemRepo, PlayerRepo};
use guildhall::models::inventory::Inventory;
use guildhall::models::item::{CreateItemParams, Item, UpdateItemValueParams};
use guildhall::models::player::{CreatePlayerParams, Player, UpdatePlayerGoldParams, UpdatePlayerLevelParams};
use guildhall::models::types::{ItemId, PlayerId};
use guildhall::{Registry, Repos};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::time::Duration;
use tower::ServiceExt;

/// In-memory stand-in for the three PostgreSQL repositories. Like the real schema it
/// enforces unique usernames and item names on insert.
#[derive(Default)]
pub struct MemoryStore {
    players: Mutex<Vec<Player>>,
    items: Mutex<Vec<Item>>,
    inventory: Mutex<Vec<Inventory>>,
    next_player_id: AtomicI32,
    calls: AtomicUsize,
    /// Lookups fail as if the pool was gone
    pub broken_lookups: AtomicBool,
    /// Lookups never find anything, leaving uniqueness to the insert
    pub blind_lookups: AtomicBool,
    /// Id lookups stall this long before answering
    pub lookup_delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn registry(self: &Arc<Self>) -> Arc<Registry> {
        self.registry_with(Config::default())
    }

    pub fn registry_with(self: &Arc<Self>, config: Config) -> Arc<Registry> {
        let repos = Repos {
            player: self.clone(),
            item: self.clone(),
            inventory: self.clone(),
        };
        Arc::new(Registry::from_repos(repos, Arc::new(config)))
    }

    pub fn router(self: &Arc<Self>) -> Router {
        guildhall::router(self.registry())
    }

    pub fn router_with(self: &Arc<Self>, config: Config) -> Router {
        guildhall::router(self.registry_with(config))
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    pub fn item_count(&self) -> usize {
        self.items.lock().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn lookup<T>(&self, found: Option<T>, op: &str) -> DbResult<T> {
        if self.broken_lookups.load(Ordering::SeqCst) {
            return Err(DbError::Pool(PoolError::Closed).context("getting client"));
        }
        if self.blind_lookups.load(Ordering::SeqCst) {
            return Err(DbError::NotFound.context(op));
        }
        found.ok_or_else(|| DbError::NotFound.context(op))
    }
}

#[async_trait::async_trait]
impl PlayerRepo for MemoryStore {
    async fn create(&self, params: CreatePlayerParams) -> DbResult<Player> {
        self.touch();
        let mut players = self.players.lock();

        if players.iter().any(|p| p.username == params.username) {
            return Err(DbError::UniqueViolation(
                "duplicate key value violates unique constraint \"player_username_key\"".into(),
            )
            .context("inserting player"));
        }

        let now = Utc::now();
        let player = Player {
            id: PlayerId(self.next_player_id.fetch_add(1, Ordering::SeqCst) + 1),
            username: params.username,
            class: params.class,
            level: 1,
            gold: 0,
            created_at: now,
            updated_at: now,
        };
        players.push(player.clone());

        Ok(player)
    }

    async fn get_all(&self) -> DbResult<Vec<Player>> {
        self.touch();
        Ok(self.players.lock().clone())
    }

    async fn get_by_id(&self, id: PlayerId) -> DbResult<Player> {
        self.touch();
        let delay = *self.lookup_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let found = self.players.lock().iter().find(|p| p.id == id).cloned();
        self.lookup(found, "querying player by id")
    }

    async fn get_by_username(&self, username: &str) -> DbResult<Player> {
        self.touch();
        let found = self.players.lock().iter().find(|p| p.username == username).cloned();
        self.lookup(found, "querying player by username")
    }

    async fn update_level(&self, params: UpdatePlayerLevelParams) -> DbResult<()> {
        self.touch();
        for p in self.players.lock().iter_mut().filter(|p| p.id == params.id) {
            p.level = params.level;
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn increase_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()> {
        self.touch();
        for p in self.players.lock().iter_mut().filter(|p| p.id == params.id) {
            p.gold += params.amount;
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn decrease_gold(&self, params: UpdatePlayerGoldParams) -> DbResult<()> {
        self.touch();
        for p in self.players.lock().iter_mut().filter(|p| p.id == params.id) {
            p.gold -= params.amount;
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: PlayerId) -> DbResult<()> {
        self.touch();
        self.players.lock().retain(|p| p.id != id);
        self.inventory.lock().retain(|e| e.player_id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemRepo for MemoryStore {
    async fn create(&self, params: CreateItemParams) -> DbResult<Item> {
        self.touch();
        let mut items = self.items.lock();

        if items.iter().any(|i| i.name == params.name) {
            return Err(DbError::UniqueViolation(
                "duplicate key value violates unique constraint \"item_name_key\"".into(),
            )
            .context("inserting item"));
        }

        let item = Item {
            id: ItemId::new(),
            name: params.name,
            value: params.value,
        };
        items.push(item.clone());

        Ok(item)
    }

    async fn get_all(&self) -> DbResult<Vec<Item>> {
        self.touch();
        Ok(self.items.lock().clone())
    }

    async fn get_by_id(&self, id: ItemId) -> DbResult<Item> {
        self.touch();
        let found = self.items.lock().iter().find(|i| i.id == id).cloned();
        self.lookup(found, "querying item by id")
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Item> {
        self.touch();
        let found = self.items.lock().iter().find(|i| i.name == name).cloned();
        self.lookup(found, "querying item by name")
    }

    async fn update_value(&self, params: UpdateItemValueParams) -> DbResult<()> {
        self.touch();
        for i in self.items.lock().iter_mut().filter(|i| i.id == params.id) {
            i.value = params.new_value;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: ItemId) -> DbResult<()> {
        self.touch();
        self.items.lock().retain(|i| i.id != id);
        self.inventory.lock().retain(|e| e.item_id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl InventoryRepo for MemoryStore {
    async fn add_item(&self, entry: Inventory) -> DbResult<()> {
        self.touch();
        let player_known = self.players.lock().iter().any(|p| p.id == entry.player_id);
        let item_known = self.items.lock().iter().any(|i| i.id == entry.item_id);

        if !player_known || !item_known {
            return Err(DbError::ForeignKey(
                "insert or update on table \"inventory\" violates foreign key constraint".into(),
            )
            .context("adding item to player's inventory"));
        }

        self.inventory.lock().push(entry);
        Ok(())
    }

    async fn list_player_items(&self, player_id: PlayerId) -> DbResult<Vec<Item>> {
        self.touch();
        let items = self.items.lock();

        Ok(self
            .inventory
            .lock()
            .iter()
            .filter(|e| e.player_id == player_id)
            .filter_map(|e| items.iter().find(|i| i.id == e.item_id).cloned())
            .collect())
    }

    async fn remove_item(&self, entry: Inventory) -> DbResult<()> {
        self.touch();
        self.inventory.lock().retain(|e| *e != entry);
        Ok(())
    }
}

/// Sends one request through the router and returns the status and the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => req
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => req.body(Body::empty()),
    }
    .unwrap();

    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
