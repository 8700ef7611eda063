use crate::config::Config;
use crate::db::Db;
use crate::db::repo::{InventoryRepo, InventoryRepository, ItemRepo, ItemRepository, PlayerRepo, PlayerRepository};
use crate::services::{InventoryService, ItemService, PlayerService};
use std::sync::Arc;

pub struct Repos {
    pub player: Arc<dyn PlayerRepo>,
    pub item: Arc<dyn ItemRepo>,
    pub inventory: Arc<dyn InventoryRepo>,
}

impl Repos {
    pub fn postgres(db: Arc<Db>) -> Self {
        Self {
            player: Arc::new(PlayerRepository::new(db.clone())),
            item: Arc::new(ItemRepository::new(db.clone())),
            inventory: Arc::new(InventoryRepository::new(db)),
        }
    }
}

pub struct Services {
    pub player: Arc<PlayerService>,
    pub item: Arc<ItemService>,
    pub inventory: Arc<InventoryService>,
}

/// Composition root: every repository and service is built once here and lives until shutdown.
pub struct Registry {
    pub repos: Arc<Repos>,
    pub services: Arc<Services>,
    pub config: Arc<Config>,
}

impl Registry {
    pub fn new(db: Arc<Db>, config: Arc<Config>) -> Self {
        Self::from_repos(Repos::postgres(db), config)
    }

    pub fn from_repos(repos: Repos, config: Arc<Config>) -> Self {
        let repos = Arc::new(repos);

        let services = Arc::new(Services {
            player: Arc::new(PlayerService::new(repos.player.clone())),
            item: Arc::new(ItemService::new(repos.item.clone())),
            inventory: Arc::new(InventoryService::new(repos.inventory.clone())),
        });

        Self {
            repos,
            services,
            config,
        }
    }
}
