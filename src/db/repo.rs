mod inventory;
mod inventory_db;
mod item;
mod item_db;
mod player;
mod player_db;

pub use inventory_db::InventoryRepository;
pub use item_db::ItemRepository;
pub use player_db::PlayerRepository;

pub use inventory::InventoryRepo;
pub use item::ItemRepo;
pub use player::PlayerRepo;
