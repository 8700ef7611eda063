mod error;
mod inventory;
mod item;
mod player;

pub use inventory::InventoryService;
pub use item::ItemService;
pub use player::PlayerService;

pub use error::{ServiceError, ServiceResult, error_chain};
