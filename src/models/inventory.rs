use crate::models::types::{ItemId, PlayerId};
use serde::{Deserialize, Serialize};

/// "Player owns item". There is no quantity: owning an item twice is two identical rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub player_id: PlayerId,
    pub item_id: ItemId,
}
