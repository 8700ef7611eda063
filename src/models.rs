use thiserror::Error;

pub mod inventory;
pub mod item;
pub mod player;
pub mod types;

/// A request value failed its shape check before reaching any service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);
