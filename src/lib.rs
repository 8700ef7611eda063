pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod net;
pub mod services;
pub mod state;

// Convenient re-exports (so call sites can do `guildhall::Registry`, etc.)
pub use net::http::router;
pub use state::registry::{Registry, Repos};
