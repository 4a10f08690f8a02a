pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::WardenConfig;
pub use error::{Result, WardenError};
pub use types::{EntityId, Mana, Turn};
