use thiserror::Error;

use crate::protocol::ProtocolError;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WardenError>;
