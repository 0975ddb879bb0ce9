use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::EngineError;

/// Errors that end a session
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, Error>;
