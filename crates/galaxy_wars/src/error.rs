//! Game-level errors
//!
//! Everything here is raised before the first frame. A running frame never fails.

use arcade_engine::config::ConfigError;
use arcade_engine::input::ScriptError;
use thiserror::Error;

/// Startup errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input script could not be loaded
    #[error("Input script error: {0}")]
    Script(#[from] ScriptError),
}

/// Game result type
pub type GameResult<T> = Result<T, GameError>;
