use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// A race lookup asked for a player with no point entry
    #[error("no race points recorded for player {player_id}")]
    NotFound { player_id: u32 },
    /// Invalid input provided by the player or a caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration file is not valid TOML for [`GameConfig`](super::config::GameConfig)
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_found_names_the_player() {
        let err = GameError::NotFound { player_id: 7 };
        assert_eq!(err.to_string(), "no race points recorded for player 7");
    }

    #[test]
    fn io_error_keeps_source() {
        let err: GameError =
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed").into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.source().is_some());
    }
}
