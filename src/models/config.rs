//! Game configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//! Command-line flags are applied on top of whatever the file provides.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::constants::{
    DEFAULT_HANDLE, DEFAULT_RIVAL_HANDLE, DEFAULT_RIVAL_POINTS, TRACK_COLUMNS, TRACK_FRACTION,
    TRACK_WIDTH, WIN_SCORE,
};
use super::errors::{GameError, GameResult};
use super::player::{Player, PointEntry};

/// A static race opponent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rival {
    pub handle: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score that wins the game and finishes the race
    pub win_score: u32,
    /// Race track width in display units
    pub track_width: f64,
    /// Share of the track usable before the trophy
    pub track_fraction: f64,
    /// Terminal columns used to draw the track
    pub track_columns: usize,
    /// Local player's handle
    pub handle: String,
    pub rivals: Vec<Rival>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            track_width: TRACK_WIDTH,
            track_fraction: TRACK_FRACTION,
            track_columns: TRACK_COLUMNS,
            handle: DEFAULT_HANDLE.to_string(),
            rivals: vec![Rival {
                handle: DEFAULT_RIVAL_HANDLE.to_string(),
                points: DEFAULT_RIVAL_POINTS,
            }],
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> GameResult<Self> {
        log::info!("loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.win_score == 0 {
            return Err(GameError::InvalidConfig("win_score must be at least 1".into()));
        }
        if !self.track_width.is_finite() || self.track_width < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "track_width must be a non-negative number, got {}",
                self.track_width
            )));
        }
        if !(self.track_fraction > 0.0 && self.track_fraction <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "track_fraction must be in (0, 1], got {}",
                self.track_fraction
            )));
        }
        if self.track_columns == 0 {
            return Err(GameError::InvalidConfig("track_columns must be at least 1".into()));
        }
        if self.handle.trim().is_empty() {
            return Err(GameError::InvalidConfig("handle cannot be empty".into()));
        }
        if let Some(rival) = self.rivals.iter().find(|r| r.handle.trim().is_empty()) {
            return Err(GameError::InvalidConfig(format!(
                "rival handle cannot be empty (points {})",
                rival.points
            )));
        }
        Ok(())
    }

    /// Race roster: the local player gets id 1, rivals follow in file order.
    pub fn roster(&self) -> Vec<Player> {
        std::iter::once(Player::new(LOCAL_PLAYER_ID, self.handle.clone()))
            .chain(
                self.rivals
                    .iter()
                    .enumerate()
                    .map(|(i, r)| Player::new(LOCAL_PLAYER_ID + 1 + i as u32, r.handle.clone())),
            )
            .collect()
    }

    /// Race points matching [`GameConfig::roster`]. The local player's
    /// progress is the score capped at the goal.
    pub fn points(&self, score: u32) -> Vec<PointEntry> {
        std::iter::once(PointEntry::new(LOCAL_PLAYER_ID, score.min(self.win_score)))
            .chain(
                self.rivals
                    .iter()
                    .enumerate()
                    .map(|(i, r)| PointEntry::new(LOCAL_PLAYER_ID + 1 + i as u32, r.points)),
            )
            .collect()
    }
}

pub const LOCAL_PLAYER_ID: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.win_score, 13);
        assert_eq!(config.track_width, 350.0);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = GameConfig::from_toml(
            r#"
            track_fraction = 0.8
            handle = "speedy"

            [[rivals]]
            handle = "boop"
            points = 6

            [[rivals]]
            handle = "zed"
            points = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.track_fraction, 0.8);
        assert_eq!(config.handle, "speedy");
        assert_eq!(config.rivals.len(), 2);
        assert_eq!(config.win_score, 13);
    }

    #[test]
    fn rejects_zero_win_score() {
        let err = GameConfig::from_toml("win_score = 0").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_fraction_out_of_range() {
        for doc in ["track_fraction = 0.0", "track_fraction = 1.5"] {
            let err = GameConfig::from_toml(doc).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfig(_)), "{}", doc);
        }
    }

    #[test]
    fn rejects_negative_width_and_empty_handle() {
        assert!(GameConfig::from_toml("track_width = -1.0").is_err());
        assert!(GameConfig::from_toml("handle = \"  \"").is_err());
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = GameConfig::from_toml("win_score = \"many\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/stroopwafel.toml")).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }

    #[test]
    fn roster_and_points_line_up() {
        let config = GameConfig::default();
        let roster = config.roster();
        let points = config.points(20);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], Player::new(1, "moop"));
        assert_eq!(roster[1], Player::new(2, "boop"));
        assert_eq!(points[0], PointEntry::new(1, 13));
        assert_eq!(points[1], PointEntry::new(2, 6));
    }
}
