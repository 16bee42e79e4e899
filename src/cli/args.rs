use std::path::PathBuf;

use clap::Parser;

use crate::models::config::GameConfig;
use crate::models::errors::GameResult;

/// Pick the color the word says, not the color it is printed in.
#[derive(Debug, Parser)]
#[command(name = "stroopwafel", version)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with game settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Your handle on the race track
    #[arg(long)]
    pub handle: Option<String>,

    /// Print words as plain text instead of ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the effective config: file (or defaults) with flags on top.
    pub fn resolve_config(&self) -> GameResult<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(handle) = &self.handle {
            config.handle = handle.clone();
        }
        config.validate()?;
        Ok(config)
    }

    /// Color only when writing to a terminal and not turned off.
    pub fn color_enabled(&self, stdout_is_terminal: bool) -> bool {
        stdout_is_terminal && !self.no_color
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
