//! Stroopwafel Game Engine
//!
//! A small game built around the Stroop effect: a color word is shown
//! printed in some color, and the player must pick the square matching
//! what the word *says*, not the ink it is printed in.
//!
//! # Overview
//!
//! Correct picks score a point and deal a fresh word. Wrong picks cost two
//! points (never below zero). Reaching the win threshold shows a win banner
//! with a reset control. A race track shows the player's progress next to
//! static rivals.
//!
//! # Modules
//!
//! - [`game_engine`] - Round generation, click scoring and the Playing/Won state
//! - [`models`] - Domain models (colors, rounds, players, config, errors)
//! - [`services`] - Race position mapping and the interactive game loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presenters for the terminal front end
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use stroopwafel::GameEngine;
//!
//! let mut engine = GameEngine::new(42);
//! let label = engine.round().label;
//! let outcome = engine.click(label);
//! assert!(outcome.correct);
//! assert_eq!(engine.score(), 1);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{ClickOutcome, GameEngine, GameState};
pub use models::color::{AvatarColor, Color};
pub use models::errors::{GameError, GameResult};
pub use models::round::Round;
