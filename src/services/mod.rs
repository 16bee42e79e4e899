//! Game services
//!
//! This module contains the race position mapping and the interactive
//! game loop that drives the engine from player input.

pub mod game;
pub mod race;
