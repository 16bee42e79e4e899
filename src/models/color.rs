use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::constants::{NUM_AVATAR_COLORS, NUM_COLORS};
use super::errors::GameError;

/// The four colors a word can name or be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
}

impl Color {
    pub const ALL: [Color; NUM_COLORS] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
        }
    }

    /// Draw one color uniformly from the palette.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::ALL[rng.gen_range(0..NUM_COLORS)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Accepts the full name or its first letter, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "g" | "green" => Ok(Color::Green),
            "b" | "blue" => Ok(Color::Blue),
            "y" | "yellow" => Ok(Color::Yellow),
            other => Err(GameError::InvalidInput(format!("unknown color '{}'", other))),
        }
    }
}

/// Palette used to paint race avatars. Order matters: the handle hash
/// indexes into [`AvatarColor::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarColor {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Orange = 4,
    Lime = 5,
    Teal = 6,
    Purple = 7,
}

impl AvatarColor {
    pub const ALL: [AvatarColor; NUM_AVATAR_COLORS] = [
        AvatarColor::Red,
        AvatarColor::Green,
        AvatarColor::Blue,
        AvatarColor::Yellow,
        AvatarColor::Orange,
        AvatarColor::Lime,
        AvatarColor::Teal,
        AvatarColor::Purple,
    ];
}
