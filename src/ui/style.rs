use crossterm::style::{Color as TermColor, Stylize};

use crate::models::color::{AvatarColor, Color};

/// Styles text for the terminal, or leaves it plain when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Bold text in the given ink.
    pub fn ink(&self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.with(ink_color(color)).bold().to_string()
    }

    /// Dark text on the avatar's background color.
    pub fn avatar(&self, color: AvatarColor, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.with(TermColor::Black).on(avatar_color(color)).bold().to_string()
    }
}

pub fn ink_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Yellow => TermColor::Yellow,
    }
}

pub fn avatar_color(color: AvatarColor) -> TermColor {
    match color {
        AvatarColor::Red => TermColor::Red,
        AvatarColor::Green => TermColor::Green,
        AvatarColor::Blue => TermColor::Blue,
        AvatarColor::Yellow => TermColor::Yellow,
        AvatarColor::Orange => TermColor::AnsiValue(208),
        AvatarColor::Lime => TermColor::AnsiValue(154),
        AvatarColor::Teal => TermColor::AnsiValue(30),
        AvatarColor::Purple => TermColor::AnsiValue(129),
    }
}
