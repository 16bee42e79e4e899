use rand::Rng;

use super::color::Color;

/// One color-word challenge.
///
/// `label` is the color the word names; `render_color` is the ink it is
/// printed in. The two are drawn independently and may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub label: Color,
    pub render_color: Color,
}

impl Round {
    pub fn new(label: Color, render_color: Color) -> Self {
        Self { label, render_color }
    }

    /// Deal a fresh round from the injected random source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let label = Color::random(rng);
        let render_color = Color::random(rng);
        Self { label, render_color }
    }
}
