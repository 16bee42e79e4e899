//! Game state machine
//!
//! Scores clicks against the current round and derives whether the player
//! has won. The free functions are pure over explicit state and an injected
//! random source; [`GameEngine`] bundles that state with a seeded RNG for
//! the interactive front end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::color::Color;
use crate::models::constants::{WIN_SCORE, WRONG_PICK_PENALTY};
use crate::models::round::Round;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    /// Won is purely a function of the score; there is no terminal state.
    pub fn from_score(score: u32, win_score: u32) -> Self {
        if score >= win_score {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}

/// Result of scoring one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub score: u32,
    pub round: Round,
    pub correct: bool,
}

/// Deal a new round with label and ink drawn independently.
pub fn new_round<R: Rng + ?Sized>(rng: &mut R) -> Round {
    Round::random(rng)
}

/// Score a click against `round`.
///
/// A click matching the label earns a point and deals a new round. Any other
/// click costs [`WRONG_PICK_PENALTY`] points, floored at zero, and keeps the
/// round.
pub fn submit_click<R: Rng + ?Sized>(
    round: Round,
    clicked: Color,
    score: u32,
    rng: &mut R,
) -> ClickOutcome {
    if clicked == round.label {
        ClickOutcome {
            score: score.saturating_add(1),
            round: new_round(rng),
            correct: true,
        }
    } else {
        ClickOutcome {
            score: score.saturating_sub(WRONG_PICK_PENALTY),
            round,
            correct: false,
        }
    }
}

/// Score after a reset. The round is left as it was.
pub fn reset() -> u32 {
    0
}

/// Core game engine that owns the round, score and random source
pub struct GameEngine {
    rng: StdRng,
    round: Round,
    score: u32,
    win_score: u32,
}

impl GameEngine {
    /// Creates a new game engine with the default win threshold
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for dealing rounds
    pub fn new(seed: u64) -> Self {
        Self::with_win_score(seed, WIN_SCORE)
    }

    /// Creates a new game engine that is Won once the score reaches `win_score`
    pub fn with_win_score(seed: u64, win_score: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = new_round(&mut rng);
        log::debug!(
            "first round: {} printed in {}",
            round.label,
            round.render_color
        );
        Self {
            rng,
            round,
            score: 0,
            win_score,
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    pub fn state(&self) -> GameState {
        GameState::from_score(self.score, self.win_score)
    }

    pub fn is_won(&self) -> bool {
        self.state() == GameState::Won
    }

    /// Scores a click and applies the outcome
    ///
    /// # Returns
    ///
    /// The [`ClickOutcome`], whose `score` and `round` are now the engine's.
    pub fn click(&mut self, clicked: Color) -> ClickOutcome {
        let was_won = self.is_won();
        let outcome = submit_click(self.round, clicked, self.score, &mut self.rng);

        log::debug!(
            "clicked {} on {} ({}): score {} -> {}",
            clicked,
            self.round.label,
            if outcome.correct { "correct" } else { "wrong" },
            self.score,
            outcome.score
        );

        self.score = outcome.score;
        self.round = outcome.round;

        if !was_won && self.is_won() {
            log::info!("player won with score {}", self.score);
        }
        outcome
    }

    /// Sets the score back to zero, keeping the current round
    pub fn reset(&mut self) {
        log::info!("reset from score {}", self.score);
        self.score = reset();
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
