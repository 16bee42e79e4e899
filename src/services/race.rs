//! Race position mapping
//!
//! Pure functions placing players on the race track: a stable avatar color
//! per handle, and a horizontal offset proportional to progress.

use crate::models::color::AvatarColor;
use crate::models::constants::NUM_AVATAR_COLORS;
use crate::models::errors::{GameError, GameResult};
use crate::models::player::{Player, PointEntry};

/// 32-bit rolling hash (`hash * 31 + unit`, wrapping) reduced modulo `modulus`.
///
/// Each character contributes its first UTF-16 code unit.
pub fn string_modulus(s: &str, modulus: usize) -> usize {
    let hash = s.chars().fold(0i32, |hash, c| {
        let mut buf = [0u16; 2];
        let unit = c.encode_utf16(&mut buf)[0];
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs() as usize % modulus
}

/// Deterministic avatar color for a handle. Different handles may collide.
pub fn avatar_color(handle: &str) -> AvatarColor {
    AvatarColor::ALL[string_modulus(handle, NUM_AVATAR_COLORS)]
}

/// Horizontal offset for `pos` points out of `goal` on a track `track_width`
/// wide, of which `fraction` is usable before the trophy.
///
/// Positions past the goal are not clamped. A zero goal is rejected.
pub fn compute_offset(pos: u32, goal: u32, track_width: f64, fraction: f64) -> GameResult<i64> {
    if goal == 0 {
        return Err(GameError::InvalidInput("race goal must be positive".into()));
    }
    let share = f64::from(pos) / f64::from(goal);
    Ok((share * track_width * fraction).round() as i64)
}

/// Race points for `player_id`.
///
/// Every listed player must have an entry; a missing one is reported as
/// [`GameError::NotFound`] for the caller to propagate.
pub fn extract_points(points: &[PointEntry], player_id: u32) -> GameResult<u32> {
    points
        .iter()
        .find(|p| p.user_id == player_id)
        .map(|p| p.val)
        .ok_or(GameError::NotFound { player_id })
}

/// Track geometry shared by every lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub width: f64,
    pub fraction: f64,
}

impl Track {
    pub fn new(width: f64, fraction: f64) -> Self {
        Self { width, fraction }
    }

    pub fn offset(&self, pos: u32, goal: u32) -> GameResult<i64> {
        compute_offset(pos, goal, self.width, self.fraction)
    }
}

/// Where one player is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LanePosition {
    pub player_id: u32,
    pub handle: String,
    pub color: AvatarColor,
    pub pos: u32,
    pub offset: i64,
}

/// Place every player on the track, in roster order.
pub fn lay_out(
    players: &[Player],
    points: &[PointEntry],
    goal: u32,
    track: &Track,
) -> GameResult<Vec<LanePosition>> {
    players
        .iter()
        .map(|player| {
            let pos = extract_points(points, player.id)?;
            Ok(LanePosition {
                player_id: player.id,
                handle: player.handle.clone(),
                color: avatar_color(&player.handle),
                pos,
                offset: track.offset(pos, goal)?,
            })
        })
        .collect()
}
