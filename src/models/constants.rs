/// Score at which the player has won, and the finish line of the race.
pub const WIN_SCORE: u32 = 13;

/// Race track width in display units.
pub const TRACK_WIDTH: f64 = 350.0;

/// Share of the track usable before the trophy.
pub const TRACK_FRACTION: f64 = 0.86;

/// Terminal columns used to draw the race track.
pub const TRACK_COLUMNS: usize = 40;

/// Score lost on a wrong pick.
pub const WRONG_PICK_PENALTY: u32 = 2;

pub const DEFAULT_HANDLE: &str = "moop";
pub const DEFAULT_RIVAL_HANDLE: &str = "boop";
pub const DEFAULT_RIVAL_POINTS: u32 = 6;

pub const NUM_COLORS: usize = 4;
pub const NUM_AVATAR_COLORS: usize = 8;

pub const TITLE: &str = "STROOPWAFEL";
pub const TROPHY: &str = "[#]";
