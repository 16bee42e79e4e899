/// A race participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub handle: String,
}

impl Player {
    pub fn new(id: u32, handle: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
        }
    }
}

/// Race progress for one player, keyed by [`Player::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointEntry {
    pub user_id: u32,
    pub val: u32,
}

impl PointEntry {
    pub fn new(user_id: u32, val: u32) -> Self {
        Self { user_id, val }
    }
}
