//! Domain Value Objects

use derive_more::Display;

/// Rating tier shown next to a player on the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum RatingTier {
    #[display("Novice")]
    Novice,
    #[display("Apprentice")]
    Apprentice,
    #[display("Pro")]
    Pro,
    #[display("Expert")]
    Expert,
    #[display("Master")]
    Master,
}

impl RatingTier {
    pub const fn from_rating(rating: i64) -> Self {
        match rating {
            r if r >= 2000 => RatingTier::Master,
            r if r >= 1000 => RatingTier::Expert,
            r if r >= 500 => RatingTier::Pro,
            r if r >= 100 => RatingTier::Apprentice,
            _ => RatingTier::Novice,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            RatingTier::Novice => "novice",
            RatingTier::Apprentice => "apprentice",
            RatingTier::Pro => "pro",
            RatingTier::Expert => "expert",
            RatingTier::Master => "master",
        }
    }
}

/// Page size for list queries, clamped to `1..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct ResultLimit(u32);

impl ResultLimit {
    pub const MAX: u32 = 100;

    /// `requested` clamped into range, `default` when absent
    pub fn new(requested: Option<u32>, default: u32) -> Self {
        Self(requested.unwrap_or(default).clamp(1, Self::MAX))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}
