//! Leaderboard domain — point totals and rankings for users and groups.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{GroupId, UserId};
use serde::{Deserialize, Serialize};

pub use wire::{GroupRankingsRequest, UserRankingsRequest};

/// Row of `/Leaderboard/_getUserRanking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRanking {
    pub user: UserId,
    pub points: i64,
}

/// Row of `/Leaderboard/_getGroupRanking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRanking {
    pub group: GroupId,
    pub points: i64,
}

/// Position of `user` (1-based) in a ranking, if present.
///
/// Rankings come back ordered by the backend; equal totals share a position.
pub fn position_of(rankings: &[UserRanking], user: &UserId) -> Option<usize> {
    let points = rankings.iter().find(|r| &r.user == user)?.points;
    Some(rankings.iter().filter(|r| r.points > points).count() + 1)
}
