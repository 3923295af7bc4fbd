//! Wire types for `/Leaderboard/*`.

use crate::shared::{GroupId, UserId};
use serde::{Deserialize, Serialize};

/// `{users: [..]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRankingsRequest {
    pub users: Vec<UserId>,
}

/// `{groups: [..]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRankingsRequest {
    pub groups: Vec<GroupId>,
}

impl From<Vec<UserId>> for UserRankingsRequest {
    fn from(users: Vec<UserId>) -> Self {
        Self { users }
    }
}

impl From<Vec<GroupId>> for GroupRankingsRequest {
    fn from(groups: Vec<GroupId>) -> Self {
        Self { groups }
    }
}
