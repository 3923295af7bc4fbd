use crate::client::ChallengeClient;
use crate::domain::leaderboard::wire::{GroupRankingsRequest, UserRankingsRequest};
use crate::domain::leaderboard::{GroupRanking, UserRanking};
use crate::shared::{GroupId, GroupRef, PointsResponse, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// Points and rankings.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    client: ChallengeClient,
}

impl LeaderboardStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn get_user_points(&self, user: &UserId) -> StoreResult<PointsResponse> {
        let request = UserRef::from(user.clone());
        settle("getUserPoints", self.client.leaderboard().get_user_points(&request).await)
    }

    pub async fn get_group_points(&self, group: &GroupId) -> StoreResult<PointsResponse> {
        let request = GroupRef::from(group.clone());
        settle(
            "getGroupPoints",
            self.client.leaderboard().get_group_points(&request).await,
        )
    }

    pub async fn get_user_rankings(&self, users: &[UserId]) -> StoreResult<Vec<UserRanking>> {
        let request = UserRankingsRequest::from(users.to_vec());
        settle(
            "getUserRanking",
            self.client.leaderboard().get_user_rankings(&request).await,
        )
    }

    pub async fn get_group_rankings(&self, groups: &[GroupId]) -> StoreResult<Vec<GroupRanking>> {
        let request = GroupRankingsRequest::from(groups.to_vec());
        settle(
            "getGroupRanking",
            self.client.leaderboard().get_group_rankings(&request).await,
        )
    }
}
