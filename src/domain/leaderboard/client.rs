//! Leaderboard sub-client.

use crate::client::ChallengeClient;
use crate::domain::leaderboard::wire::{GroupRankingsRequest, UserRankingsRequest};
use crate::domain::leaderboard::{GroupRanking, UserRanking};
use crate::error::SdkError;
use crate::shared::{GroupRef, PointsResponse, UserRef};

/// Sub-client for `/Leaderboard/*`.
pub struct Leaderboard<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Leaderboard<'a> {
    pub async fn get_user_points(&self, request: &UserRef) -> Result<PointsResponse, SdkError> {
        self.client
            .http
            .post("/Leaderboard/_getUserPoints", request)
            .await
    }

    /// Sum of the members' points.
    pub async fn get_group_points(&self, request: &GroupRef) -> Result<PointsResponse, SdkError> {
        self.client
            .http
            .post("/Leaderboard/_getGroupPoints", request)
            .await
    }

    pub async fn get_user_rankings(
        &self,
        request: &UserRankingsRequest,
    ) -> Result<Vec<UserRanking>, SdkError> {
        self.client
            .http
            .post("/Leaderboard/_getUserRanking", request)
            .await
    }

    pub async fn get_group_rankings(
        &self,
        request: &GroupRankingsRequest,
    ) -> Result<Vec<GroupRanking>, SdkError> {
        self.client
            .http
            .post("/Leaderboard/_getGroupRanking", request)
            .await
    }
}
