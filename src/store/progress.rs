use crate::client::ChallengeClient;
use crate::domain::progress::wire::{PartsQuery, UserChallenge};
use crate::domain::progress::Part;
use crate::shared::{ChallengeId, ChallengeRef, PartId, UserId};
use crate::store::{settle, StoreResult};

/// Challenge schedules and completion.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    client: ChallengeClient,
}

impl ProgressStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn get_parts(&self, challenge: &ChallengeId) -> StoreResult<Vec<Part>> {
        let request = ChallengeRef::from(challenge.clone());
        settle("getParts", self.client.progress().get_parts(&request).await)
    }

    pub async fn get_completed_parts(
        &self,
        user: &UserId,
        challenge: &ChallengeId,
    ) -> StoreResult<Vec<Part>> {
        let request = UserChallenge {
            user: user.clone(),
            challenge: challenge.clone(),
        };
        settle(
            "getCompletedParts",
            self.client.progress().get_completed_parts(&request).await,
        )
    }

    pub async fn get_part_day_week(&self, parts: &[PartId]) -> StoreResult<Vec<Part>> {
        let request: PartsQuery = parts.iter().cloned().collect();
        settle(
            "getPartDayWeek",
            self.client.progress().get_part_day_week(&request).await,
        )
    }
}
