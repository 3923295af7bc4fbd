//! Progress sub-client — challenge schedules and completed parts.

use crate::client::ChallengeClient;
use crate::domain::progress::wire::{PartsQuery, UserChallenge};
use crate::domain::progress::Part;
use crate::error::SdkError;
use crate::shared::ChallengeRef;

/// Sub-client for `/ChallengeProgress/*`.
pub struct Progress<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Progress<'a> {
    /// Every part of a challenge's schedule.
    pub async fn get_parts(&self, request: &ChallengeRef) -> Result<Vec<Part>, SdkError> {
        self.client
            .http
            .post("/ChallengeProgress/_getParts", request)
            .await
    }

    /// Parts `user` has completed in `challenge`.
    pub async fn get_completed_parts(
        &self,
        request: &UserChallenge,
    ) -> Result<Vec<Part>, SdkError> {
        self.client
            .http
            .post("/ChallengeProgress/_getCompletedParts", request)
            .await
    }

    /// Resolve part ids to their (day, week) slots.
    pub async fn get_part_day_week(&self, request: &PartsQuery) -> Result<Vec<Part>, SdkError> {
        self.client
            .http
            .post("/ChallengeProgress/_getPartDayWeek", request)
            .await
    }
}
