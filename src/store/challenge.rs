use crate::client::ChallengeClient;
use crate::domain::challenge::wire::{
    ChallengeAction, ChallengeNameResponse, CreateChallengeRequest, CreateChallengeResponse,
    CreatorResponse, DateCreatedResponse, IsOpenResponse, StatusResponse,
};
use crate::domain::challenge::{ChallengeDetails, ExerciseInfo};
use crate::shared::{ChallengeId, ChallengeRef, PointsResponse, SessionToken, UserId, UserRef};
use crate::store::{settle, StoreResult};

/// Challenge definitions.
#[derive(Debug, Clone)]
pub struct ChallengeDefinitionStore {
    client: ChallengeClient,
}

impl ChallengeDefinitionStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn create_challenge(
        &self,
        session: &SessionToken,
        exercise: &str,
        days_of_week: u32,
        weeks: u32,
        level: u32,
        info: ExerciseInfo,
    ) -> StoreResult<CreateChallengeResponse> {
        let request = CreateChallengeRequest {
            session: Some(session.clone()),
            exercise: exercise.to_string(),
            days_of_week,
            weeks,
            level,
            info,
        };
        settle("createChallenge", self.client.challenges().create(&request).await)
    }

    pub async fn delete_challenge(
        &self,
        session: &SessionToken,
        challenge: &ChallengeId,
    ) -> StoreResult<StatusResponse> {
        let request = action(session, challenge);
        settle("deleteChallenge", self.client.challenges().delete(&request).await)
    }

    pub async fn open_challenge(
        &self,
        session: &SessionToken,
        challenge: &ChallengeId,
    ) -> StoreResult<StatusResponse> {
        let request = action(session, challenge);
        settle("openChallenge", self.client.challenges().open(&request).await)
    }

    pub async fn close_challenge(
        &self,
        session: &SessionToken,
        challenge: &ChallengeId,
    ) -> StoreResult<StatusResponse> {
        let request = action(session, challenge);
        settle("closeChallenge", self.client.challenges().close(&request).await)
    }

    pub async fn is_open(&self, challenge: &ChallengeId) -> StoreResult<IsOpenResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle("isOpen", self.client.challenges().is_open(&request).await)
    }

    pub async fn get_challenge_details(
        &self,
        challenge: &ChallengeId,
    ) -> StoreResult<Vec<ChallengeDetails>> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getChallengeDetails",
            self.client.challenges().get_details(&request).await,
        )
    }

    pub async fn get_creator(&self, challenge: &ChallengeId) -> StoreResult<CreatorResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle("getCreator", self.client.challenges().get_creator(&request).await)
    }

    pub async fn get_challenge_name(
        &self,
        challenge: &ChallengeId,
    ) -> StoreResult<ChallengeNameResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle("getChallengeName", self.client.challenges().get_name(&request).await)
    }

    pub async fn get_date_created(
        &self,
        challenge: &ChallengeId,
    ) -> StoreResult<DateCreatedResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getDateCreated",
            self.client.challenges().get_date_created(&request).await,
        )
    }

    pub async fn get_part_points(&self, challenge: &ChallengeId) -> StoreResult<PointsResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getPartPoints",
            self.client.challenges().get_part_points(&request).await,
        )
    }

    pub async fn get_bonus_points(&self, challenge: &ChallengeId) -> StoreResult<PointsResponse> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getBonusPoints",
            self.client.challenges().get_bonus_points(&request).await,
        )
    }

    pub async fn get_created_challenges(&self, user: &UserId) -> StoreResult<Vec<ChallengeRef>> {
        let request = UserRef::from(user.clone());
        settle(
            "getCreatedChallenges",
            self.client.challenges().get_created(&request).await,
        )
    }
}

fn action(session: &SessionToken, challenge: &ChallengeId) -> ChallengeAction {
    ChallengeAction {
        session: Some(session.clone()),
        challenge: challenge.clone(),
    }
}
