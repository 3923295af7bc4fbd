//! Challenges sub-client — define, open, close, and inspect challenges.

use crate::client::ChallengeClient;
use crate::domain::challenge::wire::{
    ChallengeAction, ChallengeNameResponse, CreateChallengeRequest, CreateChallengeResponse,
    CreatorResponse, DateCreatedResponse, IsOpenResponse, StatusResponse,
};
use crate::domain::challenge::ChallengeDetails;
use crate::error::SdkError;
use crate::shared::{ChallengeRef, PointsResponse, UserRef};

/// Sub-client for `/ChallengeDefinition/*`.
pub struct Challenges<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Challenges<'a> {
    // ── Actions ──────────────────────────────────────────────────────────

    pub async fn create(
        &self,
        request: &CreateChallengeRequest,
    ) -> Result<CreateChallengeResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/createChallenge", request)
            .await
    }

    pub async fn delete(&self, request: &ChallengeAction) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/deleteChallenge", request)
            .await
    }

    pub async fn open(&self, request: &ChallengeAction) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/openChallenge", request)
            .await
    }

    pub async fn close(&self, request: &ChallengeAction) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/closeChallenge", request)
            .await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub async fn is_open(&self, request: &ChallengeRef) -> Result<IsOpenResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_isOpen", request)
            .await
    }

    /// Challenge definition rows; empty when the challenge does not exist.
    pub async fn get_details(
        &self,
        request: &ChallengeRef,
    ) -> Result<Vec<ChallengeDetails>, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getChallengeDetails", request)
            .await
    }

    pub async fn get_creator(&self, request: &ChallengeRef) -> Result<CreatorResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getCreator", request)
            .await
    }

    pub async fn get_name(
        &self,
        request: &ChallengeRef,
    ) -> Result<ChallengeNameResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getChallengeName", request)
            .await
    }

    pub async fn get_date_created(
        &self,
        request: &ChallengeRef,
    ) -> Result<DateCreatedResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getDateCreated", request)
            .await
    }

    /// Points awarded per completed part.
    pub async fn get_part_points(
        &self,
        request: &ChallengeRef,
    ) -> Result<PointsResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getPartPoints", request)
            .await
    }

    /// Points awarded for completing the whole challenge.
    pub async fn get_bonus_points(
        &self,
        request: &ChallengeRef,
    ) -> Result<PointsResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getBonusPoints", request)
            .await
    }

    /// Challenges created by `user`.
    pub async fn get_created(&self, request: &UserRef) -> Result<Vec<ChallengeRef>, SdkError> {
        self.client
            .http
            .post("/ChallengeDefinition/_getCreatedChallenges", request)
            .await
    }
}
