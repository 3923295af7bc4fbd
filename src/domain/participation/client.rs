//! Participation sub-client — invitations and participations.

use crate::client::ChallengeClient;
use crate::domain::challenge::wire::StatusResponse;
use crate::domain::participation::wire::{
    AcceptInvitationResponse, ChallengeInvitation, ChallengeParticipant, CreateInvitationRequest,
    CreateInvitationResponse, InvitationAction, InvitationQuery, ParticipationAction,
    ParticipationQuery, ParticipationTarget, UserInvitation, UserParticipation,
};
use crate::error::SdkError;
use crate::shared::{ChallengeRef, UserRef};

/// Sub-client for `/ChallengeParticipation/*`.
pub struct Participation<'a> {
    pub(crate) client: &'a ChallengeClient,
}

impl<'a> Participation<'a> {
    // ── Actions ──────────────────────────────────────────────────────────

    pub async fn create_invitation(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<CreateInvitationResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/createInvitation", request)
            .await
    }

    pub async fn accept_invitation(
        &self,
        request: &InvitationAction,
    ) -> Result<AcceptInvitationResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/acceptInvitation", request)
            .await
    }

    pub async fn remove_invitation(
        &self,
        request: &InvitationAction,
    ) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/removeInvitation", request)
            .await
    }

    pub async fn remove_participation(
        &self,
        request: &ParticipationAction,
    ) -> Result<StatusResponse, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/removeParticipation", request)
            .await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub async fn get_user_invitations(
        &self,
        request: &UserRef,
    ) -> Result<Vec<UserInvitation>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getUserInvitations", request)
            .await
    }

    pub async fn get_user_participations(
        &self,
        request: &UserRef,
    ) -> Result<Vec<UserParticipation>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getUserParticipations", request)
            .await
    }

    pub async fn get_challenge_invitations(
        &self,
        request: &ChallengeRef,
    ) -> Result<Vec<ChallengeInvitation>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getChallengeInvitations", request)
            .await
    }

    pub async fn get_challenge_participations(
        &self,
        request: &ChallengeRef,
    ) -> Result<Vec<ChallengeParticipant>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getChallengeParticipations", request)
            .await
    }

    pub async fn get_invitation(
        &self,
        request: &InvitationQuery,
    ) -> Result<Vec<ParticipationTarget>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getInvitation", request)
            .await
    }

    pub async fn get_participation(
        &self,
        request: &ParticipationQuery,
    ) -> Result<Vec<ParticipationTarget>, SdkError> {
        self.client
            .http
            .post("/ChallengeParticipation/_getParticipation", request)
            .await
    }
}
