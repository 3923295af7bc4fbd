use crate::client::ChallengeClient;
use crate::domain::challenge::wire::StatusResponse;
use crate::domain::participation::wire::{
    AcceptInvitationResponse, ChallengeInvitation, ChallengeParticipant, CreateInvitationRequest,
    CreateInvitationResponse, InvitationAction, InvitationQuery, ParticipationAction,
    ParticipationQuery, ParticipationTarget, UserInvitation, UserParticipation,
};
use crate::shared::{
    ChallengeId, ChallengeRef, InvitationId, ParticipationId, SessionToken, UserId, UserRef,
};
use crate::store::{settle, StoreResult};

/// Invitations and participations.
#[derive(Debug, Clone)]
pub struct ParticipationStore {
    client: ChallengeClient,
}

impl ParticipationStore {
    pub fn new(client: ChallengeClient) -> Self {
        Self { client }
    }

    pub async fn create_invitation(
        &self,
        session: &SessionToken,
        challenge: &ChallengeId,
        user: &UserId,
    ) -> StoreResult<CreateInvitationResponse> {
        let request = CreateInvitationRequest {
            session: Some(session.clone()),
            challenge: challenge.clone(),
            user: user.clone(),
        };
        settle(
            "createInvitation",
            self.client.participation().create_invitation(&request).await,
        )
    }

    pub async fn accept_invitation(
        &self,
        session: &SessionToken,
        invitation: &InvitationId,
    ) -> StoreResult<AcceptInvitationResponse> {
        let request = invitation_action(session, invitation);
        settle(
            "acceptInvitation",
            self.client.participation().accept_invitation(&request).await,
        )
    }

    pub async fn remove_invitation(
        &self,
        session: &SessionToken,
        invitation: &InvitationId,
    ) -> StoreResult<StatusResponse> {
        let request = invitation_action(session, invitation);
        settle(
            "removeInvitation",
            self.client.participation().remove_invitation(&request).await,
        )
    }

    pub async fn remove_participation(
        &self,
        session: &SessionToken,
        participation: &ParticipationId,
    ) -> StoreResult<StatusResponse> {
        let request = ParticipationAction {
            session: Some(session.clone()),
            participation: participation.clone(),
        };
        settle(
            "removeParticipation",
            self.client.participation().remove_participation(&request).await,
        )
    }

    pub async fn get_user_invitations(&self, user: &UserId) -> StoreResult<Vec<UserInvitation>> {
        let request = UserRef::from(user.clone());
        settle(
            "getUserInvitations",
            self.client.participation().get_user_invitations(&request).await,
        )
    }

    pub async fn get_user_participations(
        &self,
        user: &UserId,
    ) -> StoreResult<Vec<UserParticipation>> {
        let request = UserRef::from(user.clone());
        settle(
            "getUserParticipations",
            self.client.participation().get_user_participations(&request).await,
        )
    }

    pub async fn get_challenge_invitations(
        &self,
        challenge: &ChallengeId,
    ) -> StoreResult<Vec<ChallengeInvitation>> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getChallengeInvitations",
            self.client.participation().get_challenge_invitations(&request).await,
        )
    }

    pub async fn get_challenge_participations(
        &self,
        challenge: &ChallengeId,
    ) -> StoreResult<Vec<ChallengeParticipant>> {
        let request = ChallengeRef::from(challenge.clone());
        settle(
            "getChallengeParticipations",
            self.client
                .participation()
                .get_challenge_participations(&request)
                .await,
        )
    }

    pub async fn get_invitation(
        &self,
        invitation: &InvitationId,
    ) -> StoreResult<Vec<ParticipationTarget>> {
        let request = InvitationQuery {
            invitation: invitation.clone(),
        };
        settle(
            "getInvitation",
            self.client.participation().get_invitation(&request).await,
        )
    }

    pub async fn get_participation(
        &self,
        participation: &ParticipationId,
    ) -> StoreResult<Vec<ParticipationTarget>> {
        let request = ParticipationQuery {
            participation: participation.clone(),
        };
        settle(
            "getParticipation",
            self.client.participation().get_participation(&request).await,
        )
    }
}

fn invitation_action(session: &SessionToken, invitation: &InvitationId) -> InvitationAction {
    InvitationAction {
        session: Some(session.clone()),
        invitation: invitation.clone(),
    }
}
