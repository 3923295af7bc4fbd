//! Challenge participation domain — invitations and accepted participations.
//!
//! A challenge's creator invites users; an invitation, once accepted, becomes
//! a participation. Both link exactly one user to one challenge.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    AcceptInvitationResponse, ChallengeInvitation, ChallengeParticipant, CreateInvitationRequest,
    CreateInvitationResponse, InvitationAction, InvitationQuery, ParticipationAction,
    ParticipationQuery, ParticipationTarget, UserInvitation, UserParticipation,
};
