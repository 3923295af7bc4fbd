//! Group domain — groups with a leader, privacy flag, and membership requests.
//!
//! Membership is tracked server-side. A user asks to join with
//! [`client::Groups::request`]; the leader accepts or denies the resulting
//! membership request.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    CreateGroupRequest, CreateGroupResponse, GroupMembershipRequest, GroupRequestsResponse,
    GroupsResponse, IsPrivateResponse, LeaderResponse, MembersResponse, MembershipDetails,
    MembershipRequestRef, NameResponse, RequestDetailsResponse, RequestMembershipResponse,
    UserGroup, UserMembershipRequest, UserRequestsResponse,
};
