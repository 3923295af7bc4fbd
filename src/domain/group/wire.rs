//! Wire types for `/Group/*`.

use crate::shared::{GroupId, MembershipRequestId, UserId};
use serde::{Deserialize, Serialize};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Request body for `/Group/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub leader: UserId,
    pub name: String,
    pub private: bool,
}

/// `{user, group}` — used by `/Group/request` and `/Group/removeMember`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub user: UserId,
    pub group: GroupId,
}

/// `{membershipRequest}` — accept, deny, and detail lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequestRef {
    pub membership_request: MembershipRequestId,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub group: GroupId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMembershipResponse {
    pub membership_request: MembershipRequestId,
}

/// `/Group/getGroups` and `/Group/getPublicGroups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<GroupId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub members: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderResponse {
    pub leader: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsPrivateResponse {
    pub is_private: bool,
}

/// A pending request to join a group, seen from the group's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembershipRequest {
    pub membership_request: MembershipRequestId,
    pub requester: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequestsResponse {
    #[serde(default)]
    pub requests: Vec<GroupMembershipRequest>,
}

/// A pending request to join a group, seen from the requesting user's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembershipRequest {
    pub membership_request: MembershipRequestId,
    pub group: GroupId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequestsResponse {
    #[serde(default)]
    pub requests: Vec<UserMembershipRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDetails {
    pub user: UserId,
    pub group: GroupId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetailsResponse {
    #[serde(default)]
    pub details: Vec<MembershipDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_serializes_private_flag() {
        let req = CreateGroupRequest {
            leader: UserId::from("u1"),
            name: "Morning Runners".into(),
            private: true,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"leader": "u1", "name": "Morning Runners", "private": true})
        );
    }

    #[test]
    fn test_membership_request_ref_is_camel_case() {
        let req = MembershipRequestRef {
            membership_request: MembershipRequestId::from("mr1"),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"membershipRequest":"mr1"}"#
        );
    }

    #[test]
    fn test_group_requests_response_deserialize() {
        let json = r#"{"requests":[{"membershipRequest":"mr1","requester":"u2"}]}"#;
        let resp: GroupRequestsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.requests.len(), 1);
        assert_eq!(resp.requests[0].requester.as_str(), "u2");
    }

    #[test]
    fn test_missing_list_defaults_to_empty() {
        let resp: GroupsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.groups.is_empty());
    }

    #[test]
    fn test_is_private_response() {
        let resp: IsPrivateResponse = serde_json::from_str(r#"{"isPrivate":false}"#).unwrap();
        assert!(!resp.is_private);
    }
}
