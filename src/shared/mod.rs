//! Shared newtypes and utilities used across all domain modules.
//!
//! Every identifier the backend mints is an opaque string. The newtypes here
//! serialize/deserialize as bare JSON strings, so they can be used directly in
//! wire types without conversion overhead, while keeping a `GroupId` from being
//! passed where a `ChallengeId` is expected.

pub mod fmt;
pub mod serde_util;

pub use fmt::format_date;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

opaque_id!(
    /// A registered user.
    UserId
);
opaque_id!(
    /// A group of users with a leader.
    GroupId
);
opaque_id!(
    /// A pending request to join a group.
    MembershipRequestId
);
opaque_id!(
    /// A pending friend request between two users.
    FriendRequestId
);
opaque_id!(ChatId);
opaque_id!(
    /// A single direct message inside a chat.
    DmId
);
opaque_id!(
    /// A challenge definition.
    ChallengeId
);
opaque_id!(
    /// An invitation for a user to join a challenge.
    InvitationId
);
opaque_id!(
    /// A user's accepted participation in a challenge.
    ParticipationId
);
opaque_id!(
    /// One scheduled (day, week) slot of a challenge.
    PartId
);
opaque_id!(VerificationRequestId);

// ─── SessionToken ────────────────────────────────────────────────────────────

/// Opaque session token returned by login.
///
/// Serializes as a bare string on the wire. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for SessionToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SessionToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SessionToken(s))
    }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Status string echoed by challenge mutations (`"ok"` on success).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_ok(&self) -> bool {
        self.0.eq_ignore_ascii_case("ok") || self.0.eq_ignore_ascii_case("success")
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Body of endpoints that answer with `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// `{"points": ..}` — point totals for users, groups, and challenge parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

// ─── Common request bodies ───────────────────────────────────────────────────

/// `{"user": ..}` — the body of most per-user queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub user: UserId,
}

/// `{"group": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub group: GroupId,
}

/// `{"challenge": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRef {
    pub challenge: ChallengeId,
}

impl From<UserId> for UserRef {
    fn from(user: UserId) -> Self {
        Self { user }
    }
}

impl From<GroupId> for GroupRef {
    fn from(group: GroupId) -> Self {
        Self { group }
    }
}

impl From<ChallengeId> for ChallengeRef {
    fn from(challenge: ChallengeId) -> Self {
        Self { challenge }
    }
}
