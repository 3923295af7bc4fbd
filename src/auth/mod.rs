//! Authentication — user identity, login/logout wire types.
//!
//! ## Session model
//!
//! Login returns an opaque session token. The API sub-client in [`client`] is
//! stateless: it only maps requests to `/UserAuthentication/*` calls. Keeping
//! the token is the job of [`AuthStore`](crate::store::AuthStore), which
//! writes it into the shared [`SessionContext`](crate::session::SessionContext)
//! (read by the transport on every POST) and into persistent
//! [`SessionStorage`](crate::storage::SessionStorage).

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::{SessionToken, UserId};

// ============================================================================
// User
// ============================================================================

/// A user identity: id plus display username.
///
/// This is also the JSON persisted under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
}

// ============================================================================
// Wire types
// ============================================================================

/// Credentials for `/UserAuthentication/login` and `/uploadUser`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

pub type LoginRequest = Credentials;
pub type RegisterRequest = Credentials;

/// Login response. Older backends name the token `sessionId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserId,
    #[serde(alias = "sessionId")]
    pub session: SessionToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub session: SessionToken,
    pub user: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUsernameRequest {
    pub user: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsernameResponse {
    pub username: String,
}

/// Look up a user id by username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: UserId,
}
