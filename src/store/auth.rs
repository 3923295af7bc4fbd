//! Auth store — owns the session lifecycle.

use std::sync::Arc;

use crate::auth::{
    Credentials, GetUserRequest, GetUserResponse, GetUsernameRequest, GetUsernameResponse,
    LoginResponse, LogoutRequest, RegisterResponse, User,
};
use crate::client::ChallengeClient;
use crate::error::{AuthError, SdkError};
use crate::session::Session;
use crate::shared::{SessionToken, UserId};
use crate::storage::{MemoryStorage, SessionStorage, SESSION_KEY, USER_KEY};
use crate::store::{settle, StoreResult};

/// Login, logout, and session restore.
///
/// Writes the session into the client's shared
/// [`SessionContext`](crate::session::SessionContext) and mirrors it into
/// [`SessionStorage`] under `sessionId` and `user`.
#[derive(Clone)]
pub struct AuthStore {
    client: ChallengeClient,
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    pub fn new(client: ChallengeClient, storage: Arc<dyn SessionStorage>) -> Self {
        Self { client, storage }
    }

    /// Store backed by a fresh [`MemoryStorage`].
    pub fn in_memory(client: ChallengeClient) -> Self {
        Self::new(client, Arc::new(MemoryStorage::new()))
    }

    pub fn client(&self) -> &ChallengeClient {
        &self.client
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Log in and make the session current.
    pub async fn login(&self, username: &str, password: &str) -> StoreResult<LoginResponse> {
        let credentials = Credentials::new(username, password);
        let response = settle("login", self.client.auth().login(&credentials).await)?;

        if response.session.as_str().is_empty() {
            return settle(
                "login",
                Err(AuthError::LoginFailed("backend returned an empty session".to_string()).into()),
            );
        }

        let session = Session {
            user: response.user.clone(),
            username: username.to_string(),
            token: response.session.clone(),
        };
        settle("login", self.persist(&session))?;
        self.client.session().set(session).await;

        tracing::info!(user = %response.user, "logged in");
        Ok(response)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, username: &str, password: &str) -> StoreResult<RegisterResponse> {
        let credentials = Credentials::new(username, password);
        settle("register", self.client.auth().register(&credentials).await)
    }

    /// Log out. Always clears the local session, even when the backend call
    /// fails; returns the session that was active, if any.
    pub async fn logout(&self) -> Option<Session> {
        let current = self.client.session().current().await;

        if let Some(session) = &current {
            let request = LogoutRequest {
                session: session.token.clone(),
                user: session.user.clone(),
            };
            if let Err(e) = self.client.auth().logout(&request).await {
                tracing::warn!(error = %e, "logout request failed, clearing session locally");
            }
        }

        self.client.session().clear().await;
        self.clear_storage();

        if let Some(session) = &current {
            tracing::info!(user = %session.user, "logged out");
        }
        current
    }

    /// Load a previously persisted session into the context.
    ///
    /// Returns `Ok(None)` when nothing usable is stored; stale or corrupt
    /// entries are removed.
    pub async fn restore(&self) -> StoreResult<Option<Session>> {
        let token = settle("restore", self.storage.load(SESSION_KEY))?;
        let user = settle("restore", self.storage.load(USER_KEY))?;

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => (token, user),
            (None, None) => return Ok(None),
            _ => {
                tracing::warn!("stored session is incomplete, discarding");
                self.clear_storage();
                return Ok(None);
            }
        };

        let user: User = match serde_json::from_str(&user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "stored user is not valid JSON, discarding");
                self.clear_storage();
                return Ok(None);
            }
        };
        if token.is_empty() {
            self.clear_storage();
            return Ok(None);
        }

        let session = Session {
            user: user.id,
            username: user.username,
            token: SessionToken::new(token),
        };
        self.client.session().set(session.clone()).await;

        tracing::info!(user = %session.user, "session restored");
        Ok(Some(session))
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub async fn current_user(&self) -> Option<User> {
        self.client.session().current().await.map(|s| User {
            id: s.user,
            username: s.username,
        })
    }

    pub async fn session_token(&self) -> Option<SessionToken> {
        self.client.session().token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated().await
    }

    /// The current session, or a local `NotAuthenticated` failure.
    pub async fn require_session(&self) -> StoreResult<Session> {
        match self.client.session().current().await {
            Some(session) => Ok(session),
            None => settle("requireSession", Err(AuthError::NotAuthenticated.into())),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub async fn get_username(&self, user: &UserId) -> StoreResult<GetUsernameResponse> {
        let request = GetUsernameRequest { user: user.clone() };
        settle("getUsername", self.client.auth().get_username(&request).await)
    }

    pub async fn get_user(&self, username: &str) -> StoreResult<GetUserResponse> {
        let request = GetUserRequest {
            username: username.to_string(),
        };
        settle("getUser", self.client.auth().get_user(&request).await)
    }

    // ── Storage ──────────────────────────────────────────────────────────

    fn persist(&self, session: &Session) -> Result<(), SdkError> {
        let user = User {
            id: session.user.clone(),
            username: session.username.clone(),
        };
        let user = serde_json::to_string(&user)?;
        let written = self
            .storage
            .store(USER_KEY, &user)
            .and_then(|_| self.storage.store(SESSION_KEY, session.token.as_str()));
        if written.is_err() {
            self.clear_storage();
        }
        written
    }

    fn clear_storage(&self) {
        for key in [SESSION_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "failed to remove stored session entry");
            }
        }
    }
}
