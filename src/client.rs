//! High-level client — `ChallengeClient` with nested sub-client accessors.
//!
//! Each backend concept has its own sub-client in `domain/<name>/client.rs`
//! (authentication lives in `auth/client.rs`). This module keeps the builder,
//! the shared session context and the accessor methods.

use crate::auth::client::Auth;
use crate::domain::chat::client::Chat;
use crate::domain::challenge::client::Challenges;
use crate::domain::friending::client::Friending;
use crate::domain::group::client::Groups;
use crate::domain::leaderboard::client::Leaderboard;
use crate::domain::participation::client::Participation;
use crate::domain::profile::client::Profiles;
use crate::domain::progress::client::Progress;
use crate::domain::verification::client::Verification;
use crate::error::SdkError;
use crate::http::ChallengeHttp;
use crate::network::{API_TIMEOUT_ENV, API_URL_ENV, DEFAULT_API_URL};
use crate::session::{Session, SessionContext};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::chat::client::Chat as ChatClient;
pub use crate::domain::challenge::client::Challenges as ChallengesClient;
pub use crate::domain::friending::client::Friending as FriendingClient;
pub use crate::domain::group::client::Groups as GroupsClient;
pub use crate::domain::leaderboard::client::Leaderboard as LeaderboardClient;
pub use crate::domain::participation::client::Participation as ParticipationClient;
pub use crate::domain::profile::client::Profiles as ProfilesClient;
pub use crate::domain::progress::client::Progress as ProgressClient;
pub use crate::domain::verification::client::Verification as VerificationClient;

/// The primary entry point for the challenge API.
///
/// Provides nested sub-client accessors for each backend concept:
/// `client.groups()`, `client.challenges()`, etc. Clones share the same
/// HTTP connection pool and session context.
#[derive(Debug, Clone)]
pub struct ChallengeClient {
    pub(crate) http: ChallengeHttp,
}

impl ChallengeClient {
    pub fn builder() -> ChallengeClientBuilder {
        ChallengeClientBuilder::default()
    }

    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups { client: self }
    }

    pub fn friending(&self) -> Friending<'_> {
        Friending { client: self }
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    pub fn challenges(&self) -> Challenges<'_> {
        Challenges { client: self }
    }

    pub fn participation(&self) -> Participation<'_> {
        Participation { client: self }
    }

    pub fn progress(&self) -> Progress<'_> {
        Progress { client: self }
    }

    pub fn verification(&self) -> Verification<'_> {
        Verification { client: self }
    }

    pub fn leaderboard(&self) -> Leaderboard<'_> {
        Leaderboard { client: self }
    }

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    // ── Session ──────────────────────────────────────────────────────────

    /// The session context injected into every request.
    pub fn session(&self) -> &SessionContext {
        self.http.session()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct ChallengeClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    session: Option<SessionContext>,
    initial_session: Option<Session>,
}

impl Default for ChallengeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            session: None,
            initial_session: None,
        }
    }
}

impl ChallengeClientBuilder {
    /// Builder seeded from the environment.
    ///
    /// Reads `CHALLENGE_API_URL` (falls back to [`DEFAULT_API_URL`]) and the
    /// optional `CHALLENGE_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }

        if let Ok(secs) = std::env::var(API_TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                SdkError::Validation(format!("{} must be a whole number of seconds", API_TIMEOUT_ENV))
            })?;
            builder.timeout = Some(Duration::from_secs(secs));
        }

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Requests have none unless this is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share an existing session context (e.g. with another client).
    pub fn session_context(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Pre-set a session on construction.
    pub fn session(mut self, session: Session) -> Self {
        self.initial_session = Some(session);
        self
    }

    pub fn build(self) -> Result<ChallengeClient, SdkError> {
        let parsed = reqwest::Url::parse(&self.base_url)
            .map_err(|e| SdkError::Validation(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SdkError::Validation(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }

        let session = match (self.session, self.initial_session) {
            (Some(ctx), None) => ctx,
            (None, Some(session)) => SessionContext::with_session(session),
            (None, None) => SessionContext::new(),
            (Some(_), Some(_)) => {
                return Err(SdkError::Validation(
                    "Set either a session context or an initial session, not both".to_string(),
                ))
            }
        };

        Ok(ChallengeClient {
            http: ChallengeHttp::new(&self.base_url, session, self.timeout)?,
        })
    }
}
