//! # Challenge SDK
//!
//! A typed Rust client for the fitness challenge social API: groups,
//! friending, chat, challenge definitions, participation, progress,
//! verification, leaderboard and profiles.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Id newtypes, domain and wire types, errors (always available)
//! 2. **Session** — `SessionContext` shared by transport and auth store, plus
//!    persistent `SessionStorage`
//! 3. **HTTP API** — `ChallengeHttp`: JSON POST with session injection
//! 4. **High-Level Client** — `ChallengeClient` with one sub-client per concept
//! 5. **Stores** — plain-argument functions returning `StoreResult`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use challenge_sdk::prelude::*;
//!
//! let client = ChallengeClient::builder()
//!     .base_url("http://localhost:8000/api")
//!     .build()?;
//!
//! let auth = AuthStore::in_memory(client.clone());
//! let login = auth.login("alice", "pw").await?;
//!
//! let challenges = ChallengeDefinitionStore::new(client.clone());
//! let created = challenges
//!     .create_challenge(
//!         &login.session,
//!         "pushups",
//!         3,
//!         4,
//!         1,
//!         ExerciseInfo::Anaerobic { weight: None, sets: 3, reps: 10 },
//!     )
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and environment keys.
pub mod network;

/// Authentication: user identity, credentials, login/logout wire types.
pub mod auth;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Shared session context and body injection.
pub mod session;

/// Persistent key-value storage for the session.
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with session injection.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ChallengeClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Stores ──────────────────────────────────────────────────────────

/// Stores with normalized failures.
#[cfg(feature = "http")]
pub mod store;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        format_date, ChallengeId, ChallengeRef, ChatId, DmId, Empty, FriendRequestId, GroupId,
        GroupRef, InvitationId, MembershipRequestId, ParticipationId, PartId, PointsResponse,
        SessionToken, Status, UserId, UserRef, VerificationRequestId,
    };

    // Domain types
    pub use crate::domain::challenge::{ChallengeDetails, ExerciseInfo};
    pub use crate::domain::chat::Dm;
    pub use crate::domain::friending::{FriendEntry, FriendRequest};
    pub use crate::domain::leaderboard::{GroupRanking, UserRanking};
    pub use crate::domain::profile::{EditProfileRequest, Profile};
    pub use crate::domain::progress::Part;
    pub use crate::domain::verification::RequestDetails;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth + session
    pub use crate::auth::{Credentials, User};
    pub use crate::session::{Session, SessionContext};
    pub use crate::storage::{FileStorage, MemoryStorage, SessionStorage};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, ChallengeClient, ChallengeClientBuilder, ChallengesClient, ChatClient,
        FriendingClient, GroupsClient, LeaderboardClient, ParticipationClient, ProfilesClient,
        ProgressClient, VerificationClient,
    };

    // Stores
    #[cfg(feature = "http")]
    pub use crate::store::{
        AuthStore, ChallengeDefinitionStore, ChatStore, Failure, FailureKind, FriendingStore,
        GroupStore, LeaderboardStore, ParticipationStore, ProfileStore, ProgressStore,
        StoreResult, VerificationStore,
    };
}
