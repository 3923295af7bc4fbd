//! Stores — the caller-facing layer over the sub-clients.
//!
//! Every store function builds a request from plain arguments, makes one call
//! and hands back the raw payload. Failures never escape as [`SdkError`]:
//! they are logged and folded into a [`Failure`], so callers branch on a
//! single tagged result.
//!
//! [`AuthStore`] is the only store with state of its own (the session).

mod auth;
mod challenge;
mod chat;
mod friending;
mod group;
mod leaderboard;
mod participation;
mod profile;
mod progress;
mod verification;

pub use auth::AuthStore;
pub use challenge::ChallengeDefinitionStore;
pub use chat::ChatStore;
pub use friending::FriendingStore;
pub use group::GroupStore;
pub use leaderboard::LeaderboardStore;
pub use participation::ParticipationStore;
pub use profile::ProfileStore;
pub use progress::ProgressStore;
pub use verification::VerificationStore;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::SdkError;

/// Result of every store operation.
pub type StoreResult<T> = Result<T, Failure>;

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Network failure or non-2xx response.
    Transport,
    /// The backend answered with an `error` field.
    Domain,
    /// Client-side: serialization, storage, missing session.
    Local,
}

impl FailureKind {
    fn of(error: &SdkError) -> Self {
        match error {
            SdkError::Http(_) => FailureKind::Transport,
            SdkError::Domain(_) => FailureKind::Domain,
            _ => FailureKind::Local,
        }
    }
}

/// A failed store operation.
///
/// Serializes as `{"status": "failed", "operation": .., "error": ..}`.
#[derive(Debug)]
pub struct Failure {
    pub operation: &'static str,
    pub kind: FailureKind,
    pub message: String,
    pub error: Option<SdkError>,
}

impl Failure {
    pub const STATUS: &'static str = "failed";

    pub fn from_error(operation: &'static str, error: SdkError) -> Self {
        let message = match &error {
            SdkError::Domain(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self {
            operation,
            kind: FailureKind::of(&error),
            message,
            error: Some(error),
        }
    }

    pub fn status(&self) -> &'static str {
        Self::STATUS
    }

    pub fn is_domain(&self) -> bool {
        self.kind == FailureKind::Domain
    }

    pub fn is_transport(&self) -> bool {
        self.kind == FailureKind::Transport
    }

    /// HTTP status of a transport failure, if one was received.
    pub fn http_status(&self) -> Option<u16> {
        match &self.error {
            Some(SdkError::Http(e)) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl Serialize for Failure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Failure", 3)?;
        state.serialize_field("status", Self::STATUS)?;
        state.serialize_field("operation", self.operation)?;
        state.serialize_field("error", &self.message)?;
        state.end()
    }
}

/// Fold an SDK result into a store result, logging the failure.
pub(crate) fn settle<T>(operation: &'static str, result: Result<T, SdkError>) -> StoreResult<T> {
    result.map_err(|error| {
        let failure = Failure::from_error(operation, error);
        tracing::error!(
            operation,
            kind = ?failure.kind,
            error = %failure.message,
            "store operation failed"
        );
        failure
    })
}
