//! Session context shared between the transport and the auth store.
//!
//! The context is created once per [`ChallengeClient`](crate::client::ChallengeClient)
//! (or handed to its builder) and cloned into everything that needs it. The
//! auth store is the only writer; the transport reads the token on every
//! POST.

use async_lock::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::network::SESSION_FIELD;
use crate::shared::{SessionToken, UserId};

/// An authenticated session: who is logged in and with which token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserId,
    pub username: String,
    pub token: SessionToken,
}

/// Shared, cheaply cloneable holder of the current [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that starts out logged in.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// Clear the session, returning whatever was there.
    pub async fn clear(&self) -> Option<Session> {
        self.inner.write().await.take()
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn token(&self) -> Option<SessionToken> {
        self.inner.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn user(&self) -> Option<UserId> {
        self.inner.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

/// Merge `token` into a JSON request body under the `session` key.
///
/// A `null` body becomes `{"session": token}`. An explicit `session` value
/// already in the body is kept as is. Non-object bodies are left untouched.
/// Returns whether the token was inserted.
pub fn inject_session(body: &mut Value, token: &SessionToken) -> bool {
    if body.is_null() {
        *body = Value::Object(Map::new());
    }

    match body {
        Value::Object(map) => {
            if map.contains_key(SESSION_FIELD) {
                return false;
            }
            map.insert(
                SESSION_FIELD.to_string(),
                Value::String(token.as_str().to_string()),
            );
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Session {
        Session {
            user: UserId::from("u_alice"),
            username: "alice".to_string(),
            token: SessionToken::from("tok_1"),
        }
    }

    #[test]
    fn test_inject_into_object() {
        let mut body = json!({"challenge": "c1"});
        assert!(inject_session(&mut body, &SessionToken::from("tok_1")));
        assert_eq!(body, json!({"challenge": "c1", "session": "tok_1"}));
    }

    #[test]
    fn test_inject_keeps_explicit_session() {
        let mut body = json!({"session": "caller_tok", "challenge": "c1"});
        assert!(!inject_session(&mut body, &SessionToken::from("ctx_tok")));
        assert_eq!(body["session"], "caller_tok");
    }

    #[test]
    fn test_inject_into_null_body() {
        let mut body = Value::Null;
        assert!(inject_session(&mut body, &SessionToken::from("tok_1")));
        assert_eq!(body, json!({"session": "tok_1"}));
    }

    #[test]
    fn test_inject_skips_non_object() {
        let mut body = json!(["a", "b"]);
        assert!(!inject_session(&mut body, &SessionToken::from("tok_1")));
        assert_eq!(body, json!(["a", "b"]));
    }

    #[test]
    fn test_context_lifecycle() {
        tokio_test::block_on(async {
            let ctx = SessionContext::new();
            assert!(!ctx.is_authenticated().await);
            assert!(ctx.token().await.is_none());

            ctx.set(alice()).await;
            assert!(ctx.is_authenticated().await);
            assert_eq!(ctx.token().await, Some(SessionToken::from("tok_1")));
            assert_eq!(ctx.user().await, Some(UserId::from("u_alice")));

            let cleared = ctx.clear().await;
            assert_eq!(cleared, Some(alice()));
            assert!(!ctx.is_authenticated().await);
        });
    }

    #[test]
    fn test_clones_share_state() {
        tokio_test::block_on(async {
            let ctx = SessionContext::new();
            let other = ctx.clone();
            ctx.set(alice()).await;
            assert_eq!(other.current().await, Some(alice()));
        });
    }
}
