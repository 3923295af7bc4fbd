//! Network URL constants and environment keys.

/// Default REST API base URL (local concept server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CHALLENGE_API_URL";

/// Environment variable setting a per-request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "CHALLENGE_API_TIMEOUT_SECS";

/// Body key the session token is injected under.
pub const SESSION_FIELD: &str = "session";
