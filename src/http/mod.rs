//! HTTP client layer — `ChallengeHttp` with session injection.

pub mod client;

pub use client::{decode_body, embedded_error, ChallengeHttp};
