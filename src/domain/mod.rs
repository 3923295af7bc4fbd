//! Domain modules organized as vertical slices, one per backend concept.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and small helpers over them
//! - `wire.rs` — Request/response serde structs matching the backend JSON
//! - `client.rs` — Sub-client mapping each operation to one POST

pub mod challenge;
pub mod chat;
pub mod friending;
pub mod group;
pub mod leaderboard;
pub mod participation;
pub mod profile;
pub mod progress;
pub mod verification;
