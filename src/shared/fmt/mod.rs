//! Human-readable display formatting.

pub mod date;

pub use date::format_date;
