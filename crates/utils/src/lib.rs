//! Shared error types for the pushscan crates.

pub mod errors;
