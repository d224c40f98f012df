//! Command implementations for the `pushscan` binary.

pub mod commands;
