//! Integration tests for the pushscan crates.

#[cfg(test)]
mod analysis;
#[cfg(test)]
mod bitmap;
