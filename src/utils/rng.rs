//! Centralized random number generation utilities.

/// Default CSPRNG for callers that don't need to supply their own.
pub use rand::rngs::OsRng;
