//! Lazily-loaded record store and its matching helpers.

/// Lazily-loaded, read-only record store.
pub mod store;
/// Case-insensitive substring matching.
pub mod term;
