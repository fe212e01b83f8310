//! Service layer for the food-truck record collection.
//! - Owns the in-memory store and its first-match key semantics.
//! - Validates request payloads into domain values with per-field messages.
//! - Provides clear error types for the HTTP layer to map onto statuses.

pub mod errors;
pub mod store;
pub mod truck;
