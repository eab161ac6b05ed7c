//! Common type aliases.

/// Primary key type for all entities.
pub type Id = i64;
