//! # pessoa-core
//!
//! Core types shared across the Pessoa RS crates:
//! - The `Id` primary-key alias
//! - Common error types
//! - Pagination types (page requests and paged results)

pub mod error;
pub mod pagination;
pub mod types;

pub use error::*;
pub use pagination::*;
pub use types::*;
