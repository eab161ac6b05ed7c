//! # pessoa-db
//!
//! The storage side of Pessoa RS: an in-memory store playing the role of
//! the relational backing store, repository error types, and the query
//! executors that run compiled predicates against the store.
//!
//! The executors own predicate interpretation. Everything above this crate
//! only hands over a compiled predicate plus a page/sort descriptor and
//! gets back lists, pages, and counts.

pub mod query_executor;
pub mod repository;
pub mod store;

pub use query_executor::{EnderecoQueryExecutor, PessoaQueryExecutor};
pub use repository::{RepositoryError, RepositoryResult};
pub use store::InMemoryStore;
