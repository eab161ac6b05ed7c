//! # pessoa-queries
//!
//! The criteria query layer for Pessoa RS.
//!
//! A search request arrives as a [`criteria`] record: one optional
//! [`filter`] per queryable field plus a `distinct` flag. The
//! [`predicate`] module compiles a criteria record into a single
//! conjunction of primitive checks that any storage adapter can execute,
//! including the relation check that crosses the pessoa→endereco
//! association. [`sorts`] carries the typed sort specification that rides
//! along with page requests.
//!
//! ## Example
//!
//! ```
//! use pessoa_queries::criteria::PessoaCriteria;
//! use pessoa_queries::filter::StringFilter;
//! use pessoa_queries::predicate::PessoaPredicate;
//!
//! let criteria = PessoaCriteria {
//!     nome: Some(StringFilter::contains("Jo")),
//!     ..Default::default()
//! };
//! let predicate = PessoaPredicate::compile(Some(&criteria));
//! assert_eq!(predicate.conditions().len(), 1);
//! ```

pub mod criteria;
pub mod filter;
pub mod predicate;
pub mod sorts;

// Re-exports for convenience
pub use criteria::{EnderecoCriteria, PessoaCriteria};
pub use filter::{BooleanFilter, Filter, LocalDateFilter, LongFilter, RangeFilter, StringFilter};
pub use predicate::{
    EnderecoCondition, EnderecoPredicate, PessoaCondition, PessoaPredicate, RangeCheck,
    ScalarCheck, StringCheck,
};
pub use sorts::{EnderecoSortField, PessoaSortField, SortCriterion, SortDirection, SortOrder};
