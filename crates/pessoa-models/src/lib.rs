//! # pessoa-models
//!
//! Domain entities for Pessoa RS: `Pessoa` (person) and `Endereco`
//! (address). An endereco belongs to at most one pessoa; a pessoa owns any
//! number of enderecos through `Endereco::pessoa_id`.

pub mod endereco;
pub mod pessoa;

pub use endereco::Endereco;
pub use pessoa::Pessoa;
