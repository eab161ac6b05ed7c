//! # pessoa-services
//!
//! The service layer of Pessoa RS: DTO shapes handed to the excluded
//! transport layer, entity↔DTO mappers, CRUD services for both entities,
//! and the criteria query services that compile a criteria record into a
//! predicate, execute it, and map the results.

pub mod dto;
pub mod endereco;
pub mod mapper;
pub mod pessoa;
pub mod query_service;

pub use dto::{EnderecoDto, PessoaDto};
pub use endereco::EnderecoService;
pub use pessoa::PessoaService;
pub use query_service::{EnderecoQueryService, PessoaQueryService};
