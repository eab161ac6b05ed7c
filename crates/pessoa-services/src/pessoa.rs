//! CRUD service for `Pessoa`.

use std::sync::Arc;

use pessoa_core::{DomainError, DomainResult, Id, Page, PageRequest};
use pessoa_db::{InMemoryStore, PessoaQueryExecutor};
use pessoa_queries::predicate::PessoaPredicate;
use pessoa_queries::sorts::{PessoaSortField, SortOrder};
use tracing::debug;

use crate::dto::PessoaDto;
use crate::mapper;

/// Service for managing pessoa records.
pub struct PessoaService {
    store: Arc<InMemoryStore>,
    executor: PessoaQueryExecutor,
}

impl PessoaService {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let executor = PessoaQueryExecutor::new(store.clone());
        Self { store, executor }
    }

    /// Insert or replace a pessoa.
    pub async fn save(&self, dto: PessoaDto) -> DomainResult<PessoaDto> {
        debug!(id = dto.id, "save pessoa");
        let pessoa = mapper::dto_to_pessoa(dto);
        self.store.insert_pessoa(pessoa.clone());
        Ok(mapper::pessoa_to_dto(pessoa))
    }

    /// Replace an existing pessoa; the record must already exist.
    pub async fn update(&self, dto: PessoaDto) -> DomainResult<PessoaDto> {
        debug!(id = dto.id, "update pessoa");
        if !self.store.contains_pessoa(dto.id) {
            return Err(DomainError::not_found("Pessoa", dto.id));
        }
        self.save(dto).await
    }

    /// Apply only the fields present in the patch; unset fields keep their
    /// stored value.
    pub async fn partial_update(&self, dto: PessoaDto) -> DomainResult<PessoaDto> {
        debug!(id = dto.id, "partial update pessoa");
        let mut existing = self
            .store
            .get_pessoa(dto.id)
            .ok_or(DomainError::not_found("Pessoa", dto.id))?;
        if let Some(nome) = dto.nome {
            existing.nome = Some(nome);
        }
        if let Some(data) = dto.data_nascimento {
            existing.data_nascimento = Some(data);
        }
        self.store.insert_pessoa(existing.clone());
        Ok(mapper::pessoa_to_dto(existing))
    }

    pub async fn find_one(&self, id: Id) -> DomainResult<Option<PessoaDto>> {
        debug!(id, "find pessoa");
        Ok(self.store.get_pessoa(id).map(mapper::pessoa_to_dto))
    }

    /// One page of all pessoas under the given sort.
    pub async fn find_all(
        &self,
        sort: &SortOrder<PessoaSortField>,
        request: &PageRequest,
    ) -> DomainResult<Page<PessoaDto>> {
        debug!(?request, "find all pessoas");
        let page = self
            .executor
            .page(&PessoaPredicate::compile(None), sort, request)
            .await?;
        Ok(page.map(mapper::pessoa_to_dto))
    }

    pub async fn delete(&self, id: Id) -> DomainResult<()> {
        debug!(id, "delete pessoa");
        self.store
            .remove_pessoa(id)
            .map(|_| ())
            .ok_or(DomainError::not_found("Pessoa", id))
    }
}
