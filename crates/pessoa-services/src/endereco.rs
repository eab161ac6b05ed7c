//! CRUD service for `Endereco`.

use std::sync::Arc;

use pessoa_core::{DomainError, DomainResult, Id, Page, PageRequest};
use pessoa_db::{EnderecoQueryExecutor, InMemoryStore};
use pessoa_queries::predicate::EnderecoPredicate;
use pessoa_queries::sorts::{EnderecoSortField, SortOrder};
use tracing::debug;

use crate::dto::EnderecoDto;
use crate::mapper;

/// Service for managing endereco records.
pub struct EnderecoService {
    store: Arc<InMemoryStore>,
    executor: EnderecoQueryExecutor,
}

impl EnderecoService {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let executor = EnderecoQueryExecutor::new(store.clone());
        Self { store, executor }
    }

    /// Insert or replace an endereco. A referenced owner must exist.
    pub async fn save(&self, dto: EnderecoDto) -> DomainResult<EnderecoDto> {
        debug!(id = dto.id, "save endereco");
        let endereco = mapper::dto_to_endereco(dto);
        if let Some(pessoa_id) = endereco.pessoa_id {
            if !self.store.contains_pessoa(pessoa_id) {
                return Err(DomainError::Validation(format!(
                    "endereco references unknown pessoa {pessoa_id}"
                )));
            }
        }
        self.store.insert_endereco(endereco.clone());
        Ok(mapper::endereco_to_dto(endereco))
    }

    pub async fn update(&self, dto: EnderecoDto) -> DomainResult<EnderecoDto> {
        debug!(id = dto.id, "update endereco");
        if !self.store.contains_endereco(dto.id) {
            return Err(DomainError::not_found("Endereco", dto.id));
        }
        self.save(dto).await
    }

    /// Apply only the fields present in the patch.
    pub async fn partial_update(&self, dto: EnderecoDto) -> DomainResult<EnderecoDto> {
        debug!(id = dto.id, "partial update endereco");
        let existing = self
            .store
            .get_endereco(dto.id)
            .ok_or(DomainError::not_found("Endereco", dto.id))?;
        let mut merged = existing;
        if let Some(logradouro) = dto.logradouro {
            merged.logradouro = Some(logradouro);
        }
        if let Some(cep) = dto.cep {
            merged.cep = Some(cep);
        }
        if let Some(numero) = dto.numero {
            merged.numero = Some(numero);
        }
        if let Some(cidade) = dto.cidade {
            merged.cidade = Some(cidade);
        }
        if let Some(principal) = dto.endereco_principal {
            merged.endereco_principal = Some(principal);
        }
        if let Some(pessoa) = dto.pessoa {
            if !self.store.contains_pessoa(pessoa.id) {
                return Err(DomainError::Validation(format!(
                    "endereco references unknown pessoa {}",
                    pessoa.id
                )));
            }
            merged.pessoa_id = Some(pessoa.id);
        }
        self.store.insert_endereco(merged.clone());
        Ok(mapper::endereco_to_dto(merged))
    }

    pub async fn find_one(&self, id: Id) -> DomainResult<Option<EnderecoDto>> {
        debug!(id, "find endereco");
        Ok(self.store.get_endereco(id).map(mapper::endereco_to_dto))
    }

    pub async fn find_all(
        &self,
        sort: &SortOrder<EnderecoSortField>,
        request: &PageRequest,
    ) -> DomainResult<Page<EnderecoDto>> {
        debug!(?request, "find all enderecos");
        let page = self
            .executor
            .page(&EnderecoPredicate::compile(None), sort, request)
            .await?;
        Ok(page.map(mapper::endereco_to_dto))
    }

    pub async fn delete(&self, id: Id) -> DomainResult<()> {
        debug!(id, "delete endereco");
        self.store
            .remove_endereco(id)
            .map(|_| ())
            .ok_or(DomainError::not_found("Endereco", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::PessoaDto;
    use pessoa_models::Pessoa;

    fn store_with_pessoa() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.insert_pessoa(Pessoa::new(1).nome("Ana"));
        store
    }

    fn casa(id: Id) -> EnderecoDto {
        EnderecoDto {
            id,
            logradouro: Some("Rua das Flores".to_string()),
            cidade: Some("Curitiba".to_string()),
            pessoa: Some(PessoaDto::id_only(1)),
            ..EnderecoDto::new(id)
        }
    }

    #[tokio::test]
    async fn test_save_and_find_one() {
        let service = EnderecoService::new(store_with_pessoa());
        let saved = service.save(casa(10)).await.unwrap();
        assert_eq!(saved.pessoa, Some(PessoaDto::id_only(1)));
        assert_eq!(service.find_one(10).await.unwrap(), Some(casa(10)));
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_owner() {
        let service = EnderecoService::new(Arc::new(InMemoryStore::new()));
        let err = service.save(casa(10)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_partial_update_merges() {
        let service = EnderecoService::new(store_with_pessoa());
        service.save(casa(10)).await.unwrap();

        let patch = EnderecoDto {
            cidade: Some("Londrina".to_string()),
            ..EnderecoDto::new(10)
        };
        let updated = service.partial_update(patch).await.unwrap();
        assert_eq!(updated.cidade.as_deref(), Some("Londrina"));
        assert_eq!(updated.logradouro.as_deref(), Some("Rua das Flores"));
        assert_eq!(updated.pessoa, Some(PessoaDto::id_only(1)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = EnderecoService::new(store_with_pessoa());
        assert_eq!(
            service.delete(99).await.unwrap_err(),
            DomainError::not_found("Endereco", 99)
        );
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_cidade() {
        let service = EnderecoService::new(store_with_pessoa());
        service
            .save(EnderecoDto {
                cidade: Some("Londrina".to_string()),
                ..EnderecoDto::new(10)
            })
            .await
            .unwrap();
        service
            .save(EnderecoDto {
                cidade: Some("Curitiba".to_string()),
                ..EnderecoDto::new(11)
            })
            .await
            .unwrap();

        let page = service
            .find_all(
                &SortOrder::by_asc(EnderecoSortField::Cidade),
                &PageRequest::default(),
            )
            .await
            .unwrap();
        let cidades: Vec<_> = page.items.iter().filter_map(|e| e.cidade.clone()).collect();
        assert_eq!(cidades, vec!["Curitiba", "Londrina"]);
    }
}
