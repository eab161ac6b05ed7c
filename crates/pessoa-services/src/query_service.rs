//! Criteria query services.
//!
//! The entry point for searches: a criteria record comes in, gets compiled
//! into a predicate once, and the executor runs it in list, page, or count
//! mode. Results are mapped to the caller-facing DTO shape. All operations
//! are read-only; concurrent callers share nothing but the store.

use std::sync::Arc;

use pessoa_core::{DomainResult, Page, PageRequest};
use pessoa_db::{EnderecoQueryExecutor, InMemoryStore, PessoaQueryExecutor};
use pessoa_queries::criteria::{EnderecoCriteria, PessoaCriteria};
use pessoa_queries::predicate::{EnderecoPredicate, PessoaPredicate};
use pessoa_queries::sorts::{EnderecoSortField, PessoaSortField, SortOrder};
use tracing::debug;

use crate::dto::{EnderecoDto, PessoaDto};
use crate::mapper;

/// Executes criteria searches over pessoa records.
pub struct PessoaQueryService {
    executor: PessoaQueryExecutor,
}

impl PessoaQueryService {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            executor: PessoaQueryExecutor::new(store),
        }
    }

    /// All records matching the criteria, in id order.
    pub async fn find_by_criteria(
        &self,
        criteria: Option<&PessoaCriteria>,
    ) -> DomainResult<Vec<PessoaDto>> {
        debug!(?criteria, "find by criteria");
        let predicate = PessoaPredicate::compile(criteria);
        let found = self.executor.find(&predicate, &SortOrder::new()).await?;
        Ok(found.into_iter().map(mapper::pessoa_to_dto).collect())
    }

    /// One page of records matching the criteria, plus the total count.
    pub async fn find_by_criteria_paged(
        &self,
        criteria: Option<&PessoaCriteria>,
        sort: &SortOrder<PessoaSortField>,
        request: &PageRequest,
    ) -> DomainResult<Page<PessoaDto>> {
        debug!(?criteria, ?request, "find by criteria, paged");
        let predicate = PessoaPredicate::compile(criteria);
        let page = self.executor.page(&predicate, sort, request).await?;
        Ok(page.map(mapper::pessoa_to_dto))
    }

    /// Number of records matching the criteria.
    pub async fn count_by_criteria(
        &self,
        criteria: Option<&PessoaCriteria>,
    ) -> DomainResult<i64> {
        debug!(?criteria, "count by criteria");
        let predicate = PessoaPredicate::compile(criteria);
        Ok(self.executor.count(&predicate).await?)
    }
}

/// Executes criteria searches over endereco records.
pub struct EnderecoQueryService {
    executor: EnderecoQueryExecutor,
}

impl EnderecoQueryService {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            executor: EnderecoQueryExecutor::new(store),
        }
    }

    pub async fn find_by_criteria(
        &self,
        criteria: Option<&EnderecoCriteria>,
    ) -> DomainResult<Vec<EnderecoDto>> {
        debug!(?criteria, "find by criteria");
        let predicate = EnderecoPredicate::compile(criteria);
        let found = self.executor.find(&predicate, &SortOrder::new()).await?;
        Ok(found.into_iter().map(mapper::endereco_to_dto).collect())
    }

    pub async fn find_by_criteria_paged(
        &self,
        criteria: Option<&EnderecoCriteria>,
        sort: &SortOrder<EnderecoSortField>,
        request: &PageRequest,
    ) -> DomainResult<Page<EnderecoDto>> {
        debug!(?criteria, ?request, "find by criteria, paged");
        let predicate = EnderecoPredicate::compile(criteria);
        let page = self.executor.page(&predicate, sort, request).await?;
        Ok(page.map(mapper::endereco_to_dto))
    }

    pub async fn count_by_criteria(
        &self,
        criteria: Option<&EnderecoCriteria>,
    ) -> DomainResult<i64> {
        debug!(?criteria, "count by criteria");
        let predicate = EnderecoPredicate::compile(criteria);
        Ok(self.executor.count(&predicate).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pessoa_models::{Endereco, Pessoa};
    use pessoa_queries::filter::{Filter, LocalDateFilter, StringFilter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The reference scenario: "Jo", born 2000-01-01, no endereco,
    /// alongside two "Ana" records with enderecos.
    fn fixture() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.insert_pessoa(Pessoa::new(1).nome("Jo").data_nascimento(date(2000, 1, 1)));
        store.insert_pessoa(Pessoa::new(2).nome("Ana").data_nascimento(date(1990, 5, 20)));
        store.insert_pessoa(Pessoa::new(3).nome("Ana").data_nascimento(date(1985, 3, 2)));
        store.insert_endereco(Endereco::new(10).cidade("Curitiba").pessoa_id(2));
        store.insert_endereco(Endereco::new(11).cidade("Londrina").pessoa_id(3));
        store
    }

    #[tokio::test]
    async fn test_no_criteria_returns_everything() {
        let service = PessoaQueryService::new(fixture());
        assert_eq!(service.find_by_criteria(None).await.unwrap().len(), 3);
        assert_eq!(service.count_by_criteria(None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_jo_scenario() {
        let service = PessoaQueryService::new(fixture());

        let by_contains = |needle: &str| PessoaCriteria {
            nome: Some(StringFilter::contains(needle)),
            ..Default::default()
        };
        let found = service
            .find_by_criteria(Some(&by_contains("J")))
            .await
            .unwrap();
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        assert!(service
            .find_by_criteria(Some(&by_contains("X")))
            .await
            .unwrap()
            .is_empty());

        let born_after = PessoaCriteria {
            data_nascimento: Some(LocalDateFilter::greater_than(date(1999, 1, 1))),
            ..Default::default()
        };
        let found = service.find_by_criteria(Some(&born_after)).await.unwrap();
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        // filtering on an endereco id nobody has excludes Jo and both Anas
        let unknown_endereco = PessoaCriteria {
            endereco_id: Some(Filter::equals(999)),
            ..Default::default()
        };
        assert_eq!(
            service
                .count_by_criteria(Some(&unknown_endereco))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_shared_name_with_distinct() {
        let service = PessoaQueryService::new(fixture());
        let criteria = PessoaCriteria {
            nome: Some(StringFilter::equals("Ana")),
            distinct: Some(true),
            ..Default::default()
        };
        let found = service.find_by_criteria(Some(&criteria)).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(service.count_by_criteria(Some(&criteria)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_and_count_share_one_logical_request() {
        let service = PessoaQueryService::new(fixture());
        let criteria = PessoaCriteria {
            nome: Some(StringFilter::contains("a")),
            ..Default::default()
        };
        // both legs run against their own copy of the criteria
        let listed = service
            .find_by_criteria(Some(&criteria.copy()))
            .await
            .unwrap();
        let counted = service
            .count_by_criteria(Some(&criteria.copy()))
            .await
            .unwrap();
        assert_eq!(counted, listed.len() as i64);
    }

    #[tokio::test]
    async fn test_paged_search_carries_total() {
        let service = PessoaQueryService::new(fixture());
        let page = service
            .find_by_criteria_paged(
                None,
                &SortOrder::by_asc(PessoaSortField::Nome),
                &PageRequest::new(0, 2),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.has_next());
        // nome asc: the two Anas (id tiebreak), then Jo
        assert_eq!(page.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_endereco_query_service() {
        let service = EnderecoQueryService::new(fixture());
        let criteria = EnderecoCriteria {
            pessoa_id: Some(Filter::equals(2)),
            ..Default::default()
        };
        let found = service.find_by_criteria(Some(&criteria)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 10);
        assert_eq!(found[0].pessoa.as_ref().unwrap().id, 2);
        assert_eq!(service.count_by_criteria(None).await.unwrap(), 2);
    }
}
