//! Query executors.
//!
//! Runs a compiled predicate against the store in three modes: full list,
//! page (with total count), and count. `count` always equals the length of
//! the full list for the same predicate, and pages under a stable sort
//! partition that list with no duplicates or omissions; every sort gets an
//! id tiebreak appended, so ties cannot reshuffle across page boundaries.
//!
//! The relation condition is evaluated with left-join semantics over the
//! owned endereco id set; a pessoa with no endereco is tested as a single
//! null row, so `specified=false` on the relation selects exactly the
//! parents without children.
//!
//! All modes are read-only.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use pessoa_core::{Id, Page, PageRequest};
use pessoa_models::{Endereco, Pessoa};
use pessoa_queries::predicate::{EnderecoCondition, EnderecoPredicate, PessoaCondition, PessoaPredicate};
use pessoa_queries::sorts::{EnderecoSortField, PessoaSortField, SortDirection, SortOrder};

use crate::repository::RepositoryResult;
use crate::store::InMemoryStore;

/// Compare optional columns with nulls last ascending (reversed for
/// descending, giving nulls first), matching the backing store's ordering.
fn cmp_option<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn dedup_by_id<T>(items: &mut Vec<T>, id_of: impl Fn(&T) -> Id) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(id_of(item)));
}

fn slice_page<T: Clone>(items: &[T], request: &PageRequest) -> Vec<T> {
    let start = request.offset().min(items.len() as i64) as usize;
    let end = (request.offset() + request.limit()).min(items.len() as i64) as usize;
    items[start..end].to_vec()
}

/// Executes compiled pessoa predicates against the store.
pub struct PessoaQueryExecutor {
    store: Arc<InMemoryStore>,
}

impl PessoaQueryExecutor {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    /// All matching records under the given sort.
    pub async fn find(
        &self,
        predicate: &PessoaPredicate,
        sort: &SortOrder<PessoaSortField>,
    ) -> RepositoryResult<Vec<Pessoa>> {
        Ok(self.matching(predicate, sort))
    }

    /// One page of matching records plus the total count for the whole
    /// filtered set.
    pub async fn page(
        &self,
        predicate: &PessoaPredicate,
        sort: &SortOrder<PessoaSortField>,
        request: &PageRequest,
    ) -> RepositoryResult<Page<Pessoa>> {
        let all = self.matching(predicate, sort);
        let total = all.len() as i64;
        Ok(Page::new(slice_page(&all, request), total, request))
    }

    /// Number of matching records.
    pub async fn count(&self, predicate: &PessoaPredicate) -> RepositoryResult<i64> {
        Ok(self.matching(predicate, &SortOrder::new()).len() as i64)
    }

    fn matching(
        &self,
        predicate: &PessoaPredicate,
        sort: &SortOrder<PessoaSortField>,
    ) -> Vec<Pessoa> {
        let mut matches: Vec<Pessoa> = self
            .store
            .pessoas()
            .into_iter()
            .filter(|p| self.matches(predicate, p))
            .collect();
        matches.sort_by(|a, b| Self::compare(a, b, sort));
        if predicate.distinct() {
            // existential relation evaluation already yields each parent at
            // most once; the dedup keeps the distinct contract explicit
            dedup_by_id(&mut matches, |p| p.id);
        }
        matches
    }

    fn matches(&self, predicate: &PessoaPredicate, pessoa: &Pessoa) -> bool {
        predicate.conditions().iter().all(|condition| match condition {
            PessoaCondition::Id(check) => check.matches(Some(&pessoa.id)),
            PessoaCondition::Nome(check) => check.matches(pessoa.nome.as_ref()),
            PessoaCondition::DataNascimento(check) => {
                check.matches(pessoa.data_nascimento.as_ref())
            }
            PessoaCondition::EnderecoId(check) => {
                let owned = self.store.endereco_ids_of(pessoa.id);
                if owned.is_empty() {
                    check.matches(None)
                } else {
                    owned.iter().any(|id| check.matches(Some(id)))
                }
            }
        })
    }

    fn compare(a: &Pessoa, b: &Pessoa, sort: &SortOrder<PessoaSortField>) -> Ordering {
        for criterion in sort.criteria() {
            let ordering = match criterion.field {
                PessoaSortField::Id => a.id.cmp(&b.id),
                PessoaSortField::Nome => cmp_option(a.nome.as_ref(), b.nome.as_ref()),
                PessoaSortField::DataNascimento => {
                    cmp_option(a.data_nascimento.as_ref(), b.data_nascimento.as_ref())
                }
            };
            let ordering = apply_direction(ordering, criterion.direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.id.cmp(&b.id)
    }
}

/// Executes compiled endereco predicates against the store.
pub struct EnderecoQueryExecutor {
    store: Arc<InMemoryStore>,
}

impl EnderecoQueryExecutor {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    pub async fn find(
        &self,
        predicate: &EnderecoPredicate,
        sort: &SortOrder<EnderecoSortField>,
    ) -> RepositoryResult<Vec<Endereco>> {
        Ok(self.matching(predicate, sort))
    }

    pub async fn page(
        &self,
        predicate: &EnderecoPredicate,
        sort: &SortOrder<EnderecoSortField>,
        request: &PageRequest,
    ) -> RepositoryResult<Page<Endereco>> {
        let all = self.matching(predicate, sort);
        let total = all.len() as i64;
        Ok(Page::new(slice_page(&all, request), total, request))
    }

    pub async fn count(&self, predicate: &EnderecoPredicate) -> RepositoryResult<i64> {
        Ok(self.matching(predicate, &SortOrder::new()).len() as i64)
    }

    fn matching(
        &self,
        predicate: &EnderecoPredicate,
        sort: &SortOrder<EnderecoSortField>,
    ) -> Vec<Endereco> {
        let mut matches: Vec<Endereco> = self
            .store
            .enderecos()
            .into_iter()
            .filter(|e| Self::matches(predicate, e))
            .collect();
        matches.sort_by(|a, b| Self::compare(a, b, sort));
        if predicate.distinct() {
            dedup_by_id(&mut matches, |e| e.id);
        }
        matches
    }

    fn matches(predicate: &EnderecoPredicate, endereco: &Endereco) -> bool {
        predicate.conditions().iter().all(|condition| match condition {
            EnderecoCondition::Id(check) => check.matches(Some(&endereco.id)),
            EnderecoCondition::Logradouro(check) => check.matches(endereco.logradouro.as_ref()),
            EnderecoCondition::Cep(check) => check.matches(endereco.cep.as_ref()),
            EnderecoCondition::Numero(check) => check.matches(endereco.numero.as_ref()),
            EnderecoCondition::Cidade(check) => check.matches(endereco.cidade.as_ref()),
            EnderecoCondition::EnderecoPrincipal(check) => {
                check.matches(endereco.endereco_principal.as_ref())
            }
            EnderecoCondition::PessoaId(check) => check.matches(endereco.pessoa_id.as_ref()),
        })
    }

    fn compare(a: &Endereco, b: &Endereco, sort: &SortOrder<EnderecoSortField>) -> Ordering {
        for criterion in sort.criteria() {
            let ordering = match criterion.field {
                EnderecoSortField::Id => a.id.cmp(&b.id),
                EnderecoSortField::Logradouro => {
                    cmp_option(a.logradouro.as_ref(), b.logradouro.as_ref())
                }
                EnderecoSortField::Cep => cmp_option(a.cep.as_ref(), b.cep.as_ref()),
                EnderecoSortField::Numero => cmp_option(a.numero.as_ref(), b.numero.as_ref()),
                EnderecoSortField::Cidade => cmp_option(a.cidade.as_ref(), b.cidade.as_ref()),
            };
            let ordering = apply_direction(ordering, criterion.direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.id.cmp(&b.id)
    }
}
