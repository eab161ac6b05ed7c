//! Criteria records: all constraints requested for one search.
//!
//! One criteria type per queryable entity. Unset fields impose no
//! constraint. The field set is fixed at compile time; the excluded HTTP
//! layer deserializes these from flat `field.operator=value` request
//! parameters, e.g. `nome.contains=Jo&dataNascimento.greaterThan=2000-01-01`.
//!
//! Relation fields (`endereco_id`, `pessoa_id`) use the plain [`Filter`]
//! over the related identifier type: only the scalar operators apply across
//! a join, so range and substring operators are unrepresentable there.

use pessoa_core::Id;
use serde::{Deserialize, Serialize};

use crate::filter::{BooleanFilter, Filter, LocalDateFilter, LongFilter, StringFilter};

/// Criteria for searching `Pessoa` records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PessoaCriteria {
    pub id: Option<LongFilter>,
    pub nome: Option<StringFilter>,
    pub data_nascimento: Option<LocalDateFilter>,
    /// Filter on the id of any owned endereco (one-to-many traversal)
    pub endereco_id: Option<Filter<Id>>,
    /// When set, matching records are deduplicated by id
    pub distinct: Option<bool>,
}

impl PessoaCriteria {
    /// Deep copy for per-request isolation; copies never share state with
    /// the original.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.nome.is_none()
            && self.data_nascimento.is_none()
            && self.endereco_id.is_none()
            && self.distinct.is_none()
    }
}

/// Criteria for searching `Endereco` records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnderecoCriteria {
    pub id: Option<LongFilter>,
    pub logradouro: Option<StringFilter>,
    pub cep: Option<StringFilter>,
    pub numero: Option<StringFilter>,
    pub cidade: Option<StringFilter>,
    pub endereco_principal: Option<BooleanFilter>,
    /// Filter on the owning pessoa's id (many-to-one foreign key)
    pub pessoa_id: Option<Filter<Id>>,
    pub distinct: Option<bool>,
}

impl EnderecoCriteria {
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.logradouro.is_none()
            && self.cep.is_none()
            && self.numero.is_none()
            && self.cidade.is_none()
            && self.endereco_principal.is_none()
            && self.pessoa_id.is_none()
            && self.distinct.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(PessoaCriteria::default().is_empty());
        assert!(EnderecoCriteria::default().is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = PessoaCriteria {
            nome: Some(StringFilter::contains("Jo")),
            distinct: Some(true),
            ..Default::default()
        };
        let mut copied = original.copy();
        copied.nome = Some(StringFilter::contains("Maria"));
        assert_eq!(
            original.nome.as_ref().unwrap().contains.as_deref(),
            Some("Jo")
        );
        assert_eq!(original, original.copy());
    }

    #[test]
    fn test_deserializes_search_request() {
        let criteria: PessoaCriteria = serde_json::from_str(
            r#"{
                "nome": {"contains": "Jo"},
                "dataNascimento": {"greaterThan": "2000-01-01"},
                "distinct": true
            }"#,
        )
        .unwrap();
        assert!(criteria.nome.is_some());
        assert!(criteria.data_nascimento.is_some());
        assert_eq!(criteria.distinct, Some(true));
        assert!(criteria.id.is_none());
    }

    #[test]
    fn test_endereco_criteria_roundtrip() {
        let criteria = EnderecoCriteria {
            cidade: Some(StringFilter::equals("Curitiba")),
            pessoa_id: Some(Filter::equals(1)),
            ..Default::default()
        };
        let json = serde_json::to_string(&criteria).unwrap();
        let back: EnderecoCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(criteria, back);
    }
}
