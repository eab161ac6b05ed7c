//! Criteria-to-predicate compilation.
//!
//! A compiled predicate is a conjunction of primitive checks over one
//! entity's attribute space, plus a distinct flag. Conjunction is
//! commutative and associative, so the order conditions were folded in
//! never affects the result; `distinct` is carried as a query-level flag
//! rather than a boolean condition and the executor applies it after
//! filtering.
//!
//! Relation traversal is explicit: `PessoaCondition::EnderecoId` means
//! "there exists an owned endereco whose id passes this check", evaluated
//! with left-join semantics so a pessoa with no endereco is tested as a
//! single null row. The storage adapter decides how to execute that
//! efficiently; nothing here loads related records.
//!
//! Null handling follows SQL comparison semantics, which is what the
//! backing relational store does: every check fails on an absent value
//! except `Specified(false)`, which holds exactly when the value is absent.

use chrono::NaiveDate;
use pessoa_core::Id;

use crate::criteria::{EnderecoCriteria, PessoaCriteria};
use crate::filter::{Filter, RangeFilter, StringFilter};

/// One primitive check applicable to any scalar field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarCheck<T> {
    Equals(T),
    NotEquals(T),
    /// `Specified(true)`: value present; `Specified(false)`: value absent
    Specified(bool),
    In(Vec<T>),
    NotIn(Vec<T>),
}

impl<T: PartialEq> ScalarCheck<T> {
    pub fn matches(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::Specified(wanted), v) => *wanted == v.is_some(),
            (_, None) => false,
            (Self::Equals(expected), Some(v)) => *v == *expected,
            (Self::NotEquals(expected), Some(v)) => *v != *expected,
            (Self::In(set), Some(v)) => set.contains(v),
            (Self::NotIn(set), Some(v)) => !set.contains(v),
        }
    }
}

/// A check applicable to an ordered field. Bounds are exclusive for
/// `GreaterThan`/`LessThan` and inclusive for the `OrEqual` variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeCheck<T> {
    Scalar(ScalarCheck<T>),
    GreaterThan(T),
    GreaterThanOrEqual(T),
    LessThan(T),
    LessThanOrEqual(T),
}

impl<T: PartialOrd> RangeCheck<T> {
    pub fn matches(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::Scalar(check), v) => check.matches(v),
            (_, None) => false,
            (Self::GreaterThan(bound), Some(v)) => *v > *bound,
            (Self::GreaterThanOrEqual(bound), Some(v)) => *v >= *bound,
            (Self::LessThan(bound), Some(v)) => *v < *bound,
            (Self::LessThanOrEqual(bound), Some(v)) => *v <= *bound,
        }
    }
}

/// A check applicable to a text field. Substring matching is
/// case-insensitive, mirroring the storage layer's `ILIKE`.
#[derive(Debug, Clone, PartialEq)]
pub enum StringCheck {
    Scalar(ScalarCheck<String>),
    Contains(String),
    DoesNotContain(String),
}

impl StringCheck {
    pub fn matches(&self, value: Option<&String>) -> bool {
        match (self, value) {
            (Self::Scalar(check), v) => check.matches(v),
            (_, None) => false,
            (Self::Contains(needle), Some(v)) => {
                v.to_lowercase().contains(&needle.to_lowercase())
            }
            (Self::DoesNotContain(needle), Some(v)) => {
                !v.to_lowercase().contains(&needle.to_lowercase())
            }
        }
    }
}

impl<T: Clone> Filter<T> {
    /// One check per set dimension; all must hold (conjunction).
    pub fn to_checks(&self) -> Vec<ScalarCheck<T>> {
        let mut checks = Vec::new();
        if let Some(v) = &self.equals {
            checks.push(ScalarCheck::Equals(v.clone()));
        }
        if let Some(v) = &self.not_equals {
            checks.push(ScalarCheck::NotEquals(v.clone()));
        }
        if let Some(s) = self.specified {
            checks.push(ScalarCheck::Specified(s));
        }
        if let Some(vs) = &self.in_ {
            checks.push(ScalarCheck::In(vs.clone()));
        }
        if let Some(vs) = &self.not_in {
            checks.push(ScalarCheck::NotIn(vs.clone()));
        }
        checks
    }
}

impl<T: Clone> RangeFilter<T> {
    pub fn to_checks(&self) -> Vec<RangeCheck<T>> {
        let mut checks: Vec<RangeCheck<T>> =
            self.base.to_checks().into_iter().map(RangeCheck::Scalar).collect();
        if let Some(v) = &self.greater_than {
            checks.push(RangeCheck::GreaterThan(v.clone()));
        }
        if let Some(v) = &self.greater_than_or_equal {
            checks.push(RangeCheck::GreaterThanOrEqual(v.clone()));
        }
        if let Some(v) = &self.less_than {
            checks.push(RangeCheck::LessThan(v.clone()));
        }
        if let Some(v) = &self.less_than_or_equal {
            checks.push(RangeCheck::LessThanOrEqual(v.clone()));
        }
        checks
    }
}

impl StringFilter {
    pub fn to_checks(&self) -> Vec<StringCheck> {
        let mut checks: Vec<StringCheck> =
            self.base.to_checks().into_iter().map(StringCheck::Scalar).collect();
        if let Some(v) = &self.contains {
            checks.push(StringCheck::Contains(v.clone()));
        }
        if let Some(v) = &self.does_not_contain {
            checks.push(StringCheck::DoesNotContain(v.clone()));
        }
        checks
    }
}

/// One condition of a compiled pessoa predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum PessoaCondition {
    Id(RangeCheck<Id>),
    Nome(StringCheck),
    DataNascimento(RangeCheck<NaiveDate>),
    /// Exists an owned endereco whose id passes the check. Evaluated with
    /// left-join semantics: no endereco behaves like a single null id.
    EnderecoId(ScalarCheck<Id>),
}

/// Compiled predicate over the pessoa attribute space: a conjunction of
/// conditions plus the distinct flag. The empty conjunction matches every
/// record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PessoaPredicate {
    conditions: Vec<PessoaCondition>,
    distinct: bool,
}

impl PessoaPredicate {
    /// Compile a criteria record into one predicate. `None` and the empty
    /// criteria both yield the match-everything predicate.
    pub fn compile(criteria: Option<&PessoaCriteria>) -> Self {
        let mut predicate = Self::default();
        let Some(criteria) = criteria else {
            return predicate;
        };
        predicate.distinct = criteria.distinct.unwrap_or(false);
        if let Some(filter) = &criteria.id {
            predicate.extend(filter.to_checks().into_iter().map(PessoaCondition::Id));
        }
        if let Some(filter) = &criteria.nome {
            predicate.extend(filter.to_checks().into_iter().map(PessoaCondition::Nome));
        }
        if let Some(filter) = &criteria.data_nascimento {
            predicate.extend(
                filter
                    .to_checks()
                    .into_iter()
                    .map(PessoaCondition::DataNascimento),
            );
        }
        if let Some(filter) = &criteria.endereco_id {
            predicate.extend(filter.to_checks().into_iter().map(PessoaCondition::EnderecoId));
        }
        predicate
    }

    /// Fold another condition into the conjunction.
    pub fn and(mut self, condition: PessoaCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    fn extend(&mut self, conditions: impl IntoIterator<Item = PessoaCondition>) {
        self.conditions.extend(conditions);
    }

    pub fn conditions(&self) -> &[PessoaCondition] {
        &self.conditions
    }

    pub fn distinct(&self) -> bool {
        self.distinct
    }

    /// True when the predicate matches every record.
    pub fn matches_everything(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// One condition of a compiled endereco predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum EnderecoCondition {
    Id(RangeCheck<Id>),
    Logradouro(StringCheck),
    Cep(StringCheck),
    Numero(StringCheck),
    Cidade(StringCheck),
    EnderecoPrincipal(ScalarCheck<bool>),
    /// Check on the owning pessoa's id; a plain foreign-key column test.
    PessoaId(ScalarCheck<Id>),
}

/// Compiled predicate over the endereco attribute space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnderecoPredicate {
    conditions: Vec<EnderecoCondition>,
    distinct: bool,
}

impl EnderecoPredicate {
    pub fn compile(criteria: Option<&EnderecoCriteria>) -> Self {
        let mut predicate = Self::default();
        let Some(criteria) = criteria else {
            return predicate;
        };
        predicate.distinct = criteria.distinct.unwrap_or(false);
        if let Some(filter) = &criteria.id {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::Id));
        }
        if let Some(filter) = &criteria.logradouro {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::Logradouro));
        }
        if let Some(filter) = &criteria.cep {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::Cep));
        }
        if let Some(filter) = &criteria.numero {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::Numero));
        }
        if let Some(filter) = &criteria.cidade {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::Cidade));
        }
        if let Some(filter) = &criteria.endereco_principal {
            predicate.extend(
                filter
                    .to_checks()
                    .into_iter()
                    .map(EnderecoCondition::EnderecoPrincipal),
            );
        }
        if let Some(filter) = &criteria.pessoa_id {
            predicate.extend(filter.to_checks().into_iter().map(EnderecoCondition::PessoaId));
        }
        predicate
    }

    pub fn and(mut self, condition: EnderecoCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    fn extend(&mut self, conditions: impl IntoIterator<Item = EnderecoCondition>) {
        self.conditions.extend(conditions);
    }

    pub fn conditions(&self) -> &[EnderecoCondition] {
        &self.conditions
    }

    pub fn distinct(&self) -> bool {
        self.distinct
    }

    pub fn matches_everything(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{LocalDateFilter, LongFilter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scalar_check_on_present_value() {
        assert!(ScalarCheck::Equals(3).matches(Some(&3)));
        assert!(!ScalarCheck::Equals(3).matches(Some(&4)));
        assert!(ScalarCheck::NotEquals(3).matches(Some(&4)));
        assert!(ScalarCheck::In(vec![1, 2]).matches(Some(&2)));
        assert!(!ScalarCheck::In(vec![1, 2]).matches(Some(&3)));
        assert!(ScalarCheck::NotIn(vec![1, 2]).matches(Some(&3)));
        assert!(ScalarCheck::Specified(true).matches(Some(&1)));
        assert!(!ScalarCheck::Specified(false).matches(Some(&1)));
    }

    #[test]
    fn test_scalar_check_on_absent_value() {
        // SQL comparison semantics: only specified=false holds on null
        assert!(ScalarCheck::<i64>::Specified(false).matches(None));
        assert!(!ScalarCheck::<i64>::Specified(true).matches(None));
        assert!(!ScalarCheck::Equals(3).matches(None));
        assert!(!ScalarCheck::NotEquals(3).matches(None));
        assert!(!ScalarCheck::In(vec![1, 2]).matches(None));
        assert!(!ScalarCheck::NotIn(vec![1, 2]).matches(None));
    }

    #[test]
    fn test_range_check_bounds() {
        assert!(RangeCheck::GreaterThan(5).matches(Some(&6)));
        assert!(!RangeCheck::GreaterThan(5).matches(Some(&5)));
        assert!(RangeCheck::GreaterThanOrEqual(5).matches(Some(&5)));
        assert!(RangeCheck::LessThan(5).matches(Some(&4)));
        assert!(!RangeCheck::LessThan(5).matches(Some(&5)));
        assert!(RangeCheck::LessThanOrEqual(5).matches(Some(&5)));
        assert!(!RangeCheck::GreaterThan(5).matches(None));
    }

    #[test]
    fn test_range_partition_properties() {
        // gte(v) and lt(v) partition any value; gt(v) complements lte(v)
        for v in [-2i64, 0, 4, 5, 6, 99] {
            let gte = RangeCheck::GreaterThanOrEqual(5).matches(Some(&v));
            let lt = RangeCheck::LessThan(5).matches(Some(&v));
            assert!(gte ^ lt);

            let gt = RangeCheck::GreaterThan(5).matches(Some(&v));
            let lte = RangeCheck::LessThanOrEqual(5).matches(Some(&v));
            assert!(gt ^ lte);
        }
    }

    #[test]
    fn test_string_check_case_insensitive_contains() {
        let check = StringCheck::Contains("jo".to_string());
        assert!(check.matches(Some(&"João".to_string())));
        assert!(check.matches(Some(&"JOANA".to_string())));
        assert!(!check.matches(Some(&"Maria".to_string())));
        assert!(!check.matches(None));

        let negated = StringCheck::DoesNotContain("jo".to_string());
        assert!(!negated.matches(Some(&"João".to_string())));
        assert!(negated.matches(Some(&"Maria".to_string())));
        // null never matches a substring test either way
        assert!(!negated.matches(None));
    }

    #[test]
    fn test_filter_to_checks_is_conjunctive() {
        let filter = Filter::in_list(vec![1i64, 2]).and_specified(true);
        let checks = filter.to_checks();
        assert_eq!(checks.len(), 2);
        assert!(checks.contains(&ScalarCheck::Specified(true)));
        assert!(checks.contains(&ScalarCheck::In(vec![1, 2])));
    }

    #[test]
    fn test_empty_filter_yields_no_checks() {
        assert!(Filter::<i64>::new().to_checks().is_empty());
        assert!(LongFilter::new().to_checks().is_empty());
        assert!(StringFilter::new().to_checks().is_empty());
    }

    #[test]
    fn test_compile_none_matches_everything() {
        let predicate = PessoaPredicate::compile(None);
        assert!(predicate.matches_everything());
        assert!(!predicate.distinct());
    }

    #[test]
    fn test_compile_empty_criteria_matches_everything() {
        let predicate = PessoaPredicate::compile(Some(&PessoaCriteria::default()));
        assert!(predicate.matches_everything());
    }

    #[test]
    fn test_compile_one_condition_per_set_dimension() {
        let criteria = PessoaCriteria {
            id: Some(LongFilter::greater_than(5).and_less_than(10)),
            nome: Some(StringFilter::contains("Jo")),
            data_nascimento: Some(LocalDateFilter::equals(date(2000, 1, 1))),
            endereco_id: Some(Filter::equals(1)),
            distinct: Some(true),
        };
        let predicate = PessoaPredicate::compile(Some(&criteria));
        assert_eq!(predicate.conditions().len(), 5);
        assert!(predicate.distinct());
        assert!(predicate
            .conditions()
            .contains(&PessoaCondition::EnderecoId(ScalarCheck::Equals(1))));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let criteria = PessoaCriteria {
            nome: Some(StringFilter::contains("Ana")),
            endereco_id: Some(Filter::specified(true)),
            ..Default::default()
        };
        assert_eq!(
            PessoaPredicate::compile(Some(&criteria)),
            PessoaPredicate::compile(Some(&criteria.copy()))
        );
    }

    #[test]
    fn test_and_folds_into_conjunction() {
        let predicate = PessoaPredicate::default()
            .and(PessoaCondition::Nome(StringCheck::Contains("a".into())))
            .and(PessoaCondition::Id(RangeCheck::GreaterThan(1)));
        assert_eq!(predicate.conditions().len(), 2);
        assert!(!predicate.matches_everything());
    }

    #[test]
    fn test_compile_endereco_criteria() {
        let criteria = EnderecoCriteria {
            cidade: Some(StringFilter::equals("Curitiba")),
            endereco_principal: Some(Filter::equals(true)),
            pessoa_id: Some(Filter::in_list(vec![1, 2])),
            ..Default::default()
        };
        let predicate = EnderecoPredicate::compile(Some(&criteria));
        assert_eq!(predicate.conditions().len(), 3);
        assert!(predicate
            .conditions()
            .contains(&EnderecoCondition::PessoaId(ScalarCheck::In(vec![1, 2]))));
    }
}
