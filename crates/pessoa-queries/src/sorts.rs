//! Sort specifications for paged searches.
//!
//! Sort fields are typed per entity so a request can never name a column
//! the executor does not know. Executors append an id tiebreak to every
//! sort, which keeps paging stable regardless of the requested field.

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sortable columns of `Pessoa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PessoaSortField {
    Id,
    Nome,
    DataNascimento,
}

impl PessoaSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "nome" => Some(Self::Nome),
            "dataNascimento" => Some(Self::DataNascimento),
            _ => None,
        }
    }
}

/// Sortable columns of `Endereco`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnderecoSortField {
    Id,
    Logradouro,
    Cep,
    Numero,
    Cidade,
}

impl EnderecoSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "logradouro" => Some(Self::Logradouro),
            "cep" => Some(Self::Cep),
            "numero" => Some(Self::Numero),
            "cidade" => Some(Self::Cidade),
            _ => None,
        }
    }
}

/// A single sort criterion: a field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortCriterion<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Ordered collection of sort criteria; earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder<F> {
    criteria: Vec<SortCriterion<F>>,
}

impl<F> Default for SortOrder<F> {
    fn default() -> Self {
        Self { criteria: vec![] }
    }
}

impl<F> SortOrder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_asc(field: F) -> Self {
        Self {
            criteria: vec![SortCriterion::asc(field)],
        }
    }

    pub fn by_desc(field: F) -> Self {
        Self {
            criteria: vec![SortCriterion::desc(field)],
        }
    }

    pub fn then_asc(mut self, field: F) -> Self {
        self.criteria.push(SortCriterion::asc(field));
        self
    }

    pub fn then_desc(mut self, field: F) -> Self {
        self.criteria.push(SortCriterion::desc(field));
        self
    }

    pub fn criteria(&self) -> &[SortCriterion<F>] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }
}
