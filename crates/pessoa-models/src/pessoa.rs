//! The Pessoa (person) entity.

use chrono::NaiveDate;
use pessoa_core::Id;
use serde::{Deserialize, Serialize};

/// A person record. All columns except the primary key are nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pessoa {
    pub id: Id,
    pub nome: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
}

impl Pessoa {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            nome: None,
            data_nascimento: None,
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    pub fn data_nascimento(mut self, data: NaiveDate) -> Self {
        self.data_nascimento = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = Pessoa::new(1)
            .nome("Ana")
            .data_nascimento(NaiveDate::from_ymd_opt(1990, 5, 20).unwrap());
        assert_eq!(p.id, 1);
        assert_eq!(p.nome.as_deref(), Some("Ana"));
        assert!(p.data_nascimento.is_some());
    }
}
