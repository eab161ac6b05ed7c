//! The Endereco (address) entity.

use pessoa_core::Id;
use serde::{Deserialize, Serialize};

/// An address record, owned by at most one pessoa via `pessoa_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endereco {
    pub id: Id,
    pub logradouro: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub cidade: Option<String>,
    pub endereco_principal: Option<bool>,
    pub pessoa_id: Option<Id>,
}

impl Endereco {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            logradouro: None,
            cep: None,
            numero: None,
            cidade: None,
            endereco_principal: None,
            pessoa_id: None,
        }
    }

    pub fn logradouro(mut self, logradouro: impl Into<String>) -> Self {
        self.logradouro = Some(logradouro.into());
        self
    }

    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = Some(cep.into());
        self
    }

    pub fn numero(mut self, numero: impl Into<String>) -> Self {
        self.numero = Some(numero.into());
        self
    }

    pub fn cidade(mut self, cidade: impl Into<String>) -> Self {
        self.cidade = Some(cidade.into());
        self
    }

    pub fn endereco_principal(mut self, principal: bool) -> Self {
        self.endereco_principal = Some(principal);
        self
    }

    pub fn pessoa_id(mut self, pessoa_id: Id) -> Self {
        self.pessoa_id = Some(pessoa_id);
        self
    }
}
