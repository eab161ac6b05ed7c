//! Caller-facing record shapes.
//!
//! These are what the excluded transport layer serializes. Ids are
//! caller-supplied (id generation lives outside this core).

use chrono::NaiveDate;
use pessoa_core::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaDto {
    pub id: Id,
    pub nome: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
}

impl PessoaDto {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            nome: None,
            data_nascimento: None,
        }
    }

    /// Reference shape: id only, used when an endereco embeds its owner.
    pub fn id_only(id: Id) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoDto {
    pub id: Id,
    pub logradouro: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub cidade: Option<String>,
    pub endereco_principal: Option<bool>,
    /// Owning pessoa, mapped id-only
    pub pessoa: Option<PessoaDto>,
}

impl EnderecoDto {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            logradouro: None,
            cep: None,
            numero: None,
            cidade: None,
            endereco_principal: None,
            pessoa: None,
        }
    }
}
