//! In-memory backing store.
//!
//! Two id-keyed tables behind read-write locks. This is the "conventional
//! storage layer" the query layer assumes: it holds typed collections of
//! records and lets the executors read consistent snapshots. All query
//! paths take only the read lock, so concurrent searches never contend
//! with each other.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use pessoa_core::Id;
use pessoa_models::{Endereco, Pessoa};

/// Shared in-memory store for pessoas and enderecos.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pessoas: RwLock<BTreeMap<Id, Pessoa>>,
    enderecos: RwLock<BTreeMap<Id, Endereco>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pessoa, returning the previous record if any.
    pub fn insert_pessoa(&self, pessoa: Pessoa) -> Option<Pessoa> {
        self.pessoas.write().insert(pessoa.id, pessoa)
    }

    pub fn get_pessoa(&self, id: Id) -> Option<Pessoa> {
        self.pessoas.read().get(&id).cloned()
    }

    pub fn remove_pessoa(&self, id: Id) -> Option<Pessoa> {
        self.pessoas.write().remove(&id)
    }

    pub fn contains_pessoa(&self, id: Id) -> bool {
        self.pessoas.read().contains_key(&id)
    }

    /// Snapshot of all pessoas in ascending id order.
    pub fn pessoas(&self) -> Vec<Pessoa> {
        self.pessoas.read().values().cloned().collect()
    }

    pub fn insert_endereco(&self, endereco: Endereco) -> Option<Endereco> {
        self.enderecos.write().insert(endereco.id, endereco)
    }

    pub fn get_endereco(&self, id: Id) -> Option<Endereco> {
        self.enderecos.read().get(&id).cloned()
    }

    pub fn remove_endereco(&self, id: Id) -> Option<Endereco> {
        self.enderecos.write().remove(&id)
    }

    pub fn contains_endereco(&self, id: Id) -> bool {
        self.enderecos.read().contains_key(&id)
    }

    /// Snapshot of all enderecos in ascending id order.
    pub fn enderecos(&self) -> Vec<Endereco> {
        self.enderecos.read().values().cloned().collect()
    }

    /// Ids of the enderecos owned by one pessoa. The relation predicate is
    /// evaluated against this set without loading the full records.
    pub fn endereco_ids_of(&self, pessoa_id: Id) -> Vec<Id> {
        self.enderecos
            .read()
            .values()
            .filter(|e| e.pessoa_id == Some(pessoa_id))
            .map(|e| e.id)
            .collect()
    }
}
