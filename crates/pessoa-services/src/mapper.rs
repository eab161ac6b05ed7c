//! Entity ↔ DTO conversion.

use pessoa_models::{Endereco, Pessoa};

use crate::dto::{EnderecoDto, PessoaDto};

pub fn pessoa_to_dto(pessoa: Pessoa) -> PessoaDto {
    PessoaDto {
        id: pessoa.id,
        nome: pessoa.nome,
        data_nascimento: pessoa.data_nascimento,
    }
}

pub fn dto_to_pessoa(dto: PessoaDto) -> Pessoa {
    Pessoa {
        id: dto.id,
        nome: dto.nome,
        data_nascimento: dto.data_nascimento,
    }
}

/// The owning pessoa is mapped id-only; callers wanting the full record
/// fetch it through the pessoa service.
pub fn endereco_to_dto(endereco: Endereco) -> EnderecoDto {
    EnderecoDto {
        id: endereco.id,
        logradouro: endereco.logradouro,
        cep: endereco.cep,
        numero: endereco.numero,
        cidade: endereco.cidade,
        endereco_principal: endereco.endereco_principal,
        pessoa: endereco.pessoa_id.map(PessoaDto::id_only),
    }
}

pub fn dto_to_endereco(dto: EnderecoDto) -> Endereco {
    Endereco {
        id: dto.id,
        logradouro: dto.logradouro,
        cep: dto.cep,
        numero: dto.numero,
        cidade: dto.cidade,
        endereco_principal: dto.endereco_principal,
        pessoa_id: dto.pessoa.map(|p| p.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_pessoa_roundtrip() {
        let pessoa = Pessoa::new(1)
            .nome("Ana")
            .data_nascimento(NaiveDate::from_ymd_opt(1990, 5, 20).unwrap());
        let dto = pessoa_to_dto(pessoa.clone());
        assert_eq!(dto_to_pessoa(dto), pessoa);
    }

    #[test]
    fn test_endereco_maps_owner_id_only() {
        let endereco = Endereco::new(10).cidade("Curitiba").pessoa_id(2);
        let dto = endereco_to_dto(endereco);
        assert_eq!(dto.pessoa, Some(PessoaDto::id_only(2)));
        assert_eq!(dto.cidade.as_deref(), Some("Curitiba"));
    }

    #[test]
    fn test_endereco_without_owner() {
        let dto = endereco_to_dto(Endereco::new(10));
        assert!(dto.pessoa.is_none());
        assert_eq!(dto_to_endereco(dto).pessoa_id, None);
    }
}
