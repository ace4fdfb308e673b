//! Modelo de Vaga
//!
//! A grade de vagas é uma projeção pura sobre a lista de motos: uma vaga
//! está ocupada quando alguma moto cadastrada aponta para o código dela.
//! Nada aqui tem armazenamento próprio.

use crate::models::Moto;

/// Situação de uma vaga na grade do pátio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VagaStatus {
    Livre,
    Ocupada,
}

/// Uma célula da grade, com a placa da moto estacionada quando houver
#[derive(Debug, Clone, PartialEq)]
pub struct Vaga {
    pub codigo: String,
    pub status: VagaStatus,
    pub placa: Option<String>,
}

/// Monta a grade de vagas cruzando corredores (A, B, ...) e posições (1..)
/// com as motos cadastradas. A primeira moto que apontar para o código
/// ocupa a vaga.
pub fn vagas_overview(motos: &[Moto], corredores: u8, posicoes: u8) -> Vec<Vaga> {
    let mut grade = Vec::with_capacity(corredores as usize * posicoes as usize);
    for corredor in 0..corredores {
        let letra = (b'A' + corredor) as char;
        for posicao in 1..=posicoes {
            let codigo = format!("{}{}", letra, posicao);
            let ocupante = motos
                .iter()
                .find(|m| m.vaga.as_deref() == Some(codigo.as_str()));
            grade.push(Vaga {
                status: if ocupante.is_some() {
                    VagaStatus::Ocupada
                } else {
                    VagaStatus::Livre
                },
                placa: ocupante.map(|m| m.placa.clone()),
                codigo,
            });
        }
    }
    grade
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MotoModel, MotoStatus};

    fn moto_na_vaga(id: i64, placa: &str, vaga: Option<&str>) -> Moto {
        Moto {
            id,
            modelo: MotoModel::MottuPop,
            placa: placa.to_string(),
            ano: 2023,
            quilometragem: 100,
            status: MotoStatus::Disponivel,
            vaga: vaga.map(|v| v.to_string()),
            patio_id: 1,
        }
    }

    #[test]
    fn test_grade_vazia_fica_toda_livre() {
        let grade = vagas_overview(&[], 2, 2);
        assert_eq!(grade.len(), 4);
        assert!(grade.iter().all(|v| v.status == VagaStatus::Livre));
        let codigos: Vec<&str> = grade.iter().map(|v| v.codigo.as_str()).collect();
        assert_eq!(codigos, vec!["A1", "A2", "B1", "B2"]);
    }

    #[test]
    fn test_moto_ocupa_a_vaga_apontada() {
        let motos = vec![
            moto_na_vaga(1, "ABC-1234", Some("A1")),
            moto_na_vaga(2, "DEF-5678", None),
            moto_na_vaga(3, "GHI-9012", Some("B1")),
        ];
        let grade = vagas_overview(&motos, 2, 2);
        let a1 = &grade[0];
        assert_eq!(a1.codigo, "A1");
        assert_eq!(a1.status, VagaStatus::Ocupada);
        assert_eq!(a1.placa.as_deref(), Some("ABC-1234"));

        let a2 = &grade[1];
        assert_eq!(a2.status, VagaStatus::Livre);
        assert!(a2.placa.is_none());

        let b1 = &grade[2];
        assert_eq!(b1.status, VagaStatus::Ocupada);
        assert_eq!(b1.placa.as_deref(), Some("GHI-9012"));
    }

    #[test]
    fn test_vaga_fora_da_grade_nao_aparece() {
        let motos = vec![moto_na_vaga(1, "ZZZ-0001", Some("Z9"))];
        let grade = vagas_overview(&motos, 2, 2);
        assert!(grade.iter().all(|v| v.status == VagaStatus::Livre));
    }
}
