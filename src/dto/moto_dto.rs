//! DTOs de moto
//!
//! Payload de gravação enviado à API do pátio. Só os campos que o backend
//! aceita trafegam aqui; a vaga é um dado local da tela e não faz parte do
//! corpo de create/update.

use serde::{Deserialize, Serialize};

use crate::models::{MotoModel, MotoStatus};
use crate::utils::validation::ValidatedMoto;

/// Corpo de POST /motos e PUT /motos/{id}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotoPayload {
    pub placa: String,
    pub modelo: MotoModel,
    pub ano: i32,
    pub quilometragem: i64,
    pub status: MotoStatus,
    #[serde(rename = "patioId")]
    pub patio_id: i64,
}

impl MotoPayload {
    /// Monta o payload a partir de um formulário já validado, anexando o
    /// pátio dono vindo da configuração
    pub fn from_validated(moto: &ValidatedMoto, patio_id: i64) -> Self {
        MotoPayload {
            placa: moto.placa.clone(),
            modelo: moto.modelo,
            ano: moto.ano,
            quilometragem: moto.quilometragem,
            status: moto.status,
            patio_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_usa_nomes_do_backend() {
        let payload = MotoPayload {
            placa: "ABC-1234".to_string(),
            modelo: MotoModel::MottuE,
            ano: 2023,
            quilometragem: 500,
            status: MotoStatus::Alugada,
            patio_id: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["placa"], "ABC-1234");
        assert_eq!(json["modelo"], "MOTTU_E");
        assert_eq!(json["status"], "ALUGADA");
        assert_eq!(json["patioId"], 2);
        assert!(json.get("vaga").is_none());
    }

    #[test]
    fn test_from_validated_anexa_patio() {
        let validado = ValidatedMoto {
            modelo: MotoModel::MottuPop,
            placa: "XYZ-1A23".to_string(),
            ano: 2025,
            quilometragem: 0,
            status: MotoStatus::Disponivel,
            vaga: Some("B3".to_string()),
        };
        let payload = MotoPayload::from_validated(&validado, 9);
        assert_eq!(payload.patio_id, 9);
        assert_eq!(payload.placa, "XYZ-1A23");
    }
}
