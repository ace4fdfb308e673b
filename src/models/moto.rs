//! Modelo de Moto
//!
//! Este módulo contém o struct Moto e os enums fechados de modelo e status,
//! com os códigos exatos que trafegam na API do pátio. O formulário da tela
//! (MotoForm) também mora aqui: campos numéricos ficam como texto até a
//! validação converter.

use serde::{Deserialize, Serialize};

/// Modelo da moto - mapeia aos códigos MOTTU_* da API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MotoModel {
    #[serde(rename = "MOTTU_SPORT")]
    MottuSport,
    #[serde(rename = "MOTTU_E")]
    MottuE,
    #[serde(rename = "MOTTU_POP")]
    MottuPop,
}

impl MotoModel {
    pub const ALL: [MotoModel; 3] = [MotoModel::MottuSport, MotoModel::MottuE, MotoModel::MottuPop];

    /// Código usado no payload da API
    pub fn code(&self) -> &'static str {
        match self {
            MotoModel::MottuSport => "MOTTU_SPORT",
            MotoModel::MottuE => "MOTTU_E",
            MotoModel::MottuPop => "MOTTU_POP",
        }
    }

    pub fn from_code(code: &str) -> Option<MotoModel> {
        match code {
            "MOTTU_SPORT" => Some(MotoModel::MottuSport),
            "MOTTU_E" => Some(MotoModel::MottuE),
            "MOTTU_POP" => Some(MotoModel::MottuPop),
            _ => None,
        }
    }

    /// Nome de exibição, igual nos dois idiomas
    pub fn label(&self) -> &'static str {
        match self {
            MotoModel::MottuSport => "Mottu Sport",
            MotoModel::MottuE => "Mottu E",
            MotoModel::MottuPop => "Mottu Pop",
        }
    }
}

/// Status da moto - mapeia aos códigos DISPONIVEL/ALUGADA/MANUTENCAO
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MotoStatus {
    #[serde(rename = "DISPONIVEL")]
    Disponivel,
    #[serde(rename = "ALUGADA")]
    Alugada,
    #[serde(rename = "MANUTENCAO")]
    Manutencao,
}

impl MotoStatus {
    pub const ALL: [MotoStatus; 3] = [
        MotoStatus::Disponivel,
        MotoStatus::Alugada,
        MotoStatus::Manutencao,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MotoStatus::Disponivel => "DISPONIVEL",
            MotoStatus::Alugada => "ALUGADA",
            MotoStatus::Manutencao => "MANUTENCAO",
        }
    }

    pub fn from_code(code: &str) -> Option<MotoStatus> {
        match code {
            "DISPONIVEL" => Some(MotoStatus::Disponivel),
            "ALUGADA" => Some(MotoStatus::Alugada),
            "MANUTENCAO" => Some(MotoStatus::Manutencao),
            _ => None,
        }
    }
}

/// Moto cadastrada no pátio - mapeia exatamente ao JSON da API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Moto {
    pub id: i64,
    pub modelo: MotoModel,
    pub placa: String,
    pub ano: i32,
    pub quilometragem: i64,
    pub status: MotoStatus,
    /// Vaga ocupada no pátio; `None` quando não atribuída
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaga: Option<String>,
    #[serde(rename = "patioId")]
    pub patio_id: i64,
}

/// Estado do formulário do diálogo de criar/editar
///
/// Um campo por controle da tela. `modelo` e `status` são seleções fechadas;
/// os demais chegam como texto digitado, já passado pelos normalizadores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotoForm {
    pub modelo: Option<MotoModel>,
    pub placa: String,
    pub ano: String,
    pub quilometragem: String,
    pub status: Option<MotoStatus>,
    pub vaga: String,
}

impl MotoForm {
    /// Pré-carrega o formulário a partir de um registro existente (modo edição)
    pub fn from_moto(moto: &Moto) -> Self {
        MotoForm {
            modelo: Some(moto.modelo),
            placa: moto.placa.clone(),
            ano: moto.ano.to_string(),
            quilometragem: moto.quilometragem.to_string(),
            status: Some(moto.status),
            vaga: moto.vaga.clone().unwrap_or_default(),
        }
    }

    /// Volta todos os campos ao estado vazio
    pub fn clear(&mut self) {
        *self = MotoForm::default();
    }
}
