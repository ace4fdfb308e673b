//! Regras de validação do cadastro de motos
//!
//! Este módulo contém o validador do formulário e os padrões compilados de
//! placa e vaga. As regras rodam em ordem fixa e a primeira que falhar
//! interrompe a checagem, então o usuário vê um único motivo por vez.

use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;

use crate::models::{MotoForm, MotoModel, MotoStatus};
use crate::utils::errors::ValidationError;

/// Ano mínimo aceito para uma moto da frota
pub const ANO_MINIMO: i32 = 2000;

lazy_static! {
    /// Placas no padrão antigo (ABC-1234) e Mercosul (ABC-1D23)
    static ref PLACA_RE: Regex = Regex::new(r"^[A-Z]{3}-\d[0-9A-Z]\d{2}$").unwrap();

    /// Código de vaga: letra do corredor + dígito da posição
    static ref VAGA_RE: Regex = Regex::new(r"^[A-Z][0-9]$").unwrap();
}

/// Moto aprovada pelo validador, com os campos numéricos já convertidos
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMoto {
    pub modelo: MotoModel,
    pub placa: String,
    pub ano: i32,
    pub quilometragem: i64,
    pub status: MotoStatus,
    pub vaga: Option<String>,
}

/// Validar formato de placa já normalizada
pub fn placa_valida(placa: &str) -> bool {
    PLACA_RE.is_match(placa)
}

/// Validar código de vaga já normalizado
pub fn vaga_valida(vaga: &str) -> bool {
    VAGA_RE.is_match(vaga)
}

/// Validar que um valor numérico não seja negativo
pub fn nao_negativo<T: PartialOrd + Zero>(valor: T) -> bool {
    valor >= T::zero()
}

/// Valida o formulário inteiro, na ordem fixa: campos obrigatórios, placa,
/// vaga, ano, quilometragem. A vaga é o único campo opcional: vazia passa,
/// preenchida precisa do formato `A1`.
pub fn validate_moto(form: &MotoForm) -> Result<ValidatedMoto, ValidationError> {
    let placa = form.placa.trim();
    let ano = form.ano.trim();
    let quilometragem = form.quilometragem.trim();
    let vaga = form.vaga.trim();

    let (modelo, status) = match (form.modelo, form.status) {
        (Some(modelo), Some(status)) => (modelo, status),
        _ => return Err(ValidationError::MissingFields),
    };
    if placa.is_empty() || ano.is_empty() || quilometragem.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !placa_valida(placa) {
        return Err(ValidationError::InvalidPlateFormat);
    }

    if !vaga.is_empty() && !vaga_valida(vaga) {
        return Err(ValidationError::InvalidSlotFormat);
    }

    let ano: i32 = match ano.parse() {
        Ok(n) if n >= ANO_MINIMO => n,
        _ => return Err(ValidationError::InvalidYear),
    };

    let quilometragem: i64 = match quilometragem.parse() {
        Ok(n) if nao_negativo(n) => n,
        _ => return Err(ValidationError::InvalidMileage),
    };

    Ok(ValidatedMoto {
        modelo,
        placa: placa.to_string(),
        ano,
        quilometragem,
        status,
        vaga: if vaga.is_empty() {
            None
        } else {
            Some(vaga.to_string())
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_valido() -> MotoForm {
        MotoForm {
            modelo: Some(MotoModel::MottuSport),
            placa: "ABC-1234".to_string(),
            ano: "2024".to_string(),
            quilometragem: "15000".to_string(),
            status: Some(MotoStatus::Disponivel),
            vaga: "A1".to_string(),
        }
    }

    #[test]
    fn test_formulario_completo_passa() {
        let moto = validate_moto(&form_valido()).unwrap();
        assert_eq!(moto.placa, "ABC-1234");
        assert_eq!(moto.ano, 2024);
        assert_eq!(moto.quilometragem, 15000);
        assert_eq!(moto.vaga.as_deref(), Some("A1"));
    }

    #[test]
    fn test_cadastro_tipico_passa() {
        let form = MotoForm {
            modelo: Some(MotoModel::MottuPop),
            placa: "ABC-1234".to_string(),
            ano: "2015".to_string(),
            quilometragem: "1000".to_string(),
            status: Some(MotoStatus::Disponivel),
            vaga: String::new(),
        };
        let moto = validate_moto(&form).unwrap();
        assert_eq!(moto.modelo, MotoModel::MottuPop);
        assert_eq!(moto.ano, 2015);
        assert_eq!(moto.quilometragem, 1000);
    }

    #[test]
    fn test_placa_mercosul_passa() {
        let mut form = form_valido();
        form.placa = "ABC-1D23".to_string();
        assert!(validate_moto(&form).is_ok());
    }

    #[test]
    fn test_campos_vazios_sao_a_primeira_falha() {
        let form = MotoForm::default();
        assert_eq!(validate_moto(&form), Err(ValidationError::MissingFields));

        let mut form = form_valido();
        form.ano = "   ".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::MissingFields));

        let mut form = form_valido();
        form.modelo = None;
        assert_eq!(validate_moto(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_placa_invalida_vence_ano_invalido() {
        let mut form = form_valido();
        form.placa = "AB-1234".to_string();
        form.ano = "1990".to_string();
        assert_eq!(
            validate_moto(&form),
            Err(ValidationError::InvalidPlateFormat)
        );
    }

    #[test]
    fn test_placa_minuscula_nao_passa_sem_normalizar() {
        let mut form = form_valido();
        form.placa = "abc-1234".to_string();
        assert_eq!(
            validate_moto(&form),
            Err(ValidationError::InvalidPlateFormat)
        );
    }

    #[test]
    fn test_vaga_fora_do_formato() {
        let mut form = form_valido();
        form.vaga = "10".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidSlotFormat));

        form.vaga = "AA".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidSlotFormat));
    }

    #[test]
    fn test_vaga_vazia_passa_como_nao_atribuida() {
        let mut form = form_valido();
        form.vaga = String::new();
        let moto = validate_moto(&form).unwrap();
        assert!(moto.vaga.is_none());
    }

    #[test]
    fn test_limite_do_ano() {
        let mut form = form_valido();
        form.ano = "1999".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidYear));

        form.ano = "2000".to_string();
        assert!(validate_moto(&form).is_ok());

        form.ano = "vinte".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_quilometragem_negativa_ou_nao_numerica() {
        let mut form = form_valido();
        form.quilometragem = "-1".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidMileage));

        form.quilometragem = "muita".to_string();
        assert_eq!(validate_moto(&form), Err(ValidationError::InvalidMileage));

        form.quilometragem = "0".to_string();
        assert!(validate_moto(&form).is_ok());
    }

    #[test]
    fn test_nao_negativo() {
        assert!(nao_negativo(0));
        assert!(nao_negativo(42i64));
        assert!(!nao_negativo(-1));
    }
}
