//! Sistema de manejo de erros
//!
//! Este módulo define todos os tipos de erro da aplicação. Nenhum erro
//! aqui é fatal: falhas de validação e de rede são reportadas ao usuário
//! e recuperadas na própria tela, com o formulário preservado.

use thiserror::Error;

/// Motivos de rejeição do validador de motos.
///
/// As regras são checadas em ordem fixa e a primeira falha interrompe a
/// validação (ver `utils::validation::validate_moto`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required fields missing")]
    MissingFields,

    #[error("plate must match ABC-1234 or ABC-1D23")]
    InvalidPlateFormat,

    #[error("slot code must be one letter followed by one digit")]
    InvalidSlotFormat,

    #[error("year must be a number >= 2000")]
    InvalidYear,

    #[error("mileage must be a non-negative number")]
    InvalidMileage,
}

/// Falhas do cliente HTTP do pátio.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected request (HTTP {status})")]
    Status {
        status: u16,
        /// Mensagem humana opcional vinda do corpo `{ "mensagem": ... }`.
        mensagem: Option<String>,
    },
}

impl ApiError {
    /// Mensagem humana do servidor, quando houver.
    pub fn mensagem(&self) -> Option<&str> {
        match self {
            ApiError::Status { mensagem, .. } => mensagem.as_deref(),
            ApiError::Http(_) => None,
        }
    }
}

/// Erros de nível de aplicação do núcleo de reconciliação.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// O servidor rejeitou a gravação ou a rede falhou. O formulário é
    /// mantido para o usuário tentar de novo.
    #[error("could not save moto")]
    SaveFailed { mensagem: Option<String> },

    /// A lista inicial (ou um refresh) não pôde ser carregada.
    #[error("could not load motos")]
    LoadFailed { mensagem: Option<String> },

    /// Um submit chegou enquanto outro ainda estava em voo; o segundo é
    /// rejeitado, nunca intercalado.
    #[error("another submission is already in flight")]
    SubmissionInProgress,

    /// `begin_edit` com id que não existe mais na lista. O controlador
    /// engole este erro e nada muda na tela.
    #[error("moto {0} not found in local store")]
    RecordNotFound(i64),

    #[error("session storage error: {0}")]
    Session(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Converter uma falha do cliente remoto na condição genérica de
    /// gravação falhada, preservando a `mensagem` do servidor quando
    /// existir (erros de rede puros ficam com a mensagem genérica).
    pub fn save_failed(err: ApiError) -> Self {
        AppError::SaveFailed {
            mensagem: err.mensagem().map(|m| m.to_string()),
        }
    }

    /// Idem, para a carga da lista.
    pub fn load_failed(err: ApiError) -> Self {
        AppError::LoadFailed {
            mensagem: err.mensagem().map(|m| m.to_string()),
        }
    }
}

/// Resultado tipado para operações que podem falhar.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_failed_preserva_mensagem_do_servidor() {
        let err = ApiError::Status {
            status: 400,
            mensagem: Some("Placa já cadastrada".to_string()),
        };
        match AppError::save_failed(err) {
            AppError::SaveFailed { mensagem } => {
                assert_eq!(mensagem.as_deref(), Some("Placa já cadastrada"));
            }
            other => panic!("esperava SaveFailed, veio {:?}", other),
        }
    }

    #[test]
    fn test_status_sem_mensagem() {
        let err = ApiError::Status {
            status: 500,
            mensagem: None,
        };
        assert!(err.mensagem().is_none());
        match AppError::save_failed(err) {
            AppError::SaveFailed { mensagem } => assert!(mensagem.is_none()),
            other => panic!("esperava SaveFailed, veio {:?}", other),
        }
    }
}
