//! Configuração de variáveis de ambiente
//!
//! Este módulo cuida da configuração do ambiente. Tudo tem um valor padrão
//! utilizável em desenvolvimento; variável presente mas ilegível é erro de
//! configuração, nunca pânico.

use std::env;
use std::str::FromStr;

use crate::utils::errors::{AppError, AppResult};

/// Modo de reconciliação da aplicação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Grava no servidor e rebusca a lista autoritativa
    Remote,
    /// Demonstração sem rede: emendas locais com id sintético
    Offline,
}

impl FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remote" => Ok(AppMode::Remote),
            "offline" => Ok(AppMode::Offline),
            other => Err(format!("modo desconhecido: {}", other)),
        }
    }
}

/// Configuração da aplicação
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub patio_id: i64,
    pub mode: AppMode,
    pub session_file: String,
    pub default_lang: String,
    pub http_timeout_secs: u64,
    /// Corredores da grade de vagas (A, B, C...)
    pub grid_corredores: u8,
    /// Posições por corredor (1, 2, 3...)
    pub grid_posicoes: u8,
    pub api_token: Option<String>,
}

impl AppConfig {
    /// Carrega a configuração do ambiente, com padrões de desenvolvimento
    pub fn from_env() -> AppResult<Self> {
        Ok(AppConfig {
            api_base_url: env_or("PATIO_API_BASE_URL", "http://localhost:8080/api"),
            patio_id: parse_env("PATIO_ID", 1)?,
            mode: parse_env("PATIO_MODE", AppMode::Remote)?,
            session_file: env_or("PATIO_SESSION_FILE", ".patio_session.json"),
            default_lang: env_or("PATIO_LANG", "pt"),
            http_timeout_secs: parse_env("PATIO_HTTP_TIMEOUT_SECS", 30)?,
            grid_corredores: parse_env("PATIO_GRID_CORREDORES", 3)?,
            grid_posicoes: parse_env("PATIO_GRID_POSICOES", 4)?,
            api_token: env::var("PATIO_API_TOKEN").ok(),
        })
    }

    pub fn is_offline(&self) -> bool {
        self.mode == AppMode::Offline
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Variável ausente usa o padrão; presente mas ilegível é `AppError::Config`
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{} com valor inválido: {}", key, raw))),
        Err(_) => Ok(default),
    }
}
