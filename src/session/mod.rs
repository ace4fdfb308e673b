//! Sessão local persistida em arquivo
//!
//! Equivalente ao armazenamento do aparelho: a lista de usuários
//! registrados, o usuário logado e o idioma escolhido, num único JSON no
//! caminho da configuração. Arquivo ausente ou corrompido não é fatal: a
//! sessão começa vazia e o aviso vai para o log.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::Lang;
use crate::models::StoredUser;
use crate::utils::errors::{AppError, AppResult};

/// Falhas do login local. As mensagens são as mesmas que a tela mostra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Nenhum usuário cadastrado!")]
    NoUsers,
    #[error("Email ou senha incorretos!")]
    InvalidCredentials,
}

/// Conteúdo do arquivo de sessão
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub users: Vec<StoredUser>,
    #[serde(default, rename = "loggedUser")]
    pub logged_user: Option<StoredUser>,
    /// Código curto do idioma escolhido ("pt" ou "es")
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "logadoEm")]
    pub logado_em: Option<DateTime<Utc>>,
}

/// Sessão carregada em memória, espelhada no arquivo a cada mudança
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Carrega a sessão do arquivo. Ausente começa vazia; ilegível também,
    /// com aviso no log.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => {
                    debug!("📂 Sessão carregada de {}", path.display());
                    data
                }
                Err(err) => {
                    warn!("⚠️ Sessão corrompida em {}: {}", path.display(), err);
                    SessionData::default()
                }
            },
            Err(_) => {
                debug!("📂 Sem sessão anterior em {}", path.display());
                SessionData::default()
            }
        };
        SessionStore { path, data }
    }

    /// Grava a sessão inteira no arquivo
    pub fn persist(&self) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&self.data)
            .map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| AppError::Session(e.to_string()))?;
        debug!("💾 Sessão gravada em {}", self.path.display());
        Ok(())
    }

    /// Login local: procura email e senha exatos na lista de usuários.
    /// Sucesso marca o usuário como logado e grava a sessão.
    pub fn login(&mut self, email: &str, senha: &str) -> Result<StoredUser, LoginError> {
        if self.data.users.is_empty() {
            return Err(LoginError::NoUsers);
        }

        let user = self
            .data
            .users
            .iter()
            .find(|u| u.email == email && u.senha == senha)
            .cloned()
            .ok_or(LoginError::InvalidCredentials)?;

        self.data.logged_user = Some(user.clone());
        self.data.logado_em = Some(Utc::now());
        if let Err(err) = self.persist() {
            warn!("⚠️ Login ok mas sessão não gravada: {}", err);
        }
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.data.logged_user = None;
        self.data.logado_em = None;
        if let Err(err) = self.persist() {
            warn!("⚠️ Logout sem gravação da sessão: {}", err);
        }
    }

    /// Acrescenta um usuário recém-cadastrado à lista local, para o login
    /// funcionar em seguida
    pub fn remember_user(&mut self, user: StoredUser) -> AppResult<()> {
        self.data.users.retain(|u| u.email != user.email);
        self.data.users.push(user);
        self.persist()
    }

    pub fn current_user(&self) -> Option<&StoredUser> {
        self.data.logged_user.as_ref()
    }

    pub fn logged_in_since(&self) -> Option<DateTime<Utc>> {
        self.data.logado_em
    }

    pub fn users(&self) -> &[StoredUser] {
        &self.data.users
    }

    /// Idioma salvo, ou português quando nunca escolhido
    pub fn language(&self) -> Lang {
        self.saved_language().unwrap_or(Lang::Pt)
    }

    /// Idioma salvo, se o usuário já escolheu algum
    pub fn saved_language(&self) -> Option<Lang> {
        self.data.language.as_deref().map(Lang::from_code)
    }

    pub fn set_language(&mut self, lang: Lang) {
        self.data.language = Some(lang.code().to_string());
        if let Err(err) = self.persist() {
            warn!("⚠️ Idioma trocado mas sessão não gravada: {}", err);
        }
    }
}
