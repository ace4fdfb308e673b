//! Cliente HTTP da API do pátio
//!
//! Este módulo contém o contrato do serviço remoto de motos (`MotoApi`), a
//! implementação real por cima de reqwest e o dublê em memória usado nos
//! testes do controlador. Respostas não-2xx viram `ApiError::Status` com a
//! `mensagem` humana do corpo, quando o backend mandar uma.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use reqwest::{Client, Method};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::dto::{MotoPayload, RegisterRequest, RegisterResponse};
use crate::models::Moto;
use crate::utils::errors::ApiError;

/// Contrato do serviço remoto de motos
///
/// O backend também expõe remoção, então ela está aqui; o núcleo de
/// reconciliação nunca a chama (motos não são removidas pela tela).
#[async_trait::async_trait]
pub trait MotoApi: Send + Sync {
    async fn list_motos(&self) -> Result<Vec<Moto>, ApiError>;
    async fn create_moto(&self, payload: &MotoPayload) -> Result<Moto, ApiError>;
    async fn update_moto(&self, id: i64, payload: &MotoPayload) -> Result<Moto, ApiError>;
    async fn delete_moto(&self, id: i64) -> Result<(), ApiError>;
}

/// Corpo de erro do backend: `{ "mensagem": "..." }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    mensagem: Option<String>,
}

/// Cliente HTTP real da API do pátio
pub struct PatioApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PatioApiClient {
    /// Criar novo cliente com o timeout padrão de 30 segundos
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, 30)
    }

    /// Criar novo cliente com timeout vindo da configuração
    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Anexa um token Bearer às chamadas seguintes. O token é opaco para o
    /// cliente: nada de decodificar ou inspecionar validade aqui.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Converte respostas não-2xx em `ApiError::Status`, tentando extrair a
    /// `mensagem` do corpo. Corpo ilegível não é erro novo: a mensagem só
    /// fica ausente.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mensagem = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.mensagem);
        warn!("⚠️ API do pátio respondeu HTTP {}: {:?}", status, mensagem);

        Err(ApiError::Status {
            status: status.as_u16(),
            mensagem,
        })
    }

    /// Cadastro de usuário no servidor. O request já chega validado pela
    /// tela (derive do `validator` em `RegisterRequest`).
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/register", self.base_url);
        info!("📝 Cadastrando usuário {} no servidor", request.email);

        let response = self.request(Method::POST, &url).json(request).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl MotoApi for PatioApiClient {
    async fn list_motos(&self) -> Result<Vec<Moto>, ApiError> {
        let url = format!("{}/motos", self.base_url);
        debug!("📡 GET {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn create_moto(&self, payload: &MotoPayload) -> Result<Moto, ApiError> {
        let url = format!("{}/motos", self.base_url);
        info!("📡 POST {} (placa {})", url, payload.placa);

        let response = self.request(Method::POST, &url).json(payload).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn update_moto(&self, id: i64, payload: &MotoPayload) -> Result<Moto, ApiError> {
        let url = format!("{}/motos/{}", self.base_url, id);
        info!("📡 PUT {} (placa {})", url, payload.placa);

        let response = self.request(Method::PUT, &url).json(payload).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_moto(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/motos/{}", self.base_url, id);
        info!("📡 DELETE {}", url);

        let response = self.request(Method::DELETE, &url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Dublê em memória do serviço remoto
///
/// Guarda as motos num vetor e atribui ids sintéticos na criação, na mesma
/// regra do modo offline (tamanho + 1). `set_failing(true)` faz as chamadas
/// seguintes devolverem HTTP 500 simulado; `set_list_failing(true)` derruba
/// só a listagem, para exercitar a rebusca que falha depois de uma gravação
/// boa. `set_delay_ms` segura cada chamada, para testes de cancelamento.
#[derive(Default)]
pub struct MockMotoApi {
    motos: RwLock<Vec<Moto>>,
    failing: AtomicBool,
    fail_list: AtomicBool,
    delay_ms: AtomicU64,
}

impl MockMotoApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dublê pré-carregado com uma lista inicial
    pub fn with_motos(motos: Vec<Moto>) -> Self {
        MockMotoApi {
            motos: RwLock::new(motos),
            ..Self::default()
        }
    }

    /// Liga ou desliga a falha simulada das próximas chamadas
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Derruba somente `list_motos`, deixando as gravações passarem
    pub fn set_list_failing(&self, failing: bool) {
        self.fail_list.store(failing, Ordering::SeqCst);
    }

    /// Atraso artificial antes de cada chamada responder
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Fotografia da lista interna, para os asserts dos testes
    pub async fn snapshot(&self) -> Vec<Moto> {
        self.motos.read().await.clone()
    }

    async fn gate(&self) -> Result<(), ApiError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                mensagem: Some("Falha simulada".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MotoApi for MockMotoApi {
    async fn list_motos(&self) -> Result<Vec<Moto>, ApiError> {
        self.gate().await?;
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 503,
                mensagem: Some("Listagem indisponível".to_string()),
            });
        }
        Ok(self.motos.read().await.clone())
    }

    async fn create_moto(&self, payload: &MotoPayload) -> Result<Moto, ApiError> {
        self.gate().await?;
        let mut motos = self.motos.write().await;
        let moto = Moto {
            id: motos.len() as i64 + 1,
            modelo: payload.modelo,
            placa: payload.placa.clone(),
            ano: payload.ano,
            quilometragem: payload.quilometragem,
            status: payload.status,
            vaga: None,
            patio_id: payload.patio_id,
        };
        motos.push(moto.clone());
        Ok(moto)
    }

    async fn update_moto(&self, id: i64, payload: &MotoPayload) -> Result<Moto, ApiError> {
        self.gate().await?;
        let mut motos = self.motos.write().await;
        match motos.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                let moto = Moto {
                    id,
                    modelo: payload.modelo,
                    placa: payload.placa.clone(),
                    ano: payload.ano,
                    quilometragem: payload.quilometragem,
                    status: payload.status,
                    vaga: slot.vaga.clone(),
                    patio_id: payload.patio_id,
                };
                *slot = moto.clone();
                Ok(moto)
            }
            None => Err(ApiError::Status {
                status: 404,
                mensagem: Some(format!("Moto {} não encontrada", id)),
            }),
        }
    }

    async fn delete_moto(&self, id: i64) -> Result<(), ApiError> {
        self.gate().await?;
        let mut motos = self.motos.write().await;
        motos.retain(|m| m.id != id);
        Ok(())
    }
}
