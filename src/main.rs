use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use patio_motos::client::{MotoApi, PatioApiClient};
use patio_motos::config::{AppConfig, AppMode};
use patio_motos::controllers::{MotoController, ReconcileMode};
use patio_motos::i18n::Lang;
use patio_motos::models::{Moto, MotoModel, MotoStatus};
use patio_motos::session::SessionStore;
use patio_motos::theme::Theme;
use patio_motos::ui::{self, UiState};

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏍️ Pátio de Motos - cliente de rastreio");
    info!("================================================");

    let config = AppConfig::from_env()?;
    info!(
        "⚙️ Modo {:?} | pátio {} | API {}",
        config.mode, config.patio_id, config.api_base_url
    );

    let session = SessionStore::load(&config.session_file);
    let lang = session
        .saved_language()
        .unwrap_or_else(|| Lang::from_code(&config.default_lang));

    let (controller, register_client) = match config.mode {
        AppMode::Remote => {
            let mut client = PatioApiClient::with_timeout(
                config.api_base_url.clone(),
                config.http_timeout_secs,
            )?;
            if let Some(token) = config.api_token.clone() {
                client.set_token(token);
            }
            let client = Arc::new(client);
            let api: Arc<dyn MotoApi> = client.clone();
            (
                MotoController::new(ReconcileMode::RemoteRefetch(api), config.patio_id),
                Some(client),
            )
        }
        AppMode::Offline => {
            info!("📴 Modo offline: lista de demonstração, nada vai à rede");
            let mut controller =
                MotoController::new(ReconcileMode::LocalSplice, config.patio_id);
            controller.seed(demo_motos(config.patio_id));
            (controller, None)
        }
    };

    let ui_state = UiState {
        theme: Theme::light(),
        lang,
        grid_corredores: config.grid_corredores,
        grid_posicoes: config.grid_posicoes,
    };

    ui::run(controller, session, register_client, ui_state).await
}

/// Lista semeada do modo offline, com as vagas A1 e B1 ocupadas
fn demo_motos(patio_id: i64) -> Vec<Moto> {
    vec![
        Moto {
            id: 1,
            modelo: MotoModel::MottuSport,
            placa: "ABC-1234".to_string(),
            ano: 2023,
            quilometragem: 12000,
            status: MotoStatus::Disponivel,
            vaga: Some("A1".to_string()),
            patio_id,
        },
        Moto {
            id: 2,
            modelo: MotoModel::MottuPop,
            placa: "XYZ-9B87".to_string(),
            ano: 2024,
            quilometragem: 3500,
            status: MotoStatus::Alugada,
            vaga: Some("B1".to_string()),
            patio_id,
        },
    ]
}
