//! Tela de terminal do pátio
//!
//! Menu interativo por cima do controlador: listar, cadastrar e editar
//! motos, ver a grade de vagas, perfil e sessão. Nenhuma regra de negócio
//! mora aqui; a tela só encaminha o que o usuário digitou e pinta o que o
//! núcleo devolver.

use std::io::{self, Write};
use std::sync::Arc;

use colored::*;

use crate::client::PatioApiClient;
use crate::controllers::MotoController;
use crate::dto::RegisterRequest;
use crate::i18n::{status_label, t, validation_error_key, Lang, TextKey};
use crate::models::{vagas_overview, MotoModel, MotoStatus, StoredUser, VagaStatus};
use crate::session::SessionStore;
use crate::theme::Theme;
use crate::utils::errors::AppError;
use validator::Validate;

/// Estado visual da tela: tema e idioma ativos mais a grade configurada
pub struct UiState {
    pub theme: Theme,
    pub lang: Lang,
    pub grid_corredores: u8,
    pub grid_posicoes: u8,
}

/// Laço principal da aplicação. Só retorna quando o usuário sair.
pub async fn run(
    mut controller: MotoController,
    mut session: SessionStore,
    register_client: Option<Arc<PatioApiClient>>,
    mut ui: UiState,
) -> anyhow::Result<()> {
    banner(&ui);

    if session.current_user().is_none() && !autenticar(&mut session, register_client.as_deref(), &ui).await? {
        return Ok(());
    }
    if let Some(user) = session.current_user() {
        println!(
            "{}",
            format!("👋 {} ({})", user.nome, user.email).color(ui.theme.secondary)
        );
    }

    if let Err(err) = controller.initial_load().await {
        mostra_erro(&err, &ui);
    }

    loop {
        println!();
        println!("{}", t(ui.lang, TextKey::Welcome).color(ui.theme.primary).bold());
        println!("{}", "==============================".color(ui.theme.primary));
        println!("1. 🏍️  Motos");
        println!("2. ➕ {}", t(ui.lang, TextKey::AddNewBike));
        println!("3. ✏️  {}", t(ui.lang, TextKey::EditMoto));
        println!("4. 🅿️  Vagas");
        println!("5. 👤 {}", t(ui.lang, TextKey::Profile));
        println!("6. 🌐 {}", t(ui.lang, TextKey::ChangeLanguage));
        println!("7. {} Tema", if ui.theme.is_dark { "☀️" } else { "🌙" });
        println!("8. 🔄 Recarregar");
        println!("9. 🚪 {}", t(ui.lang, TextKey::Logout));

        match prompt("(1-9)", ui.theme.secondary)?.as_str() {
            "1" => lista_motos(&controller, &ui),
            "2" => {
                controller.open_create();
                dialogo_moto(&mut controller, &ui).await?;
            }
            "3" => {
                lista_motos(&controller, &ui);
                let raw = prompt("Id da moto", ui.theme.secondary)?;
                match raw.parse::<i64>() {
                    Ok(id) if controller.begin_edit(id) => {
                        dialogo_moto(&mut controller, &ui).await?;
                    }
                    _ => println!("{}", "❌ Moto não encontrada.".color(ui.theme.danger)),
                }
            }
            "4" => lista_vagas(&controller, &ui),
            "5" => {
                if !perfil(&mut session, &mut ui)? {
                    // saiu da conta: volta para a autenticação
                    if !autenticar(&mut session, register_client.as_deref(), &ui).await? {
                        return Ok(());
                    }
                }
            }
            "6" => {
                ui.lang = ui.lang.toggled();
                session.set_language(ui.lang);
            }
            "7" => ui.theme = ui.theme.toggled(),
            "8" => {
                if let Err(err) = controller.refresh().await {
                    mostra_erro(&err, &ui);
                }
            }
            "9" => {
                println!("{}", "👋 Até logo!".color(ui.theme.primary));
                return Ok(());
            }
            _ => println!("{}", "❌ Opção inválida.".color(ui.theme.danger)),
        }
    }
}

fn banner(ui: &UiState) {
    println!("{}", "🏍️  Pátio de Motos - Mottu".color(ui.theme.primary).bold());
    println!("{}", "==============================".color(ui.theme.primary));
}

/// Login/cadastro antes do menu. `false` quando o usuário desistir.
async fn autenticar(
    session: &mut SessionStore,
    register_client: Option<&PatioApiClient>,
    ui: &UiState,
) -> anyhow::Result<bool> {
    loop {
        println!();
        println!("{}", "Login".color(ui.theme.text).bold());
        println!("1. 🔑 Entrar");
        println!("2. 📝 Cadastro");
        println!("3. 🚪 {}", t(ui.lang, TextKey::Logout));

        match prompt("(1-3)", ui.theme.secondary)?.as_str() {
            "1" => {
                let email = prompt(t(ui.lang, TextKey::Email), ui.theme.secondary)?;
                let senha = prompt("Senha", ui.theme.secondary)?;
                match session.login(&email, &senha) {
                    Ok(user) => {
                        println!("{}", format!("✅ Bem-vindo, {}!", user.nome).color(ui.theme.success));
                        return Ok(true);
                    }
                    Err(err) => println!("{}", format!("❌ {}", err).color(ui.theme.danger)),
                }
            }
            "2" => cadastrar(session, register_client, ui).await?,
            "3" => return Ok(false),
            _ => println!("{}", "❌ Opção inválida.".color(ui.theme.danger)),
        }
    }
}

/// Cadastro: remoto quando houver cliente, só local no modo offline. Em
/// qualquer caso o usuário entra na lista local para o login em seguida.
async fn cadastrar(
    session: &mut SessionStore,
    register_client: Option<&PatioApiClient>,
    ui: &UiState,
) -> anyhow::Result<()> {
    let nome = prompt(t(ui.lang, TextKey::Name), ui.theme.secondary)?;
    let email = prompt(t(ui.lang, TextKey::Email), ui.theme.secondary)?;
    let senha = prompt("Senha", ui.theme.secondary)?;

    if nome.is_empty() || email.is_empty() || senha.is_empty() {
        println!("{}", format!("❌ {}", t(ui.lang, TextKey::ErrorFillAll)).color(ui.theme.danger));
        return Ok(());
    }

    let request = RegisterRequest::new(&nome, &email, &senha);
    if let Err(err) = request.validate() {
        println!("{}", format!("❌ Cadastro inválido: {}", err).color(ui.theme.danger));
        return Ok(());
    }

    if let Some(client) = register_client {
        match client.register(&request).await {
            Ok(_) => {}
            Err(err) => {
                let msg = err
                    .mensagem()
                    .unwrap_or("Erro ao registrar usuário")
                    .to_string();
                println!("{}", format!("❌ {}", msg).color(ui.theme.danger));
                return Ok(());
            }
        }
    }

    if let Err(err) = session.remember_user(StoredUser::new(&nome, &email, &senha)) {
        println!("{}", format!("❌ {}", err).color(ui.theme.danger));
        return Ok(());
    }
    println!("{}", "✅ Cadastro realizado!".color(ui.theme.success));
    Ok(())
}

fn lista_motos(controller: &MotoController, ui: &UiState) {
    println!();
    if controller.motos().is_empty() {
        println!("{}", "Nenhuma moto cadastrada.".color(ui.theme.secondary));
        return;
    }
    for moto in controller.motos() {
        let status_cor = match moto.status {
            MotoStatus::Disponivel => ui.theme.success,
            MotoStatus::Alugada => ui.theme.primary,
            MotoStatus::Manutencao => ui.theme.danger,
        };
        let vaga = moto
            .vaga
            .as_deref()
            .unwrap_or(t(ui.lang, TextKey::NotAssigned));
        println!(
            "#{} {} | {} | {}: {} | {}: {} | {} | {}: {}",
            moto.id,
            moto.placa.color(ui.theme.text).bold(),
            moto.modelo.label(),
            t(ui.lang, TextKey::YearLabel),
            moto.ano,
            t(ui.lang, TextKey::KmLabel),
            moto.quilometragem,
            status_label(ui.lang, moto.status).color(status_cor),
            t(ui.lang, TextKey::SlotLabel),
            vaga
        );
    }
}

fn lista_vagas(controller: &MotoController, ui: &UiState) {
    println!();
    println!("{}", "Vagas".color(ui.theme.text).bold());
    let grade = vagas_overview(
        controller.motos(),
        ui.grid_corredores,
        ui.grid_posicoes,
    );
    for vaga in grade {
        match vaga.status {
            VagaStatus::Livre => {
                println!(
                    "{}: {} {}",
                    t(ui.lang, TextKey::SlotLabel),
                    vaga.codigo,
                    "Livre".color(ui.theme.success)
                );
            }
            VagaStatus::Ocupada => {
                println!(
                    "{}: {} {} 🏍️ {}",
                    t(ui.lang, TextKey::SlotLabel),
                    vaga.codigo,
                    "Ocupada".color(ui.theme.danger),
                    vaga.placa.as_deref().unwrap_or("")
                );
            }
        }
    }
}

/// Tela de perfil. `false` indica que o usuário saiu da conta.
fn perfil(session: &mut SessionStore, ui: &mut UiState) -> anyhow::Result<bool> {
    println!();
    println!("{}", t(ui.lang, TextKey::Profile).color(ui.theme.text).bold());
    match session.current_user() {
        Some(user) => {
            println!("{}: {}", t(ui.lang, TextKey::Name), user.nome);
            println!("{}: {}", t(ui.lang, TextKey::Email), user.email);
            if let Some(desde) = session.logged_in_since() {
                println!("🕒 {}", desde.format("%d/%m/%Y %H:%M"));
            }
        }
        None => println!("{}", t(ui.lang, TextKey::Loading).color(ui.theme.secondary)),
    }

    println!("1. 🌐 {}", t(ui.lang, TextKey::ChangeLanguage));
    println!("2. 🚪 {}", t(ui.lang, TextKey::Logout));
    println!("3. ⬅️  {}", t(ui.lang, TextKey::Cancel));

    match prompt("(1-3)", ui.theme.secondary)?.as_str() {
        "1" => {
            ui.lang = ui.lang.toggled();
            session.set_language(ui.lang);
            Ok(true)
        }
        "2" => {
            println!("{}", t(ui.lang, TextKey::LogoutConfirm).color(ui.theme.text));
            let resposta = prompt("(s/n)", ui.theme.secondary)?;
            if resposta.eq_ignore_ascii_case("s") {
                session.logout();
                return Ok(false);
            }
            Ok(true)
        }
        _ => Ok(true),
    }
}

/// Diálogo de criar/editar por cima do formulário do controlador. Fica
/// aberto até salvar com sucesso ou o usuário cancelar; falha remota mantém
/// tudo preenchido para revisar e tentar de novo.
async fn dialogo_moto(controller: &mut MotoController, ui: &UiState) -> anyhow::Result<()> {
    let titulo = if controller.is_editing() {
        t(ui.lang, TextKey::EditMoto)
    } else {
        t(ui.lang, TextKey::AddMoto)
    };
    println!();
    println!("{}", titulo.color(ui.theme.primary).bold());

    preenche_campos(controller, ui)?;

    loop {
        println!();
        println!("1. 💾 {}", t(ui.lang, TextKey::Save));
        println!("2. ✏️  Revisar campos");
        println!("3. ❌ {}", t(ui.lang, TextKey::CancelButton));

        match prompt("(1-3)", ui.theme.secondary)?.as_str() {
            "1" => match controller.submit().await {
                Ok(()) => {
                    println!("{}", "✅ Moto salva!".color(ui.theme.success));
                    return Ok(());
                }
                Err(err) => mostra_erro(&err, ui),
            },
            "2" => preenche_campos(controller, ui)?,
            "3" => {
                controller.cancel();
                return Ok(());
            }
            _ => println!("{}", "❌ Opção inválida.".color(ui.theme.danger)),
        }
    }
}

/// Um prompt por campo do formulário. Entrada vazia mantém o valor atual,
/// então na edição basta dar enter no que não muda.
fn preenche_campos(controller: &mut MotoController, ui: &UiState) -> anyhow::Result<()> {
    // modelo
    println!("{}:", t(ui.lang, TextKey::ModelLabel));
    for (i, modelo) in MotoModel::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, modelo.label());
    }
    let atual = controller
        .form()
        .modelo
        .map(|m| m.label())
        .unwrap_or("-");
    let raw = prompt(&format!("(1-3, atual: {})", atual), ui.theme.secondary)?;
    if let Ok(n) = raw.parse::<usize>() {
        if let Some(modelo) = MotoModel::ALL.get(n.wrapping_sub(1)) {
            controller.set_modelo(*modelo);
        }
    }

    // placa
    let raw = prompt(
        &format!(
            "{} (atual: {})",
            t(ui.lang, TextKey::PlatePlaceholder),
            valor_ou_traco(&controller.form().placa)
        ),
        ui.theme.secondary,
    )?;
    if !raw.is_empty() {
        controller.set_placa(&raw);
    }

    // ano
    let raw = prompt(
        &format!(
            "{} (atual: {})",
            t(ui.lang, TextKey::YearPlaceholder),
            valor_ou_traco(&controller.form().ano)
        ),
        ui.theme.secondary,
    )?;
    if !raw.is_empty() {
        controller.set_ano(&raw);
    }

    // quilometragem
    let raw = prompt(
        &format!(
            "{} (atual: {})",
            t(ui.lang, TextKey::KmPlaceholder),
            valor_ou_traco(&controller.form().quilometragem)
        ),
        ui.theme.secondary,
    )?;
    if !raw.is_empty() {
        controller.set_quilometragem(&raw);
    }

    // status
    println!("{}:", t(ui.lang, TextKey::Status));
    for (i, status) in MotoStatus::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, status_label(ui.lang, *status));
    }
    let atual = controller
        .form()
        .status
        .map(|s| status_label(ui.lang, s))
        .unwrap_or("-");
    let raw = prompt(&format!("(1-3, atual: {})", atual), ui.theme.secondary)?;
    if let Ok(n) = raw.parse::<usize>() {
        if let Some(status) = MotoStatus::ALL.get(n.wrapping_sub(1)) {
            controller.set_status(*status);
        }
    }

    // vaga
    let raw = prompt(
        &format!(
            "{} (A1, atual: {})",
            t(ui.lang, TextKey::SlotLabel),
            valor_ou_traco(&controller.form().vaga)
        ),
        ui.theme.secondary,
    )?;
    if !raw.is_empty() {
        controller.set_vaga(&raw);
    }

    Ok(())
}

fn valor_ou_traco(valor: &str) -> &str {
    if valor.is_empty() {
        "-"
    } else {
        valor
    }
}

/// Erro do núcleo vira texto traduzido na cor de perigo
fn mostra_erro(err: &AppError, ui: &UiState) {
    let texto = match err {
        AppError::Validation(motivo) => t(ui.lang, validation_error_key(*motivo)).to_string(),
        AppError::SaveFailed { mensagem } => mensagem
            .clone()
            .unwrap_or_else(|| t(ui.lang, TextKey::ErrorSave).to_string()),
        AppError::LoadFailed { mensagem } => mensagem
            .clone()
            .unwrap_or_else(|| t(ui.lang, TextKey::ErrorLoad).to_string()),
        outro => outro.to_string(),
    };
    println!("{}", format!("❌ {}", texto).color(ui.theme.danger));
}

fn prompt(label: &str, cor: Color) -> anyhow::Result<String> {
    print!("{} ", format!("{}:", label).color(cor));
    io::stdout().flush()?;

    let mut line = String::new();
    let lidos = io::stdin().read_line(&mut line)?;
    if lidos == 0 {
        // stdin fechado: não há como continuar o menu
        anyhow::bail!("entrada padrão encerrada");
    }
    Ok(line.trim().to_string())
}
