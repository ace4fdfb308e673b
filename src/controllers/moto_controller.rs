//! Controlador de reconciliação de motos
//!
//! Este módulo contém o dono do estado da tela de motos: a lista local, o
//! formulário do diálogo, o id em edição e a máquina de estados do submit.
//! É o único ponto que decide entre criar e atualizar, e o único que mescla
//! o resultado remoto de volta na lista. Toda mutação pós-await acontece em
//! um bloco síncrono, então nenhum observador vê a lista pela metade.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::MotoApi;
use crate::dto::MotoPayload;
use crate::models::{Moto, MotoForm, MotoModel, MotoStatus};
use crate::store::MotoStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::normalize::{normalize_placa, normalize_vaga};
use crate::utils::validation::{validate_moto, ValidatedMoto};

/// Estratégia de mescla depois de uma gravação
pub enum ReconcileMode {
    /// Regrava e busca a lista inteira de novo no servidor. A lista local é
    /// substituída pelo retorno autoritativo.
    RemoteRefetch(Arc<dyn MotoApi>),
    /// Modo offline/demonstração: nenhuma chamada remota; o registro é
    /// emendado na lista local, com id sintético na criação.
    LocalSplice,
}

/// Máquina de estados do submit. `Submitting` cobre o trecho entre o início
/// da gravação remota e a mescla; um segundo submit nesse intervalo é
/// rejeitado, nunca intercalado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
}

/// Resultado da gravação, pronto para mesclar na lista
enum MergeOutcome {
    /// Lista autoritativa recém-buscada no servidor
    Refetched(Vec<Moto>),
    /// Um único registro para emendar (substituir ou acrescentar)
    Spliced(Moto),
}

pub struct MotoController {
    mode: ReconcileMode,
    patio_id: i64,
    store: MotoStore,
    form: MotoForm,
    edit_id: Option<i64>,
    dialog_open: bool,
    state: SubmitState,
}

impl MotoController {
    pub fn new(mode: ReconcileMode, patio_id: i64) -> Self {
        MotoController {
            mode,
            patio_id,
            store: MotoStore::new(),
            form: MotoForm::default(),
            edit_id: None,
            dialog_open: false,
            state: SubmitState::Idle,
        }
    }

    /// Carga inicial da lista. No modo remoto busca tudo do servidor; no
    /// modo offline a lista começa como estiver (vazia ou semeada).
    pub async fn initial_load(&mut self) -> AppResult<()> {
        self.refresh().await
    }

    /// Rebusca a lista inteira e substitui a local. No-op no modo offline.
    pub async fn refresh(&mut self) -> AppResult<()> {
        match &self.mode {
            ReconcileMode::RemoteRefetch(api) => {
                info!("📥 Carregando lista de motos do servidor");
                let motos = api.list_motos().await.map_err(AppError::load_failed)?;
                self.store.replace_all(motos);
                Ok(())
            }
            ReconcileMode::LocalSplice => Ok(()),
        }
    }

    /// Pré-carrega a lista local, para o modo demonstração
    pub fn seed(&mut self, motos: Vec<Moto>) {
        self.store.replace_all(motos);
    }

    /// Abre o diálogo em modo criação, com o formulário limpo
    pub fn open_create(&mut self) {
        self.form.clear();
        self.edit_id = None;
        self.dialog_open = true;
        self.state = SubmitState::Idle;
    }

    /// Abre o diálogo em modo edição, copiando o registro para o formulário.
    /// Id que não está mais na lista é ignorado de propósito: nada muda na
    /// tela e o retorno é `false`.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.find_record(id) {
            Ok(moto) => {
                self.form = MotoForm::from_moto(&moto);
                self.edit_id = Some(id);
                self.dialog_open = true;
                self.state = SubmitState::Idle;
                true
            }
            Err(err) => {
                debug!("🔎 Edição ignorada: {}", err);
                false
            }
        }
    }

    /// Fecha o diálogo sem gravar. O conteúdo do formulário fica como está;
    /// `open_create` limpa na próxima abertura.
    pub fn cancel(&mut self) {
        self.dialog_open = false;
        self.edit_id = None;
        self.state = SubmitState::Idle;
    }

    /// Valida o formulário e grava, criando ou atualizando conforme
    /// `edit_id`. Com sucesso a lista é mesclada, o diálogo fecha e o
    /// formulário esvazia. Com falha (validação ou remota) formulário e
    /// diálogo ficam intactos para o usuário corrigir e tentar de novo.
    ///
    /// Abandonar o future no meio descarta o resultado sem tocar na lista;
    /// o próximo `open_create`/`begin_edit`/`cancel` rearma a máquina de
    /// estados.
    pub async fn submit(&mut self) -> AppResult<()> {
        if self.state == SubmitState::Submitting {
            warn!("⛔ Submit rejeitado: outra gravação ainda em andamento");
            return Err(AppError::SubmissionInProgress);
        }

        // A validação corre antes de marcar Submitting: falha aqui não é
        // gravação em andamento
        let validada = validate_moto(&self.form)?;
        let edit_id = self.edit_id;

        self.state = SubmitState::Submitting;
        let outcome = self.run_submit(edit_id, &validada).await;
        self.state = SubmitState::Idle;

        // Bloco síncrono único: mescla + estado do diálogo, sem await no meio
        match outcome {
            Ok(merge) => {
                self.apply_merge(merge);
                self.dialog_open = false;
                self.edit_id = None;
                self.form.clear();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Executa a gravação conforme o modo. Não toca em `self.store`: o
    /// retorno é mesclado depois, pelo chamador.
    async fn run_submit(
        &self,
        edit_id: Option<i64>,
        validada: &ValidatedMoto,
    ) -> AppResult<MergeOutcome> {
        match &self.mode {
            ReconcileMode::RemoteRefetch(api) => {
                let payload = MotoPayload::from_validated(validada, self.patio_id);
                let salva = match edit_id {
                    Some(id) => {
                        info!("💾 Atualizando moto {} ({})", id, payload.placa);
                        api.update_moto(id, &payload).await
                    }
                    None => {
                        info!("💾 Criando moto ({})", payload.placa);
                        api.create_moto(&payload).await
                    }
                }
                .map_err(AppError::save_failed)?;

                // A gravação já aconteceu; se a rebusca falhar, emendar o
                // registro devolvido em vez de reportar erro, senão o
                // usuário tentaria de novo e duplicaria a criação
                match api.list_motos().await {
                    Ok(motos) => Ok(MergeOutcome::Refetched(motos)),
                    Err(err) => {
                        warn!("⚠️ Gravou mas não rebuscou a lista: {}", err);
                        Ok(MergeOutcome::Spliced(salva))
                    }
                }
            }
            ReconcileMode::LocalSplice => {
                let id = edit_id.unwrap_or_else(|| self.store.next_local_id());
                debug!("📴 Gravação local da moto {} ({})", id, validada.placa);
                Ok(MergeOutcome::Spliced(Moto {
                    id,
                    modelo: validada.modelo,
                    placa: validada.placa.clone(),
                    ano: validada.ano,
                    quilometragem: validada.quilometragem,
                    status: validada.status,
                    vaga: validada.vaga.clone(),
                    patio_id: self.patio_id,
                }))
            }
        }
    }

    /// Mescla o resultado na lista local, em uma passada síncrona
    fn apply_merge(&mut self, merge: MergeOutcome) {
        match merge {
            MergeOutcome::Refetched(motos) => self.store.replace_all(motos),
            MergeOutcome::Spliced(moto) => {
                if self.edit_id.is_some() {
                    // Edição: substitui no lugar; se o registro sumiu da
                    // lista nesse meio tempo, entra no fim mesmo assim
                    let id = moto.id;
                    if !self.store.replace(id, moto.clone()) {
                        self.store.append(moto);
                    }
                } else {
                    self.store.append(moto);
                }
            }
        }
    }

    fn find_record(&self, id: i64) -> AppResult<Moto> {
        self.store
            .find_by_id(id)
            .cloned()
            .ok_or(AppError::RecordNotFound(id))
    }

    // ----- setters do formulário, um por controle da tela -----

    /// Placa passa pelo normalizador a cada tecla
    pub fn set_placa(&mut self, raw: &str) {
        self.form.placa = normalize_placa(raw);
    }

    /// Vaga idem
    pub fn set_vaga(&mut self, raw: &str) {
        self.form.vaga = normalize_vaga(raw);
    }

    pub fn set_ano(&mut self, raw: &str) {
        self.form.ano = raw.trim().to_string();
    }

    pub fn set_quilometragem(&mut self, raw: &str) {
        self.form.quilometragem = raw.trim().to_string();
    }

    pub fn set_modelo(&mut self, modelo: MotoModel) {
        self.form.modelo = Some(modelo);
    }

    pub fn set_status(&mut self, status: MotoStatus) {
        self.form.status = Some(status);
    }

    // ----- leitura para a camada de tela -----

    pub fn motos(&self) -> &[Moto] {
        self.store.all()
    }

    pub fn form(&self) -> &MotoForm {
        &self.form
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn edit_id(&self) -> Option<i64> {
        self.edit_id
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn offline(&self) -> bool {
        matches!(self.mode, ReconcileMode::LocalSplice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::ValidationError;

    fn controller_offline() -> MotoController {
        MotoController::new(ReconcileMode::LocalSplice, 1)
    }

    fn preenche_form_valido(c: &mut MotoController) {
        c.set_modelo(MotoModel::MottuSport);
        c.set_placa("abc1234");
        c.set_ano("2024");
        c.set_quilometragem("15000");
        c.set_status(MotoStatus::Disponivel);
        c.set_vaga("a1");
    }

    #[test]
    fn test_open_create_limpa_formulario_e_edicao() {
        let mut c = controller_offline();
        c.set_placa("abc1234");
        c.open_create();
        assert!(c.dialog_open());
        assert!(c.edit_id().is_none());
        assert_eq!(c.form().placa, "");
    }

    #[test]
    fn test_setters_normalizam_na_digitacao() {
        let mut c = controller_offline();
        c.set_placa("abc1d23!");
        assert_eq!(c.form().placa, "ABC-1D23");
        c.set_vaga("b3 extra");
        assert_eq!(c.form().vaga, "B3");
    }

    #[test]
    fn test_begin_edit_com_id_fantasma_nao_mexe_no_formulario() {
        let mut c = controller_offline();
        c.open_create();
        c.set_placa("abc1234");
        assert!(!c.begin_edit(42));
        assert_eq!(c.form().placa, "ABC-1234");
        assert!(c.edit_id().is_none());
    }

    #[tokio::test]
    async fn test_criacao_offline_recebe_id_sintetico() {
        let mut c = controller_offline();
        c.open_create();
        preenche_form_valido(&mut c);
        c.submit().await.unwrap();

        assert_eq!(c.motos().len(), 1);
        let moto = &c.motos()[0];
        assert_eq!(moto.id, 1);
        assert_eq!(moto.placa, "ABC-1234");
        assert_eq!(moto.vaga.as_deref(), Some("A1"));

        // diálogo fechado e formulário limpo depois do sucesso
        assert!(!c.dialog_open());
        assert_eq!(c.form().placa, "");
    }

    #[tokio::test]
    async fn test_edicao_offline_substitui_sem_duplicar() {
        let mut c = controller_offline();
        c.open_create();
        preenche_form_valido(&mut c);
        c.submit().await.unwrap();

        assert!(c.begin_edit(1));
        c.set_quilometragem("20000");
        c.submit().await.unwrap();

        assert_eq!(c.motos().len(), 1);
        assert_eq!(c.motos()[0].quilometragem, 20000);
        assert_eq!(c.motos()[0].id, 1);
    }

    #[tokio::test]
    async fn test_validacao_reprovada_mantem_dialogo_aberto() {
        let mut c = controller_offline();
        c.open_create();
        c.set_placa("abc");
        c.set_ano("2024");

        let err = c.submit().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingFields)
        ));
        assert!(c.dialog_open());
        assert_eq!(c.form().placa, "ABC");
        assert!(c.motos().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_fecha_sem_gravar() {
        let mut c = controller_offline();
        c.open_create();
        preenche_form_valido(&mut c);
        c.cancel();
        assert!(!c.dialog_open());
        assert!(c.motos().is_empty());
        // o texto digitado sobrevive até o próximo open_create
        assert_eq!(c.form().placa, "ABC-1234");
    }

    #[test]
    fn test_seed_carrega_lista_demo() {
        let mut c = controller_offline();
        c.seed(vec![Moto {
            id: 1,
            modelo: MotoModel::MottuE,
            placa: "DEM-0001".to_string(),
            ano: 2023,
            quilometragem: 0,
            status: MotoStatus::Disponivel,
            vaga: Some("A1".to_string()),
            patio_id: 1,
        }]);
        assert_eq!(c.motos().len(), 1);
        assert!(c.begin_edit(1));
        assert_eq!(c.form().placa, "DEM-0001");
    }
}
