//! Lista local de motos
//!
//! Guarda a lista exibida na tela, na mesma ordem em que os registros
//! chegaram. Toda mutação passa pelo controlador, então não há lock aqui:
//! quem chama já tem posse exclusiva.

use tracing::debug;

use crate::models::Moto;

/// Lista ordenada das motos do pátio
#[derive(Debug, Default)]
pub struct MotoStore {
    motos: Vec<Moto>,
}

impl MotoStore {
    pub fn new() -> Self {
        MotoStore { motos: Vec::new() }
    }

    /// Acrescenta um registro novo ao fim da lista
    pub fn append(&mut self, moto: Moto) {
        debug!("➕ Moto {} ({}) adicionada à lista local", moto.id, moto.placa);
        self.motos.push(moto);
    }

    /// Substitui o registro de mesmo id, preservando a posição na lista.
    /// Sem id correspondente nada muda e o retorno é `false`.
    pub fn replace(&mut self, id: i64, moto: Moto) -> bool {
        match self.motos.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                debug!("♻️ Moto {} ({}) atualizada na lista local", id, moto.placa);
                *slot = moto;
                true
            }
            None => {
                debug!("⚠️ Moto {} não está na lista local, nada substituído", id);
                false
            }
        }
    }

    /// Troca a lista inteira pelo retorno autoritativo do servidor
    pub fn replace_all(&mut self, motos: Vec<Moto>) {
        debug!("🔄 Lista local substituída: {} motos", motos.len());
        self.motos = motos;
    }

    pub fn all(&self) -> &[Moto] {
        &self.motos
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Moto> {
        self.motos.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.motos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motos.is_empty()
    }

    /// Id sintético para o modo offline: tamanho atual + 1
    pub fn next_local_id(&self) -> i64 {
        self.motos.len() as i64 + 1
    }
}
