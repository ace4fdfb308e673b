//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados do domínio: a moto e seus enums
//! de código fechado, a projeção de vagas e o usuário local da sessão.

pub mod moto;
pub mod user;
pub mod vaga;

pub use moto::{Moto, MotoForm, MotoModel, MotoStatus};
pub use user::StoredUser;
pub use vaga::{vagas_overview, Vaga, VagaStatus};
