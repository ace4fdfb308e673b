//! Configuração do projeto
//!
//! Este módulo contém a configuração por variáveis de ambiente e o modo de
//! reconciliação ativo.

pub mod environment;

pub use environment::*;
