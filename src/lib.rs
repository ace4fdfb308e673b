//! Pátio de Motos - núcleo do cliente de rastreio
//!
//! Biblioteca do cliente que acompanha as motos estacionadas num pátio da
//! Mottu: normalização de digitação, validação do cadastro, decisão entre
//! criar e editar e a reconciliação da lista local com o servidor. A tela
//! de terminal em `ui` é só uma casca por cima do `MotoController`.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod i18n;
pub mod models;
pub mod session;
pub mod store;
pub mod theme;
pub mod ui;
pub mod utils;
