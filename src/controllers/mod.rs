//! Controladores da aplicação

pub mod moto_controller;

pub use moto_controller::{MotoController, ReconcileMode};
