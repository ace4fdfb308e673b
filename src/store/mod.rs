//! Armazenamento local

pub mod moto_store;

pub use moto_store::MotoStore;
