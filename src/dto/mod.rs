//! DTOs da API do pátio

pub mod auth_dto;
pub mod moto_dto;

pub use auth_dto::{RegisterRequest, RegisterResponse};
pub use moto_dto::MotoPayload;
