//! Utilidades do sistema
//!
//! Este módulo contém os normalizadores de digitação, o validador do
//! formulário e os tipos de erro comuns à aplicação.

pub mod errors;
pub mod normalize;
pub mod validation;

pub use errors::{ApiError, AppError, AppResult, ValidationError};
pub use normalize::{normalize_placa, normalize_vaga};
pub use validation::{validate_moto, ValidatedMoto};
