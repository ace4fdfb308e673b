use serde::{Deserialize, Serialize};
use validator::Validate;

// Request de cadastro no servidor
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 4, max = 72))]
    pub senha: String,

    #[serde(rename = "tipoUsuario")]
    pub tipo_usuario: String,
}

impl RegisterRequest {
    pub fn new(nome: &str, email: &str, senha: &str) -> Self {
        Self {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
            tipo_usuario: "CLIENTE".to_string(),
        }
    }
}

// Response de cadastro
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_valido() {
        let req = RegisterRequest::new("Carlos", "carlos@mottu.com.br", "senha123");
        assert!(req.validate().is_ok());
        assert_eq!(req.tipo_usuario, "CLIENTE");
    }

    #[test]
    fn test_email_invalido_reprova() {
        let req = RegisterRequest::new("Carlos", "carlos-sem-arroba", "senha123");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_senha_curta_reprova() {
        let req = RegisterRequest::new("Carlos", "carlos@mottu.com.br", "abc");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_serializacao_usa_tipo_usuario_camel_case() {
        let req = RegisterRequest::new("Ana", "ana@mottu.com.br", "senha123");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tipoUsuario"], "CLIENTE");
        assert_eq!(json["senha"], "senha123");
    }
}
