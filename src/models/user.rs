//! Modelo de usuário local
//!
//! Conta registrada no aparelho. O login é local (lista de usuários do
//! arquivo de sessão) e a senha fica guardada como texto, no mesmo molde do
//! armazenamento original do aplicativo; o cadastro no servidor é um passo
//! separado, feito pelo cliente HTTP.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(rename = "tipoUsuario", default)]
    pub tipo_usuario: Option<String>,
}

impl StoredUser {
    pub fn new(nome: &str, email: &str, senha: &str) -> Self {
        StoredUser {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
            tipo_usuario: Some("CLIENTE".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializacao_usa_tipo_usuario_camel_case() {
        let user = StoredUser::new("Ana", "ana@mottu.com.br", "1234");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["tipoUsuario"], "CLIENTE");
        assert_eq!(json["nome"], "Ana");
    }

    #[test]
    fn test_deserializacao_tolera_tipo_ausente() {
        let json = r#"{ "nome": "Bia", "email": "bia@mottu.com.br", "senha": "abcd" }"#;
        let user: StoredUser = serde_json::from_str(json).unwrap();
        assert!(user.tipo_usuario.is_none());
    }
}
