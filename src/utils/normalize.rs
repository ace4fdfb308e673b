//! Normalização de campos digitados
//!
//! Estas funções canonicalizam o texto cru vindo do teclado enquanto o
//! usuário digita. Elas nunca falham: caracteres não permitidos são
//! descartados e o comprimento é limitado silenciosamente. A validação
//! rígida acontece apenas no submit (ver `utils::validation`).

/// Normalizar uma placa parcial ou completa para o formato `ABC-1234`.
///
/// Remove tudo que não for alfanumérico, converte para maiúsculas,
/// mantém no máximo 7 caracteres úteis e insere o hífen depois do
/// terceiro caractere assim que houver pelo menos quatro. Idempotente:
/// normalizar uma placa já normalizada devolve a mesma string.
pub fn normalize_placa(raw: &str) -> String {
    let limpo: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(7)
        .collect();

    if limpo.len() >= 4 {
        format!("{}-{}", &limpo[..3], &limpo[3..])
    } else {
        limpo
    }
}

/// Normalizar um código de vaga para o formato `A1`.
///
/// Apenas maiúsculas e truncamento em 2 caracteres; o formato
/// letra+dígito é exigido depois, pelo validador. Idempotente.
pub fn normalize_vaga(raw: &str) -> String {
    raw.chars().map(|c| c.to_ascii_uppercase()).take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_placa_insere_hifen() {
        assert_eq!(normalize_placa("abc1234"), "ABC-1234");
        assert_eq!(normalize_placa("abc1d23"), "ABC-1D23");
        assert_eq!(normalize_placa("ABC"), "ABC");
        assert_eq!(normalize_placa("ab"), "AB");
        assert_eq!(normalize_placa(""), "");
    }

    #[test]
    fn test_normalize_placa_descarta_simbolos() {
        assert_eq!(normalize_placa("a b-c/1.2,3!4"), "ABC-1234");
        assert_eq!(normalize_placa("---abc---1234---"), "ABC-1234");
    }

    #[test]
    fn test_normalize_placa_trunca_em_oito() {
        assert_eq!(normalize_placa("abc12345678"), "ABC-1234");
        assert_eq!(normalize_placa("ABCDEFGHIJ"), "ABC-DEFG");
    }

    #[test]
    fn test_normalize_placa_idempotente() {
        for raw in ["abc1234", "ABC-1234", "a!b@c#1$2%3&4", "ab", "", "ABC-1D23"] {
            let uma_vez = normalize_placa(raw);
            assert_eq!(normalize_placa(&uma_vez), uma_vez, "raw: {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_placa_tecla_a_tecla() {
        // Simula o usuário digitando a,b,c,1,2,3,4: o campo é
        // renormalizado a cada tecla, como no app.
        let teclas = ["a", "b", "c", "1", "2", "3", "4"];
        let mut cru = String::new();
        let mut exibido = String::new();
        for tecla in teclas {
            cru.push_str(tecla);
            exibido = normalize_placa(&cru);
        }
        assert_eq!(exibido, "ABC-1234");
    }

    #[test]
    fn test_normalize_vaga() {
        assert_eq!(normalize_vaga("a1"), "A1");
        assert_eq!(normalize_vaga("b12"), "B1");
        assert_eq!(normalize_vaga(""), "");
        assert_eq!(normalize_vaga("A1"), "A1");
    }

    #[test]
    fn test_normalize_vaga_idempotente() {
        for raw in ["a1", "A1", "b", "", "c99"] {
            let uma_vez = normalize_vaga(raw);
            assert_eq!(normalize_vaga(&uma_vez), uma_vez);
        }
    }
}
