//! Textos da interface em português e espanhol
//!
//! As tabelas de tradução da tela, chaveadas por `TextKey`. O núcleo nunca
//! formata texto: ele devolve erros tipados e a camada de tela escolhe a
//! string daqui. Idioma desconhecido cai em português, o padrão do app.

use crate::models::MotoStatus;
use crate::utils::errors::ValidationError;

/// Idiomas suportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Pt,
    Es,
}

impl Lang {
    /// Código curto persistido na sessão
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::Es => "es",
        }
    }

    /// Qualquer coisa que não seja espanhol vira português
    pub fn from_code(code: &str) -> Lang {
        if code.trim().eq_ignore_ascii_case("es") {
            Lang::Es
        } else {
            Lang::Pt
        }
    }

    /// Alterna entre os dois idiomas
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Pt => Lang::Es,
            Lang::Es => Lang::Pt,
        }
    }
}

/// Chaves de texto da interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    // Perfil
    Profile,
    ChangePhoto,
    Name,
    Email,
    Logout,
    LogoutConfirm,
    Cancel,
    Loading,
    ChangeLanguage,

    // Tela principal
    Welcome,
    AddMoto,
    EditMoto,
    AddNewBike,
    PlatePlaceholder,
    YearPlaceholder,
    KmPlaceholder,
    Status,
    Confirm,
    Save,
    CancelButton,
    ErrorFillAll,
    ErrorPlateFormat,
    ErrorSlot,
    ErrorYear,
    ErrorKm,
    ErrorSave,
    ErrorLoad,
    ModelLabel,
    PlateLabel,
    YearLabel,
    KmLabel,
    StatusValue,
    SlotLabel,
    NotAssigned,
}

/// Texto traduzido para a chave no idioma pedido
pub fn t(lang: Lang, key: TextKey) -> &'static str {
    match lang {
        Lang::Pt => pt(key),
        Lang::Es => es(key),
    }
}

/// Nome de exibição do status da moto
pub fn status_label(lang: Lang, status: MotoStatus) -> &'static str {
    match (lang, status) {
        (Lang::Pt, MotoStatus::Disponivel) => "DISPONIVEL",
        (Lang::Pt, MotoStatus::Alugada) => "ALUGADA",
        (Lang::Pt, MotoStatus::Manutencao) => "MANUTENÇÃO",
        (Lang::Es, MotoStatus::Disponivel) => "DISPONIBLE",
        (Lang::Es, MotoStatus::Alugada) => "ALQUILADO",
        (Lang::Es, MotoStatus::Manutencao) => "MANTENIMIENTO",
    }
}

/// Chave de texto para cada motivo de reprovação do validador
pub fn validation_error_key(err: ValidationError) -> TextKey {
    match err {
        ValidationError::MissingFields => TextKey::ErrorFillAll,
        ValidationError::InvalidPlateFormat => TextKey::ErrorPlateFormat,
        ValidationError::InvalidSlotFormat => TextKey::ErrorSlot,
        ValidationError::InvalidYear => TextKey::ErrorYear,
        ValidationError::InvalidMileage => TextKey::ErrorKm,
    }
}

fn pt(key: TextKey) -> &'static str {
    match key {
        TextKey::Profile => "Perfil",
        TextKey::ChangePhoto => "Alterar foto",
        TextKey::Name => "Nome",
        TextKey::Email => "Email",
        TextKey::Logout => "Sair",
        TextKey::LogoutConfirm => "Você realmente deseja sair?",
        TextKey::Cancel => "Cancelar",
        TextKey::Loading => "Carregando perfil...",
        TextKey::ChangeLanguage => "Trocar idioma",

        TextKey::Welcome => "Bem-vindo ao Pátio da Mottu",
        TextKey::AddMoto => "Adicionar Moto na Vaga",
        TextKey::EditMoto => "Editar Moto",
        TextKey::AddNewBike => "Adicionar Moto",
        TextKey::PlatePlaceholder => "Placa (ABC-1234)",
        TextKey::YearPlaceholder => "Ano",
        TextKey::KmPlaceholder => "Quilometragem",
        TextKey::Status => "Status",
        TextKey::Confirm => "Confirmar",
        TextKey::Save => "Salvar",
        TextKey::CancelButton => "Cancelar",
        TextKey::ErrorFillAll => "Preencha todos os campos!",
        TextKey::ErrorPlateFormat => "A placa deve seguir o formato ABC-1234 ou ABC-1D23.",
        TextKey::ErrorSlot => "A vaga deve ser uma letra e um número (ex: A1).",
        TextKey::ErrorYear => "Informe um ano válido.",
        TextKey::ErrorKm => "A quilometragem deve ser um número válido.",
        TextKey::ErrorSave => "Não foi possível salvar a moto.",
        TextKey::ErrorLoad => "Não foi possível carregar as motos.",
        TextKey::ModelLabel => "Modelo",
        TextKey::PlateLabel => "Placa",
        TextKey::YearLabel => "Ano",
        TextKey::KmLabel => "Quilometragem",
        TextKey::StatusValue => "Status",
        TextKey::SlotLabel => "Vaga",
        TextKey::NotAssigned => "Não atribuída",
    }
}

fn es(key: TextKey) -> &'static str {
    match key {
        TextKey::Profile => "Perfil",
        TextKey::ChangePhoto => "Cambiar foto",
        TextKey::Name => "Nombre",
        TextKey::Email => "Correo electrónico",
        TextKey::Logout => "Cerrar sesión",
        TextKey::LogoutConfirm => "¿Realmente deseas salir?",
        TextKey::Cancel => "Cancelar",
        TextKey::Loading => "Cargando perfil...",
        TextKey::ChangeLanguage => "Cambiar idioma",

        TextKey::Welcome => "Bienvenido al Patio de Mottu",
        TextKey::AddMoto => "Agregar Moto al Espacio",
        TextKey::EditMoto => "Editar Moto",
        TextKey::AddNewBike => "Agregar Moto",
        TextKey::PlatePlaceholder => "Placa (ABC-1234)",
        TextKey::YearPlaceholder => "Año",
        TextKey::KmPlaceholder => "Kilometraje",
        TextKey::Status => "Estado",
        TextKey::Confirm => "Confirmar",
        TextKey::Save => "Guardar",
        TextKey::CancelButton => "Cancelar",
        TextKey::ErrorFillAll => "¡Complete todos los campos!",
        TextKey::ErrorPlateFormat => "La placa debe seguir el formato ABC-1234 o ABC-1D23.",
        TextKey::ErrorSlot => "El espacio debe ser una letra y un número (ej: A1).",
        TextKey::ErrorYear => "Ingrese un año válido.",
        TextKey::ErrorKm => "El kilometraje debe ser un número válido.",
        TextKey::ErrorSave => "No fue posible guardar la moto.",
        TextKey::ErrorLoad => "No fue posible cargar las motos.",
        TextKey::ModelLabel => "Modelo",
        TextKey::PlateLabel => "Placa",
        TextKey::YearLabel => "Año",
        TextKey::KmLabel => "Kilometraje",
        TextKey::StatusValue => "Estado",
        TextKey::SlotLabel => "Espacio",
        TextKey::NotAssigned => "No asignado",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traducao_muda_com_o_idioma() {
        assert_eq!(t(Lang::Pt, TextKey::Welcome), "Bem-vindo ao Pátio da Mottu");
        assert_eq!(t(Lang::Es, TextKey::Welcome), "Bienvenido al Patio de Mottu");
    }

    #[test]
    fn test_from_code_cai_em_portugues() {
        assert_eq!(Lang::from_code("es"), Lang::Es);
        assert_eq!(Lang::from_code("ES "), Lang::Es);
        assert_eq!(Lang::from_code("pt"), Lang::Pt);
        assert_eq!(Lang::from_code("en"), Lang::Pt);
        assert_eq!(Lang::from_code(""), Lang::Pt);
    }

    #[test]
    fn test_toggled_alterna() {
        assert_eq!(Lang::Pt.toggled(), Lang::Es);
        assert_eq!(Lang::Es.toggled().toggled(), Lang::Es);
    }

    #[test]
    fn test_status_tem_nome_nos_dois_idiomas() {
        assert_eq!(status_label(Lang::Pt, MotoStatus::Manutencao), "MANUTENÇÃO");
        assert_eq!(
            status_label(Lang::Es, MotoStatus::Manutencao),
            "MANTENIMIENTO"
        );
    }

    #[test]
    fn test_todo_erro_de_validacao_tem_chave() {
        let erros = [
            ValidationError::MissingFields,
            ValidationError::InvalidPlateFormat,
            ValidationError::InvalidSlotFormat,
            ValidationError::InvalidYear,
            ValidationError::InvalidMileage,
        ];
        for erro in erros {
            let chave = validation_error_key(erro);
            assert!(!t(Lang::Pt, chave).is_empty());
            assert!(!t(Lang::Es, chave).is_empty());
        }
    }
}
