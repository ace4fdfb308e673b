//! Temas claro e escuro do terminal
//!
//! Papéis de cor nomeados, injetados na camada de tela. O verde da Mottu é
//! o primário nas duas paletas; o resto muda entre claro e escuro.

use colored::Color;

/// Verde Mottu
const VERDE_MOTTU: Color = Color::TrueColor {
    r: 0,
    g: 177,
    b: 49,
};

/// Paleta de cores ativa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub danger: Color,
    pub success: Color,
    pub is_dark: bool,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::White,
            text: Color::Black,
            primary: VERDE_MOTTU,
            secondary: Color::BrightBlack,
            danger: Color::Red,
            success: Color::Green,
            is_dark: false,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Black,
            text: Color::White,
            primary: VERDE_MOTTU,
            secondary: Color::BrightBlack,
            danger: Color::BrightRed,
            success: Color::BrightGreen,
            is_dark: true,
        }
    }

    /// A outra paleta
    pub fn toggled(&self) -> Theme {
        if self.is_dark {
            Theme::light()
        } else {
            Theme::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alterna_as_paletas() {
        let claro = Theme::light();
        assert!(!claro.is_dark);
        let escuro = claro.toggled();
        assert!(escuro.is_dark);
        assert_eq!(escuro.toggled(), claro);
    }

    #[test]
    fn test_primario_e_o_mesmo_nas_duas() {
        assert_eq!(Theme::light().primary, Theme::dark().primary);
    }
}
