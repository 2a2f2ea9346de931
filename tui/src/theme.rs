//! Color theme and glyphs for the pinpad TUI.
//!
//! Kanagawa Wave palette with an ASCII-only glyph fallback for
//! terminals without decent Unicode fonts.

use ratatui::style::{Color, Modifier, Style};

/// Kanagawa Wave color constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const WARNING: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
}

#[must_use]
pub fn palette() -> Palette {
    Palette {
        bg_dark: colors::BG_DARK,
        bg_panel: colors::BG_PANEL,
        bg_border: colors::BG_BORDER,
        text_primary: colors::TEXT_PRIMARY,
        text_muted: colors::TEXT_MUTED,
        accent: colors::ACCENT,
        success: colors::SUCCESS,
        warning: colors::WARNING,
    }
}

impl Palette {
    #[must_use]
    pub fn cell_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.bg_border)
        }
    }

    #[must_use]
    pub fn digit(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn masked(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn hint(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

/// Glyph set for the row, with an ASCII fallback.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Shown instead of a digit while a slot is masked.
    pub mask: &'static str,
    /// Shown in a focused, empty slot.
    pub caret: &'static str,
}

#[must_use]
pub fn glyphs(ascii_only: bool) -> Glyphs {
    if ascii_only {
        Glyphs {
            mask: "*",
            caret: "_",
        }
    } else {
        Glyphs {
            mask: "•",
            caret: "▁",
        }
    }
}
