use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::logic::tile::EditButtonKind;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📌, 🌐, etc.)
    NerdFont, // Nerd Fonts icons (U+F08D, etc.)
}

impl IconMode {
    /// Parse the config value, defaulting to Nerd Fonts
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::NerdFont,
        }
    }
}

/// Glyphs drawn on and around tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileGlyph {
    Pin,
    Unpin,
    Edit,
    Dismiss,
    MenuButton,
    Favicon,
    Screenshot,
    AddSite,
}

impl From<EditButtonKind> for TileGlyph {
    fn from(kind: EditButtonKind) -> Self {
        match kind {
            EditButtonKind::Pin => TileGlyph::Pin,
            EditButtonKind::Unpin => TileGlyph::Unpin,
            EditButtonKind::Edit => TileGlyph::Edit,
            EditButtonKind::Dismiss => TileGlyph::Dismiss,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub pin_color: Color,
    pub edit_color: Color,
    pub dismiss_color: Color,
    pub menu_color: Color,
    pub favicon_color: Color,
    pub screenshot_color: Color,
    pub placeholder_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            pin_color: Color::Yellow,
            edit_color: Color::Cyan,
            dismiss_color: Color::Red,
            menu_color: Color::Gray,
            favicon_color: Color::Blue,
            screenshot_color: Color::DarkGray,
            placeholder_color: Color::DarkGray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    pub fn theme(&self) -> &IconTheme {
        &self.theme
    }

    /// Raw glyph text for the current mode
    pub fn symbol(&self, glyph: TileGlyph) -> &'static str {
        let (emoji, nerd) = match glyph {
            TileGlyph::Pin => ("📌", "\u{F08D}"),
            TileGlyph::Unpin => ("📍", "\u{F127}"),
            TileGlyph::Edit => ("✏️", "\u{F040}"),
            TileGlyph::Dismiss => ("✖", "\u{F00D}"),
            TileGlyph::MenuButton => ("⋯", "\u{F142}"),
            TileGlyph::Favicon => ("🌐", "\u{F0AC}"),
            TileGlyph::Screenshot => ("🖼", "\u{F03E}"),
            TileGlyph::AddSite => ("➕", "\u{F067}"),
        };
        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    /// Styled glyph span
    pub fn glyph(&self, glyph: TileGlyph) -> Span<'static> {
        let color = match glyph {
            TileGlyph::Pin | TileGlyph::Unpin => self.theme.pin_color,
            TileGlyph::Edit => self.theme.edit_color,
            TileGlyph::Dismiss => self.theme.dismiss_color,
            TileGlyph::MenuButton => self.theme.menu_color,
            TileGlyph::Favicon => self.theme.favicon_color,
            TileGlyph::Screenshot => self.theme.screenshot_color,
            TileGlyph::AddSite => self.theme.placeholder_color,
        };
        Span::styled(self.symbol(glyph), Style::default().fg(color))
    }
}
