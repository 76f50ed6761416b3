//! Color palettes for the light and dark themes
//!
//! Both palettes are constants. The light palette overrides the material
//! roles explicitly; the dark palette is the stock material dark set.

use ratatui::style::Color;

use crate::state::ThemeMode;

/// Semantic color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub primary_variant: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub on_secondary: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub error: Color,
    pub on_error: Color,
}

// ============================================================================
// Light
// ============================================================================

pub const LIGHT_PALETTE: Palette = Palette {
    primary: Color::Rgb(0x62, 0x00, 0xEE),
    primary_variant: Color::Rgb(0x37, 0x00, 0xB3),
    on_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
    secondary: Color::Rgb(0x03, 0xDA, 0xC5),
    secondary_variant: Color::Rgb(0x00, 0x00, 0xFF),
    on_secondary: Color::Rgb(0x00, 0x00, 0x00),
    background: Color::Rgb(0xFF, 0xFF, 0xFF),
    on_background: Color::Rgb(0x00, 0x00, 0x00),
    surface: Color::Rgb(0xFF, 0xFF, 0xFF),
    on_surface: Color::Rgb(0x00, 0x00, 0x00),
    error: Color::Rgb(0xB0, 0x00, 0x20),
    on_error: Color::Rgb(0xFF, 0xFF, 0xFF),
};

// ============================================================================
// Dark
// ============================================================================

pub const DARK_PALETTE: Palette = Palette {
    primary: Color::Rgb(0xBB, 0x86, 0xFC),
    primary_variant: Color::Rgb(0x37, 0x00, 0xB3),
    on_primary: Color::Rgb(0x00, 0x00, 0x00),
    secondary: Color::Rgb(0x03, 0xDA, 0xC6),
    secondary_variant: Color::Rgb(0x03, 0xDA, 0xC6),
    on_secondary: Color::Rgb(0x00, 0x00, 0x00),
    background: Color::Rgb(0x12, 0x12, 0x12),
    on_background: Color::Rgb(0xFF, 0xFF, 0xFF),
    surface: Color::Rgb(0x12, 0x12, 0x12),
    on_surface: Color::Rgb(0xFF, 0xFF, 0xFF),
    error: Color::Rgb(0xCF, 0x66, 0x79),
    on_error: Color::Rgb(0x00, 0x00, 0x00),
};

/// Scrim drawn behind an open drawer
pub const COLOR_SCRIM: Color = Color::Rgb(0x52, 0x52, 0x52);

/// Resolve the palette for a theme mode.
pub fn palette_for(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}
