//! Colors shared by the agent explainer scenes.

use crate::foundation::color::Color;

/// Indigo.
pub const PRIMARY: Color = Color::rgb(0x63, 0x66, 0xF1);
/// Purple.
pub const SECONDARY: Color = Color::rgb(0x8B, 0x5C, 0xF6);
/// Emerald.
pub const ACCENT: Color = Color::rgb(0x10, 0xB9, 0x81);
/// Amber.
pub const WARNING: Color = Color::rgb(0xF5, 0x9E, 0x0B);
pub const BACKGROUND: Color = Color::rgb(0x1E, 0x1E, 0x2E);
/// Light gray.
pub const TEXT: Color = Color::rgb(0xE2, 0xE8, 0xF0);
pub const SUCCESS: Color = Color::rgb(0x22, 0xC5, 0x5E);
/// Blue.
pub const CODE: Color = Color::rgb(0x3B, 0x82, 0xF6);
/// Background of the file card.
pub const FILE_BG: Color = Color::rgb(0x2D, 0x2D, 0x3D);
