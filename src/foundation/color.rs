use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Straight (non-premultiplied) RGB8 color. Opacity lives on the style, not the color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Neutral gray.
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);
    /// Sky blue.
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    /// Pale blue used for activated strokes.
    pub const BLUE_A: Self = Self::rgb(0xC7, 0xE9, 0xF1);
    /// Soft green.
    pub const GREEN: Self = Self::rgb(0x83, 0xC1, 0x67);
    /// Orange.
    pub const ORANGE: Self = Self::rgb(0xFF, 0x86, 0x2F);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    /// Soft red.
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);

    /// Build a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> ExplainerResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(ExplainerError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> ExplainerResult<u8> {
            u8::from_str_radix(pair, 16).map_err(|_| {
                ExplainerError::validation(format!("invalid hex byte \"{pair}\""))
            })
        }

        Ok(Self::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }

    /// Lowercase `#rrggbb` form, as written into SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
