use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a `#rrggbb` color identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The identifier does not start with `#`.
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),

    /// The identifier has the wrong number of hex digits.
    #[error("color {0:?} must have exactly 6 hex digits")]
    BadLength(String),

    /// The identifier contains a non-hex character.
    #[error("color {0:?} contains an invalid hex digit")]
    InvalidDigit(String),
}

/// Linear RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style `#rrggbb` identifier.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidDigit(hex.to_string()))?;

        let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
        Ok(Self::new(channel(16), channel(8), channel(0)))
    }

    /// Parse `hex`, logging and falling back to `fallback` when malformed.
    pub fn from_hex_or(hex: &str, fallback: Color) -> Self {
        Self::from_hex(hex).unwrap_or_else(|err| {
            log::warn!("{err}; using fallback color");
            fallback
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_channels() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn accepts_uppercase_digits() {
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(matches!(Color::from_hex("ffffff"), Err(ColorError::MissingHash(_))));
        assert!(matches!(Color::from_hex("#fff"), Err(ColorError::BadLength(_))));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn fallback_used_on_error() {
        assert_eq!(Color::from_hex_or("nope", Color::BLACK), Color::BLACK);
    }
}
