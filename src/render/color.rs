//! RGBA colour values.
//!
//! Any CSS colour string is accepted on input (`#3b82f6`, `rgb(59 130 246)`,
//! `steelblue`, ...) and resolved to 8-bit sRGB. Output is always
//! `#rrggbb` or `#rrggbbaa`.

use crate::error::{ConfigError, ConfigResult};
use ::color::{DynamicColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the alpha channel replaced by `alpha` in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse a CSS colour string.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        let parsed = DynamicColor::from_str(value.trim())
            .map_err(|err| ConfigError::InvalidColor(format!("`{value}`: {err}")))?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::rgba(rgba.r, rgba.g, rgba.b, rgba.a))
    }

    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
