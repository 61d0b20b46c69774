use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::premul_u8;

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const GREY: Self = Self::rgb(0x88, 0x88, 0x88);
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);
    pub const GREEN: Self = Self::rgb(0x83, 0xC1, 0x67);
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    pub const BLUE_D: Self = Self::rgb(0x29, 0xAB, 0xCA);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    pub const TEAL: Self = Self::rgb(0x5C, 0xD0, 0xB3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> SceneResult<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let nibble = |c: u8| -> SceneResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| SceneError::validation(format!("invalid hex color '{s}'")))
        };
        let bytes = hex.as_bytes();
        let byte = |i: usize| -> SceneResult<u8> { Ok(nibble(bytes[i])? * 16 + nibble(bytes[i + 1])?) };
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(SceneError::validation(format!(
                "hex color '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    /// Scale alpha by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (f64::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub fn to_premul(self) -> [u8; 4] {
        [
            premul_u8(self.r, self.a),
            premul_u8(self.g, self.a),
            premul_u8(self.b, self.a),
            self.a,
        ]
    }

    /// `#rrggbb`, as used for SVG `fill` attributes.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
