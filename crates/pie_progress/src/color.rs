use derive_more::{Deref, From, Into};
use palette::rgb::FromHexError;
use palette::{LinSrgba, Mix, Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color with alpha, written as `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    /// Blends in linear light.
    pub fn mix(self, to: Self, t: f64) -> Self {
        if self == to || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        let from: LinSrgba<f64> = self.0.into_linear();
        let to: LinSrgba<f64> = to.0.into_linear();
        Self(Srgba::from_linear(from.mix(to, t)))
    }
}

#[derive(Error, Debug)]
pub enum ColorParseError {
    #[error("Invalid color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    Length(String),
    #[error("Invalid color '{input}': {source}")]
    Hex {
        input: String,
        #[source]
        source: FromHexError,
    },
    #[error("Invalid alpha in color '{0}'")]
    Alpha(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let (rgb, alpha) = match hex.len() {
            3 | 6 => (hex, u8::MAX),
            8 => {
                let (rgb, alpha) = hex
                    .get(..6)
                    .zip(hex.get(6..))
                    .ok_or_else(|| ColorParseError::Length(s.to_string()))?;
                let alpha = u8::from_str_radix(alpha, 16)
                    .map_err(|_| ColorParseError::Alpha(s.to_string()))?;
                (rgb, alpha)
            }
            _ => return Err(ColorParseError::Length(s.to_string())),
        };

        let rgb = Srgb::<u8>::from_str(rgb).map_err(|source| ColorParseError::Hex {
            input: s.to_string(),
            source,
        })?;
        let (r, g, b) = rgb.into_format::<f64>().into_components();
        Ok(Self::new(r, g, b, alpha as f64 / 255.0))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_format::<u8, u8>().into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ColorPair {
    pub fill: Color,
    pub stroke: Color,
}

impl ColorPair {
    pub fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }
}
