use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidColorFormat;

/// Combined color reported when the selected list is empty.
pub const NEUTRAL_HEX: &str = "#cccccc";

/// An 8-bit sRGB triple. No alpha; stored records never carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `"rrggbb"` or `"#rrggbb"`. Anything else is rejected rather
    /// than best-effort repaired.
    pub fn parse(hex: &str) -> Result<Self, InvalidColorFormat> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColorFormat(hex.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| InvalidColorFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Decode sRGB to linear light (IEC 61966-2-1 EOTF).
    pub fn to_linear(self) -> [f64; 3] {
        fn decode(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b)]
    }

    /// Encode linear light back to 8-bit sRGB, clamping to the channel range.
    pub fn from_linear(lin: [f64; 3]) -> Self {
        fn encode(l: f64) -> u8 {
            let c = if l <= 0.0031308 {
                12.92 * l
            } else {
                1.055 * l.powf(1.0 / 2.4) - 0.055
            };
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: encode(lin[0]),
            g: encode(lin[1]),
            b: encode(lin[2]),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Average the raw 8-bit channel values.
    #[default]
    Naive,
    /// Average in linear light, which is what "the color halfway between"
    /// actually means for gamma-encoded sRGB.
    Linear,
}

/// Averages a set of colors into one. Empty input yields [`NEUTRAL_HEX`];
/// the output is always `#` plus six lowercase hex digits. Pure and
/// order-independent.
pub fn combine_colors<'a, I>(hexes: I, mode: BlendMode) -> Result<String, InvalidColorFormat>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut colors = Vec::new();
    for hex in hexes {
        colors.push(Rgb::parse(hex)?);
    }
    if colors.is_empty() {
        return Ok(NEUTRAL_HEX.to_string());
    }
    let n = colors.len() as f64;

    let combined = match mode {
        BlendMode::Naive => {
            let mut sum = [0u32; 3];
            for c in &colors {
                sum[0] += c.r as u32;
                sum[1] += c.g as u32;
                sum[2] += c.b as u32;
            }
            Rgb {
                r: (sum[0] as f64 / n).round() as u8,
                g: (sum[1] as f64 / n).round() as u8,
                b: (sum[2] as f64 / n).round() as u8,
            }
        }
        BlendMode::Linear => {
            let mut sum = [0f64; 3];
            for c in &colors {
                let lin = c.to_linear();
                sum[0] += lin[0];
                sum[1] += lin[1];
                sum[2] += lin[2];
            }
            Rgb::from_linear([sum[0] / n, sum[1] / n, sum[2] / n])
        }
    };

    Ok(combined.to_string())
}

#[cfg(test)]
#[path = "tests/blend_tests.rs"]
mod tests;
