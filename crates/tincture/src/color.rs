//! Color values and color-space conversion.
//!
//! A [`Color`] is an opaque sRGB value with no alpha channel. It is parsed
//! from a 6-digit hex string and always displayed as lowercase `#rrggbb`.
//! [`Hsl`] is the hue/saturation/lightness view used by the lightness and
//! hue adjustments elsewhere in the crate.
//!
//! # Example
//!
//! ```rust
//! use tincture::color::{Color, hex_to_hsl, hsl_to_hex};
//!
//! let brand: Color = "#667EEA".parse().unwrap();
//! assert_eq!(brand.to_string(), "#667eea");
//!
//! let hsl = hex_to_hsl("#ff0000").unwrap();
//! assert_eq!(hsl_to_hex(hsl), "#ff0000");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string is not a 6-digit hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color string is empty")]
    Empty,
    #[error("invalid hex color '{input}': expected 6 hex digits, got {len}")]
    InvalidLength { input: String, len: usize },
    #[error("invalid hex color '{input}': contains non-hex characters")]
    InvalidDigit { input: String },
}

/// An sRGB color with 8 bits per channel.
///
/// # Examples
///
/// ```rust
/// use tincture::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.hex(), "#ff0000");
/// assert_eq!(Color::parse("FF0000").unwrap(), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from floating-point channels.
    ///
    /// Each channel is rounded, then clamped to `[0, 255]`.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Parse a 6-digit hex string, with or without a leading `#`.
    ///
    /// Surrounding whitespace is not stripped, so `" #ffffff "` is rejected.
    ///
    /// # Errors
    /// Returns [`ParseColorError`] for empty input, the wrong number of
    /// digits, or non-hex characters.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let raw = s;
        if raw.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidDigit {
                input: raw.to_string(),
            });
        }
        if hex.len() != 6 {
            return Err(ParseColorError::InvalidLength {
                input: raw.to_string(),
                len: hex.len(),
            });
        }

        // from_str_radix accepts a leading '+', which is not a hex digit.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit {
                input: raw.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError::InvalidDigit {
                input: raw.to_string(),
            })
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The channels as an `(r, g, b)` tuple.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to hue/saturation/lightness.
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// Convert from hue/saturation/lightness.
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness are clamped to
    /// `[0, 100]`.
    #[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;

        if s == 0.0 {
            let v = l * 255.0;
            return Self::from_channels(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
        let g = hue_to_rgb(p, q, h);
        let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

        Self::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }
}

#[allow(clippy::suboptimal_flops)]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a 6-digit hex string or an RGB map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Color::parse(v).map_err(E::custom)
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut r: Option<u8> = None;
        let mut g: Option<u8> = None;
        let mut b: Option<u8> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "r" | "red" => r = Some(map.next_value()?),
                "g" | "green" => g = Some(map.next_value()?),
                "b" | "blue" => b = Some(map.next_value()?),
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        match (r, g, b) {
            (Some(r), Some(g), Some(b)) => Ok(Color::rgb(r, g, b)),
            _ => Err(de::Error::custom("RGB color requires r, g, b fields")),
        }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same saturation and lightness, hue rotated by `degrees` (mod 360).
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new((self.h + degrees).rem_euclid(360.0), self.s, self.l)
    }
}

/// Parse a hex string into its RGB channels.
///
/// # Errors
/// Returns [`ParseColorError`] if `hex` is not a 6-digit hex color.
pub fn hex_to_rgb(hex: &str) -> Result<Color, ParseColorError> {
    Color::parse(hex)
}

/// Format floating-point channels as `#rrggbb`, rounding and clamping each
/// to `[0, 255]` first.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Color::from_channels(r, g, b).hex()
}

/// Parse a hex string and convert it to HSL.
///
/// # Errors
/// Returns [`ParseColorError`] if `hex` is not a 6-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ParseColorError> {
    Color::parse(hex).map(Color::to_hsl)
}

/// Convert HSL to a `#rrggbb` string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Color::from_hsl(hsl).hex()
}

/// Multiply the HSL lightness of `color` by `factor`, clamped to `[0, 100]`.
///
/// Factors below 1 darken, factors above 1 lighten. Hue and saturation are
/// kept.
pub fn adjust_lightness(color: Color, factor: f64) -> Color {
    let hsl = color.to_hsl();
    Color::from_hsl(Hsl::new(hsl.h, hsl.s, (hsl.l * factor).clamp(0.0, 100.0)))
}

/// Linear per-channel RGB mix: `c1 * (1 - ratio) + c2 * ratio`, rounded.
#[allow(clippy::suboptimal_flops)]
pub fn blend(c1: Color, c2: Color, ratio: f64) -> Color {
    let mix = |a: u8, b: u8| f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio;
    Color::from_channels(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}
