//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Luminance linearizes each sRGB channel with the WCAG breakpoint of
//! `0.03928` and weights the channels by `0.2126 / 0.7152 / 0.0722`. The
//! contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, always in
//! `[1, 21]` and symmetric in its arguments.
//!
//! ```rust
//! use tincture::contrast::{contrast_ratio, ContrastLevel};
//!
//! let ratio = contrast_ratio("#000000", "#ffffff");
//! assert!((ratio - 21.0).abs() < 1e-9);
//! assert_eq!(ContrastLevel::from_ratio(ratio), ContrastLevel::Aaa);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Minimum contrast for WCAG AA normal text.
pub const AA_MIN_RATIO: f64 = 4.5;

/// Minimum contrast for WCAG AAA normal text.
pub const AAA_MIN_RATIO: f64 = 7.0;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// WCAG relative luminance in `[0, 1]`.
    #[allow(clippy::suboptimal_flops)]
    pub fn relative_luminance(self) -> f64 {
        RED_WEIGHT * linearize(self.r())
            + GREEN_WEIGHT * linearize(self.g())
            + BLUE_WEIGHT * linearize(self.b())
    }

    /// WCAG contrast ratio against `other`, in `[1, 21]`.
    pub fn contrast_ratio(self, other: Color) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let lighter = a.max(b);
        let darker = a.min(b);
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Relative luminance of a hex color; `0.0` if `hex` cannot be parsed.
pub fn luminance(hex: &str) -> f64 {
    Color::parse(hex).map_or(0.0, Color::relative_luminance)
}

/// Contrast ratio between two hex colors.
///
/// An unparsable color counts as luminance `0.0`, the same as black.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// WCAG conformance grade of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Ratio >= 7.0.
    #[serde(rename = "AAA")]
    Aaa,
    /// Ratio in `[4.5, 7.0)`.
    #[serde(rename = "AA")]
    Aa,
    /// Ratio < 4.5.
    #[serde(rename = "FAIL")]
    Fail,
}

impl ContrastLevel {
    /// Grade a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_MIN_RATIO {
            Self::Aaa
        } else if ratio >= AA_MIN_RATIO {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    /// Whether the grade clears the AA floor.
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "FAIL",
        };
        f.write_str(label)
    }
}

/// Black or white, whichever contrasts more with `background`.
///
/// Backgrounds with luminance above 0.5 always get black. The crossover
/// sits near luminance 0.179, so the winner always reaches at least
/// ~4.58:1 against `background`.
///
/// Mid-tones between luminance ~0.179 and 0.5 also get black: `#808080`
/// (~0.216) gets black text, not white.
pub fn contrast_color(background: Color) -> Color {
    if Color::BLACK.contrast_ratio(background) >= Color::WHITE.contrast_ratio(background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// The candidate with the highest contrast against `background`.
///
/// Ties keep the earliest candidate. Returns `None` for an empty slice.
pub fn select_best_contrast(candidates: &[Color], background: Color) -> Option<Color> {
    let mut best: Option<(Color, f64)> = None;
    for &candidate in candidates {
        let ratio = candidate.contrast_ratio(background);
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((candidate, ratio)),
        }
    }
    best.map(|(color, _)| color)
}
