//! Color-wheel harmonies.
//!
//! Every harmony keeps the base color's saturation and lightness and only
//! rotates its hue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::color::Color;

/// A color-wheel relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// One color opposite the base: `+180°`.
    Complementary,
    /// Two neighbours of the base: `+30°`, then `-30°`.
    Analogous,
    /// Two colors splitting the wheel in thirds: `+120°`, then `+240°`.
    Triadic,
}

impl Harmony {
    pub const ALL: [Harmony; 3] = [Self::Complementary, Self::Analogous, Self::Triadic];

    /// Hue offsets in degrees, in output order.
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[30.0, -30.0],
            Self::Triadic => &[120.0, 240.0],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown harmony name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown harmony '{0}' (expected complementary, analogous, or triadic)")]
pub struct ParseHarmonyError(pub String);

impl FromStr for Harmony {
    type Err = ParseHarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" => Ok(Self::Triadic),
            _ => Err(ParseHarmonyError(s.to_string())),
        }
    }
}

impl Color {
    /// Colors related to `self` by `kind`.
    pub fn harmonies(self, kind: Harmony) -> Vec<Color> {
        let hsl = self.to_hsl();
        let colors: Vec<Color> = kind
            .offsets()
            .iter()
            .map(|&offset| Color::from_hsl(hsl.rotate(offset)))
            .collect();
        trace!(
            tincture.base = %self,
            tincture.harmony = %kind,
            tincture.count = colors.len(),
            "Generated harmony"
        );
        colors
    }
}

/// Colors related to the hex color `base` by `kind`.
///
/// Returns an empty list if `base` cannot be parsed.
pub fn harmonious_colors(base: &str, kind: Harmony) -> Vec<Color> {
    Color::parse(base).map_or_else(|_| Vec::new(), |color| color.harmonies(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.hex()).collect()
    }

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let colors = harmonious_colors("#ff0000", Harmony::Complementary);
        assert_eq!(hexes(&colors), ["#00ffff"]);
        let hue = colors[0].to_hsl().h;
        assert!((hue - 180.0).abs() <= 1.0, "hue: {hue}");
    }

    #[test]
    fn test_analogous_order() {
        let colors = harmonious_colors("#ff0000", Harmony::Analogous);
        assert_eq!(hexes(&colors), ["#ff8000", "#ff0080"]);
    }

    #[test]
    fn test_triadic_of_red() {
        let colors = harmonious_colors("#ff0000", Harmony::Triadic);
        assert_eq!(hexes(&colors), ["#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_brand_color_harmonies() {
        assert_eq!(
            hexes(&harmonious_colors("#667eea", Harmony::Analogous)),
            ["#9066ea", "#66c0ea"]
        );
        assert_eq!(
            hexes(&harmonious_colors("#667eea", Harmony::Complementary)),
            ["#ead266"]
        );
    }

    #[test]
    fn test_preserves_saturation_and_lightness() {
        let base = Color::parse("#667eea").unwrap().to_hsl();
        for color in harmonious_colors("#667eea", Harmony::Triadic) {
            let hsl = color.to_hsl();
            assert!((hsl.s - base.s).abs() < 1.5, "saturation drifted: {}", hsl.s);
            assert!((hsl.l - base.l).abs() < 0.5, "lightness drifted: {}", hsl.l);
        }
    }

    #[test]
    fn test_gray_has_no_visible_rotation() {
        let colors = harmonious_colors("#808080", Harmony::Analogous);
        assert_eq!(hexes(&colors), ["#808080", "#808080"]);
    }

    #[test]
    fn test_unparsable_base_is_empty() {
        assert!(harmonious_colors("notacolor", Harmony::Complementary).is_empty());
        assert!(harmonious_colors("", Harmony::Triadic).is_empty());
    }

    #[test]
    fn test_harmony_from_str() {
        assert_eq!("triadic".parse::<Harmony>(), Ok(Harmony::Triadic));
        assert_eq!(" Analogous ".parse::<Harmony>(), Ok(Harmony::Analogous));
        assert_eq!(
            "square".parse::<Harmony>(),
            Err(ParseHarmonyError("square".to_string()))
        );
    }

    #[test]
    fn test_harmony_serde_lowercase() {
        let json = serde_json::to_string(&Harmony::Complementary).unwrap();
        assert_eq!(json, "\"complementary\"");
        for kind in Harmony::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
