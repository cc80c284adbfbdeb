//! Theme derivation from three critical colors.
//!
//! A [`Theme`] maps every [`Token`] to a [`Color`]. Callers supply the
//! three critical colors (primary brand color, page background, primary
//! text); everything else is derived from them:
//!
//! | token | derivation |
//! |---|---|
//! | `secondary` | analogous variant of primary with the best contrast on background |
//! | `accent` | complementary variant of primary |
//! | `backgroundSecondary` / `surface` / `surfaceHover` | background lightness × 0.95 / 1.05 / 0.9 |
//! | `textSecondary` / `textMuted` | text lightness × 0.7 / 0.5 |
//! | `textInverse` | black or white, whichever contrasts more with background |
//! | `border` | 20% mix from background toward text |
//! | `borderLight` / `borderDark` | border lightness × 1.2 / 0.8 |
//! | `link` / `linkHover` | primary / primary lightness × 0.8 |
//! | `buttonPrimary` / `buttonSecondary` | primary / secondary |
//! | `buttonText` | black or white, whichever contrasts more with primary |
//! | status colors | fixed |
//!
//! Derivation is all-or-nothing: an unparsable critical color fails the
//! whole call and names the offending field.
//!
//! # Example
//!
//! ```rust
//! use tincture::{derive_theme, CriticalInput, Token};
//!
//! let theme = derive_theme(&CriticalInput::new("#667eea", "#ffffff", "#1a1a1a")).unwrap();
//! assert_eq!(theme.get(Token::Link).hex(), "#667eea");
//! assert_eq!(theme.get(Token::TextInverse).hex(), "#000000");
//! ```

use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::color::{Color, ParseColorError, adjust_lightness, blend};
use crate::contrast::{contrast_color, select_best_contrast};
use crate::harmony::Harmony;
use crate::token::Token;

/// Fixed constants used by [`derive_theme`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationConstants {
    /// `secondary` when no analogous variant can be generated.
    pub fallback_secondary: Color,
    /// `accent` when no complementary variant can be generated.
    pub fallback_accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub background_secondary_lightness: f64,
    pub surface_lightness: f64,
    pub surface_hover_lightness: f64,
    pub text_secondary_lightness: f64,
    pub text_muted_lightness: f64,
    /// Share of text color mixed into the background for `border`.
    pub border_mix: f64,
    pub border_light_lightness: f64,
    pub border_dark_lightness: f64,
    pub link_hover_lightness: f64,
}

/// The derivation table. Never mutated.
pub const DERIVATION: DerivationConstants = DerivationConstants {
    fallback_secondary: Color::rgb(0x76, 0x4b, 0xa2),
    fallback_accent: Color::rgb(0x4f, 0xac, 0xfe),
    success: Color::rgb(0x10, 0xb9, 0x81),
    error: Color::rgb(0xef, 0x44, 0x44),
    warning: Color::rgb(0xf5, 0x9e, 0x0b),
    info: Color::rgb(0x3b, 0x82, 0xf6),
    background_secondary_lightness: 0.95,
    surface_lightness: 1.05,
    surface_hover_lightness: 0.9,
    text_secondary_lightness: 0.7,
    text_muted_lightness: 0.5,
    border_mix: 0.2,
    border_light_lightness: 1.2,
    border_dark_lightness: 0.8,
    link_hover_lightness: 0.8,
};

/// One of the three caller-supplied color fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriticalField {
    Primary,
    Background,
    TextPrimary,
}

impl CriticalField {
    pub const fn token(self) -> Token {
        match self {
            Self::Primary => Token::Primary,
            Self::Background => Token::Background,
            Self::TextPrimary => Token::TextPrimary,
        }
    }
}

impl fmt::Display for CriticalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().name())
    }
}

/// Error deriving or assembling a theme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid {field} color: {source}")]
    InvalidCritical {
        field: CriticalField,
        source: ParseColorError,
    },
    #[error("theme token '{0}' was never set")]
    MissingToken(Token),
}

impl ThemeError {
    /// The critical field that failed, if any.
    pub const fn field(&self) -> Option<CriticalField> {
        match self {
            Self::InvalidCritical { field, .. } => Some(*field),
            Self::MissingToken(_) => None,
        }
    }
}

/// The three critical colors as unparsed strings, as a settings store holds
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriticalInput {
    pub primary: String,
    pub background: String,
    pub text_primary: String,
}

impl CriticalInput {
    pub fn new(
        primary: impl Into<String>,
        background: impl Into<String>,
        text_primary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            background: background.into(),
            text_primary: text_primary.into(),
        }
    }

    /// Parse all three colors, reporting the first invalid field in the
    /// order primary, background, textPrimary.
    ///
    /// # Errors
    /// Returns [`ThemeError::InvalidCritical`] naming the field that failed.
    pub fn parse(&self) -> Result<CriticalColors, ThemeError> {
        let parse = |field: CriticalField, value: &str| {
            Color::parse(value).map_err(|source| {
                warn!(
                    tincture.field = %field,
                    tincture.value = value,
                    "Rejected critical color"
                );
                ThemeError::InvalidCritical { field, source }
            })
        };
        Ok(CriticalColors {
            primary: parse(CriticalField::Primary, &self.primary)?,
            background: parse(CriticalField::Background, &self.background)?,
            text_primary: parse(CriticalField::TextPrimary, &self.text_primary)?,
        })
    }
}

impl From<CriticalColors> for CriticalInput {
    fn from(colors: CriticalColors) -> Self {
        Self::new(
            colors.primary.hex(),
            colors.background.hex(),
            colors.text_primary.hex(),
        )
    }
}

/// The three parsed critical colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalColors {
    pub primary: Color,
    pub background: Color,
    pub text_primary: Color,
}

impl CriticalColors {
    pub const fn new(primary: Color, background: Color, text_primary: Color) -> Self {
        Self {
            primary,
            background,
            text_primary,
        }
    }

    /// The critical color behind `field`.
    pub const fn get(&self, field: CriticalField) -> Color {
        match field {
            CriticalField::Primary => self.primary,
            CriticalField::Background => self.background,
            CriticalField::TextPrimary => self.text_primary,
        }
    }
}

/// A fully populated set of theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub background_secondary: Color,
    pub surface: Color,
    pub surface_hover: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,
    pub border: Color,
    pub border_light: Color,
    pub border_dark: Color,
    pub link: Color,
    pub link_hover: Color,
    pub button_primary: Color,
    pub button_secondary: Color,
    pub button_text: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Theme {
    /// Derive a theme from already-parsed critical colors.
    ///
    /// # Errors
    /// Returns [`ThemeError::MissingToken`] only if a derivation step left a
    /// token unset.
    pub fn derive(critical: CriticalColors) -> Result<Self, ThemeError> {
        let CriticalColors {
            primary,
            background,
            text_primary,
        } = critical;
        let k = &DERIVATION;

        debug!(
            tincture.primary = %primary,
            tincture.background = %background,
            tincture.text_primary = %text_primary,
            "Deriving theme"
        );

        let mut builder = ThemeBuilder::new()
            .set(Token::Primary, primary)
            .set(Token::Background, background)
            .set(Token::TextPrimary, text_primary);

        let secondary = select_best_contrast(&primary.harmonies(Harmony::Analogous), background)
            .unwrap_or(k.fallback_secondary);
        let accent = primary
            .harmonies(Harmony::Complementary)
            .first()
            .copied()
            .unwrap_or(k.fallback_accent);
        trace!(tincture.secondary = %secondary, tincture.accent = %accent, "Derived brand colors");
        builder = builder
            .set(Token::Secondary, secondary)
            .set(Token::Accent, accent);

        builder = builder
            .set(
                Token::BackgroundSecondary,
                adjust_lightness(background, k.background_secondary_lightness),
            )
            .set(Token::Surface, adjust_lightness(background, k.surface_lightness))
            .set(
                Token::SurfaceHover,
                adjust_lightness(background, k.surface_hover_lightness),
            );

        builder = builder
            .set(
                Token::TextSecondary,
                adjust_lightness(text_primary, k.text_secondary_lightness),
            )
            .set(
                Token::TextMuted,
                adjust_lightness(text_primary, k.text_muted_lightness),
            )
            .set(Token::TextInverse, contrast_color(background));

        let border = blend(background, text_primary, k.border_mix);
        trace!(tincture.border = %border, "Derived border");
        builder = builder
            .set(Token::Border, border)
            .set(
                Token::BorderLight,
                adjust_lightness(border, k.border_light_lightness),
            )
            .set(
                Token::BorderDark,
                adjust_lightness(border, k.border_dark_lightness),
            );

        builder = builder
            .set(Token::Link, primary)
            .set(
                Token::LinkHover,
                adjust_lightness(primary, k.link_hover_lightness),
            )
            .set(Token::ButtonPrimary, primary)
            .set(Token::ButtonSecondary, secondary)
            .set(Token::ButtonText, contrast_color(primary));

        let theme = builder
            .set(Token::Success, k.success)
            .set(Token::Error, k.error)
            .set(Token::Warning, k.warning)
            .set(Token::Info, k.info)
            .build()?;

        debug!(tincture.tokens = Token::ALL.len(), "Derived theme");
        Ok(theme)
    }

    /// The color of `token`.
    pub const fn get(&self, token: Token) -> Color {
        match token {
            Token::Primary => self.primary,
            Token::Secondary => self.secondary,
            Token::Accent => self.accent,
            Token::Background => self.background,
            Token::BackgroundSecondary => self.background_secondary,
            Token::Surface => self.surface,
            Token::SurfaceHover => self.surface_hover,
            Token::TextPrimary => self.text_primary,
            Token::TextSecondary => self.text_secondary,
            Token::TextMuted => self.text_muted,
            Token::TextInverse => self.text_inverse,
            Token::Border => self.border,
            Token::BorderLight => self.border_light,
            Token::BorderDark => self.border_dark,
            Token::Link => self.link,
            Token::LinkHover => self.link_hover,
            Token::ButtonPrimary => self.button_primary,
            Token::ButtonSecondary => self.button_secondary,
            Token::ButtonText => self.button_text,
            Token::Success => self.success,
            Token::Error => self.error,
            Token::Warning => self.warning,
            Token::Info => self.info,
        }
    }

    /// Every `(token, color)` pair in theme order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, Color)> + '_ {
        Token::ALL.into_iter().map(|token| (token, self.get(token)))
    }

    /// The critical colors this theme was derived from.
    pub const fn critical(&self) -> CriticalColors {
        CriticalColors::new(self.primary, self.background, self.text_primary)
    }

    /// Render the theme as CSS custom properties on `:root`.
    ///
    /// ```rust
    /// use tincture::{derive_theme, CriticalInput};
    ///
    /// let theme = derive_theme(&CriticalInput::new("#667eea", "#ffffff", "#1a1a1a")).unwrap();
    /// let css = theme.to_css_variables();
    /// assert!(css.contains("  --color-background-secondary: #f2f2f2;\n"));
    /// ```
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (token, color) in self.iter() {
            let _ = writeln!(css, "  --color-{}: {};", token.css_name(), color);
        }
        css.push_str("}\n");
        css
    }
}

/// Collects token colors and produces a [`Theme`] only once every token is
/// set.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    slots: [Option<Color>; Token::ALL.len()],
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token, replacing any previous value.
    pub fn set(mut self, token: Token, color: Color) -> Self {
        self.slots[token as usize] = Some(color);
        self
    }

    /// Whether `token` has been set.
    pub fn is_set(&self, token: Token) -> bool {
        self.slots[token as usize].is_some()
    }

    fn take(&self, token: Token) -> Result<Color, ThemeError> {
        self.slots[token as usize].ok_or(ThemeError::MissingToken(token))
    }

    /// Assemble the theme.
    ///
    /// # Errors
    /// Returns [`ThemeError::MissingToken`] for the first unset token in
    /// theme order.
    pub fn build(&self) -> Result<Theme, ThemeError> {
        Ok(Theme {
            primary: self.take(Token::Primary)?,
            secondary: self.take(Token::Secondary)?,
            accent: self.take(Token::Accent)?,
            background: self.take(Token::Background)?,
            background_secondary: self.take(Token::BackgroundSecondary)?,
            surface: self.take(Token::Surface)?,
            surface_hover: self.take(Token::SurfaceHover)?,
            text_primary: self.take(Token::TextPrimary)?,
            text_secondary: self.take(Token::TextSecondary)?,
            text_muted: self.take(Token::TextMuted)?,
            text_inverse: self.take(Token::TextInverse)?,
            border: self.take(Token::Border)?,
            border_light: self.take(Token::BorderLight)?,
            border_dark: self.take(Token::BorderDark)?,
            link: self.take(Token::Link)?,
            link_hover: self.take(Token::LinkHover)?,
            button_primary: self.take(Token::ButtonPrimary)?,
            button_secondary: self.take(Token::ButtonSecondary)?,
            button_text: self.take(Token::ButtonText)?,
            success: self.take(Token::Success)?,
            error: self.take(Token::Error)?,
            warning: self.take(Token::Warning)?,
            info: self.take(Token::Info)?,
        })
    }
}

/// Derive a full theme from the three critical color strings.
///
/// # Errors
/// Returns [`ThemeError::InvalidCritical`] naming the first critical field
/// that is not a valid hex color. No partial theme is ever returned.
pub fn derive_theme(input: &CriticalInput) -> Result<Theme, ThemeError> {
    Theme::derive(input.parse()?)
}
