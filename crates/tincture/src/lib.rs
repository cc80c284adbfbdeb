#![forbid(unsafe_code)]
// Allow these clippy lints for color math and API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]

//! # Tincture
//!
//! Derives a complete, accessible UI color theme from three brand colors and
//! checks color pairs against WCAG 2.x contrast thresholds.
//!
//! - **Colors**: hex parsing, RGB ↔ HSL, lightness scaling and blending
//! - **Contrast**: relative luminance, contrast ratio, AA/AAA grading
//! - **Harmonies**: complementary, analogous, and triadic hue rotations
//! - **Themes**: 23 semantic tokens derived from primary, background, and text
//! - **Validation**: pass/fail verdicts with a black-or-white suggestion
//!
//! Every operation is a pure function of its inputs. Nothing is cached or
//! shared, so all of it is safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture::{derive_theme, validate, CriticalInput, ContrastLevel, Token};
//!
//! let theme = derive_theme(&CriticalInput::new("#667eea", "#ffffff", "#1a1a1a")).unwrap();
//! assert_eq!(theme.get(Token::BackgroundSecondary).hex(), "#f2f2f2");
//!
//! let result = validate(theme.text_primary, theme.background);
//! assert!(result.is_valid);
//! assert_eq!(result.level, ContrastLevel::Aaa);
//! ```
//!
//! ## Failing pairs
//!
//! A pair below 4.5:1 is reported, not rejected:
//!
//! ```rust
//! use tincture::{validate_hex, Color};
//!
//! let result = validate_hex("#777777", "#ffffff").unwrap();
//! assert!(!result.is_valid);
//! assert_eq!(result.suggestions, [Color::BLACK]);
//! assert_eq!(result.warnings.len(), 2);
//! ```

pub mod color;
pub mod contrast;
pub mod harmony;
pub mod settings;
pub mod theme;
pub mod token;
pub mod validate;

// Re-exports
pub use color::{
    Color, Hsl, ParseColorError, adjust_lightness, blend, hex_to_hsl, hex_to_rgb, hsl_to_hex,
    rgb_to_hex,
};
pub use contrast::{
    AA_MIN_RATIO, AAA_MIN_RATIO, ContrastLevel, contrast_color, contrast_ratio, luminance,
    select_best_contrast,
};
pub use harmony::{Harmony, ParseHarmonyError, harmonious_colors};
pub use settings::{ThemeLoadError, ThemeSaveError};
pub use theme::{
    CriticalColors, CriticalField, CriticalInput, DERIVATION, DerivationConstants, Theme,
    ThemeBuilder, ThemeError, derive_theme,
};
pub use token::{ImportanceTier, Pairing, ParseTokenError, TOKEN_TABLE, Token, TokenSpec};
pub use validate::{
    TokenAudit, ValidationResult, audit_theme, valid_color_range, validate, validate_hex,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Color, Hsl};
    pub use crate::contrast::ContrastLevel;
    pub use crate::harmony::Harmony;
    pub use crate::theme::{CriticalColors, CriticalInput, Theme, derive_theme};
    pub use crate::token::{ImportanceTier, Pairing, Token};
    pub use crate::validate::{ValidationResult, audit_theme, validate};
}
