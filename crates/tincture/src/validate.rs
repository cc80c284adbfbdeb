//! Contrast validation, replacement suggestions, and theme audits.
//!
//! A failing pair is not an error: [`validate`] grades it `FAIL`, explains
//! why in `warnings`, and proposes black or white as a replacement.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{Color, ParseColorError};
use crate::contrast::{AA_MIN_RATIO, ContrastLevel, contrast_color};
use crate::theme::{CriticalColors, Theme};
use crate::token::{ImportanceTier, Pairing, Token};

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub contrast_ratio: f64,
    pub level: ContrastLevel,
    pub warnings: Vec<String>,
    pub suggestions: Vec<Color>,
}

/// Check `foreground` on `background` against the WCAG AA floor.
///
/// On failure the result carries two warnings (the measured ratio, then
/// the suggested replacement and its grade) and one suggestion:
/// [`contrast_color`] of the background.
///
/// ```rust
/// use tincture::{validate, Color, ContrastLevel};
///
/// let result = validate(Color::parse("#777777").unwrap(), Color::WHITE);
/// assert!(!result.is_valid);
/// assert_eq!(result.level, ContrastLevel::Fail);
/// assert_eq!(result.suggestions, [Color::BLACK]);
/// ```
pub fn validate(foreground: Color, background: Color) -> ValidationResult {
    let ratio = foreground.contrast_ratio(background);
    let level = ContrastLevel::from_ratio(ratio);
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if level.passes() {
        debug!(
            tincture.foreground = %foreground,
            tincture.background = %background,
            tincture.contrast_ratio = ratio,
            tincture.level = %level,
            "Contrast check passed"
        );
    } else {
        warn!(
            tincture.foreground = %foreground,
            tincture.background = %background,
            tincture.contrast_ratio = ratio,
            "Contrast below WCAG AA"
        );
        warnings.push(format!(
            "Contrast ratio {ratio:.2}:1 is below the WCAG AA minimum of {AA_MIN_RATIO}:1"
        ));
        let suggestion = contrast_color(background);
        let suggested_ratio = suggestion.contrast_ratio(background);
        warnings.push(format!(
            "Use {suggestion} instead to reach {} ({suggested_ratio:.2}:1)",
            ContrastLevel::from_ratio(suggested_ratio)
        ));
        suggestions.push(suggestion);
    }

    ValidationResult {
        is_valid: ratio >= AA_MIN_RATIO,
        contrast_ratio: ratio,
        level,
        warnings,
        suggestions,
    }
}

/// [`validate`] for hex strings.
///
/// # Errors
/// Returns the parse error of whichever color is invalid, foreground first.
pub fn validate_hex(foreground: &str, background: &str) -> Result<ValidationResult, ParseColorError> {
    Ok(validate(Color::parse(foreground)?, Color::parse(background)?))
}

impl Pairing {
    /// The critical token this pairing is measured against.
    pub const fn partner(self) -> Token {
        match self {
            Self::OnBackground => Token::Background,
            Self::BehindText => Token::TextPrimary,
            Self::OnPrimary => Token::Primary,
        }
    }

    /// The partner's color among `critical`.
    ///
    /// Fills (`BehindText`) are measured against textPrimary only. A fill is
    /// a lightness step off background, so against background it sits near
    /// 1:1 and would never clear the floor.
    pub const fn partner_color(self, critical: &CriticalColors) -> Color {
        match self {
            Self::OnBackground => critical.background,
            Self::BehindText => critical.text_primary,
            Self::OnPrimary => critical.primary,
        }
    }

    /// Validate `color` against its partner, with text as the foreground.
    pub fn check(self, color: Color, partner: Color) -> ValidationResult {
        match self {
            // a fill is the background; primary text sits on it
            Self::BehindText => validate(partner, color),
            Self::OnBackground | Self::OnPrimary => validate(color, partner),
        }
    }
}

/// Acceptable values for a token of `tier` whose proposed color is
/// `candidate`.
///
/// CRITICAL and LOW tokens are returned unchanged. HIGH and MEDIUM tokens
/// are checked against the critical color `pairing` names; a candidate that
/// misses the 4.5:1 floor is still returned, unvalidated, so the result is
/// never empty.
pub fn valid_color_range(
    candidate: Color,
    tier: ImportanceTier,
    pairing: Pairing,
    critical: &CriticalColors,
) -> Vec<Color> {
    if tier.is_enforced() {
        let partner = pairing.partner_color(critical);
        let ratio = candidate.contrast_ratio(partner);
        if ratio < AA_MIN_RATIO {
            warn!(
                tincture.candidate = %candidate,
                tincture.tier = %tier,
                tincture.partner = %partner,
                tincture.contrast_ratio = ratio,
                "Accepting candidate without contrast validation"
            );
        }
    }
    vec![candidate]
}

impl Token {
    /// [`valid_color_range`] with this token's tier and pairing.
    pub fn valid_color_range(self, candidate: Color, critical: &CriticalColors) -> Vec<Color> {
        valid_color_range(candidate, self.tier(), self.pairing(), critical)
    }
}

/// Contrast check of one derived token against its pairing partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAudit {
    pub token: Token,
    pub partner: Token,
    pub result: ValidationResult,
}

impl TokenAudit {
    pub const fn passed(&self) -> bool {
        self.result.is_valid
    }
}

/// Check every HIGH and MEDIUM token of `theme`, in token order.
pub fn audit_theme(theme: &Theme) -> Vec<TokenAudit> {
    let audits: Vec<TokenAudit> = Token::ALL
        .into_iter()
        .filter(|token| token.tier().is_enforced())
        .map(|token| {
            let pairing = token.pairing();
            let partner = pairing.partner();
            TokenAudit {
                token,
                partner,
                result: pairing.check(theme.get(token), theme.get(partner)),
            }
        })
        .collect();
    debug!(
        tincture.checked = audits.len(),
        tincture.failed = audits.iter().filter(|a| !a.passed()).count(),
        "Audited theme"
    );
    audits
}
