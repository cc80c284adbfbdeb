//! Semantic theme tokens and their importance tiers.
//!
//! The token → tier → pairing mapping is fixed and total: every token has
//! exactly one entry in [`TOKEN_TABLE`], and callers cannot change it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How strictly a token's contrast is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportanceTier {
    /// Supplied by the caller and never altered.
    Critical,
    /// Derived; must clear 4.5:1 against its pairing partner.
    High,
    /// Derived; must clear 4.5:1 against its pairing partner.
    Medium,
    /// Derived; decorative, no enforced floor.
    Low,
}

impl ImportanceTier {
    /// Whether derived tokens of this tier carry a contrast floor.
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }
}

impl fmt::Display for ImportanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// Which critical color a token is expected to sit against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pairing {
    /// Drawn on the page background.
    OnBackground,
    /// A fill that primary text is drawn on.
    BehindText,
    /// Drawn on the primary brand color.
    OnPrimary,
}

/// Named token slots of a [`Theme`](crate::Theme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Token {
    Primary,
    Secondary,
    Accent,
    Background,
    BackgroundSecondary,
    Surface,
    SurfaceHover,
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,
    Border,
    BorderLight,
    BorderDark,
    Link,
    LinkHover,
    ButtonPrimary,
    ButtonSecondary,
    ButtonText,
    Success,
    Error,
    Warning,
    Info,
}

/// One row of the fixed token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub token: Token,
    pub name: &'static str,
    pub tier: ImportanceTier,
    pub pairing: Pairing,
}

const fn row(token: Token, name: &'static str, tier: ImportanceTier, pairing: Pairing) -> TokenSpec {
    TokenSpec {
        token,
        name,
        tier,
        pairing,
    }
}

use ImportanceTier::{Critical, High, Low, Medium};
use Pairing::{BehindText, OnBackground, OnPrimary};

/// Every token, in theme order, with its name, tier, and pairing.
pub static TOKEN_TABLE: [TokenSpec; 23] = [
    row(Token::Primary, "primary", Critical, OnBackground),
    row(Token::Secondary, "secondary", High, OnBackground),
    row(Token::Accent, "accent", Medium, OnBackground),
    row(Token::Background, "background", Critical, BehindText),
    row(Token::BackgroundSecondary, "backgroundSecondary", High, BehindText),
    row(Token::Surface, "surface", High, BehindText),
    row(Token::SurfaceHover, "surfaceHover", Low, BehindText),
    row(Token::TextPrimary, "textPrimary", Critical, OnBackground),
    row(Token::TextSecondary, "textSecondary", High, OnBackground),
    row(Token::TextMuted, "textMuted", Medium, OnBackground),
    row(Token::TextInverse, "textInverse", High, OnBackground),
    row(Token::Border, "border", Low, OnBackground),
    row(Token::BorderLight, "borderLight", Low, OnBackground),
    row(Token::BorderDark, "borderDark", Low, OnBackground),
    row(Token::Link, "link", High, OnBackground),
    row(Token::LinkHover, "linkHover", Medium, OnBackground),
    row(Token::ButtonPrimary, "buttonPrimary", Low, BehindText),
    row(Token::ButtonSecondary, "buttonSecondary", Low, BehindText),
    row(Token::ButtonText, "buttonText", High, OnPrimary),
    row(Token::Success, "success", Medium, OnBackground),
    row(Token::Error, "error", Medium, OnBackground),
    row(Token::Warning, "warning", Medium, OnBackground),
    row(Token::Info, "info", Medium, OnBackground),
];

impl Token {
    /// All tokens in theme order.
    pub const ALL: [Token; 23] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::BackgroundSecondary,
        Self::Surface,
        Self::SurfaceHover,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextMuted,
        Self::TextInverse,
        Self::Border,
        Self::BorderLight,
        Self::BorderDark,
        Self::Link,
        Self::LinkHover,
        Self::ButtonPrimary,
        Self::ButtonSecondary,
        Self::ButtonText,
        Self::Success,
        Self::Error,
        Self::Warning,
        Self::Info,
    ];

    /// This token's row of [`TOKEN_TABLE`].
    pub fn spec(self) -> &'static TokenSpec {
        // Table rows follow the enum's declaration order.
        &TOKEN_TABLE[self as usize]
    }

    /// camelCase name, as used by the settings store.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn tier(self) -> ImportanceTier {
        self.spec().tier
    }

    pub fn pairing(self) -> Pairing {
        self.spec().pairing
    }

    /// kebab-case name, as used for CSS custom properties.
    pub fn css_name(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 4);
        for ch in self.name().chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown token name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme token '{0}'")]
pub struct ParseTokenError(pub String);

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOKEN_TABLE
            .iter()
            .find(|row| row.name == s)
            .map(|row| row.token)
            .ok_or_else(|| ParseTokenError(s.to_string()))
    }
}
