//! Command-line interface for `swatch`.
//!
//! # Examples
//!
//! ```bash
//! # Derive a theme and print it as CSS custom properties
//! swatch derive --primary '#667eea' --background '#ffffff' --text-primary '#1a1a1a' --format css
//!
//! # Check one pair
//! swatch validate '#777777' '#ffffff'
//!
//! # Gate CI on the derived theme (exit status 1 on any failure)
//! swatch audit --settings brand.toml
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tincture::{Color, Harmony};

/// Derive, validate, and audit accessible color themes.
#[derive(Parser, Debug, Clone)]
#[command(name = "swatch", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive a full theme from the three critical colors
    Derive(DeriveArgs),

    /// Check a foreground/background pair against WCAG AA
    Validate(ValidateArgs),

    /// Print the contrast ratio of two colors
    Contrast(ContrastArgs),

    /// Print colors harmonious with a base color
    Harmony(HarmonyArgs),

    /// Derive a theme and check every enforced token
    Audit(AuditArgs),
}

/// The three critical colors, from flags, environment, or a settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct CriticalArgs {
    /// Primary brand color
    #[arg(long, env = "SWATCH_PRIMARY")]
    pub primary: Option<String>,

    /// Page background color
    #[arg(long, env = "SWATCH_BACKGROUND")]
    pub background: Option<String>,

    /// Primary text color
    #[arg(long, env = "SWATCH_TEXT_PRIMARY")]
    pub text_primary: Option<String>,

    /// Settings file (JSON or TOML) holding primary, background, and textPrimary
    ///
    /// Flags and environment variables override values from the file
    #[arg(long, short = 's')]
    pub settings: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub critical: CriticalArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t, env = "SWATCH_FORMAT")]
    pub format: OutputFormat,

    /// Write the theme to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Text color
    pub foreground: Color,

    /// Color the text sits on
    pub background: Color,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ContrastArgs {
    pub first: Color,
    pub second: Color,
}

#[derive(Args, Debug, Clone)]
pub struct HarmonyArgs {
    /// Base color
    pub base: Color,

    /// complementary, analogous, or triadic
    pub kind: Harmony,
}

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub critical: CriticalArgs,

    /// Print the audit as JSON
    #[arg(long)]
    pub json: bool,
}

/// Theme output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON keyed by token name
    #[default]
    Json,
    /// TOML keyed by token name
    Toml,
    /// CSS custom properties on :root
    Css,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
