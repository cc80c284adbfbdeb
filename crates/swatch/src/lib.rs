#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! # Swatch
//!
//! Command-line front end for the `tincture` theme engine.
//!
//! Every command is a function from parsed arguments to a [`Report`], so
//! the binary only prints and sets the exit status.

pub mod cli;
pub mod config;

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use tincture::{Theme, TokenAudit, audit_theme, derive_theme, validate};
use tracing::info;

use cli::{AuditArgs, Cli, Command, ContrastArgs, DeriveArgs, HarmonyArgs, OutputFormat, ValidateArgs};
use config::resolve_critical;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Text for stdout.
    pub output: String,
    /// False when the command wants a non-zero exit status.
    pub success: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Run the selected subcommand.
pub fn run(cli: &Cli) -> Result<Report> {
    match &cli.command {
        Command::Derive(args) => derive(args),
        Command::Validate(args) => validate_pair(args),
        Command::Contrast(args) => Ok(contrast(args)),
        Command::Harmony(args) => Ok(harmony(args)),
        Command::Audit(args) => audit(args),
    }
}

fn derived_theme(critical: &cli::CriticalArgs) -> Result<Theme> {
    let input = resolve_critical(critical)?;
    let theme = derive_theme(&input).context("cannot derive theme")?;
    Ok(theme)
}

/// Render `theme` in `format`.
pub fn render_theme(theme: &Theme, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = theme.to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Toml => theme.to_toml()?,
        OutputFormat::Css => theme.to_css_variables(),
    };
    Ok(rendered)
}

fn derive(args: &DeriveArgs) -> Result<Report> {
    let theme = derived_theme(&args.critical)?;
    let rendered = render_theme(&theme, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(swatch.output = %path.display(), "Wrote theme");
            Ok(Report::ok(String::new()))
        }
        None => Ok(Report::ok(rendered)),
    }
}

fn validate_pair(args: &ValidateArgs) -> Result<Report> {
    let result = validate(args.foreground, args.background);
    if args.json {
        return Ok(Report::ok(serde_json::to_string_pretty(&result)? + "\n"));
    }

    let mut out = String::new();
    let _ = writeln!(out, "contrast: {:.2}:1", result.contrast_ratio);
    let _ = writeln!(out, "level: {}", result.level);
    let _ = writeln!(out, "valid: {}", if result.is_valid { "yes" } else { "no" });
    for warning in &result.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    for suggestion in &result.suggestions {
        let _ = writeln!(out, "suggestion: {suggestion}");
    }
    Ok(Report::ok(out))
}

fn contrast(args: &ContrastArgs) -> Report {
    Report::ok(format!("{:.2}\n", args.first.contrast_ratio(args.second)))
}

fn harmony(args: &HarmonyArgs) -> Report {
    let mut out = String::new();
    for color in args.base.harmonies(args.kind) {
        let _ = writeln!(out, "{color}");
    }
    Report::ok(out)
}

fn audit(args: &AuditArgs) -> Result<Report> {
    let theme = derived_theme(&args.critical)?;
    let audits = audit_theme(&theme);
    let success = audits.iter().all(TokenAudit::passed);
    let output = if args.json {
        serde_json::to_string_pretty(&audits)? + "\n"
    } else {
        audit_table(&audits)
    };
    Ok(Report { output, success })
}

/// One line per audited token, then a summary line.
pub fn audit_table(audits: &[TokenAudit]) -> String {
    let mut out = String::new();
    for audit in audits {
        let _ = writeln!(
            out,
            "{:<20} {:<12} {:>6.2}:1  {:<4}  {}",
            audit.token.name(),
            audit.partner.name(),
            audit.result.contrast_ratio,
            audit.result.level.to_string(),
            if audit.passed() { "ok" } else { "FAIL" }
        );
    }
    let failed = audits.iter().filter(|audit| !audit.passed()).count();
    let _ = writeln!(out, "{} checked, {} failed", audits.len(), failed);
    out
}
