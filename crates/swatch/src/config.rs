//! Resolved critical colors for `derive` and `audit`.
//!
//! Precedence, highest first:
//! 1. command-line flags
//! 2. `SWATCH_*` environment variables (clap folds these into the flags)
//! 3. the `--settings` file

use std::path::Path;

use thiserror::Error;
use tincture::{CriticalColors, CriticalField, CriticalInput, ThemeLoadError};
use tracing::debug;

use crate::cli::CriticalArgs;

/// Error resolving the critical colors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing {field} color (pass --{flag} or set it in a settings file)")]
    Missing {
        field: CriticalField,
        flag: &'static str,
    },
    #[error("failed to load settings from {path}: {source}")]
    Settings {
        path: String,
        source: ThemeLoadError,
    },
}

const fn flag_name(field: CriticalField) -> &'static str {
    match field {
        CriticalField::Primary => "primary",
        CriticalField::Background => "background",
        CriticalField::TextPrimary => "text-primary",
    }
}

/// Merge flags over the settings file.
///
/// The result is still unparsed: an invalid color surfaces from
/// [`tincture::derive_theme`] with the field it came from.
///
/// # Errors
/// Returns [`ConfigError`] if the settings file cannot be loaded or a color
/// is given nowhere.
pub fn resolve_critical(args: &CriticalArgs) -> Result<CriticalInput, ConfigError> {
    let stored = match &args.settings {
        Some(path) => Some(load_settings(path)?),
        None => None,
    };
    let pick = |flag: &Option<String>, field: CriticalField| -> Result<String, ConfigError> {
        flag.clone()
            .or_else(|| stored.map(|colors| colors.get(field).hex()))
            .ok_or(ConfigError::Missing {
                field,
                flag: flag_name(field),
            })
    };
    Ok(CriticalInput {
        primary: pick(&args.primary, CriticalField::Primary)?,
        background: pick(&args.background, CriticalField::Background)?,
        text_primary: pick(&args.text_primary, CriticalField::TextPrimary)?,
    })
}

fn load_settings(path: &Path) -> Result<CriticalColors, ConfigError> {
    debug!(swatch.settings = %path.display(), "Loading settings file");
    CriticalColors::from_file(path).map_err(|source| ConfigError::Settings {
        path: path.display().to_string(),
        source,
    })
}
