//! Reading critical colors from, and writing themes to, a settings store.
//!
//! Files are JSON or TOML (YAML with the `yaml` feature), chosen by
//! extension. Field names are the camelCase token names, so a stored theme
//! looks like:
//!
//! ```toml
//! primary = "#667eea"
//! background = "#ffffff"
//! textPrimary = "#1a1a1a"
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::theme::{CriticalColors, CriticalInput, Theme, ThemeError};

/// Error loading critical colors or a theme.
#[derive(Error, Debug)]
pub enum ThemeLoadError {
    #[error("settings JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings TOML is malformed: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "yaml")]
    #[error("settings YAML is malformed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported settings format '{0}' (expected json, toml or yaml)")]
    UnsupportedFormat(String),
    #[error("settings hold an unusable color: {0}")]
    Theme(#[from] ThemeError),
}

/// Error saving a theme.
#[derive(Error, Debug)]
pub enum ThemeSaveError {
    #[error("cannot encode theme as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot encode theme as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
    #[cfg(feature = "yaml")]
    #[error("cannot encode theme as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("cannot write theme: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported theme format '{0}' (expected json, toml or yaml)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Format from a file extension; the unsupported extension otherwise.
    fn of(path: &Path) -> Result<Self, String> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") if cfg!(feature = "yaml") => Ok(Self::Yaml),
            Some("yaml" | "yml") => Err("yaml".into()),
            Some(ext) => Err(ext.into()),
            None => Err("unknown".into()),
        }
    }
}

impl CriticalColors {
    /// Load critical colors from JSON text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or a color is invalid.
    pub fn from_json(json: &str) -> Result<Self, ThemeLoadError> {
        let input: CriticalInput = serde_json::from_str(json)?;
        Ok(input.parse()?)
    }

    /// Load critical colors from TOML text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or a color is invalid.
    pub fn from_toml(toml: &str) -> Result<Self, ThemeLoadError> {
        let input: CriticalInput = toml::from_str(toml)?;
        Ok(input.parse()?)
    }

    /// Load critical colors from YAML text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or a color is invalid.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeLoadError> {
        let input: CriticalInput = serde_yaml::from_str(yaml)?;
        Ok(input.parse()?)
    }

    /// Load critical colors from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if reading, parsing, or color validation
    /// fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        let path = path.as_ref();
        let format = Format::of(path).map_err(ThemeLoadError::UnsupportedFormat)?;
        let content = fs::read_to_string(path)?;
        debug!(tincture.path = %path.display(), "Loading critical colors");
        match format {
            Format::Json => Self::from_json(&content),
            Format::Toml => Self::from_toml(&content),
            #[cfg(feature = "yaml")]
            Format::Yaml => Self::from_yaml(&content),
            #[cfg(not(feature = "yaml"))]
            Format::Yaml => Err(ThemeLoadError::UnsupportedFormat("yaml".into())),
        }
    }
}

impl Theme {
    /// Load a stored theme from JSON text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or any token is missing or
    /// invalid.
    pub fn from_json(json: &str) -> Result<Self, ThemeLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a stored theme from TOML text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or any token is missing or
    /// invalid.
    pub fn from_toml(toml: &str) -> Result<Self, ThemeLoadError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a stored theme from YAML text.
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if parsing fails or any token is missing or
    /// invalid.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a stored theme from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ThemeLoadError` if reading or parsing fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        let path = path.as_ref();
        let format = Format::of(path).map_err(ThemeLoadError::UnsupportedFormat)?;
        let content = fs::read_to_string(path)?;
        match format {
            Format::Json => Self::from_json(&content),
            Format::Toml => Self::from_toml(&content),
            #[cfg(feature = "yaml")]
            Format::Yaml => Self::from_yaml(&content),
            #[cfg(not(feature = "yaml"))]
            Format::Yaml => Err(ThemeLoadError::UnsupportedFormat("yaml".into())),
        }
    }

    /// Pretty JSON, one token per line.
    ///
    /// # Errors
    /// Returns [`ThemeSaveError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ThemeSaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// TOML with one `token = "#rrggbb"` pair per line.
    ///
    /// # Errors
    /// Returns [`ThemeSaveError::Toml`] if encoding fails.
    pub fn to_toml(&self) -> Result<String, ThemeSaveError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// YAML mapping of token names to hex strings.
    ///
    /// # Errors
    /// Returns [`ThemeSaveError::Yaml`] if encoding fails.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String, ThemeSaveError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save this theme to a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ThemeSaveError` if serialization or writing fails.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ThemeSaveError> {
        let path = path.as_ref();
        let content = match Format::of(path).map_err(ThemeSaveError::UnsupportedFormat)? {
            Format::Json => self.to_json()?,
            Format::Toml => self.to_toml()?,
            #[cfg(feature = "yaml")]
            Format::Yaml => self.to_yaml()?,
            #[cfg(not(feature = "yaml"))]
            Format::Yaml => return Err(ThemeSaveError::UnsupportedFormat("yaml".into())),
        };
        debug!(tincture.path = %path.display(), "Saving theme");
        fs::write(path, content).map_err(ThemeSaveError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme::{CriticalField, derive_theme};
    use tempfile::tempdir;

    const TOML_SETTINGS: &str = r##"
primary = "#667eea"
background = "#ffffff"
textPrimary = "#1a1a1a"
"##;

    fn brand() -> Theme {
        derive_theme(&CriticalInput::new("#667eea", "#ffffff", "#1a1a1a")).unwrap()
    }

    #[test]
    fn test_critical_from_toml() {
        let critical = CriticalColors::from_toml(TOML_SETTINGS).unwrap();
        assert_eq!(critical.background, Color::WHITE);
        assert_eq!(critical.text_primary.hex(), "#1a1a1a");
    }

    #[test]
    fn test_critical_from_json_rejects_rgb_maps() {
        let json = r##"{
            "primary": "667EEA",
            "background": {"r": 255, "g": 255, "b": 255},
            "textPrimary": "#1a1a1a"
        }"##;
        // rgb maps are not strings, so settings reject them
        assert!(matches!(
            CriticalColors::from_json(json),
            Err(ThemeLoadError::Json(_))
        ));
    }

    #[test]
    fn test_critical_from_json_names_bad_field() {
        let json = r##"{"primary": "#667eea", "background": "#ffffff", "textPrimary": "#12345g"}"##;
        match CriticalColors::from_json(json) {
            Err(ThemeLoadError::Theme(err)) => {
                assert_eq!(err.field(), Some(CriticalField::TextPrimary));
            }
            other => panic!("expected theme error, got {other:?}"),
        }
    }

    #[test]
    fn test_theme_json_round_trip() {
        let theme = brand();
        let json = theme.to_json().unwrap();
        assert!(json.contains("\"backgroundSecondary\": \"#f2f2f2\""));
        assert_eq!(Theme::from_json(&json).unwrap(), theme);
    }

    #[test]
    fn test_theme_toml_round_trip() {
        let theme = brand();
        let toml = theme.to_toml().unwrap();
        assert!(toml.contains("textInverse = \"#000000\""));
        assert_eq!(Theme::from_toml(&toml).unwrap(), theme);
    }

    #[test]
    fn test_theme_missing_token_rejected() {
        let err = Theme::from_json(r##"{"primary": "#667eea"}"##).unwrap_err();
        assert!(matches!(err, ThemeLoadError::Json(_)));
    }

    #[test]
    fn test_file_round_trip_by_extension() {
        let dir = tempdir().unwrap();
        let theme = brand();
        for name in ["theme.json", "theme.toml"] {
            let path = dir.path().join(name);
            theme.to_file(&path).unwrap();
            assert_eq!(Theme::from_file(&path).unwrap(), theme, "{name}");
        }
    }

    #[test]
    fn test_critical_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brand.toml");
        fs::write(&path, TOML_SETTINGS).unwrap();
        let critical = CriticalColors::from_file(&path).unwrap();
        assert_eq!(critical.primary.hex(), "#667eea");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.ini");
        assert!(matches!(
            brand().to_file(&path),
            Err(ThemeSaveError::UnsupportedFormat(ext)) if ext == "ini"
        ));
        assert!(matches!(
            CriticalColors::from_file(&path),
            Err(ThemeLoadError::UnsupportedFormat(ext)) if ext == "ini"
        ));
        assert!(matches!(
            Theme::from_file(dir.path().join("theme")),
            Err(ThemeLoadError::UnsupportedFormat(ext)) if ext == "unknown"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = CriticalColors::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ThemeLoadError::Io(_)));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_round_trip() {
        let theme = brand();
        let yaml = theme.to_yaml().unwrap();
        assert_eq!(Theme::from_yaml(&yaml).unwrap(), theme);
        let critical =
            CriticalColors::from_yaml("primary: '#667eea'\nbackground: '#ffffff'\ntextPrimary: '#1a1a1a'\n")
                .unwrap();
        assert_eq!(critical, theme.critical());
    }
}
