//! End-to-end integration tests for the swatch CLI.
//!
//! These run the real binary and check stdout, stderr, and exit status for
//! each subcommand, including configuration precedence and error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the swatch binary with no inherited SWATCH_* settings.
#[allow(deprecated)]
fn swatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("swatch").unwrap();
    for var in [
        "SWATCH_PRIMARY",
        "SWATCH_BACKGROUND",
        "SWATCH_TEXT_PRIMARY",
        "SWATCH_FORMAT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

const BRAND: [&str; 6] = [
    "--primary",
    "#667eea",
    "--background",
    "#ffffff",
    "--text-primary",
    "#1a1a1a",
];

// =============================================================================
// derive
// =============================================================================

mod derive {
    use super::*;

    #[test]
    fn test_derive_json_default() {
        swatch_cmd()
            .arg("derive")
            .args(BRAND)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"backgroundSecondary\": \"#f2f2f2\""))
            .stdout(predicate::str::contains("\"textInverse\": \"#000000\""));
    }

    #[test]
    fn test_derive_css() {
        swatch_cmd()
            .arg("derive")
            .args(BRAND)
            .args(["--format", "css"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(":root {"))
            .stdout(predicate::str::contains("  --color-border: #d1d1d1;"));
    }

    #[test]
    fn test_derive_toml_from_env() {
        swatch_cmd()
            .arg("derive")
            .env("SWATCH_PRIMARY", "#667eea")
            .env("SWATCH_BACKGROUND", "#ffffff")
            .env("SWATCH_TEXT_PRIMARY", "#1a1a1a")
            .env("SWATCH_FORMAT", "toml")
            .assert()
            .success()
            .stdout(predicate::str::contains("surfaceHover = \"#e6e6e6\""));
    }

    #[test]
    fn test_derive_from_settings_file() {
        swatch_cmd()
            .args(["derive", "--settings", "tests/fixtures/brand.toml", "-f", "css"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--color-link-hover: #2b4ce2;"));
    }

    #[test]
    fn test_flag_overrides_settings_file() {
        swatch_cmd()
            .args(["derive", "--settings", "tests/fixtures/brand.toml"])
            .args(["--background", "#000000", "-f", "css"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--color-background: #000000;"))
            .stdout(predicate::str::contains("--color-text-inverse: #ffffff;"));
    }

    #[test]
    fn test_flag_overrides_env() {
        swatch_cmd()
            .arg("derive")
            .args(BRAND)
            .env("SWATCH_PRIMARY", "#ff0000")
            .args(["-f", "css"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--color-primary: #667eea;"));
    }

    #[test]
    fn test_derive_to_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.css");
        swatch_cmd()
            .arg("derive")
            .args(BRAND)
            .args(["--format", "css", "--output"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        let css = fs::read_to_string(&path).unwrap();
        assert!(css.contains("--color-button-text: #000000;"));
    }
}

// =============================================================================
// Error reporting
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_invalid_primary_named() {
        swatch_cmd()
            .args(["derive", "--primary", "notacolor"])
            .args(["--background", "#ffffff", "--text-primary", "#000000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid primary color"));
    }

    #[test]
    fn test_missing_critical_color() {
        swatch_cmd()
            .args(["derive", "--primary", "#667eea", "--background", "#ffffff"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing textPrimary color"));
    }

    #[test]
    fn test_broken_settings_file() {
        swatch_cmd()
            .args(["audit", "--settings", "tests/fixtures/broken.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.json"))
            .stderr(predicate::str::contains("textPrimary"));
    }

    #[test]
    fn test_unsupported_settings_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brand.ini");
        fs::write(&path, "primary=#667eea").unwrap();
        swatch_cmd()
            .args(["derive", "--settings"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported settings format 'ini'"));
    }

    #[test]
    fn test_bad_positional_color() {
        swatch_cmd()
            .args(["contrast", "#fff", "#000000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected 6 hex digits"));
    }
}

// =============================================================================
// validate / contrast / harmony
// =============================================================================

mod checks {
    use super::*;

    #[test]
    fn test_validate_failing_pair() {
        swatch_cmd()
            .args(["validate", "#777777", "#ffffff"])
            .assert()
            .success()
            .stdout(predicate::str::contains("contrast: 4.48:1"))
            .stdout(predicate::str::contains("level: FAIL"))
            .stdout(predicate::str::contains("suggestion: #000000"))
            .stderr(predicate::str::contains("Contrast below WCAG AA"));
    }

    #[test]
    fn test_validate_json() {
        let output = swatch_cmd()
            .args(["validate", "#000000", "#ffffff", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["isValid"], true);
        assert_eq!(value["level"], "AAA");
        assert_eq!(value["warnings"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_contrast() {
        swatch_cmd()
            .args(["contrast", "#ffffff", "#000000"])
            .assert()
            .success()
            .stdout("21.00\n");
    }

    #[test]
    fn test_harmony_triadic() {
        swatch_cmd()
            .args(["harmony", "#ff0000", "triadic"])
            .assert()
            .success()
            .stdout("#00ff00\n#0000ff\n");
    }

    #[test]
    fn test_harmony_unknown_kind() {
        swatch_cmd()
            .args(["harmony", "#ff0000", "square"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown harmony"));
    }
}

// =============================================================================
// audit
// =============================================================================

mod audit {
    use super::*;

    #[test]
    fn test_audit_fails_on_low_contrast_tokens() {
        swatch_cmd()
            .arg("audit")
            .args(BRAND)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("14 checked, 7 failed"))
            .stdout(predicate::str::contains("FAIL"));
    }

    #[test]
    fn test_audit_passes_high_contrast_settings() {
        swatch_cmd()
            .args(["audit", "--settings", "tests/fixtures/high_contrast.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("14 checked, 0 failed"));
    }

    #[test]
    fn test_audit_json() {
        let output = swatch_cmd()
            .args(["audit", "--json", "--settings", "tests/fixtures/high_contrast.json"])
            .output()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0]["token"], "secondary");
        assert_eq!(rows[0]["partner"], "background");
    }

    #[test]
    fn test_verbose_logs_derivation() {
        swatch_cmd()
            .args(["-vv", "audit", "--settings", "tests/fixtures/high_contrast.json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Deriving theme"));
    }
}
