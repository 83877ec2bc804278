//! Global conversion settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::numeral::{DecodeMode, DecodeOptions, EncodeOptions};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        // Custom TOML is validated in `init_custom`.
        parse_settings_toml(toml_str).unwrap_or_default()
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub encode: EncodeSettings,
    pub decode: DecodeSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeSettings {
    #[serde(default)]
    pub lowercase: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeSettings {
    #[serde(default)]
    pub mode: DecodeMode,
    #[serde(default)]
    pub accept_lowercase: bool,
}

impl Settings {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            lowercase: self.encode.lowercase,
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            mode: self.decode.mode,
            accept_lowercase: self.decode.accept_lowercase,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(!s.encode.lowercase);
        assert_eq!(s.decode.mode, DecodeMode::Strict);
        assert!(!s.decode.accept_lowercase);
        assert_eq!(s.encode_options(), EncodeOptions::default());
        assert_eq!(s.decode_options(), DecodeOptions::default());
    }

    #[test]
    fn default_toml_matches_default_struct() {
        let parsed = parse_settings_toml(default_toml()).unwrap();
        let fallback = Settings::default();
        assert_eq!(parsed.encode_options(), fallback.encode_options());
        assert_eq!(parsed.decode_options(), fallback.decode_options());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[encode]
lowercase = true

[decode]
mode = "additive"
accept_lowercase = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.encode_options(), EncodeOptions { lowercase: true });
        assert_eq!(
            s.decode_options(),
            DecodeOptions {
                mode: DecodeMode::Additive,
                accept_lowercase: true,
            }
        );
    }

    #[test]
    fn omitted_keys_use_defaults() {
        let toml = r#"
[encode]

[decode]
mode = "additive"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.encode.lowercase);
        assert_eq!(s.decode.mode, DecodeMode::Additive);
        assert!(!s.decode.accept_lowercase);
    }

    #[test]
    fn error_unknown_mode() {
        let toml = r#"
[encode]
[decode]
mode = "loose"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_unknown_key() {
        let toml = r#"
[encode]
lowercase = false
uppercase = true

[decode]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("uppercase"));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[encode]
lowercase = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        let err = init_custom("[decode]\nmode = 3\n".to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
