//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

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
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
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
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub analysis: AnalysisSettings,
    pub color: ColorSettings,
    pub remote: RemoteSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub max_line_distance: usize,
    pub min_compound_length: usize,
    pub min_part_length: usize,
    pub max_occurrences: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorSettings {
    pub adjacency_lines: usize,
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSettings {
    pub base_url: String,
    pub in_lang: String,
    pub out_lang: String,
    pub batch_size: usize,
    pub timeout_ms: u64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(analysis.min_compound_length);
    check_positive!(analysis.min_part_length);
    check_positive!(analysis.max_occurrences);
    check_positive!(remote.batch_size);
    check_positive!(remote.timeout_ms);

    if s.analysis.min_part_length * 2 > s.analysis.min_compound_length {
        return Err(SettingsError::InvalidValue {
            field: "analysis.min_part_length".to_string(),
            reason: "two parts must fit in analysis.min_compound_length".to_string(),
        });
    }

    if s.color.palette.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "color.palette".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    for color in &s.color.palette {
        let hex = color.strip_prefix('#').unwrap_or("");
        if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidValue {
                field: "color.palette".to_string(),
                reason: format!("{color:?} is not a #rgb or #rrggbb color"),
            });
        }
    }

    if s.remote.base_url.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "remote.base_url".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}
