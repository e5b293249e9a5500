//! Error types for Flurry

use thiserror::Error;

/// The main error type for Flurry operations
///
/// Nothing on the per-tick path produces one of these. They only surface while
/// configuration is being loaded, validated, or turned into a running system.
#[derive(Debug, Error)]
pub enum FlurryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for Flurry operations
pub type Result<T> = std::result::Result<T, FlurryError>;

impl From<toml::de::Error> for FlurryError {
    fn from(err: toml::de::Error) -> Self {
        FlurryError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for FlurryError {
    fn from(err: toml::ser::Error) -> Self {
        FlurryError::TomlSerError(err.to_string())
    }
}

impl From<serde_json::Error> for FlurryError {
    fn from(err: serde_json::Error) -> Self {
        FlurryError::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_convert() {
        let err: FlurryError = toml::from_str::<toml::Value>("a = ").unwrap_err().into();
        assert!(matches!(err, FlurryError::TomlParseError(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn invalid_config_message() {
        let err = FlurryError::InvalidConfig("fps must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: fps must be greater than 0"
        );
    }
}
