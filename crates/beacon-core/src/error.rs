//! Error types for Beacon Core.

use thiserror::Error;

/// Core error type for Beacon operations.
#[derive(Error, Debug)]
pub enum BeaconError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme construction or lookup errors
    #[error("Theme error: {0}")]
    Theme(String),

    /// Command registry integrity violations
    #[error("Registry error: {0}")]
    Registry(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Beacon operations.
pub type Result<T> = std::result::Result<T, BeaconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beacon_error_config() {
        let err = BeaconError::Config("missing theme table".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("missing theme table"));
    }

    #[test]
    fn test_beacon_error_theme() {
        let err = BeaconError::Theme("unknown preset: neon".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Theme error"));
        assert!(msg.contains("unknown preset: neon"));
    }

    #[test]
    fn test_beacon_error_registry() {
        let err = BeaconError::Registry("duplicate key '1'".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Registry error"));
        assert!(msg.contains("duplicate key '1'"));
    }

    #[test]
    fn test_beacon_error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let beacon_err: BeaconError = io_err.into();
        match beacon_err {
            BeaconError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_beacon_error_toml_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        let beacon_err: BeaconError = toml_err.into();
        match beacon_err {
            BeaconError::TomlParse(_) => {}
            _ => panic!("Expected TomlParse error variant"),
        }
    }

    #[test]
    fn test_beacon_error_debug() {
        let err = BeaconError::Theme("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Theme"));
    }
}
