use thiserror::Error;

/// Errors raised while loading a device's connection config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key was absent (or zero) in the device data
    #[error("'{field}' not found in device config, {config}")]
    MissingRequiredField {
        field: &'static str,
        config: String,
    },

    /// The timeout is not a `<number><unit>` duration literal
    #[error("invalid timeout duration {value:?}: {reason}")]
    InvalidDurationFormat { value: String, reason: String },

    /// The device data could not be mapped onto the config keys
    #[error("failed to deserialize device config: {0}")]
    Deserialize(#[from] serde_yaml::Error),
}

/// Result type used by the config loaders and validation
pub type Result<T> = std::result::Result<T, ConfigError>;
