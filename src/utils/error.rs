use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} [{value}]: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage backend error: {0}")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            GatewayError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!(
                    "Invalid configuration value for {} [{}]: {}",
                    field, value, reason
                )
            }
            GatewayError::TomlError(e) => format!("Cannot parse config file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GatewayError::ConfigError { .. } | GatewayError::InvalidConfigValueError { .. } => {
                "Check the command line arguments, environment variables and config file"
            }
            GatewayError::TomlError(_) => "Check the config file syntax",
            GatewayError::IoError(_) => "Check file paths and permissions",
            GatewayError::StorageError(_) => {
                "Check the bucket name, region and credentials for the storage backend"
            }
            GatewayError::SerializationError(_) => "Check the payload format",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
