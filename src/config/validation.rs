//! Configuration validation module

use crate::config::{LoggingConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Scan configuration error: {message}")]
    Scan { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn scan(message: impl Into<String>) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // Note: u16 cannot exceed 65535, so we only need to check for 0
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty".to_string()));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.level.is_empty() {
            return Err(ValidationError::logging(
                "Log level cannot be empty".to_string(),
            ));
        }

        if !matches!(self.format.as_str(), "json" | "pretty") {
            return Err(ValidationError::logging(format!(
                "Log format must be 'json' or 'pretty', got: {}",
                self.format
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, SecurityConfig};

    #[test]
    fn test_server_config_validation() {
        // Valid config
        let valid = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8899,
            enable_docs: true,
            request_timeout_seconds: 30,
            allowed_origins: vec![],
            security: SecurityConfig::default(),
        };
        assert!(valid.validate().is_ok());

        // Invalid port (0)
        let invalid = ServerConfig {
            port: 0,
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        // Invalid timeout (0)
        let invalid = ServerConfig {
            request_timeout_seconds: 0,
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        // Invalid host (empty)
        let invalid = ServerConfig {
            host: String::new(),
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let valid = LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = LoggingConfig {
            format: "xml".to_string(),
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        let invalid = LoggingConfig {
            level: String::new(),
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_simulated_delay_must_fit_within_request_timeout() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.scan.simulated_delay_ms = config.server.request_timeout_seconds * 1000;
        assert!(config.validate().is_err());

        config.scan.simulated_delay_ms = config.server.request_timeout_seconds * 1000 - 1;
        assert!(config.validate().is_ok());
    }
}
