use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.json,
            level: logging.level.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        format!(
            "{level},course_redundancy={level},tower_http={level}",
            level = self.level
        )
    }
}
