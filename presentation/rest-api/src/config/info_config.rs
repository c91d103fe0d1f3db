use std::env;

/// Deployment metadata exposed by the info endpoint.
///
/// Environment variables:
/// - APP_VERSION: deployed version string (default: "unknown")
/// - APP_ENVIRONMENT: deployment environment (default: "unkown", the
///   default string existing clients already match on)
#[derive(Debug, Clone)]
pub struct InfoConfig {
    pub version: String,
    pub environment: String,
}

impl InfoConfig {
    pub fn from_env() -> Self {
        let version = env::var("APP_VERSION").unwrap_or_else(|_| "unknown".to_string());
        let environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "unkown".to_string());

        Self {
            version,
            environment,
        }
    }
}
