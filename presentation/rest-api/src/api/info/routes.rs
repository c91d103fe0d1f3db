use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;
use crate::config::info_config::InfoConfig;

/// Static configuration snapshot returned by the info endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct InfoResponse {
    /// Service identifier
    pub application: String,
    /// Deployed version
    pub version: String,
    /// Deployment environment
    pub environment: String,
}

pub struct InfoApi {
    config: InfoConfig,
}

impl InfoApi {
    pub fn new(config: InfoConfig) -> Self {
        Self { config }
    }
}

#[OpenApi]
impl InfoApi {
    /// Service info endpoint
    ///
    /// Returns the application name plus the version and environment captured
    /// from configuration at startup. Always succeeds; no side effects.
    #[oai(path = "/info", method = "get", tag = "ApiTags::Info")]
    async fn get_info(&self) -> Json<InfoResponse> {
        Json(InfoResponse {
            application: "simpleapp-api".to_string(),
            version: self.config.version.clone(),
            environment: self.config.environment.clone(),
        })
    }
}
