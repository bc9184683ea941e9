//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// REST backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the report backend, including the API prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for CRUD requests in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Timeout for report generation in seconds. Generation runs an LLM
    /// call on the backend and takes far longer than a CRUD round trip.
    #[serde(default = "default_generate_timeout")]
    pub generate_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            generate_timeout_seconds: default_generate_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_generate_timeout() -> u64 {
    300
}
