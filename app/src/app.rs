pub mod error_codes;
pub mod error_retry;
pub mod service_definition;
pub mod service_request;

use serde::Deserialize;

/// Retry policy, immutable for the process lifetime. Injected into the
/// orchestrator's constructor rather than read from ambient state.
#[derive(Deserialize, Clone, Debug)]
pub struct RetryConfig {
    /// Threshold for eligibility (`retry_count >= max` is rejected) and for
    /// the post-replay status rule (`retry_count == max` after increment
    /// marks the record FAILED).
    pub max_retries_allowed: i32,
    /// Topic updated error records are published on.
    pub error_topic: String,
}

impl Default for RetryConfig {
    fn default() -> Self {
        tracing::info!("Use default RetryConfig (max 3 retries).");
        Self {
            max_retries_allowed: 3,
            error_topic: "egov-error-retry".to_string(),
        }
    }
}

pub trait UseRetryConfig {
    fn retry_config(&self) -> &RetryConfig;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServiceConfig {
    /// Topic the persister consumes enriched definition requests from.
    pub definition_save_topic: String,
    /// Topic the persister consumes enriched service requests from.
    pub service_save_topic: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        tracing::info!("Use default ServiceConfig.");
        Self {
            definition_save_topic: "save-service-definition".to_string(),
            service_save_topic: "save-service".to_string(),
        }
    }
}

pub trait UseServiceConfig {
    fn service_config(&self) -> &ServiceConfig;
}

pub fn load_retry_config() -> RetryConfig {
    envy::prefixed("RETRY_")
        .from_env::<RetryConfig>()
        .unwrap_or_default()
}

pub fn load_service_config() -> ServiceConfig {
    envy::prefixed("SERVICE_")
        .from_env::<ServiceConfig>()
        .unwrap_or_default()
}
