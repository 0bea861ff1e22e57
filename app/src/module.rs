use crate::app::error_retry::{ErrorRetryApp, ErrorRetryAppImpl};
use crate::app::service_definition::{ServiceDefinitionApp, ServiceDefinitionAppImpl};
use crate::app::service_request::{ServiceRequestApp, ServiceRequestAppImpl};
use crate::app::{load_retry_config, load_service_config, RetryConfig, ServiceConfig};
use anyhow::Result;
use infra::infra::module::RepositoryModule;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppConfigModule {
    pub retry_config: Arc<RetryConfig>,
    pub service_config: Arc<ServiceConfig>,
}

impl AppConfigModule {
    pub fn new_by_env() -> Self {
        Self {
            retry_config: Arc::new(load_retry_config()),
            service_config: Arc::new(load_service_config()),
        }
    }
}

#[derive(Clone)]
pub struct AppModule {
    pub config_module: Arc<AppConfigModule>,
    pub repositories: Arc<RepositoryModule>,
    pub error_retry_app: Arc<dyn ErrorRetryApp + 'static>,
    pub service_definition_app: Arc<dyn ServiceDefinitionApp + 'static>,
    pub service_request_app: Arc<dyn ServiceRequestApp + 'static>,
}

impl AppModule {
    pub fn new(config_module: Arc<AppConfigModule>, repositories: Arc<RepositoryModule>) -> Self {
        let error_retry_app = Arc::new(ErrorRetryAppImpl::new(
            config_module.retry_config.clone(),
            repositories.error_detail_repository.clone(),
            repositories.producer.clone(),
            repositories.replay_client.clone(),
        ));
        let service_definition_app = Arc::new(ServiceDefinitionAppImpl::new(
            config_module.service_config.clone(),
            repositories.service_definition_repository.clone(),
            repositories.producer.clone(),
        ));
        let service_request_app = Arc::new(ServiceRequestAppImpl::new(
            config_module.service_config.clone(),
            repositories.service_definition_repository.clone(),
            repositories.producer.clone(),
        ));
        Self {
            config_module,
            repositories,
            error_retry_app,
            service_definition_app,
            service_request_app,
        }
    }

    pub fn new_by_env() -> Result<Self> {
        let config_module = Arc::new(AppConfigModule::new_by_env());
        let repositories = Arc::new(RepositoryModule::new_by_env()?);
        Ok(Self::new(config_module, repositories))
    }
}
