//! Service definition workflow: uniqueness validation against stored
//! definitions, then enrichment (generated ids, audit metadata) before the
//! request is handed to the persister through the outbound channel.

pub mod enrichment;
pub mod validator;

use super::{ServiceConfig, UseServiceConfig};
use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use infra::infra::producer::Producer;
use infra::infra::service_definition::ServiceDefinitionRepository;
use models::service_definition::{
    ServiceDefinition, ServiceDefinitionRequest, ServiceDefinitionSearchRequest,
};
use std::sync::Arc;

#[async_trait]
pub trait ServiceDefinitionApp: Send + Sync + 'static {
    /// Validates and enriches the definition, then publishes the request on
    /// the save topic. Returns the enriched definition.
    async fn create(&self, request: ServiceDefinitionRequest) -> Result<ServiceDefinition>;

    async fn search(
        &self,
        request: &ServiceDefinitionSearchRequest,
    ) -> Result<Vec<ServiceDefinition>>;
}

#[derive(Clone)]
pub struct ServiceDefinitionAppImpl {
    service_config: Arc<ServiceConfig>,
    service_definition_repository: Arc<dyn ServiceDefinitionRepository>,
    producer: Arc<dyn Producer>,
}

// Manual impl: debug_stub_derive's parser predates the `dyn` keyword and
// panics on these field types; output matches what the derive would emit.
impl std::fmt::Debug for ServiceDefinitionAppImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDefinitionAppImpl")
            .field("service_config", &self.service_config)
            .field(
                "service_definition_repository",
                &format_args!("Arc<dyn ServiceDefinitionRepository>"),
            )
            .field("producer", &format_args!("Arc<dyn Producer>"))
            .finish()
    }
}

impl ServiceDefinitionAppImpl {
    pub fn new(
        service_config: Arc<ServiceConfig>,
        service_definition_repository: Arc<dyn ServiceDefinitionRepository>,
        producer: Arc<dyn Producer>,
    ) -> Self {
        Self {
            service_config,
            service_definition_repository,
            producer,
        }
    }
}

impl UseServiceConfig for ServiceDefinitionAppImpl {
    fn service_config(&self) -> &ServiceConfig {
        &self.service_config
    }
}

#[async_trait]
impl ServiceDefinitionApp for ServiceDefinitionAppImpl {
    async fn create(&self, request: ServiceDefinitionRequest) -> Result<ServiceDefinition> {
        validator::validate_service_definition_request(
            self.service_definition_repository.as_ref(),
            &request,
        )
        .await?;

        let mut request = request;
        enrichment::enrich_service_definition_request(&mut request);

        let payload = serde_json::to_value(&request).map_err(EgovError::SerdeJsonError)?;
        self.producer
            .push(&self.service_config.definition_save_topic, vec![payload])
            .await?;
        tracing::info!(
            "service definition created: tenant={}, code={}",
            request.service_definition.tenant_id,
            request.service_definition.code
        );
        Ok(request.service_definition)
    }

    async fn search(
        &self,
        request: &ServiceDefinitionSearchRequest,
    ) -> Result<Vec<ServiceDefinition>> {
        self.service_definition_repository
            .get_service_definitions(request)
            .await
    }
}
