//! Service request workflow: a submitted service is validated against its
//! stored definition, enriched, and handed to the persister through the
//! outbound channel.

pub mod enrichment;
pub mod validator;

use super::error_codes::*;
use super::{ServiceConfig, UseServiceConfig};
use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use infra::infra::producer::Producer;
use infra::infra::service_definition::ServiceDefinitionRepository;
use models::service::{Service, ServiceRequest};
use models::service_definition::{ServiceDefinition, ServiceDefinitionSearchRequest};
use std::sync::Arc;

#[async_trait]
pub trait ServiceRequestApp: Send + Sync + 'static {
    /// Validates the service against its definition, enriches it and
    /// publishes the request on the save topic. Returns the enriched service.
    async fn create(&self, request: ServiceRequest) -> Result<Service>;
}

#[derive(Clone)]
pub struct ServiceRequestAppImpl {
    service_config: Arc<ServiceConfig>,
    service_definition_repository: Arc<dyn ServiceDefinitionRepository>,
    producer: Arc<dyn Producer>,
}

// Manual impl: debug_stub_derive's parser predates the `dyn` keyword and
// panics on these field types; output matches what the derive would emit.
impl std::fmt::Debug for ServiceRequestAppImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRequestAppImpl")
            .field("service_config", &self.service_config)
            .field(
                "service_definition_repository",
                &format_args!("Arc<dyn ServiceDefinitionRepository>"),
            )
            .field("producer", &format_args!("Arc<dyn Producer>"))
            .finish()
    }
}

impl ServiceRequestAppImpl {
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

    async fn resolve_definition(&self, service: &Service) -> Result<ServiceDefinition> {
        let definitions = self
            .service_definition_repository
            .get_service_definitions(&ServiceDefinitionSearchRequest::by_tenant_and_id(
                &service.tenant_id,
                &service.service_def_id,
            ))
            .await?;
        // first match wins; ids are unique per tenant in practice
        definitions.into_iter().next().ok_or_else(|| {
            EgovError::validation(
                SERVICE_REQUEST_INVALID_SERVICE_DEF_ID_CODE,
                SERVICE_REQUEST_INVALID_SERVICE_DEF_ID_MSG,
            )
            .into()
        })
    }
}

impl UseServiceConfig for ServiceRequestAppImpl {
    fn service_config(&self) -> &ServiceConfig {
        &self.service_config
    }
}

#[async_trait]
impl ServiceRequestApp for ServiceRequestAppImpl {
    async fn create(&self, request: ServiceRequest) -> Result<Service> {
        let definition = self.resolve_definition(&request.service).await?;
        validator::validate_service_against_definition(&request.service, &definition)?;

        let mut request = request;
        enrichment::enrich_service_request(&mut request);

        let payload = serde_json::to_value(&request).map_err(EgovError::SerdeJsonError)?;
        self.producer
            .push(&self.service_config.service_save_topic, vec![payload])
            .await?;
        Ok(request.service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::infra::producer::MockProducer;
    use infra::infra::service_definition::MockServiceDefinitionRepository;
    use models::service::AttributeValue;
    use models::service_definition::{AttributeDataType, AttributeDefinition};

    fn stored_definition() -> ServiceDefinition {
        ServiceDefinition {
            id: Some("d-1".to_string()),
            tenant_id: "pb".to_string(),
            code: "WATER".to_string(),
            attributes: vec![AttributeDefinition {
                code: "APPLICANT_NAME".to_string(),
                data_type: AttributeDataType::String,
                required: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn service_request() -> ServiceRequest {
        ServiceRequest {
            service: Service {
                tenant_id: "pb".to_string(),
                service_def_id: "d-1".to_string(),
                attributes: vec![AttributeValue {
                    attribute_code: "APPLICANT_NAME".to_string(),
                    value: serde_json::json!("asha"),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_validates_enriches_and_publishes() -> Result<()> {
        let mut repository = MockServiceDefinitionRepository::new();
        repository
            .expect_get_service_definitions()
            .times(1)
            .withf(|req| req.service_definition_criteria.ids == vec!["d-1".to_string()])
            .returning(|_| Ok(vec![stored_definition()]));
        let mut producer = MockProducer::new();
        producer
            .expect_push()
            .times(1)
            .withf(|topic, records| {
                let request: ServiceRequest = serde_json::from_value(records[0].clone()).unwrap();
                topic == "save-service"
                    && request.service.id.is_some()
                    && request.service.attributes[0].reference_id == request.service.id
            })
            .returning(|_, _| Ok(()));

        let app = ServiceRequestAppImpl::new(
            Arc::new(ServiceConfig::default()),
            Arc::new(repository),
            Arc::new(producer),
        );
        let service = app.create(service_request()).await?;
        assert!(service.id.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_definition_is_rejected() {
        let mut repository = MockServiceDefinitionRepository::new();
        repository
            .expect_get_service_definitions()
            .returning(|_| Ok(vec![]));
        let mut producer = MockProducer::new();
        producer.expect_push().times(0);

        let app = ServiceRequestAppImpl::new(
            Arc::new(ServiceConfig::default()),
            Arc::new(repository),
            Arc::new(producer),
        );
        assert!(app.create(service_request()).await.is_err());
    }
}
