use super::index::{query, IndexClient};
use super::IndexConfig;
use anyhow::Result;
use async_trait::async_trait;
use models::service_definition::{ServiceDefinition, ServiceDefinitionSearchRequest};
use std::sync::Arc;

/// Read side of service-definition persistence. Writes happen downstream of
/// the outbound channel and are out of scope here.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait ServiceDefinitionRepository: Send + Sync {
    async fn get_service_definitions(
        &self,
        request: &ServiceDefinitionSearchRequest,
    ) -> Result<Vec<ServiceDefinition>>;
}

#[derive(Clone, Debug)]
pub struct IndexServiceDefinitionRepositoryImpl {
    index_client: Arc<IndexClient>,
    search_path: String,
}

impl IndexServiceDefinitionRepositoryImpl {
    pub fn new(index_client: Arc<IndexClient>, config: &IndexConfig) -> Self {
        Self {
            index_client,
            search_path: config.service_definition_search_path.clone(),
        }
    }
}

#[async_trait]
impl ServiceDefinitionRepository for IndexServiceDefinitionRepositoryImpl {
    async fn get_service_definitions(
        &self,
        request: &ServiceDefinitionSearchRequest,
    ) -> Result<Vec<ServiceDefinition>> {
        let body = query::service_definition_search_body(request);
        self.index_client
            .fetch_data::<ServiceDefinition>(&self.search_path, &body)
            .await
    }
}
