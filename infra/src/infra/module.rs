use super::index::{ErrorDetailRepository, IndexClient, IndexErrorDetailRepositoryImpl};
use super::producer::{Producer, RedisProducerImpl};
use super::replay::{HttpReplayClientImpl, ReplayClient};
use super::service_definition::{
    IndexServiceDefinitionRepositoryImpl, ServiceDefinitionRepository,
};
use super::{load_index_config_from_env, load_redis_config_from_env, new_redis_pool, IndexConfig};
use anyhow::Result;
use std::fmt;
use std::sync::Arc;

/// All external collaborators behind their trait seams, wired once at startup.
#[derive(Clone)]
pub struct RepositoryModule {
    pub index_config: Arc<IndexConfig>,
    pub error_detail_repository: Arc<dyn ErrorDetailRepository>,
    pub service_definition_repository: Arc<dyn ServiceDefinitionRepository>,
    pub producer: Arc<dyn Producer>,
    pub replay_client: Arc<dyn ReplayClient>,
}

// Manual impl: debug_stub_derive's parser predates the `dyn` keyword and
// panics on these field types; output matches what the derive would emit.
impl fmt::Debug for RepositoryModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryModule")
            .field("index_config", &self.index_config)
            .field(
                "error_detail_repository",
                &format_args!("Arc<dyn ErrorDetailRepository>"),
            )
            .field(
                "service_definition_repository",
                &format_args!("Arc<dyn ServiceDefinitionRepository>"),
            )
            .field("producer", &format_args!("Arc<dyn Producer>"))
            .field("replay_client", &format_args!("Arc<dyn ReplayClient>"))
            .finish()
    }
}

impl RepositoryModule {
    pub fn new_by_env() -> Result<Self> {
        let index_config = Arc::new(load_index_config_from_env().unwrap_or_default());
        let redis_config = load_redis_config_from_env().unwrap_or_default();
        let index_client = Arc::new(IndexClient::new(&index_config)?);
        let redis_pool = new_redis_pool(&redis_config)?;
        Ok(Self {
            error_detail_repository: Arc::new(IndexErrorDetailRepositoryImpl::new(
                index_client.clone(),
                &index_config,
            )),
            service_definition_repository: Arc::new(IndexServiceDefinitionRepositoryImpl::new(
                index_client,
                &index_config,
            )),
            producer: Arc::new(RedisProducerImpl::new(redis_pool)),
            replay_client: Arc::new(HttpReplayClientImpl::new(
                index_config.connect_timeout_sec,
            )?),
            index_config,
        })
    }
}
