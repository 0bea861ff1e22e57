use super::{RedisPool, UseRedisPool};
use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use redis::AsyncCommands;
use serde_json::Value;

/// Outbound channel for updated records. Fire-and-forget: no acknowledgment
/// is observed by callers.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait Producer: Send + Sync {
    async fn push(&self, topic: &str, records: Vec<Value>) -> Result<()>;
}

#[derive(Clone)]
pub struct RedisProducerImpl {
    redis_pool: RedisPool,
}

impl RedisProducerImpl {
    pub fn new(redis_pool: RedisPool) -> Self {
        Self { redis_pool }
    }
}

impl UseRedisPool for RedisProducerImpl {
    fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }
}

#[async_trait]
impl Producer for RedisProducerImpl {
    async fn push(&self, topic: &str, records: Vec<Value>) -> Result<()> {
        let payload = serde_json::to_string(&records).map_err(EgovError::SerdeJsonError)?;
        tracing::debug!("producer push: topic={}, records={}", topic, records.len());
        let mut conn = self.redis_pool().get().await?;
        conn.publish::<&str, String, ()>(topic, payload)
            .await
            .map_err(|e| EgovError::RedisError(e).into())
    }
}
