pub mod index;
pub mod module;
pub mod producer;
pub mod replay;
pub mod service_definition;

use anyhow::Result;
use egov_base::error::EgovError;
use redis::IntoConnectionInfo;
use serde::Deserialize;

pub type RedisPool = deadpool_redis::Pool;

#[derive(Clone, Debug, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    pub pool_size: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        tracing::info!("Use default RedisConfig (redis://127.0.0.1:6379).");
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            username: None,
            password: None,
            pool_size: 10,
        }
    }
}

/// Connection info from the url, with explicitly configured credentials
/// taking precedence over any embedded in the url.
fn redis_connection_info(config: &RedisConfig) -> Result<redis::ConnectionInfo> {
    let mut info = config.url.as_str().into_connection_info().map_err(|e| {
        EgovError::RuntimeError(format!("cannot parse redis url: {}, error= {e:?}", config.url))
    })?;
    if config.username.is_some() {
        info.redis.username = config.username.clone();
    }
    if config.password.is_some() {
        info.redis.password = config.password.clone();
    }
    Ok(info)
}

pub fn new_redis_pool(config: &RedisConfig) -> Result<RedisPool> {
    let cfg = deadpool_redis::Config::from_connection_info(redis_connection_info(config)?);
    cfg.builder()
        .map_err(|e| EgovError::RuntimeError(format!("cannot create redis pool: {e:?}")))?
        .max_size(config.pool_size)
        .runtime(deadpool_redis::Runtime::Tokio1)
        .build()
        .map_err(|e| EgovError::RuntimeError(format!("cannot build redis pool: {e:?}")).into())
}

pub trait UseRedisPool {
    fn redis_pool(&self) -> &RedisPool;
}

/// Location of the search-index service fronting the document store.
#[derive(Clone, Debug, Deserialize)]
pub struct IndexConfig {
    pub base_url: String,
    pub error_search_path: String,
    pub service_definition_search_path: String,
    pub connect_timeout_sec: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        tracing::info!("Use default IndexConfig (http://127.0.0.1:9200).");
        Self {
            base_url: "http://127.0.0.1:9200".to_string(),
            error_search_path: "/egov-error-index/_search".to_string(),
            service_definition_search_path: "/egov-service-definition-index/_search".to_string(),
            connect_timeout_sec: 10,
        }
    }
}

pub fn load_redis_config_from_env() -> Result<RedisConfig> {
    envy::prefixed("REDIS_")
        .from_env::<RedisConfig>()
        .map_err(|e| {
            EgovError::RuntimeError(format!("cannot read redis config from env: {:?}", e)).into()
        })
}

pub fn load_index_config_from_env() -> Result<IndexConfig> {
    envy::prefixed("INDEX_")
        .from_env::<IndexConfig>()
        .map_err(|e| {
            EgovError::RuntimeError(format!("cannot read index config from env: {:?}", e)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_connection_info_applies_configured_credentials() -> Result<()> {
        let info = redis_connection_info(&RedisConfig {
            url: "redis://127.0.0.1:6379".to_string(),
            username: Some("app".to_string()),
            password: Some("secret".to_string()),
            pool_size: 5,
        })?;
        assert_eq!(info.redis.username.as_deref(), Some("app"));
        assert_eq!(info.redis.password.as_deref(), Some("secret"));
        Ok(())
    }

    #[test]
    fn test_redis_connection_info_keeps_url_credentials_when_unset() -> Result<()> {
        let info = redis_connection_info(&RedisConfig {
            url: "redis://user:pw@127.0.0.1:6379".to_string(),
            username: None,
            password: None,
            pool_size: 5,
        })?;
        assert_eq!(info.redis.username.as_deref(), Some("user"));
        assert_eq!(info.redis.password.as_deref(), Some("pw"));
        Ok(())
    }
}
