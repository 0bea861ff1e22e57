pub mod query;

use super::IndexConfig;
use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use models::error_detail::{ErrorDetail, ErrorDetailSearchCriteria};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Response envelope of the index service: `{ "data": [ record, ... ] }`.
#[derive(Debug, Deserialize)]
pub struct IndexResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Thin client for the search-index service fronting the document store.
/// Queries are JSON bodies POSTed to a per-collection search path.
#[derive(Clone, Debug)]
pub struct IndexClient {
    client: reqwest::Client,
    base_url: Url,
}

impl IndexClient {
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let base_url = Url::from_str(&config.base_url).map_err(|e| {
            EgovError::ParseError(format!(
                "cannot parse index base url from: {}, error= {e:?}",
                config.base_url
            ))
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_sec))
            .build()
            .map_err(|e| EgovError::OtherError(format!("http client build error: {e:?}")))?;
        Ok(Self { client, base_url })
    }

    pub async fn fetch(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.base_url.join(path).map_err(|e| {
            EgovError::ParseError(format!("cannot join index path: {path}, error= {e:?}"))
        })?;
        tracing::debug!("index fetch: url={}, body={}", url, body);
        let res = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(EgovError::ReqwestError)?
            .error_for_status()
            .map_err(EgovError::ReqwestError)?;
        res.json::<Value>()
            .await
            .map_err(|e| EgovError::ReqwestError(e).into())
    }

    /// Fetches and extracts the `data` array as typed records.
    /// An absent or empty `data` field yields an empty vec, never a panic.
    pub async fn fetch_data<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<Vec<T>> {
        let response = self.fetch(path, body).await?;
        let parsed: IndexResponse<T> =
            serde_json::from_value(response).map_err(EgovError::SerdeJsonError)?;
        Ok(parsed.data)
    }
}

/// Read access to the error-detail collection of the index.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait ErrorDetailRepository: Send + Sync {
    /// All records matching the given error id, in index order.
    async fn find_by_id(&self, id: &str) -> Result<Vec<ErrorDetail>>;

    /// Filtered search; caller guarantees a non-empty criteria.
    async fn search(&self, criteria: &ErrorDetailSearchCriteria) -> Result<Vec<ErrorDetail>>;
}

#[derive(Clone, Debug)]
pub struct IndexErrorDetailRepositoryImpl {
    index_client: Arc<IndexClient>,
    error_search_path: String,
}

impl IndexErrorDetailRepositoryImpl {
    pub fn new(index_client: Arc<IndexClient>, config: &IndexConfig) -> Self {
        Self {
            index_client,
            error_search_path: config.error_search_path.clone(),
        }
    }
}

#[async_trait]
impl ErrorDetailRepository for IndexErrorDetailRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Vec<ErrorDetail>> {
        let body = query::error_lookup_body(id);
        self.index_client
            .fetch_data::<ErrorDetail>(&self.error_search_path, &body)
            .await
    }

    async fn search(&self, criteria: &ErrorDetailSearchCriteria) -> Result<Vec<ErrorDetail>> {
        let body = query::error_search_body(criteria);
        self.index_client
            .fetch_data::<ErrorDetail>(&self.error_search_path, &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_response_tolerates_missing_data() -> Result<()> {
        let parsed: IndexResponse<ErrorDetail> = serde_json::from_value(serde_json::json!({}))?;
        assert!(parsed.data.is_empty());
        let parsed: IndexResponse<ErrorDetail> =
            serde_json::from_value(serde_json::json!({ "data": [] }))?;
        assert!(parsed.data.is_empty());
        Ok(())
    }

    #[test]
    fn test_index_response_extracts_records() -> Result<()> {
        let parsed: IndexResponse<ErrorDetail> = serde_json::from_value(serde_json::json!({
            "data": [
                { "id": "E1", "apiDetails": { "url": "http://x" }, "retryCount": 1, "status": "PENDING" }
            ]
        }))?;
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].id.as_deref(), Some("E1"));
        Ok(())
    }
}
