use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use models::error_detail::ApiDetails;
use reqwest::Url;
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;

/// Re-issues a stored failed call against its original target.
/// Any failure (unparsable url/body, transport error, non-2xx) surfaces as an
/// `Err` and is treated uniformly as "attempt failed" by the caller.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait ReplayClient: Send + Sync {
    async fn replay(&self, api_details: &ApiDetails) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct HttpReplayClientImpl {
    client: reqwest::Client,
}

impl HttpReplayClientImpl {
    pub fn new(connect_timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_sec))
            .build()
            .map_err(|e| EgovError::OtherError(format!("http client build error: {e:?}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReplayClient for HttpReplayClientImpl {
    async fn replay(&self, api_details: &ApiDetails) -> Result<()> {
        let url = Url::from_str(&api_details.url).map_err(|e| {
            EgovError::ParseError(format!(
                "cannot parse replay url from: {}, error= {e:?}",
                api_details.url
            ))
        })?;
        let body_str = api_details.request_body.as_deref().ok_or_else(|| {
            EgovError::InvalidParameter("stored error record has no request body".to_string())
        })?;
        let body: Value = serde_json::from_str(body_str).map_err(EgovError::SerdeJsonError)?;
        tracing::debug!("replaying request: url={}", url);
        self.client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(EgovError::ReqwestError)?
            .error_for_status()
            .map_err(EgovError::ReqwestError)?;
        Ok(())
    }
}
