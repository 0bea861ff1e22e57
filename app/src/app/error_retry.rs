//! Error retry workflow: look up a recorded failure, check eligibility,
//! replay the original call and write the outcome back through the
//! outbound channel.
//!
//! Concurrent retries of the same id are a read-modify-write against the
//! index without a version check; last publish wins. This mirrors the
//! deployed behavior and is intentionally not guarded here.

pub mod validator;

use super::{RetryConfig, UseRetryConfig};
use anyhow::Result;
use async_trait::async_trait;
use egov_base::error::EgovError;
use infra::infra::index::ErrorDetailRepository;
use infra::infra::producer::Producer;
use infra::infra::replay::ReplayClient;
use models::error_detail::{
    ErrorDetail, ErrorDetailSearchRequest, ErrorRetryRequest, ErrorRetryResponse, Status,
};
use models::request::{RequestInfo, ResponseInfo};
use std::collections::HashMap;
use std::sync::Arc;

pub const ERROR_RETRY_ATTEMPT_SUCCESSFUL_CODE: &str = "ERROR_RETRY_ATTEMPT_PROCESSED";
pub const ERROR_RETRY_ATTEMPT_SUCCESSFUL_MSG: &str = "Error retry attempt processed";
pub const ERROR_RETRY_ATTEMPT_FAILURE_MSG: &str = "Error retry attempt failed validation";

/// Outcome of one `attempt_retry` call. An ineligible attempt is the only
/// hard failure callers see; replay-level failures are absorbed into the
/// record's state and still come back as `Processed`.
#[derive(Clone, Debug)]
pub enum RetryOutcome {
    Processed(ErrorRetryResponse),
    Ineligible(ErrorRetryResponse),
}

impl RetryOutcome {
    pub fn response(&self) -> &ErrorRetryResponse {
        match self {
            RetryOutcome::Processed(r) | RetryOutcome::Ineligible(r) => r,
        }
    }
}

/// Result of replaying the stored call, consumed internally. Replay failure
/// is expected state, not control flow: it never crosses `attempt_retry`
/// as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReplayResult {
    Replayed { status: Status },
    ReplayFailed { status: Status },
}

impl ReplayResult {
    fn status(&self) -> Status {
        match self {
            ReplayResult::Replayed { status } | ReplayResult::ReplayFailed { status } => *status,
        }
    }
}

#[async_trait]
pub trait ErrorRetryApp: Send + Sync + 'static {
    async fn attempt_retry(&self, request: &ErrorRetryRequest) -> Result<RetryOutcome>;

    async fn search(&self, request: &ErrorDetailSearchRequest) -> Result<Vec<ErrorDetail>>;
}

#[derive(Clone)]
pub struct ErrorRetryAppImpl {
    retry_config: Arc<RetryConfig>,
    error_detail_repository: Arc<dyn ErrorDetailRepository>,
    producer: Arc<dyn Producer>,
    replay_client: Arc<dyn ReplayClient>,
}

// Manual impl: debug_stub_derive's parser predates the `dyn` keyword and
// panics on these field types; output matches what the derive would emit.
impl std::fmt::Debug for ErrorRetryAppImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorRetryAppImpl")
            .field("retry_config", &self.retry_config)
            .field(
                "error_detail_repository",
                &format_args!("Arc<dyn ErrorDetailRepository>"),
            )
            .field("producer", &format_args!("Arc<dyn Producer>"))
            .field("replay_client", &format_args!("Arc<dyn ReplayClient>"))
            .finish()
    }
}

impl ErrorRetryAppImpl {
    pub fn new(
        retry_config: Arc<RetryConfig>,
        error_detail_repository: Arc<dyn ErrorDetailRepository>,
        producer: Arc<dyn Producer>,
        replay_client: Arc<dyn ReplayClient>,
    ) -> Self {
        Self {
            retry_config,
            error_detail_repository,
            producer,
            replay_client,
        }
    }

    /// FAILED only on exact equality with the threshold (count was already
    /// incremented for this attempt), otherwise the record stays PENDING.
    fn status_for_failed_replay(&self, retry_count: i32) -> Status {
        if retry_count == self.retry_config.max_retries_allowed {
            Status::Failed
        } else {
            Status::Pending
        }
    }

    async fn replay(&self, error_detail: &ErrorDetail) -> ReplayResult {
        match self.replay_client.replay(&error_detail.api_details).await {
            Ok(()) => ReplayResult::Replayed {
                status: Status::Success,
            },
            Err(e) => {
                tracing::warn!(
                    "replay failed for error record {:?}: {:?}",
                    error_detail.id,
                    e
                );
                ReplayResult::ReplayFailed {
                    status: self.status_for_failed_replay(error_detail.retry_count),
                }
            }
        }
    }

    async fn publish_updated(&self, error_detail: &ErrorDetail) -> Result<()> {
        let record = serde_json::to_value(error_detail).map_err(EgovError::SerdeJsonError)?;
        self.producer
            .push(&self.retry_config.error_topic, vec![record])
            .await
    }

    fn prepare_response(
        request_info: &RequestInfo,
        id: &str,
        message: &str,
        response_map: HashMap<String, String>,
        success: bool,
    ) -> ErrorRetryResponse {
        ErrorRetryResponse {
            response_info: ResponseInfo::from_request_info(request_info, success),
            id: id.to_string(),
            message: message.to_string(),
            response_map,
        }
    }
}

impl UseRetryConfig for ErrorRetryAppImpl {
    fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }
}

#[async_trait]
impl ErrorRetryApp for ErrorRetryAppImpl {
    async fn attempt_retry(&self, request: &ErrorRetryRequest) -> Result<RetryOutcome> {
        let records = self.error_detail_repository.find_by_id(&request.id).await?;
        // First match wins when the index holds more than one record for an
        // id; an empty result is a hard fault, not a processed attempt.
        let mut error_detail = records.into_iter().next().ok_or_else(|| {
            EgovError::NotFound(format!("no error record found for id: {}", request.id))
        })?;

        let violations =
            validator::validate_retry_attempt(&error_detail, self.retry_config.max_retries_allowed);
        if !violations.is_empty() {
            tracing::info!("retry attempt ineligible: id={}", request.id);
            return Ok(RetryOutcome::Ineligible(Self::prepare_response(
                &request.request_info,
                &request.id,
                ERROR_RETRY_ATTEMPT_FAILURE_MSG,
                violations,
                false,
            )));
        }

        // The attempt counts whatever the replay yields.
        error_detail.retry_count += 1;

        let replayed = self.replay(&error_detail).await;
        error_detail.status = replayed.status();
        self.publish_updated(&error_detail).await?;

        let mut response_map = HashMap::new();
        response_map.insert(
            ERROR_RETRY_ATTEMPT_SUCCESSFUL_CODE.to_string(),
            ERROR_RETRY_ATTEMPT_SUCCESSFUL_MSG.to_string(),
        );
        Ok(RetryOutcome::Processed(Self::prepare_response(
            &request.request_info,
            &request.id,
            ERROR_RETRY_ATTEMPT_SUCCESSFUL_MSG,
            response_map,
            true,
        )))
    }

    async fn search(&self, request: &ErrorDetailSearchRequest) -> Result<Vec<ErrorDetail>> {
        let criteria = &request.error_detail_search_criteria;
        if criteria.is_empty() {
            // nothing to filter on, skip the store round-trip
            return Ok(vec![]);
        }
        self.error_detail_repository.search(criteria).await
    }
}
