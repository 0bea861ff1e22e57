use crate::audit::AuditDetails;
use crate::request::{RequestInfo, ResponseInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle of a recorded error. PENDING is the only non-terminal state:
/// a record never leaves SUCCESS or FAILED.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Pending,
    Success,
    Failed,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Success | Status::Failed)
    }
}

/// The original failed call, kept verbatim so it can be replayed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Serialized JSON body of the original request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// One stored error entry: the failed call plus its retry history.
/// `id` is assigned by the indexing pipeline and immutable afterwards;
/// `retry_count` only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub api_details: ApiDetails,
    #[serde(default)]
    pub errors: Vec<ErrorEntity>,
    #[serde(default)]
    pub retry_count: i32,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_details: Option<AuditDetails>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRetryRequest {
    pub request_info: RequestInfo,
    pub id: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRetryResponse {
    pub response_info: ResponseInfo,
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub response_map: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetailSearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail_uuid: Option<String>,
}

impl ErrorDetailSearchCriteria {
    /// An all-empty criteria matches nothing and must not reach the store.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.error_detail_uuid.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetailSearchRequest {
    pub request_info: RequestInfo,
    pub error_detail_search_criteria: ErrorDetailSearchCriteria,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_status_serializes_uppercase() -> Result<()> {
        assert_eq!(serde_json::to_string(&Status::Pending)?, "\"PENDING\"");
        assert_eq!(serde_json::to_string(&Status::Failed)?, "\"FAILED\"");
        let s: Status = serde_json::from_str("\"SUCCESS\"")?;
        assert_eq!(s, Status::Success);
        Ok(())
    }

    #[test]
    fn test_terminal_states() {
        assert!(!Status::Pending.is_terminal());
        assert!(Status::Success.is_terminal());
        assert!(Status::Failed.is_terminal());
    }

    #[test]
    fn test_error_detail_deserializes_index_document() -> Result<()> {
        // Shape as stored by the indexing pipeline (camelCase keys).
        let doc = serde_json::json!({
            "id": "E1",
            "uuid": "a-b-c",
            "apiDetails": {
                "url": "http://billing/charge",
                "requestBody": "{\"amount\":10}"
            },
            "retryCount": 2,
            "status": "PENDING"
        });
        let detail: ErrorDetail = serde_json::from_value(doc)?;
        assert_eq!(detail.id.as_deref(), Some("E1"));
        assert_eq!(detail.api_details.url, "http://billing/charge");
        assert_eq!(detail.retry_count, 2);
        assert_eq!(detail.status, Status::Pending);
        assert!(detail.errors.is_empty());
        Ok(())
    }

    #[test]
    fn test_search_criteria_is_empty() {
        assert!(ErrorDetailSearchCriteria::default().is_empty());
        assert!(!ErrorDetailSearchCriteria {
            id: Some("E1".to_string()),
            ..Default::default()
        }
        .is_empty());
        assert!(!ErrorDetailSearchCriteria {
            error_detail_uuid: Some("u".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
