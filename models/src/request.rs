use serde::{Deserialize, Serialize};

/// Acting user carried on every request envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
}

impl RequestInfo {
    /// Uuid of the acting user, empty when the envelope carries none.
    pub fn user_uuid(&self) -> &str {
        self.user_info.as_ref().map(|u| u.uuid.as_str()).unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_msg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    pub status: String,
}

impl ResponseInfo {
    pub const STATUS_SUCCESSFUL: &'static str = "successful";
    pub const STATUS_FAILED: &'static str = "failed";

    /// Mirrors the request envelope back onto the response.
    pub fn from_request_info(request_info: &RequestInfo, success: bool) -> Self {
        Self {
            api_id: request_info.api_id.clone(),
            ver: request_info.ver.clone(),
            ts: request_info.ts,
            res_msg_id: None,
            msg_id: request_info.msg_id.clone(),
            status: if success {
                Self::STATUS_SUCCESSFUL.to_string()
            } else {
                Self::STATUS_FAILED.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_info_mirrors_request() {
        let req = RequestInfo {
            api_id: Some("egov-core".to_string()),
            ver: Some("1.0".to_string()),
            ts: Some(1700000000000),
            msg_id: Some("m-1".to_string()),
            user_info: Some(UserInfo {
                uuid: "u-1".to_string(),
                ..Default::default()
            }),
        };
        let res = ResponseInfo::from_request_info(&req, true);
        assert_eq!(res.api_id.as_deref(), Some("egov-core"));
        assert_eq!(res.msg_id.as_deref(), Some("m-1"));
        assert_eq!(res.status, ResponseInfo::STATUS_SUCCESSFUL);
        assert_eq!(
            ResponseInfo::from_request_info(&req, false).status,
            ResponseInfo::STATUS_FAILED
        );
    }

    #[test]
    fn test_user_uuid_defaults_to_empty() {
        assert_eq!(RequestInfo::default().user_uuid(), "");
    }
}
