use serde::{Deserialize, Serialize};

/// Audit metadata stamped onto records at enrichment time.
/// One snapshot is shared by a record and everything it owns, so all four
/// fields always carry the same actor and the same millisecond timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<i64>,
}

impl AuditDetails {
    pub fn stamp(user_uuid: &str, now_millis: i64) -> Self {
        Self {
            created_by: Some(user_uuid.to_string()),
            last_modified_by: Some(user_uuid.to_string()),
            created_time: Some(now_millis),
            last_modified_time: Some(now_millis),
        }
    }
}
