use crate::audit::AuditDetails;
use crate::request::RequestInfo;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeDataType {
    #[default]
    String,
    Number,
    Text,
    Datetime,
    SingleValueList,
    MultiValueList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the owning service definition, wired in at enrichment time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub code: String,
    #[serde(default)]
    pub data_type: AttributeDataType,
    /// Allowed values for list-typed attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_details: Option<AuditDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// Generated by enrichment, assigned exactly once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tenant_id: String,
    pub code: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_details: Option<AuditDetails>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionRequest {
    pub request_info: RequestInfo,
    pub service_definition: ServiceDefinition,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub limit: i32,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionSearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    pub service_definition_criteria: ServiceDefinitionCriteria,
    #[serde(default)]
    pub pagination: Pagination,
}

impl ServiceDefinitionSearchRequest {
    /// Criteria for the duplicate check on create: one tenant, one code.
    pub fn by_tenant_and_code(tenant_id: &str, code: &str) -> Self {
        Self {
            request_info: None,
            service_definition_criteria: ServiceDefinitionCriteria {
                tenant_id: Some(tenant_id.to_string()),
                ids: vec![],
                code: vec![code.to_string()],
            },
            pagination: Pagination::default(),
        }
    }

    /// Criteria for resolving one definition by id within a tenant.
    pub fn by_tenant_and_id(tenant_id: &str, id: &str) -> Self {
        Self {
            request_info: None,
            service_definition_criteria: ServiceDefinitionCriteria {
                tenant_id: Some(tenant_id.to_string()),
                ids: vec![id.to_string()],
                code: vec![],
            },
            pagination: Pagination::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_by_tenant_and_code() {
        let req = ServiceDefinitionSearchRequest::by_tenant_and_code("pb.amritsar", "WATER");
        let c = &req.service_definition_criteria;
        assert_eq!(c.tenant_id.as_deref(), Some("pb.amritsar"));
        assert_eq!(c.code, vec!["WATER".to_string()]);
        assert!(c.ids.is_empty());
        assert_eq!(req.pagination.limit, 10);
        assert_eq!(req.pagination.offset, 0);
    }

    #[test]
    fn test_definition_round_trips_camel_case() -> Result<()> {
        let def = ServiceDefinition {
            tenant_id: "pb".to_string(),
            code: "TRADE_LICENSE".to_string(),
            attributes: vec![AttributeDefinition {
                code: "APPLICANT_NAME".to_string(),
                required: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let v = serde_json::to_value(&def)?;
        assert_eq!(v["tenantId"], "pb");
        assert_eq!(v["attributes"][0]["dataType"], "String");
        let back: ServiceDefinition = serde_json::from_value(v)?;
        assert_eq!(back, def);
        Ok(())
    }
}
