//! Query bodies for the search-index service.

use models::error_detail::ErrorDetailSearchCriteria;
use models::service_definition::ServiceDefinitionSearchRequest;
use serde_json::{json, Value};

fn term(field: &str, value: &str) -> Value {
    let mut clause = serde_json::Map::new();
    clause.insert(field.to_string(), Value::String(value.to_string()));
    json!({ "term": clause })
}

fn terms(field: &str, values: &[String]) -> Value {
    let mut clause = serde_json::Map::new();
    clause.insert(field.to_string(), json!(values));
    json!({ "terms": clause })
}

fn bool_must(clauses: Vec<Value>) -> Value {
    json!({ "query": { "bool": { "must": clauses } } })
}

/// Lookup of one error record by its id.
pub fn error_lookup_body(id: &str) -> Value {
    bool_must(vec![term("id.keyword", id)])
}

/// Filtered error search over id and/or uuid.
pub fn error_search_body(criteria: &ErrorDetailSearchCriteria) -> Value {
    let mut clauses = Vec::new();
    if let Some(id) = criteria.id.as_deref() {
        clauses.push(term("id.keyword", id));
    }
    if let Some(uuid) = criteria.error_detail_uuid.as_deref() {
        clauses.push(term("uuid.keyword", uuid));
    }
    bool_must(clauses)
}

/// Service-definition search with tenant/code/id filters and pagination.
pub fn service_definition_search_body(request: &ServiceDefinitionSearchRequest) -> Value {
    let criteria = &request.service_definition_criteria;
    let mut clauses = Vec::new();
    if let Some(tenant_id) = criteria.tenant_id.as_deref() {
        clauses.push(term("tenantId.keyword", tenant_id));
    }
    if !criteria.code.is_empty() {
        clauses.push(terms("code.keyword", &criteria.code));
    }
    if !criteria.ids.is_empty() {
        clauses.push(terms("id.keyword", &criteria.ids));
    }
    let mut body = bool_must(clauses);
    body["from"] = json!(request.pagination.offset);
    body["size"] = json!(request.pagination.limit);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::error_detail::ErrorDetailSearchCriteria;

    #[test]
    fn test_error_lookup_body_filters_on_id() {
        let body = error_lookup_body("E1");
        assert_eq!(
            body["query"]["bool"]["must"][0]["term"]["id.keyword"],
            "E1"
        );
    }

    #[test]
    fn test_error_search_body_includes_populated_filters_only() {
        let body = error_search_body(&ErrorDetailSearchCriteria {
            id: None,
            error_detail_uuid: Some("u-1".to_string()),
        });
        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 1);
        assert_eq!(must[0]["term"]["uuid.keyword"], "u-1");

        let body = error_search_body(&ErrorDetailSearchCriteria {
            id: Some("E1".to_string()),
            error_detail_uuid: Some("u-1".to_string()),
        });
        assert_eq!(body["query"]["bool"]["must"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_service_definition_search_body_paginates() {
        let req = ServiceDefinitionSearchRequest::by_tenant_and_code("pb", "WATER");
        let body = service_definition_search_body(&req);
        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must[0]["term"]["tenantId.keyword"], "pb");
        assert_eq!(must[1]["terms"]["code.keyword"][0], "WATER");
        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 10);
    }
}
