use crate::app::error_codes::*;
use anyhow::Result;
use egov_base::error::EgovError;
use infra::infra::service_definition::ServiceDefinitionRepository;
use models::service_definition::{
    ServiceDefinition, ServiceDefinitionRequest, ServiceDefinitionSearchRequest,
};
use std::collections::HashSet;

/// Fails fast with no side effects: existence check against the store,
/// then in-list attribute code uniqueness.
pub async fn validate_service_definition_request(
    repository: &dyn ServiceDefinitionRepository,
    request: &ServiceDefinitionRequest,
) -> Result<()> {
    let service_definition = &request.service_definition;
    validate_service_definition_existence(repository, service_definition).await?;
    validate_attribute_definition_uniqueness(service_definition)?;
    Ok(())
}

async fn validate_service_definition_existence(
    repository: &dyn ServiceDefinitionRepository,
    service_definition: &ServiceDefinition,
) -> Result<()> {
    let existing = repository
        .get_service_definitions(&ServiceDefinitionSearchRequest::by_tenant_and_code(
            &service_definition.tenant_id,
            &service_definition.code,
        ))
        .await?;
    if !existing.is_empty() {
        return Err(EgovError::validation(
            SERVICE_DEFINITION_ALREADY_EXISTS_ERR_CODE,
            SERVICE_DEFINITION_ALREADY_EXISTS_ERR_MSG,
        )
        .into());
    }
    Ok(())
}

/// First duplicate wins; attributes after it are never inspected, so the
/// reported violation is deterministic for a given input order.
fn validate_attribute_definition_uniqueness(service_definition: &ServiceDefinition) -> Result<()> {
    let mut attribute_codes = HashSet::new();
    for attribute in &service_definition.attributes {
        if !attribute_codes.insert(attribute.code.as_str()) {
            return Err(EgovError::validation(
                ATTRIBUTE_CODE_UNIQUENESS_ERR_CODE,
                ATTRIBUTE_CODE_UNIQUENESS_ERR_MSG,
            )
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra::infra::service_definition::MockServiceDefinitionRepository;
    use models::service_definition::AttributeDefinition;

    fn attribute(code: &str) -> AttributeDefinition {
        AttributeDefinition {
            code: code.to_string(),
            ..Default::default()
        }
    }

    fn request_with_attributes(codes: &[&str]) -> ServiceDefinitionRequest {
        ServiceDefinitionRequest {
            service_definition: ServiceDefinition {
                tenant_id: "pb".to_string(),
                code: "WATER".to_string(),
                attributes: codes.iter().map(|c| attribute(c)).collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn validation_code(err: &anyhow::Error) -> Option<String> {
        match err.downcast_ref::<EgovError>() {
            Some(EgovError::Validation { code, .. }) => Some(code.clone()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_valid_request_passes() -> Result<()> {
        let mut repository = MockServiceDefinitionRepository::new();
        repository
            .expect_get_service_definitions()
            .times(1)
            .withf(|req| {
                let c = &req.service_definition_criteria;
                c.tenant_id.as_deref() == Some("pb") && c.code == vec!["WATER".to_string()]
            })
            .returning(|_| Ok(vec![]));
        validate_service_definition_request(&repository, &request_with_attributes(&["A", "B"]))
            .await
    }

    #[tokio::test]
    async fn test_existing_definition_is_rejected() {
        let mut repository = MockServiceDefinitionRepository::new();
        repository
            .expect_get_service_definitions()
            .returning(|_| Ok(vec![ServiceDefinition::default()]));
        let err = validate_service_definition_request(
            &repository,
            &request_with_attributes(&["A"]),
        )
        .await
        .unwrap_err();
        assert_eq!(
            validation_code(&err).as_deref(),
            Some(SERVICE_DEFINITION_ALREADY_EXISTS_ERR_CODE)
        );
    }

    #[tokio::test]
    async fn test_duplicate_attribute_code_is_rejected() {
        let mut repository = MockServiceDefinitionRepository::new();
        repository
            .expect_get_service_definitions()
            .returning(|_| Ok(vec![]));
        let err = validate_service_definition_request(
            &repository,
            &request_with_attributes(&["A", "B", "A", "C"]),
        )
        .await
        .unwrap_err();
        assert_eq!(
            validation_code(&err).as_deref(),
            Some(ATTRIBUTE_CODE_UNIQUENESS_ERR_CODE)
        );
    }
}
