use crate::app::error_codes::*;
use anyhow::Result;
use egov_base::error::EgovError;
use models::service::Service;
use models::service_definition::{AttributeDataType, AttributeDefinition, ServiceDefinition};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

const MAX_STRING_LENGTH: usize = 64;
const MAX_TEXT_LENGTH: usize = 1024;

/// Validates a submitted service against its stored definition. Fails fast
/// on the first violated rule, no side effects.
pub fn validate_service_against_definition(
    service: &Service,
    definition: &ServiceDefinition,
) -> Result<()> {
    let definitions_by_code: HashMap<&str, &AttributeDefinition> = definition
        .attributes
        .iter()
        .map(|a| (a.code.as_str(), a))
        .collect();

    let mut provided_codes = HashSet::new();
    for attribute in &service.attributes {
        let attribute_definition = definitions_by_code
            .get(attribute.attribute_code.as_str())
            .ok_or_else(|| {
                EgovError::validation(
                    SERVICE_REQUEST_UNRECOGNIZED_ATTRIBUTE_CODE,
                    SERVICE_REQUEST_UNRECOGNIZED_ATTRIBUTE_MSG,
                )
            })?;
        if !provided_codes.insert(attribute.attribute_code.as_str()) {
            return Err(EgovError::validation(
                SERVICE_REQUEST_ATTRIBUTE_VALUES_UNIQUENESS_ERR_CODE,
                SERVICE_REQUEST_ATTRIBUTE_VALUES_UNIQUENESS_ERR_MSG,
            )
            .into());
        }
        validate_value(attribute_definition, &attribute.value)?;
    }

    for attribute_definition in &definition.attributes {
        if attribute_definition.required
            && !provided_codes.contains(attribute_definition.code.as_str())
        {
            return Err(EgovError::validation(
                SERVICE_REQUEST_REQUIRED_ATTRIBUTE_NOT_PROVIDED_ERR_CODE,
                SERVICE_REQUEST_REQUIRED_ATTRIBUTE_NOT_PROVIDED_ERR_MSG,
            )
            .into());
        }
    }
    Ok(())
}

fn invalid_type(message: &str) -> anyhow::Error {
    EgovError::validation(SERVICE_REQUEST_INVALID_DATA_TYPE_CODE, message).into()
}

fn validate_value(definition: &AttributeDefinition, value: &Value) -> Result<()> {
    match definition.data_type {
        AttributeDataType::String => {
            let s = value
                .as_str()
                .ok_or_else(|| invalid_type(SERVICE_REQUEST_ATTRIBUTE_INVALID_STRING_VALUE_MSG))?;
            if s.chars().count() > MAX_STRING_LENGTH {
                return Err(EgovError::validation(
                    INVALID_SIZE_OF_STRING_CODE,
                    INVALID_SIZE_OF_STRING_MSG,
                )
                .into());
            }
        }
        AttributeDataType::Text => {
            let s = value
                .as_str()
                .ok_or_else(|| invalid_type(SERVICE_REQUEST_ATTRIBUTE_INVALID_TEXT_VALUE_MSG))?;
            if s.chars().count() > MAX_TEXT_LENGTH {
                return Err(EgovError::validation(
                    INVALID_SIZE_OF_TEXT_CODE,
                    INVALID_SIZE_OF_TEXT_MSG,
                )
                .into());
            }
        }
        AttributeDataType::Number => {
            if !value.is_number() {
                return Err(invalid_type(
                    SERVICE_REQUEST_ATTRIBUTE_INVALID_NUMBER_VALUE_MSG,
                ));
            }
        }
        AttributeDataType::Datetime => {
            if !value.is_i64() {
                return Err(invalid_type(
                    SERVICE_REQUEST_ATTRIBUTE_INVALID_DATETIME_VALUE_MSG,
                ));
            }
        }
        AttributeDataType::SingleValueList => {
            let s = value.as_str().ok_or_else(|| {
                invalid_type(SERVICE_REQUEST_ATTRIBUTE_INVALID_SINGLE_VALUE_LIST_VALUE_MSG)
            })?;
            validate_list_member(definition, s)?;
        }
        AttributeDataType::MultiValueList => {
            let items = value.as_array().ok_or_else(|| {
                invalid_type(SERVICE_REQUEST_ATTRIBUTE_INVALID_MULTI_VALUE_LIST_VALUE_MSG)
            })?;
            for item in items {
                let s = item.as_str().ok_or_else(|| {
                    invalid_type(SERVICE_REQUEST_ATTRIBUTE_INVALID_MULTI_VALUE_LIST_VALUE_MSG)
                })?;
                validate_list_member(definition, s)?;
            }
        }
    }
    Ok(())
}

fn validate_list_member(definition: &AttributeDefinition, value: &str) -> Result<()> {
    // a definition with no declared values accepts anything
    if !definition.values.is_empty() && !definition.values.iter().any(|v| v == value) {
        return Err(EgovError::validation(
            SERVICE_REQUEST_ATTRIBUTE_INVALID_VALUE_CODE,
            SERVICE_REQUEST_ATTRIBUTE_INVALID_VALUE_MSG,
        )
        .into());
    }
    Ok(())
}
