//! Stable error codes surfaced to callers of the service workflows.

pub const SERVICE_DEFINITION_ALREADY_EXISTS_ERR_CODE: &str =
    "SERVICE_DEFINITION_ALREADY_EXISTS_ERR_CODE";
pub const SERVICE_DEFINITION_ALREADY_EXISTS_ERR_MSG: &str =
    "Service definition with the given tenantId and code combination already exists";

pub const ATTRIBUTE_CODE_UNIQUENESS_ERR_CODE: &str = "ATTRIBUTE_CODE_UNIQUENESS_ERR_CODE";
pub const ATTRIBUTE_CODE_UNIQUENESS_ERR_MSG: &str =
    "Attribute definitions provided as part of service definition must have unique codes";

pub const SERVICE_REQUEST_INVALID_SERVICE_DEF_ID_CODE: &str =
    "SERVICE_REQUEST_INVALID_SERVICE_DEF_ID";
pub const SERVICE_REQUEST_INVALID_SERVICE_DEF_ID_MSG: &str = "Invalid service definition id";

pub const SERVICE_REQUEST_UNRECOGNIZED_ATTRIBUTE_CODE: &str =
    "SERVICE_REQUEST_UNRECOGNIZED_ATTRIBUTE_CODE";
pub const SERVICE_REQUEST_UNRECOGNIZED_ATTRIBUTE_MSG: &str =
    "Provided attribute code is not a part of the concerned service definition";

pub const SERVICE_REQUEST_ATTRIBUTE_VALUES_UNIQUENESS_ERR_CODE: &str =
    "SERVICE_REQUEST_ATTRIBUTE_VALUES_UNIQUENESS_ERR_CODE";
pub const SERVICE_REQUEST_ATTRIBUTE_VALUES_UNIQUENESS_ERR_MSG: &str =
    "Attribute values being passed against a particular service definition must be unique";

pub const SERVICE_REQUEST_REQUIRED_ATTRIBUTE_NOT_PROVIDED_ERR_CODE: &str =
    "SERVICE_REQUEST_REQUIRED_ATTRIBUTE_NOT_PROVIDED_ERR_CODE";
pub const SERVICE_REQUEST_REQUIRED_ATTRIBUTE_NOT_PROVIDED_ERR_MSG: &str =
    "Mandatory attribute value not provided as part of service request";

pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_VALUE_CODE: &str =
    "SERVICE_REQUEST_ATTRIBUTE_INVALID_VALUE_CODE";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_VALUE_MSG: &str =
    "Attribute value provided against the attribute definition is not one of the allowed values";

pub const SERVICE_REQUEST_INVALID_DATA_TYPE_CODE: &str = "SERVICE_REQUEST_INVALID_DATA_TYPE";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_NUMBER_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type Number must be a number";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_STRING_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type String must be a string";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_TEXT_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type Text must be a string";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_DATETIME_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type Datetime must be an epoch timestamp";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_SINGLE_VALUE_LIST_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type single value list must be an instance of String";
pub const SERVICE_REQUEST_ATTRIBUTE_INVALID_MULTI_VALUE_LIST_VALUE_MSG: &str =
    "Attribute Value provided against the attribute definition of type multi value list must be an instance of list";

pub const INVALID_SIZE_OF_STRING_CODE: &str = "INVALID_SIZE_OF_STRING_CODE";
pub const INVALID_SIZE_OF_STRING_MSG: &str = "String value cannot be of length greater than 64";

pub const INVALID_SIZE_OF_TEXT_CODE: &str = "INVALID_SIZE_OF_TEXT_CODE";
pub const INVALID_SIZE_OF_TEXT_MSG: &str = "Text value cannot be of length greater than 1024";
