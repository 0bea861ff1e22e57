use models::audit::AuditDetails;
use models::service_definition::ServiceDefinitionRequest;
use uuid::Uuid;

/// In-place enrichment: one generated id for the definition, one audit
/// snapshot shared by the definition and all of its attributes, a fresh id
/// per attribute and `reference_id` wired to the parent. No external calls
/// and no failure path.
pub fn enrich_service_definition_request(request: &mut ServiceDefinitionRequest) {
    let service_definition = &mut request.service_definition;
    let definition_id = Uuid::new_v4().to_string();
    service_definition.id = Some(definition_id.clone());

    let audit_details = AuditDetails::stamp(
        request.request_info.user_uuid(),
        chrono::Utc::now().timestamp_millis(),
    );

    for attribute in service_definition.attributes.iter_mut() {
        attribute.id = Some(Uuid::new_v4().to_string());
        attribute.reference_id = Some(definition_id.clone());
        attribute.audit_details = Some(audit_details.clone());
    }
    service_definition.audit_details = Some(audit_details);
}
