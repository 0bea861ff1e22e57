use models::audit::AuditDetails;
use models::service::ServiceRequest;
use uuid::Uuid;

/// In-place enrichment mirroring the definition side: one generated id for
/// the service, one shared audit snapshot, fresh ids and `reference_id`
/// wiring for every attribute value.
pub fn enrich_service_request(request: &mut ServiceRequest) {
    let service = &mut request.service;
    let service_id = Uuid::new_v4().to_string();
    service.id = Some(service_id.clone());

    let audit_details = AuditDetails::stamp(
        request.request_info.user_uuid(),
        chrono::Utc::now().timestamp_millis(),
    );

    for attribute in service.attributes.iter_mut() {
        attribute.id = Some(Uuid::new_v4().to_string());
        attribute.reference_id = Some(service_id.clone());
        attribute.audit_details = Some(audit_details.clone());
    }
    service.audit_details = Some(audit_details);
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::request::{RequestInfo, UserInfo};
    use models::service::{AttributeValue, Service};

    #[test]
    fn test_enrichment_wires_ids_and_audit() {
        let mut request = ServiceRequest {
            request_info: RequestInfo {
                user_info: Some(UserInfo {
                    uuid: "citizen-1".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            service: Service {
                tenant_id: "pb".to_string(),
                service_def_id: "d-1".to_string(),
                attributes: vec![AttributeValue {
                    attribute_code: "NAME".to_string(),
                    value: serde_json::json!("asha"),
                    ..Default::default()
                }],
                ..Default::default()
            },
        };
        enrich_service_request(&mut request);
        let service = &request.service;
        let service_id = service.id.as_deref().expect("service id assigned");
        let audit = service.audit_details.as_ref().expect("audit assigned");
        assert_eq!(audit.created_by.as_deref(), Some("citizen-1"));
        for attribute in &service.attributes {
            assert!(attribute.id.is_some());
            assert_eq!(attribute.reference_id.as_deref(), Some(service_id));
            assert_eq!(attribute.audit_details.as_ref(), Some(audit));
        }
    }
}
