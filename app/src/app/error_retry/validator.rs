//! Eligibility check for a retry attempt. Returns a map of violations;
//! an empty map means the record may be retried.

use models::error_detail::{ErrorDetail, Status};
use std::collections::HashMap;

pub const RETRY_ALREADY_RESOLVED_CODE: &str = "ERR_RETRY_ALREADY_RESOLVED";
pub const RETRY_ALREADY_RESOLVED_MSG: &str =
    "The concerned error has already been resolved successfully";

pub const RETRY_EXHAUSTED_CODE: &str = "ERR_RETRY_EXHAUSTED";
pub const RETRY_EXHAUSTED_MSG: &str =
    "The concerned error has exhausted its retry attempts and been marked as failed";

pub const RETRY_LIMIT_REACHED_CODE: &str = "ERR_RETRY_LIMIT_REACHED";
pub const RETRY_LIMIT_REACHED_MSG: &str =
    "The concerned error has reached the maximum number of allowed retry attempts";

/// Every violated rule is reported, not just the first.
pub fn validate_retry_attempt(
    error_detail: &ErrorDetail,
    max_retries_allowed: i32,
) -> HashMap<String, String> {
    let mut violations = HashMap::new();
    match error_detail.status {
        Status::Success => {
            violations.insert(
                RETRY_ALREADY_RESOLVED_CODE.to_string(),
                RETRY_ALREADY_RESOLVED_MSG.to_string(),
            );
        }
        Status::Failed => {
            violations.insert(
                RETRY_EXHAUSTED_CODE.to_string(),
                RETRY_EXHAUSTED_MSG.to_string(),
            );
        }
        Status::Pending => {}
    }
    if error_detail.retry_count >= max_retries_allowed {
        violations.insert(
            RETRY_LIMIT_REACHED_CODE.to_string(),
            RETRY_LIMIT_REACHED_MSG.to_string(),
        );
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Status, retry_count: i32) -> ErrorDetail {
        ErrorDetail {
            status,
            retry_count,
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_below_threshold_is_eligible() {
        assert!(validate_retry_attempt(&record(Status::Pending, 0), 3).is_empty());
        assert!(validate_retry_attempt(&record(Status::Pending, 2), 3).is_empty());
    }

    #[test]
    fn test_success_is_rejected() {
        let violations = validate_retry_attempt(&record(Status::Success, 0), 3);
        assert!(violations.contains_key(RETRY_ALREADY_RESOLVED_CODE));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_failed_is_rejected() {
        let violations = validate_retry_attempt(&record(Status::Failed, 1), 3);
        assert!(violations.contains_key(RETRY_EXHAUSTED_CODE));
    }

    #[test]
    fn test_retry_count_at_threshold_is_rejected() {
        let violations = validate_retry_attempt(&record(Status::Pending, 3), 3);
        assert!(violations.contains_key(RETRY_LIMIT_REACHED_CODE));
        assert_eq!(validate_retry_attempt(&record(Status::Pending, 4), 3).len(), 1);
    }

    #[test]
    fn test_all_violated_rules_are_reported() {
        let violations = validate_retry_attempt(&record(Status::Failed, 5), 3);
        assert!(violations.contains_key(RETRY_EXHAUSTED_CODE));
        assert!(violations.contains_key(RETRY_LIMIT_REACHED_CODE));
        assert_eq!(violations.len(), 2);
    }
}
