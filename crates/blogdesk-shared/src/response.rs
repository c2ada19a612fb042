//! Standardized console response types (RFC 7807 shaped failures).

use serde::{Deserialize, Serialize};

/// Standard successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleResponse<T> {
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ConsoleResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Structured failure reported back to the operator.
///
/// Follows the RFC 7807 Problem Details layout; `status` carries the closest
/// HTTP status so a web frontend can reuse it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Stable machine-readable failure name (`not_found`, `reference`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FailureResponse {
    pub fn new(kind: impl Into<String>, status: u16, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common failure constructors
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not_found", 404, "Not Found").with_detail(detail)
    }

    pub fn unknown_reference(detail: impl Into<String>) -> Self {
        Self::new("reference", 422, "Unknown Reference").with_detail(detail)
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new("validation", 422, "Validation Failed").with_detail(detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new("in_use", 409, "Conflict").with_detail(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_serializes_problem_shape() {
        let failure = FailureResponse::not_found("Post with id 42 not found");
        let json = serde_json::to_value(&failure).unwrap();

        assert_eq!(json["type"], "not_found");
        assert_eq!(json["status"], 404);
        assert_eq!(json["detail"], "Post with id 42 not found");
    }

    #[test]
    fn test_new_omits_detail() {
        let json = serde_json::to_value(FailureResponse::new("in_use", 409, "Conflict")).unwrap();
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_ok_wraps_data() {
        let json = serde_json::to_value(ConsoleResponse::ok(3)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 3);
    }
}
