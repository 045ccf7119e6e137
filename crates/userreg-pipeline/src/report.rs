use serde::Serialize;
use userreg_model::Violations;

use crate::error::{ParseError, PipelineError};
use crate::render::to_indented_json;

/// Serializable description of a pipeline failure.
///
/// The `error` tag tells "not valid JSON" (`parse_error`) apart from "valid
/// JSON that broke the rules" (`validation_error`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorReport {
    ParseError {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
    },
    ValidationError {
        violations: Violations,
    },
    InternalError {
        message: String,
    },
}

impl ErrorReport {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => "parse_error",
            Self::ValidationError { .. } => "validation_error",
            Self::InternalError { .. } => "internal_error",
        }
    }

    /// Render with `indent` spaces per level, as [`crate::Pipeline::serialize`] does.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        to_indented_json(self, indent)
    }
}

impl From<&PipelineError> for ErrorReport {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::Parse(ParseError::Syntax {
                line,
                column,
                message,
            }) => Self::ParseError {
                message: message.clone(),
                line: Some(*line),
                column: Some(*column),
            },
            PipelineError::Parse(other) => Self::ParseError {
                message: other.to_string(),
                line: None,
                column: None,
            },
            PipelineError::Invalid(violations) => Self::ValidationError {
                violations: violations.clone(),
            },
            PipelineError::Serialize(err) => Self::InternalError {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use userreg_model::{FieldPath, Violation};

    use super::*;

    #[test]
    fn parse_error_report_carries_position() {
        let err = PipelineError::Parse(ParseError::Syntax {
            line: 1,
            column: 9,
            message: "EOF while parsing an object at line 1 column 9".to_string(),
        });
        let value = serde_json::to_value(err.report()).unwrap();
        assert_eq!(value["error"], "parse_error");
        assert_eq!(value["line"], 1);
        assert_eq!(value["column"], 9);
    }

    #[test]
    fn shape_error_report_omits_position() {
        let err = PipelineError::Parse(ParseError::NotAnObject { found: "array" });
        let value = serde_json::to_value(err.report()).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "parse_error",
                "message": "expected a JSON object at the top level, found array"
            })
        );
    }

    #[test]
    fn validation_report_lists_violations() {
        let err = PipelineError::Invalid(Violation::missing(FieldPath::from("name")).into());
        let report = err.report();
        assert_eq!(report.kind(), "validation_error");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "error": "validation_error",
                "violations": [{
                    "field_path": "name",
                    "violation_kind": "missing_field",
                    "message": "field required"
                }]
            })
        );
    }

    #[test]
    fn to_json_follows_the_indent() {
        let report = ErrorReport::InternalError {
            message: "boom".to_string(),
        };
        assert_eq!(
            report.to_json(0).unwrap(),
            r#"{"error":"internal_error","message":"boom"}"#
        );
        assert_eq!(
            report.to_json(2).unwrap(),
            "{\n  \"error\": \"internal_error\",\n  \"message\": \"boom\"\n}"
        );
    }
}
