use std::fmt;
use std::io;

use userreg_pipeline::PipelineError;
use userreg_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const MALFORMED_INPUT: i32 = 61;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => USAGE,
        io::ErrorKind::InvalidData => MALFORMED_INPUT,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Exit code for a pipeline failure that was already reported on stdout.
pub fn pipeline_exit_code(err: &PipelineError) -> i32 {
    match err {
        PipelineError::Parse(_) => MALFORMED_INPUT,
        PipelineError::Invalid(_) => DATA_INVALID,
        PipelineError::Serialize(_) => INTERNAL,
    }
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match err {
        SchemaError::InvalidJson(_) => MALFORMED_INPUT,
        SchemaError::ValidationFailed { .. } => DATA_INVALID,
        SchemaError::CompileFailed(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use userreg_pipeline::{ParseError, Pipeline};

    use super::*;

    #[test]
    fn parse_and_validation_failures_exit_differently() {
        let parse = Pipeline::new().validate("{").unwrap_err();
        assert_eq!(pipeline_exit_code(&parse), MALFORMED_INPUT);

        let invalid = Pipeline::new().validate("{}").unwrap_err();
        assert_eq!(pipeline_exit_code(&invalid), DATA_INVALID);

        let shape = PipelineError::Parse(ParseError::NotAnObject { found: "array" });
        assert_eq!(pipeline_exit_code(&shape), MALFORMED_INPUT);
    }

    #[test]
    fn missing_input_file_is_a_usage_error() {
        let err = io_error(
            "failed reading input",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code, USAGE);
        assert_eq!(err.to_string(), "failed reading input: gone");
    }

    #[test]
    fn schema_errors_map_to_exit_codes() {
        let err = schema_error(
            "schema check failed",
            SchemaError::ValidationFailed {
                count: 1,
                message: "bad".to_string(),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            schema_error("compile", SchemaError::CompileFailed("x".to_string())).code,
            INTERNAL
        );
    }
}
