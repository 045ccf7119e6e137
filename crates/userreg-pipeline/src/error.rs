use userreg_model::Violations;

use crate::report::ErrorReport;

/// The input could not be read as a JSON object.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not syntactically valid JSON.
    #[error("{message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The text is valid JSON but not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// The text exceeds the configured size limit.
    #[error("input too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Errors returned by the validation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input was not a JSON object.
    #[error("malformed input: {0}")]
    Parse(#[from] ParseError),

    /// The input was a JSON object but broke one or more rules.
    #[error("validation failed: {0}")]
    Invalid(Violations),

    /// The validated record could not be rendered.
    #[error("failed to serialize validated record: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PipelineError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Violations behind a validation failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Invalid(violations) => Some(violations),
            _ => None,
        }
    }

    /// Machine-readable rendering of this error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
