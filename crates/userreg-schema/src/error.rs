/// Errors that can occur while compiling or applying the user schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The generated schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// The document failed schema validation.
    #[error("schema validation failed ({count} error(s)): {message}")]
    ValidationFailed { count: usize, message: String },

    /// The document is not valid JSON.
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
