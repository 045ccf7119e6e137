use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::config::SchemaConfig;
use crate::document::user_schema;
use crate::error::{Result, SchemaError};

const MAX_REPORTED_ERRORS: usize = 4;

/// Compiled `User` schema together with the document it was built from.
pub struct UserSchema {
    validator: Validator,
    document: Value,
    config: SchemaConfig,
}

impl UserSchema {
    /// Render and compile the schema. Format assertions (`email`) are enabled.
    pub fn compile(config: SchemaConfig) -> Result<Self> {
        let document = user_schema(&config);
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .should_validate_formats(true)
            .build(&document)
            .map_err(|err| SchemaError::CompileFailed(err.to_string()))?;

        tracing::debug!(strict_mode = config.strict_mode, "compiled user schema");
        Ok(Self {
            validator,
            document,
            config,
        })
    }

    /// Validate a JSON document given as text.
    pub fn validate(&self, document: &str) -> Result<()> {
        let value: Value = serde_json::from_str(document)?;
        self.validate_value(&value)
    }

    /// Validate an already-parsed JSON document.
    pub fn validate_value(&self, value: &Value) -> Result<()> {
        if self.validator.is_valid(value) {
            return Ok(());
        }

        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect();
        let mut message = errors
            .iter()
            .take(MAX_REPORTED_ERRORS)
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        if errors.len() > MAX_REPORTED_ERRORS {
            message.push_str("; ...");
        }

        Err(SchemaError::ValidationFailed {
            count: errors.len(),
            message,
        })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }
}
