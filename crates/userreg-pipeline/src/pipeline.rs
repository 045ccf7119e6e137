use serde_json::Value;
use userreg_model::{normalize_email, Address, FieldPath, User, Violations, USER_FIELDS};

use crate::config::PipelineConfig;
use crate::decode::{json_type_name, Decoder, Record};
use crate::error::{ParseError, PipelineError, Result};
use crate::render::to_indented_json;

/// Validate `input` with the default configuration and return canonical JSON.
pub fn validate_and_serialize(input: &str) -> Result<String> {
    Pipeline::new().validate_and_serialize(input)
}

/// Parse, validate, and re-serialize user registration records.
///
/// Each call is one linear pass: parse, field checks (all of them), the
/// employment/age rule (only if every field passed), then serialization.
/// A pipeline holds no state beyond its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with default config.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with explicit config.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Validate `input` and return the canonical JSON rendering of the user.
    pub fn validate_and_serialize(&self, input: &str) -> Result<String> {
        let user = self.validate(input)?;
        self.serialize(&user)
    }

    /// Validate `input` and return the typed user.
    pub fn validate(&self, input: &str) -> Result<User> {
        let value = self.parse(input)?;
        self.validate_value(&value)
    }

    /// Validate an already-parsed JSON value.
    pub fn validate_value(&self, value: &Value) -> Result<User> {
        let object = value.as_object().ok_or(ParseError::NotAnObject {
            found: json_type_name(value),
        })?;

        let root = FieldPath::root();
        let mut violations = Violations::new();
        let record = Decoder::new(self.config.reject_unknown_fields).decode_record(
            object,
            &USER_FIELDS,
            &root,
            &mut violations,
        );
        if !violations.is_empty() {
            tracing::debug!(violations = violations.len(), "field validation failed");
            return Err(PipelineError::Invalid(violations));
        }

        let user = self.build_user(&record, &root).map_err(|violations| {
            tracing::debug!(
                violations = violations.len(),
                "cross-field validation failed"
            );
            PipelineError::Invalid(violations)
        })?;

        tracing::debug!("user record accepted");
        Ok(user)
    }

    /// Render a validated user with the configured indentation.
    pub fn serialize(&self, user: &User) -> Result<String> {
        to_indented_json(user, self.config.indent).map_err(PipelineError::Serialize)
    }

    fn parse(&self, input: &str) -> std::result::Result<Value, ParseError> {
        if let Some(max) = self.config.max_input_bytes {
            if input.len() > max {
                return Err(ParseError::TooLarge {
                    size: input.len(),
                    max,
                });
            }
        }

        let value = serde_json::from_str(input)?;
        tracing::debug!(bytes = input.len(), "parsed input");
        Ok(value)
    }

    fn build_user(
        &self,
        record: &Record<'_>,
        root: &FieldPath,
    ) -> std::result::Result<User, Violations> {
        let address_path = root.join("address");
        let fields = record.record("address", root)?;
        let address = Address::new(
            fields.text("city", &address_path)?,
            fields.text("street", &address_path)?,
            fields.integer("house_number", &address_path)?,
        )
        .map_err(|violations| violations.nested_in(&address_path))?;

        let email = record.text("email", root)?;
        let email = if self.config.normalize_email {
            normalize_email(email)
        } else {
            email.to_string()
        };

        User::new(
            record.text("name", root)?,
            record.integer("age", root)?,
            email,
            record.boolean("is_employed", root)?,
            address,
        )
    }
}
