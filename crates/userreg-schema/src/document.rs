use serde_json::{json, Map, Value};
use userreg_model::{
    Constraint, FieldKind, FieldSpec, EMPLOYMENT_MAX_AGE, EMPLOYMENT_MIN_AGE, USER_FIELDS,
};

use crate::config::SchemaConfig;

/// Dialect declared by every generated document.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Render the `User` contract as a JSON Schema document.
pub fn user_schema(config: &SchemaConfig) -> Value {
    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::from(SCHEMA_DIALECT));
    root.insert("title".to_string(), Value::from("User"));
    if let Value::Object(object) = object_schema(&USER_FIELDS, config) {
        root.extend(object);
    }

    root.insert(
        "if".to_string(),
        json!({
            "properties": { "is_employed": { "const": true } },
            "required": ["is_employed"]
        }),
    );
    root.insert(
        "then".to_string(),
        json!({
            "properties": {
                "age": { "minimum": EMPLOYMENT_MIN_AGE, "maximum": EMPLOYMENT_MAX_AGE }
            }
        }),
    );

    Value::Object(root)
}

fn object_schema(fields: &[FieldSpec], config: &SchemaConfig) -> Value {
    let mut properties = Map::new();
    for spec in fields {
        properties.insert(spec.name.to_string(), field_schema(spec, config));
    }
    let required: Vec<Value> = fields.iter().map(|spec| Value::from(spec.name)).collect();

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::from("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    if config.strict_mode {
        schema.insert("additionalProperties".to_string(), Value::Bool(false));
    }
    Value::Object(schema)
}

fn field_schema(spec: &FieldSpec, config: &SchemaConfig) -> Value {
    let mut schema = match spec.kind {
        FieldKind::Object(fields) => return object_schema(fields, config),
        kind => {
            let mut map = Map::new();
            map.insert("type".to_string(), Value::from(kind.type_name()));
            map
        }
    };

    for constraint in spec.constraints {
        match constraint {
            Constraint::MinLength(min) => {
                schema.insert("minLength".to_string(), Value::from(*min));
            }
            Constraint::Range { min, max } => {
                schema.insert("minimum".to_string(), Value::from(*min));
                schema.insert("maximum".to_string(), Value::from(*max));
            }
            Constraint::GreaterThan(bound) => {
                schema.insert("exclusiveMinimum".to_string(), Value::from(*bound));
            }
            Constraint::Pattern(pattern) => {
                schema.insert("pattern".to_string(), Value::from(pattern.source()));
            }
            Constraint::Email => {
                schema.insert("format".to_string(), Value::from("email"));
            }
        }
    }

    Value::Object(schema)
}
