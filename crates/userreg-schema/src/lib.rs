//! JSON Schema export of the user registration contract.
//!
//! Renders the model's field tables as a draft 2020-12 JSON Schema, including
//! the employment/age rule as an `if`/`then` clause, so other services can
//! check documents against the same contract before sending them.

pub mod config;
pub mod document;
pub mod error;
pub mod validator;

pub use config::SchemaConfig;
pub use document::{user_schema, SCHEMA_DIALECT};
pub use error::{Result, SchemaError};
pub use validator::UserSchema;
