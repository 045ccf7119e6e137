//! Validate and normalize user registration records expressed as JSON.
//!
//! # Crate Structure
//!
//! - [`model`] — `Address` and `User`, field constraints, violations
//! - [`pipeline`] — JSON in, canonical JSON or a violation report out
//! - [`schema`] — JSON Schema export of the contract (behind `schema` feature)
//!
//! ```
//! use userreg::pipeline::validate_and_serialize;
//!
//! let err = validate_and_serialize(r#"{"name":"Mika--"}"#).unwrap_err();
//! assert!(!err.is_parse_error());
//! ```

/// Re-export model types.
pub mod model {
    pub use userreg_model::*;
}

/// Re-export pipeline types.
pub mod pipeline {
    pub use userreg_pipeline::*;
}

/// Re-export schema types (requires `schema` feature).
#[cfg(feature = "schema")]
pub mod schema {
    pub use userreg_schema::*;
}
