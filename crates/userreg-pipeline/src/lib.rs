//! Validate user registration JSON and re-serialize it in canonical form.
//!
//! ```
//! let input = r#"{"name":"Ada Lovelace","age":36,"email":"ada@example.com","is_employed":true,
//!     "address":{"city":"London","street":"St James's Square","house_number":12}}"#;
//! let canonical = userreg_pipeline::validate_and_serialize(input).unwrap();
//! assert!(canonical.starts_with("{\n  \"name\": \"Ada Lovelace\""));
//! ```
//!
//! Failures come back as [`PipelineError`]: [`PipelineError::Parse`] when the
//! text is not a JSON object, [`PipelineError::Invalid`] with every violation
//! when it is. [`PipelineError::report`] gives a serializable rendering.

pub mod config;
mod decode;
pub mod error;
pub mod pipeline;
mod render;
pub mod report;

pub use config::{PipelineConfig, DEFAULT_INDENT};
pub use error::{ParseError, PipelineError, Result};
pub use pipeline::{validate_and_serialize, Pipeline};
pub use report::ErrorReport;
