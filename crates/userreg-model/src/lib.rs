//! Field constraints and validated records for user registration data.
//!
//! Records are only obtainable through their constructors, which check every
//! field and aggregate all failures into [`Violations`]. [`User::new`] then
//! applies the employment/age rule. The static field tables ([`USER_FIELDS`],
//! [`ADDRESS_FIELDS`]) describe the same contract for decoders and schema
//! exporters.

pub mod address;
pub mod constraint;
pub mod email;
pub mod field;
pub mod user;
pub mod violation;

pub use address::{Address, ADDRESS_FIELDS};
pub use constraint::{Constraint, ConstraintKind, FieldValue, Pattern, NAME_PATTERN};
pub use email::{check_email, normalize_email, EmailError};
pub use field::{find_field, FieldKind, FieldSpec};
pub use user::{User, EMPLOYMENT_MAX_AGE, EMPLOYMENT_MIN_AGE, USER_FIELDS};
pub use violation::{FieldPath, Violation, ViolationKind, Violations};
