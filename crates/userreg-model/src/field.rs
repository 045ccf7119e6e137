use std::fmt;

use crate::constraint::{Constraint, FieldValue};
use crate::violation::{FieldPath, Violation, Violations};

/// Declared type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    /// Nested record described by its own field table.
    Object(&'static [FieldSpec]),
}

impl FieldKind {
    /// Name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object(_) => "object",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A named, typed field and the constraints that must hold for it alone.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    /// Run every constraint against `value`, collecting all failures.
    pub fn check(&self, path: &FieldPath, value: FieldValue<'_>) -> Violations {
        self.constraints
            .iter()
            .filter_map(|constraint| {
                constraint
                    .check(value)
                    .err()
                    .map(|message| Violation::constraint(path.clone(), constraint.kind(), message))
            })
            .collect()
    }
}

/// Look up a field by name in a record table.
pub fn find_field(fields: &'static [FieldSpec], name: &str) -> Option<&'static FieldSpec> {
    fields.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{ConstraintKind, NAME_PATTERN};

    static NAME: FieldSpec = FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        constraints: &[Constraint::MinLength(2), Constraint::Pattern(&NAME_PATTERN)],
    };

    #[test]
    fn check_collects_every_failed_constraint() {
        let violations = NAME.check(&FieldPath::from("name"), FieldValue::Text("1"));
        let kinds: Vec<_> = violations.iter().filter_map(|v| v.constraint).collect();
        assert_eq!(kinds, vec![ConstraintKind::MinLength, ConstraintKind::Pattern]);
    }

    #[test]
    fn check_passes_valid_values() {
        assert!(NAME
            .check(&FieldPath::from("name"), FieldValue::Text("Ada"))
            .is_empty());
    }

    #[test]
    fn type_names_match_json_vocabulary() {
        assert_eq!(FieldKind::Text.type_name(), "string");
        assert_eq!(FieldKind::Object(&[]).to_string(), "object");
    }
}
