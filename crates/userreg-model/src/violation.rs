use std::fmt;

use serde::Serialize;

use crate::constraint::ConstraintKind;

/// Dotted location of a field inside a record, e.g. `address.house_number`.
///
/// The empty path denotes the record itself and is used for violations that
/// span several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Path of the record itself.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path of a direct child named `name`.
    pub fn join(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Re-root this path under `prefix`.
    pub fn nested_in(&self, prefix: &FieldPath) -> Self {
        if self.0.is_empty() {
            prefix.clone()
        } else {
            prefix.join(&self.0)
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<record>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

/// Category of a violation.
///
/// `MissingField` and `FieldType` are type-level failures, `FieldConstraint`
/// covers well-typed values that break a rule, and `CrossFieldInvariant` is
/// only ever produced once every field passed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    UnknownField,
    FieldType,
    FieldConstraint,
    CrossFieldInvariant,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::UnknownField => "unknown_field",
            Self::FieldType => "field_type",
            Self::FieldConstraint => "field_constraint",
            Self::CrossFieldInvariant => "cross_field_invariant",
        }
    }

    pub fn is_field_level(self) -> bool {
        !matches!(self, Self::CrossFieldInvariant)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed rule, located by field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field_path: FieldPath,
    pub violation_kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ConstraintKind>,
    pub message: String,
}

impl Violation {
    pub fn missing(field_path: FieldPath) -> Self {
        Self {
            field_path,
            violation_kind: ViolationKind::MissingField,
            constraint: None,
            message: "field required".to_string(),
        }
    }

    pub fn unknown(field_path: FieldPath) -> Self {
        Self {
            field_path,
            violation_kind: ViolationKind::UnknownField,
            constraint: None,
            message: "extra fields not permitted".to_string(),
        }
    }

    pub fn wrong_type(field_path: FieldPath, expected: &str, found: &str) -> Self {
        Self {
            field_path,
            violation_kind: ViolationKind::FieldType,
            constraint: None,
            message: format!("expected {expected}, found {found}"),
        }
    }

    pub fn constraint(field_path: FieldPath, kind: ConstraintKind, message: String) -> Self {
        Self {
            field_path,
            violation_kind: ViolationKind::FieldConstraint,
            constraint: Some(kind),
            message,
        }
    }

    pub fn cross_field(field_path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field_path,
            violation_kind: ViolationKind::CrossFieldInvariant,
            constraint: None,
            message: message.into(),
        }
    }

    /// Re-root this violation under `prefix`.
    pub fn nested_in(mut self, prefix: &FieldPath) -> Self {
        self.field_path = self.field_path.nested_in(prefix);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            self.field_path, self.violation_kind, self.message
        )
    }
}

/// Ordered collection of every violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn append(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }

    /// Re-root every violation under `prefix`.
    pub fn nested_in(self, prefix: &FieldPath) -> Self {
        self.0
            .into_iter()
            .map(|violation| violation.nested_in(prefix))
            .collect()
    }

    /// True when any violation has the given kind.
    pub fn has_kind(&self, kind: ViolationKind) -> bool {
        self.0.iter().any(|v| v.violation_kind == kind)
    }

    /// Violations reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field_path.as_str() == path)
    }

    /// `Ok(value)` when empty, otherwise the collected violations.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        match iter.next() {
            None => f.write_str("no violations"),
            Some(first) => {
                write!(f, "{first}")?;
                for violation in iter {
                    write!(f, "; {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Violations {}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
