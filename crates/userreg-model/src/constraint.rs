use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::email::check_email;

const NAME_PATTERN_SOURCE: &str = r"^[A-Za-z\s]+$";

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(NAME_PATTERN_SOURCE));

/// ASCII letters and whitespace, nothing else.
pub static NAME_PATTERN: Pattern = Pattern {
    source: NAME_PATTERN_SOURCE,
    description: "letters and whitespace only",
    regex: &NAME_REGEX,
};

// Sources are literals; a failure here is a build-time mistake.
pub(crate) fn compile(source: &str) -> Regex {
    Regex::new(source).expect("static pattern must compile")
}

/// Anchored regular expression with a human-readable description.
pub struct Pattern {
    source: &'static str,
    description: &'static str,
    regex: &'static LazyLock<Regex>,
}

impl Pattern {
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("description", &self.description)
            .finish()
    }
}

/// Tag identifying which rule a constraint violation broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    MinLength,
    Range,
    GreaterThan,
    Pattern,
    Email,
}

impl ConstraintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinLength => "min_length",
            Self::Range => "range",
            Self::GreaterThan => "greater_than",
            Self::Pattern => "pattern",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well-typed field value, borrowed from wherever it was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Boolean(bool),
}

/// An atomic rule attached to a single field.
///
/// Constraints only inspect values of the kind they are declared for; a text
/// rule given an integer passes trivially; the field's declared type is
/// enforced before constraints run.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Minimum length in Unicode scalar values.
    MinLength(usize),
    /// Inclusive integer range.
    Range { min: i64, max: i64 },
    GreaterThan(i64),
    Pattern(&'static Pattern),
    Email,
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::MinLength(_) => ConstraintKind::MinLength,
            Self::Range { .. } => ConstraintKind::Range,
            Self::GreaterThan(_) => ConstraintKind::GreaterThan,
            Self::Pattern(_) => ConstraintKind::Pattern,
            Self::Email => ConstraintKind::Email,
        }
    }

    /// Check `value`, returning a human-readable message on failure.
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), String> {
        match (self, value) {
            (Self::MinLength(min), FieldValue::Text(text)) => {
                let length = text.chars().count();
                if length < *min {
                    return Err(format!(
                        "should have at least {min} characters, found {length}"
                    ));
                }
                Ok(())
            }
            (Self::Range { min, max }, FieldValue::Integer(number)) => {
                if !(*min..=*max).contains(&number) {
                    return Err(format!("should be between {min} and {max}, found {number}"));
                }
                Ok(())
            }
            (Self::GreaterThan(bound), FieldValue::Integer(number)) => {
                if number <= *bound {
                    return Err(format!("should be greater than {bound}, found {number}"));
                }
                Ok(())
            }
            (Self::Pattern(pattern), FieldValue::Text(text)) => {
                if !pattern.is_match(text) {
                    return Err(format!(
                        "should contain {} (pattern '{}')",
                        pattern.description(),
                        pattern.source()
                    ));
                }
                Ok(())
            }
            (Self::Email, FieldValue::Text(text)) => check_email(text)
                .map_err(|err| format!("value is not a valid email address: {err}")),
            _ => Ok(()),
        }
    }
}
