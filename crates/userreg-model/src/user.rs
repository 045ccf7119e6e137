use serde::Serialize;

use crate::address::{Address, ADDRESS_FIELDS};
use crate::constraint::{Constraint, FieldValue, NAME_PATTERN};
use crate::field::{FieldKind, FieldSpec};
use crate::violation::{FieldPath, Violation, Violations};

/// Youngest age at which a user may be employed.
pub const EMPLOYMENT_MIN_AGE: i64 = 18;

/// Oldest age at which a user may be employed.
pub const EMPLOYMENT_MAX_AGE: i64 = 65;

/// Field table for [`User`], in declaration order.
pub static USER_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        constraints: &[Constraint::MinLength(2), Constraint::Pattern(&NAME_PATTERN)],
    },
    FieldSpec {
        name: "age",
        kind: FieldKind::Integer,
        constraints: &[Constraint::Range { min: 0, max: 120 }],
    },
    FieldSpec {
        name: "email",
        kind: FieldKind::Text,
        constraints: &[Constraint::Email],
    },
    FieldSpec {
        name: "is_employed",
        kind: FieldKind::Boolean,
        constraints: &[],
    },
    FieldSpec {
        name: "address",
        kind: FieldKind::Object(&ADDRESS_FIELDS),
        constraints: &[],
    },
];

/// A registrant. Owns exactly one [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    age: i64,
    email: String,
    is_employed: bool,
    address: Address,
}

impl User {
    /// Validate every field, then the employment/age rule, and build the user.
    ///
    /// The employment rule is only evaluated when all field checks pass, so a
    /// bad `age` is reported as a field violation and never as a cross-field one.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
        is_employed: bool,
        address: Address,
    ) -> Result<Self, Violations> {
        let name = name.into();
        let email = email.into();
        let root = FieldPath::root();
        let [name_spec, age_spec, email_spec, ..] = &USER_FIELDS;

        let mut violations = Violations::new();
        violations.append(name_spec.check(&root.join(name_spec.name), FieldValue::Text(&name)));
        violations.append(age_spec.check(&root.join(age_spec.name), FieldValue::Integer(age)));
        violations.append(
            email_spec.check(&root.join(email_spec.name), FieldValue::Text(&email)),
        );
        if !violations.is_empty() {
            return Err(violations);
        }

        let user = Self {
            name,
            age,
            email,
            is_employed,
            address,
        };
        user.check_employment_age()?;
        Ok(user)
    }

    /// Employed users must be between [`EMPLOYMENT_MIN_AGE`] and
    /// [`EMPLOYMENT_MAX_AGE`] years old, inclusive.
    pub fn check_employment_age(&self) -> Result<(), Violation> {
        if self.is_employed && !(EMPLOYMENT_MIN_AGE..=EMPLOYMENT_MAX_AGE).contains(&self.age) {
            return Err(Violation::cross_field(
                FieldPath::root(),
                format!(
                    "employed users must be between {EMPLOYMENT_MIN_AGE} and \
                     {EMPLOYMENT_MAX_AGE} years old, found age {}",
                    self.age
                ),
            ));
        }
        Ok(())
    }

    pub fn fields() -> &'static [FieldSpec] {
        &USER_FIELDS
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_employed(&self) -> bool {
        self.is_employed
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::constraint::ConstraintKind;
    use crate::violation::ViolationKind;

    fn address() -> Address {
        Address::new("New York", "5th Avenue", 123).unwrap()
    }

    #[test]
    fn valid_user_is_constructed() {
        let user = User::new("John Doe", 60, "john.doe@example.com", true, address()).unwrap();
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.age(), 60);
        assert_eq!(user.email(), "john.doe@example.com");
        assert!(user.is_employed());
        assert_eq!(user.address().house_number(), 123);
    }

    #[rstest]
    #[case(17)]
    #[case(66)]
    #[case(0)]
    #[case(120)]
    fn employed_user_outside_working_age_breaks_invariant(#[case] age: i64) {
        let violations = User::new("Max Muller", age, "max@example.com", true, address())
            .unwrap_err();
        assert_eq!(violations.len(), 1);
        let violation = &violations.as_slice()[0];
        assert_eq!(violation.violation_kind, ViolationKind::CrossFieldInvariant);
        assert!(violation.field_path.is_root());
    }

    #[rstest]
    #[case(18)]
    #[case(65)]
    fn working_age_bounds_are_inclusive(#[case] age: i64) {
        assert!(User::new("Max Muller", age, "max@example.com", true, address()).is_ok());
    }

    #[test]
    fn unemployed_users_have_no_age_window() {
        assert!(User::new("Young Kid", 10, "kid@example.com", false, address()).is_ok());
        assert!(User::new("Old Timer", 99, "old@example.com", false, address()).is_ok());
    }

    #[test]
    fn field_errors_take_precedence_over_invariant() {
        let violations = User::new("Max Muller", 130, "max@example.com", true, address())
            .unwrap_err();
        assert_eq!(violations.len(), 1);
        let violation = &violations.as_slice()[0];
        assert_eq!(violation.violation_kind, ViolationKind::FieldConstraint);
        assert_eq!(violation.constraint, Some(ConstraintKind::Range));
        assert_eq!(violation.field_path.as_str(), "age");
    }

    #[test]
    fn all_field_errors_are_reported_together() {
        let violations = User::new("7", -5, "nope", false, address()).unwrap_err();
        assert_eq!(violations.at("name").count(), 2);
        assert_eq!(violations.at("age").count(), 1);
        assert_eq!(violations.at("email").count(), 1);
        assert!(!violations.has_kind(ViolationKind::CrossFieldInvariant));
    }

    #[test]
    fn serializes_nested_address_in_declaration_order() {
        let user = User::new("John Doe", 60, "john.doe@example.com", true, address()).unwrap();
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            concat!(
                r#"{"name":"John Doe","age":60,"email":"john.doe@example.com","is_employed":true,"#,
                r#""address":{"city":"New York","street":"5th Avenue","house_number":123}}"#
            )
        );
    }

    #[test]
    fn field_table_lists_declared_fields() {
        let names: Vec<_> = User::fields().iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["name", "age", "email", "is_employed", "address"]);
    }
}
