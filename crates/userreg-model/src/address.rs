use serde::Serialize;

use crate::constraint::{Constraint, FieldValue};
use crate::field::{FieldKind, FieldSpec};
use crate::violation::{FieldPath, Violations};

/// Field table for [`Address`], in declaration order.
pub static ADDRESS_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "city",
        kind: FieldKind::Text,
        constraints: &[Constraint::MinLength(2)],
    },
    FieldSpec {
        name: "street",
        kind: FieldKind::Text,
        constraints: &[Constraint::MinLength(3)],
    },
    FieldSpec {
        name: "house_number",
        kind: FieldKind::Integer,
        constraints: &[Constraint::GreaterThan(0)],
    },
];

/// A postal address. Only obtainable through [`Address::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    city: String,
    street: String,
    house_number: i64,
}

impl Address {
    /// Validate every field and build the address, or return all violations.
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        house_number: i64,
    ) -> Result<Self, Violations> {
        let city = city.into();
        let street = street.into();
        let root = FieldPath::root();
        let [city_spec, street_spec, house_number_spec] = &ADDRESS_FIELDS;

        let mut violations = Violations::new();
        violations.append(city_spec.check(&root.join(city_spec.name), FieldValue::Text(&city)));
        violations.append(
            street_spec.check(&root.join(street_spec.name), FieldValue::Text(&street)),
        );
        violations.append(house_number_spec.check(
            &root.join(house_number_spec.name),
            FieldValue::Integer(house_number),
        ));

        violations.into_result(Self {
            city,
            street,
            house_number,
        })
    }

    pub fn fields() -> &'static [FieldSpec] {
        &ADDRESS_FIELDS
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn house_number(&self) -> i64 {
        self.house_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintKind;
    use crate::violation::ViolationKind;

    #[test]
    fn valid_address_is_constructed() {
        let address = Address::new("New York", "5th Avenue", 123).unwrap();
        assert_eq!(address.city(), "New York");
        assert_eq!(address.street(), "5th Avenue");
        assert_eq!(address.house_number(), 123);
    }

    #[test]
    fn non_positive_house_number_is_rejected() {
        for house_number in [0, -1] {
            let violations = Address::new("Berlin", "5th Avenue", house_number).unwrap_err();
            assert_eq!(violations.len(), 1);
            let violation = &violations.as_slice()[0];
            assert_eq!(violation.field_path.as_str(), "house_number");
            assert_eq!(violation.violation_kind, ViolationKind::FieldConstraint);
            assert_eq!(violation.constraint, Some(ConstraintKind::GreaterThan));
        }
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let violations = Address::new("B", "St", 0).unwrap_err();
        let paths: Vec<_> = violations.iter().map(|v| v.field_path.as_str()).collect();
        assert_eq!(paths, vec!["city", "street", "house_number"]);
    }

    #[test]
    fn serializes_in_declaration_order() {
        let address = Address::new("Berlin", "Main Street", 14).unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#"{"city":"Berlin","street":"Main Street","house_number":14}"#
        );
    }
}
