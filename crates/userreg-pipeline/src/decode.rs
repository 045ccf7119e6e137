//! Strict decoding of JSON objects against model field tables.
//!
//! Every declared field is visited, so one pass reports every missing field,
//! type mismatch, and constraint failure. No coercion happens between JSON
//! value kinds: `"60"` is not an integer and `60.0` is not an integer either.

use serde_json::{Map, Number, Value};
use userreg_model::{find_field, FieldKind, FieldPath, FieldSpec, FieldValue, Violation, Violations};

/// A field value that passed its type check.
#[derive(Debug)]
pub(crate) enum Decoded<'a> {
    Scalar(FieldValue<'a>),
    Object(Record<'a>),
}

/// Decoded fields of one object, in declaration order.
#[derive(Debug, Default)]
pub(crate) struct Record<'a> {
    values: Vec<(&'static str, Decoded<'a>)>,
}

impl<'a> Record<'a> {
    fn get(&self, name: &str) -> Option<&Decoded<'a>> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub(crate) fn text(&self, name: &str, path: &FieldPath) -> Result<&'a str, Violation> {
        match self.get(name) {
            Some(Decoded::Scalar(FieldValue::Text(text))) => Ok(*text),
            _ => Err(Violation::missing(path.join(name))),
        }
    }

    pub(crate) fn integer(&self, name: &str, path: &FieldPath) -> Result<i64, Violation> {
        match self.get(name) {
            Some(Decoded::Scalar(FieldValue::Integer(number))) => Ok(*number),
            _ => Err(Violation::missing(path.join(name))),
        }
    }

    pub(crate) fn boolean(&self, name: &str, path: &FieldPath) -> Result<bool, Violation> {
        match self.get(name) {
            Some(Decoded::Scalar(FieldValue::Boolean(flag))) => Ok(*flag),
            _ => Err(Violation::missing(path.join(name))),
        }
    }

    pub(crate) fn record(&self, name: &str, path: &FieldPath) -> Result<&Record<'a>, Violation> {
        match self.get(name) {
            Some(Decoded::Object(record)) => Ok(record),
            _ => Err(Violation::missing(path.join(name))),
        }
    }
}

pub(crate) struct Decoder {
    reject_unknown_fields: bool,
}

impl Decoder {
    pub(crate) fn new(reject_unknown_fields: bool) -> Self {
        Self {
            reject_unknown_fields,
        }
    }

    /// Decode `object` against `fields`, pushing every failure to `violations`.
    pub(crate) fn decode_record<'a>(
        &self,
        object: &'a Map<String, Value>,
        fields: &'static [FieldSpec],
        path: &FieldPath,
        violations: &mut Violations,
    ) -> Record<'a> {
        let mut record = Record::default();

        for spec in fields {
            let field_path = path.join(spec.name);
            let Some(value) = object.get(spec.name) else {
                violations.push(Violation::missing(field_path));
                continue;
            };
            if let Some(decoded) = self.decode_field(value, spec, &field_path, violations) {
                record.values.push((spec.name, decoded));
            }
        }

        if self.reject_unknown_fields {
            for key in object.keys() {
                if find_field(fields, key).is_none() {
                    violations.push(Violation::unknown(path.join(key)));
                }
            }
        }

        record
    }

    fn decode_field<'a>(
        &self,
        value: &'a Value,
        spec: &FieldSpec,
        path: &FieldPath,
        violations: &mut Violations,
    ) -> Option<Decoded<'a>> {
        let scalar = match (spec.kind, value) {
            (FieldKind::Text, Value::String(text)) => FieldValue::Text(text),
            (FieldKind::Integer, Value::Number(number)) => match strict_integer(number) {
                Ok(number) => FieldValue::Integer(number),
                Err(found) => {
                    violations.push(Violation::wrong_type(path.clone(), "integer", found));
                    return None;
                }
            },
            (FieldKind::Boolean, Value::Bool(flag)) => FieldValue::Boolean(*flag),
            (FieldKind::Object(fields), Value::Object(object)) => {
                let record = self.decode_record(object, fields, path, violations);
                return Some(Decoded::Object(record));
            }
            (kind, other) => {
                violations.push(Violation::wrong_type(
                    path.clone(),
                    kind.type_name(),
                    json_type_name(other),
                ));
                return None;
            }
        };

        violations.append(spec.check(path, scalar));
        Some(Decoded::Scalar(scalar))
    }
}

/// Read a JSON integer from its literal text. `-0` is the integer zero.
fn strict_integer(number: &Number) -> Result<i64, &'static str> {
    let text = number.as_str();
    if text.contains(['.', 'e', 'E']) {
        return Err("number with a fractional part or exponent");
    }
    text.parse::<i64>()
        .map_err(|_| "integer outside the 64-bit signed range")
}

/// JSON vocabulary name of a value's kind.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use userreg_model::{ViolationKind, ADDRESS_FIELDS, USER_FIELDS};

    use super::*;

    fn decode(value: &Value, reject_unknown_fields: bool) -> Violations {
        let mut violations = Violations::new();
        let object = value.as_object().unwrap();
        Decoder::new(reject_unknown_fields).decode_record(
            object,
            &USER_FIELDS,
            &FieldPath::root(),
            &mut violations,
        );
        violations
    }

    fn valid_user() -> Value {
        json!({
            "name": "John Doe",
            "age": 60,
            "email": "john.doe@example.com",
            "is_employed": true,
            "address": { "city": "New York", "street": "5th Avenue", "house_number": 123 }
        })
    }

    #[test]
    fn valid_object_has_no_violations() {
        assert!(decode(&valid_user(), true).is_empty());
    }

    #[rstest]
    #[case("age", json!("60"), "expected integer, found string")]
    #[case("age", json!(-0.0), "expected integer, found number with a fractional part or exponent")]
    #[case("age", json!(60.0), "expected integer, found number with a fractional part or exponent")]
    #[case("age", json!(u64::MAX), "expected integer, found integer outside the 64-bit signed range")]
    #[case("name", json!(42), "expected string, found integer")]
    #[case("is_employed", json!("true"), "expected boolean, found string")]
    #[case("is_employed", json!(1), "expected boolean, found integer")]
    #[case("address", json!(null), "expected object, found null")]
    #[case("address", json!([]), "expected object, found array")]
    fn mistyped_fields_are_not_coerced(
        #[case] field: &str,
        #[case] value: Value,
        #[case] message: &str,
    ) {
        let mut input = valid_user();
        input[field] = value;

        let violations = decode(&input, false);
        assert_eq!(violations.len(), 1);
        let violation = &violations.as_slice()[0];
        assert_eq!(violation.field_path.as_str(), field);
        assert_eq!(violation.violation_kind, ViolationKind::FieldType);
        assert_eq!(violation.message, message);
    }

    #[test]
    fn missing_fields_are_reported_with_nested_paths() {
        let input = json!({ "name": "John Doe", "address": { "city": "Paris" } });
        let violations = decode(&input, false);
        let paths: Vec<_> = violations.iter().map(|v| v.field_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "age",
                "email",
                "is_employed",
                "address.street",
                "address.house_number"
            ]
        );
        assert!(violations
            .iter()
            .all(|v| v.violation_kind == ViolationKind::MissingField));
    }

    #[test]
    fn unknown_fields_are_only_reported_in_strict_mode() {
        let mut input = valid_user();
        input["nickname"] = json!("JD");
        input["address"]["zip"] = json!("10001");

        assert!(decode(&input, false).is_empty());

        let violations = decode(&input, true);
        assert!(violations
            .iter()
            .all(|v| v.violation_kind == ViolationKind::UnknownField));
        assert_eq!(violations.at("nickname").count(), 1);
        assert_eq!(violations.at("address.zip").count(), 1);
    }

    #[test]
    fn type_and_constraint_failures_are_collected_together() {
        let mut input = valid_user();
        input["age"] = json!("sixty");
        input["name"] = json!("J");
        input["address"]["house_number"] = json!(0);

        let violations = decode(&input, false);
        assert_eq!(violations.len(), 3);
        assert!(violations.has_kind(ViolationKind::FieldType));
        assert!(violations.has_kind(ViolationKind::FieldConstraint));
        assert_eq!(violations.at("address.house_number").count(), 1);
    }

    #[test]
    fn record_accessors_return_decoded_values() {
        let input = json!({ "city": "Berlin", "street": "Main Street", "house_number": 14 });
        let mut violations = Violations::new();
        let root = FieldPath::root();
        let record = Decoder::new(false).decode_record(
            input.as_object().unwrap(),
            &ADDRESS_FIELDS,
            &root,
            &mut violations,
        );

        assert!(violations.is_empty());
        assert_eq!(record.text("city", &root).unwrap(), "Berlin");
        assert_eq!(record.integer("house_number", &root).unwrap(), 14);
        assert!(record.boolean("city", &root).is_err());
    }

    #[rstest]
    #[case("-0", 0)]
    #[case("0", 0)]
    #[case("-17", -17)]
    #[case("9223372036854775807", i64::MAX)]
    fn integer_literals_are_read_exactly(#[case] literal: &str, #[case] expected: i64) {
        let number: Number = serde_json::from_str(literal).unwrap();
        assert_eq!(strict_integer(&number), Ok(expected));
    }

    #[rstest]
    #[case("1e2", "number with a fractional part or exponent")]
    #[case("-0.0", "number with a fractional part or exponent")]
    #[case("9223372036854775808", "integer outside the 64-bit signed range")]
    #[case("-99999999999999999999", "integer outside the 64-bit signed range")]
    fn non_integer_literals_are_rejected(#[case] literal: &str, #[case] reason: &str) {
        let number: Number = serde_json::from_str(literal).unwrap();
        assert_eq!(strict_integer(&number), Err(reason));
    }

    #[test]
    fn json_type_names_distinguish_integers_and_floats() {
        assert_eq!(json_type_name(&json!(1)), "integer");
        assert_eq!(json_type_name(&json!(1.5)), "number");
    }
}
