//! # Evaluator Component
//!
//! Walks a rule AST against a supplied record and produces a boolean
//! verdict. Evaluation is a pure function of (AST, record): no hidden
//! state, no mutation of either input, fully reproducible.
//!
//! Operator nodes evaluate both children before combining. There is no
//! short-circuit skipping: the rule language has no side effects, so
//! skipping would not change verdicts, but it would hide a missing
//! field or type mismatch in the skipped branch. Errors surface the
//! same way no matter which branch would have decided the verdict.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::{Comparator, Connective, Node, Value};

/// A field value inside a record.
///
/// Records are flat: a field holds a scalar or null, never a nested
/// structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// The input data a rule is evaluated against: a mapping from field
/// name to value. Supplied fresh per evaluation call and never mutated
/// by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a record from a JSON object string.
    ///
    /// The payload must already be free of transport framing; nested
    /// objects and arrays are rejected because the record model is
    /// flat.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style insert for constructing records inline.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

/// Evaluation failure: the record cannot answer the comparison the
/// rule asks for. Deterministic for a given (AST, record) pair.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("field '{field}' not found in record")]
    FieldNotFound { field: String },
    #[error("cannot compare field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a rule AST against a record.
pub fn evaluate(node: &Node, record: &Record) -> EvalResult<bool> {
    match node {
        Node::Operator {
            connective,
            left,
            right,
        } => {
            // both branches always run so either side's error surfaces
            let lhs = evaluate(left, record)?;
            let rhs = evaluate(right, record)?;
            Ok(match connective {
                Connective::And => lhs && rhs,
                Connective::Or => lhs || rhs,
            })
        }
        Node::Operand {
            field,
            comparator,
            value,
        } => {
            let actual = record.get(field).ok_or_else(|| EvalError::FieldNotFound {
                field: field.clone(),
            })?;
            compare(field, actual, *comparator, value)
        }
    }
}

fn compare(
    field: &str,
    actual: &FieldValue,
    comparator: Comparator,
    expected: &Value,
) -> EvalResult<bool> {
    match comparator {
        // value equality, honoring the literal's type
        Comparator::Equal => match (actual, expected) {
            (FieldValue::Number(a), Value::Number(b)) => Ok(a == b),
            (FieldValue::String(a), Value::String(b)) => Ok(a == b),
            (FieldValue::Bool(a), Value::Bool(b)) => Ok(a == b),
            _ => Err(type_mismatch(field, expected.type_name(), actual, expected)),
        },
        // ordering comparators require both sides numeric
        _ => {
            let (a, b) = match (actual, expected) {
                (FieldValue::Number(a), Value::Number(b)) => (*a, *b),
                _ => return Err(type_mismatch(field, "number", actual, expected)),
            };
            Ok(match comparator {
                Comparator::Greater => a > b,
                Comparator::GreaterEqual => a >= b,
                Comparator::Less => a < b,
                _ => a <= b,
            })
        }
    }
}

fn type_mismatch(
    field: &str,
    wanted: &'static str,
    actual: &FieldValue,
    expected: &Value,
) -> EvalError {
    // report whichever side broke the expectation
    let actual_name = if actual.type_name() == wanted {
        expected.type_name()
    } else {
        actual.type_name()
    };
    EvalError::TypeMismatch {
        field: field.to_string(),
        expected: wanted,
        actual: actual_name,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;

    fn sample_record() -> Record {
        Record::new()
            .with("age", 35.0)
            .with("department", "Sales")
            .with("experience", 3.0)
            .with("active", true)
    }

    #[test]
    fn test_numeric_comparisons() {
        let record = sample_record();
        let test_cases = [
            ("age > 30", true),
            ("age > 35", false),
            ("age >= 35", true),
            ("age < 40", true),
            ("age <= 34", false),
            ("age = 35", true),
        ];

        for (input, expected) in test_cases.iter() {
            let node = parse(input).unwrap();
            assert_eq!(evaluate(&node, &record).unwrap(), *expected, "{}", input);
        }
    }

    #[test]
    fn test_string_equality() {
        let record = sample_record();
        let node = parse("department = 'Sales'").unwrap();
        assert!(evaluate(&node, &record).unwrap());

        let node = parse("department = 'IT'").unwrap();
        assert!(!evaluate(&node, &record).unwrap());
    }

    #[test]
    fn test_boolean_equality() {
        let record = sample_record();
        let node = Node::comparison("active", Comparator::Equal, true);
        assert!(evaluate(&node, &record).unwrap());
    }

    #[test]
    fn test_connectives() {
        let record = sample_record();
        let test_cases = [
            ("age > 30 AND department = 'Sales'", true),
            ("age > 30 AND department = 'IT'", false),
            ("age > 40 OR department = 'Sales'", true),
            ("age > 40 OR department = 'IT'", false),
        ];

        for (input, expected) in test_cases.iter() {
            let node = parse(input).unwrap();
            assert_eq!(evaluate(&node, &record).unwrap(), *expected, "{}", input);
        }
    }

    #[test]
    fn test_missing_field() {
        let record = Record::new().with("department", "Sales");
        let node = parse("age > 30").unwrap();
        assert_eq!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::FieldNotFound {
                field: "age".to_string()
            }
        );
    }

    #[test]
    fn test_no_short_circuit_error_surfacing() {
        // the left branch alone decides the verdict, but the right
        // branch's missing field must still surface
        let record = sample_record();

        let node = parse("age > 40 AND salary > 100").unwrap();
        assert!(matches!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::FieldNotFound { ref field } if field == "salary"
        ));

        let node = parse("age > 30 OR salary > 100").unwrap();
        assert!(matches!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::FieldNotFound { ref field } if field == "salary"
        ));
    }

    #[test]
    fn test_ordering_rejects_strings() {
        let record = sample_record();
        let node = parse("department > 10").unwrap();
        assert_eq!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::TypeMismatch {
                field: "department".to_string(),
                expected: "number",
                actual: "string",
            }
        );
    }

    #[test]
    fn test_ordering_rejects_string_literal() {
        let record = sample_record();
        let node = parse("age > 'thirty'").unwrap();
        assert_eq!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::TypeMismatch {
                field: "age".to_string(),
                expected: "number",
                actual: "string",
            }
        );
    }

    #[test]
    fn test_equality_across_types_is_error() {
        let record = sample_record();
        let node = parse("age = 'Sales'").unwrap();
        assert!(matches!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_null_field_is_not_comparable() {
        let record = Record::new().with("age", FieldValue::Null);
        let node = parse("age > 30").unwrap();
        assert_eq!(
            evaluate(&node, &record).unwrap_err(),
            EvalError::TypeMismatch {
                field: "age".to_string(),
                expected: "number",
                actual: "null",
            }
        );
    }

    #[test]
    fn test_record_from_json() {
        let record =
            Record::from_json(r#"{"age": 35, "department": "Sales", "active": true, "note": null}"#)
                .unwrap();
        assert_eq!(record.get("age"), Some(&FieldValue::Number(35.0)));
        assert_eq!(
            record.get("department"),
            Some(&FieldValue::String("Sales".to_string()))
        );
        assert_eq!(record.get("active"), Some(&FieldValue::Bool(true)));
        assert_eq!(record.get("note"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_record_from_json_rejects_nested() {
        assert!(Record::from_json(r#"{"user": {"age": 35}}"#).is_err());
        assert!(Record::from_json(r#"{"tags": [1, 2]}"#).is_err());
        assert!(Record::from_json(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_evaluation_is_pure() {
        let record = sample_record();
        let node = parse("age > 30 AND department = 'Sales'").unwrap();
        let first = evaluate(&node, &record).unwrap();
        let second = evaluate(&node, &record).unwrap();
        assert_eq!(first, second);
        assert_eq!(record, sample_record());
    }
}
