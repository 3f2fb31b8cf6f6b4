//! # AST Model
//!
//! The node types shared by the parser, the evaluator and the
//! combinator. A rule AST is a strict binary tree: every operator node
//! owns exactly two children, operand nodes are leaves, and there are
//! no back-pointers or shared nodes. Equality is structural.
//!
//! The serde representation (used for the at-rest form consumed and
//! produced by the storage collaborator) tags each node with its kind
//! and keeps literal values as native JSON numbers, strings and
//! booleans so their runtime type survives a round trip.

use core::fmt;

use serde::{Deserialize, Serialize};

pub use crate::tokenizer::keyword::Connective;
pub use crate::tokenizer::symbol::Comparator;

/// A literal value carried by an operand node.
///
/// A closed union: the evaluator's type checks match exhaustively over
/// it. Boolean literals have no surface syntax; they enter through
/// deserialized ASTs or trees built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "boolean",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            // the grammar has no escapes, so a string holding one quote
            // style must be rendered with the other
            Value::String(s) if s.contains('\'') => write!(f, "\"{}\"", s),
            Value::String(s) => write!(f, "'{}'", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A rule AST node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Internal node: a logical combination of two sub-trees.
    Operator {
        connective: Connective,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Leaf node: a single field comparison.
    Operand {
        field: String,
        comparator: Comparator,
        value: Value,
    },
}

impl Node {
    /// Builds a leaf comparison node.
    pub fn comparison(
        field: impl Into<String>,
        comparator: Comparator,
        value: impl Into<Value>,
    ) -> Self {
        Node::Operand {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }

    /// Builds an operator node owning the two sub-trees.
    pub fn operator(connective: Connective, left: Node, right: Node) -> Self {
        Node::Operator {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Node, right: Node) -> Self {
        Node::operator(Connective::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::operator(Connective::Or, left, right)
    }
}

/// Renders the AST back into a rule expression.
///
/// Operator nodes are fully parenthesized, so re-parsing the rendered
/// string reproduces the tree exactly. The rendered string is a
/// provenance artifact; evaluation always works on the tree itself.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operator {
                connective,
                left,
                right,
            } => write!(f, "({} {} {})", left, connective, right),
            Node::Operand {
                field,
                comparator,
                value,
            } => write!(f, "{} {} {}", field, comparator, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_tree() -> Node {
        Node::or(
            Node::and(
                Node::comparison("age", Comparator::Greater, 30.0),
                Node::comparison("department", Comparator::Equal, "Sales"),
            ),
            Node::comparison("experience", Comparator::GreaterEqual, 5.0),
        )
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample_tree(), sample_tree());
        assert_ne!(
            Node::comparison("age", Comparator::Greater, 30.0),
            Node::comparison("age", Comparator::GreaterEqual, 30.0)
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(
            sample_tree().to_string(),
            "((age > 30 AND department = 'Sales') OR experience >= 5)"
        );
    }

    #[test]
    fn test_render_drops_trailing_zero() {
        let node = Node::comparison("age", Comparator::Greater, 30.0);
        assert_eq!(node.to_string(), "age > 30");

        let node = Node::comparison("score", Comparator::LessEqual, 99.5);
        assert_eq!(node.to_string(), "score <= 99.5");
    }

    #[test]
    fn test_render_quotes_strings_by_content() {
        let plain = Node::comparison("name", Comparator::Equal, "Sales");
        assert_eq!(plain.to_string(), "name = 'Sales'");

        let apostrophe = Node::comparison("name", Comparator::Equal, "it's");
        assert_eq!(apostrophe.to_string(), r#"name = "it's""#);
    }

    #[test]
    fn test_render_reparses_apostrophe_strings() {
        let node = crate::parser::parse(r#"name = "it's""#).unwrap();
        assert_eq!(crate::parser::parse(&node.to_string()).unwrap(), node);
    }

    #[test]
    fn test_serde_round_trip() {
        let tree = sample_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_serde_shape() {
        let node = Node::comparison("age", Comparator::Greater, 30.0);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "operand",
                "field": "age",
                "comparator": ">",
                "value": 30.0
            })
        );
    }

    #[test]
    fn test_serde_preserves_value_types() {
        // "30" the string and 30 the number must not collapse
        let as_string = Node::comparison("code", Comparator::Equal, "30");
        let as_number = Node::comparison("code", Comparator::Equal, 30.0);

        let s = serde_json::to_string(&as_string).unwrap();
        let n = serde_json::to_string(&as_number).unwrap();

        assert_eq!(serde_json::from_str::<Node>(&s).unwrap(), as_string);
        assert_eq!(serde_json::from_str::<Node>(&n).unwrap(), as_number);
        assert_ne!(as_string, as_number);
    }

    #[test]
    fn test_deserialize_operator_node() {
        let json = r#"
        {
            "type": "operator",
            "connective": "AND",
            "left": {
                "type": "operand",
                "field": "age",
                "comparator": ">",
                "value": 30
            },
            "right": {
                "type": "operand",
                "field": "verified",
                "comparator": "=",
                "value": true
            }
        }
        "#;

        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(
            node,
            Node::and(
                Node::comparison("age", Comparator::Greater, 30.0),
                Node::comparison("verified", Comparator::Equal, true),
            )
        );
    }
}
