//! # Rule Model
//!
//! A stored rule: the raw rule string the author wrote, its parsed
//! AST, and descriptive metadata. The id is assigned by whatever
//! persistence layer holds the rule; rules built in-process carry
//! none.

use serde::{Deserialize, Serialize};

use crate::ast::Node;
use crate::error::SyntaxError;
use crate::eval::{evaluate, EvalError, Record};
use crate::parser::parse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub rule_string: String,
    pub ast: Node,
}

impl Rule {
    /// Parses a rule string into a named rule.
    ///
    /// The raw string is kept alongside the AST for provenance.
    pub fn parse(
        name: impl Into<String>,
        description: impl Into<String>,
        rule_string: impl Into<String>,
    ) -> Result<Self, SyntaxError> {
        let rule_string = rule_string.into();
        let ast = parse(&rule_string)?;
        Ok(Self {
            rule_id: None,
            name: name.into(),
            description: description.into(),
            rule_string,
            ast,
        })
    }

    pub fn with_id(mut self, rule_id: i64) -> Self {
        self.rule_id = Some(rule_id);
        self
    }

    pub fn evaluate(&self, record: &Record) -> Result<bool, EvalError> {
        evaluate(&self.ast, record)
    }
}
