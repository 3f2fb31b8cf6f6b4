//! # Batch Evaluation
//!
//! Drives the evaluator over many (rule, record) inputs. A failing
//! pair records its error in its own result slot; the rest of the
//! batch still runs. Output order always matches input order.

use crate::ast::Node;
use crate::eval::{evaluate, EvalError, Record};

/// Evaluates each (rule, record) pair in order.
///
/// Returns one result per pair, in input order.
pub fn evaluate_batch(pairs: &[(Node, Record)]) -> Vec<Result<bool, EvalError>> {
    pairs
        .iter()
        .map(|(node, record)| evaluate(node, record))
        .collect()
}

/// Evaluates every rule against every record.
///
/// Results are grouped per record: the outer vector follows record
/// order, each inner vector follows rule order.
pub fn evaluate_matrix(rules: &[Node], records: &[Record]) -> Vec<Vec<Result<bool, EvalError>>> {
    records
        .iter()
        .map(|record| rules.iter().map(|rule| evaluate(rule, record)).collect())
        .collect()
}
