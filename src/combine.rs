//! # Rule Combinator
//!
//! Joins existing rule ASTs into a single larger rule under one
//! connective. Input roots are consumed and become subtrees of the
//! result; nothing is deep-copied.

use thiserror::Error;

use crate::ast::{Connective, Node};

/// Combination input failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("combining rules requires at least 2 rules, got {0}")]
    NotEnoughRules(usize),
}

/// Combines two or more rule ASTs into one under the given connective.
///
/// The roots are folded left to right, so the result is a left-leaning
/// chain: `combine([a, b, c], AND)` produces `(a AND b) AND c`. This
/// matches how the parser shapes an unparenthesized `a AND b AND c`.
pub fn combine(roots: Vec<Node>, connective: Connective) -> Result<Node, ValidationError> {
    let count = roots.len();
    let mut roots = roots.into_iter();
    match (roots.next(), roots.next()) {
        (Some(first), Some(second)) => {
            let seed = Node::operator(connective, first, second);
            Ok(roots.fold(seed, |acc, next| Node::operator(connective, acc, next)))
        }
        _ => Err(ValidationError::NotEnoughRules(count)),
    }
}
