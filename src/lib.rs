//! # astrule: Boolean Business-Rule Engine
//!
//! `astrule` turns boolean business-rule strings such as
//! `"(age > 30 AND department = 'Sales') OR experience >= 5"` into an
//! Abstract Syntax Tree, evaluates that tree against structured records,
//! and combines existing trees into new composite rules.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Rule string → Tokenizer → Parser → AST → Evaluator → bool
//! ```
//!
//! * [`tokenizer`]: lexical analysis of the rule string
//! * [`parser`]: recursive descent over the token stream
//! * [`ast`]: the node model shared by parser, evaluator and combinator
//! * [`eval`]: evaluation of an AST against a [`Record`](eval::Record)
//! * [`combine`]: structural combination of existing ASTs
//! * [`batch`]: batch evaluation with per-pair error capture
//! * [`rule`]: the rule string / AST pairing handed to storage
//!
//! Every operation is a pure computation over its inputs: no AST node is
//! mutated after construction, so all entry points are safe to call
//! concurrently without locking.
//!
//! ## Grammar
//!
//! `AND` and `OR` share a single precedence tier and associate strictly
//! left-to-right; explicit parentheses express any mixed-precedence
//! intent. See [`parser`] for details.

pub mod ast;
pub mod batch;
pub mod combine;
pub mod error;
pub mod eval;
pub mod parser;
pub mod rule;
pub mod tokenizer;

// Re-exports
pub use ast::{Node, Value};
pub use batch::{evaluate_batch, evaluate_matrix};
pub use combine::{combine, ValidationError};
pub use error::{Error, Result, SyntaxError};
pub use eval::{evaluate, EvalError, FieldValue, Record};
pub use parser::parse;
pub use rule::Rule;
pub use tokenizer::keyword::Connective;
pub use tokenizer::symbol::Comparator;
