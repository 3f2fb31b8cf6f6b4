use thiserror::Error;

use crate::combine::ValidationError;
use crate::eval::EvalError;
use crate::tokenizer::token::Span;

/// Malformed rule string: bad character, unterminated literal,
/// unbalanced parentheses, missing operand or operator.
///
/// Raised by both the tokenizer and the parser; the span pinpoints the
/// offending input so callers can render a user-facing message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unrecognized character '{found}' at {span}")]
    UnrecognizedChar { found: char, span: Span },
    #[error("unterminated string literal at {span}")]
    UnterminatedString { span: Span },
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("unexpected {found} after complete expression at {span}")]
    TrailingTokens { found: String, span: Span },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
