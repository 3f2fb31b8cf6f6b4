//! # Whitespace Handling
//!
//! Whitespace is a token separator in the rule language and produces no
//! token: the tokenizer driver recognizes whitespace runs through this
//! module, advances its position bookkeeping, and drops them from the
//! output stream.

use nom::{bytes::complete::take_while1, combinator::map, error::context};

use super::token::{ParserResult, Token};

/// Parses a run of whitespace (spaces, tabs and newlines).
///
/// The returned token is internal to the tokenizer driver; it never
/// appears in the token stream handed to the parser.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<Token> {
    context(
        "whitespace expected",
        map(take_while1(|c: char| c.is_whitespace()), |ws: &str| {
            Token::Whitespace(ws.to_string())
        }),
    )(input)
}
