//! # Symbol Token Handling
//!
//! This module defines the symbols (comparators and delimiters)
//! recognized by the rule language and provides functionality for
//! parsing symbol tokens.
//!
//! ## Parsing Strategy
//!
//! Symbols are parsed using a longest-match approach so that the
//! two-character comparators `>=` and `<=` are recognized instead of
//! being split into separate `>`/`<` and `=` tokens. A bare `=` is a
//! comparator as well, not an assignment.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    error::context,
};

use super::token::{ParserResult, Token};

/// Comparison operators applied between a field and a literal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, Serialize, Deserialize,
)]
pub enum Comparator {
    /// Greater than or equal comparison (`>=`)
    #[strum(serialize = ">=")]
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Less than or equal comparison (`<=`)
    #[strum(serialize = "<=")]
    #[serde(rename = "<=")]
    LessEqual,
    /// Greater than comparison (`>`)
    #[strum(serialize = ">")]
    #[serde(rename = ">")]
    Greater,
    /// Less than comparison (`<`)
    #[strum(serialize = "<")]
    #[serde(rename = "<")]
    Less,
    /// Equality comparison (`=`)
    #[strum(serialize = "=")]
    #[serde(rename = "=")]
    Equal,
}

impl Comparator {
    /// Whether this comparator orders its operands (everything except `=`).
    pub fn is_ordering(&self) -> bool {
        !matches!(self, Comparator::Equal)
    }
}

/// Grouping delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Delimiter {
    /// Opening parenthesis (`(`) for grouping
    #[strum(serialize = "(")]
    OpenParen,
    /// Closing parenthesis (`)`) for grouping
    #[strum(serialize = ")")]
    CloseParen,
}

/// Parses a comparator token from the input string.
///
/// Two-character comparators are matched first for longest-match.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comparator(input: &str) -> ParserResult<Token> {
    context(
        "comparator",
        map(
            alt((
                value(Comparator::GreaterEqual, tag(">=")),
                value(Comparator::LessEqual, tag("<=")),
                value(Comparator::Greater, tag(">")),
                value(Comparator::Less, tag("<")),
                value(Comparator::Equal, tag("=")),
            )),
            Token::Comparator,
        ),
    )(input)
}

/// Parses a parenthesis token from the input string.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenParen, tag("(")),
                value(Delimiter::CloseParen, tag(")")),
            )),
            Token::Delimiter,
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparators() {
        let test_cases = [
            (">=", Token::Comparator(Comparator::GreaterEqual)),
            ("<=", Token::Comparator(Comparator::LessEqual)),
            (">", Token::Comparator(Comparator::Greater)),
            ("<", Token::Comparator(Comparator::Less)),
            ("=", Token::Comparator(Comparator::Equal)),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_comparator(input).unwrap();
            assert_eq!(token, *expected);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_delimiters() {
        let test_cases = [
            ("(", Token::Delimiter(Delimiter::OpenParen)),
            (")", Token::Delimiter(Delimiter::CloseParen)),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_delimiter(input).unwrap();
            assert_eq!(token, *expected);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_longest_match() {
        // ">=" must not be consumed as ">" followed by "="
        let (rest, token) = parse_comparator(">= 5").unwrap();
        assert_eq!(token, Token::Comparator(Comparator::GreaterEqual));
        assert_eq!(rest, " 5");
    }

    #[test]
    fn test_is_ordering() {
        assert!(Comparator::Greater.is_ordering());
        assert!(Comparator::LessEqual.is_ordering());
        assert!(!Comparator::Equal.is_ordering());
    }
}
