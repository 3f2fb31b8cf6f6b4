use core::fmt;

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    error::context,
    sequence::{delimited, pair, preceded},
};

use super::token::{ParserResult, Token};

/// Literal values appearing on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s),
        }
    }
}

// A run of digits with at most one decimal point. No sign: `-` is not
// part of the surface grammar.
#[tracing::instrument(level = "debug", skip(input))]
fn parse_number_literal(input: &str) -> ParserResult<Literal> {
    context(
        "number literal",
        map_res(
            recognize(pair(digit1, opt(preceded(char('.'), digit1)))),
            |s: &str| s.parse::<f64>().map(Literal::Number),
        ),
    )(input)
}

// A quoted span holding the unquoted content. Fails when no closing
// quote is found before end of input.
#[tracing::instrument(level = "debug", skip(input))]
fn parse_string_literal(input: &str) -> ParserResult<Literal> {
    context(
        "string literal",
        map(
            alt((
                delimited(char('\''), take_while(|c| c != '\''), char('\'')),
                delimited(char('"'), take_while(|c| c != '"'), char('"')),
            )),
            |content: &str| Literal::String(content.to_string()),
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_literal(input: &str) -> ParserResult<Token> {
    context(
        "literal",
        map(alt((parse_string_literal, parse_number_literal)), Token::Literal),
    )(input)
}
