use core::fmt;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};

use crate::error::SyntaxError;

use super::{
    keyword::Connective,
    literal::{parse_literal, Literal},
    symbol::{parse_comparator, parse_delimiter, Comparator, Delimiter},
    whitespace::parse_whitespace,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Field names
    Identifier(String),
    // Keywords
    Connective(Connective),
    // Symbols
    Comparator(Comparator),
    Delimiter(Delimiter),
    // Literals
    Literal(Literal),
    // Internal to the driver, never emitted
    Whitespace(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(s) => write!(f, "identifier '{}'", s),
            Token::Connective(c) => write!(f, "'{}'", c),
            Token::Comparator(c) => write!(f, "'{}'", c),
            Token::Delimiter(d) => write!(f, "'{}'", d),
            Token::Literal(l) => write!(f, "literal {}", l),
            Token::Whitespace(_) => write!(f, "whitespace"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    current_position: usize,
    current_line: usize,
    current_column: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
        }
    }

    /// Scans the rule string left to right into a token stream.
    ///
    /// Whitespace separates tokens and is dropped. Fails on the first
    /// unrecognized character or unterminated string literal.
    #[tracing::instrument(level = "debug", skip(input))]
    pub fn tokenize(&mut self, input: &str) -> Result<Vec<TokenSpan>, SyntaxError> {
        let mut tokens = Vec::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start_position = self.current_position;
            let start_line = self.current_line;
            let start_column = self.current_column;

            let result = alt((
                // Formatting
                parse_whitespace,
                // Literals
                parse_literal,
                // Code elements
                parse_comparator,
                parse_delimiter,
                parse_identifier,
            ))(remaining);

            match result {
                Ok((new_remaining, token)) => {
                    let consumed = &remaining[..(remaining.len() - new_remaining.len())];
                    self.update_position(consumed);

                    if !matches!(token, Token::Whitespace(_)) {
                        tokens.push(TokenSpan {
                            token,
                            start: start_position,
                            end: self.current_position,
                            line: start_line,
                            column: start_column,
                        });
                    }

                    remaining = new_remaining;
                }
                Err(_) => {
                    let error = self.classify_failure(remaining);
                    tracing::error!("{}", error);
                    return Err(error);
                }
            }
        }

        Ok(tokens)
    }

    // A failed scan is either a string literal missing its closing
    // quote or a character outside the language.
    fn classify_failure(&self, remaining: &str) -> SyntaxError {
        let span = Span {
            start: self.current_position,
            end: self.current_position + 1,
            line: self.current_line,
            column: self.current_column,
        };
        match remaining.chars().next() {
            Some('\'') | Some('"') => SyntaxError::UnterminatedString { span },
            Some(c) => SyntaxError::UnrecognizedChar { found: c, span },
            None => SyntaxError::UnexpectedEof {
                expected: "a token".to_string(),
            },
        }
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.current_position += c.len_utf8();
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl TokenSpan {
    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            line: self.line,
            column: self.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_identifier(input: &str) -> ParserResult<Token> {
    let (input, id) = context(
        "identifier",
        recognize(pair(
            take_while1(|c: char| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
    )(input)?;

    // Check if identifier is not a keyword (case-insensitive)
    if let Ok(connective) = Connective::try_from(id) {
        return Ok((input, Token::Connective(connective)));
    }

    Ok((input, Token::Identifier(id.to_string())))
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
