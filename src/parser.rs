//! # Parser Component
//!
//! Recursive descent over the token stream, building the rule AST.
//!
//! ## Grammar
//!
//! ```text
//! Expression := Primary ((AND | OR) Primary)*
//! Primary    := '(' Expression ')' | Comparison
//! Comparison := IDENTIFIER COMPARATOR (NUMBER | STRING)
//! ```
//!
//! `AND` and `OR` bind at the same precedence and associate strictly
//! left-to-right: `a = 1 OR b = 1 AND c = 1` parses as
//! `((a = 1 OR b = 1) AND c = 1)`. Rule authors use explicit
//! parentheses to express any mixed-precedence intent. This is a
//! deliberate precision trade-off in the rule language, not an
//! omission; rules authored against it depend on it.
//!
//! The grammar is LL(1): the parser looks at exactly one token ahead
//! and never backtracks.

use tracing::instrument;

use crate::ast::{Node, Value};
use crate::error::SyntaxError;
use crate::tokenizer::{
    keyword::Connective,
    literal::Literal,
    symbol::{Comparator, Delimiter},
    token::{Token, TokenSpan, Tokenizer},
};

/// Parses a rule string into its AST.
///
/// Tokenizes the input and parses the resulting stream as a single
/// expression; trailing tokens after a complete expression are an
/// error.
#[instrument(level = "debug", skip(input))]
pub fn parse(input: &str) -> Result<Node, SyntaxError> {
    let tokens = Tokenizer::new().tokenize(input)?;
    Parser::new(&tokens).parse()
}

pub struct Parser<'a> {
    tokens: &'a [TokenSpan],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [TokenSpan]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the whole token stream as one expression.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        let node = self.parse_expression()?;
        if let Some(trailing) = self.peek() {
            return Err(SyntaxError::TrailingTokens {
                found: trailing.token.to_string(),
                span: trailing.span(),
            });
        }
        Ok(node)
    }

    // Expression := Primary ((AND | OR) Primary)*
    //
    // Folds left: the first two primaries combine into one operator
    // node, which becomes the left child of the next, and so on.
    fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_primary()?;
        while let Some(connective) = self.peek_connective() {
            self.advance();
            let right = self.parse_primary()?;
            node = Node::operator(connective, node, right);
        }
        Ok(node)
    }

    // Primary := '(' Expression ')' | Comparison
    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        match self.peek().map(|t| &t.token) {
            Some(Token::Delimiter(Delimiter::OpenParen)) => {
                self.advance();
                let node = self.parse_expression()?;
                self.expect_close_paren()?;
                Ok(node)
            }
            _ => self.parse_comparison(),
        }
    }

    // Comparison := IDENTIFIER COMPARATOR (NUMBER | STRING)
    fn parse_comparison(&mut self) -> Result<Node, SyntaxError> {
        let field = self.expect_identifier()?;
        let comparator = self.expect_comparator()?;
        let value = self.expect_literal()?;
        Ok(Node::comparison(field, comparator, value))
    }

    fn peek(&self) -> Option<&TokenSpan> {
        self.tokens.get(self.pos)
    }

    fn peek_connective(&self) -> Option<Connective> {
        match self.peek().map(|t| &t.token) {
            Some(Token::Connective(connective)) => Some(*connective),
            _ => None,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn next_or_eof(&mut self, expected: &str) -> Result<&TokenSpan, SyntaxError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        let found = self.next_or_eof("a field name")?;
        match &found.token {
            Token::Identifier(name) => Ok(name.clone()),
            other => Err(SyntaxError::UnexpectedToken {
                expected: "a field name".to_string(),
                found: other.to_string(),
                span: found.span(),
            }),
        }
    }

    fn expect_comparator(&mut self) -> Result<Comparator, SyntaxError> {
        let found = self.next_or_eof("a comparator")?;
        match &found.token {
            Token::Comparator(comparator) => Ok(*comparator),
            other => Err(SyntaxError::UnexpectedToken {
                expected: "a comparator".to_string(),
                found: other.to_string(),
                span: found.span(),
            }),
        }
    }

    fn expect_literal(&mut self) -> Result<Value, SyntaxError> {
        let found = self.next_or_eof("a literal value")?;
        match &found.token {
            Token::Literal(Literal::Number(n)) => Ok(Value::Number(*n)),
            Token::Literal(Literal::String(s)) => Ok(Value::String(s.clone())),
            other => Err(SyntaxError::UnexpectedToken {
                expected: "a literal value".to_string(),
                found: other.to_string(),
                span: found.span(),
            }),
        }
    }

    fn expect_close_paren(&mut self) -> Result<(), SyntaxError> {
        let found = self.next_or_eof("')'")?;
        match &found.token {
            Token::Delimiter(Delimiter::CloseParen) => Ok(()),
            other => Err(SyntaxError::UnexpectedToken {
                expected: "')'".to_string(),
                found: other.to_string(),
                span: found.span(),
            }),
        }
    }
}
