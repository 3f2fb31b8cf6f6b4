//! # Tokenizer Component
//!
//! The Tokenizer component performs lexical analysis of rule strings,
//! transforming raw text into a structured token stream for the parser.
//!
//! ## Design Principles
//!
//! * **Comprehensive Token Information**: Each token carries position
//!   information (line, column, start/end offsets) to enable precise
//!   error reporting.
//! * **Single Pass**: The input is scanned once, left to right;
//!   whitespace separates tokens and is never emitted.
//! * **Greedy Symbols**: `>=` and `<=` are matched before `>`, `<` and
//!   `=` so multi-character comparators are never split.
//!
//! ## Component Structure
//!
//! * [`token`]: Core token types and the tokenizer driver
//! * [`keyword`]: The `AND` / `OR` connective keywords
//! * [`symbol`]: Comparators and parentheses
//! * [`literal`]: Number and string literal parsing
//! * [`whitespace`]: Whitespace recognition
//!
//! ## Usage Example
//!
//! ```rust
//! use astrule::tokenizer::token::Tokenizer;
//!
//! let tokens = Tokenizer::new().tokenize("age >= 21 AND country = 'NZ'").unwrap();
//! assert_eq!(tokens.len(), 7);
//! ```

pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
