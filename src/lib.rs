//! A JSON value model together with a validating, non-recursive parser.
//!
//! Parsing runs in four layers. A [cursor::Cursor] hands out bytes, validating UTF-8 as it goes
//! and rejecting embedded zero bytes. The [lexer::Lexer] groups those bytes into tokens. The
//! [parser::Parser] folds tokens into a [value::Value] tree using an explicit stack, so deeply
//! nested input can never exhaust the call stack. Every failure is reported as a single
//! [errors::Error] carrying its kind and the byte offset at which it was detected.
//!
//! ```
//! let value = jsonval::parse_str(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
//! assert_eq!(value.object().get("a").unwrap().number().int_value(), 1);
//! assert_eq!(value.to_json(), r#"{"a":1,"b":[true,false,null]}"#);
//! ```
pub mod coords;
pub mod cursor;
pub mod errors;
pub mod lexer;
pub mod numbers;
pub mod parser;
pub mod utf8;
pub mod value;
#[cfg(test)]
mod test_macros;

use crate::errors::ParserResult;
use crate::parser::Parser;
use crate::value::Value;

/// Parse a byte buffer using the default [parser::ParserOptions]
pub fn parse(bytes: &[u8]) -> ParserResult<Value> {
    Parser::default().parse(bytes)
}

/// Parse a string slice using the default [parser::ParserOptions]
pub fn parse_str(str: &str) -> ParserResult<Value> {
    Parser::default().parse_str(str)
}
