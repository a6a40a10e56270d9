//! The lexer turns the validated byte stream produced by a [Cursor] into [Token]s.
//!
//! Each call to [Lexer::consume] skips any JSON whitespace, looks at the first significant byte
//! and hands off to exactly one scanning routine based on it. The choice of routine is made by
//! [select_scanner], a pure function over the byte, so the set of possible dispatches is closed
//! and checked by the compiler.
use std::fmt::{Display, Formatter};

use crate::coords::Span;
use crate::cursor::Cursor;
use crate::errors::{Details, ParserResult};
use crate::lexer_error;
use crate::numbers::{scan_number, NumberBuffer};
use crate::value::Number;

/// Sequence of literal characters forming a 'null' token
const NULL_SEQUENCE: &[u8] = b"null";
/// Sequence of literal characters forming a 'true' token
const TRUE_SEQUENCE: &[u8] = b"true";
/// Sequence of literal characters forming a 'false' token
const FALSE_SEQUENCE: &[u8] = b"false";

/// Default string buffer capacity
const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Enumeration of valid JSON tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    Colon,
    Comma,
    Str(String),
    Num(Number),
    Null,
    Bool(bool),
    EndOfInput,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::StartObject => write!(f, "'{{'"),
            Token::EndObject => write!(f, "'}}'"),
            Token::StartArray => write!(f, "'['"),
            Token::EndArray => write!(f, "']'"),
            Token::Colon => write!(f, "':'"),
            Token::Comma => write!(f, "','"),
            Token::Str(_) => write!(f, "string"),
            Token::Num(_) => write!(f, "number"),
            Token::Null => write!(f, "null"),
            Token::Bool(b) => write!(f, "{}", b),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A packed token consists of a [Token] and the [Span] associated with it
pub type PackedToken = (Token, Span);

/// The scanning routine to run for a given leading byte
#[derive(Debug, Clone, PartialEq)]
pub enum Scanner {
    /// A single byte of punctuation, already fully scanned
    Structural(Token),
    /// The remainder of a fixed literal
    Literal(&'static [u8], Token),
    /// A string, following an opening quote
    String,
    /// A number. The leading byte belongs to the literal and must be pushed back
    Number,
    /// Nothing valid starts with this byte
    Invalid,
}

/// Pick the scanning routine for the first significant byte of a token
pub fn select_scanner(byte: u8) -> Scanner {
    match byte {
        b'{' => Scanner::Structural(Token::StartObject),
        b'}' => Scanner::Structural(Token::EndObject),
        b'[' => Scanner::Structural(Token::StartArray),
        b']' => Scanner::Structural(Token::EndArray),
        b':' => Scanner::Structural(Token::Colon),
        b',' => Scanner::Structural(Token::Comma),
        b't' => Scanner::Literal(TRUE_SEQUENCE, Token::Bool(true)),
        b'f' => Scanner::Literal(FALSE_SEQUENCE, Token::Bool(false)),
        b'n' => Scanner::Literal(NULL_SEQUENCE, Token::Null),
        b'"' => Scanner::String,
        b'-' | b'0'..=b'9' => Scanner::Number,
        _ => Scanner::Invalid,
    }
}

/// Whitespace as defined by the JSON grammar, nothing more
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// A lexer over a complete input buffer
pub struct Lexer<'a> {
    /// The underlying validating cursor
    cursor: Cursor<'a>,
    /// Bounded working buffer for number literals
    numbers: NumberBuffer,
    /// Internal buffer for hoovering up strings from the input
    buffer: Vec<u8>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with the default number buffer capacity
    pub fn new(input: &'a [u8]) -> Self {
        Lexer::with_number_buffer(input, NumberBuffer::default())
    }

    /// Create a lexer using a specific number buffer
    pub fn with_number_buffer(input: &'a [u8], numbers: NumberBuffer) -> Self {
        Lexer {
            cursor: Cursor::new(input),
            numbers,
            buffer: Vec::with_capacity(DEFAULT_BUFFER_CAPACITY),
        }
    }

    /// Read-only access to the underlying cursor
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Consume the next token from the input. At the end of the input a
    /// [Token::EndOfInput] is produced, as many times as asked
    pub fn consume(&mut self) -> ParserResult<PackedToken> {
        let first = loop {
            match self.cursor.next_byte()? {
                Some(b) if is_whitespace(b) => continue,
                other => break other,
            }
        };

        let first = match first {
            Some(b) => b,
            None => {
                let coords = self.cursor.location();
                return Ok((
                    Token::EndOfInput,
                    Span {
                        start: coords,
                        end: coords,
                    },
                ));
            }
        };

        let start = self.cursor.coords_at(self.cursor.offset() - 1);
        let token = match select_scanner(first) {
            Scanner::Structural(token) => token,
            Scanner::Literal(sequence, token) => {
                self.match_literal(sequence)?;
                token
            }
            Scanner::String => Token::Str(self.match_string()?),
            Scanner::Number => {
                self.cursor.push_back();
                Token::Num(scan_number(&mut self.cursor, &mut self.numbers)?)
            }
            Scanner::Invalid => return lexer_error!(Details::TokenInvalid, start),
        };

        Ok((
            token,
            Span {
                start,
                end: self.cursor.location(),
            },
        ))
    }

    /// Match the remainder of a literal, the first byte having already been consumed
    fn match_literal(&mut self, sequence: &[u8]) -> ParserResult<()> {
        for expected in &sequence[1..] {
            let offset = self.cursor.offset();
            if self.cursor.next_byte()? != Some(*expected) {
                return lexer_error!(Details::LiteralInvalid, self.cursor.coords_at(offset));
            }
        }
        Ok(())
    }

    /// Match the body of a string, the opening quote having already been consumed. Escape
    /// sequences are decoded as they're found
    fn match_string(&mut self) -> ParserResult<String> {
        self.buffer.clear();
        loop {
            let offset = self.cursor.offset();
            match self.cursor.next_byte()? {
                Some(b'"') => break,
                Some(b'\\') => self.match_escape_sequence()?,
                Some(b) if b < 0x20 => {
                    return lexer_error!(Details::StringCtrl, self.cursor.coords_at(offset));
                }
                Some(b) => self.buffer.push(b),
                None => {
                    return lexer_error!(Details::StringQuote, self.cursor.coords_at(offset));
                }
            }
        }

        match std::str::from_utf8(&self.buffer) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => lexer_error!(Details::InternalError, self.cursor.location()),
        }
    }

    /// Match a single escape sequence, the backslash having already been consumed
    fn match_escape_sequence(&mut self) -> ParserResult<()> {
        let offset = self.cursor.offset();
        let decoded = match self.cursor.next_byte()? {
            Some(b'"') => b'"',
            Some(b'\\') => b'\\',
            Some(b'/') => b'/',
            Some(b'b') => 0x08,
            Some(b'f') => 0x0c,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(b'u') => return self.match_unicode_escape_sequence(offset - 1),
            _ => return lexer_error!(Details::EscapeInvalid, self.cursor.coords_at(offset)),
        };
        self.buffer.push(decoded);
        Ok(())
    }

    /// Match a unicode escape sequence in the form uXXXX where each X is a valid hex digit.
    /// Characters outside the basic multilingual plane must be given as a surrogate pair of two
    /// consecutive escapes
    fn match_unicode_escape_sequence(&mut self, start: usize) -> ParserResult<()> {
        let high = self.match_hex_quad()?;
        let code = match high {
            0 => return lexer_error!(Details::UEscapeZero, self.cursor.coords_at(start)),
            0xDC00..=0xDFFF => {
                return lexer_error!(Details::UEscapeSurrogate, self.cursor.coords_at(start));
            }
            0xD800..=0xDBFF => {
                let offset = self.cursor.offset();
                if self.cursor.next_byte()? != Some(b'\\') || self.cursor.next_byte()? != Some(b'u')
                {
                    return lexer_error!(Details::UEscapeSurrogate, self.cursor.coords_at(offset));
                }
                let low = self.match_hex_quad()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return lexer_error!(Details::UEscapeSurrogate, self.cursor.coords_at(offset));
                }
                0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            other => u32::from(other),
        };

        match char::from_u32(code) {
            Some(c) => {
                let mut encoded = [0u8; 4];
                self.buffer
                    .extend_from_slice(c.encode_utf8(&mut encoded).as_bytes());
                Ok(())
            }
            None => lexer_error!(Details::InternalError, self.cursor.coords_at(start)),
        }
    }

    /// Match exactly four hex digits
    fn match_hex_quad(&mut self) -> ParserResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let offset = self.cursor.offset();
            let digit = self
                .cursor
                .next_byte()?
                .and_then(|b| char::from(b).to_digit(16));
            match digit {
                Some(d) => value = (value << 4) | d as u16,
                None => {
                    return lexer_error!(Details::UEscapeInvalid, self.cursor.coords_at(offset));
                }
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{Details, Stage};
    use crate::lexer::{select_scanner, Lexer, Scanner, Token};
    use crate::lines_from_relative_file;
    use crate::value::Number;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input.as_bytes());
        let mut tokens = vec![];
        loop {
            let (token, _) = lexer.consume().unwrap();
            if token == Token::EndOfInput {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn first_error(input: &str) -> (Details, usize) {
        let mut lexer = Lexer::new(input.as_bytes());
        loop {
            match lexer.consume() {
                Ok((Token::EndOfInput, _)) => panic!("no error found in {:?}", input),
                Ok(_) => continue,
                Err(err) => return (err.details, err.offset()),
            }
        }
    }

    #[test]
    fn scanner_selection_should_be_total() {
        for byte in 0..=u8::MAX {
            let scanner = select_scanner(byte);
            match byte {
                b'-' | b'0'..=b'9' => assert_eq!(scanner, Scanner::Number),
                b'"' => assert_eq!(scanner, Scanner::String),
                b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                    assert!(matches!(scanner, Scanner::Structural(_)))
                }
                b't' | b'f' | b'n' => assert!(matches!(scanner, Scanner::Literal(_, _))),
                _ => assert_eq!(scanner, Scanner::Invalid),
            }
        }
    }

    #[test]
    fn should_parse_basic_tokens() {
        assert_eq!(
            tokens(" {}\t[]\r\n,: "),
            [
                Token::StartObject,
                Token::EndObject,
                Token::StartArray,
                Token::EndArray,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn should_parse_null_and_booleans() {
        assert_eq!(
            tokens("null true    falsetruefalse"),
            [
                Token::Null,
                Token::Bool(true),
                Token::Bool(false),
                Token::Bool(true),
                Token::Bool(false),
            ]
        );
    }

    #[test]
    fn should_keep_producing_end_of_input() {
        let mut lexer = Lexer::new(b"  ");
        for _ in 0..3 {
            assert_eq!(lexer.consume().unwrap().0, Token::EndOfInput);
        }
    }

    #[test]
    fn should_parse_numbers_followed_by_punctuation() {
        assert_eq!(
            tokens("[1,-2.5,3e2]"),
            [
                Token::StartArray,
                Token::Num(Number::Signed(1)),
                Token::Comma,
                Token::Num(Number::Float(-2.5)),
                Token::Comma,
                Token::Num(Number::Float(300.0)),
                Token::EndArray,
            ]
        );
    }

    #[test]
    fn should_decode_string_escapes() {
        assert_eq!(
            tokens(r#""a\"b\\c\/d\b\f\n\r\t""#),
            [Token::Str("a\"b\\c/d\u{8}\u{c}\n\r\t".to_string())]
        );
        assert_eq!(
            tokens(r#""\u00e9\u20AC\uD834\uDD1E""#),
            [Token::Str("é€𝄞".to_string())]
        );
        assert_eq!(tokens("\"ü日本\""), [Token::Str("ü日本".to_string())]);
        assert_eq!(tokens("\"\""), [Token::Str(String::new())]);
    }

    #[test]
    fn should_report_spans() {
        let mut lexer = Lexer::new(b"  \"abc\" 12");
        let (_, span) = lexer.consume().unwrap();
        assert_eq!(span.start.absolute, 2);
        assert_eq!(span.end.absolute, 7);
        let (_, span) = lexer.consume().unwrap();
        assert_eq!(span.start.absolute, 8);
        assert_eq!(span.end.absolute, 10);
    }

    #[test]
    fn should_correctly_report_errors_for_literals() {
        assert_eq!(first_error("true farse"), (Details::LiteralInvalid, 7));
        assert_eq!(first_error("nul"), (Details::LiteralInvalid, 3));
        assert_eq!(first_error("tru e"), (Details::LiteralInvalid, 3));
    }

    #[test]
    fn should_report_invalid_tokens() {
        assert_eq!(first_error("[ @ ]"), (Details::TokenInvalid, 2));
        assert_eq!(first_error("'single'"), (Details::TokenInvalid, 0));
        assert_eq!(first_error("\u{a0}1"), (Details::TokenInvalid, 0));
    }

    #[test]
    fn should_report_string_errors() {
        assert_eq!(first_error("\"ab\ncd\""), (Details::StringCtrl, 3));
        assert_eq!(first_error("\"abc"), (Details::StringQuote, 4));
        assert_eq!(first_error(r#""\x""#), (Details::EscapeInvalid, 2));
        assert_eq!(first_error("\"\\"), (Details::EscapeInvalid, 2));
        assert_eq!(first_error(r#""\u12G4""#), (Details::UEscapeInvalid, 5));
        assert_eq!(first_error(r#""\u12""#), (Details::UEscapeInvalid, 5));
        assert_eq!(first_error(r#""\u0000""#), (Details::UEscapeZero, 1));
        assert_eq!(first_error(r#""\udc00""#), (Details::UEscapeSurrogate, 1));
        assert_eq!(first_error(r#""\ud834x""#), (Details::UEscapeSurrogate, 7));
        assert_eq!(
            first_error(r#""\ud834A""#),
            (Details::UEscapeSurrogate, 7)
        );
        assert_eq!(
            first_error(r#""\ud834\uzzzz""#),
            (Details::UEscapeInvalid, 9)
        );
    }

    #[test]
    fn should_correctly_handle_invalid_numbers() {
        let lines = lines_from_relative_file!("fixtures/samples/utf-8/invalid_numbers.txt");
        for l in lines.flatten() {
            if !l.is_empty() {
                let mut lexer = Lexer::new(l.as_bytes());
                let err = lexer.consume().unwrap_err();
                assert_eq!(err.details, Details::NumberInvalid, "{}", l);
            }
        }
    }

    #[test]
    fn cursor_errors_should_pass_through() {
        let mut lexer = Lexer::new(b"[\"a\x00\"]");
        assert_eq!(lexer.consume().unwrap().0, Token::StartArray);
        let err = lexer.consume().unwrap_err();
        assert_eq!(err.stage, Stage::Cursor);
        assert_eq!(err.details, Details::StreamZero);
        assert_eq!(err.offset(), 3);
    }
}
