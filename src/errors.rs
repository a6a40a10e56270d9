//! General error types for the parser

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser stages
pub type ParserResult<T> = Result<T, Error>;

/// Enumeration of the various different parser stages that can produce an error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// The byte cursor, responsible for stream and encoding errors
    Cursor,
    /// The lexer stage of the parser
    Lexer,
    /// The parsing/DOM construction stage of the parser
    Parser,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Cursor => write!(f, "cursor"),
            Stage::Lexer => write!(f, "lexer"),
            Stage::Parser => write!(f, "parser"),
        }
    }
}

/// A global enumeration of error codes. Every distinct way in which a parse can fail maps onto
/// exactly one of these
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Details {
    #[error("embedded zero byte in input")]
    StreamZero,
    #[error("invalid utf-8 sequence")]
    Utf8Invalid,
    #[error("invalid token")]
    TokenInvalid,
    #[error("invalid literal")]
    LiteralInvalid,
    #[error("unescaped control character in string")]
    StringCtrl,
    #[error("unterminated string")]
    StringQuote,
    #[error("invalid escape sequence")]
    EscapeInvalid,
    #[error("invalid unicode escape sequence")]
    UEscapeInvalid,
    #[error("unicode escape of the zero code point")]
    UEscapeZero,
    #[error("unpaired surrogate in unicode escape")]
    UEscapeSurrogate,
    #[error("invalid number")]
    NumberInvalid,
    #[error("number literal too long")]
    NumberOverflow,
    #[error("maximum nesting depth exceeded")]
    ParserOverflow,
    #[error("unexpected token, expected a value")]
    BadTokenDocument,
    #[error("unexpected token, expected a value or ']'")]
    BadTokenArrayStart,
    #[error("unexpected token, expected a value")]
    BadTokenArrayValue,
    #[error("unexpected token, expected ',' or ']'")]
    BadTokenArrayNext,
    #[error("unexpected token, expected a name or '}}'")]
    BadTokenObjectStart,
    #[error("unexpected token, expected a name")]
    BadTokenObjectName,
    #[error("unexpected token, expected ':'")]
    BadTokenObjectSep,
    #[error("unexpected token, expected a value")]
    BadTokenObjectValue,
    #[error("unexpected token, expected ',' or '}}'")]
    BadTokenObjectNext,
    #[error("empty member name")]
    EmptyName,
    #[error("internal parser error")]
    InternalError,
}

impl Details {
    /// A stable, machine friendly name for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Details::StreamZero => "stream_zero",
            Details::Utf8Invalid => "utf8_invalid",
            Details::TokenInvalid => "token_invalid",
            Details::LiteralInvalid => "literal_invalid",
            Details::StringCtrl => "string_ctrl",
            Details::StringQuote => "string_quote",
            Details::EscapeInvalid => "escape_invalid",
            Details::UEscapeInvalid => "uescape_invalid",
            Details::UEscapeZero => "uescape_zero",
            Details::UEscapeSurrogate => "uescape_surrogate",
            Details::NumberInvalid => "number_invalid",
            Details::NumberOverflow => "number_overflow",
            Details::ParserOverflow => "parser_overflow",
            Details::BadTokenDocument => "bad_token_document",
            Details::BadTokenArrayStart => "bad_token_array_start",
            Details::BadTokenArrayValue => "bad_token_array_value",
            Details::BadTokenArrayNext => "bad_token_array_next",
            Details::BadTokenObjectStart => "bad_token_object_start",
            Details::BadTokenObjectName => "bad_token_object_name",
            Details::BadTokenObjectSep => "bad_token_object_sep",
            Details::BadTokenObjectValue => "bad_token_object_value",
            Details::BadTokenObjectNext => "bad_token_object_next",
            Details::EmptyName => "empty_name",
            Details::InternalError => "internal_error",
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{stage} error: {details} at {coords}")]
pub struct Error {
    /// The originating stage for the error
    pub stage: Stage,
    /// The global error code for the error
    pub details: Details,
    /// Parser coordinates, `absolute` being the byte offset into the input
    pub coords: Coords,
}

impl Error {
    /// The byte offset at which the error was detected
    pub fn offset(&self) -> usize {
        self.coords.absolute
    }
}

#[macro_export]
macro_rules! cursor_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Cursor,
            details: $details,
            coords: $coords,
        })
    };
}

#[macro_export]
macro_rules! lexer_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Lexer,
            details: $details,
            coords: $coords,
        })
    };
}

#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Parser,
            details: $details,
            coords: $coords,
        })
    };
}
