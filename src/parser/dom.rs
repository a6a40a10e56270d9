//! The DOM parser
//!
//! Builds a complete [Value] tree from a single JSON document. Nesting is tracked on an explicit
//! stack of partially built containers, so the depth of a document is bounded only by
//! [ParserOptions::max_depth] and never by the call stack.
use tracing::{debug, trace};

use crate::coords::Coords;
use crate::errors::{Details, ParserResult};
use crate::lexer::{Lexer, Token};
use crate::numbers::NumberBuffer;
use crate::parser::ParserOptions;
use crate::parser_error;
use crate::value::{Array, Member, Object, Value};

/// The parser states. Each state accepts a fixed set of tokens
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    /// Expecting the top level value, or the end of input once it's been read
    Document,
    /// Just after '['
    ArrayStart,
    /// Just after ',' within an array
    ArrayValue,
    /// After an array element
    ArrayNext,
    /// Just after '{'
    ObjectStart,
    /// Just after ',' within an object
    ObjectName,
    /// After a member name
    ObjectSep,
    /// After ':'
    ObjectValue,
    /// After a member value
    ObjectNext,
}

impl State {
    /// The error raised when this state is handed a token it doesn't accept
    fn bad_token(self) -> Details {
        match self {
            State::Document => Details::BadTokenDocument,
            State::ArrayStart => Details::BadTokenArrayStart,
            State::ArrayValue => Details::BadTokenArrayValue,
            State::ArrayNext => Details::BadTokenArrayNext,
            State::ObjectStart => Details::BadTokenObjectStart,
            State::ObjectName => Details::BadTokenObjectName,
            State::ObjectSep => Details::BadTokenObjectSep,
            State::ObjectValue => Details::BadTokenObjectValue,
            State::ObjectNext => Details::BadTokenObjectNext,
        }
    }
}

/// A container which is still under construction
#[derive(Debug)]
enum Frame {
    Array(Array),
    /// An object, along with the name of a member still waiting for its value
    Object(Object, Option<String>),
}

/// Main JSON parser struct
#[derive(Debug, Default, Clone)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a new instance of the parser using a specific set of [ParserOptions]
    pub fn with_options(options: ParserOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a string slice
    pub fn parse_str(&self, str: &str) -> ParserResult<Value> {
        self.parse(str.as_bytes())
    }

    /// Parse a complete document held in a byte buffer. The buffer must contain exactly one
    /// value, optionally surrounded by whitespace
    pub fn parse(&self, bytes: &[u8]) -> ParserResult<Value> {
        let result = self.parse_document(bytes);
        if let Err(err) = &result {
            debug!(
                stage = %err.stage,
                code = err.details.code(),
                offset = err.offset(),
                "parse failed"
            );
        }
        result
    }

    fn parse_document(&self, bytes: &[u8]) -> ParserResult<Value> {
        let mut lexer = Lexer::with_number_buffer(
            bytes,
            NumberBuffer::new(self.options.number_capacity),
        );
        let mut stack: Vec<Frame> = vec![];
        let mut root: Option<Value> = None;
        let mut state = State::Document;

        loop {
            let (token, span) = lexer.consume()?;
            trace!(?state, %token, offset = span.start.absolute, "dispatching token");

            state = match (state, token) {
                (State::Document, Token::EndOfInput) => {
                    return match root {
                        Some(value) => Ok(value),
                        None => parser_error!(Details::BadTokenDocument, span.start),
                    };
                }
                (State::Document, _) if root.is_some() => {
                    return parser_error!(Details::BadTokenDocument, span.start);
                }
                (State::ArrayStart | State::ArrayNext, Token::EndArray) => {
                    let array = match stack.pop() {
                        Some(Frame::Array(array)) => array,
                        _ => return parser_error!(Details::InternalError, span.start),
                    };
                    trace!(elements = array.len(), "closing array");
                    fold(&mut stack, &mut root, Value::Array(array), span.start)?
                }
                (State::ObjectStart | State::ObjectNext, Token::EndObject) => {
                    let object = match stack.pop() {
                        Some(Frame::Object(object, None)) => object,
                        _ => return parser_error!(Details::InternalError, span.start),
                    };
                    trace!(members = object.len(), "closing object");
                    fold(&mut stack, &mut root, Value::Object(object), span.start)?
                }
                (State::ArrayNext, Token::Comma) => State::ArrayValue,
                (State::ObjectNext, Token::Comma) => State::ObjectName,
                (State::ObjectStart | State::ObjectName, Token::Str(name)) => {
                    if name.is_empty() {
                        return parser_error!(Details::EmptyName, span.start);
                    }
                    match stack.last_mut() {
                        Some(Frame::Object(_, pending)) => *pending = Some(name),
                        _ => return parser_error!(Details::InternalError, span.start),
                    }
                    State::ObjectSep
                }
                (State::ObjectSep, Token::Colon) => State::ObjectValue,
                (
                    State::Document | State::ArrayStart | State::ArrayValue | State::ObjectValue,
                    token,
                ) => match token {
                    Token::StartArray => {
                        self.open(&mut stack, Frame::Array(Array::new()), span.start)?;
                        State::ArrayStart
                    }
                    Token::StartObject => {
                        self.open(&mut stack, Frame::Object(Object::new(), None), span.start)?;
                        State::ObjectStart
                    }
                    Token::Str(s) => fold(&mut stack, &mut root, Value::String(s), span.start)?,
                    Token::Num(n) => fold(&mut stack, &mut root, Value::Number(n), span.start)?,
                    Token::Null => fold(&mut stack, &mut root, Value::Null, span.start)?,
                    Token::Bool(true) => fold(&mut stack, &mut root, Value::True, span.start)?,
                    Token::Bool(false) => fold(&mut stack, &mut root, Value::False, span.start)?,
                    _ => return parser_error!(state.bad_token(), span.start),
                },
                (state, _) => return parser_error!(state.bad_token(), span.start),
            };
        }
    }

    /// Push a new container onto the stack, provided the depth limit allows it
    fn open(&self, stack: &mut Vec<Frame>, frame: Frame, at: Coords) -> ParserResult<()> {
        if stack.len() >= self.options.max_depth {
            return parser_error!(Details::ParserOverflow, at);
        }
        stack.push(frame);
        trace!(depth = stack.len(), "opened container");
        Ok(())
    }
}

/// Hand a completed value to whatever is waiting for it: the innermost open container, or the
/// document itself when nothing is open. Returns the state to continue in
fn fold(
    stack: &mut [Frame],
    root: &mut Option<Value>,
    value: Value,
    at: Coords,
) -> ParserResult<State> {
    match stack.last_mut() {
        None => {
            *root = Some(value);
            Ok(State::Document)
        }
        Some(Frame::Array(array)) => {
            array.push(value);
            Ok(State::ArrayNext)
        }
        Some(Frame::Object(object, pending)) => match pending.take() {
            Some(name) => {
                object.push(Member::new(name, value));
                Ok(State::ObjectNext)
            }
            None => parser_error!(Details::InternalError, at),
        },
    }
}
