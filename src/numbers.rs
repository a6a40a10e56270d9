//! Recognition and conversion of JSON number literals.
//!
//! A literal is first run through a small state machine mirroring the JSON number production,
//! accumulating its bytes into a bounded buffer. Only once the grammar has accepted the literal
//! is it converted, so grammar errors and conversion errors are reported independently.
//!
//! ```text
//! start -> [minus] -> (zero | digit19 digit*) -> ['.' digit+] -> [(e|E) [+|-] digit+] -> done
//! ```
use crate::cursor::Cursor;
use crate::errors::{Details, ParserResult};
use crate::lexer_error;
use crate::value::Number;

/// Default capacity of the number buffer, in bytes
pub const DEFAULT_NUMBER_CAPACITY: usize = 1024;

/// States of the number recogniser
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumberState {
    Start,
    Minus,
    IntZero,
    IntDigit,
    DecPoint,
    FracDigit,
    Exp,
    ExpSign,
    ExpDigit,
    Done,
    Error,
}

/// The transition table for the recogniser. `None` stands for the end of the input. Any byte
/// which can't extend the literal from an accepting state ends it, and is left for the caller to
/// push back
pub fn transition(state: NumberState, byte: Option<u8>) -> NumberState {
    use NumberState::*;
    match (state, byte) {
        (Start, Some(b'-')) => Minus,
        (Start | Minus, Some(b'0')) => IntZero,
        (Start | Minus, Some(b'1'..=b'9')) => IntDigit,
        (Start | Minus, _) => Error,

        (IntZero, Some(b'0'..=b'9')) => Error,
        (IntDigit, Some(b'0'..=b'9')) => IntDigit,
        (IntZero | IntDigit, Some(b'.')) => DecPoint,
        (IntZero | IntDigit | FracDigit, Some(b'e' | b'E')) => Exp,

        (DecPoint | FracDigit, Some(b'0'..=b'9')) => FracDigit,
        (DecPoint, _) => Error,

        (Exp, Some(b'+' | b'-')) => ExpSign,
        (Exp | ExpSign | ExpDigit, Some(b'0'..=b'9')) => ExpDigit,
        (Exp | ExpSign, _) => Error,

        (IntZero | IntDigit | FracDigit | ExpDigit, _) => Done,
        (Done, _) => Done,
        (Error, _) => Error,
    }
}

/// A fixed capacity buffer for the bytes of a number literal. The buffer never grows past its
/// initial capacity
#[derive(Debug)]
pub struct NumberBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl NumberBuffer {
    pub fn new(capacity: usize) -> Self {
        NumberBuffer {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append a byte, returning false if the buffer is already full
    pub fn push(&mut self, byte: u8) -> bool {
        if self.bytes.len() == self.capacity {
            return false;
        }
        self.bytes.push(byte);
        true
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for NumberBuffer {
    fn default() -> Self {
        NumberBuffer::new(DEFAULT_NUMBER_CAPACITY)
    }
}

/// Scan a single number literal from the cursor. The cursor must be positioned on the first
/// byte of the literal; on success it's left on the first byte following it
pub fn scan_number(cursor: &mut Cursor, buffer: &mut NumberBuffer) -> ParserResult<Number> {
    buffer.clear();
    let start = cursor.offset();
    let mut state = NumberState::Start;
    let mut floating = false;

    loop {
        let offset = cursor.offset();
        let byte = cursor.next_byte()?;
        state = transition(state, byte);
        match (state, byte) {
            (NumberState::Done, Some(_)) => {
                cursor.push_back();
                break;
            }
            (NumberState::Done, None) => break,
            (NumberState::Error, _) => {
                return lexer_error!(Details::NumberInvalid, cursor.coords_at(offset));
            }
            (_, Some(b)) => {
                if matches!(state, NumberState::DecPoint | NumberState::Exp) {
                    floating = true;
                }
                if !buffer.push(b) {
                    return lexer_error!(Details::NumberOverflow, cursor.coords_at(offset));
                }
            }
            (_, None) => {
                return lexer_error!(Details::InternalError, cursor.coords_at(offset));
            }
        }
    }

    let converted = if floating {
        convert_float(buffer.as_bytes())
    } else {
        convert_integer(buffer.as_bytes())
    };

    match converted {
        Some(number) => Ok(number),
        None => lexer_error!(Details::NumberInvalid, cursor.coords_at(start)),
    }
}

/// Floats are parsed independently of any process locale. Literals whose magnitude is too large
/// to represent are rejected rather than silently becoming infinite
fn convert_float(text: &[u8]) -> Option<Number> {
    fast_float::parse::<f64, _>(text)
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}

/// Integers are held as signed where they fit, falling back to unsigned for large positive
/// values
#[cfg(feature = "mixed_numerics")]
fn convert_integer(text: &[u8]) -> Option<Number> {
    match lexical::parse::<i64, _>(text) {
        Ok(value) => Some(Number::Signed(value)),
        Err(_) => lexical::parse::<u64, _>(text).ok().map(Number::Unsigned),
    }
}

#[cfg(not(feature = "mixed_numerics"))]
fn convert_integer(text: &[u8]) -> Option<Number> {
    let text = std::str::from_utf8(text).ok()?;
    match text.parse::<i64>() {
        Ok(value) => Some(Number::Signed(value)),
        Err(_) => text.parse::<u64>().ok().map(Number::Unsigned),
    }
}
