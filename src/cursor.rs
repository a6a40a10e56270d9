//! A forward-only cursor over a fixed input buffer which validates UTF-8 as it goes.
//!
//! The cursor hands out raw bytes rather than `char`s: everything JSON cares about structurally
//! is ASCII, and string contents can be copied through verbatim once the encoding has been
//! checked. Validation is incremental, so a document is rejected at the first offending byte
//! without an up-front pass over the whole buffer.
//!
//! The cursor supports exactly one byte of pushback, which is all the lexer ever needs.
use crate::coords::Coords;
use crate::cursor_error;
use crate::errors::{Details, Error, ParserResult};
use crate::utf8::Utf8Validator;

/// The overall state of a [Cursor]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// Bytes may still be read
    Good,
    /// The end of the input has been reached
    EndOfInput,
    /// A fatal error has occurred, no more bytes will be produced
    Faulted,
}

/// A validating byte cursor
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The underlying input
    input: &'a [u8],
    /// Offset of the next byte to be read
    pos: usize,
    /// Number of bytes which have been run through the validator
    validated: usize,
    /// Set once the end of the input has been signalled
    eoi: bool,
    /// The error which faulted the stream, if any
    fault: Option<Error>,
    /// Incremental UTF-8 state
    utf8: Utf8Validator,
    /// Zero based line number of the read position
    line: usize,
    /// Offset of the first byte of the current line
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned at the start of the input
    pub fn new(input: &'a [u8]) -> Self {
        Cursor {
            input,
            pos: 0,
            validated: 0,
            eoi: false,
            fault: None,
            utf8: Utf8Validator::default(),
            line: 0,
            line_start: 0,
        }
    }

    /// Read the next byte. `Ok(None)` signals the end of the input. Once the cursor has faulted,
    /// every subsequent call returns the original error again.
    pub fn next_byte(&mut self) -> ParserResult<Option<u8>> {
        if let Some(err) = &self.fault {
            return Err(err.clone());
        }

        if self.pos == self.input.len() {
            if !self.utf8.is_complete() {
                return self.fault(Details::Utf8Invalid);
            }
            self.eoi = true;
            return Ok(None);
        }

        let byte = self.input[self.pos];
        if byte == 0 {
            return self.fault(Details::StreamZero);
        }

        if self.validated <= self.pos {
            if !self.utf8.validate(byte) {
                return self.fault(Details::Utf8Invalid);
            }
            self.validated += 1;
        }

        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Ok(Some(byte))
    }

    /// Step back by a single byte. Does nothing at the start of the input, once the end of the
    /// input has been signalled or after a fault
    pub fn push_back(&mut self) {
        if self.pos != 0 && !self.eoi && self.fault.is_none() {
            self.pos -= 1;
            if self.input[self.pos] == b'\n' {
                self.line -= 1;
                self.line_start = self.input[..self.pos]
                    .iter()
                    .rposition(|b| *b == b'\n')
                    .map_or(0, |nl| nl + 1);
            }
        }
    }

    /// The current byte offset into the input
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The current location within the input
    pub fn location(&self) -> Coords {
        Coords {
            absolute: self.pos,
            line: self.line,
            column: self.pos - self.line_start,
        }
    }

    /// Full coordinates for an offset already consumed from the input. Offsets on the current
    /// line are resolved directly, anything earlier falls back to a scan of the input
    pub fn coords_at(&self, offset: usize) -> Coords {
        if offset >= self.line_start && offset <= self.pos {
            Coords {
                absolute: offset,
                line: self.line,
                column: offset - self.line_start,
            }
        } else {
            Coords::at(self.input, offset)
        }
    }

    /// Current state of the cursor
    pub fn state(&self) -> CursorState {
        if self.fault.is_some() {
            CursorState::Faulted
        } else if self.eoi {
            CursorState::EndOfInput
        } else {
            CursorState::Good
        }
    }

    /// Put the cursor into the faulted state, recording the error at the current location
    fn fault(&mut self, details: Details) -> ParserResult<Option<u8>> {
        let result: ParserResult<Option<u8>> = cursor_error!(details, self.location());
        if let Err(err) = &result {
            self.fault = Some(err.clone());
        }
        result
    }
}
