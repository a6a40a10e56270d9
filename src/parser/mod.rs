//! Document parsing.
//!
//! The [dom] parser pulls tokens from the lexer and folds them into a single [crate::value::Value]
//! tree. Its behaviour can be tuned through [ParserOptions].
use crate::numbers::DEFAULT_NUMBER_CAPACITY;

/// The DOM-based parser
pub mod dom;

pub use dom::Parser;

/// Default maximum nesting depth of containers
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Limits applied during a parse
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// The maximum number of containers which may be open at any one time
    pub max_depth: usize,
    /// The maximum length of a single number literal, in bytes
    pub number_capacity: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            number_capacity: DEFAULT_NUMBER_CAPACITY,
        }
    }
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_number_capacity(mut self, number_capacity: usize) -> Self {
        self.number_capacity = number_capacity;
        self
    }
}
