//! The in-memory representation of JSON values.
//!
//! A [Value] holds exactly one of the seven JSON kinds, or nothing at all ([Value::Invalid]),
//! which is what a default constructed value and a value which has been moved out of look like.
//! Composite payloads are owned outright: cloning a value deep copies it, and there is no
//! shared mutable state anywhere in the tree.
//!
//! Accessors such as [Value::number] assume the caller knows what kind of value it is holding
//! and panic otherwise. The `as_*` family is there for callers that need to ask first.
use std::fmt::{Display, Formatter};

mod array;
mod factory;
mod number;
mod object;
mod printer;

pub use array::Array;
pub use factory::ToValue;
pub use number::{Number, NumberType};
pub use object::{Member, Object};

/// Marker for the JSON `null` literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Null;

/// Marker for the JSON `true` literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct True;

/// Marker for the JSON `false` literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct False;

/// The shared `null` instance
pub static NULL: Null = Null;
/// The shared `true` instance
pub static TRUE: True = True;
/// The shared `false` instance
pub static FALSE: False = False;

/// The kind of content currently held by a [Value]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Invalid,
    Null,
    True,
    False,
    Number,
    String,
    Object,
    Array,
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::Invalid => "invalid",
            Tag::Null => "null",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Object => "object",
            Tag::Array => "array",
        };
        write!(f, "{}", name)
    }
}

/// A single JSON value
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No content. The state of a default value, and of a value which has been moved from
    #[default]
    Invalid,
    Null,
    True,
    False,
    Number(Number),
    String(String),
    Object(Object),
    Array(Array),
}

/// Panic with a consistent message when an accessor is used against the wrong kind of value
macro_rules! wrong_tag {
    ($value: expr, $expected: expr) => {
        panic!(
            "value holds {}, accessed as {}",
            $value.tag(),
            $expected
        )
    };
}

impl Value {
    /// The kind of content currently held
    pub fn tag(&self) -> Tag {
        match self {
            Value::Invalid => Tag::Invalid,
            Value::Null => Tag::Null,
            Value::True => Tag::True,
            Value::False => Tag::False,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Object(_) => Tag::Object,
            Value::Array(_) => Tag::Array,
        }
    }

    /// False only for [Value::Invalid]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Value::Invalid)
    }

    /// Replace the current content with a copy of something that has a [ToValue] adapter. The
    /// previous content is dropped first
    pub fn set<T: ToValue + ?Sized>(&mut self, value: &T) {
        self.clear();
        value.build_value(self);
    }

    /// Replace the current content, taking ownership of the new payload without copying it
    pub fn build<T: Into<Value>>(&mut self, payload: T) {
        self.clear();
        *self = payload.into();
    }

    /// Move the content out, leaving [Value::Invalid] behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Move the content of another value into this one. The source is left [Value::Invalid]
    pub fn move_from(&mut self, source: &mut Value) {
        let moved = source.take();
        self.build(moved);
    }

    /// Drop any content, leaving [Value::Invalid]
    pub fn clear(&mut self) {
        *self = Value::Invalid;
    }

    /// The shared null instance. Panics unless the value is null
    pub fn null_value(&self) -> &'static Null {
        match self {
            Value::Null => &NULL,
            other => wrong_tag!(other, Tag::Null),
        }
    }

    /// The shared true instance. Panics unless the value is true
    pub fn true_value(&self) -> &'static True {
        match self {
            Value::True => &TRUE,
            other => wrong_tag!(other, Tag::True),
        }
    }

    /// The shared false instance. Panics unless the value is false
    pub fn false_value(&self) -> &'static False {
        match self {
            Value::False => &FALSE,
            other => wrong_tag!(other, Tag::False),
        }
    }

    /// Panics unless the value is a number
    pub fn number(&self) -> &Number {
        match self {
            Value::Number(n) => n,
            other => wrong_tag!(other, Tag::Number),
        }
    }

    /// Panics unless the value is a string
    pub fn string(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => wrong_tag!(other, Tag::String),
        }
    }

    /// Panics unless the value is an object
    pub fn object(&self) -> &Object {
        match self {
            Value::Object(o) => o,
            other => wrong_tag!(other, Tag::Object),
        }
    }

    /// Panics unless the value is an object
    pub fn object_mut(&mut self) -> &mut Object {
        match self {
            Value::Object(o) => o,
            other => wrong_tag!(other, Tag::Object),
        }
    }

    /// Panics unless the value is an array
    pub fn array(&self) -> &Array {
        match self {
            Value::Array(a) => a,
            other => wrong_tag!(other, Tag::Array),
        }
    }

    /// Panics unless the value is an array
    pub fn array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(a) => a,
            other => wrong_tag!(other, Tag::Array),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Render the value as compact JSON text
    pub fn to_json(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Value::Invalid, Value::Invalid)
            | (Value::Null, Value::Null)
            | (Value::True, Value::True)
            | (Value::False, Value::False) => true,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Object(l), Value::Object(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => l == r,
            _ => false,
        }
    }
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<True> for Value {
    fn from(_: True) -> Self {
        Value::True
    }
}

impl From<False> for Value {
    fn from(_: False) -> Self {
        Value::False
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_number {
    ($($source: ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )+
    };
}

value_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::Array(values.into_iter().collect())
    }
}
