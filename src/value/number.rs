//! JSON numbers, kept in whichever representation they were created or parsed with
use std::fmt::{Display, Formatter};

/// The three numeric representations a [Number] may take
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Unsigned integer
    Unsigned,
    /// Signed integer
    Signed,
    /// Floating point
    Float,
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberType::Unsigned => write!(f, "unsigned"),
            NumberType::Signed => write!(f, "signed"),
            NumberType::Float => write!(f, "float"),
        }
    }
}

/// A JSON number. There is no implicit conversion between the different representations, and
/// two numbers are only ever equal if they share the same representation
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    /// Unsigned integer numeric value
    Unsigned(u64),
    /// Signed integer numeric value
    Signed(i64),
    /// Floating point numeric value
    Float(f64),
}

impl Number {
    /// The representation currently held
    pub fn number_type(&self) -> NumberType {
        match self {
            Number::Unsigned(_) => NumberType::Unsigned,
            Number::Signed(_) => NumberType::Signed,
            Number::Float(_) => NumberType::Float,
        }
    }

    /// The unsigned value. Panics if the number isn't held as an unsigned integer
    pub fn uint_value(&self) -> u64 {
        match self {
            Number::Unsigned(value) => *value,
            other => panic!("uint_value() called on a {} number", other.number_type()),
        }
    }

    /// The signed value. Panics if the number isn't held as a signed integer
    pub fn int_value(&self) -> i64 {
        match self {
            Number::Signed(value) => *value,
            other => panic!("int_value() called on a {} number", other.number_type()),
        }
    }

    /// The floating point value. Panics if the number isn't held as a float
    pub fn fp_value(&self) -> f64 {
        match self {
            Number::Float(value) => *value,
            other => panic!("fp_value() called on a {} number", other.number_type()),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Signed(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// True for either of the integer representations
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }
}

macro_rules! number_from {
    ($variant: ident, $target: ty, $($source: ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

number_from!(Unsigned, u64, u8, u16, u32, u64);
number_from!(Signed, i64, i8, i16, i32, i64);
number_from!(Float, f64, f32, f64);

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::Unsigned(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Signed(value as i64)
    }
}
