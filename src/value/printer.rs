//! Compact JSON rendering for the value model.
//!
//! Output is always valid JSON which parses back to an equal tree, with the exception of
//! non-finite floats (rendered as `null`) and the representation of integers, which always come
//! back in their canonical parsed form.
use std::fmt::{Display, Formatter, Write};

use crate::value::{Array, Member, Number, Object, Value};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Invalid => Ok(()),
            other => write_value(f, other),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Unsigned(n) => write!(f, "{}", n),
            Number::Signed(n) => write!(f, "{}", n),
            Number::Float(n) if !n.is_finite() => f.write_str("null"),
            Number::Float(n) => {
                // debug formatting switches to exponents for very large and small magnitudes
                let mut text = format!("{:?}", n);
                if !text.contains(&['.', 'e', 'E'][..]) {
                    text.push_str(".0");
                }
                f.write_str(&text)
            }
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_string(f, self.key())?;
        f.write_char(':')?;
        write_value(f, self.value())
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", member)?;
        }
        f.write_char('}')
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            write_value(f, element)?;
        }
        f.write_char(']')
    }
}

/// Nested invalid values have nothing sensible to render as, so they come out as `null`
fn write_value(f: &mut Formatter<'_>, value: &Value) -> std::fmt::Result {
    match value {
        Value::Invalid | Value::Null => f.write_str("null"),
        Value::True => f.write_str("true"),
        Value::False => f.write_str("false"),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write_string(f, s),
        Value::Object(o) => write!(f, "{}", o),
        Value::Array(a) => write!(f, "{}", a),
    }
}

fn write_string(f: &mut Formatter<'_>, s: &str) -> std::fmt::Result {
    f.write_char('"')?;
    let mut plain = 0;
    for (index, c) in s.char_indices() {
        let escaped = match c {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{8}' => Some("\\b"),
            '\u{c}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            c if (c as u32) < 0x20 => None,
            _ => continue,
        };
        f.write_str(&s[plain..index])?;
        match escaped {
            Some(sequence) => f.write_str(sequence)?,
            None => write!(f, "\\u{:04x}", c as u32)?,
        }
        plain = index + c.len_utf8();
    }
    f.write_str(&s[plain..])?;
    f.write_char('"')
}
