//! Adapters for building [Value]s out of arbitrary application types.
//!
//! Anything implementing [ToValue] can be handed to [Value::set], [Object::insert] and
//! [Array::push_value]. Implementations should leave `res` holding a well-formed value.
//!
//! ```
//! use jsonval::value::{Object, ToValue, Value};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl ToValue for Point {
//!     fn build_value(&self, res: &mut Value) {
//!         let mut object = Object::new();
//!         object.insert("x", &self.x).insert("y", &self.y);
//!         res.build(object);
//!     }
//! }
//!
//! let value = Point { x: 1, y: -2 }.to_value();
//! assert_eq!(value.to_json(), r#"{"x":1,"y":-2}"#);
//! ```
use crate::value::{Array, False, Null, Number, Object, True, Value};

/// Conversion of an application type into a [Value]
pub trait ToValue {
    /// Replace the content of `res` with a representation of `self`
    fn build_value(&self, res: &mut Value);

    /// Build a fresh value
    fn to_value(&self) -> Value {
        let mut res = Value::Invalid;
        self.build_value(&mut res);
        res
    }
}

impl ToValue for Value {
    fn build_value(&self, res: &mut Value) {
        *res = self.clone();
    }
}

impl ToValue for Null {
    fn build_value(&self, res: &mut Value) {
        res.build(Null);
    }
}

impl ToValue for True {
    fn build_value(&self, res: &mut Value) {
        res.build(True);
    }
}

impl ToValue for False {
    fn build_value(&self, res: &mut Value) {
        res.build(False);
    }
}

impl ToValue for bool {
    fn build_value(&self, res: &mut Value) {
        res.build(*self);
    }
}

macro_rules! numeric_to_value {
    ($($source: ty),+) => {
        $(
            impl ToValue for $source {
                fn build_value(&self, res: &mut Value) {
                    res.build(Number::from(*self));
                }
            }
        )+
    };
}

numeric_to_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl ToValue for Number {
    fn build_value(&self, res: &mut Value) {
        res.build(*self);
    }
}

impl ToValue for str {
    fn build_value(&self, res: &mut Value) {
        res.build(self);
    }
}

impl ToValue for String {
    fn build_value(&self, res: &mut Value) {
        res.build(self.as_str());
    }
}

impl ToValue for Object {
    fn build_value(&self, res: &mut Value) {
        res.build(self.clone());
    }
}

impl ToValue for Array {
    fn build_value(&self, res: &mut Value) {
        res.build(self.clone());
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn build_value(&self, res: &mut Value) {
        match self {
            Some(value) => value.build_value(res),
            None => res.build(Null),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn build_value(&self, res: &mut Value) {
        let mut array = Array::with_capacity(self.len());
        for element in self {
            array.push_value(element);
        }
        res.build(array);
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn build_value(&self, res: &mut Value) {
        self.as_slice().build_value(res);
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn build_value(&self, res: &mut Value) {
        (**self).build_value(res);
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Array, Object, Tag, ToValue, Value};

    struct Record {
        a: i32,
        b: bool,
        c: String,
    }

    impl ToValue for Record {
        fn build_value(&self, res: &mut Value) {
            let mut object = Object::new();
            object
                .insert("a", &self.a)
                .insert("b", &self.b)
                .insert("c", &self.c);
            res.build(object);
        }
    }

    struct Triple {
        a: i32,
        b: bool,
        c: String,
    }

    impl ToValue for Triple {
        fn build_value(&self, res: &mut Value) {
            let mut array = Array::new();
            array.push_value(&self.a).push_value(&self.b).push_value(&self.c);
            res.build(array);
        }
    }

    #[test]
    fn custom_types_should_build_objects() {
        let record = Record {
            a: 7,
            b: true,
            c: "seven".to_string(),
        };
        let value = record.to_value();
        let object = value.object();
        assert_eq!(object.len(), 3);
        assert_eq!(object.get("a").unwrap().number().int_value(), 7);
        assert_eq!(object.get("b").unwrap().tag(), Tag::True);
        assert_eq!(object.get("c").unwrap().string(), "seven");
    }

    #[test]
    fn custom_types_should_build_arrays() {
        let triple = Triple {
            a: -1,
            b: false,
            c: "x".to_string(),
        };
        let mut value = Value::from("replaced");
        value.set(&triple);
        assert_eq!(value.array().len(), 3);
        assert_eq!(value.array()[1].tag(), Tag::False);
    }

    #[test]
    fn collections_of_custom_types_should_build_arrays() {
        let records = vec![
            Record {
                a: 1,
                b: false,
                c: "one".to_string(),
            },
            Record {
                a: 2,
                b: true,
                c: "two".to_string(),
            },
        ];
        let value = records.to_value();
        assert_eq!(value.array().len(), 2);
        assert_eq!(
            value.array()[1].object().get("c").unwrap().string(),
            "two"
        );
    }

    #[test]
    fn options_should_map_none_to_null() {
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(2i64).to_value(), Value::from(2i64));
        assert_eq!("s".to_value(), Value::from("s"));
    }
}
