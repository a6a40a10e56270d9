//! Arrays of values
use std::ops::Index;
use std::slice::Iter;

use crate::value::{ToValue, Value};

/// An ordered list of [Value]s
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Array::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element, taking ownership of it
    pub fn push<V: Into<Value>>(&mut self, element: V) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Append an element built from anything with a [ToValue] adapter
    pub fn push_value<T: ToValue + ?Sized>(&mut self, element: &T) -> &mut Self {
        self.elements.push(element.to_value());
        self
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Remove all elements, handing them back to the caller
    pub fn take_elements(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.elements)
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Array { elements }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
