//! Objects and their members
use std::slice::Iter;

use crate::value::{ToValue, Value};

/// A single name/value pair within an [Object]
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    key: String,
    value: Value,
}

impl Member {
    /// Create a new member. The grammar never produces members with empty names, so an empty key
    /// here is a bug in the caller and will panic
    pub fn new<K: Into<String>, V: Into<Value>>(key: K, value: V) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "object members must have a non-empty key");
        Member {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Split the member back into its key and value
    pub fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}

/// An ordered list of [Member]s. Insertion order is preserved and duplicate keys are kept as-is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member
    pub fn push(&mut self, member: Member) -> &mut Self {
        self.members.push(member);
        self
    }

    /// Append a member built from anything with a [ToValue] adapter
    pub fn insert<K: Into<String>, T: ToValue + ?Sized>(&mut self, key: K, value: &T) -> &mut Self {
        self.push(Member::new(key, value.to_value()))
    }

    /// Look up a member value by key. Where a key occurs more than once the last occurrence
    /// is returned
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members
            .iter()
            .rev()
            .find(|m| m.key == key)
            .map(|m| &m.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.members
            .iter_mut()
            .rev()
            .find(|m| m.key == key)
            .map(|m| &mut m.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.iter().any(|m| m.key == key)
    }

    pub fn iter(&self) -> Iter<'_, Member> {
        self.members.iter()
    }

    /// Iterate over the member keys, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.key.as_str())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Remove all members, handing them back to the caller
    pub fn take_members(&mut self) -> Vec<Member> {
        std::mem::take(&mut self.members)
    }
}

impl From<Vec<Member>> for Object {
    fn from(members: Vec<Member>) -> Self {
        Object { members }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object {
            members: iter.into_iter().map(|(k, v)| Member::new(k, v)).collect(),
        }
    }
}

impl FromIterator<Member> for Object {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Object {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
