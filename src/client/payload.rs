//! Ordered request payloads
//!
//! A [`Payload`] is built fresh for every call. Fields are only present when a
//! caller supplied them: optional inputs go through [`Payload::insert_opt`],
//! which leaves the field out entirely for `None`. A present `false`, `0` or
//! empty list is still a present field.

use serde::Serialize;

/// A single payload value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl FieldValue {
    /// Append the wire form of this value under `name`.
    ///
    /// Lists become one `name[]` pair per item, so an empty list adds nothing.
    fn encode_into(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            FieldValue::Text(s) => pairs.push((name.to_string(), s.clone())),
            FieldValue::Bool(b) => pairs.push((name.to_string(), b.to_string())),
            FieldValue::Int(n) => pairs.push((name.to_string(), n.to_string())),
            FieldValue::List(items) => {
                let key = format!("{}[]", name);
                pairs.extend(items.iter().map(|item| (key.clone(), item.clone())));
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Ordered mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(String, FieldValue)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Re-inserting a name replaces the value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Set a field only when a value is present
    pub fn insert_opt<V: Into<FieldValue>>(
        &mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Flatten into ordered key/value pairs for a form body or query string
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            value.encode_into(name, &mut pairs);
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}
