// src/data.rs
//
// The proposal entity and the loosely-typed values it holds.
//
// - Value: scalar / sequence / mapping, order-preserving.
// - Rfc:   one proposal page. Every field starts empty; loaders fill them in
//          independently and never clear what another loader wrote.

use std::fmt;

use indexmap::IndexMap;

pub type Map = IndexMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<Value>),
    Mapping(Map),
}

impl Value {
    pub fn scalar(s: impl Into<String>) -> Self { Value::Scalar(s.into()) }

    pub fn as_str(&self) -> Option<&str> {
        match self { Value::Scalar(s) => Some(s.as_str()), _ => None }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self { Value::Mapping(m) => Some(m), _ => None }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self { Value::Sequence(v) => Some(v.as_slice()), _ => None }
    }

    /// Mapping lookup; `None` for a missing key or a non-mapping value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Scalar(s!(s)) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Scalar(s) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::Sequence(v.into_iter().map(Into::into).collect()) }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self { Value::Mapping(m) }
}

/// Compact one-line rendering: scalars as-is, `[a, b]`, `{k: v, …}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A single RFC page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rfc {
    pub name: String,
    details: Map,
    change_log: Map,
    votes: Map,
    vote_description: String,
}

impl Rfc {
    pub fn new() -> Self { Self::default() }

    pub fn details(&self) -> &Map { &self.details }
    pub fn change_log(&self) -> &Map { &self.change_log }
    /// Question key → vote-question record (a mapping with a `votes` entry).
    pub fn votes(&self) -> &Map { &self.votes }
    pub fn vote_description(&self) -> &str { &self.vote_description }

    pub fn set_details(&mut self, details: Map) { self.details = details; }
    pub fn set_change_log(&mut self, change_log: Map) { self.change_log = change_log; }
    pub fn set_votes(&mut self, votes: Map) { self.votes = votes; }
    pub fn set_vote_description(&mut self, description: impl Into<String>) {
        self.vote_description = description.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_rfc_is_empty_not_missing() {
        let rfc = Rfc::new();
        assert!(rfc.details().is_empty());
        assert!(rfc.change_log().is_empty());
        assert!(rfc.votes().is_empty());
        assert_eq!(rfc.vote_description(), "");
        assert_eq!(rfc.name, "");
    }

    #[test]
    fn display_is_compact() {
        let mut m = Map::new();
        m.insert(s!("yes"), Value::from("3"));
        m.insert(s!("list"), Value::from(vec!["a", "b"]));
        assert_eq!(Value::Mapping(m).to_string(), "{yes: 3, list: [a, b]}");
    }

    #[test]
    fn get_only_reads_mappings() {
        let mut m = Map::new();
        m.insert(s!("votes"), Value::Mapping(Map::new()));
        let v = Value::Mapping(m);
        assert!(v.get("votes").is_some());
        assert!(v.get("nope").is_none());
        assert!(Value::from("x").get("votes").is_none());
    }
}
