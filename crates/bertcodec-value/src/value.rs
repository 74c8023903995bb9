//! Application-level values carried over BERT.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use bertcodec_term::Atom;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::regex::RegexValue;

/// Associative values, keyed by any [`Value`].
///
/// Integer keys are accepted but are not a supported interchange domain:
/// peers that narrow small integers to bytes lose key identity across a
/// round trip. Text keys are the portable choice.
///
/// A `Text` key and a `Binary` key with the same bytes are distinct here but
/// identical on the wire, so decoding such a map fails.
pub type BertMap = BTreeMap<Value, Value>;

/// A value BERT can carry.
///
/// `Text` has no tag of its own. It is sent as a UTF-8 binary and comes
/// back as [`Value::Binary`], except when used as a map key, where the
/// decoder turns binary keys back into text.
///
/// Values are totally ordered so they can key a [`BertMap`]: first by kind
/// (in declaration order), then by content. Floats compare with
/// [`f64::total_cmp`], so `NaN` equals itself and `-0.0` sorts before `0.0`.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Atom(Atom),
    Text(String),
    Binary(Bytes),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(BertMap),
    Regex(RegexValue),
    Time(DateTime<Utc>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Atom(_) => "atom",
            Value::Text(_) => "text",
            Value::Binary(_) => "binary",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Regex(_) => "regex",
            Value::Time(_) => "time",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Nil => 0,
            Value::Bool(_) => 1,
            Value::Integer(_) => 2,
            Value::Float(_) => 3,
            Value::Atom(_) => 4,
            Value::Text(_) => 5,
            Value::Binary(_) => 6,
            Value::List(_) => 7,
            Value::Tuple(_) => 8,
            Value::Map(_) => 9,
            Value::Regex(_) => 10,
            Value::Time(_) => 11,
        }
    }

    /// Build a map from key/value pairs. Later duplicates win.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn tuple(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(elements.into_iter().collect())
    }

    pub fn binary(data: impl Into<Bytes>) -> Self {
        Value::Binary(data.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BertMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a text key in a map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(&Value::Text(key.to_owned()))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Nil, Value::Nil) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Atom(a), Value::Atom(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Binary(a), Value::Binary(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            (Value::Regex(a), Value::Regex(b)) => a.cmp(b),
            (Value::Time(a), Value::Time(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Integer(i64::from(v)) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Integer(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::Text(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::Text(v.to_owned()) } }
impl From<Atom> for Value { fn from(v: Atom) -> Self { Value::Atom(v) } }
impl From<Bytes> for Value { fn from(v: Bytes) -> Self { Value::Binary(v) } }
impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self { Value::Binary(Bytes::copy_from_slice(v)) }
}
impl From<BertMap> for Value { fn from(v: BertMap) -> Self { Value::Map(v) } }
impl From<RegexValue> for Value { fn from(v: RegexValue) -> Self { Value::Regex(v) } }
impl From<DateTime<Utc>> for Value { fn from(v: DateTime<Utc>) -> Self { Value::Time(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Nil) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::Text("hello".into()));
        assert_eq!(Value::from(42), Value::Integer(42));
        assert_eq!(Value::from(Some(7.7)), Value::Float(7.7));
        assert_eq!(Value::from(None::<bool>), Value::Nil);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn test_float_equality_is_total() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
        assert!(Value::Float(-0.0) < Value::Float(0.0));
    }

    #[test]
    fn test_kinds_never_compare_equal() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_ne!(Value::Text("a".into()), Value::binary(&b"a"[..]));
        assert_ne!(Value::List(Vec::new()), Value::Tuple(Vec::new()));
        assert!(Value::Nil < Value::Bool(false));
    }

    #[test]
    fn test_map_keys() {
        let map = Value::map([("foo", 1), ("bar", 2), ("foo", 3)]);
        let entries = map.as_map().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(map.get("foo"), Some(&Value::Integer(3)));
        assert_eq!(map.get("missing"), None);
        assert_eq!(Value::Nil.get("foo"), None);
    }
}
