//! Free-form metadata payload.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};
use std::error::Error as StdError;
use std::fmt;

/// Metadata attached to a log entry.
///
/// An absent payload is `Option::None` on the entry, not a variant here.
/// Objects keep their insertion order so rendered JSON is stable.
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Metadata>),
    Object(Vec<(String, Metadata)>),
    /// An error captured from a `std::error::Error` value.
    Error(CapturedError),
}

impl Metadata {
    /// An object with no keys. Still rendered as `{}`.
    pub fn empty_object() -> Self {
        Metadata::Object(Vec::new())
    }

    /// Capture an error (and its source chain) as metadata.
    pub fn error(err: &(dyn StdError + 'static)) -> Self {
        Metadata::Error(CapturedError::new(err))
    }

    /// Convert any serializable value through its JSON representation.
    pub fn from_serialize<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map(Metadata::from)
    }

    /// Object or array (including empty ones, and captured errors).
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Metadata::Array(_) | Metadata::Object(_) | Metadata::Error(_)
        )
    }

    /// Truthiness as seen by the line renderer.
    ///
    /// Empty objects and arrays are truthy; `""`, `0`, `false` and null are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Metadata::Null => false,
            Metadata::Bool(b) => *b,
            Metadata::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Metadata::String(s) => !s.is_empty(),
            Metadata::Array(_) | Metadata::Object(_) | Metadata::Error(_) => true,
        }
    }

    /// Look up a key on an object payload.
    pub fn get(&self, key: &str) -> Option<&Metadata> {
        match self {
            Metadata::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Insert or replace a key, turning the payload into an object if needed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Metadata>) {
        let key = key.into();
        let value = value.into();
        if !matches!(self, Metadata::Object(_)) {
            *self = Metadata::empty_object();
        }
        if let Metadata::Object(entries) = self {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
    }
}

/// Formatted representation of an error value embedded in metadata.
///
/// Rendered as the error message followed by one `caused by` line per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    message: String,
    causes: Vec<String>,
}

impl CapturedError {
    pub fn new(err: &(dyn StdError + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: err.to_string(),
            causes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)?;
        for cause in &self.causes {
            write!(f, "\n    caused by: {}", cause)?;
        }
        Ok(())
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metadata::Null => serializer.serialize_unit(),
            Metadata::Bool(b) => serializer.serialize_bool(*b),
            Metadata::Number(n) => n.serialize(serializer),
            Metadata::String(s) => serializer.serialize_str(s),
            Metadata::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Metadata::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Metadata::Error(err) => serializer.collect_str(err),
        }
    }
}

impl From<Value> for Metadata {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Metadata::Null,
            Value::Bool(b) => Metadata::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => Metadata::from(f),
                _ => Metadata::Number(n),
            },
            Value::String(s) => Metadata::String(s),
            Value::Array(items) => Metadata::Array(items.into_iter().map(Metadata::from).collect()),
            Value::Object(map) => {
                Metadata::Object(map.into_iter().map(|(k, v)| (k, Metadata::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Metadata {
    fn from(s: &str) -> Self {
        Metadata::String(s.to_string())
    }
}

impl From<String> for Metadata {
    fn from(s: String) -> Self {
        Metadata::String(s)
    }
}

impl From<bool> for Metadata {
    fn from(b: bool) -> Self {
        Metadata::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Metadata {
                fn from(n: $ty) -> Self {
                    Metadata::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Metadata {
    /// Integral values become integers (`1.0` renders as `1`); NaN and
    /// infinities become null, as they have no JSON form.
    fn from(f: f64) -> Self {
        match integral_number(f) {
            Some(n) => Metadata::Number(n),
            None => Number::from_f64(f).map_or(Metadata::Null, Metadata::Number),
        }
    }
}

/// Integer form of an integral float, when it fits `i64` or `u64`.
fn integral_number(f: f64) -> Option<Number> {
    if f.fract() != 0.0 {
        return None;
    }
    // `i64::MAX as f64` rounds up to 2^63, so the upper bounds are exclusive.
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Number::from(f as i64))
    } else if f >= 0.0 && f < u64::MAX as f64 {
        Some(Number::from(f as u64))
    } else {
        None
    }
}

impl From<CapturedError> for Metadata {
    fn from(err: CapturedError) -> Self {
        Metadata::Error(err)
    }
}

impl<T: Into<Metadata>> From<Vec<T>> for Metadata {
    fn from(items: Vec<T>) -> Self {
        Metadata::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Metadata>> From<Option<T>> for Metadata {
    fn from(value: Option<T>) -> Self {
        value.map_or(Metadata::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Metadata>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Metadata::empty_object();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[derive(Debug, thiserror::Error)]
    #[error("query failed")]
    struct QueryFailed(#[source] Refused);

    #[test]
    fn test_truthiness() {
        assert!(!Metadata::Null.is_truthy());
        assert!(!Metadata::from("").is_truthy());
        assert!(!Metadata::from(0).is_truthy());
        assert!(!Metadata::from(-0.0).is_truthy());
        assert!(!Metadata::from(false).is_truthy());
        assert!(Metadata::from("x").is_truthy());
        assert!(Metadata::from(127).is_truthy());
        assert!(Metadata::from(true).is_truthy());
        assert!(Metadata::empty_object().is_truthy());
        assert!(Metadata::Array(Vec::new()).is_truthy());
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let metadata = Metadata::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&str> = match &metadata {
            Metadata::Object(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected object, got {other:?}"),
        };
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut metadata: Metadata = [("a", 1), ("b", 2)].into_iter().collect();
        metadata.insert("a", 10);
        assert_eq!(metadata.get("a"), Some(&Metadata::from(10)));
        assert_eq!(metadata.get("b"), Some(&Metadata::from(2)));
        assert_eq!(metadata.get("c"), None);
    }

    #[test]
    fn test_integral_floats_become_integers() {
        assert_eq!(Metadata::from(4.0), Metadata::from(4));
        assert_eq!(Metadata::from(-3.0), Metadata::from(-3));
        assert_eq!(Metadata::from(9_007_199_254_740_992.0), Metadata::from(9_007_199_254_740_992_i64));
        assert_eq!(Metadata::from(1e19), Metadata::from(10_000_000_000_000_000_000_u64));
        assert_eq!(Metadata::from(f64::NAN), Metadata::Null);
        assert_eq!(Metadata::from(f64::INFINITY), Metadata::Null);
        assert!(matches!(Metadata::from(1.5), Metadata::Number(_)));
    }

    #[test]
    fn test_json_floats_are_normalized() {
        assert_eq!(Metadata::from(json!(4.0)), Metadata::from(4));
        assert_eq!(Metadata::from(json!({"a": 4.0})).get("a"), Some(&Metadata::from(4)));
        assert_eq!(Metadata::from(json!(2.5)), Metadata::from(2.5));
    }

    #[test]
    fn test_captured_error_chain() {
        let err = QueryFailed(Refused);
        let captured = CapturedError::new(&err);
        assert_eq!(captured.message(), "query failed");
        assert_eq!(captured.causes(), ["connection refused".to_string()]);
        assert_eq!(
            captured.to_string(),
            "Error: query failed\n    caused by: connection refused"
        );
    }

    #[test]
    fn test_from_serialize() {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            path: &'a str,
            status: u16,
        }

        let metadata = Metadata::from_serialize(&Request { path: "/users", status: 200 }).unwrap();
        assert_eq!(metadata.get("path"), Some(&Metadata::from("/users")));
        assert_eq!(metadata.get("status"), Some(&Metadata::from(200)));
    }
}
