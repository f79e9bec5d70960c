//! Scalar values and document entries.
//!
//! This module provides the two sum types at the heart of the document model:
//!
//! - [`Value`]: a scalar configuration value (string, integer, or float)
//! - [`Entry`]: one slot in the document root, either a scalar or a section
//!
//! ## Type Inference
//!
//! Raw text from a `key = value` line is classified by [`Value::infer`] with a
//! fixed precedence: integer first, then float, then string. The float form
//! requires a decimal point preceded by at least one digit (`1.` is a float,
//! `.5` and `1e5` are strings).
//!
//! ```rust
//! use ini_doc::Value;
//!
//! assert_eq!(Value::infer("42"), Value::Int(42));
//! assert_eq!(Value::infer("-3"), Value::Int(-3));
//! assert_eq!(Value::infer("3.14"), Value::Float(3.14));
//! assert_eq!(Value::infer("3."), Value::Float(3.0));
//! assert_eq!(Value::infer(".5"), Value::Str(".5".to_string()));
//! assert_eq!(Value::infer("1e5"), Value::Str("1e5".to_string()));
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use ini_doc::Value;
//!
//! let value = Value::Int(42);
//! assert_eq!(value.as_i64(), Some(42));
//!
//! // Fallible extraction with TryFrom
//! let n: i64 = i64::try_from(value).unwrap();
//! assert_eq!(n, 42);
//! ```

use crate::map::SectionMap;
use serde::de::{self, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar configuration value.
///
/// Values are produced by [`Value::infer`] during parsing (unless type
/// conversion is disabled, in which case every value is a [`Value::Str`]),
/// or built directly when constructing a document in memory.
///
/// # Examples
///
/// ```rust
/// use ini_doc::Value;
///
/// let port = Value::from(8080);
/// let host = Value::from("localhost");
///
/// assert!(port.is_int());
/// assert_eq!(host.as_str(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Classifies raw text into a typed value.
    ///
    /// Precedence is fixed: a string of decimal digits with an optional
    /// leading `-` parses as an integer; otherwise digits, a mandatory `.`,
    /// and zero or more trailing digits parse as a float; anything else is
    /// kept as a string.
    ///
    /// Leading zeros and signed zero normalize through numeric parsing
    /// (`"007"` becomes `Int(7)`), so the original spelling is lost on
    /// round-trip. A digit string too large for `i64` stays a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Value;
    ///
    /// assert_eq!(Value::infer("007"), Value::Int(7));
    /// assert_eq!(Value::infer("abc"), Value::Str("abc".to_string()));
    /// ```
    #[must_use]
    pub fn infer(raw: &str) -> Value {
        if is_int_literal(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Value::Int(n);
            }
        } else if is_float_literal(raw) {
            if let Ok(f) = raw.parse::<f64>() {
                return Value::Float(f);
            }
        }
        Value::Str(raw.to_string())
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Value;
    ///
    /// assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::Float(3.5).as_f64(), Some(3.5));
    /// assert_eq!(Value::from("x").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(_) => None,
        }
    }
}

// ^-?[0-9]+$
fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ^-?[0-9]+\.[0-9]*$
fn is_float_literal(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    match rest.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            // A whole-number float keeps one decimal place so it stays a
            // float when the rendered text is parsed again.
            Value::Float(fl) => {
                if fl.is_finite() && fl.fract() == 0.0 {
                    write!(f, "{:.1}", fl)
                } else {
                    write!(f, "{}", fl)
                }
            }
        }
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

// TryFrom implementations for extracting primitives from a Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Int(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, integer, or float")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Int(value as i64))
                } else {
                    Ok(Value::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Str(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// One slot in the document root: a leaf scalar or a named section.
///
/// Top-level keys and section names share a single ordered namespace, so the
/// root map stores this tagged variant. A key holds either shape, never both;
/// assigning one shape over the other replaces the slot.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{Entry, SectionMap, Value};
///
/// let scalar = Entry::from(Value::Int(1));
/// assert!(scalar.is_scalar());
///
/// let mut section = SectionMap::new();
/// section.insert("x".to_string(), Value::Int(1));
/// let entry = Entry::Section(section);
/// assert!(entry.is_section());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Scalar(Value),
    Section(SectionMap),
}

impl Entry {
    /// Returns `true` if the entry is a leaf scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Entry::Scalar(_))
    }

    /// Returns `true` if the entry is a section.
    #[inline]
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Entry::Section(_))
    }

    /// If the entry is a scalar, returns a reference to its value.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Entry::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// If the entry is a section, returns a reference to its key/value map.
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&SectionMap> {
        match self {
            Entry::Section(section) => Some(section),
            _ => None,
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Scalar(value)
    }
}

impl From<SectionMap> for Entry {
    fn from(section: SectionMap) -> Self {
        Entry::Section(section)
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Entry::Scalar(value) => value.serialize(serializer),
            Entry::Section(section) => {
                let mut map = serializer.serialize_map(Some(section.len()))?;
                for (k, v) in section.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = Entry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar or a map of scalars")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Entry::Scalar(Value::Int(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Entry::Scalar(Value::Int(value as i64)))
                } else {
                    Ok(Entry::Scalar(Value::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Entry::Scalar(Value::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Entry::Scalar(Value::Str(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Entry::Scalar(Value::Str(value)))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut section = SectionMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    section.insert(key, value);
                }
                Ok(Entry::Section(section))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}
