use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use std::{
    borrow::{Borrow, Cow},
    fmt,
    str::FromStr,
};

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

#[cfg(feature = "uuid")]
use uuid::Uuid;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// A value we parameterize into the query instead of writing it inline. Null
/// values are defined by their corresponding type variants with a `None`
/// value for best compatibility.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// 64-bit signed integer.
    Integer(Option<i64>),
    /// A decimal value.
    Real(Option<Decimal>),
    /// String value.
    Text(Option<Cow<'a, str>>),
    /// Boolean value.
    Boolean(Option<bool>),
    /// A single character.
    Char(Option<char>),
    /// Bytes value.
    Bytes(Option<Cow<'a, [u8]>>),
    #[cfg(feature = "json")]
    /// A JSON value.
    Json(Option<serde_json::Value>),
    #[cfg(feature = "uuid")]
    /// An UUID value.
    Uuid(Option<Uuid>),
    #[cfg(feature = "chrono")]
    /// A datetime value.
    DateTime(Option<DateTime<Utc>>),
}

impl<'a> fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = match self {
            Value::Integer(val) => val.map(|v| write!(f, "{}", v)),
            Value::Real(val) => val.map(|v| write!(f, "{}", v)),
            Value::Text(val) => val.as_ref().map(|v| write!(f, "\"{}\"", v)),
            Value::Boolean(val) => val.map(|v| write!(f, "{}", v)),
            Value::Char(val) => val.map(|v| write!(f, "'{}'", v)),
            Value::Bytes(val) => val.as_ref().map(|v| write!(f, "<{} bytes blob>", v.len())),
            #[cfg(feature = "json")]
            Value::Json(val) => val.as_ref().map(|v| write!(f, "{}", v)),
            #[cfg(feature = "uuid")]
            Value::Uuid(val) => val.map(|v| write!(f, "{}", v)),
            #[cfg(feature = "chrono")]
            Value::DateTime(val) => val.map(|v| write!(f, "{}", v)),
        };

        match res {
            Some(r) => r,
            None => write!(f, "null"),
        }
    }
}

impl<'a> Value<'a> {
    /// Creates a new integer value.
    pub fn integer<I>(value: I) -> Self
    where
        I: Into<i64>,
    {
        Value::Integer(Some(value.into()))
    }

    /// Creates a new decimal value.
    pub fn real(value: Decimal) -> Self {
        Value::Real(Some(value))
    }

    /// Creates a new string value.
    pub fn text<T>(value: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Value::Text(Some(value.into()))
    }

    /// Creates a new boolean value.
    pub fn boolean<B>(value: B) -> Self
    where
        B: Into<bool>,
    {
        Value::Boolean(Some(value.into()))
    }

    /// Creates a new character value.
    pub fn character<C>(value: C) -> Self
    where
        C: Into<char>,
    {
        Value::Char(Some(value.into()))
    }

    /// Creates a new bytes value.
    pub fn bytes<B>(value: B) -> Self
    where
        B: Into<Cow<'a, [u8]>>,
    {
        Value::Bytes(Some(value.into()))
    }

    /// Creates a new JSON value.
    #[cfg(feature = "json")]
    pub fn json(value: serde_json::Value) -> Self {
        Value::Json(Some(value))
    }

    /// Creates a new uuid value.
    #[cfg(feature = "uuid")]
    pub fn uuid(value: Uuid) -> Self {
        Value::Uuid(Some(value))
    }

    /// Creates a new datetime value.
    #[cfg(feature = "chrono")]
    pub fn datetime(value: DateTime<Utc>) -> Self {
        Value::DateTime(Some(value))
    }

    /// `true` if the `Value` is null.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Integer(i) => i.is_none(),
            Value::Real(r) => r.is_none(),
            Value::Text(t) => t.is_none(),
            Value::Boolean(b) => b.is_none(),
            Value::Char(c) => c.is_none(),
            Value::Bytes(b) => b.is_none(),
            #[cfg(feature = "json")]
            Value::Json(json) => json.is_none(),
            #[cfg(feature = "uuid")]
            Value::Uuid(u) => u.is_none(),
            #[cfg(feature = "chrono")]
            Value::DateTime(dt) => dt.is_none(),
        }
    }

    /// `true` if the `Value` is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns an i64 if the value is an integer, otherwise `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => *i,
            _ => None,
        }
    }

    /// `true` if the `Value` is text.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns a &str if the value is text, otherwise `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(Some(cow)) => Some(cow.borrow()),
            _ => None,
        }
    }

    /// Returns a f64 if the value is a real value and the underlying decimal
    /// can be converted, otherwise `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(Some(d)) => d.to_f64(),
            _ => None,
        }
    }

    /// Returns a bool if the value is a boolean, otherwise `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => *b,
            _ => None,
        }
    }
}

value!(val: i64, Integer, val);
value!(val: i32, Integer, i64::from(val));
value!(val: usize, Integer, i64::try_from(val).unwrap());
value!(val: bool, Boolean, val);
value!(val: Decimal, Real, val);
value!(val: &'a str, Text, val.into());
value!(val: String, Text, val.into());
value!(val: &'a [u8], Bytes, val.into());
#[cfg(feature = "json")]
value!(val: JsonValue, Json, val);
#[cfg(feature = "uuid")]
value!(val: Uuid, Uuid, val);
#[cfg(feature = "chrono")]
value!(val: DateTime<Utc>, DateTime, val);

value!(
    val: f64,
    Real,
    Decimal::from_str(&val.to_string()).expect("f64 is not a Decimal")
);

value!(val: f32, Real, Decimal::from_f32(val).expect("f32 is not a Decimal"));
