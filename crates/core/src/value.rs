//! Value types for CompactList
//!
//! This module defines `Value`, the uniform boxed element representation used
//! at the container contract boundary. The generic strategy stores values as
//! they arrive; the packed strategy bridges `Value::Int` to raw `i64` words
//! on write and re-boxes on read.
//!
//! Type rules:
//! - No implicit coercions: `Int(1) != Float(1.0)`
//! - `Bytes` are not `String`
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`

use crate::kind::ElementKind;
use serde::{Deserialize, Serialize};

/// Uniform element value for all container surfaces
///
/// One variant per [`ElementKind`]. Different variants are never equal, even
/// when the payloads "look" the same (`Int(1) != Float(1.0)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Value {
    /// The element kind this value belongs to
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::Bool(_) => ElementKind::Bool,
            Value::Int(_) => ElementKind::Int,
            Value::Float(_) => ElementKind::Float,
            Value::String(_) => ElementKind::String,
            Value::Bytes(_) => ElementKind::Bytes,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Extract the integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the float payload, if this is a `Float`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract the string payload, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Value::Bool(true).kind(), ElementKind::Bool);
        assert_eq!(Value::Int(7).kind(), ElementKind::Int);
        assert_eq!(Value::Float(1.5).kind(), ElementKind::Float);
        assert_eq!(Value::String("x".into()).kind(), ElementKind::String);
        assert_eq!(Value::Bytes(vec![1, 2]).kind(), ElementKind::Bytes);
    }

    #[test]
    fn test_no_cross_kind_equality() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Bytes(b"hi".to_vec()), Value::String("hi".into()));
    }

    #[test]
    fn test_float_ieee754_equality() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Bool(true).as_int(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(vec![0u8]), Value::Bytes(vec![0]));
    }
}
