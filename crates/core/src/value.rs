//! Argument values for constructor calls
//!
//! This module defines:
//! - `Value`: the literal kinds a constructor argument can carry
//! - `ValueType`: the parameter type discriminator used by signatures
//!
//! ## Type Rules
//!
//! - No implicit coercions: an `Int` argument never satisfies a `Float`
//!   parameter, `Bytes` are not `Str`.
//! - Different variants are never equal.
//! - Float equality is IEEE-754: `NaN != NaN`, `-0.0 == 0.0`.
//!
//! Nested containers are deliberately absent: a descriptor captures a flat
//! constructor call, not an object graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type discriminator for constructor parameters
///
/// A `ConstructorSignature` declares each parameter with one of these
/// types; `Descriptor::new` checks every argument against its declared
/// parameter. Assignability is exact variant equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean parameter
    Bool,
    /// 64-bit signed integer parameter
    Int,
    /// 64-bit floating point parameter
    Float,
    /// UTF-8 string parameter
    Str,
    /// Raw bytes parameter
    Bytes,
}

impl ValueType {
    /// Get the type name as a string
    ///
    /// This is the name code emitters use when rendering a parameter list,
    /// and the name error messages print.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::Str => "Str",
            ValueType::Bytes => "Bytes",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constructor argument literal
///
/// Every argument captured by a `Descriptor` is one of these variants.
/// Equality follows the type rules above; two descriptors compare equal
/// only when their argument sequences are elementwise equal under this
/// definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Value {
    /// The `ValueType` this value is assignable to
    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Bytes(_) => ValueType::Bytes,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Str value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a Bytes value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic argument lists
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}
