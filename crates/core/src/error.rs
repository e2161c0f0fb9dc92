//! Error types for descriptor conversion
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every variant is a programmer or configuration error raised
//! synchronously at the point of violation. None are retried and none are
//! recovered inside the core; they propagate to the immediate caller.

use crate::convert::TargetKind;
use crate::signature::ConstructorSignature;
use crate::value::ValueType;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for descriptor construction, conversion, and replay
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Argument count does not match the signature's parameter count
    #[error("arity mismatch for {signature}: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        /// Signature the arguments were checked against
        signature: String,
        /// Parameter count declared by the signature
        expected: usize,
        /// Argument count actually supplied
        actual: usize,
    },

    /// An argument's type is not assignable to its parameter's declared type
    #[error("type mismatch for parameter `{parameter}` of {signature}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Signature the arguments were checked against
        signature: String,
        /// Name of the offending parameter
        parameter: String,
        /// Type the parameter declares
        expected: ValueType,
        /// Type the argument actually has
        actual: ValueType,
    },

    /// `convert` was invoked without `can_convert` having returned true
    #[error("unsupported conversion from {source_type} to {target}")]
    UnsupportedConversion {
        /// Name of the source value's type
        source_type: String,
        /// Conversion target that was requested
        target: TargetKind,
    },

    /// The dispatcher was asked to resolve a type with no registered converter
    #[error("no converter registered for type {type_name}")]
    NoConverterRegistered {
        /// Name of the unresolved type
        type_name: String,
    },

    /// A second, different converter was registered for an already-registered type
    #[error("conflicting converter registration for type {type_name}")]
    ConflictingRegistration {
        /// Name of the doubly-registered type
        type_name: String,
    },

    /// A descriptor was replayed against a type with a different constructor
    #[error("descriptor for {found} does not match constructor {expected}")]
    SignatureMismatch {
        /// Signature declared by the replay target type
        expected: String,
        /// Signature the descriptor actually carries
        found: String,
    },

    /// The constructor itself rejected the supplied arguments during replay
    ///
    /// Wraps the constructor's own failure rather than masking it.
    #[error("constructor {signature} rejected its arguments")]
    ConstructionFailed {
        /// Signature of the rejecting constructor
        signature: String,
        /// The constructor's own error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConvertError {
    /// Build an `ArityMismatch` for `signature`
    pub fn arity_mismatch(signature: &ConstructorSignature, actual: usize) -> Self {
        ConvertError::ArityMismatch {
            signature: signature.to_string(),
            expected: signature.arity(),
            actual,
        }
    }

    /// Build a `TypeMismatch` for one parameter of `signature`
    pub fn type_mismatch(
        signature: &ConstructorSignature,
        parameter: &str,
        expected: ValueType,
        actual: ValueType,
    ) -> Self {
        ConvertError::TypeMismatch {
            signature: signature.to_string(),
            parameter: parameter.to_string(),
            expected,
            actual,
        }
    }

    /// Build a `ConstructionFailed` wrapping the constructor's own error
    pub fn construction(
        signature: &ConstructorSignature,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ConvertError::ConstructionFailed {
            signature: signature.to_string(),
            source: source.into(),
        }
    }
}
