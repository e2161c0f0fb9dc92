//! Conversion vocabulary shared by the descriptor model and the converter
//! protocol
//!
//! `TargetKind` names what a value may be converted *to*. Exactly one kind
//! is supported: the constructor descriptor. A converter declares support
//! only for the capability it implements and declines everything else, so
//! "not supported" is an observable error rather than a silent fallback.
//!
//! `Reconstructible` is the constructor contract a convertible type
//! implements: one explicitly declared signature, field extraction in
//! parameter order, and the constructor call itself.

use crate::error::Result;
use crate::signature::ConstructorSignature;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion target discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Convert a value into a `Descriptor` of its constructor call
    ConstructorDescriptor,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::ConstructorDescriptor => f.write_str("ConstructorDescriptor"),
        }
    }
}

/// Contract for types that can be expressed as a constructor call
///
/// Implementing this trait declares, once, which constructor rebuilds the
/// type and how an instance maps onto that constructor's arguments. All
/// conversion and replay behavior is derived from these three capabilities.
///
/// ## Contract
///
/// - `signature` must return the same signature on every call.
/// - `arguments` must return the instance's field values in the
///   signature's parameter order, one per parameter.
/// - `construct(v.arguments())` must produce a value field-wise equal to
///   `v` (the round-trip law).
pub trait Reconstructible: Sized + 'static {
    /// The constructor this type is rebuilt through
    fn signature() -> ConstructorSignature;

    /// Field values in constructor parameter order
    fn arguments(&self) -> Vec<Value>;

    /// Invoke the constructor with previously captured arguments
    ///
    /// Arguments arriving through `Descriptor::replay` have already been
    /// checked against the signature for arity and type. A validating
    /// constructor may still reject argument *values*.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionFailed` when the constructor rejects the
    /// supplied values.
    fn construct(arguments: &[Value]) -> Result<Self>;
}
