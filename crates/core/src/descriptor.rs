//! Constructor-call descriptors
//!
//! A `Descriptor` is an immutable record of a constructor identity plus the
//! ordered arguments to pass to it: everything needed to reproduce an
//! equivalent instance, either by emitting source text or by replaying the
//! call at runtime.
//!
//! ## Invariants
//!
//! Enforced at construction, never re-checked afterwards:
//! - argument count equals the signature's parameter count
//! - every argument's type is assignable to its parameter's declared type
//!
//! Descriptors have value semantics: two descriptors are equal iff their
//! signatures are equal and their argument sequences are elementwise equal.

use crate::convert::Reconstructible;
use crate::error::{ConvertError, Result};
use crate::signature::ConstructorSignature;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// An immutable (constructor signature, ordered arguments) pair
///
/// Created by a converter from a live instance, consumed either by a code
/// emitter (through the structural accessors) or by [`Descriptor::replay`].
///
/// # Example
///
/// ```
/// use blueprint_core::{ConstructorSignature, Descriptor, Parameter, Value, ValueType};
///
/// let signature = ConstructorSignature::new(
///     "User",
///     vec![
///         Parameter::new("id", ValueType::Int),
///         Parameter::new("username", ValueType::Str),
///     ],
/// );
/// let descriptor = Descriptor::new(
///     signature,
///     vec![Value::Int(7), Value::Str("alice".into())],
/// )?;
/// assert_eq!(descriptor.signature().declaring_type(), "User");
/// # Ok::<(), blueprint_core::ConvertError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    signature: ConstructorSignature,
    arguments: Vec<Value>,
}

impl Descriptor {
    /// Create a descriptor, validating the arguments against the signature
    ///
    /// # Errors
    ///
    /// - `ArityMismatch` when the argument count differs from the
    ///   signature's parameter count
    /// - `TypeMismatch` when any argument's type is not assignable to the
    ///   corresponding parameter's declared type
    pub fn new(signature: ConstructorSignature, arguments: Vec<Value>) -> Result<Self> {
        if arguments.len() != signature.arity() {
            return Err(ConvertError::arity_mismatch(&signature, arguments.len()));
        }
        for (parameter, argument) in signature.parameters().iter().zip(&arguments) {
            if argument.type_of() != parameter.ty() {
                return Err(ConvertError::type_mismatch(
                    &signature,
                    parameter.name(),
                    parameter.ty(),
                    argument.type_of(),
                ));
            }
        }
        Ok(Self {
            signature,
            arguments,
        })
    }

    /// The constructor this descriptor captures
    pub fn signature(&self) -> &ConstructorSignature {
        &self.signature
    }

    /// The captured arguments, in parameter order
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Invoke the captured constructor and return the rebuilt instance
    ///
    /// The single runtime round-trip entry point: replaying the descriptor
    /// produced from a value yields a field-wise equal value. Has no side
    /// effects beyond allocating the new instance and does not mutate the
    /// descriptor.
    ///
    /// # Errors
    ///
    /// - `SignatureMismatch` when `T` declares a different constructor than
    ///   the one this descriptor captures
    /// - `ConstructionFailed` when `T`'s constructor rejects the argument
    ///   values
    pub fn replay<T: Reconstructible>(&self) -> Result<T> {
        let expected = T::signature();
        if self.signature != expected {
            return Err(ConvertError::SignatureMismatch {
                expected: expected.to_string(),
                found: self.signature.to_string(),
            });
        }
        T::construct(&self.arguments)
    }
}
