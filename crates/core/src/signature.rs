//! Constructor signatures
//!
//! A `ConstructorSignature` identifies a constructor by its declaring type
//! name and the ordered list of parameter types. Signatures are declared
//! explicitly, once per convertible type. There is no reflective search
//! for a constructor matching an arity, so ambiguity cannot arise at
//! conversion time.

use crate::value::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single constructor parameter: name plus declared type
///
/// Parameter names are carried for diagnostics and for code emitters that
/// render named-argument syntax; identity and assignability checks use the
/// declared type only together with the parameter's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    ty: ValueType,
}

impl Parameter {
    /// Create a parameter with the given name and declared type
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// The parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter type
    pub fn ty(&self) -> ValueType {
        self.ty
    }
}

/// Identity of a constructor: declaring type name + ordered parameters
///
/// Two signatures are equal iff they name the same declaring type and
/// declare the same parameters in the same order. `Display` renders the
/// signature as `Type(name: Ty, ...)`, the form used in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorSignature {
    declaring_type: String,
    parameters: Vec<Parameter>,
}

impl ConstructorSignature {
    /// Create a signature for the named type with the given parameter list
    pub fn new(declaring_type: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            parameters,
        }
    }

    /// Name of the type this constructor builds
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The ordered parameter list
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of parameters the constructor takes
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Display for ConstructorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.declaring_type)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty)?;
        }
        write!(f, ")")
    }
}
