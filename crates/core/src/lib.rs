//! Descriptor model for constructor-call conversion
//!
//! This crate defines the foundational types of the system:
//! - Value / ValueType: constructor argument literals and parameter types
//! - Parameter / ConstructorSignature: explicit constructor identity
//! - Descriptor: the immutable (signature, arguments) pair with `replay`
//! - Reconstructible: the constructor contract convertible types implement
//! - TargetKind: the conversion target discriminator
//! - ConvertError: the error surface of both the model and the dispatcher
//!
//! The converter protocol and the type→converter registry live in the
//! companion `blueprint-convert` crate; this crate is the leaf and has no
//! knowledge of registration or dispatch.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod signature;
pub mod value;

// Re-export commonly used types at the crate root
pub use convert::{Reconstructible, TargetKind};
pub use descriptor::Descriptor;
pub use error::{ConvertError, Result};
pub use signature::{ConstructorSignature, Parameter};
pub use value::{Value, ValueType};
