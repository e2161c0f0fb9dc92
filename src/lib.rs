//! Blueprint: constructor-call descriptors for reconstructible values
//!
//! A value type declares, once, how it can be rebuilt from a constructor
//! call; a generic dispatcher turns any registered value into a portable
//! `Descriptor` of (constructor signature, ordered arguments). Replaying
//! the descriptor reproduces a field-wise equal instance; a code emitter
//! can instead render the descriptor as a `Type::new(...)` expression.
//!
//! # Quick Start
//!
//! ```
//! use blueprint::{
//!     ConstructorSignature, ConvertError, ConverterRegistry, Parameter, Reconstructible,
//!     Result, Value, ValueType,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: i64,
//!     username: String,
//! }
//!
//! impl Reconstructible for User {
//!     fn signature() -> ConstructorSignature {
//!         ConstructorSignature::new(
//!             "User",
//!             vec![
//!                 Parameter::new("id", ValueType::Int),
//!                 Parameter::new("username", ValueType::Str),
//!             ],
//!         )
//!     }
//!
//!     fn arguments(&self) -> Vec<Value> {
//!         vec![Value::Int(self.id), Value::Str(self.username.clone())]
//!     }
//!
//!     fn construct(arguments: &[Value]) -> Result<Self> {
//!         match arguments {
//!             [Value::Int(id), Value::Str(username)] => Ok(User {
//!                 id: *id,
//!                 username: username.clone(),
//!             }),
//!             _ => Err(ConvertError::arity_mismatch(
//!                 &Self::signature(),
//!                 arguments.len(),
//!             )),
//!         }
//!     }
//! }
//!
//! let registry = ConverterRegistry::new();
//! registry.register::<User>()?;
//!
//! let user = User { id: 7, username: "alice".into() };
//! let descriptor = registry.convert_to_descriptor(&user)?;
//! let rebuilt: User = descriptor.replay()?;
//! assert_eq!(rebuilt, user);
//! # Ok::<(), blueprint::ConvertError>(())
//! ```
//!
//! # Architecture
//!
//! Two components, re-exported here as one surface:
//! - [`blueprint_core`]: the descriptor model (values, signatures,
//!   descriptors, the `Reconstructible` contract, errors)
//! - [`blueprint_convert`]: the converter protocol and the process-wide
//!   type→converter registry

// Re-export the public API of both components
pub use blueprint_core::{
    ConstructorSignature, ConvertError, Descriptor, Parameter, Reconstructible, Result,
    TargetKind, Value, ValueType,
};

pub use blueprint_convert::{default_registry, Converter, ConverterRegistry, FieldConverter};

/// Free-function access to the process-wide default registry
pub mod registry {
    pub use blueprint_convert::registry::{convert_to_descriptor, register, replay};
}
