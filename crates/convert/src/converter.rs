//! Converter protocol
//!
//! A converter is a stateless per-type policy: "can this value be converted
//! to a constructor descriptor, and if so, produce one". The trait is
//! deliberately narrow (one converter per convertible type, one target
//! kind) so dispatch stays a pure type-indexed lookup with no hierarchy
//! walking and no coercion rules.
//!
//! ## Thread Safety
//!
//! Converters are shared behind `Arc<dyn Converter>` in a process-wide
//! registry, so implementations must be `Send + Sync`. The shipped
//! `FieldConverter` holds no mutable state at all.

use blueprint_core::error::{ConvertError, Result};
use blueprint_core::{ConstructorSignature, Descriptor, Reconstructible, TargetKind};
use std::any::{Any, TypeId};
use std::marker::PhantomData;

/// Per-type conversion capability
///
/// Object-safe so the registry can hold heterogeneous converters behind
/// `Arc<dyn Converter>`. Values cross the boundary as `&dyn Any`; the
/// converter itself re-establishes the concrete type.
pub trait Converter: Send + Sync {
    /// `TypeId` of the convertible type this converter is registered for
    fn source_type(&self) -> TypeId;

    /// Diagnostic name of the convertible type
    fn source_type_name(&self) -> &str;

    /// The constructor signature descriptors produced here will carry
    fn signature(&self) -> &ConstructorSignature;

    /// Whether this converter supports converting `source` to `target`
    ///
    /// True only for the exact registered source type and
    /// `TargetKind::ConstructorDescriptor`; every other combination is
    /// declined.
    fn can_convert(&self, source: TypeId, target: TargetKind) -> bool;

    /// Build a descriptor for `value`
    ///
    /// Precondition: `can_convert(value.type_id(), target)`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedConversion` when the precondition is violated:
    /// a programming error surfaced immediately, never swallowed.
    fn convert(&self, value: &dyn Any, target: TargetKind) -> Result<Descriptor>;

    /// Reconstruct a value from `descriptor`, type-erased
    ///
    /// Backs the dispatcher's dynamic round-trip path, where the caller
    /// holds only a descriptor and not the concrete type.
    ///
    /// # Errors
    ///
    /// Returns `SignatureMismatch` for a descriptor of a different
    /// constructor, or `ConstructionFailed` from a rejecting constructor.
    fn replay(&self, descriptor: &Descriptor) -> Result<Box<dyn Any>>;
}

/// The converter every `Reconstructible` type gets for free
///
/// Derives all behavior from the type's `Reconstructible` impl: it reads
/// the instance's fields in constructor parameter order and pairs them
/// with the declared signature. The signature is captured once at
/// construction so repeated conversions don't rebuild it.
pub struct FieldConverter<T: Reconstructible> {
    signature: ConstructorSignature,
    type_name: &'static str,
    _source: PhantomData<fn() -> T>,
}

impl<T: Reconstructible> FieldConverter<T> {
    /// Create the converter for `T`
    pub fn new() -> Self {
        Self {
            signature: T::signature(),
            type_name: std::any::type_name::<T>(),
            _source: PhantomData,
        }
    }
}

impl<T: Reconstructible> Default for FieldConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reconstructible> Converter for FieldConverter<T> {
    fn source_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn source_type_name(&self) -> &str {
        self.type_name
    }

    fn signature(&self) -> &ConstructorSignature {
        &self.signature
    }

    fn can_convert(&self, source: TypeId, target: TargetKind) -> bool {
        source == TypeId::of::<T>() && target == TargetKind::ConstructorDescriptor
    }

    fn convert(&self, value: &dyn Any, target: TargetKind) -> Result<Descriptor> {
        if !self.can_convert(value.type_id(), target) {
            return Err(ConvertError::UnsupportedConversion {
                source_type: self.type_name.to_string(),
                target,
            });
        }
        // can_convert established the type id, so the downcast holds
        let source = value
            .downcast_ref::<T>()
            .ok_or_else(|| ConvertError::UnsupportedConversion {
                source_type: self.type_name.to_string(),
                target,
            })?;
        Descriptor::new(self.signature.clone(), source.arguments())
    }

    fn replay(&self, descriptor: &Descriptor) -> Result<Box<dyn Any>> {
        let value: T = descriptor.replay()?;
        Ok(Box::new(value))
    }
}
