//! Dispatcher / registry: the process-wide type→converter table
//!
//! ## Design
//!
//! The registry maps each convertible type's `TypeId` to its registered
//! converter, plus a declaring-type-name index so a bare descriptor can be
//! replayed without knowing the concrete Rust type.
//!
//! Registration is additive and idempotent: re-registering an equal
//! converter is a no-op, registering a different converter for an
//! already-registered type is a `ConflictingRegistration` error. Published
//! entries are never replaced.
//!
//! ## Thread Safety
//!
//! The table is guarded by `parking_lot::RwLock`, so registration is
//! permitted at any time, not only before first use. Lookups take the read
//! lock for the map access only; conversion and replay run outside the
//! lock.
//!
//! Uses parking_lot instead of std::sync to avoid cascading panics from
//! mutex poisoning.

use crate::converter::{Converter, FieldConverter};
use blueprint_core::error::{ConvertError, Result};
use blueprint_core::{Descriptor, Reconstructible, TargetKind};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

struct Registration {
    type_name: String,
    converter: Arc<dyn Converter>,
}

#[derive(Default)]
struct RegistryInner {
    by_type: HashMap<TypeId, Registration>,
    // declaring type name -> source TypeId, for dynamic replay
    by_name: HashMap<String, TypeId>,
}

/// Process-wide mapping from convertible type identity to its converter
///
/// `convert_to_descriptor` is the single public entry point a caller uses:
/// it resolves the converter for the value's type, asserts `can_convert`,
/// and converts.
///
/// # Example
///
/// ```ignore
/// use blueprint_convert::ConverterRegistry;
///
/// let registry = ConverterRegistry::new();
/// registry.register::<User>()?;
///
/// let descriptor = registry.convert_to_descriptor(&user)?;
/// let rebuilt: User = descriptor.replay()?;
/// ```
#[derive(Default)]
pub struct ConverterRegistry {
    inner: RwLock<RegistryInner>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the `FieldConverter` for a `Reconstructible` type
    ///
    /// # Errors
    ///
    /// Returns `ConflictingRegistration` if a different converter is
    /// already registered for `T` (see [`register_converter`]).
    ///
    /// [`register_converter`]: ConverterRegistry::register_converter
    pub fn register<T: Reconstructible>(&self) -> Result<()> {
        self.register_converter(
            std::any::type_name::<T>(),
            Arc::new(FieldConverter::<T>::new()),
        )
    }

    /// Register an arbitrary converter under its declared source type
    ///
    /// Registration is additive and idempotent. A converter equal to the
    /// existing one (the same instance, or one declaring the same
    /// constructor signature for the type) is silently accepted; the
    /// published entry is never replaced.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingRegistration` when a different converter is
    /// already registered for the source type, or when another type has
    /// already claimed the same declaring type name (an ambiguous name
    /// would make dynamic replay nondeterministic).
    pub fn register_converter(
        &self,
        type_name: &str,
        converter: Arc<dyn Converter>,
    ) -> Result<()> {
        let source = converter.source_type();
        let declaring = converter.signature().declaring_type().to_string();
        let mut inner = self.inner.write();

        if let Some(existing) = inner.by_type.get(&source) {
            if Arc::ptr_eq(&existing.converter, &converter)
                || existing.converter.signature() == converter.signature()
            {
                debug!(type_name, "converter already registered, ignoring");
                return Ok(());
            }
            warn!(type_name, "rejecting conflicting converter registration");
            return Err(ConvertError::ConflictingRegistration {
                type_name: type_name.to_string(),
            });
        }

        if let Some(claimed_by) = inner.by_name.get(&declaring) {
            if *claimed_by != source {
                warn!(
                    type_name,
                    declaring_type = %declaring,
                    "declaring type name already claimed by another converter"
                );
                return Err(ConvertError::ConflictingRegistration {
                    type_name: type_name.to_string(),
                });
            }
        }

        debug!(type_name, signature = %converter.signature(), "registered converter");
        inner.by_name.insert(declaring, source);
        inner.by_type.insert(
            source,
            Registration {
                type_name: type_name.to_string(),
                converter,
            },
        );
        Ok(())
    }

    /// Look up the converter registered for `T`
    ///
    /// # Errors
    ///
    /// Returns `NoConverterRegistered` when `T` has no entry.
    pub fn resolve<T: Any>(&self) -> Result<Arc<dyn Converter>> {
        self.resolve_by_id(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn resolve_by_id(&self, source: TypeId, type_name: &str) -> Result<Arc<dyn Converter>> {
        self.inner
            .read()
            .by_type
            .get(&source)
            .map(|registration| Arc::clone(&registration.converter))
            .ok_or_else(|| ConvertError::NoConverterRegistered {
                type_name: type_name.to_string(),
            })
    }

    /// Convert `value` to the descriptor of its constructor call
    ///
    /// The single public dispatch entry point: resolves the converter for
    /// the value's type, asserts `can_convert`, and converts.
    ///
    /// # Errors
    ///
    /// Returns `NoConverterRegistered` for an unregistered type, or any
    /// error the converter raises.
    pub fn convert_to_descriptor<T: Any>(&self, value: &T) -> Result<Descriptor> {
        self.convert(value, TargetKind::ConstructorDescriptor)
    }

    /// Convert `value` to the given target kind
    ///
    /// The narrower form of the entry point, for callers that spell the
    /// target out. `convert_to_descriptor` is this with the only supported
    /// kind.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedConversion` when the resolved converter declines
    /// the (type, kind) combination.
    pub fn convert<T: Any>(&self, value: &T, target: TargetKind) -> Result<Descriptor> {
        let converter = self.resolve::<T>()?;
        if !converter.can_convert(TypeId::of::<T>(), target) {
            return Err(ConvertError::UnsupportedConversion {
                source_type: std::any::type_name::<T>().to_string(),
                target,
            });
        }
        debug!(
            source_type = std::any::type_name::<T>(),
            kind = %target,
            "dispatching conversion"
        );
        converter.convert(value, target)
    }

    /// Replay a descriptor without knowing its concrete Rust type
    ///
    /// Resolves the converter by the descriptor's declaring type name and
    /// invokes its type-erased replay. Callers downcast the result.
    ///
    /// # Errors
    ///
    /// Returns `NoConverterRegistered` when no converter claims the
    /// descriptor's declaring type, or any error the constructor raises.
    pub fn replay(&self, descriptor: &Descriptor) -> Result<Box<dyn Any>> {
        let declaring = descriptor.signature().declaring_type();
        let converter = {
            let inner = self.inner.read();
            let source =
                inner
                    .by_name
                    .get(declaring)
                    .ok_or_else(|| ConvertError::NoConverterRegistered {
                        type_name: declaring.to_string(),
                    })?;
            inner
                .by_type
                .get(source)
                .map(|registration| Arc::clone(&registration.converter))
                .ok_or_else(|| ConvertError::NoConverterRegistered {
                    type_name: declaring.to_string(),
                })?
        };
        converter.replay(descriptor)
    }

    /// Whether a converter is registered for `T`
    pub fn is_registered<T: Any>(&self) -> bool {
        self.inner.read().by_type.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered converters
    pub fn len(&self) -> usize {
        self.inner.read().by_type.len()
    }

    /// Whether the registry has no converters
    pub fn is_empty(&self) -> bool {
        self.inner.read().by_type.is_empty()
    }

    /// Diagnostic names of all registered source types, unordered
    pub fn registered_type_names(&self) -> Vec<String> {
        self.inner
            .read()
            .by_type
            .values()
            .map(|registration| registration.type_name.clone())
            .collect()
    }
}

// =============================================================================
// Process-wide default registry
// =============================================================================
//
// The explicit-registration replacement for attribute-driven discovery: a
// type is convertible process-wide once `register::<T>()` has run, typically
// at startup. No scanning, no hidden magic.

static DEFAULT_REGISTRY: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::new);

/// The process-wide default registry
pub fn default_registry() -> &'static ConverterRegistry {
    &DEFAULT_REGISTRY
}

/// Register `T` with the process-wide default registry
///
/// # Errors
///
/// Returns `ConflictingRegistration` under the same rules as
/// [`ConverterRegistry::register`].
pub fn register<T: Reconstructible>() -> Result<()> {
    DEFAULT_REGISTRY.register::<T>()
}

/// Convert `value` through the process-wide default registry
///
/// # Errors
///
/// Returns `NoConverterRegistered` for an unregistered type, or any error
/// the converter raises.
pub fn convert_to_descriptor<T: Any>(value: &T) -> Result<Descriptor> {
    DEFAULT_REGISTRY.convert_to_descriptor(value)
}

/// Replay a descriptor through the process-wide default registry
///
/// # Errors
///
/// Returns `NoConverterRegistered` when no converter claims the
/// descriptor's declaring type, or any error the constructor raises.
pub fn replay(descriptor: &Descriptor) -> Result<Box<dyn Any>> {
    DEFAULT_REGISTRY.replay(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{ConstructorSignature, Parameter, Value, ValueType};

    #[derive(Debug, PartialEq, Clone)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl Reconstructible for Point {
        fn signature() -> ConstructorSignature {
            ConstructorSignature::new(
                "Point",
                vec![
                    Parameter::new("x", ValueType::Int),
                    Parameter::new("y", ValueType::Int),
                ],
            )
        }

        fn arguments(&self) -> Vec<Value> {
            vec![Value::Int(self.x), Value::Int(self.y)]
        }

        fn construct(arguments: &[Value]) -> Result<Self> {
            let signature = Self::signature();
            let int_at = |i: usize, name: &str| -> Result<i64> {
                let v = arguments
                    .get(i)
                    .ok_or_else(|| ConvertError::arity_mismatch(&signature, arguments.len()))?;
                v.as_int().ok_or_else(|| {
                    ConvertError::type_mismatch(&signature, name, ValueType::Int, v.type_of())
                })
            };
            Ok(Point {
                x: int_at(0, "x")?,
                y: int_at(1, "y")?,
            })
        }
    }

    // Same declaring type name as Point, different Rust type.
    #[derive(Debug)]
    struct OtherPoint;

    impl Reconstructible for OtherPoint {
        fn signature() -> ConstructorSignature {
            ConstructorSignature::new("Point", vec![Parameter::new("x", ValueType::Int)])
        }

        fn arguments(&self) -> Vec<Value> {
            vec![Value::Int(0)]
        }

        fn construct(_arguments: &[Value]) -> Result<Self> {
            Ok(OtherPoint)
        }
    }

    #[test]
    fn test_register_then_resolve() {
        let registry = ConverterRegistry::new();
        assert!(registry.is_empty());

        registry.register::<Point>().unwrap();
        assert!(registry.is_registered::<Point>());
        assert_eq!(registry.len(), 1);

        let converter = registry.resolve::<Point>().unwrap();
        assert_eq!(converter.signature(), &Point::signature());
    }

    #[test]
    fn test_resolve_unregistered_fails() {
        let registry = ConverterRegistry::new();
        match registry.resolve::<Point>() {
            Err(ConvertError::NoConverterRegistered { type_name }) => {
                assert!(type_name.contains("Point"));
            }
            Err(other) => panic!("expected NoConverterRegistered, got {other:?}"),
            Ok(_) => panic!("resolve must fail for an unregistered type"),
        }
    }

    #[test]
    fn test_reregistration_is_idempotent() {
        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();
        registry.register::<Point>().unwrap();
        assert_eq!(registry.len(), 1);

        // A fresh but behaviorally identical converter is also a no-op.
        registry
            .register_converter("Point", Arc::new(FieldConverter::<Point>::new()))
            .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflicting_registration_rejected() {
        // A converter for Point with a different declared signature.
        struct RenamedConverter {
            signature: ConstructorSignature,
        }

        impl Converter for RenamedConverter {
            fn source_type(&self) -> TypeId {
                TypeId::of::<Point>()
            }
            fn source_type_name(&self) -> &str {
                "Point"
            }
            fn signature(&self) -> &ConstructorSignature {
                &self.signature
            }
            fn can_convert(&self, source: TypeId, target: TargetKind) -> bool {
                source == TypeId::of::<Point>()
                    && target == TargetKind::ConstructorDescriptor
            }
            fn convert(&self, _value: &dyn Any, target: TargetKind) -> Result<Descriptor> {
                Err(ConvertError::UnsupportedConversion {
                    source_type: "Point".to_string(),
                    target,
                })
            }
            fn replay(&self, _descriptor: &Descriptor) -> Result<Box<dyn Any>> {
                Err(ConvertError::NoConverterRegistered {
                    type_name: "Point".to_string(),
                })
            }
        }

        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();

        let conflicting = RenamedConverter {
            signature: ConstructorSignature::new(
                "Point3",
                vec![Parameter::new("x", ValueType::Int)],
            ),
        };
        let err = registry
            .register_converter("Point", Arc::new(conflicting))
            .unwrap_err();
        assert!(matches!(err, ConvertError::ConflictingRegistration { .. }));

        // The published entry is unchanged.
        let converter = registry.resolve::<Point>().unwrap();
        assert_eq!(converter.signature(), &Point::signature());
    }

    #[test]
    fn test_ambiguous_declaring_type_name_rejected() {
        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();

        let err = registry.register::<OtherPoint>().unwrap_err();
        assert!(matches!(err, ConvertError::ConflictingRegistration { .. }));
    }

    #[test]
    fn test_convert_to_descriptor_dispatches() {
        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();

        let point = Point { x: 10, y: 20 };
        let descriptor = registry.convert_to_descriptor(&point).unwrap();
        assert_eq!(descriptor.signature(), &Point::signature());
        assert_eq!(descriptor.arguments(), &[Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_convert_unregistered_type_fails() {
        let registry = ConverterRegistry::new();
        let err = registry.convert_to_descriptor(&Point { x: 0, y: 0 }).unwrap_err();
        assert!(matches!(err, ConvertError::NoConverterRegistered { .. }));
    }

    #[test]
    fn test_dynamic_replay_by_declaring_type_name() {
        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();

        let point = Point { x: -1, y: 99 };
        let descriptor = registry.convert_to_descriptor(&point).unwrap();

        let rebuilt = registry.replay(&descriptor).unwrap();
        let rebuilt = rebuilt.downcast::<Point>().expect("replayed type is Point");
        assert_eq!(*rebuilt, point);
    }

    #[test]
    fn test_dynamic_replay_unregistered_name_fails() {
        let registry = ConverterRegistry::new();
        let descriptor = Descriptor::new(
            ConstructorSignature::new("Ghost", vec![]),
            vec![],
        )
        .unwrap();
        let err = registry.replay(&descriptor).unwrap_err();
        match err {
            ConvertError::NoConverterRegistered { type_name } => {
                assert_eq!(type_name, "Ghost");
            }
            other => panic!("expected NoConverterRegistered, got {other:?}"),
        }
    }

    #[test]
    fn test_registered_type_names() {
        let registry = ConverterRegistry::new();
        registry.register::<Point>().unwrap();
        let names = registry.registered_type_names();
        assert_eq!(names.len(), 1);
        assert!(names[0].contains("Point"));
    }

    #[test]
    fn test_default_registry_roundtrip() {
        // The default registry is process-wide; registration here is
        // idempotent so repeated test runs in one process are fine.
        register::<Point>().unwrap();
        register::<Point>().unwrap();

        let point = Point { x: 5, y: 6 };
        let descriptor = convert_to_descriptor(&point).unwrap();
        let rebuilt = replay(&descriptor).unwrap();
        assert_eq!(*rebuilt.downcast::<Point>().unwrap(), point);
    }

    #[test]
    fn test_concurrent_reads_after_registration() {
        let registry = Arc::new(ConverterRegistry::new());
        registry.register::<Point>().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let point = Point { x: i, y: i + 1 };
                    let descriptor = registry.convert_to_descriptor(&point).unwrap();
                    let rebuilt: Point = descriptor.replay().unwrap();
                    assert_eq!(rebuilt, point);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
