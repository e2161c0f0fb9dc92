//! Converter protocol and dispatcher for constructor descriptors
//!
//! This crate holds the dynamic half of the system:
//! - `Converter`: the object-safe per-type conversion capability
//! - `FieldConverter<T>`: the converter every `Reconstructible` type gets
//! - `ConverterRegistry`: the process-wide type→converter table and the
//!   `convert_to_descriptor` dispatch entry point
//! - a `Lazy` default registry with free-function access
//!
//! The descriptor model itself (values, signatures, descriptors, errors)
//! lives in `blueprint-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod converter;
pub mod registry;

pub use converter::{Converter, FieldConverter};
pub use registry::{default_registry, ConverterRegistry};
