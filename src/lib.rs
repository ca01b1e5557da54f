//! Reflection model introspection and deterministic export.
//!
//! The crate walks a reflection-capable object model (modules holding classes,
//! structs, enums, and live instances), serializes its type layout and its
//! default-instance data into canonical value trees, and renders those trees
//! with an exact, byte-reproducible text format suited to run-to-run diffing.

/// Reflection model types, value extraction, and document export.
pub mod reflect;
