mod error;
mod export;
mod extract;
mod graph;
mod instance;
mod kind;
mod layout;
mod model;
mod opaque;
mod value;
mod writer;

/// Error and result aliases.
pub use error::{ReflectError, Result};
/// Aggregator entry points, rendered-document bundle, and output file names.
pub use export::{DEFAULT_OBJECTS_FILE_NAME, ExportedDocuments, LAYOUT_FILE_NAME, default_objects_document, export_documents, layout_document};
/// Value extraction entry point.
pub use extract::extract_value;
/// Instance serialization types and entry points.
pub use graph::{InstanceRecord, serialize_instance};
/// Runtime instance storage and registry types.
pub use instance::{Datum, DelegateBinding, Instance, InstanceId, LocalizedText, Outer, PropertyBag};
/// Property descriptor types.
pub use kind::{Property, PropertyKind, TypeRef};
/// Type descriptor export entry points.
pub use layout::{export_class, export_module, export_property, export_struct};
/// Model type tables and the injected model handle.
pub use model::{Class, EnumDef, EnumEntry, Module, ModuleMember, ObjectModel, StructDef};
/// Structured sub-serializer sentinel.
pub use opaque::OPAQUE_SENTINEL;
/// Canonical interchange value types.
pub use value::{ObjectValue, Value};
/// Deterministic document rendering.
pub use writer::write_document;
