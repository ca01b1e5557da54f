use tracing::debug;

use crate::reflect::error::{ReflectError, Result};
use crate::reflect::graph::serialize_instance;
use crate::reflect::kind::TypeRef;
use crate::reflect::layout::export_module;
use crate::reflect::model::{Module, ObjectModel};
use crate::reflect::value::{ObjectValue, Value};
use crate::reflect::writer::write_document;

/// Output file name for the type layout document.
pub const LAYOUT_FILE_NAME: &str = "LayoutDump.json";
/// Output file name for the default-instance document.
pub const DEFAULT_OBJECTS_FILE_NAME: &str = "DefaultObjects.json";

/// Both export documents, rendered to their exact text form.
#[derive(Debug, Clone)]
pub struct ExportedDocuments {
	/// Rendered layout document (`LayoutDump.json` content).
	pub layout: String,
	/// Rendered default-instance document (`DefaultObjects.json` content).
	pub default_objects: String,
}

/// Assemble the layout document: every module's type descriptors, name-sorted.
pub fn layout_document(model: &ObjectModel) -> Value {
	let mut modules: Vec<&Module> = model.modules.iter().collect();
	modules.sort_by(|left, right| left.name.cmp(&right.name));

	let mut document = ObjectValue::new();
	document.set(
		"modules",
		Value::Array(modules.into_iter().map(|module| export_module(model, module)).collect()),
	);
	Value::Object(document)
}

/// Assemble the default-instance document: one serialized record per known
/// class, name-sorted by object name.
///
/// A class without a canonical default instance is an invariant violation in
/// the host model and fails the whole export.
pub fn default_objects_document(model: &ObjectModel) -> Result<Value> {
	let mut defaults = Vec::new();
	for module in &model.modules {
		for class in module.classes() {
			let class_ref = TypeRef::new(module.name.as_ref(), class.name.as_ref());
			let id = model.default_instance(&class_ref).ok_or_else(|| ReflectError::MissingDefaultInstance {
				module: module.name.to_string(),
				class: class.name.to_string(),
			})?;
			defaults.push(id);
		}
	}

	defaults.sort_by_key(|id| {
		let name = model.instance(*id).map(|instance| instance.name.to_string()).unwrap_or_default();
		let path = model.instance_path(*id).unwrap_or_default();
		(name, path)
	});

	debug!(count = defaults.len(), "serializing default instances");

	let mut records = Vec::with_capacity(defaults.len());
	for id in defaults {
		records.push(serialize_instance(model, id)?.to_value());
	}

	let mut document = ObjectValue::new();
	document.set("defaultObjects", Value::Array(records));
	Ok(Value::Object(document))
}

/// Run both aggregator passes and render the documents.
///
/// The caller owns file placement; the core performs no file I/O.
pub fn export_documents(model: &ObjectModel) -> Result<ExportedDocuments> {
	let layout = write_document(&layout_document(model));
	let default_objects = write_document(&default_objects_document(model)?);
	Ok(ExportedDocuments { layout, default_objects })
}
