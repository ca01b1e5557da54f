use crate::reflect::error::{ReflectError, Result};
use crate::reflect::extract::extract_value;
use crate::reflect::instance::InstanceId;
use crate::reflect::model::ObjectModel;
use crate::reflect::value::{ObjectValue, Value};

/// Serialized form of one instance and everything it owns.
#[derive(Debug, Clone)]
pub struct InstanceRecord {
	/// Stable path of the instance's class.
	pub class_name: Box<str>,
	/// Stable, globally-unique path of the instance itself.
	pub object_name: Box<str>,
	/// Extracted property values, in full-property-list order.
	pub properties: ObjectValue,
	/// Records for directly-owned instances, name-sorted.
	pub inner_objects: Vec<InstanceRecord>,
}

impl InstanceRecord {
	/// Render the record into the contractual document shape.
	pub fn to_value(&self) -> Value {
		let mut record = ObjectValue::new();
		record.set("className", Value::string(self.class_name.as_ref()));
		record.set("objectName", Value::string(self.object_name.as_ref()));
		record.set("properties", Value::Object(self.properties.clone()));
		record.set("innerObjects", Value::Array(self.inner_objects.iter().map(InstanceRecord::to_value).collect()));
		Value::Object(record)
	}
}

/// Serialize an instance and its ownership subtree.
///
/// Only ownership edges are followed; reference-typed properties degrade to
/// path strings in the extractor, so cycles through non-owning references
/// cannot recurse. Fixed-size inline array properties expand to one Array of
/// per-index extractions.
pub fn serialize_instance(model: &ObjectModel, id: InstanceId) -> Result<InstanceRecord> {
	let instance = model.instance(id).ok_or(ReflectError::InstanceNotFound)?;
	let class = model.find_class(&instance.class).ok_or_else(|| ReflectError::ClassNotFound {
		module: instance.class.module.to_string(),
		class: instance.class.name.to_string(),
	})?;
	let object_name = model.instance_path(id).ok_or(ReflectError::InstanceNotFound)?;

	let mut properties = ObjectValue::new();
	for property in model.class_properties(class) {
		if property.array_dim > 1 {
			let elements = (0..property.array_dim as usize)
				.map(|element_index| extract_value(model, &instance.values, property, element_index))
				.collect();
			properties.set(property.name.as_ref(), Value::Array(elements));
		} else {
			properties.set(property.name.as_ref(), extract_value(model, &instance.values, property, 0));
		}
	}

	let mut inner_objects = Vec::new();
	for child in model.children_of(id) {
		inner_objects.push(serialize_instance(model, child)?);
	}

	Ok(InstanceRecord {
		class_name: instance.class.path().into_boxed_str(),
		object_name: object_name.into_boxed_str(),
		properties,
		inner_objects,
	})
}
