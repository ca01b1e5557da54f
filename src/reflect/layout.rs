use tracing::debug;

use crate::reflect::kind::{Property, PropertyKind, TypeRef};
use crate::reflect::model::{Class, Module, ObjectModel, StructDef};
use crate::reflect::value::{ObjectValue, Value};

/// Export one module's type layout as a descriptor tree.
///
/// Members classify as class or struct; each list is sorted by name
/// independently. Enum definitions and internal template/default instances
/// are not layout members and are skipped.
pub fn export_module(model: &ObjectModel, module: &Module) -> Value {
	debug!(module = %module.name, "exporting module layout");

	let mut classes: Vec<&Class> = module.classes().collect();
	classes.sort_by(|left, right| left.name.cmp(&right.name));

	let mut structs: Vec<&StructDef> = module.structs().collect();
	structs.sort_by(|left, right| left.name.cmp(&right.name));

	let mut descriptor = ObjectValue::new();
	descriptor.set("name", Value::string(module.name.as_ref()));
	descriptor.set("classes", Value::Array(classes.into_iter().map(|class| export_class(model, class)).collect()));
	descriptor.set("structs", Value::Array(structs.into_iter().map(export_struct).collect()));
	Value::Object(descriptor)
}

/// Export one class descriptor, full property list included.
pub fn export_class(model: &ObjectModel, class: &Class) -> Value {
	let mut descriptor = ObjectValue::new();
	descriptor.set("name", Value::string(class.name.as_ref()));
	descriptor.set(
		"superClass",
		match &class.super_class {
			Some(super_ref) => class_ref_value(super_ref),
			None => Value::Null,
		},
	);
	descriptor.set(
		"properties",
		Value::Array(
			model
				.class_properties(class)
				.into_iter()
				.map(|property| export_property(property, true))
				.collect(),
		),
	);
	Value::Object(descriptor)
}

/// Export one struct descriptor.
pub fn export_struct(def: &StructDef) -> Value {
	let mut descriptor = ObjectValue::new();
	descriptor.set("name", Value::string(def.name.as_ref()));
	descriptor.set(
		"properties",
		Value::Array(def.properties.iter().map(|property| export_property(property, true)).collect()),
	);
	Value::Object(descriptor)
}

/// Export one property descriptor.
///
/// Root descriptors carry the name and the split 64-bit flag word; nested
/// element descriptors omit both. Nested kinds export recursively; referenced
/// types are never expanded, only named.
pub fn export_property(property: &Property, root: bool) -> Value {
	let mut descriptor = ObjectValue::new();

	if root {
		descriptor.set("name", Value::string(property.name.as_ref()));
		// Split to stay inside exact double range.
		descriptor.set("flagsLower", Value::Number(f64::from((property.flags & 0xFFFF_FFFF) as u32)));
		descriptor.set("flagsUpper", Value::Number(f64::from((property.flags >> 32) as u32)));
	}

	descriptor.set("type", Value::string(property.kind.tag()));

	if property.array_dim != 1 {
		descriptor.set("arrayDim", Value::Number(f64::from(property.array_dim)));
	}

	match &property.kind {
		PropertyKind::Object { class }
		| PropertyKind::WeakObject { class }
		| PropertyKind::LazyObject { class }
		| PropertyKind::SoftObject { class }
		| PropertyKind::Interface { class } => {
			descriptor.set("objectType", class_ref_value(class));
		}
		PropertyKind::Array { value } | PropertyKind::Set { value } | PropertyKind::Optional { value } => {
			descriptor.set("valueType", export_property(value, false));
		}
		PropertyKind::Map { key, value } => {
			descriptor.set("keyType", export_property(key, false));
			descriptor.set("valueType", export_property(value, false));
		}
		PropertyKind::Struct { target } => {
			descriptor.set("structType", struct_ref_value(target));
		}
		PropertyKind::Enum { enum_type } => {
			descriptor.set("enumType", Value::string(enum_type.as_ref()));
		}
		PropertyKind::Byte {
			enum_type: Some(enum_type),
		} => {
			descriptor.set("enumType", Value::string(enum_type.as_ref()));
		}
		// Scalar kinds and unrecognized kinds carry the bare type tag.
		_ => {}
	}

	Value::Object(descriptor)
}

fn class_ref_value(type_ref: &TypeRef) -> Value {
	let mut reference = ObjectValue::new();
	reference.set("module", Value::string(type_ref.module.as_ref()));
	reference.set("class", Value::string(type_ref.name.as_ref()));
	Value::Object(reference)
}

fn struct_ref_value(type_ref: &TypeRef) -> Value {
	let mut reference = ObjectValue::new();
	reference.set("module", Value::string(type_ref.module.as_ref()));
	reference.set("struct", Value::string(type_ref.name.as_ref()));
	Value::Object(reference)
}
