use tracing::warn;

use crate::reflect::instance::{Datum, DelegateBinding, InstanceId, PropertyBag};
use crate::reflect::kind::{Property, PropertyKind};
use crate::reflect::model::ObjectModel;
use crate::reflect::opaque::{BindingArchive, OPAQUE_SENTINEL, archive_to_value};
use crate::reflect::value::{ObjectValue, Value};

/// Extract one property value slot into its canonical encoding.
///
/// Never fails the caller: a missing slot, a kind with no encoding rule, or a
/// stored value that contradicts its descriptor all degrade to a sentinel
/// string and a diagnostic, and traversal continues.
pub fn extract_value(model: &ObjectModel, bag: &PropertyBag, property: &Property, element_index: usize) -> Value {
	match bag.get(&property.name, element_index) {
		Some(datum) => extract_datum(model, datum, property),
		None => {
			warn!(property = %property.name, element_index, "no stored value for property");
			sentinel(property.kind.tag())
		}
	}
}

/// Encode one stored value against its descriptor.
///
/// Dispatch is total over the kind set; each row of the encoding table is one
/// arm, so a new kind costs one variant and one arm.
fn extract_datum(model: &ObjectModel, datum: &Datum, property: &Property) -> Value {
	match (&property.kind, datum) {
		(PropertyKind::Bool, Datum::Bool(value)) => Value::Bool(*value),

		(PropertyKind::Int8, Datum::I8(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::Int16, Datum::I16(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::Int32, Datum::I32(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::UInt16, Datum::U16(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::UInt32, Datum::U32(value)) => Value::Number(f64::from(*value)),

		// 64-bit integers exceed exact double range; keep them textual.
		(PropertyKind::Int64, Datum::I64(value)) => Value::string(value.to_string()),
		(PropertyKind::UInt64, Datum::U64(value)) => Value::string(value.to_string()),

		(PropertyKind::Float, Datum::F32(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::Double, Datum::F64(value)) => Value::Number(*value),

		(PropertyKind::Str | PropertyKind::Name | PropertyKind::Utf8Str, Datum::Str(text)) => Value::string(text.as_ref()),

		(PropertyKind::Text, Datum::Text(text)) => match archive_to_value("rich text", text) {
			Ok(value) => value,
			Err(err) => {
				warn!(property = %property.name, %err, "rich text serialization failed");
				Value::string(OPAQUE_SENTINEL)
			}
		},

		(PropertyKind::Enum { enum_type }, Datum::EnumValue(raw)) => match model.find_enum(enum_type) {
			Some(def) if def.flags => Value::string(def.bitfield_label(*raw)),
			Some(def) => Value::string(def.name_by_value(*raw).unwrap_or_default()),
			None => {
				warn!(property = %property.name, enum_type = %enum_type, "enum definition not found");
				Value::string("")
			}
		},

		(PropertyKind::Byte { enum_type: Some(enum_type) }, Datum::U8(raw)) => match model.find_enum(enum_type) {
			Some(def) => Value::string(def.name_by_value(i64::from(*raw)).unwrap_or_default()),
			None => {
				warn!(property = %property.name, enum_type = %enum_type, "enum definition not found");
				Value::Number(f64::from(*raw))
			}
		},
		(PropertyKind::Byte { enum_type: None }, Datum::U8(raw)) => Value::Number(f64::from(*raw)),

		(PropertyKind::Object { .. } | PropertyKind::WeakObject { .. } | PropertyKind::Interface { .. }, Datum::Ref(target)) => {
			reference_value(model, *target)
		}

		(PropertyKind::LazyObject { .. }, Datum::LazyRef { unique_id, target }) => {
			let mut wrapper = ObjectValue::new();
			wrapper.set("uniqueId", Value::string(unique_id.as_ref()));
			wrapper.set("reference", reference_value(model, *target));
			Value::Object(wrapper)
		}

		(PropertyKind::SoftObject { .. }, Datum::SoftPath(path)) => Value::string(path.as_ref()),

		(PropertyKind::FieldPath, Datum::Str(path)) => Value::string(path.as_ref()),

		(PropertyKind::Delegate, Datum::Delegate(None)) => Value::Null,
		(PropertyKind::Delegate, Datum::Delegate(Some(binding))) => {
			let mut bound = ObjectValue::new();
			bound.set("targetObject", reference_value(model, binding.target));
			bound.set("functionName", Value::string(binding.function.as_ref()));
			Value::Object(bound)
		}

		(PropertyKind::MulticastSparseDelegate, Datum::Multicast(bindings)) => {
			if bindings.is_empty() {
				return Value::Null;
			}
			let archive: Vec<BindingArchive> = bindings.iter().map(|binding| binding_archive(model, binding)).collect();
			match archive_to_value("sparse delegate", &archive) {
				Ok(value) => value,
				Err(err) => {
					warn!(property = %property.name, %err, "sparse delegate serialization failed");
					Value::string(OPAQUE_SENTINEL)
				}
			}
		}

		// Target identities in inline invocation lists are unreliable; render
		// a flat best-effort label.
		(PropertyKind::MulticastInlineDelegate, Datum::Multicast(bindings)) => {
			if bindings.is_empty() {
				return Value::Null;
			}
			let parts: Vec<String> = bindings
				.iter()
				.map(|binding| {
					let target = binding
						.target
						.and_then(|id| model.instance_path(id))
						.unwrap_or_else(|| "null".to_owned());
					format!("{target}.{}", binding.function)
				})
				.collect();
			Value::string(format!("({})", parts.join(", ")))
		}

		(PropertyKind::Struct { target }, Datum::Struct(fields)) => match model.find_struct(target) {
			Some(def) => {
				let mut composite = ObjectValue::new();
				for field in &def.properties {
					composite.set(field.name.as_ref(), extract_value(model, fields, field, 0));
				}
				Value::Object(composite)
			}
			None => {
				warn!(property = %property.name, struct_type = %target.path(), "struct definition not found");
				sentinel(property.kind.tag())
			}
		},

		(PropertyKind::Array { value }, Datum::Array(elements)) => {
			Value::Array(elements.iter().map(|element| extract_datum(model, element, value)).collect())
		}

		(PropertyKind::Map { key, value }, Datum::Map(pairs)) => Value::Array(
			pairs
				.iter()
				.map(|(stored_key, stored_value)| {
					let mut pair = ObjectValue::new();
					pair.set("key", extract_datum(model, stored_key, key));
					pair.set("value", extract_datum(model, stored_value, value));
					Value::Object(pair)
				})
				.collect(),
		),

		(PropertyKind::Set { value }, Datum::Set(elements)) => {
			Value::Array(elements.iter().map(|element| extract_datum(model, element, value)).collect())
		}

		(PropertyKind::Optional { value }, Datum::Optional(stored)) => match stored {
			Some(inner) => extract_datum(model, inner, value),
			None => Value::Null,
		},

		(PropertyKind::Unknown { tag }, _) => {
			warn!(property = %property.name, tag = %tag, "no encoding rule for property kind");
			sentinel(tag)
		}

		(kind, _) => {
			warn!(property = %property.name, kind = kind.tag(), "stored value does not match property kind");
			sentinel(kind.tag())
		}
	}
}

fn reference_value(model: &ObjectModel, target: Option<InstanceId>) -> Value {
	match target.and_then(|id| model.instance_path(id)) {
		Some(path) => Value::string(path),
		None => Value::Null,
	}
}

fn binding_archive(model: &ObjectModel, binding: &DelegateBinding) -> BindingArchive {
	BindingArchive {
		target_object: binding.target.and_then(|id| model.instance_path(id)),
		function_name: binding.function.to_string(),
	}
}

fn sentinel(tag: &str) -> Value {
	Value::string(format!("__INVALID__: {tag}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reflect::instance::{Instance, LocalizedText, Outer};
	use crate::reflect::kind::TypeRef;
	use crate::reflect::model::{Class, EnumDef, EnumEntry, ModuleMember, StructDef};

	fn test_model() -> (ObjectModel, InstanceId) {
		let mut model = ObjectModel::new();
		let module = model.add_module("Core");
		module.members.push(ModuleMember::Class(Class {
			name: "Object".into(),
			super_class: None,
			properties: Vec::new(),
		}));
		module.members.push(ModuleMember::Struct(StructDef {
			name: "Vec3".into(),
			properties: vec![
				Property::new("x", PropertyKind::Double),
				Property::new("y", PropertyKind::Double),
				Property::new("z", PropertyKind::Double),
			],
		}));
		module.members.push(ModuleMember::Enum(EnumDef {
			name: "Visibility".into(),
			flags: false,
			entries: vec![
				EnumEntry {
					name: "Hidden".into(),
					value: 0,
				},
				EnumEntry {
					name: "Visible".into(),
					value: 1,
				},
			],
		}));
		module.members.push(ModuleMember::Enum(EnumDef {
			name: "RenderFlags".into(),
			flags: true,
			entries: vec![
				EnumEntry {
					name: "CastShadow".into(),
					value: 1,
				},
				EnumEntry {
					name: "Translucent".into(),
					value: 2,
				},
			],
		}));

		let target = model.add_instance(Instance {
			name: "Default__Object".into(),
			class: TypeRef::new("Core", "Object"),
			outer: Outer::Module("Core".into()),
			is_default: true,
			values: PropertyBag::new(),
		});
		(model, target)
	}

	fn extract_one(model: &ObjectModel, datum: Datum, kind: PropertyKind) -> Value {
		let property = Property::new("probe", kind);
		let bag = PropertyBag::new().with("probe", datum);
		extract_value(model, &bag, &property, 0)
	}

	#[test]
	fn scalars_encode_as_numbers_and_bools() {
		let (model, _) = test_model();
		assert_eq!(extract_one(&model, Datum::Bool(true), PropertyKind::Bool), Value::Bool(true));
		assert_eq!(extract_one(&model, Datum::I8(-3), PropertyKind::Int8), Value::Number(-3.0));
		assert_eq!(extract_one(&model, Datum::I16(-300), PropertyKind::Int16), Value::Number(-300.0));
		assert_eq!(extract_one(&model, Datum::I32(70_000), PropertyKind::Int32), Value::Number(70_000.0));
		assert_eq!(extract_one(&model, Datum::U16(65_535), PropertyKind::UInt16), Value::Number(65_535.0));
		assert_eq!(extract_one(&model, Datum::U32(4_000_000_000), PropertyKind::UInt32), Value::Number(4_000_000_000.0));
		assert_eq!(extract_one(&model, Datum::F32(0.5), PropertyKind::Float), Value::Number(0.5));
		assert_eq!(extract_one(&model, Datum::F64(0.1), PropertyKind::Double), Value::Number(0.1));
	}

	#[test]
	fn wide_integers_encode_as_decimal_strings() {
		let (model, _) = test_model();
		assert_eq!(
			extract_one(&model, Datum::U64(u64::MAX), PropertyKind::UInt64),
			Value::string("18446744073709551615")
		);
		assert_eq!(extract_one(&model, Datum::I64(-42), PropertyKind::Int64), Value::string("-42"));
	}

	#[test]
	fn string_kinds_encode_as_strings() {
		let (model, _) = test_model();
		assert_eq!(extract_one(&model, Datum::Str("plain".into()), PropertyKind::Str), Value::string("plain"));
		assert_eq!(extract_one(&model, Datum::Str("a_name".into()), PropertyKind::Name), Value::string("a_name"));
		assert_eq!(extract_one(&model, Datum::Str("utf8".into()), PropertyKind::Utf8Str), Value::string("utf8"));
		assert_eq!(
			extract_one(&model, Datum::Str("Core.Object:field".into()), PropertyKind::FieldPath),
			Value::string("Core.Object:field")
		);
	}

	#[test]
	fn scoped_enum_encodes_value_name() {
		let (model, _) = test_model();
		let kind = PropertyKind::Enum {
			enum_type: "Visibility".into(),
		};
		assert_eq!(extract_one(&model, Datum::EnumValue(1), kind.clone()), Value::string("Visible"));
		assert_eq!(extract_one(&model, Datum::EnumValue(9), kind), Value::string(""));
	}

	#[test]
	fn flags_enum_joins_names_and_renders_zero_empty() {
		let (model, _) = test_model();
		let kind = PropertyKind::Enum {
			enum_type: "RenderFlags".into(),
		};
		assert_eq!(extract_one(&model, Datum::EnumValue(3), kind.clone()), Value::string("CastShadow | Translucent"));
		assert_eq!(extract_one(&model, Datum::EnumValue(0), kind), Value::string(""));
	}

	#[test]
	fn byte_uses_enum_name_when_attached() {
		let (model, _) = test_model();
		let with_enum = PropertyKind::Byte {
			enum_type: Some("Visibility".into()),
		};
		assert_eq!(extract_one(&model, Datum::U8(1), with_enum), Value::string("Visible"));
		assert_eq!(extract_one(&model, Datum::U8(7), PropertyKind::Byte { enum_type: None }), Value::Number(7.0));
	}

	#[test]
	fn object_reference_encodes_path_or_null() {
		let (model, target) = test_model();
		let kind = PropertyKind::Object {
			class: TypeRef::new("Core", "Object"),
		};
		assert_eq!(
			extract_one(&model, Datum::Ref(Some(target)), kind.clone()),
			Value::string("/Core.Default__Object")
		);
		assert_eq!(extract_one(&model, Datum::Ref(None), kind), Value::Null);
	}

	#[test]
	fn lazy_reference_wraps_id_and_path() {
		let (model, target) = test_model();
		let kind = PropertyKind::LazyObject {
			class: TypeRef::new("Core", "Object"),
		};
		let value = extract_one(
			&model,
			Datum::LazyRef {
				unique_id: "5AD1".into(),
				target: Some(target),
			},
			kind,
		);
		let Value::Object(wrapper) = value else {
			panic!("expected wrapper object");
		};
		assert_eq!(wrapper.get("uniqueId"), Some(&Value::string("5AD1")));
		assert_eq!(wrapper.get("reference"), Some(&Value::string("/Core.Default__Object")));
	}

	#[test]
	fn soft_reference_keeps_unresolved_path() {
		let (model, _) = test_model();
		let kind = PropertyKind::SoftObject {
			class: TypeRef::new("Core", "Object"),
		};
		assert_eq!(
			extract_one(&model, Datum::SoftPath("/Content/Meshes.Cube".into()), kind),
			Value::string("/Content/Meshes.Cube")
		);
	}

	#[test]
	fn delegate_encodes_binding_or_null() {
		let (model, target) = test_model();
		assert_eq!(extract_one(&model, Datum::Delegate(None), PropertyKind::Delegate), Value::Null);

		let bound = extract_one(
			&model,
			Datum::Delegate(Some(DelegateBinding {
				target: Some(target),
				function: "OnChanged".into(),
			})),
			PropertyKind::Delegate,
		);
		let Value::Object(binding) = bound else {
			panic!("expected binding object");
		};
		assert_eq!(binding.get("targetObject"), Some(&Value::string("/Core.Default__Object")));
		assert_eq!(binding.get("functionName"), Some(&Value::string("OnChanged")));
	}

	#[test]
	fn sparse_multicast_round_trips_bindings() {
		let (model, target) = test_model();
		assert_eq!(
			extract_one(&model, Datum::Multicast(Vec::new()), PropertyKind::MulticastSparseDelegate),
			Value::Null
		);

		let value = extract_one(
			&model,
			Datum::Multicast(vec![DelegateBinding {
				target: Some(target),
				function: "OnTick".into(),
			}]),
			PropertyKind::MulticastSparseDelegate,
		);
		let Value::Array(elements) = value else {
			panic!("expected invocation array");
		};
		let Value::Object(entry) = &elements[0] else {
			panic!("expected binding object");
		};
		assert_eq!(entry.get("functionName"), Some(&Value::string("OnTick")));
	}

	#[test]
	fn inline_multicast_renders_best_effort_label() {
		let (model, target) = test_model();
		let value = extract_one(
			&model,
			Datum::Multicast(vec![
				DelegateBinding {
					target: Some(target),
					function: "OnTick".into(),
				},
				DelegateBinding {
					target: None,
					function: "OnGone".into(),
				},
			]),
			PropertyKind::MulticastInlineDelegate,
		);
		assert_eq!(value, Value::string("(/Core.Default__Object.OnTick, null.OnGone)"));
	}

	#[test]
	fn struct_recurses_over_field_list() {
		let (model, _) = test_model();
		let fields = PropertyBag::new()
			.with("x", Datum::F64(1.0))
			.with("y", Datum::F64(2.0))
			.with("z", Datum::F64(3.0));
		let kind = PropertyKind::Struct {
			target: TypeRef::new("Core", "Vec3"),
		};

		let value = extract_one(&model, Datum::Struct(fields), kind);
		let Value::Object(composite) = value else {
			panic!("expected composite object");
		};
		let keys: Vec<&str> = composite.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["x", "y", "z"]);
		assert_eq!(composite.get("y"), Some(&Value::Number(2.0)));
	}

	#[test]
	fn missing_struct_definition_degrades_to_sentinel() {
		let (model, _) = test_model();
		let kind = PropertyKind::Struct {
			target: TypeRef::new("Core", "NoSuch"),
		};
		assert_eq!(extract_one(&model, Datum::Struct(PropertyBag::new()), kind), Value::string("__INVALID__: Struct"));
	}

	#[test]
	fn containers_encode_in_storage_order() {
		let (model, _) = test_model();

		let array = extract_one(
			&model,
			Datum::Array(vec![Datum::I32(3), Datum::I32(1)]),
			PropertyKind::Array {
				value: Box::new(Property::nested(PropertyKind::Int32)),
			},
		);
		assert_eq!(array, Value::Array(vec![Value::Number(3.0), Value::Number(1.0)]));

		let map = extract_one(
			&model,
			Datum::Map(vec![(Datum::I32(7), Datum::Str("seven".into()))]),
			PropertyKind::Map {
				key: Box::new(Property::nested(PropertyKind::Int32)),
				value: Box::new(Property::nested(PropertyKind::Str)),
			},
		);
		let Value::Array(pairs) = map else {
			panic!("expected pair array");
		};
		let Value::Object(pair) = &pairs[0] else {
			panic!("expected pair object");
		};
		assert_eq!(pair.get("key"), Some(&Value::Number(7.0)));
		assert_eq!(pair.get("value"), Some(&Value::string("seven")));

		let set = extract_one(
			&model,
			Datum::Set(vec![Datum::Str("b".into()), Datum::Str("a".into())]),
			PropertyKind::Set {
				value: Box::new(Property::nested(PropertyKind::Str)),
			},
		);
		assert_eq!(set, Value::Array(vec![Value::string("b"), Value::string("a")]));
	}

	#[test]
	fn optional_encodes_inner_or_null() {
		let (model, _) = test_model();
		let kind = PropertyKind::Optional {
			value: Box::new(Property::nested(PropertyKind::Int32)),
		};
		assert_eq!(extract_one(&model, Datum::Optional(Some(Box::new(Datum::I32(4)))), kind.clone()), Value::Number(4.0));
		assert_eq!(extract_one(&model, Datum::Optional(None), kind), Value::Null);
	}

	#[test]
	fn rich_text_round_trips_through_sub_serializer() {
		let (model, _) = test_model();
		let value = extract_one(
			&model,
			Datum::Text(LocalizedText {
				namespace: "menu".into(),
				key: "title".into(),
				source: "Hello".into(),
			}),
			PropertyKind::Text,
		);
		let Value::Object(text) = value else {
			panic!("expected text object");
		};
		assert_eq!(text.get("source"), Some(&Value::string("Hello")));
	}

	#[test]
	fn unknown_kind_degrades_to_tagged_sentinel() {
		let (model, _) = test_model();
		let kind = PropertyKind::Unknown {
			tag: "VerseValue".into(),
		};
		assert_eq!(extract_one(&model, Datum::Bool(false), kind), Value::string("__INVALID__: VerseValue"));
	}

	#[test]
	fn mismatched_storage_degrades_to_sentinel() {
		let (model, _) = test_model();
		assert_eq!(extract_one(&model, Datum::Str("oops".into()), PropertyKind::Bool), Value::string("__INVALID__: Bool"));
	}

	#[test]
	fn missing_slot_degrades_to_sentinel() {
		let (model, _) = test_model();
		let property = Property::new("absent", PropertyKind::Int32);
		assert_eq!(extract_value(&model, &PropertyBag::new(), &property, 0), Value::string("__INVALID__: Int32"));
	}

	#[test]
	fn fixed_array_slots_resolve_by_index() {
		let (model, _) = test_model();
		let property = Property::new("grid", PropertyKind::Int32).with_dim(3);
		let bag = PropertyBag::new().with_slots("grid", vec![Datum::I32(10), Datum::I32(20), Datum::I32(30)]);
		assert_eq!(extract_value(&model, &bag, &property, 2), Value::Number(30.0));
	}
}
