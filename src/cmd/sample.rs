use reflectdoc::reflect::{
	Class, Datum, DelegateBinding, EnumDef, EnumEntry, Instance, InstanceId, LocalizedText, ModuleMember, ObjectModel, Outer, Property,
	PropertyBag, PropertyKind, StructDef, TypeRef,
};

/// Build the demonstration model the binary exports.
///
/// Two modules covering every property kind, default instances with owned
/// subobjects, and a reference cycle between an owner and its subobject.
pub fn demo_model() -> ObjectModel {
	let mut model = ObjectModel::new();
	register_core(&mut model);
	register_engine(&mut model);
	register_instances(&mut model);
	model
}

fn register_core(model: &mut ObjectModel) {
	let core = model.add_module("Core");

	core.members.push(ModuleMember::Enum(EnumDef {
		name: "Visibility".into(),
		flags: false,
		entries: vec![entry("Hidden", 0), entry("Visible", 1), entry("Collapsed", 2)],
	}));
	core.members.push(ModuleMember::Enum(EnumDef {
		name: "LegacyShade".into(),
		flags: false,
		entries: vec![entry("Flat", 0), entry("Gouraud", 1), entry("Phong", 2)],
	}));
	core.members.push(ModuleMember::Enum(EnumDef {
		name: "RenderFlags".into(),
		flags: true,
		entries: vec![entry("CastShadow", 1), entry("Translucent", 2), entry("DoubleSided", 4), entry("Wireframe", 8)],
	}));

	core.members.push(ModuleMember::Struct(StructDef {
		name: "Vec3".into(),
		properties: vec![
			Property::new("x", PropertyKind::Double),
			Property::new("y", PropertyKind::Double),
			Property::new("z", PropertyKind::Double),
		],
	}));
	core.members.push(ModuleMember::Struct(StructDef {
		name: "Transform".into(),
		properties: vec![
			Property::new("position", PropertyKind::Struct {
				target: TypeRef::new("Core", "Vec3"),
			}),
			Property::new("scale", PropertyKind::Struct {
				target: TypeRef::new("Core", "Vec3"),
			}),
			Property::new("yaw", PropertyKind::Float),
		],
	}));

	core.members.push(ModuleMember::Class(Class {
		name: "Object".into(),
		super_class: None,
		properties: vec![
			Property::new("serial", PropertyKind::UInt64).with_flags(0x1),
			Property::new("label", PropertyKind::Str).with_flags(0x4),
		],
	}));
}

fn register_engine(model: &mut ObjectModel) {
	let engine = model.add_module("Engine");

	engine.members.push(ModuleMember::Class(Class {
		name: "Actor".into(),
		super_class: Some(TypeRef::new("Core", "Object")),
		properties: vec![
			Property::new("visible", PropertyKind::Bool).with_flags(0x1),
			Property::new("visibility", PropertyKind::Enum {
				enum_type: "Visibility".into(),
			}),
			Property::new("renderFlags", PropertyKind::Enum {
				enum_type: "RenderFlags".into(),
			}),
			Property::new("transform", PropertyKind::Struct {
				target: TypeRef::new("Core", "Transform"),
			}),
			Property::new("lodLevels", PropertyKind::Int32).with_dim(4),
			Property::new("attachments", PropertyKind::Array {
				value: Box::new(Property::nested(PropertyKind::Object {
					class: TypeRef::new("Core", "Object"),
				})),
			}),
			Property::new("metadata", PropertyKind::Map {
				key: Box::new(Property::nested(PropertyKind::Name)),
				value: Box::new(Property::nested(PropertyKind::Str)),
			}),
			Property::new("layers", PropertyKind::Set {
				value: Box::new(Property::nested(PropertyKind::Int32)),
			}),
			Property::new("note", PropertyKind::Text),
			Property::new("onChanged", PropertyKind::Delegate),
			Property::new("onTick", PropertyKind::MulticastSparseDelegate),
			Property::new("onDraw", PropertyKind::MulticastInlineDelegate),
			Property::new("material", PropertyKind::SoftObject {
				class: TypeRef::new("Engine", "Material"),
			}),
			Property::new("frameBudget", PropertyKind::Int64),
			Property::new("parentHint", PropertyKind::WeakObject {
				class: TypeRef::new("Engine", "Actor"),
			}),
			Property::new("prefab", PropertyKind::LazyObject {
				class: TypeRef::new("Core", "Object"),
			}),
			Property::new("boundField", PropertyKind::FieldPath),
			Property::new("maybeSeed", PropertyKind::Optional {
				value: Box::new(Property::nested(PropertyKind::Int32)),
			}),
			Property::new("byteMode", PropertyKind::Byte {
				enum_type: Some("LegacyShade".into()),
			}),
			Property::new("rawByte", PropertyKind::Byte { enum_type: None }),
		],
	}));

	engine.members.push(ModuleMember::Class(Class {
		name: "Material".into(),
		super_class: Some(TypeRef::new("Core", "Object")),
		properties: vec![
			Property::new("roughness", PropertyKind::Float),
			Property::new("tint", PropertyKind::Struct {
				target: TypeRef::new("Core", "Vec3"),
			}),
			Property::new("doubleSided", PropertyKind::Bool),
			Property::new("owner", PropertyKind::Object {
				class: TypeRef::new("Core", "Object"),
			}),
		],
	}));

	engine.members.push(ModuleMember::Class(Class {
		name: "Light".into(),
		super_class: Some(TypeRef::new("Engine", "Actor")),
		properties: vec![
			Property::new("intensity", PropertyKind::Float),
			Property::new("color", PropertyKind::Struct {
				target: TypeRef::new("Core", "Vec3"),
			}),
		],
	}));
}

fn register_instances(model: &mut ObjectModel) {
	model.add_instance(Instance {
		name: "Default__Object".into(),
		class: TypeRef::new("Core", "Object"),
		outer: Outer::Module("Core".into()),
		is_default: true,
		values: PropertyBag::new()
			.with("serial", Datum::U64(u64::MAX))
			.with("label", Datum::Str("Object".into())),
	});

	model.add_instance(Instance {
		name: "Default__Actor".into(),
		class: TypeRef::new("Engine", "Actor"),
		outer: Outer::Module("Engine".into()),
		is_default: true,
		values: actor_values(1, "Actor"),
	});

	model.add_instance(Instance {
		name: "Default__Material".into(),
		class: TypeRef::new("Engine", "Material"),
		outer: Outer::Module("Engine".into()),
		is_default: true,
		values: material_values(2, "Material", 0.5, None),
	});

	let mut light_values = actor_values(3, "Light");
	light_values.set("visibility", Datum::EnumValue(1));
	light_values.set("renderFlags", Datum::EnumValue(9));
	light_values.set("metadata", Datum::Map(vec![(Datum::Str("role".into()), Datum::Str("key_light".into()))]));
	light_values.set("layers", Datum::Set(vec![Datum::I32(1), Datum::I32(4)]));
	light_values.set("intensity", Datum::F32(3.5));
	light_values.set("color", vec3(1.0, 0.9, 0.8));
	let light = model.add_instance(Instance {
		name: "Default__Light".into(),
		class: TypeRef::new("Engine", "Light"),
		outer: Outer::Module("Engine".into()),
		is_default: true,
		values: light_values,
	});

	// Owned subobject holding a non-owning reference back to its owner.
	let beam = model.add_instance(Instance {
		name: "beam".into(),
		class: TypeRef::new("Engine", "Material"),
		outer: Outer::Instance(light),
		is_default: false,
		values: material_values(4, "beam", 0.25, Some(light)),
	});

	if let Some(light_instance) = model.instance_mut(light) {
		light_instance.values.set("attachments", Datum::Array(vec![Datum::Ref(Some(beam))]));
		light_instance.values.set(
			"onTick",
			Datum::Multicast(vec![DelegateBinding {
				target: Some(beam),
				function: "OnOwnerTick".into(),
			}]),
		);
	}
}

fn actor_values(serial: u64, label: &str) -> PropertyBag {
	PropertyBag::new()
		.with("visible", Datum::Bool(true))
		.with("visibility", Datum::EnumValue(0))
		.with("renderFlags", Datum::EnumValue(0))
		.with("transform", transform_datum())
		.with_slots("lodLevels", vec![Datum::I32(0), Datum::I32(1), Datum::I32(2), Datum::I32(3)])
		.with("attachments", Datum::Array(Vec::new()))
		.with("metadata", Datum::Map(Vec::new()))
		.with("layers", Datum::Set(Vec::new()))
		.with(
			"note",
			Datum::Text(LocalizedText {
				namespace: "editor".into(),
				key: format!("{label}.note").into_boxed_str(),
				source: format!("Default {label}").into_boxed_str(),
			}),
		)
		.with("onChanged", Datum::Delegate(None))
		.with("onTick", Datum::Multicast(Vec::new()))
		.with("onDraw", Datum::Multicast(Vec::new()))
		.with("material", Datum::SoftPath("/Content/Materials.DefaultLit".into()))
		.with("frameBudget", Datum::I64(-1_234_567_890_123))
		.with("parentHint", Datum::Ref(None))
		.with("prefab", Datum::LazyRef {
			unique_id: "0000000000000000".into(),
			target: None,
		})
		.with("boundField", Datum::Str("Core.Object:label".into()))
		.with("maybeSeed", Datum::Optional(None))
		.with("byteMode", Datum::U8(2))
		.with("rawByte", Datum::U8(255))
		.with("serial", Datum::U64(serial))
		.with("label", Datum::Str(label.into()))
}

fn material_values(serial: u64, label: &str, roughness: f32, owner: Option<InstanceId>) -> PropertyBag {
	PropertyBag::new()
		.with("roughness", Datum::F32(roughness))
		.with("tint", vec3(1.0, 1.0, 1.0))
		.with("doubleSided", Datum::Bool(false))
		.with("owner", Datum::Ref(owner))
		.with("serial", Datum::U64(serial))
		.with("label", Datum::Str(label.into()))
}

fn transform_datum() -> Datum {
	Datum::Struct(
		PropertyBag::new()
			.with("position", vec3(0.0, 0.0, 0.0))
			.with("scale", vec3(1.0, 1.0, 1.0))
			.with("yaw", Datum::F32(0.0)),
	)
}

fn vec3(x: f64, y: f64, z: f64) -> Datum {
	Datum::Struct(PropertyBag::new().with("x", Datum::F64(x)).with("y", Datum::F64(y)).with("z", Datum::F64(z)))
}

fn entry(name: &str, value: i64) -> EnumEntry {
	EnumEntry {
		name: name.into(),
		value,
	}
}
