use serde::Serialize;

use crate::reflect::kind::TypeRef;
use crate::reflect::model::ObjectModel;

/// Arena handle for one live instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

/// Rich localizable text payload.
///
/// Carries its localization identity alongside the source string; export goes
/// through the structured sub-serializer rather than a plain string encoding.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedText {
	/// Localization namespace.
	pub namespace: Box<str>,
	/// Localization key.
	pub key: Box<str>,
	/// Source-language string.
	pub source: Box<str>,
}

/// One bound delegate endpoint.
#[derive(Debug, Clone)]
pub struct DelegateBinding {
	/// Bound target instance, when still alive.
	pub target: Option<InstanceId>,
	/// Bound function name.
	pub function: Box<str>,
}

/// Runtime storage for one reflected value slot.
#[derive(Debug, Clone)]
pub enum Datum {
	/// Boolean storage.
	Bool(bool),
	/// Signed 8-bit storage.
	I8(i8),
	/// Signed 16-bit storage.
	I16(i16),
	/// Signed 32-bit storage.
	I32(i32),
	/// Signed 64-bit storage.
	I64(i64),
	/// Unsigned 8-bit storage.
	U8(u8),
	/// Unsigned 16-bit storage.
	U16(u16),
	/// Unsigned 32-bit storage.
	U32(u32),
	/// Unsigned 64-bit storage.
	U64(u64),
	/// 32-bit float storage.
	F32(f32),
	/// 64-bit float storage.
	F64(f64),
	/// String storage, shared by plain/name/utf8/field-path kinds.
	Str(Box<str>),
	/// Rich localizable text storage.
	Text(LocalizedText),
	/// Raw enumeration value.
	EnumValue(i64),
	/// Object/weak/interface reference storage.
	Ref(Option<InstanceId>),
	/// Lazy reference storage with persistent unique id.
	LazyRef {
		/// Persistent unique id.
		unique_id: Box<str>,
		/// Referenced instance, when still alive.
		target: Option<InstanceId>,
	},
	/// Unresolved soft reference path.
	SoftPath(Box<str>),
	/// Single-cast delegate storage.
	Delegate(Option<DelegateBinding>),
	/// Multicast delegate invocation list.
	Multicast(Vec<DelegateBinding>),
	/// Nested composite storage.
	Struct(PropertyBag),
	/// Dynamic array storage.
	Array(Vec<Datum>),
	/// Map storage as key/value pairs in storage order.
	Map(Vec<(Datum, Datum)>),
	/// Set storage in storage order.
	Set(Vec<Datum>),
	/// Optional storage.
	Optional(Option<Box<Datum>>),
}

/// Ordered property-name to value-slot table backing one instance or struct.
///
/// A slot vector longer than one backs a fixed-size inline array property.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
	entries: Vec<BagEntry>,
}

#[derive(Debug, Clone)]
struct BagEntry {
	name: Box<str>,
	slots: Vec<Datum>,
}

impl PropertyBag {
	/// Create an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Store a single-slot value, replacing any existing entry.
	pub fn set(&mut self, name: impl Into<String>, datum: Datum) {
		self.set_slots(name, vec![datum]);
	}

	/// Store a multi-slot value for a fixed-size inline array property.
	pub fn set_slots(&mut self, name: impl Into<String>, slots: Vec<Datum>) {
		let name = name.into().into_boxed_str();
		if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
			entry.slots = slots;
		} else {
			self.entries.push(BagEntry { name, slots });
		}
	}

	/// Chained form of [`PropertyBag::set`].
	pub fn with(mut self, name: impl Into<String>, datum: Datum) -> Self {
		self.set(name, datum);
		self
	}

	/// Chained form of [`PropertyBag::set_slots`].
	pub fn with_slots(mut self, name: impl Into<String>, slots: Vec<Datum>) -> Self {
		self.set_slots(name, slots);
		self
	}

	/// Fetch one value slot by property name and element index.
	pub fn get(&self, name: &str, element_index: usize) -> Option<&Datum> {
		self.entries.iter().find(|entry| entry.name.as_ref() == name)?.slots.get(element_index)
	}
}

/// Owner of an instance: a module for roots, another instance otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outer {
	/// Root instance owned directly by a module.
	Module(Box<str>),
	/// Subobject owned by another instance.
	Instance(InstanceId),
}

/// One live instance in the model.
#[derive(Debug, Clone)]
pub struct Instance {
	/// Instance name, unique among its owner's children.
	pub name: Box<str>,
	/// Class the instance conforms to.
	pub class: TypeRef,
	/// Structural owner.
	pub outer: Outer,
	/// True for a class's canonical default instance.
	pub is_default: bool,
	/// Stored property values.
	pub values: PropertyBag,
}

impl ObjectModel {
	/// Register an instance and return its handle.
	pub fn add_instance(&mut self, instance: Instance) -> InstanceId {
		self.instances.push(instance);
		InstanceId(self.instances.len() - 1)
	}

	/// Fetch an instance by handle.
	pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
		self.instances.get(id.0)
	}

	/// Mutable instance access for model assembly; exports never mutate.
	pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
		self.instances.get_mut(id.0)
	}

	/// Number of registered instances.
	pub fn instance_count(&self) -> usize {
		self.instances.len()
	}

	/// Stable, globally-unique path for an instance.
	///
	/// Roots render as `/{module}.{name}`, the first subobject level attaches
	/// with `:`, deeper levels with `.`.
	pub fn instance_path(&self, id: InstanceId) -> Option<String> {
		let instance = self.instance(id)?;
		match &instance.outer {
			Outer::Module(module) => Some(format!("/{}.{}", module, instance.name)),
			Outer::Instance(parent_id) => {
				let parent = self.instance(*parent_id)?;
				let separator = match parent.outer {
					Outer::Module(_) => ':',
					Outer::Instance(_) => '.',
				};
				let mut path = self.instance_path(*parent_id)?;
				path.push(separator);
				path.push_str(&instance.name);
				Some(path)
			}
		}
	}

	/// Instances directly owned by `id`, name-sorted.
	pub fn children_of(&self, id: InstanceId) -> Vec<InstanceId> {
		let mut children: Vec<InstanceId> = self
			.instances
			.iter()
			.enumerate()
			.filter(|(_, instance)| instance.outer == Outer::Instance(id))
			.map(|(index, _)| InstanceId(index))
			.collect();
		children.sort_by(|left, right| self.instances[left.0].name.cmp(&self.instances[right.0].name));
		children
	}

	/// Canonical default instance for a class, when one is registered.
	pub fn default_instance(&self, class_ref: &TypeRef) -> Option<InstanceId> {
		self.instances
			.iter()
			.position(|instance| instance.is_default && instance.class == *class_ref)
			.map(InstanceId)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn leaf_instance(name: &str, outer: Outer) -> Instance {
		Instance {
			name: name.into(),
			class: TypeRef::new("Core", "Object"),
			outer,
			is_default: false,
			values: PropertyBag::new(),
		}
	}

	#[test]
	fn paths_use_colon_then_dot() {
		let mut model = ObjectModel::new();
		let root = model.add_instance(leaf_instance("Default__Actor", Outer::Module("Engine".into())));
		let child = model.add_instance(leaf_instance("root", Outer::Instance(root)));
		let grandchild = model.add_instance(leaf_instance("shape", Outer::Instance(child)));

		assert_eq!(model.instance_path(root).as_deref(), Some("/Engine.Default__Actor"));
		assert_eq!(model.instance_path(child).as_deref(), Some("/Engine.Default__Actor:root"));
		assert_eq!(model.instance_path(grandchild).as_deref(), Some("/Engine.Default__Actor:root.shape"));
	}

	#[test]
	fn children_are_name_sorted() {
		let mut model = ObjectModel::new();
		let root = model.add_instance(leaf_instance("Default__Actor", Outer::Module("Engine".into())));
		model.add_instance(leaf_instance("zulu", Outer::Instance(root)));
		model.add_instance(leaf_instance("alpha", Outer::Instance(root)));
		model.add_instance(leaf_instance("mike", Outer::Instance(root)));

		let children = model.children_of(root);
		let names: Vec<&str> = children.iter().map(|id| model.instance(*id).expect("child exists").name.as_ref()).collect();
		assert_eq!(names, vec!["alpha", "mike", "zulu"]);
	}

	#[test]
	fn default_instance_matches_class() {
		let mut model = ObjectModel::new();
		let mut default = leaf_instance("Default__Object", Outer::Module("Core".into()));
		default.is_default = true;
		let id = model.add_instance(default);
		model.add_instance(leaf_instance("stray", Outer::Module("Core".into())));

		assert_eq!(model.default_instance(&TypeRef::new("Core", "Object")), Some(id));
		assert_eq!(model.default_instance(&TypeRef::new("Core", "Actor")), None);
	}

	#[test]
	fn bag_indexed_slots_resolve() {
		let bag = PropertyBag::new().with_slots("grid", vec![Datum::I32(1), Datum::I32(2)]);
		assert!(matches!(bag.get("grid", 1), Some(Datum::I32(2))));
		assert!(bag.get("grid", 2).is_none());
		assert!(bag.get("missing", 0).is_none());
	}
}
