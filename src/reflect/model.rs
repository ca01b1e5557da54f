use crate::reflect::instance::Instance;
use crate::reflect::kind::{Property, TypeRef};

/// One class definition: named, optionally derived, with declared properties.
#[derive(Debug, Clone)]
pub struct Class {
	/// Class name.
	pub name: Box<str>,
	/// Superclass reference, empty for root classes.
	pub super_class: Option<TypeRef>,
	/// Own property descriptors in declaration order (deprecated included).
	pub properties: Vec<Property>,
}

/// One plain struct definition.
#[derive(Debug, Clone)]
pub struct StructDef {
	/// Struct name.
	pub name: Box<str>,
	/// Property descriptors in declaration order.
	pub properties: Vec<Property>,
}

/// One enumeration entry.
#[derive(Debug, Clone)]
pub struct EnumEntry {
	/// Entry name.
	pub name: Box<str>,
	/// Entry value.
	pub value: i64,
}

/// One enumeration definition.
#[derive(Debug, Clone)]
pub struct EnumDef {
	/// Enum name.
	pub name: Box<str>,
	/// True for bit-flag enums, which render joined entry names.
	pub flags: bool,
	/// Entries in declaration order.
	pub entries: Vec<EnumEntry>,
}

impl EnumDef {
	/// Entry name for an exact value match.
	pub fn name_by_value(&self, value: i64) -> Option<&str> {
		self.entries.iter().find(|entry| entry.value == value).map(|entry| entry.name.as_ref())
	}

	/// Render a flags value as entry names joined with `" | "`.
	///
	/// Entries are consumed in declaration order against the remaining bit
	/// set; unmatched residue appends as a decimal literal. Zero renders
	/// as the empty string.
	pub fn bitfield_label(&self, value: i64) -> String {
		if value == 0 {
			return String::new();
		}

		let mut remaining = value;
		let mut parts: Vec<&str> = Vec::new();
		for entry in &self.entries {
			if entry.value != 0 && (remaining & entry.value) == entry.value {
				parts.push(&entry.name);
				remaining &= !entry.value;
			}
		}

		let mut label = parts.join(" | ");
		if remaining != 0 {
			if !label.is_empty() {
				label.push_str(" | ");
			}
			label.push_str(&remaining.to_string());
		}
		label
	}
}

/// One member of a module's type table.
#[derive(Debug, Clone)]
pub enum ModuleMember {
	/// A class definition.
	Class(Class),
	/// A struct definition.
	Struct(StructDef),
	/// An enum definition.
	Enum(EnumDef),
}

/// Namespace-like grouping of classes, structs, and enums.
#[derive(Debug, Clone)]
pub struct Module {
	/// Module name.
	pub name: Box<str>,
	/// Type members in registration order.
	pub members: Vec<ModuleMember>,
}

impl Module {
	/// Create an empty module.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into().into_boxed_str(),
			members: Vec::new(),
		}
	}

	/// Iterate class members.
	pub fn classes(&self) -> impl Iterator<Item = &Class> {
		self.members.iter().filter_map(|member| match member {
			ModuleMember::Class(class) => Some(class),
			_ => None,
		})
	}

	/// Iterate struct members.
	pub fn structs(&self) -> impl Iterator<Item = &StructDef> {
		self.members.iter().filter_map(|member| match member {
			ModuleMember::Struct(def) => Some(def),
			_ => None,
		})
	}

	/// Iterate enum members.
	pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
		self.members.iter().filter_map(|member| match member {
			ModuleMember::Enum(def) => Some(def),
			_ => None,
		})
	}
}

/// Read-only handle to the loaded modules and their instance graph.
///
/// Everything the exporters need is reachable from here; no process-wide
/// state is consulted.
#[derive(Debug, Default)]
pub struct ObjectModel {
	/// Modules in registration order.
	pub modules: Vec<Module>,
	pub(crate) instances: Vec<Instance>,
}

impl ObjectModel {
	/// Create an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a module and return a mutable handle for member registration.
	pub fn add_module(&mut self, name: impl Into<String>) -> &mut Module {
		self.modules.push(Module::new(name));
		let last = self.modules.len() - 1;
		&mut self.modules[last]
	}

	/// Look up a module by name.
	pub fn find_module(&self, name: &str) -> Option<&Module> {
		self.modules.iter().find(|module| module.name.as_ref() == name)
	}

	/// Look up a class by reference.
	pub fn find_class(&self, type_ref: &TypeRef) -> Option<&Class> {
		self.find_module(&type_ref.module)?.classes().find(|class| class.name == type_ref.name)
	}

	/// Look up a struct definition by reference.
	pub fn find_struct(&self, type_ref: &TypeRef) -> Option<&StructDef> {
		self.find_module(&type_ref.module)?.structs().find(|def| def.name == type_ref.name)
	}

	/// Look up an enum definition by bare name across all modules.
	pub fn find_enum(&self, name: &str) -> Option<&EnumDef> {
		self.modules.iter().flat_map(Module::enums).find(|def| def.name.as_ref() == name)
	}

	/// Full property list for a class: own properties first, then the super
	/// chain's, in declaration order.
	pub fn class_properties<'a>(&'a self, class: &'a Class) -> Vec<&'a Property> {
		let mut properties: Vec<&Property> = class.properties.iter().collect();
		let mut seen: Vec<&TypeRef> = Vec::new();

		let mut current = class.super_class.as_ref();
		while let Some(super_ref) = current {
			if seen.iter().any(|previous| *previous == super_ref) {
				break;
			}
			seen.push(super_ref);

			match self.find_class(super_ref) {
				Some(super_class) => {
					properties.extend(super_class.properties.iter());
					current = super_class.super_class.as_ref();
				}
				None => break,
			}
		}

		properties
	}
}
