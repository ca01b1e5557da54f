/// Non-owning reference to a type defined elsewhere in the model.
///
/// Referenced types are never expanded in place; descriptors and paths carry
/// only the module/name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
	/// Module the type lives in.
	pub module: Box<str>,
	/// Type name inside the module.
	pub name: Box<str>,
}

impl TypeRef {
	/// Build a reference from module and type names.
	pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			module: module.into().into_boxed_str(),
			name: name.into().into_boxed_str(),
		}
	}

	/// Stable path form, `/{module}.{name}`.
	pub fn path(&self) -> String {
		format!("/{}.{}", self.module, self.name)
	}
}

/// Closed set of property categories the extractor dispatches on.
///
/// Nested kinds carry their element descriptors directly, so adding a kind is
/// one variant plus one dispatch arm.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
	/// Boolean flag.
	Bool,
	/// Signed 8-bit integer.
	Int8,
	/// Signed 16-bit integer.
	Int16,
	/// Signed 32-bit integer.
	Int32,
	/// Signed 64-bit integer; exported as a decimal string.
	Int64,
	/// Unsigned byte, optionally backed by a legacy enum definition.
	Byte {
		/// Attached enum name, when the byte is enum-valued.
		enum_type: Option<Box<str>>,
	},
	/// Unsigned 16-bit integer.
	UInt16,
	/// Unsigned 32-bit integer.
	UInt32,
	/// Unsigned 64-bit integer; exported as a decimal string.
	UInt64,
	/// 32-bit float.
	Float,
	/// 64-bit float.
	Double,
	/// Plain string.
	Str,
	/// Interned name string.
	Name,
	/// UTF-8 string.
	Utf8Str,
	/// Rich localizable text; serialized through the structured sub-serializer.
	Text,
	/// Scoped or flags enumeration.
	Enum {
		/// Enum definition name.
		enum_type: Box<str>,
	},
	/// Strong object reference.
	Object {
		/// Referenced class.
		class: TypeRef,
	},
	/// Weak object reference.
	WeakObject {
		/// Referenced class.
		class: TypeRef,
	},
	/// Lazy object reference carrying a persistent unique id.
	LazyObject {
		/// Referenced class.
		class: TypeRef,
	},
	/// Soft reference stored as an unresolved path.
	SoftObject {
		/// Referenced class.
		class: TypeRef,
	},
	/// Interface reference to an implementing object.
	Interface {
		/// Interface class.
		class: TypeRef,
	},
	/// Reference to a property by field path.
	FieldPath,
	/// Single-cast delegate.
	Delegate,
	/// Multicast delegate with sparse storage.
	MulticastSparseDelegate,
	/// Multicast delegate with inline storage; target identities are
	/// unreliable and export is best-effort.
	MulticastInlineDelegate,
	/// Composite value of a named struct type.
	Struct {
		/// Struct definition reference.
		target: TypeRef,
	},
	/// Dynamically-sized array.
	Array {
		/// Element descriptor.
		value: Box<Property>,
	},
	/// Key/value map; keys are not restricted to strings.
	Map {
		/// Key descriptor.
		key: Box<Property>,
		/// Value descriptor.
		value: Box<Property>,
	},
	/// Unordered unique-element container.
	Set {
		/// Element descriptor.
		value: Box<Property>,
	},
	/// Optionally-present value.
	Optional {
		/// Contained descriptor.
		value: Box<Property>,
	},
	/// Host kind with no encoding rule; exports a bare type tag and extracts
	/// to a sentinel.
	Unknown {
		/// Host-side kind tag, for diagnostics.
		tag: Box<str>,
	},
}

impl PropertyKind {
	/// Stable kind tag used in descriptors and diagnostics.
	pub fn tag(&self) -> &str {
		match self {
			PropertyKind::Bool => "Bool",
			PropertyKind::Int8 => "Int8",
			PropertyKind::Int16 => "Int16",
			PropertyKind::Int32 => "Int32",
			PropertyKind::Int64 => "Int64",
			PropertyKind::Byte { .. } => "Byte",
			PropertyKind::UInt16 => "UInt16",
			PropertyKind::UInt32 => "UInt32",
			PropertyKind::UInt64 => "UInt64",
			PropertyKind::Float => "Float",
			PropertyKind::Double => "Double",
			PropertyKind::Str => "Str",
			PropertyKind::Name => "Name",
			PropertyKind::Utf8Str => "Utf8Str",
			PropertyKind::Text => "Text",
			PropertyKind::Enum { .. } => "Enum",
			PropertyKind::Object { .. } => "Object",
			PropertyKind::WeakObject { .. } => "WeakObject",
			PropertyKind::LazyObject { .. } => "LazyObject",
			PropertyKind::SoftObject { .. } => "SoftObject",
			PropertyKind::Interface { .. } => "Interface",
			PropertyKind::FieldPath => "FieldPath",
			PropertyKind::Delegate => "Delegate",
			PropertyKind::MulticastSparseDelegate => "MulticastSparseDelegate",
			PropertyKind::MulticastInlineDelegate => "MulticastInlineDelegate",
			PropertyKind::Struct { .. } => "Struct",
			PropertyKind::Array { .. } => "Array",
			PropertyKind::Map { .. } => "Map",
			PropertyKind::Set { .. } => "Set",
			PropertyKind::Optional { .. } => "Optional",
			PropertyKind::Unknown { tag } => tag,
		}
	}
}

/// One property descriptor on a class or struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	/// Property name; empty on nested/element descriptors.
	pub name: Box<str>,
	/// Value category.
	pub kind: PropertyKind,
	/// Host-defined 64-bit flag word.
	pub flags: u64,
	/// Fixed inline array length; 1 for plain properties.
	pub array_dim: u32,
}

impl Property {
	/// Build a named root property with default flags and dimension.
	pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
		Self {
			name: name.into().into_boxed_str(),
			kind,
			flags: 0,
			array_dim: 1,
		}
	}

	/// Build a nameless nested/element descriptor.
	pub fn nested(kind: PropertyKind) -> Self {
		Self::new("", kind)
	}

	/// Set the flag word.
	pub fn with_flags(mut self, flags: u64) -> Self {
		self.flags = flags;
		self
	}

	/// Set the fixed inline array length.
	pub fn with_dim(mut self, array_dim: u32) -> Self {
		self.array_dim = array_dim;
		self
	}
}
