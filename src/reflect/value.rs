/// Canonical interchange value produced by extraction and export.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent or dead reference.
	Null,
	/// Boolean literal.
	Bool(bool),
	/// Double-precision number; integers wider than 53 bits never use this.
	Number(f64),
	/// Text literal.
	String(Box<str>),
	/// Ordered element sequence.
	Array(Vec<Value>),
	/// Ordered key/value object.
	Object(ObjectValue),
}

impl Value {
	/// Build a string value from any string-like input.
	pub fn string(text: impl Into<String>) -> Self {
		Value::String(text.into().into_boxed_str())
	}

	/// Build a number value from an `f64`-representable input.
	pub fn number(value: impl Into<f64>) -> Self {
		Value::Number(value.into())
	}
}

/// Object node: unique keys, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
	entries: Vec<(Box<str>, Value)>,
}

impl ObjectValue {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace a field; replacement keeps the entry's position.
	pub fn set(&mut self, key: impl Into<String>, value: Value) {
		let key = key.into().into_boxed_str();
		if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == key) {
			slot.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Look up a field by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(name, _)| name.as_ref() == key).map(|(_, value)| value)
	}

	/// Iterate fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(name, value)| (name.as_ref(), value))
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the object has no fields.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<ObjectValue> for Value {
	fn from(object: ObjectValue) -> Self {
		Value::Object(object)
	}
}
