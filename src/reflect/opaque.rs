use serde::Serialize;

use crate::reflect::error::{ReflectError, Result};
use crate::reflect::value::{ObjectValue, Value};

/// Sentinel substituted when the sub-serializer fails to round-trip.
pub const OPAQUE_SENTINEL: &str = "__INVALID_JSON__";

/// Serializable form of one delegate binding.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BindingArchive {
	/// Resolved target path, when the target is alive.
	pub target_object: Option<String>,
	/// Bound function name.
	pub function_name: String,
}

/// Round-trip an opaque payload through the structured serializer.
///
/// The payload is serialized to its private interchange form and the result is
/// re-parsed into the canonical value tree. Used for types whose internals the
/// extractor does not reach directly (rich text, sparse delegate lists).
pub fn archive_to_value<T: Serialize>(what: &str, payload: &T) -> Result<Value> {
	let text = serde_json::to_string(payload).map_err(|err| ReflectError::OpaqueSerialization {
		what: what.to_owned(),
		reason: err.to_string(),
	})?;
	let parsed: serde_json::Value = serde_json::from_str(&text).map_err(|err| ReflectError::OpaqueSerialization {
		what: what.to_owned(),
		reason: err.to_string(),
	})?;
	Ok(json_to_value(&parsed))
}

fn json_to_value(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(flag) => Value::Bool(*flag),
		serde_json::Value::Number(number) => {
			// Integers past exact double range stay textual.
			let wide = number.as_u64().is_some_and(|raw| raw >= (1_u64 << 53))
				|| number.as_i64().is_some_and(|raw| raw <= -(1_i64 << 53));
			match number.as_f64() {
				Some(value) if !wide => Value::Number(value),
				_ => Value::string(number.to_string()),
			}
		}
		serde_json::Value::String(text) => Value::string(text.clone()),
		serde_json::Value::Array(elements) => Value::Array(elements.iter().map(json_to_value).collect()),
		serde_json::Value::Object(fields) => {
			let mut object = ObjectValue::new();
			for (key, value) in fields {
				object.set(key.clone(), json_to_value(value));
			}
			Value::Object(object)
		}
	}
}
