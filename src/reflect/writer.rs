use crate::reflect::value::{ObjectValue, Value};

/// Render a value tree with the exact export text format.
///
/// The format is contractual, not generic pretty-printing: downstream tooling
/// diffs export runs textually, so structurally-equal output must stay
/// byte-identical. Tab indentation per nesting level, empty containers inline,
/// a comma immediately after every non-last element, `"key": value` entries.
pub fn write_document(value: &Value) -> String {
	let mut writer = DocumentWriter {
		out: String::new(),
		indent: 0,
	};
	writer.write_value(value);
	writer.out
}

struct DocumentWriter {
	out: String,
	indent: usize,
}

impl DocumentWriter {
	fn write_value(&mut self, value: &Value) {
		match value {
			Value::Null => self.out.push_str("null"),
			Value::Bool(flag) => self.out.push_str(if *flag { "true" } else { "false" }),
			Value::Number(number) => self.write_number(*number),
			Value::String(text) => self.write_string(text),
			Value::Array(elements) => self.write_array(elements),
			Value::Object(object) => self.write_object(object),
		}
	}

	fn write_number(&mut self, number: f64) {
		if number.is_finite() {
			// Shortest decimal form that re-parses to the same double.
			self.out.push_str(&format!("{number}"));
		} else {
			self.out.push_str("null");
		}
	}

	fn write_string(&mut self, text: &str) {
		self.out.push('"');
		for ch in text.chars() {
			match ch {
				'\\' => self.out.push_str("\\\\"),
				'"' => self.out.push_str("\\\""),
				'\n' => self.out.push_str("\\n"),
				'\t' => self.out.push_str("\\t"),
				'\u{0008}' => self.out.push_str("\\b"),
				'\u{000c}' => self.out.push_str("\\f"),
				'\r' => self.out.push_str("\\r"),
				ch if (ch as u32) < 0x20 => self.out.push_str(&format!("\\u{:04x}", ch as u32)),
				ch => self.out.push(ch),
			}
		}
		self.out.push('"');
	}

	fn write_array(&mut self, elements: &[Value]) {
		if elements.is_empty() {
			self.out.push_str("[]");
			return;
		}

		self.out.push('[');
		self.indent += 1;
		for (index, element) in elements.iter().enumerate() {
			if index > 0 {
				self.out.push(',');
			}
			self.newline_indent();
			self.write_value(element);
		}
		self.indent -= 1;
		self.newline_indent();
		self.out.push(']');
	}

	fn write_object(&mut self, object: &ObjectValue) {
		if object.is_empty() {
			self.out.push_str("{}");
			return;
		}

		self.out.push('{');
		self.indent += 1;
		for (index, (key, value)) in object.iter().enumerate() {
			if index > 0 {
				self.out.push(',');
			}
			self.newline_indent();
			self.write_string(key);
			self.out.push_str(": ");
			self.write_value(value);
		}
		self.indent -= 1;
		self.newline_indent();
		self.out.push('}');
	}

	fn newline_indent(&mut self) {
		self.out.push('\n');
		for _ in 0..self.indent {
			self.out.push('\t');
		}
	}
}
