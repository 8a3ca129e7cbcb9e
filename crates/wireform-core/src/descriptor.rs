//! Codec descriptors and wire kinds.
//!
//! A codec declares a descriptor once, at construction: its logical name
//! and the structural category its wire form occupies in the surrounding
//! format. The host framework reads the descriptor to decide quoting and
//! escaping rules and to emit schema metadata. Descriptors never change
//! during a codec's lifetime.

use serde::Serialize;

/// Structural category of a codec's wire representation
///
/// Controls how the host framework treats the payload: a `String` kind
/// travels as a quoted, escaped token, while `Number` and `Boolean` travel
/// as native tokens of the surrounding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireKind {
	/// A quoted string token
	String,
	/// A native number token
	Number,
	/// A native boolean token
	Boolean,
}

impl WireKind {
	/// Stable lowercase name used in schema output
	pub fn as_str(&self) -> &'static str {
		match self {
			WireKind::String => "string",
			WireKind::Number => "number",
			WireKind::Boolean => "boolean",
		}
	}
}

impl std::fmt::Display for WireKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The static contract a codec declares to the host framework
///
/// Pairs a logical type name with the [`WireKind`] of its wire form.
/// Const-constructible so a codec can embed its descriptor as a `'static`
/// item.
///
/// # Examples
///
/// ```
/// use wireform_core::{CodecDescriptor, WireKind};
///
/// const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("BigInteger", WireKind::String);
///
/// assert_eq!(DESCRIPTOR.name(), "BigInteger");
/// assert_eq!(DESCRIPTOR.kind(), WireKind::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecDescriptor {
	name: &'static str,
	kind: WireKind,
}

impl CodecDescriptor {
	/// Create a descriptor for a codec with the given logical name and wire kind
	pub const fn new(name: &'static str, kind: WireKind) -> Self {
		Self { name, kind }
	}

	/// Logical name of the bridged type
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Structural category of the wire form
	pub fn kind(&self) -> WireKind {
		self.kind
	}
}

impl std::fmt::Display for CodecDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.name, self.kind)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wire_kind_as_str() {
		assert_eq!(WireKind::String.as_str(), "string");
		assert_eq!(WireKind::Number.as_str(), "number");
		assert_eq!(WireKind::Boolean.as_str(), "boolean");
	}

	#[test]
	fn test_descriptor_accessors() {
		let descriptor = CodecDescriptor::new("Instant", WireKind::String);
		assert_eq!(descriptor.name(), "Instant");
		assert_eq!(descriptor.kind(), WireKind::String);
	}

	#[test]
	fn test_descriptor_schema_output() {
		let descriptor = CodecDescriptor::new("LocalDateTime", WireKind::String);
		let json = serde_json::to_value(&descriptor).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"name": "LocalDateTime", "kind": "string"})
		);
	}

	#[test]
	fn test_descriptor_display() {
		let descriptor = CodecDescriptor::new("ZonedDateTime", WireKind::String);
		assert_eq!(descriptor.to_string(), "ZonedDateTime (string)");
	}
}
