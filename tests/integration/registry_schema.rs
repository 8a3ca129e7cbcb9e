//! Default registry wiring and schema metadata output.

use chrono::{DateTime, NaiveDateTime, Utc};
use num_bigint::BigInt;
use wireform::prelude::*;

#[test]
fn test_default_registry_covers_all_shipped_types() {
	let registry = default_registry();

	assert_eq!(
		registry.descriptor_for::<BigInt>().unwrap().name(),
		"BigInteger"
	);
	assert_eq!(
		registry.descriptor_for::<DateTime<Utc>>().unwrap().name(),
		"Instant"
	);
	assert_eq!(
		registry.descriptor_for::<NaiveDateTime>().unwrap().name(),
		"LocalDateTime"
	);
	assert_eq!(
		registry.descriptor_for::<ZonedDateTime>().unwrap().name(),
		"ZonedDateTime"
	);
	assert_eq!(registry.len(), 4);
}

#[test]
fn test_every_shipped_codec_declares_string_wire_kind() {
	let registry = default_registry();
	for descriptor in registry.descriptors() {
		assert_eq!(descriptor.kind(), WireKind::String);
	}
}

#[test]
fn test_schema_metadata_serializes() {
	let registry = default_registry();
	let mut schema: Vec<_> = registry
		.descriptors()
		.map(|d| serde_json::to_value(d).unwrap())
		.collect();
	schema.sort_by_key(|entry| entry["name"].as_str().unwrap().to_string());

	assert_eq!(
		schema,
		vec![
			serde_json::json!({"name": "BigInteger", "kind": "string"}),
			serde_json::json!({"name": "Instant", "kind": "string"}),
			serde_json::json!({"name": "LocalDateTime", "kind": "string"}),
			serde_json::json!({"name": "ZonedDateTime", "kind": "string"}),
		]
	);
}

#[test]
fn test_registry_lookup_decodes_through_trait_object() {
	let registry = default_registry();
	let codec = registry.get::<NaiveDateTime>().unwrap();
	let value = codec.decode("2024-03-15T10:30:00").unwrap();
	assert_eq!(codec.encode(&value), "2024-03-15T10:30:00");
}
