//! Wire-compatibility scenarios through the public facade.
//!
//! Fixed wire strings that must be reproduced bit-exact for
//! interoperability with other producers and consumers of the format.

use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use wireform::prelude::*;

#[test]
fn test_big_integer_extreme_magnitude() {
	let codec = BigIntegerCodec;
	let value = codec
		.decode("-170141183460469231731687303715884105728")
		.unwrap();
	assert_eq!(
		codec.encode(&value),
		"-170141183460469231731687303715884105728"
	);
}

#[test]
fn test_big_integer_leading_zeros_policy() {
	// Chosen leniency: leading zeros are accepted, as the original wire
	// producers' integer parsers accept them.
	let codec = BigIntegerCodec;
	assert_eq!(codec.decode("007").unwrap(), BigInt::from(7));
}

#[test]
fn test_instant_canonical_wire_form() {
	let codec = InstantCodec;
	let instant = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
	assert_eq!(codec.encode(&instant), "2024-03-15T10:30:00Z");
}

#[test]
fn test_local_date_time_rejects_zone_information() {
	let codec = LocalDateTimeCodec;
	assert!(matches!(
		codec.decode("2024-03-15T10:30:00+01:00"),
		Err(CodecError::MalformedTimestamp { .. })
	));
}

#[test]
fn test_zoned_date_time_requires_offset() {
	let codec = ZonedDateTimeCodec;
	assert!(matches!(
		codec.decode("2024-03-15T10:30:00[Europe/Paris]"),
		Err(CodecError::MalformedTimestamp { .. })
	));
}

#[test]
fn test_zoned_date_time_reference_form() {
	let codec = ZonedDateTimeCodec;
	let value = codec
		.decode("2024-03-15T10:30:00+01:00[Europe/Paris]")
		.unwrap();
	assert_eq!(value.zone(), Some(chrono_tz::Europe::Paris));
	assert_eq!(
		codec.encode(&value),
		"2024-03-15T10:30:00+01:00[Europe/Paris]"
	);
}

#[test]
fn test_prelude_covers_codec_usage() {
	// A consumer importing only the prelude can encode and decode every
	// shipped type.
	let registry = default_registry();
	let codec = registry.get::<BigInt>().unwrap();
	assert_eq!(codec.encode(&BigInt::from(-42)), "-42");
}
