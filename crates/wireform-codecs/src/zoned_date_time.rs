//! Zoned date-time value type and codec.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use wireform_core::{Codec, CodecDescriptor, CodecError, WireKind};

const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("ZonedDateTime", WireKind::String);

/// A point in civil time bound to a UTC offset and, optionally, a named
/// IANA time zone
///
/// chrono has no single type carrying both pieces: `DateTime<FixedOffset>`
/// drops the zone id and `DateTime<Tz>` hides the offset behind the zone
/// database. `ZonedDateTime` keeps both so the wire form
/// `2024-03-15T10:30:00+01:00[Europe/Paris]` round-trips exactly.
///
/// When a zone id is present, the offset is one the zone actually uses at
/// that instant; every constructor and the codec uphold this.
///
/// Equality compares the offset and the zone id as well as the instant:
/// `10:30+01:00` and `09:30Z` name the same instant but are different
/// zoned date-times.
#[derive(Debug, Clone, Copy)]
pub struct ZonedDateTime {
	timestamp: DateTime<FixedOffset>,
	zone: Option<Tz>,
}

impl ZonedDateTime {
	/// Wrap an offset date-time with no zone id annotation.
	pub fn from_offset(timestamp: DateTime<FixedOffset>) -> Self {
		Self {
			timestamp,
			zone: None,
		}
	}

	/// Capture both the offset and the zone id of a zone-aware date-time.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::TimeZone;
	/// use chrono_tz::Europe::Paris;
	/// use wireform_codecs::ZonedDateTime;
	///
	/// let paris = Paris.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
	/// let value = ZonedDateTime::from_zoned(paris);
	/// assert_eq!(value.zone(), Some(Paris));
	/// assert_eq!(value.offset_datetime().offset().local_minus_utc(), 3600);
	/// ```
	pub fn from_zoned(timestamp: DateTime<Tz>) -> Self {
		Self {
			zone: Some(timestamp.timezone()),
			timestamp: timestamp.fixed_offset(),
		}
	}

	/// The offset date-time component.
	pub fn offset_datetime(&self) -> DateTime<FixedOffset> {
		self.timestamp
	}

	/// The zone id annotation, when present.
	pub fn zone(&self) -> Option<Tz> {
		self.zone
	}

	/// The same instant on the UTC timeline.
	pub fn to_utc(&self) -> DateTime<Utc> {
		self.timestamp.with_timezone(&Utc)
	}
}

impl PartialEq for ZonedDateTime {
	fn eq(&self, other: &Self) -> bool {
		// DateTime equality alone compares instants; two values with the
		// same instant but different offsets must not compare equal.
		self.timestamp == other.timestamp
			&& self.timestamp.offset().local_minus_utc()
				== other.timestamp.offset().local_minus_utc()
			&& self.zone == other.zone
	}
}

impl Eq for ZonedDateTime {}

impl fmt::Display for ZonedDateTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&ZonedDateTimeCodec.encode(self))
	}
}

/// Codec bridging [`ZonedDateTime`] and the ISO-8601 extended wire string
///
/// The wire form is an offset date-time followed by an optional bracketed
/// zone id: `2024-03-15T10:30:00+01:00[Europe/Paris]`. The offset is
/// always rendered as `±HH:MM` (never `Z`); a sub-second fraction appears
/// only when non-zero.
///
/// Decoding requires the offset, accepts `Z` as `+00:00` on input, and
/// verifies that a bracketed zone id names a known zone whose offset at
/// that instant matches the one in the string.
///
/// # Examples
///
/// ```
/// use wireform_codecs::ZonedDateTimeCodec;
/// use wireform_core::Codec;
///
/// let codec = ZonedDateTimeCodec;
/// let value = codec.decode("2024-03-15T10:30:00+01:00[Europe/Paris]").unwrap();
/// assert_eq!(codec.encode(&value), "2024-03-15T10:30:00+01:00[Europe/Paris]");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ZonedDateTimeCodec;

impl Codec for ZonedDateTimeCodec {
	type Value = ZonedDateTime;

	fn descriptor(&self) -> &CodecDescriptor {
		&DESCRIPTOR
	}

	fn encode(&self, value: &ZonedDateTime) -> String {
		let mut out = value
			.timestamp
			.to_rfc3339_opts(SecondsFormat::AutoSi, false);
		if let Some(zone) = value.zone {
			out.push('[');
			out.push_str(zone.name());
			out.push(']');
		}
		out
	}

	fn decode(&self, raw: &str) -> Result<ZonedDateTime, CodecError> {
		let (datetime_part, zone) = split_zone_suffix(raw)?;
		let timestamp = DateTime::parse_from_rfc3339(datetime_part)
			.map_err(|err| CodecError::malformed_timestamp(raw, err.to_string()))?;
		if let Some(zone) = zone {
			let expected = zone.offset_from_utc_datetime(&timestamp.naive_utc()).fix();
			if expected.local_minus_utc() != timestamp.offset().local_minus_utc() {
				return Err(CodecError::malformed_timestamp(
					raw,
					format!(
						"offset {} is not used by zone {} at this instant",
						timestamp.offset(),
						zone
					),
				));
			}
		}
		Ok(ZonedDateTime { timestamp, zone })
	}
}

/// Split one optional trailing `[Zone/Id]` annotation off a wire string.
fn split_zone_suffix(raw: &str) -> Result<(&str, Option<Tz>), CodecError> {
	let Some(stripped) = raw.strip_suffix(']') else {
		return Ok((raw, None));
	};
	let Some((datetime_part, zone_id)) = stripped.split_once('[') else {
		return Err(CodecError::malformed_timestamp(
			raw,
			"unmatched ']' in zone annotation",
		));
	};
	let zone = zone_id
		.parse::<Tz>()
		.map_err(|_| CodecError::malformed_timestamp(raw, format!("unknown zone id {zone_id:?}")))?;
	Ok((datetime_part, Some(zone)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono_tz::Asia::Kathmandu;
	use chrono_tz::Europe::Paris;
	use rstest::rstest;

	#[test]
	fn test_encode_with_zone_annotation() {
		let codec = ZonedDateTimeCodec;
		let paris = Paris.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
		assert_eq!(
			codec.encode(&ZonedDateTime::from_zoned(paris)),
			"2024-03-15T10:30:00+01:00[Europe/Paris]"
		);
	}

	#[test]
	fn test_encode_offset_only() {
		let codec = ZonedDateTimeCodec;
		let timestamp = DateTime::parse_from_rfc3339("2024-03-15T10:30:00+05:30").unwrap();
		assert_eq!(
			codec.encode(&ZonedDateTime::from_offset(timestamp)),
			"2024-03-15T10:30:00+05:30"
		);
	}

	#[test]
	fn test_encode_zero_offset_as_numeric() {
		let codec = ZonedDateTimeCodec;
		let timestamp = DateTime::parse_from_rfc3339("2024-03-15T10:30:00Z").unwrap();
		assert_eq!(
			codec.encode(&ZonedDateTime::from_offset(timestamp)),
			"2024-03-15T10:30:00+00:00"
		);
	}

	#[test]
	fn test_decode_full_form() {
		let codec = ZonedDateTimeCodec;
		let value = codec
			.decode("2024-03-15T10:30:00+01:00[Europe/Paris]")
			.unwrap();
		assert_eq!(value.zone(), Some(Paris));
		assert_eq!(
			value.offset_datetime(),
			DateTime::parse_from_rfc3339("2024-03-15T10:30:00+01:00").unwrap()
		);
	}

	#[test]
	fn test_decode_offset_only() {
		let codec = ZonedDateTimeCodec;
		let value = codec.decode("2024-03-15T10:30:00+05:30").unwrap();
		assert_eq!(value.zone(), None);
		assert_eq!(value.offset_datetime().offset().local_minus_utc(), 19800);
	}

	#[test]
	fn test_decode_z_offset_with_zone() {
		let codec = ZonedDateTimeCodec;
		let value = codec.decode("2024-03-15T10:30:00Z[UTC]").unwrap();
		assert_eq!(value.zone(), Some(chrono_tz::UTC));
		// Canonical form spells the offset numerically.
		assert_eq!(codec.encode(&value), "2024-03-15T10:30:00+00:00[UTC]");
	}

	#[test]
	fn test_roundtrip_non_whole_hour_offset() {
		let codec = ZonedDateTimeCodec;
		let kathmandu = Kathmandu.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
		let value = ZonedDateTime::from_zoned(kathmandu);
		let wire = codec.encode(&value);
		assert_eq!(wire, "2024-03-15T10:30:00+05:45[Asia/Kathmandu]");
		assert_eq!(codec.decode(&wire).unwrap(), value);
	}

	#[test]
	fn test_roundtrip_subsecond_fraction() {
		let codec = ZonedDateTimeCodec;
		let value = codec
			.decode("2024-03-15T10:30:00.123456789+01:00[Europe/Paris]")
			.unwrap();
		assert_eq!(
			codec.encode(&value),
			"2024-03-15T10:30:00.123456789+01:00[Europe/Paris]"
		);
	}

	#[test]
	fn test_decode_accepts_both_offsets_of_dst_fold() {
		// Paris leaves DST at 2024-10-27 01:00 UTC; 02:30 local happens
		// twice, once at +02:00 and once at +01:00.
		let codec = ZonedDateTimeCodec;
		for wire in [
			"2024-10-27T02:30:00+02:00[Europe/Paris]",
			"2024-10-27T02:30:00+01:00[Europe/Paris]",
		] {
			let value = codec.decode(wire).unwrap();
			assert_eq!(codec.encode(&value), wire);
		}
	}

	#[rstest]
	#[case("2024-03-15T10:30:00[Europe/Paris]")] // offset missing
	#[case("2024-03-15T10:30:00+02:00[Europe/Paris]")] // offset not used by zone
	#[case("2024-03-15T10:30:00+01:00[Europe/NoSuchCity]")] // unknown zone id
	#[case("2024-03-15T10:30:00+01:00[]")] // empty zone id
	#[case("2024-03-15T10:30:00+01:00]")] // unmatched bracket
	#[case("2024-03-15T10:30:00+01:00[Europe/Paris] ")] // trailing garbage
	#[case("2024-03-15T10:30:00")] // no offset, no zone
	#[case("")]
	fn test_decode_rejects(#[case] wire: &str) {
		let codec = ZonedDateTimeCodec;
		assert!(matches!(
			codec.decode(wire),
			Err(CodecError::MalformedTimestamp { .. })
		));
	}

	#[test]
	fn test_equality_is_offset_sensitive() {
		let at_offset = ZonedDateTime::from_offset(
			DateTime::parse_from_rfc3339("2024-03-15T10:30:00+01:00").unwrap(),
		);
		let at_utc = ZonedDateTime::from_offset(
			DateTime::parse_from_rfc3339("2024-03-15T09:30:00Z").unwrap(),
		);
		assert_eq!(at_offset.to_utc(), at_utc.to_utc());
		assert_ne!(at_offset, at_utc);
	}

	#[test]
	fn test_equality_is_zone_sensitive() {
		let codec = ZonedDateTimeCodec;
		let annotated = codec
			.decode("2024-03-15T10:30:00+01:00[Europe/Paris]")
			.unwrap();
		let bare = codec.decode("2024-03-15T10:30:00+01:00").unwrap();
		assert_ne!(annotated, bare);
	}

	#[test]
	fn test_display_matches_wire_form() {
		let codec = ZonedDateTimeCodec;
		let value = codec
			.decode("2024-03-15T10:30:00+01:00[Europe/Paris]")
			.unwrap();
		assert_eq!(value.to_string(), "2024-03-15T10:30:00+01:00[Europe/Paris]");
	}

	#[test]
	fn test_descriptor() {
		let codec = ZonedDateTimeCodec;
		assert_eq!(codec.descriptor().name(), "ZonedDateTime");
		assert_eq!(codec.descriptor().kind(), WireKind::String);
	}
}
