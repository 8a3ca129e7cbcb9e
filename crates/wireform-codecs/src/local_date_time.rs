//! Local date-time codec.

use chrono::NaiveDateTime;
use wireform_core::{Codec, CodecDescriptor, CodecError, WireKind};

const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("LocalDateTime", WireKind::String);

/// Accepted input shapes, tried in order. Seconds are optional on the
/// wire (ISO-8601 allows omitting them) but always present in encoded
/// output.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Codec bridging [`NaiveDateTime`] and the zone-free ISO-8601 wire string
///
/// The wire form carries no offset and no zone id: `2024-03-15T10:30:00`,
/// with a sub-second fraction only when non-zero. A local date-time is
/// defined to be zone-free, so decoding a string that does carry an
/// offset or zone suffix fails rather than silently dropping it - the
/// dropped suffix would change which instant the value names.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wireform_codecs::LocalDateTimeCodec;
/// use wireform_core::Codec;
///
/// let codec = LocalDateTimeCodec;
/// let value = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(10, 30, 0)
///     .unwrap();
/// assert_eq!(codec.encode(&value), "2024-03-15T10:30:00");
/// assert!(codec.decode("2024-03-15T10:30:00+01:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeCodec;

impl Codec for LocalDateTimeCodec {
	type Value = NaiveDateTime;

	fn descriptor(&self) -> &CodecDescriptor {
		&DESCRIPTOR
	}

	fn encode(&self, value: &NaiveDateTime) -> String {
		value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
	}

	fn decode(&self, raw: &str) -> Result<NaiveDateTime, CodecError> {
		for format in INPUT_FORMATS {
			if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
				return Ok(parsed);
			}
		}
		Err(CodecError::malformed_timestamp(
			raw,
			"expected an ISO-8601 local date-time without offset or zone",
		))
	}
}
