//! UTC instant codec.

use chrono::{DateTime, SecondsFormat, Utc};
use wireform_core::{Codec, CodecDescriptor, CodecError, WireKind};

const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("Instant", WireKind::String);

/// Codec bridging [`DateTime<Utc>`] and its RFC 3339 wire string
///
/// An instant is a zone-agnostic point on the UTC timeline, so the wire
/// form always ends in `Z`: `2024-03-15T10:30:00Z`. A sub-second fraction
/// appears only when non-zero, in 3, 6 or 9 digit groups, preserving up
/// to nanosecond resolution.
///
/// Decoding accepts `Z` and the equivalent `+00:00`/`-00:00` spellings.
/// Any non-zero offset and any bracketed zone annotation are rejected: an
/// instant carries no civil-time context to attach them to.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use wireform_codecs::InstantCodec;
/// use wireform_core::Codec;
///
/// let codec = InstantCodec;
/// let instant = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
/// assert_eq!(codec.encode(&instant), "2024-03-15T10:30:00Z");
/// assert_eq!(codec.decode("2024-03-15T10:30:00Z").unwrap(), instant);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantCodec;

impl Codec for InstantCodec {
	type Value = DateTime<Utc>;

	fn descriptor(&self) -> &CodecDescriptor {
		&DESCRIPTOR
	}

	fn encode(&self, value: &DateTime<Utc>) -> String {
		value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
	}

	fn decode(&self, raw: &str) -> Result<DateTime<Utc>, CodecError> {
		let parsed = DateTime::parse_from_rfc3339(raw)
			.map_err(|err| CodecError::malformed_timestamp(raw, err.to_string()))?;
		if parsed.offset().local_minus_utc() != 0 {
			return Err(CodecError::malformed_timestamp(
				raw,
				"an instant is always UTC; non-zero offsets are not valid here",
			));
		}
		Ok(parsed.with_timezone(&Utc))
	}
}
