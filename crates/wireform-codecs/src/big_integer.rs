//! Arbitrary-precision integer codec.

use std::str::FromStr;

use num_bigint::BigInt;
use wireform_core::{Codec, CodecDescriptor, CodecError, WireKind};

const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("BigInteger", WireKind::String);

/// Codec bridging [`BigInt`] and its signed decimal wire string
///
/// The wire form is the plain base-10 rendering: an optional leading `-`,
/// then digits, with no grouping separators and no leading `+`. Zero is
/// `"0"`. The payload travels as a quoted string so consumers with
/// fixed-width number types never round it through a float.
///
/// Decoding accepts leading zeros (`"007"` is 7) but rejects a leading
/// `+`, an empty string, a bare sign, and anything containing a
/// non-digit.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use wireform_codecs::BigIntegerCodec;
/// use wireform_core::Codec;
///
/// let codec = BigIntegerCodec;
/// assert_eq!(codec.encode(&BigInt::from(-42)), "-42");
/// assert_eq!(codec.decode("123").unwrap(), BigInt::from(123));
/// assert!(codec.decode("12.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerCodec;

impl BigIntegerCodec {
	/// Check the shape of a decimal literal before handing it to the
	/// arbitrary-precision parser, which is laxer than the wire format
	/// (it accepts a leading `+`).
	fn validate(raw: &str) -> Result<(), &'static str> {
		let digits = raw.strip_prefix('-').unwrap_or(raw);
		if digits.is_empty() {
			return Err(if raw.is_empty() {
				"empty string"
			} else {
				"sign without digits"
			});
		}
		if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
			return Err("expected only decimal digits after an optional leading '-'");
		}
		Ok(())
	}
}

impl Codec for BigIntegerCodec {
	type Value = BigInt;

	fn descriptor(&self) -> &CodecDescriptor {
		&DESCRIPTOR
	}

	fn encode(&self, value: &BigInt) -> String {
		value.to_string()
	}

	fn decode(&self, raw: &str) -> Result<BigInt, CodecError> {
		Self::validate(raw).map_err(|reason| CodecError::malformed_number(raw, reason))?;
		BigInt::from_str(raw).map_err(|err| CodecError::malformed_number(raw, err.to_string()))
	}
}
