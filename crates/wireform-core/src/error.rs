//! Error types for codec decode failures.
//!
//! Encoding is total and cannot fail; every error here comes out of
//! [`Codec::decode`](crate::Codec::decode). Decode is strict and
//! all-or-nothing: an error carries the offending input and the reason it
//! was rejected, and is propagated to the host framework unchanged.

use thiserror::Error;

/// Errors raised when a wire string cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
	/// Input is not a valid base-10 signed integer literal.
	#[error("Malformed number {input:?}: {reason}")]
	MalformedNumber {
		/// The rejected wire string.
		input: String,
		/// Why it was rejected.
		reason: String,
	},

	/// Input does not match the expected ISO-8601 variant.
	#[error("Malformed timestamp {input:?}: {reason}")]
	MalformedTimestamp {
		/// The rejected wire string.
		input: String,
		/// Why it was rejected.
		reason: String,
	},
}

impl CodecError {
	/// Build a [`CodecError::MalformedNumber`].
	pub fn malformed_number(input: impl Into<String>, reason: impl Into<String>) -> Self {
		CodecError::MalformedNumber {
			input: input.into(),
			reason: reason.into(),
		}
	}

	/// Build a [`CodecError::MalformedTimestamp`].
	pub fn malformed_timestamp(input: impl Into<String>, reason: impl Into<String>) -> Self {
		CodecError::MalformedTimestamp {
			input: input.into(),
			reason: reason.into(),
		}
	}

	/// The wire string that failed to decode.
	pub fn input(&self) -> &str {
		match self {
			CodecError::MalformedNumber { input, .. } => input,
			CodecError::MalformedTimestamp { input, .. } => input,
		}
	}
}
