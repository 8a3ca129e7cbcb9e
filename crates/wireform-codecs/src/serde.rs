//! Serde bridges for the shipped codecs.
//!
//! Each module is shaped for `#[serde(with = "…")]`: `serialize` writes
//! exactly one string token through the host `Serializer`, `deserialize`
//! reads exactly one string token back through the codec. Decode errors
//! surface through the host framework's own error type via
//! [`serde::de::Error::custom`]; nothing is swallowed or coerced.
//!
//! [`ZonedDateTime`] is this crate's own type, so it implements
//! `Serialize`/`Deserialize` directly and needs no `with` attribute.
//!
//! # Examples
//!
//! ```
//! use chrono::{DateTime, NaiveDateTime, Utc};
//! use num_bigint::BigInt;
//! use serde::{Deserialize, Serialize};
//! use wireform_codecs::ZonedDateTime;
//!
//! #[derive(Serialize, Deserialize)]
//! struct AuditRecord {
//!     #[serde(with = "wireform_codecs::serde::big_integer")]
//!     sequence: BigInt,
//!     #[serde(with = "wireform_codecs::serde::instant")]
//!     recorded_at: DateTime<Utc>,
//!     #[serde(with = "wireform_codecs::serde::local_date_time")]
//!     business_date: NaiveDateTime,
//!     origin: ZonedDateTime,
//! }
//! ```

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::zoned_date_time::{ZonedDateTime, ZonedDateTimeCodec};
use wireform_core::Codec;

/// Bridge for `num_bigint::BigInt` fields.
pub mod big_integer {
	use num_bigint::BigInt;
	use serde::de::{Deserialize, Deserializer, Error as _};
	use serde::ser::Serializer;

	use crate::big_integer::BigIntegerCodec;
	use wireform_core::Codec;

	/// Serialize a `BigInt` as its decimal wire string.
	pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&BigIntegerCodec.encode(value))
	}

	/// Deserialize a `BigInt` from its decimal wire string.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		BigIntegerCodec.decode(&raw).map_err(D::Error::custom)
	}
}

/// Bridge for `chrono::DateTime<Utc>` fields.
pub mod instant {
	use chrono::{DateTime, Utc};
	use serde::de::{Deserialize, Deserializer, Error as _};
	use serde::ser::Serializer;

	use crate::instant::InstantCodec;
	use wireform_core::Codec;

	/// Serialize an instant as its RFC 3339 `Z` wire string.
	pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&InstantCodec.encode(value))
	}

	/// Deserialize an instant from its RFC 3339 `Z` wire string.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		InstantCodec.decode(&raw).map_err(D::Error::custom)
	}
}

/// Bridge for `chrono::NaiveDateTime` fields.
pub mod local_date_time {
	use chrono::NaiveDateTime;
	use serde::de::{Deserialize, Deserializer, Error as _};
	use serde::ser::Serializer;

	use crate::local_date_time::LocalDateTimeCodec;
	use wireform_core::Codec;

	/// Serialize a local date-time as its zone-free ISO-8601 wire string.
	pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&LocalDateTimeCodec.encode(value))
	}

	/// Deserialize a local date-time from its zone-free ISO-8601 wire string.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		LocalDateTimeCodec.decode(&raw).map_err(D::Error::custom)
	}
}

impl Serialize for ZonedDateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&ZonedDateTimeCodec.encode(self))
	}
}

impl<'de> Deserialize<'de> for ZonedDateTime {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		ZonedDateTimeCodec.decode(&raw).map_err(D::Error::custom)
	}
}
