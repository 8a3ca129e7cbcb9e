//! # Wireform
//!
//! String-wire codecs for big integers and date-times, built on serde.
//!
//! Some value types do not survive a trip through a native JSON number: an
//! arbitrary-precision integer overflows every fixed-width consumer, and a
//! date-time flattened to a float loses its offset, zone and sub-second
//! precision. Wireform ships a small set of stateless codec adapters that
//! carry these values as canonical ISO-8601 / decimal **strings** instead,
//! embedded inside whatever structured format the host serde backend
//! produces.
//!
//! ## Shipped codecs
//!
//! - [`BigIntegerCodec`] - `num_bigint::BigInt` as a signed decimal string
//! - [`ZonedDateTimeCodec`] - [`ZonedDateTime`] as an ISO-8601 extended
//!   string with offset and bracketed zone id
//! - [`InstantCodec`] - `chrono::DateTime<Utc>` as an RFC 3339 string
//!   terminated with `Z`
//! - [`LocalDateTimeCodec`] - `chrono::NaiveDateTime` as a zone-free
//!   ISO-8601 string
//!
//! All four declare [`WireKind::String`] in their descriptor, are pure in
//! both directions, and are trivially safe to share across threads.
//!
//! ## Feature Flags
//!
//! - `core` - the codec contract: [`Codec`], [`CodecDescriptor`],
//!   [`CodecError`], [`CodecRegistry`]
//! - `codecs` - the shipped adapters and their serde bridges (implies
//!   `core`)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use num_bigint::BigInt;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Account {
//!     name: String,
//!     #[serde(with = "wireform::codecs::serde::big_integer")]
//!     balance: BigInt,
//! }
//!
//! let account = Account {
//!     name: "treasury".to_string(),
//!     balance: BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap(),
//! };
//!
//! let json = serde_json::to_string(&account).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"name":"treasury","balance":"123456789012345678901234567890"}"#
//! );
//! assert_eq!(serde_json::from_str::<Account>(&json).unwrap(), account);
//! ```

// Module re-exports
#[cfg(feature = "core")]
pub use wireform_core as core;

#[cfg(feature = "codecs")]
pub use wireform_codecs as codecs;

// Re-export the codec contract
#[cfg(feature = "core")]
pub use wireform_core::{Codec, CodecDescriptor, CodecError, CodecRegistry, WireKind};

// Re-export the shipped adapters and the value type they define
#[cfg(feature = "codecs")]
pub use wireform_codecs::{
	BigIntegerCodec, InstantCodec, LocalDateTimeCodec, ZonedDateTime, ZonedDateTimeCodec,
	default_registry,
};

pub mod prelude {
	//! Everything needed to register and use the shipped codecs.

	#[cfg(feature = "core")]
	pub use crate::{Codec, CodecDescriptor, CodecError, CodecRegistry, WireKind};

	#[cfg(feature = "codecs")]
	pub use crate::{
		BigIntegerCodec, InstantCodec, LocalDateTimeCodec, ZonedDateTime, ZonedDateTimeCodec,
		default_registry,
	};

	// External
	pub use serde::{Deserialize, Serialize};
}
