//! The codec adapters shipped with wireform.
//!
//! Four stateless adapters, each bridging one value type to its canonical
//! string wire form:
//!
//! - [`BigIntegerCodec`] - `num_bigint::BigInt` as a signed decimal string
//! - [`ZonedDateTimeCodec`] - [`ZonedDateTime`] as
//!   `2024-03-15T10:30:00+01:00[Europe/Paris]`
//! - [`InstantCodec`] - `chrono::DateTime<Utc>` as `2024-03-15T10:30:00Z`
//! - [`LocalDateTimeCodec`] - `chrono::NaiveDateTime` as
//!   `2024-03-15T10:30:00`
//!
//! Every adapter declares a string wire kind, so the payload is carried as
//! a quoted token and never routed through a native number. The
//! [`serde`] module exposes each adapter as a `#[serde(with = "…")]`
//! bridge for embedding these values in serde-derived types.

pub mod big_integer;
pub mod instant;
pub mod local_date_time;
pub mod serde;
pub mod zoned_date_time;

pub use big_integer::BigIntegerCodec;
pub use instant::InstantCodec;
pub use local_date_time::LocalDateTimeCodec;
pub use zoned_date_time::{ZonedDateTime, ZonedDateTimeCodec};

use wireform_core::CodecRegistry;

/// Registry preloaded with the four shipped codecs.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use wireform_codecs::default_registry;
///
/// let registry = default_registry();
/// let codec = registry.get::<DateTime<Utc>>().unwrap();
/// assert_eq!(codec.descriptor().name(), "Instant");
/// ```
pub fn default_registry() -> CodecRegistry {
	let mut registry = CodecRegistry::new();
	registry.register(BigIntegerCodec);
	registry.register(InstantCodec);
	registry.register(LocalDateTimeCodec);
	registry.register(ZonedDateTimeCodec);
	registry
}
