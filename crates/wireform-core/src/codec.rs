//! The bidirectional codec contract.

use crate::descriptor::CodecDescriptor;
use crate::error::CodecError;

/// A paired encode/decode bridge between an in-memory value and its
/// canonical wire string
///
/// Implementations are stateless: no fields, no caching, no configuration
/// knobs. `encode` is total - every valid value has exactly one wire form.
/// `decode` is strict and all-or-nothing: it must consume the entire input
/// and never truncates or coerces. Decoding any `encode` output yields a
/// value equal to the original, and re-encoding that value reproduces the
/// same bytes.
///
/// The `Send + Sync` bound makes every codec safe for unsynchronized
/// concurrent reuse.
///
/// # Examples
///
/// ```
/// use wireform_core::{Codec, CodecDescriptor, CodecError, WireKind};
///
/// struct PortCodec;
///
/// const DESCRIPTOR: CodecDescriptor = CodecDescriptor::new("Port", WireKind::String);
///
/// impl Codec for PortCodec {
///     type Value = u16;
///
///     fn descriptor(&self) -> &CodecDescriptor {
///         &DESCRIPTOR
///     }
///
///     fn encode(&self, value: &u16) -> String {
///         value.to_string()
///     }
///
///     fn decode(&self, raw: &str) -> Result<u16, CodecError> {
///         raw.parse()
///             .map_err(|_| CodecError::malformed_number(raw, "expected a port number"))
///     }
/// }
///
/// let codec = PortCodec;
/// assert_eq!(codec.encode(&8080), "8080");
/// assert_eq!(codec.decode("8080").unwrap(), 8080);
/// assert!(codec.decode("https").is_err());
/// ```
pub trait Codec: Send + Sync {
	/// The in-memory type this codec bridges.
	type Value;

	/// The static contract declared to the host framework.
	fn descriptor(&self) -> &CodecDescriptor;

	/// Render the canonical wire string for `value`.
	fn encode(&self, value: &Self::Value) -> String;

	/// Parse a wire string back into the in-memory value.
	///
	/// The whole input must match; trailing content is an error.
	fn decode(&self, raw: &str) -> Result<Self::Value, CodecError>;
}
