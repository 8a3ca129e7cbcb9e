//! Typed codec registry.
//!
//! The host framework discovers which codec to use for a value type
//! through an explicit mapping from type identity to codec instance,
//! populated at process start. The registry is a plain value - construct
//! it, register codecs, share it; there is no global state.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::codec::Codec;
use crate::descriptor::CodecDescriptor;

/// Type-erased registry slot.
///
/// The descriptor is kept alongside the erased codec so schema metadata
/// can be listed without knowing any value type.
struct RegistryEntry {
	descriptor: CodecDescriptor,
	codec: Box<dyn Any + Send + Sync>,
}

/// Registry mapping value types to codec instances
///
/// # Examples
///
/// ```
/// use wireform_core::{Codec, CodecDescriptor, CodecError, CodecRegistry, WireKind};
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
/// let mut registry = CodecRegistry::new();
/// registry.register(PortCodec);
///
/// let codec = registry.get::<u16>().unwrap();
/// assert_eq!(codec.encode(&443), "443");
/// assert_eq!(registry.descriptor_for::<u16>().unwrap().name(), "Port");
/// ```
pub struct CodecRegistry {
	entries: HashMap<TypeId, RegistryEntry>,
}

impl CodecRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Register `codec` for its value type.
	///
	/// Re-registering the same value type replaces the previous codec.
	pub fn register<C>(&mut self, codec: C)
	where
		C: Codec + 'static,
		C::Value: 'static,
	{
		let descriptor = codec.descriptor().clone();
		let erased: Box<dyn Codec<Value = C::Value>> = Box::new(codec);
		self.entries.insert(
			TypeId::of::<C::Value>(),
			RegistryEntry {
				descriptor,
				codec: Box::new(erased),
			},
		);
	}

	/// Look up the codec registered for value type `T`.
	pub fn get<T: 'static>(&self) -> Option<&dyn Codec<Value = T>> {
		self.entries
			.get(&TypeId::of::<T>())
			.and_then(|entry| entry.codec.downcast_ref::<Box<dyn Codec<Value = T>>>())
			.map(|codec| codec.as_ref())
	}

	/// Descriptor registered for value type `T`.
	pub fn descriptor_for<T: 'static>(&self) -> Option<&CodecDescriptor> {
		self.entries
			.get(&TypeId::of::<T>())
			.map(|entry| &entry.descriptor)
	}

	/// All registered descriptors, in no particular order.
	///
	/// This is the schema-metadata surface: the host framework lists these
	/// to document which logical types travel in which wire kind.
	pub fn descriptors(&self) -> impl Iterator<Item = &CodecDescriptor> {
		self.entries.values().map(|entry| &entry.descriptor)
	}

	/// Number of registered codecs.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the registry has no codecs.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for CodecRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for CodecRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CodecRegistry")
			.field("descriptors", &self.descriptors().collect::<Vec<_>>())
			.finish()
	}
}
