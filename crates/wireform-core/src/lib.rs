//! Codec contract for wireform.
//!
//! This crate defines the boundary between a codec adapter and the host
//! serialization framework: the [`Codec`] trait itself, the
//! [`CodecDescriptor`] a codec declares once at construction, the
//! [`CodecError`] kinds a strict decode can raise, and the
//! [`CodecRegistry`] mapping value types to codec instances.
//!
//! The shipped adapters live in `wireform-codecs`; this crate carries no
//! codec implementations of its own.

pub mod codec;
pub mod descriptor;
pub mod error;
pub mod registry;

pub use codec::Codec;
pub use descriptor::{CodecDescriptor, WireKind};
pub use error::CodecError;
pub use registry::CodecRegistry;
