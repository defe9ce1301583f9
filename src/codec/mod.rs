//! Type registration for the shapes this engine persists
//!
//! The engine only declares its shapes; the host decides how they are stored.
//! [`TypeRegistry`] is a ready-made JSON implementation.

pub mod registry;

pub use registry::{Codec, CodecError, Registered, TypeRegistry};
