//! Vertex Color Master core — domain layer for per-loop color editing.
//!
//! This crate contains the mesh/layer store, channel addressing, and the four
//! color operations (luminosity, channel copy/swap, fill, invert). No host,
//! UI or GPU dependencies.

pub mod channel;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod request;

// Re-exports for convenience.
pub use channel::{Channel, ChannelSet, index_of};
pub use error::{Outcome, ParseChannelError, VertexColorError};
pub use mesh::{ColorLayer, LayerId, LayerMut, LoopColor, Mesh};
pub use ops::{convert, fill, invert, rgb_to_luminosity, transfer};
pub use request::{FillRequest, InvertRequest, LuminosityRequest, TransferRequest};
