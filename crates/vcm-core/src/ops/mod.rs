//! Color operations over the loop-indexed layers of a mesh.
//!
//! Every operation validates its inputs against the mesh before touching any
//! sample, runs one pass over the loop range, then marks the mesh dirty. A
//! pass only ever reads and writes the samples of the loop it is visiting,
//! so the loop range is split across the rayon pool.

pub mod fill;
pub mod invert;
pub mod luminosity;
pub mod transfer;

pub use fill::fill;
pub use invert::invert;
pub use luminosity::{convert, rgb_to_luminosity};
pub use transfer::transfer;
