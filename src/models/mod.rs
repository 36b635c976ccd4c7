//! Data models for the scale builder and glyph renderer
//!
//! The value types here are immutable and `Copy`; everything downstream
//! (catalog lookup, scale walking, rendering) is a pure function over them.

pub mod clef;
pub mod pitch;

// Re-export commonly used types
pub use clef::{Clef, ClefInfo};
pub use pitch::{Letter, Pitch};
