//! Scale catalog and scale construction
//!
//! `catalog` maps mode names to ascending interval patterns; `builder`
//! walks a pattern between two pitches to produce the scale itself.

pub mod builder;
pub mod catalog;

pub use builder::build_scale;
pub use catalog::mode_pattern;
