//! Modal scale construction and glyph-code generation for the Ambitus
//! notation font.
//!
//! The library builds the pitch sequence of a classic mode between two
//! bounds and renders it as the compact per-note code strings the font
//! consumes. The interactive session in `main.rs` is a thin prompt loop
//! over these entry points.

pub mod error;
pub mod models;
pub mod renderers;
pub mod scale;

// Re-export commonly used types
pub use error::AmbitusError;
pub use models::clef::Clef;
pub use models::pitch::{Letter, Pitch};
pub use renderers::glyph::{render_glyphs, GlyphOptions, Notehead, OutOfRangeWarning, RenderOutput};
pub use scale::builder::build_scale;
pub use scale::catalog::mode_pattern;
