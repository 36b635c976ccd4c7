//! Renderers producing font-consumable output
//!
//! Currently a single target: the per-note glyph code strings of the
//! Ambitus notation font.

pub mod glyph;

pub use glyph::{render_glyphs, GlyphOptions, Notehead, OutOfRangeWarning, RenderOutput};
