//! Error types for scale construction and glyph rendering
//!
//! Parse and lookup failures are fatal to the call that produced them;
//! out-of-range pitches during rendering are not errors and are collected
//! as [`crate::renderers::glyph::OutOfRangeWarning`] values instead.

use thiserror::Error;

/// Top-level error type for the library entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmbitusError {
    /// Malformed pitch text (bad letter, mixed accidental marks, bad octave)
    #[error("invalid pitch spec {0:?}")]
    InvalidFormat(String),

    /// Scale or mode name not present in the catalog
    #[error("unknown scale or mode {0:?}")]
    UnknownScale(String),

    /// Clef name not one of treble, bass, alto, tenor
    #[error("unknown clef {0:?}")]
    InvalidClef(String),

    /// Notehead code not one of q, h, w
    #[error("unknown notehead {0:?}")]
    InvalidNotehead(String),
}
