//! Glyph-code rendering for the Ambitus notation font
//!
//! Every pitch maps to one token: accidental marks, the notehead letter,
//! the diatonic offset from the clef's middle line, and optionally the
//! stemless-variant suffix. The font encodes offsets as single digits, so
//! the extremes +10/-10 are written `0`/`-0`; offset 0 is written as
//! nothing at all. Pitches the clef cannot draw produce no token, only a
//! collected [`OutOfRangeWarning`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmbitusError;
use crate::models::clef::Clef;
use crate::models::pitch::Pitch;

/// Notehead shapes supported by the font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notehead {
    Quarter,
    Half,
    Whole,
}

impl Notehead {
    /// One-letter font code for the notehead glyph
    pub fn code(self) -> char {
        match self {
            Notehead::Quarter => 'q',
            Notehead::Half => 'h',
            Notehead::Whole => 'w',
        }
    }

    /// Whole notes have no stem, so no stemless variant exists for them
    pub fn has_stem(self) -> bool {
        !matches!(self, Notehead::Whole)
    }
}

impl FromStr for Notehead {
    type Err = AmbitusError;

    fn from_str(s: &str) -> Result<Notehead, AmbitusError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" => Ok(Notehead::Quarter),
            "h" => Ok(Notehead::Half),
            "w" => Ok(Notehead::Whole),
            _ => Err(AmbitusError::InvalidNotehead(s.to_string())),
        }
    }
}

/// Rendering options for one glyph string
///
/// Defaults match the interactive session: treble clef, quarter noteheads
/// with stems, `:` separators, no extra prefix, `:|` terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphOptions {
    pub clef: Clef,
    pub notehead: Notehead,
    pub with_stem: bool,
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
}

impl Default for GlyphOptions {
    fn default() -> GlyphOptions {
        GlyphOptions {
            clef: Clef::Treble,
            notehead: Notehead::Quarter,
            with_stem: true,
            separator: ":".to_string(),
            prefix: String::new(),
            suffix: ":|".to_string(),
        }
    }
}

/// A pitch skipped during rendering because the clef cannot draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfRangeWarning {
    pub pitch: Pitch,
    pub clef: Clef,
    pub low: Pitch,
    pub high: Pitch,
}

impl fmt::Display for OutOfRangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "note {} out of range for {} clef ({}-{})",
            self.pitch, self.clef, self.low, self.high
        )
    }
}

/// Rendered glyph string plus the warnings collected along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    pub warnings: Vec<OutOfRangeWarning>,
}

// Transient per-note token fields, assembled then immediately encoded.
struct Token {
    accidental: String,
    head: char,
    offset: i32,
    stemless: bool,
}

impl Token {
    fn encode(&self) -> String {
        let offset = match self.offset {
            0 => String::new(),
            10 => "0".to_string(),
            -10 => "-0".to_string(),
            n => n.to_string(),
        };
        let stem = if self.stemless { "s" } else { "" };
        format!("{}{}{}{}", self.accidental, self.head, offset, stem)
    }
}

/// Signed diatonic step count from `reference` up to `pitch`
fn diatonic_distance(pitch: Pitch, reference: Pitch) -> i32 {
    pitch.letter.diatonic_index() - reference.letter.diatonic_index()
        + 7 * (pitch.octave - reference.octave)
}

/// Render a pitch sequence as one glyph string for the font
///
/// Out-of-range pitches are skipped, each producing a warning in the
/// returned [`RenderOutput`]; rendering always succeeds for the rest.
pub fn render_glyphs(notes: &[Pitch], options: &GlyphOptions) -> RenderOutput {
    let info = options.clef.info();
    let mut tokens = Vec::with_capacity(notes.len());
    let mut warnings = Vec::new();

    for &note in notes {
        let offset = diatonic_distance(note, info.reference);
        // Height bounds admit enharmonic twins of the extremes (F6 for a
        // ceiling of E#6) whose staff position is off the glyph grid, so
        // the offset is checked as well.
        if note.height() < info.low.height()
            || note.height() > info.high.height()
            || !(-10..=10).contains(&offset)
        {
            let warning = OutOfRangeWarning {
                pitch: note,
                clef: options.clef,
                low: info.low,
                high: info.high,
            };
            log::warn!("{warning}");
            warnings.push(warning);
            continue;
        }
        let token = Token {
            accidental: note.accidental_marks(),
            head: options.notehead.code(),
            offset,
            stemless: !options.with_stem && options.notehead.has_stem(),
        };
        tokens.push(token.encode());
    }

    let text = format!(
        "{}{}{}{}",
        info.prefix,
        options.prefix,
        tokens.join(&options.separator),
        options.suffix
    );
    RenderOutput { text, warnings }
}
