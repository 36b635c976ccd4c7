//! Clef configuration: reference pitches, legal ranges, prefix glyphs
//!
//! Each clef entry pins the pitch on the middle staff line, the inclusive
//! range the font can draw (the 5-line staff plus 3 ledger lines above and
//! below, diatonic offsets -10..+10 from the reference), and the single
//! character that selects the clef glyph at the start of the output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmbitusError;
use crate::models::pitch::{Letter, Pitch};

/// The four clefs supported by the font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    Treble,
    Bass,
    Alto,
    Tenor,
}

/// Static per-clef configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClefInfo {
    /// Pitch on the middle staff line (diatonic offset 0)
    pub reference: Pitch,
    /// Lowest drawable pitch, inclusive
    pub low: Pitch,
    /// Highest drawable pitch, inclusive
    pub high: Pitch,
    /// Clef glyph selector placed at the very start of the output
    pub prefix: char,
}

const fn pitch(letter: Letter, accidental: i32, octave: i32) -> Pitch {
    Pitch {
        letter,
        accidental,
        octave,
    }
}

static TREBLE: ClefInfo = ClefInfo {
    reference: pitch(Letter::B, 0, 4),
    low: pitch(Letter::F, -1, 3),
    high: pitch(Letter::E, 1, 6),
    prefix: 'T',
};

static BASS: ClefInfo = ClefInfo {
    reference: pitch(Letter::D, 0, 3),
    low: pitch(Letter::A, -1, 1),
    high: pitch(Letter::G, 1, 4),
    prefix: 'B',
};

static ALTO: ClefInfo = ClefInfo {
    reference: pitch(Letter::C, 0, 4),
    low: pitch(Letter::G, -1, 2),
    high: pitch(Letter::F, 1, 5),
    prefix: 'A',
};

static TENOR: ClefInfo = ClefInfo {
    reference: pitch(Letter::A, 0, 3),
    low: pitch(Letter::E, -1, 2),
    high: pitch(Letter::D, 1, 5),
    prefix: 't',
};

impl Clef {
    /// All supported clefs
    pub const ALL: [Clef; 4] = [Clef::Treble, Clef::Bass, Clef::Alto, Clef::Tenor];

    /// Static configuration for this clef
    pub fn info(self) -> &'static ClefInfo {
        match self {
            Clef::Treble => &TREBLE,
            Clef::Bass => &BASS,
            Clef::Alto => &ALTO,
            Clef::Tenor => &TENOR,
        }
    }

    /// Lowercase clef name
    pub fn name(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
            Clef::Alto => "alto",
            Clef::Tenor => "tenor",
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Clef {
    type Err = AmbitusError;

    fn from_str(s: &str) -> Result<Clef, AmbitusError> {
        Clef::ALL
            .into_iter()
            .find(|clef| clef.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AmbitusError::InvalidClef(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("treble".parse::<Clef>().unwrap(), Clef::Treble);
        assert_eq!("BASS".parse::<Clef>().unwrap(), Clef::Bass);
        assert_eq!(" tenor ".parse::<Clef>().unwrap(), Clef::Tenor);
        assert_eq!(
            "soprano".parse::<Clef>(),
            Err(AmbitusError::InvalidClef("soprano".to_string()))
        );
    }

    #[test]
    fn test_reference_pitches() {
        assert_eq!(Clef::Treble.info().reference, Pitch::parse("B4").unwrap());
        assert_eq!(Clef::Bass.info().reference, Pitch::parse("D3").unwrap());
        assert_eq!(Clef::Alto.info().reference, Pitch::parse("C4").unwrap());
        assert_eq!(Clef::Tenor.info().reference, Pitch::parse("A3").unwrap());
    }

    #[test]
    fn test_ranges_span_three_ledger_lines_each_side() {
        // Every clef range covers diatonic offsets -10..+10 around the
        // reference, flattened at the low extreme and sharpened at the high.
        let offset = |p: Pitch, r: Pitch| {
            p.letter.diatonic_index() - r.letter.diatonic_index() + 7 * (p.octave - r.octave)
        };
        for clef in Clef::ALL {
            let info = clef.info();
            assert_eq!(offset(info.low, info.reference), -10, "{clef} low bound");
            assert_eq!(offset(info.high, info.reference), 10, "{clef} high bound");
            assert_eq!(info.low.accidental, -1);
            assert_eq!(info.high.accidental, 1);
        }
    }
}
