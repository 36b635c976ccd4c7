//! Spelled pitch representation
//!
//! A [`Pitch`] is a diatonic letter plus a signed accidental count plus an
//! octave, i.e. a *spelling*, not an acoustic frequency. Enharmonically
//! identical spellings are distinct values: `B3` and `Cb4` share the same
//! [`Pitch::height`] but are not equal, and their `partial_cmp` is `None`.
//! Ordering is by height alone; equality is structural.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmbitusError;

/// The seven diatonic letter classes, cyclically ordered C..B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Position within the octave, C-based (C=0 .. B=6)
    pub fn diatonic_index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Semitone position of the natural letter within the octave
    pub fn semitone_base(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Parse a letter character, case-insensitively
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Canonical uppercase character
    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Next letter upward; the flag is true when wrapping B -> C into the
    /// next octave
    pub fn succ(self) -> (Letter, bool) {
        match self {
            Letter::C => (Letter::D, false),
            Letter::D => (Letter::E, false),
            Letter::E => (Letter::F, false),
            Letter::F => (Letter::G, false),
            Letter::G => (Letter::A, false),
            Letter::A => (Letter::B, false),
            Letter::B => (Letter::C, true),
        }
    }

    /// Previous letter downward; the flag is true when wrapping C -> B into
    /// the octave below
    pub fn pred(self) -> (Letter, bool) {
        match self {
            Letter::C => (Letter::B, true),
            Letter::D => (Letter::C, false),
            Letter::E => (Letter::D, false),
            Letter::F => (Letter::E, false),
            Letter::G => (Letter::F, false),
            Letter::A => (Letter::G, false),
            Letter::B => (Letter::A, false),
        }
    }
}

/// A spelled pitch: letter + accidental offset + octave
///
/// `accidental` counts sharps when positive and flats when negative
/// (0 = natural). The parser only accepts octaves 1-6, but the scale
/// builder may produce values beyond that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub accidental: i32,
    pub octave: i32,
}

/// Lowest octave digit accepted in pitch text
pub const MIN_OCTAVE: i32 = 1;
/// Highest octave digit accepted in pitch text
pub const MAX_OCTAVE: i32 = 6;

impl Pitch {
    /// Create a pitch from its parts
    pub fn new(letter: Letter, accidental: i32, octave: i32) -> Pitch {
        Pitch {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse pitch text: one letter, zero or more accidental marks of a
    /// single polarity (`b` or `#`), one octave digit 1-6
    ///
    /// Examples: `C4`, `f#3`, `Bbb2`. Mixed marks such as `Cb#4` are
    /// rejected rather than summed.
    pub fn parse(text: &str) -> Result<Pitch, AmbitusError> {
        let invalid = || AmbitusError::InvalidFormat(text.to_string());
        let chars: Vec<char> = text.chars().collect();
        let (&first, rest) = chars.split_first().ok_or_else(invalid)?;
        let letter = Letter::from_char(first).ok_or_else(invalid)?;
        let (&last, marks) = rest.split_last().ok_or_else(invalid)?;

        let flats = marks.iter().filter(|&&c| c == 'b').count();
        let sharps = marks.iter().filter(|&&c| c == '#').count();
        if flats + sharps != marks.len() || (flats > 0 && sharps > 0) {
            return Err(invalid());
        }
        let accidental = sharps as i32 - flats as i32;

        let octave = last.to_digit(10).map(|d| d as i32).ok_or_else(invalid)?;
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(invalid());
        }

        Ok(Pitch::new(letter, accidental, octave))
    }

    /// Semitone position used as the ordering key (C0 = 0)
    ///
    /// Enharmonic spellings collide here; that is the point.
    pub fn height(&self) -> i32 {
        self.letter.semitone_base() + self.accidental + 12 * self.octave
    }

    /// Accidental marks in canonical text form (`bb`, `b`, ``, `#`, `##`, ...)
    pub fn accidental_marks(&self) -> String {
        let mark = if self.accidental < 0 { 'b' } else { '#' };
        std::iter::repeat(mark)
            .take(self.accidental.unsigned_abs() as usize)
            .collect()
    }

    /// The pitch one diatonic letter up, accidental reset to natural,
    /// octave bumped on the B -> C wrap
    pub fn next_diatonic(&self) -> Pitch {
        let (letter, wrapped) = self.letter.succ();
        Pitch::new(letter, 0, self.octave + i32::from(wrapped))
    }

    /// The pitch one diatonic letter down, accidental reset to natural,
    /// octave dropped on the C -> B wrap
    pub fn prev_diatonic(&self) -> Pitch {
        let (letter, wrapped) = self.letter.pred();
        Pitch::new(letter, 0, self.octave - i32::from(wrapped))
    }

    /// Same spelling one octave higher (height + 12)
    pub fn octave_up(&self) -> Pitch {
        Pitch::new(self.letter, self.accidental, self.octave + 1)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter.as_char(),
            self.accidental_marks(),
            self.octave
        )
    }
}

impl FromStr for Pitch {
    type Err = AmbitusError;

    fn from_str(s: &str) -> Result<Pitch, AmbitusError> {
        Pitch::parse(s)
    }
}

/// Ordering is by height only, so it is partial: two different spellings
/// of the same height (`B3` vs `Cb4`) are neither less nor greater.
impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Pitch) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.height().cmp(&other.height()) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}
