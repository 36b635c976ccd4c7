//! Static catalog of mode interval patterns
//!
//! The seven classic modes are rotations of the major (Ionian) pattern.
//! The catalog is built once and never mutated; lookup is case-insensitive
//! and also accepts the two-letter abbreviations the interactive session
//! uses (IO, DO, PH, LY, MI, AE, LO).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::AmbitusError;

/// Ascending interval pattern of the major scale, in semitones
pub const MAJOR_PATTERN: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Number of degrees per octave in the modal/diatonic family
pub const DEGREES: usize = MAJOR_PATTERN.len();

// (full name, session abbreviation, rotation of the major pattern)
const MODES: [(&str, &str, usize); 7] = [
    ("ionian", "io", 0),
    ("dorian", "do", 1),
    ("phrygian", "ph", 2),
    ("lydian", "ly", 3),
    ("mixolydian", "mi", 4),
    ("aeolian", "ae", 5),
    ("locrian", "lo", 6),
];

lazy_static! {
    static ref CATALOG: HashMap<&'static str, [u8; DEGREES]> = {
        let mut map = HashMap::new();
        for (name, abbrev, rotation) in MODES {
            let mut pattern = [0u8; DEGREES];
            for (i, step) in pattern.iter_mut().enumerate() {
                *step = MAJOR_PATTERN[(i + rotation) % DEGREES];
            }
            debug_assert_eq!(pattern.iter().map(|&s| u32::from(s)).sum::<u32>(), 12);
            map.insert(name, pattern);
            map.insert(abbrev, pattern);
        }
        map
    };
}

/// Look up a mode's ascending interval pattern by name or abbreviation
pub fn mode_pattern(name: &str) -> Result<[u8; DEGREES], AmbitusError> {
    let key = name.trim().to_ascii_lowercase();
    CATALOG
        .get(key.as_str())
        .copied()
        .ok_or_else(|| AmbitusError::UnknownScale(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_rotations() {
        assert_eq!(mode_pattern("ionian").unwrap(), [2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(mode_pattern("dorian").unwrap(), [2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(mode_pattern("phrygian").unwrap(), [1, 2, 2, 2, 1, 2, 2]);
        assert_eq!(mode_pattern("lydian").unwrap(), [2, 2, 2, 1, 2, 2, 1]);
        assert_eq!(mode_pattern("mixolydian").unwrap(), [2, 2, 1, 2, 2, 1, 2]);
        assert_eq!(mode_pattern("aeolian").unwrap(), [2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(mode_pattern("locrian").unwrap(), [1, 2, 2, 1, 2, 2, 2]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            mode_pattern("Aeolian").unwrap(),
            mode_pattern("AEOLIAN").unwrap()
        );
    }

    #[test]
    fn test_abbreviations_resolve() {
        for (name, abbrev, _) in MODES {
            assert_eq!(
                mode_pattern(name).unwrap(),
                mode_pattern(abbrev).unwrap(),
                "{abbrev} should resolve to {name}"
            );
            assert_eq!(
                mode_pattern(name).unwrap(),
                mode_pattern(&abbrev.to_ascii_uppercase()).unwrap()
            );
        }
    }

    #[test]
    fn test_patterns_sum_to_one_octave() {
        for (name, _, _) in MODES {
            let pattern = mode_pattern(name).unwrap();
            assert_eq!(pattern.iter().map(|&s| u32::from(s)).sum::<u32>(), 12);
        }
    }

    #[test]
    fn test_unknown_scale() {
        assert_eq!(
            mode_pattern("blues"),
            Err(AmbitusError::UnknownScale("blues".to_string()))
        );
    }
}
