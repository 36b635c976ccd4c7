//! Scale construction by walking a mode's interval pattern
//!
//! Starting from the given pitch, each step moves exactly one diatonic
//! letter and sets the accidental so the resulting height lands on the
//! pattern. That keeps every scale degree on its own staff position, at
//! the cost of occasionally needing double accidentals (legal output,
//! not an error).

use std::cmp::Ordering;

use crate::error::AmbitusError;
use crate::models::pitch::Pitch;
use crate::scale::catalog::{self, DEGREES};

/// Build the scale for `pattern_name` from `start` to `stop`
///
/// With `stop` omitted the scale runs exactly one octave up from `start`.
/// An explicit `stop` below `start` walks the pattern downward instead.
/// The walk emits pitches up to the last one whose height is still within
/// the bound; the stop pitch itself appears only when the pattern lands on
/// its height. A stop at the start's height yields just `[start]`.
pub fn build_scale(
    pattern_name: &str,
    start: Pitch,
    stop: Option<Pitch>,
) -> Result<Vec<Pitch>, AmbitusError> {
    let pattern = catalog::mode_pattern(pattern_name)?;
    let stop = stop.unwrap_or_else(|| start.octave_up());
    Ok(match stop.height().cmp(&start.height()) {
        Ordering::Equal => vec![start],
        Ordering::Greater => walk_ascending(&pattern, start, stop),
        Ordering::Less => walk_descending(&pattern, start, stop),
    })
}

fn walk_ascending(pattern: &[u8; DEGREES], start: Pitch, stop: Pitch) -> Vec<Pitch> {
    let mut notes = vec![start];
    let mut current = start;
    for degree in 0.. {
        let step = i32::from(pattern[degree % DEGREES]);
        let target = current.height() + step;
        if target > stop.height() {
            break;
        }
        let next = current.next_diatonic();
        current = Pitch::new(next.letter, target - next.height(), next.octave);
        notes.push(current);
    }
    notes
}

fn walk_descending(pattern: &[u8; DEGREES], start: Pitch, stop: Pitch) -> Vec<Pitch> {
    let mut notes = vec![start];
    let mut current = start;
    for degree in 0.. {
        // Downward from the tonic the pattern applies in reverse order.
        let step = i32::from(pattern[DEGREES - 1 - (degree % DEGREES)]);
        let target = current.height() - step;
        if target < stop.height() {
            break;
        }
        let next = current.prev_diatonic();
        current = Pitch::new(next.letter, target - next.height(), next.octave);
        notes.push(current);
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch::Letter;

    fn p(text: &str) -> Pitch {
        Pitch::parse(text).unwrap()
    }

    #[test]
    fn test_default_stop_is_one_octave_up() {
        let notes = build_scale("ionian", p("C3"), None).unwrap();
        assert_eq!(notes.len(), 8);
        assert_eq!(notes.first(), Some(&p("C3")));
        assert_eq!(notes.last(), Some(&p("C4")));
    }

    #[test]
    fn test_degenerate_range_is_singleton() {
        assert_eq!(build_scale("dorian", p("D4"), Some(p("D4"))).unwrap(), vec![p("D4")]);
        // Enharmonic stop at the start's height also degenerates
        assert_eq!(build_scale("dorian", p("B3"), Some(p("Cb4"))).unwrap(), vec![p("B3")]);
    }

    #[test]
    fn test_unknown_pattern_name() {
        assert_eq!(
            build_scale("pentatonic", p("C4"), None),
            Err(AmbitusError::UnknownScale("pentatonic".to_string()))
        );
    }

    #[test]
    fn test_double_flat_spelling_is_produced() {
        // Locrian from Cb4 needs a double flat on the second degree
        let notes = build_scale("locrian", p("Cb4"), None).unwrap();
        assert_eq!(notes[1], Pitch::new(Letter::D, -2, 4));
    }

    #[test]
    fn test_descending_full_octave() {
        let notes = build_scale("ionian", p("C4"), Some(p("C3"))).unwrap();
        let expected: Vec<Pitch> = ["C4", "B3", "A3", "G3", "F3", "E3", "D3", "C3"]
            .iter()
            .map(|t| p(t))
            .collect();
        assert_eq!(notes, expected);
    }

    #[test]
    fn test_descending_clips_before_crossing_stop() {
        // Bb aeolian downward: the degree below Eb4 is Db4, which falls
        // under the D4 bound, so the walk stops at Eb4.
        let notes = build_scale("aeolian", p("Bb4"), Some(p("D4"))).unwrap();
        let expected: Vec<Pitch> = ["Bb4", "Ab4", "Gb4", "F4", "Eb4"]
            .iter()
            .map(|t| p(t))
            .collect();
        assert_eq!(notes, expected);
    }
}
