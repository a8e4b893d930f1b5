//! Diatonic scales over the note table.

use super::notes::{NOTES, index_of, name_at};
use crate::error::Result;

/// Index steps of a major scale: whole, whole, half, whole, whole, whole, half.
pub const MAJOR_STEPS: [usize; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Builds the eight-note major scale starting at `base_note`.
///
/// Walks the note table in declaration order, wrapping at the end, so the
/// last entry is the base note again.
///
/// # Examples
///
/// ```
/// use toneplay::build_scale;
///
/// let scale = build_scale("c+").unwrap();
/// assert_eq!(scale, vec!["c+", "d+", "f", "f+", "g+", "a+", "c", "c+"]);
/// ```
pub fn build_scale(base_note: &str) -> Result<Vec<&'static str>> {
    let mut index = index_of(base_note)?;
    let mut scale = Vec::with_capacity(MAJOR_STEPS.len() + 1);
    scale.push(name_at(index));
    for step in MAJOR_STEPS {
        index = (index + step) % NOTES.len();
        scale.push(name_at(index));
    }
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_every_base_note() {
        for &(base, _) in NOTES.iter() {
            let scale = build_scale(base).unwrap();
            assert_eq!(scale.len(), 8);
            assert_eq!(scale[0], base);

            let indices: Vec<usize> = scale.iter().map(|name| index_of(name).unwrap()).collect();
            for (pair, step) in indices.windows(2).zip(MAJOR_STEPS) {
                assert_eq!((pair[0] + step) % NOTES.len(), pair[1]);
            }
        }
    }

    #[test]
    fn test_scale_from_a() {
        assert_eq!(
            build_scale("a").unwrap(),
            vec!["a", "b", "c+", "d", "e", "f+", "g+", "a"]
        );
    }

    #[test]
    fn test_scale_ends_on_base() {
        for &(base, _) in NOTES.iter() {
            assert_eq!(build_scale(base).unwrap()[7], base);
        }
    }

    #[test]
    fn test_unknown_base() {
        assert!(matches!(build_scale("h"), Err(Error::UnknownNote(_))));
    }
}
