//! The fixed note table and note-name parsing.
//!
//! Twelve pitch classes, named by a lowercase letter with an optional `+`
//! for sharps, each mapped to one frequency. Declaration order matters:
//! scales walk the table by index, wrapping around at the end.

use super::frequency::Frequency;
use crate::error::{Error, Result};

/// Note names and their frequencies in Hz, in declaration order.
pub const NOTES: [(&str, f64); 12] = [
    ("a", 440.00),
    ("a+", 466.1),
    ("b", 493.9),
    ("c", 261.6),
    ("c+", 277.2),
    ("d", 293.6),
    ("d+", 311.2),
    ("e", 329.6),
    ("f", 349.2),
    ("f+", 370.0),
    ("g", 392.0),
    ("g+", 415.3),
];

/// Position of `name` in the table.
pub fn index_of(name: &str) -> Result<usize> {
    NOTES
        .iter()
        .position(|&(note, _)| note == name)
        .ok_or_else(|| Error::UnknownNote(name.to_string()))
}

/// Name at `index`, wrapping modulo the table size.
pub fn name_at(index: usize) -> &'static str {
    NOTES[index % NOTES.len()].0
}

/// Looks up the frequency of `name`.
///
/// # Examples
///
/// ```
/// use toneplay::music::notes::frequency_of;
///
/// assert_eq!(frequency_of("a").unwrap().as_f64(), 440.0);
/// assert!(frequency_of("h").is_err());
/// ```
pub fn frequency_of(name: &str) -> Result<Frequency> {
    index_of(name).map(|index| Frequency::from_hz(NOTES[index].1))
}

/// Resolves a sequence of names to frequencies, failing on the first unknown name.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Frequency>> {
    names.iter().map(|name| frequency_of(name.as_ref())).collect()
}

/// Splits a melody string such as `"cccedddfeeddc"` into note names.
///
/// Each note is a letter, optionally followed by `+`. Whitespace between
/// notes is ignored.
///
/// # Examples
///
/// ```
/// use toneplay::music::notes::parse_melody;
///
/// assert_eq!(parse_melody("c c+ d").unwrap(), vec!["c", "c+", "d"]);
/// assert_eq!(parse_melody("ccf+").unwrap(), vec!["c", "c", "f+"]);
/// ```
pub fn parse_melody(melody: &str) -> Result<Vec<&'static str>> {
    let mut names = Vec::new();
    let mut chars = melody.chars().filter(|ch| !ch.is_whitespace()).peekable();
    while let Some(letter) = chars.next() {
        let mut token = letter.to_string();
        if chars.peek() == Some(&'+') {
            chars.next();
            token.push('+');
        }
        names.push(name_at(index_of(&token)?));
    }
    Ok(names)
}
