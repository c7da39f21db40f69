//! Transposition of chord roots, chord lines and whole chord sheets.
//!
//! None of these functions fail. Text that cannot be transposed is passed
//! through untouched.
//!
//! ```
//! use chordshift::transpose::{transpose_chord, transpose_line};
//!
//! assert_eq!(transpose_chord("Eb", 2), "F");
//! assert_eq!(transpose_line("Eb   Bb   Cm   Ab", 2), "F   C   Dm   Bb");
//! ```

use combine::Parser;

use crate::chord::Note;
use crate::parser;
use crate::scale;

/// Shift a single chord root by `steps` semitones.
///
/// The result is spelled canonically. A root that is not recognized is
/// returned exactly as given, and an empty root gives an empty string.
pub fn transpose_chord(chord: &str, steps: i32) -> String {
    if chord.is_empty() {
        return String::new();
    }

    match scale::pitch_class(chord) {
        Some(index) => scale::shift(index, steps).to_string(),
        None => {
            tracing::trace!(root = chord, "unrecognized root left as-is");
            chord.to_string()
        }
    }
}

fn transpose_note(note: &Note, steps: i32) -> String {
    transpose_chord(&note.to_string(), steps)
}

/// `\w` in the regular expression sense.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Transpose every chord token in a line of text.
///
/// A token starts at a letter `A` to `G` that is not preceded by a word
/// character. Its root and optional slash bass are shifted; the suffix and
/// all text outside tokens are copied verbatim.
///
/// Capitalized words such as `Be` or `Glory` are read as chords too.
pub fn transpose_line(line: &str, steps: i32) -> String {
    let mut output = String::with_capacity(line.len() + line.len() / 4);
    let mut rest = line;
    let mut previous: Option<char> = None;
    let mut chords = 0usize;

    while let Some(c) = rest.chars().next() {
        if !previous.is_some_and(is_word_char) {
            if let Ok((chord, remaining)) = parser::chord_token().parse(rest) {
                let consumed = &rest[..rest.len() - remaining.len()];

                output.push_str(&transpose_note(&chord.root, steps));
                output.push_str(&chord.suffix);
                if let Some(bass) = chord.bass {
                    output.push('/');
                    output.push_str(&transpose_note(&bass, steps));
                }

                chords += 1;
                previous = consumed.chars().next_back();
                rest = remaining;
                continue;
            }
        }

        output.push(c);
        previous = Some(c);
        rest = &rest[c.len_utf8()..];
    }

    tracing::trace!(chords, steps, "transposed line");
    output
}

/// Transpose each line of a multi-line chord sheet.
///
/// Line terminators, `\n` or `\r\n`, are kept exactly as they were.
pub fn transpose_text(text: &str, steps: i32) -> String {
    let mut output = String::with_capacity(text.len());
    let mut lines = 0usize;

    for line in text.split_inclusive('\n') {
        let (body, ending) = match line.strip_suffix("\r\n") {
            Some(body) => (body, "\r\n"),
            None => match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            },
        };

        output.push_str(&transpose_line(body, steps));
        output.push_str(ending);
        lines += 1;
    }

    tracing::debug!(lines, steps, "transposed sheet");
    output
}

/// The offset in `-5..=6` that takes the key `from` to the key `to`.
///
/// Returns `None` when either key is not a recognized root.
pub fn steps_between(from: &str, to: &str) -> Option<i32> {
    let from = scale::pitch_class(from)? as i32;
    let to = scale::pitch_class(to)? as i32;
    let count = scale::PITCH_CLASS_COUNT as i32;

    let up = (to - from).rem_euclid(count);
    Some(if up > count / 2 { up - count } else { up })
}
