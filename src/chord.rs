//! Defines types used to represent chord roots and chord tokens.
//!
//! These can be constructed manually, but usually come from the `parser`
//! module by way of `FromStr`.
//!
//! ```
//! use chordshift::chord::{Accidental, ChordToken, Note, NoteClass};
//!
//! /// Manual construction of a Bbmaj7/D
//! let root = Note::new(NoteClass::B, Some(Accidental::Flat));
//! let bass = Note::new(NoteClass::D, None);
//! let chord = ChordToken::new(root, "maj7", Some(bass));
//!
//! assert_eq!(chord.to_string(), "Bbmaj7/D");
//! assert_eq!(chord.transpose(2).to_string(), "Cmaj7/E");
//! ```
//!
//! The quality suffix of a `ChordToken` is never interpreted.

use std::fmt;
use std::str::FromStr;

use combine::Parser;

use crate::error::{ChordError, Result};
use crate::parser;
use crate::scale;

/// A single note without accidentals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoteClass {
    A, B, C, D, E, F, G
}

impl NoteClass {
    /// Construct a `NoteClass` from a char representation.
    pub fn from_char(input: char) -> Option<NoteClass> {
        use self::NoteClass::*;

        match input {
            'A' => Some(A),
            'B' => Some(B),
            'C' => Some(C),
            'D' => Some(D),
            'E' => Some(E),
            'F' => Some(F),
            'G' => Some(G),
            _   => None
        }
    }

    pub fn to_char(self) -> char {
        use self::NoteClass::*;

        match self {
            A => 'A',
            B => 'B',
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G'
        }
    }

    /// Semitones above `C` of the natural note.
    pub fn semitone(self) -> usize {
        use self::NoteClass::*;

        match self {
            C => 0,
            D => 2,
            E => 4,
            F => 5,
            G => 7,
            A => 9,
            B => 11
        }
    }
}

/// A single sharp or flat attached to a root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    Sharp,
    Flat
}

impl Accidental {
    pub fn from_char(input: char) -> Option<Accidental> {
        match input {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _   => None
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat  => 'b'
        }
    }

    /// Semitone alteration applied to the natural note.
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Sharp =>  1,
            Accidental::Flat  => -1
        }
    }
}

/// A chord root or bass note as it is spelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    /// The base note
    pub root: NoteClass,

    /// An optional single accidental
    pub accidental: Option<Accidental>
}

impl Note {
    /// Construct and return a new `Note`.
    pub fn new(root: NoteClass, accidental: Option<Accidental>) -> Note {
        Note { root, accidental }
    }

    /// Semitones above `C`, in `0..12`.
    pub fn pitch_class(&self) -> usize {
        let offset = self.accidental.map_or(0, Accidental::offset);
        (self.root.semitone() as i32 + offset).rem_euclid(scale::PITCH_CLASS_COUNT as i32) as usize
    }

    /// Returns this note shifted by `steps` semitones.
    ///
    /// The result is always spelled as found in `scale::CHROMATIC_SCALE`,
    /// so `n.transpose(0)` respells aliases such as `Db` to `C#`.
    pub fn transpose(&self, steps: i32) -> Note {
        let name = scale::shift(self.pitch_class(), steps);
        canonical_note(name)
    }
}

/// Converts a member of `scale::CHROMATIC_SCALE` into a `Note`.
fn canonical_note(name: &'static str) -> Note {
    let mut chars = name.chars();
    let root = chars.next().and_then(NoteClass::from_char).unwrap_or(NoteClass::C);
    let accidental = chars.next().and_then(Accidental::from_char);
    Note::new(root, accidental)
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root.to_char())?;
        if let Some(accidental) = self.accidental {
            write!(f, "{}", accidental.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Note {
    type Err = ChordError;

    fn from_str(input: &str) -> Result<Note> {
        match parser::note().parse(input) {
            Ok((note, "")) => Ok(note),
            Ok((note, rest)) => Err(ChordError::TrailingInput {
                parsed: note.to_string(),
                rest: rest.to_string(),
            }),
            Err(_) => Err(ChordError::InvalidNote(input.to_string())),
        }
    }
}

/// A chord as it appears within a line of text.
///
/// The suffix holds everything between the root and the optional slash bass
/// and is carried through transposition verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChordToken {
    /// The base note
    pub root: Note,

    /// Quality text such as `m7`, `sus4` or `maj7(#11)`
    pub suffix: String,

    /// Slash chord bass note
    pub bass: Option<Note>
}

impl ChordToken {
    /// Construct and return a new `ChordToken`.
    pub fn new<S: Into<String>>(root: Note, suffix: S, bass: Option<Note>) -> ChordToken {
        ChordToken { root, suffix: suffix.into(), bass }
    }

    /// Shift the root and bass by the same number of semitones.
    pub fn transpose(&self, steps: i32) -> ChordToken {
        ChordToken {
            root: self.root.transpose(steps),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|bass| bass.transpose(steps))
        }
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

impl FromStr for ChordToken {
    type Err = ChordError;

    fn from_str(input: &str) -> Result<ChordToken> {
        match parser::chord_token().parse(input) {
            Ok((chord, "")) => Ok(chord),
            Ok((chord, rest)) => Err(ChordError::TrailingInput {
                parsed: chord.to_string(),
                rest: rest.to_string(),
            }),
            Err(_) => Err(ChordError::InvalidChord(input.to_string())),
        }
    }
}
