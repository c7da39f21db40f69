//! Parsers for chord tokens found in free-form chord sheets.
//!
//! These recognize the shape of a chord only. The quality suffix is taken as
//! an opaque run of characters and never checked against any chord grammar.

use combine::{attempt, many, optional, satisfy, satisfy_map, token};
use combine::{ParseError, Parser, Stream};

use crate::chord::{Accidental, ChordToken, Note, NoteClass};

/// Parses a single accidental.
///
/// ```text
/// Accidental : '#' | 'b'
///            ;
/// ```
pub fn accidental<Input>() -> impl Parser<Input, Output = Accidental>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    satisfy_map(Accidental::from_char).expected("Accidental: [#b]")
}

/// Parses a root note plus at most one accidental.
///
/// A following `b` is always taken as a flat, so `Cbass` reads as `Cb`
/// followed by `ass`.
///
/// ```text
/// Note : [A-G] Accidental?
///      ;
/// ```
pub fn note<Input>() -> impl Parser<Input, Output = Note>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let root = satisfy_map(NoteClass::from_char).expected("Note: [A-G]");

    (root, optional(accidental()))
        .map(|(root, accidental)| Note::new(root, accidental))
}

/// Parses the quality text following a root.
///
/// ```text
/// Suffix : [^/\s]*
///        ;
/// ```
pub fn suffix<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many(satisfy(|c: char| c != '/' && !c.is_whitespace()))
}

/// Parses a slash bass note.
///
/// ```text
/// Bass : '/' Note
///      ;
/// ```
pub fn bass<Input>() -> impl Parser<Input, Output = Note>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (token('/'), note()).map(|(_, bass)| bass)
}

/// Recognizes a complete chord token.
///
/// A slash that is not followed by a note is left unconsumed, so `C/x`
/// yields the chord `C` with `/x` remaining.
///
/// ```text
/// ChordToken : Note Suffix Bass?
///            ;
/// ```
pub fn chord_token<Input>() -> impl Parser<Input, Output = ChordToken>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (note(), suffix(), optional(attempt(bass())))
        .map(|(root, suffix, bass)| ChordToken::new(root, suffix, bass))
}
