//! # chordshift
//!
//! A crate for transposing chord sheets written as plain text.
//!
//! The `scale` module holds the canonical chromatic spelling and the
//! enharmonic aliases folded onto it. The `transpose` module shifts single
//! roots, lines of chords over lyrics, and whole multi-line sheets, leaving
//! everything that is not a chord exactly as written.
//!
//! ```
//! use chordshift::{transpose_chord, transpose_line};
//!
//! assert_eq!(transpose_chord("Db", 0), "C#");
//! assert_eq!(transpose_line("Cmaj7 G/B Am7", 2), "Dmaj7 A/C# Bm7");
//! ```

pub mod chord;
pub mod error;
pub mod parser;
pub mod scale;
pub mod transpose;

pub use error::{ChordError, Result};
pub use scale::normalize;
pub use transpose::{steps_between, transpose_chord, transpose_line, transpose_text};
