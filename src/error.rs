//! Error types for chordshift

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChordError {
    #[error("not a note: {0:?}")]
    InvalidNote(String),
    #[error("not a chord: {0:?}")]
    InvalidChord(String),
    #[error("unexpected input {rest:?} after {parsed:?}")]
    TrailingInput { parsed: String, rest: String },
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChordError>;
