use crate::offset::Offset;
use std::io;

/// Errors raised while reading a `mappings` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("invalid base64 digit {digit:?} in \"{segment}\"")]
    InvalidBase64 { digit: char, segment: String },
    #[error("vlq value is not terminated in \"{0}\"")]
    UnterminatedVlq(String),
    #[error("vlq value overflows a 64-bit integer in \"{0}\"")]
    VlqOverflow(String),
    #[error("invalid segment with {arity} fields: \"{segment}\"")]
    SegmentArity { arity: usize, segment: String },
    #[error("a mapping resolves to an invalid {field} {value}")]
    InvalidPosition { field: &'static str, value: i64 },
    #[error("a mapping references unknown source #{0}")]
    UnknownSourceReference(i64),
    #[error("a mapping references unknown name #{0}")]
    UnknownNameReference(i64),
}

impl DecodeError {
    pub(crate) fn invalid_base64(segment: &str, at: usize) -> Self {
        let digit = segment
            .get(at..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self::InvalidBase64 {
            digit,
            segment: segment.to_owned(),
        }
    }
}

/// Errors raised while writing a `mappings` field.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("mapping at {0} has a name but no original location")]
    NameWithoutSource(Offset),
    #[error("mapping at {0} points at original line 0, original lines start at 1")]
    InvalidPosition(Offset),
    #[error("failed to write mappings: {0}")]
    Io(#[from] io::Error),
}
