use crate::error::DecodeError;
use crate::vlq::VlqEncoder;
use std::io;
use std::io::Write;

/// One comma-separated unit of a `mappings` line, as raw deltas.
///
/// Every field is relative to the running counter of the same kind, not to the
/// previous field of the tuple.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// `[generated_column]`
    Generated([i64; 1]),
    /// `[generated_column, source, original_line, original_column]`
    Original([i64; 4]),
    /// `[generated_column, source, original_line, original_column, name]`
    Named([i64; 5]),
}

impl Segment {
    pub fn values(&self) -> &[i64] {
        match self {
            Self::Generated(v) => v,
            Self::Original(v) => v,
            Self::Named(v) => v,
        }
    }

    pub fn arity(&self) -> usize {
        self.values().len()
    }

    pub(crate) fn encode<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let mut encoder = VlqEncoder::new(writer);
        for &value in self.values() {
            encoder.encode(value)?;
        }
        Ok(())
    }
}

impl TryFrom<&[i64]> for Segment {
    /// The rejected arity.
    type Error = usize;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        match *values {
            [a] => Ok(Self::Generated([a])),
            [a, b, c, d] => Ok(Self::Original([a, b, c, d])),
            [a, b, c, d, e] => Ok(Self::Named([a, b, c, d, e])),
            _ => Err(values.len()),
        }
    }
}

impl Segment {
    pub(crate) fn parse(text: &str) -> Result<Self, DecodeError> {
        let values = crate::structural::decode_segment(text)?;
        Self::try_from(values.as_slice()).map_err(|arity| DecodeError::SegmentArity {
            arity,
            segment: text.to_owned(),
        })
    }
}
