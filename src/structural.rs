//! Grammar-level codec for the `mappings` field.
//!
//! A field is a list of lines separated by `;`, each line a list of tuples separated by
//! `,`, each tuple a run of VLQ integers. This layer keeps the integers exactly as
//! written: no running counters are resolved and tuples of any non-zero arity pass
//! through, so `decode(&encode(x)) == x` for every well-formed `x`.

use crate::error::DecodeError;
use crate::splitter::Splitter;
use crate::vlq;
use crate::vlq::VlqEncoder;
use crate::DecodeResult;
use smallvec::SmallVec;
use std::io;
use std::io::Write;

/// The integers of one segment, in the order they appear.
pub type RawSegment = SmallVec<[i64; 5]>;

/// The segments of one generated line.
pub type RawLine = Vec<RawSegment>;

/// Encodes lines of integer tuples.
///
/// ```
/// use vlqmap::structural::{self, RawSegment};
///
/// let lines = vec![vec![RawSegment::from_slice(&[0, 0, 16, 1])]];
/// assert_eq!(structural::encode(&lines), "AAgBC");
/// ```
pub fn encode<L>(lines: &[L]) -> String
where
    L: AsRef<[RawSegment]>,
{
    let mut buf = String::new();
    for (line_idx, line) in lines.iter().enumerate() {
        if line_idx != 0 {
            buf.push(';');
        }
        for (segment_idx, segment) in line.as_ref().iter().enumerate() {
            if segment_idx != 0 {
                buf.push(',');
            }
            for &value in segment {
                vlq::push_value(&mut buf, value);
            }
        }
    }
    buf
}

/// Writes the encoded lines into `writer`.
pub fn encode_to<L, W>(lines: &[L], writer: &mut W) -> io::Result<()>
where
    L: AsRef<[RawSegment]>,
    W: Write,
{
    for (line_idx, line) in lines.iter().enumerate() {
        if line_idx != 0 {
            writer.write_all(b";")?;
        }
        for (segment_idx, segment) in line.as_ref().iter().enumerate() {
            if segment_idx != 0 {
                writer.write_all(b",")?;
            }
            let mut encoder = VlqEncoder::new(writer);
            for &value in segment {
                encoder.encode(value)?;
            }
        }
    }
    Ok(())
}

/// Decodes a `mappings` field into lines of integer tuples.
///
/// An empty field has no lines. Empty lines elsewhere, including trailing ones, are
/// kept as empty vectors.
pub fn decode(text: &str) -> DecodeResult<Vec<RawLine>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    Splitter::new(text, b';')
        .map(|line| -> DecodeResult<RawLine> {
            if line.is_empty() {
                return Ok(Vec::new());
            }
            Splitter::new(line, b',').map(decode_segment).collect()
        })
        .collect()
}

/// Decodes the integers of a single segment, which must hold at least one.
pub fn decode_segment(segment: &str) -> DecodeResult<RawSegment> {
    let values = vlq::decode_tuple(segment)?;
    if values.is_empty() {
        return Err(DecodeError::SegmentArity {
            arity: 0,
            segment: segment.to_owned(),
        });
    }
    Ok(values)
}
