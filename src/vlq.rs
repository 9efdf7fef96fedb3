//! Base64 VLQ codec for signed integers.
//!
//! Each base64 digit carries 5 bits of payload and a continuation bit (`0x20`). The
//! lowest bit of the first payload is the sign; the rest is the magnitude, least
//! significant group first.

use crate::error::DecodeError;
use crate::DecodeResult;
use smallvec::SmallVec;
use std::io;
use std::io::Write;

const BASE64_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_VALUES: [i8; 256] = get_base64_map();

const VLQ_SHIFT: u32 = 5;
const VLQ_MASK: u8 = 0b11111;
const VLQ_CONTINUATION: u8 = 0b100000;

// 25 digits hold 125 bits, enough for any i64 magnitude plus slack
const VLQ_MAX_SHIFT: u32 = 120;

const fn get_base64_map() -> [i8; 256] {
    let mut res = [-1i8; 256];
    // `for in` is not allowed in const fn
    let mut idx = 0;
    while idx < 64 {
        res[BASE64_CHARS[idx] as usize] = idx as i8;
        idx += 1;
    }
    res
}

/// Encodes a single integer.
///
/// ```
/// assert_eq!(vlqmap::vlq::encode(1000), "w+B");
/// assert_eq!(vlqmap::vlq::encode(-1000), "x+B");
/// ```
pub fn encode(value: i64) -> String {
    encode_list(&[value])
}

/// Encodes a tuple of integers back to back, without separators.
pub fn encode_list(values: &[i64]) -> String {
    let mut buf = String::with_capacity(values.len() * 2);
    for &value in values {
        push_value(&mut buf, value);
    }
    buf
}

/// Appends the digits of `value` to `buf`.
#[inline]
pub(crate) fn push_value(buf: &mut String, value: i64) {
    for_each_digit(value, |digit| buf.push(char::from(digit)));
}

/// Decodes every integer in `input`.
///
/// ```
/// assert_eq!(vlqmap::vlq::decode_list("AAgBC").unwrap(), [0, 0, 16, 1]);
/// ```
pub fn decode_list(input: &str) -> DecodeResult<Vec<i64>> {
    VlqDecoder::new(input).collect()
}

pub(crate) fn decode_tuple(input: &str) -> DecodeResult<SmallVec<[i64; 5]>> {
    VlqDecoder::new(input).collect()
}

#[inline]
fn for_each_digit(value: i64, mut emit: impl FnMut(u8)) {
    // u128 keeps `i64::MIN` representable after the sign shift
    let mut num = (u128::from(value.unsigned_abs()) << 1) | u128::from(value < 0);

    loop {
        let mut digit = (num & u128::from(VLQ_MASK)) as u8;
        num >>= VLQ_SHIFT;
        if num != 0 {
            digit |= VLQ_CONTINUATION;
        }
        emit(BASE64_CHARS[digit as usize]);
        if num == 0 {
            break;
        }
    }
}

/// Writes VLQ digits into a [Write] without intermediate allocations.
#[derive(Debug)]
pub struct VlqEncoder<'a, W>
where
    W: Write,
{
    writer: &'a mut W,
}

impl<'a, W> VlqEncoder<'a, W>
where
    W: Write,
{
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// Writes one integer.
    pub fn encode(&mut self, value: i64) -> io::Result<()> {
        let mut digits = [0u8; 16];
        let mut len = 0;
        for_each_digit(value, |digit| {
            digits[len] = digit;
            len += 1;
        });
        self.writer.write_all(&digits[..len])
    }
}

/// Reads integers one at a time from a string of VLQ digits.
///
/// The decoder doubles as an [Iterator] that yields every remaining integer and stops
/// at the first error.
#[derive(Debug, Clone)]
pub struct VlqDecoder<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> VlqDecoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next digit to read.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes exactly one integer from the current position.
    pub fn decode(&mut self) -> DecodeResult<i64> {
        let bytes = self.input.as_bytes();

        let mut value: u128 = 0;
        let mut shift = 0;

        loop {
            let Some(&byte) = bytes.get(self.pos) else {
                return Err(DecodeError::UnterminatedVlq(self.input.to_owned()));
            };
            let digit = BASE64_VALUES[byte as usize];
            if digit < 0 {
                return Err(DecodeError::invalid_base64(self.input, self.pos));
            }
            self.pos += 1;

            let digit = digit as u8;
            value |= u128::from(digit & VLQ_MASK) << shift;

            if digit & VLQ_CONTINUATION == 0 {
                break;
            }

            shift += VLQ_SHIFT;
            if shift > VLQ_MAX_SHIFT {
                return Err(DecodeError::VlqOverflow(self.input.to_owned()));
            }
        }

        // at most 124 magnitude bits remain, so the signed value fits an i128
        let magnitude = (value >> 1) as i128;
        let signed = if value & 1 == 1 { -magnitude } else { magnitude };
        i64::try_from(signed).map_err(|_| DecodeError::VlqOverflow(self.input.to_owned()))
    }
}

impl Iterator for VlqDecoder<'_> {
    type Item = DecodeResult<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_exhausted() {
            return None;
        }
        let result = self.decode();
        self.failed = result.is_err();
        Some(result)
    }
}
