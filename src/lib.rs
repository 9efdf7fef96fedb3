//! # vlqmap
//!
//! This crate encodes and decodes the `mappings` field of source maps.
//!
//! ## Getting Started
//!
//! ```
//! use vlqmap::{decode_mappings, encode_mappings, MappingRecord};
//!
//! let sources = ["script.js"];
//! let names = ["hello", "console", "log"];
//!
//! // Decode a mappings field against the tables of its source map
//! let records = decode_mappings("AAEAA,QAASA,MAAK", &sources, &names).unwrap();
//! assert_eq!(
//!     records[0],
//!     MappingRecord::new((1, 0)).with_original("script.js", (3, 0)).with_name("hello"),
//! );
//!
//! // And write it back
//! assert_eq!(encode_mappings(&records).unwrap(), "AAEAA,QAASA,MAAK");
//! ```
//!
//! ## Overview
//!
//! The codec is layered, leaf to root:
//!
//! - [vlq]: base64 VLQ digits to and from signed integers.
//! - [structural]: the `;` / `,` grammar, as lines of integer tuples. Values are kept
//!   exactly as written, deltas and all.
//! - [decode_mappings] and [encode_mappings]: absolute [MappingRecord]s, with running
//!   counters resolved and sources and names carried as identifiers.
//! - [compare_offsets]: the order of [Offset]s that records are sorted by.
//!
//! [find_mapping], [MappingFinder] and [combine_mappings] work on decoded records.
//!
//! Everything outside the `mappings` field itself, such as reading and writing the
//! JSON document, is left to the caller.
//!
//! ## Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [Offset], [MappingRecord],
//!   [OriginalLocation] and [Segment].
//!

mod error;
mod finder;
mod mapping;
mod mappings;
mod offset;
mod segment;
mod splitter;
pub mod structural;
pub mod vlq;

pub use error::*;
pub use finder::*;
pub use mapping::*;
pub use mappings::*;
pub use offset::*;
pub use segment::*;

pub type DecodeResult<T> = Result<T, DecodeError>;
pub type EncodeResult<T> = Result<T, EncodeError>;
