use crate::mapping::MappingRecord;
use crate::offset::{compare_offsets, Offset};
use std::cmp::Ordering;

/// Finds the record for a given generated offset.
///
/// `records` must be sorted by generated offset. If an exact match is not found, this
/// returns the closest preceding record. If there are no preceding records, it returns
/// `None`.
pub fn find_mapping<'r, 'a, O>(
    records: &'r [MappingRecord<'a>],
    offset: O,
) -> Option<&'r MappingRecord<'a>>
where
    O: Into<Offset>,
{
    let offset = offset.into();
    match records.binary_search_by(|record| compare_offsets(record.generated, offset)) {
        Ok(idx) => Some(&records[idx]),
        Err(0) => None,
        Err(idx) => Some(&records[idx - 1]),
    }
}

/// Composes two steps of a build into one.
///
/// `first` maps the intermediate code back to the sources; `second` maps the final code
/// to the intermediate code. For every record of `second` with an original location,
/// the record of `first` covering that location is re-anchored at the final generated
/// offset. Records of `second` without an original location, or pointing before every
/// record of `first`, are dropped.
///
/// An empty `first` is treated as the identity mapping and `second` is returned as is.
///
/// The sources of `second` are ignored: it is assumed to have been produced from the
/// single file described by `first`.
///
/// ```
/// use vlqmap::{combine_mappings, MappingRecord};
///
/// let first = [MappingRecord::new((1, 0)).with_original("a.ts", (3, 2)).with_name("x")];
/// let second = [MappingRecord::new((7, 4)).with_original("a.js", (1, 5))];
/// assert_eq!(
///     combine_mappings(&first, &second),
///     [MappingRecord::new((7, 4)).with_original("a.ts", (3, 2)).with_name("x")],
/// );
/// ```
pub fn combine_mappings<'a>(
    first: &[MappingRecord<'a>],
    second: &[MappingRecord<'a>],
) -> Vec<MappingRecord<'a>> {
    if first.is_empty() {
        return second.to_vec();
    }

    second
        .iter()
        .filter_map(|record| {
            let original = record.original_offset()?;
            let found = find_mapping(first, original)?;
            Some(MappingRecord {
                generated: record.generated,
                ..found.clone()
            })
        })
        .collect()
}

/// A cursor over sorted records for many lookups in a row.
///
/// Lookups at offsets close to the previous one, as when walking a minified file from
/// start to end, scan forward from the last hit instead of searching the whole slice.
#[derive(Debug)]
pub struct MappingFinder<'r, 'a> {
    records: &'r [MappingRecord<'a>],
    last: Option<usize>,
}

impl<'r, 'a> MappingFinder<'r, 'a> {
    pub fn new(records: &'r [MappingRecord<'a>]) -> Self {
        Self {
            records,
            last: None,
        }
    }

    /// See [find_mapping].
    pub fn find_mapping<O>(&mut self, offset: O) -> Option<&'r MappingRecord<'a>>
    where
        O: Into<Offset>,
    {
        let offset = offset.into();
        let idx = match self.last {
            Some(last) if self.records[last].generated <= offset => {
                self.scan_forward(last, offset)
            }
            _ => self.search(offset)?,
        };
        self.last = Some(idx);
        Some(&self.records[idx])
    }

    fn scan_forward(&self, from: usize, offset: Offset) -> usize {
        let mut idx = from;
        for (next, record) in self.records.iter().enumerate().skip(from + 1).take(32) {
            match compare_offsets(record.generated, offset) {
                Ordering::Greater => return idx,
                _ => idx = next,
            }
        }
        if idx == from + 32 {
            // the window ran out before passing the offset
            return self.search(offset).unwrap_or(idx);
        }
        idx
    }

    fn search(&self, offset: Offset) -> Option<usize> {
        match self
            .records
            .binary_search_by(|record| compare_offsets(record.generated, offset))
        {
            Ok(idx) => Some(idx),
            Err(0) => None,
            Err(idx) => Some(idx - 1),
        }
    }
}
