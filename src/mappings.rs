use crate::error::{DecodeError, EncodeError};
use crate::mapping::MappingRecord;
use crate::offset::Offset;
use crate::segment::Segment;
use crate::splitter::Splitter;
use crate::{DecodeResult, EncodeResult};
use indexmap::IndexSet;
use std::io::Write;

#[derive(Debug, Default, Copy, Clone)]
struct DecodeState {
    generated_line: i64,
    generated_column: i64,
    source: i64,
    original_line: i64,
    original_column: i64,
    name: i64,
}

fn position(field: &'static str, value: i64) -> DecodeResult<u32> {
    u32::try_from(value).map_err(|_| DecodeError::InvalidPosition { field, value })
}

// line counters are 0-based, exposed lines are 1-based
fn line(field: &'static str, value: i64) -> DecodeResult<u32> {
    u32::try_from(value)
        .ok()
        .and_then(|line| line.checked_add(1))
        .ok_or(DecodeError::InvalidPosition { field, value })
}

impl DecodeState {
    fn next_line(&mut self) {
        self.generated_line += 1;
        self.generated_column = 0;
    }

    fn apply<'a, S, N>(
        &mut self,
        segment: &Segment,
        sources: &'a [S],
        names: &'a [N],
    ) -> DecodeResult<MappingRecord<'a>>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let values = segment.values();

        self.generated_column = self.generated_column.saturating_add(values[0]);
        let generated = Offset::new(
            line("generated line", self.generated_line)?,
            position("generated column", self.generated_column)?,
        );
        let mut record = MappingRecord::new(generated);

        if let Segment::Original(_) | Segment::Named(_) = segment {
            self.source = self.source.saturating_add(values[1]);
            self.original_line = self.original_line.saturating_add(values[2]);
            self.original_column = self.original_column.saturating_add(values[3]);

            let source = lookup(sources, self.source)
                .ok_or(DecodeError::UnknownSourceReference(self.source))?;
            let original = Offset::new(
                line("original line", self.original_line)?,
                position("original column", self.original_column)?,
            );
            record = record.with_original(source, original);
        }

        if let Segment::Named(_) = segment {
            self.name = self.name.saturating_add(values[4]);
            let name =
                lookup(names, self.name).ok_or(DecodeError::UnknownNameReference(self.name))?;
            record = record.with_name(name);
        }

        Ok(record)
    }
}

fn lookup<S>(table: &[S], idx: i64) -> Option<&str>
where
    S: AsRef<str>,
{
    usize::try_from(idx)
        .ok()
        .and_then(|idx| table.get(idx))
        .map(AsRef::as_ref)
}

/// Decodes a `mappings` field into absolute records.
///
/// `sources` and `names` are the tables of the surrounding source map; the returned
/// records borrow their identifiers from them. Records come out in the order their
/// segments appear. A segment with a single field yields a record without an original
/// location.
///
/// ```
/// use vlqmap::{decode_mappings, MappingRecord};
///
/// let records = decode_mappings("AAEAA,QAASA", &["script.js"], &["hello"]).unwrap();
/// assert_eq!(
///     records[1],
///     MappingRecord::new((1, 8)).with_original("script.js", (3, 9)).with_name("hello"),
/// );
/// ```
pub fn decode_mappings<'a, S, N>(
    mappings: &str,
    sources: &'a [S],
    names: &'a [N],
) -> DecodeResult<Vec<MappingRecord<'a>>>
where
    S: AsRef<str>,
    N: AsRef<str>,
{
    let mut records = Vec::new();
    if mappings.is_empty() {
        return Ok(records);
    }

    let mut state = DecodeState::default();

    for line in Splitter::new(mappings, b';') {
        if !line.is_empty() {
            for segment in Splitter::new(line, b',') {
                let segment = Segment::parse(segment)?;
                records.push(state.apply(&segment, sources, names)?);
            }
        }
        state.next_line();
    }

    log::debug!(
        "decoded {} mappings across {} generated lines",
        records.len(),
        state.generated_line
    );

    Ok(records)
}

#[derive(Debug, Copy, Clone)]
struct EncodeState {
    generated_line: u32,
    generated_column: u32,
    source: usize,
    original_line: u32,
    original_column: u32,
    name: usize,
}

impl Default for EncodeState {
    fn default() -> Self {
        Self {
            generated_line: 1,
            generated_column: 0,
            source: 0,
            original_line: 1,
            original_column: 0,
            name: 0,
        }
    }
}

#[inline]
fn delta(prev: impl Into<i64>, cur: impl Into<i64>) -> i64 {
    cur.into() - prev.into()
}

#[inline]
fn index_delta(prev: usize, cur: usize) -> i64 {
    // table indices are bounded by the number of records
    cur as i64 - prev as i64
}

/// A record with its source and name already resolved to table indices.
#[derive(Debug)]
struct Resolved<'r, 'a> {
    record: &'r MappingRecord<'a>,
    source: Option<usize>,
    name: Option<usize>,
}

impl EncodeState {
    fn segment(&mut self, resolved: &Resolved<'_, '_>) -> Segment {
        let record = resolved.record;
        let generated_column = delta(self.generated_column, record.generated.column);
        self.generated_column = record.generated.column;

        let (Some(original), Some(source)) = (&record.original, resolved.source) else {
            return Segment::Generated([generated_column]);
        };

        let fields = [
            generated_column,
            index_delta(self.source, source),
            delta(self.original_line, original.offset.line),
            delta(self.original_column, original.offset.column),
        ];
        self.source = source;
        self.original_line = original.offset.line;
        self.original_column = original.offset.column;

        match resolved.name {
            Some(name) => {
                let [a, b, c, d] = fields;
                let segment = Segment::Named([a, b, c, d, index_delta(self.name, name)]);
                self.name = name;
                segment
            }
            None => Segment::Original(fields),
        }
    }
}

/// Encodes absolute records into a `mappings` field.
///
/// Records are expected in generated order. Sources and names are numbered in the
/// order they are first seen, which is the order callers should write the `sources`
/// and `names` tables in; see [collect_tables].
///
/// Generated lines start at 1. Records on generated line 0 come before the first line
/// and produce no segment, but their sources and names are still numbered.
///
/// ```
/// use vlqmap::{encode_mappings, MappingRecord};
///
/// let records = [
///     MappingRecord::new((1, 0)).with_original("b.js", (20, 0)),
///     MappingRecord::new((2, 0)).with_original("c.js", (30, 0)),
/// ];
/// assert_eq!(encode_mappings(&records).unwrap(), "AAmBA;ACUA");
/// ```
pub fn encode_mappings(records: &[MappingRecord<'_>]) -> EncodeResult<String> {
    let mut buf = Vec::new();
    encode_mappings_to(records, &mut buf)?;
    // SAFETY: only bytes of the base64 alphabet and the two ASCII delimiters are written
    Ok(unsafe { String::from_utf8_unchecked(buf) })
}

/// Writes the encoded records into `writer`. See [encode_mappings].
pub fn encode_mappings_to<W>(records: &[MappingRecord<'_>], writer: &mut W) -> EncodeResult<()>
where
    W: Write,
{
    let mut sources = IndexSet::new();
    let mut names = IndexSet::new();

    let mut resolved = Vec::with_capacity(records.len());
    for record in records {
        let source = record
            .source()
            .map(|source| sources.insert_full(source).0);
        let name = match (record.name(), source) {
            (Some(_), None) => return Err(EncodeError::NameWithoutSource(record.generated)),
            (Some(name), Some(_)) => Some(names.insert_full(name).0),
            (None, _) => None,
        };

        if record.generated.line == 0 {
            log::trace!("skipping mapping before the first generated line: {record:?}");
            continue;
        }
        if record.original_offset().map_or(false, |offset| offset.line == 0) {
            return Err(EncodeError::InvalidPosition(record.generated));
        }
        resolved.push(Resolved {
            record,
            source,
            name,
        });
    }

    // stable, so records sharing a line keep their relative order
    resolved.sort_by_key(|r| r.record.generated.line);

    let mut state = EncodeState::default();

    for (idx, item) in resolved.iter().enumerate() {
        let line = item.record.generated.line;

        if line != state.generated_line {
            state.generated_column = 0;
            while line != state.generated_line {
                writer.write_all(b";")?;
                state.generated_line += 1;
            }
        } else if idx != 0 {
            writer.write_all(b",")?;
        }

        state.segment(item).encode(writer)?;
    }

    log::debug!(
        "encoded {} mappings with {} sources and {} names",
        resolved.len(),
        sources.len(),
        names.len()
    );

    Ok(())
}

/// Returns the `sources` and `names` tables matching the indices [encode_mappings]
/// assigns to `records`.
pub fn collect_tables<'r>(records: &'r [MappingRecord<'_>]) -> (Vec<&'r str>, Vec<&'r str>) {
    let mut sources = IndexSet::new();
    let mut names = IndexSet::new();
    for record in records {
        if let Some(source) = record.source() {
            sources.insert(source);
            if let Some(name) = record.name() {
                names.insert(name);
            }
        }
    }
    (sources.into_iter().collect(), names.into_iter().collect())
}
