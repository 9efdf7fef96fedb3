use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// `Offset` is a position in a file: a 1-based line and a 0-based column.
///
/// # Note
///
/// The source map format itself does not fix a base for lines. This crate follows
/// the convention of most JavaScript tooling (`sourcemap`, `acorn`, `babel`) and
/// exposes lines starting at 1 and columns starting at 0, for both generated and
/// original positions.
///
/// Offsets are ordered lexicographically, line first. See [compare_offsets].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub line: u32,
    pub column: u32,
}

impl Offset {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<(u32, u32)> for Offset {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

impl From<Offset> for (u32, u32) {
    fn from(offset: Offset) -> Self {
        (offset.line, offset.column)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compares two offsets, line first and then column.
///
/// `Less` and `Greater` stand for `-1` and `1` respectively; use `as i8` on the result
/// when a numeric comparator is needed.
///
/// ```
/// use std::cmp::Ordering;
/// use vlqmap::compare_offsets;
///
/// assert_eq!(compare_offsets((1, 5), (2, 0)), Ordering::Less);
/// assert_eq!(compare_offsets((5, 0), (1, 4)) as i8, 1);
/// ```
pub fn compare_offsets<A, B>(a: A, b: B) -> Ordering
where
    A: Into<Offset>,
    B: Into<Offset>,
{
    let (a, b) = (a.into(), b.into());
    a.line.cmp(&b.line).then(a.column.cmp(&b.column))
}
