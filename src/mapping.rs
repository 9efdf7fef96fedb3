use crate::offset::Offset;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

/// A location in an original source file.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OriginalLocation<'a> {
    pub source: Cow<'a, str>,
    pub offset: Offset,
}

impl<'a> OriginalLocation<'a> {
    pub fn new<S, O>(source: S, offset: O) -> Self
    where
        S: Into<Cow<'a, str>>,
        O: Into<Offset>,
    {
        Self {
            source: source.into(),
            offset: offset.into(),
        }
    }

    pub fn into_owned(self) -> OriginalLocation<'static> {
        OriginalLocation {
            source: Cow::Owned(self.source.into_owned()),
            offset: self.offset,
        }
    }
}

/// An absolute mapping from a generated position to its origin.
///
/// Sources and names are carried as identifiers rather than table indices. Decoding
/// borrows them from the tables passed in; records built by hand may own them.
///
/// ```
/// use vlqmap::MappingRecord;
///
/// let record = MappingRecord::new((1, 17))
///     .with_original("script.js", (4, 2))
///     .with_name("console");
/// assert_eq!(record.source(), Some("script.js"));
/// assert_eq!(format!("{record:?}"), "1:17 -> script.js:4:2 (console)");
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingRecord<'a> {
    pub generated: Offset,
    pub original: Option<OriginalLocation<'a>>,
    pub name: Option<Cow<'a, str>>,
}

impl Debug for MappingRecord<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.generated)?;
        if let Some(original) = &self.original {
            write!(f, " -> {}:{}", original.source, original.offset)?;
        }
        if let Some(name) = &self.name {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

impl<'a> MappingRecord<'a> {
    #[inline]
    pub fn new<O>(generated: O) -> Self
    where
        O: Into<Offset>,
    {
        Self {
            generated: generated.into(),
            original: None,
            name: None,
        }
    }

    #[inline]
    pub fn with_original<S, O>(self, source: S, offset: O) -> Self
    where
        S: Into<Cow<'a, str>>,
        O: Into<Offset>,
    {
        Self {
            original: Some(OriginalLocation::new(source, offset)),
            ..self
        }
    }

    #[inline]
    pub fn with_name<S>(self, name: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Detaches the record from the tables it borrows from.
    pub fn into_owned(self) -> MappingRecord<'static> {
        MappingRecord {
            generated: self.generated,
            original: self.original.map(OriginalLocation::into_owned),
            name: self.name.map(|name| Cow::Owned(name.into_owned())),
        }
    }
}

impl MappingRecord<'_> {
    pub fn source(&self) -> Option<&str> {
        self.original.as_ref().map(|original| original.source.as_ref())
    }

    /// Original position, if the record maps to a source.
    pub fn original_offset(&self) -> Option<Offset> {
        self.original.as_ref().map(|original| original.offset)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn has_original(&self) -> bool {
        self.original.is_some()
    }
}
