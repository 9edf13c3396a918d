//! Key spans and raw mapping entries.

/// A contiguous run of keys `[start, start + length)`.
///
/// Keys run up to `u64::MAX` inclusive, so a span may end exactly one past
/// the last key. Keys a span names beyond that do not exist.
///
/// Every key in a span shifts by the same offset when it is mapped, which is
/// what lets a [`RangeMap`](super::RangeMap) answer range queries without
/// touching individual keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First key of the span.
    pub start: u64,
    /// Number of keys in the span.
    pub length: u64,
}

impl Span {
    /// Creates a span of `length` keys beginning at `start`.
    pub const fn new(start: u64, length: u64) -> Self {
        Self { start, length }
    }

    /// One past the last key. Saturates at `u64::MAX`.
    pub const fn end(&self) -> u64 {
        self.start.saturating_add(self.length)
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Last key of the span, or `None` if it is empty or runs past `u64::MAX`.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::Span;
    ///
    /// assert_eq!(Span::new(79, 14).last(), Some(92));
    /// assert_eq!(Span::new(u64::MAX, 1).last(), Some(u64::MAX));
    /// assert_eq!(Span::new(u64::MAX, 2).last(), None);
    /// assert_eq!(Span::new(79, 0).last(), None);
    /// ```
    pub fn last(&self) -> Option<u64> {
        self.length
            .checked_sub(1)
            .and_then(|offset| self.start.checked_add(offset))
    }

    pub fn contains(&self, key: u64) -> bool {
        self.offset_of(key).is_some()
    }

    /// Distance of `key` from the start of the span, if the span contains it.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::Span;
    ///
    /// let span = Span::new(50, 48);
    /// assert_eq!(span.offset_of(79), Some(29));
    /// assert_eq!(span.offset_of(98), None);
    /// assert_eq!(span.offset_of(49), None);
    /// ```
    pub fn offset_of(&self, key: u64) -> Option<u64> {
        key.checked_sub(self.start)
            .filter(|offset| *offset < self.length)
    }

    /// The keys of the span, in order, stopping at `u64::MAX`.
    pub fn keys(self) -> impl Iterator<Item = u64> {
        (0..self.length).map_while(move |offset| self.start.checked_add(offset))
    }
}

/// One `destination source length` triple as written in an almanac stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapEntry {
    pub destination: u64,
    pub source: u64,
    pub length: u64,
}

impl MapEntry {
    pub const fn new(destination: u64, source: u64, length: u64) -> Self {
        Self {
            destination,
            source,
            length,
        }
    }

    /// Keys this entry translates.
    pub const fn source_span(&self) -> Span {
        Span::new(self.source, self.length)
    }

    /// Keys this entry translates into.
    pub const fn destination_span(&self) -> Span {
        Span::new(self.destination, self.length)
    }
}

impl From<(u64, u64, u64)> for MapEntry {
    fn from((destination, source, length): (u64, u64, u64)) -> Self {
        Self::new(destination, source, length)
    }
}
