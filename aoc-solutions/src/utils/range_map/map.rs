//! Construction and lookups.

use std::collections::BTreeMap;

use super::error::RangeMapError;
use super::span::{MapEntry, Span};

/// A piecewise translation of the `u64` key space.
///
/// Each stored entry moves a run of source keys by a constant offset. Keys
/// outside every entry map to themselves.
///
/// # Invariants
///
/// - entries are keyed by source start and their source spans never overlap
/// - no stored entry has zero length
/// - `source + length` and `destination + length` fit in a `u64`
///
/// The map is never mutated after construction, so shared references can be
/// queried from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeMap {
    /// Source start to destination span. The source span of an entry is
    /// `[source, source + destination.length)`.
    pub(super) entries: BTreeMap<u64, Span>,
}

impl RangeMap {
    /// The map that leaves every key where it is.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a map from raw entries without rejecting anything.
    ///
    /// Zero-length entries are skipped. When two entries share a source start
    /// the later one wins. Lengths are clamped so no span runs past
    /// `u64::MAX`, and an entry running into the next entry's source start is
    /// cut short there: a key always belongs to the entry with the greatest
    /// source start at or below it.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{MapEntry, RangeMap};
    ///
    /// let map = RangeMap::from_entries([MapEntry::new(100, 0, 10), MapEntry::new(200, 5, 10)]);
    /// assert_eq!(map.get(4), 104);
    /// assert_eq!(map.get(5), 200);
    /// assert_eq!(map.get(14), 209);
    /// assert_eq!(map.get(15), 15);
    /// ```
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MapEntry>,
    {
        let mut sorted = BTreeMap::new();
        for entry in entries {
            let length = entry
                .length
                .min(u64::MAX - entry.source)
                .min(u64::MAX - entry.destination);
            if length > 0 {
                sorted.insert(entry.source, Span::new(entry.destination, length));
            }
        }

        let starts: Vec<u64> = sorted.keys().copied().collect();
        for ((source, destination), next) in starts
            .iter()
            .zip(sorted.values_mut())
            .zip(starts.iter().skip(1))
        {
            destination.length = destination.length.min(next - source);
        }

        Self { entries: sorted }
    }

    /// Builds a map from raw entries, refusing empty, overflowing or
    /// overlapping ones.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{MapEntry, RangeMap, RangeMapError};
    ///
    /// let overlapping = [MapEntry::new(100, 0, 10), MapEntry::new(200, 5, 10)];
    /// assert!(matches!(
    ///     RangeMap::try_from_entries(overlapping),
    ///     Err(RangeMapError::Overlap { .. })
    /// ));
    /// ```
    pub fn try_from_entries<I>(entries: I) -> Result<Self, RangeMapError>
    where
        I: IntoIterator<Item = MapEntry>,
    {
        let mut sorted: BTreeMap<u64, MapEntry> = BTreeMap::new();
        for entry in entries {
            if entry.length == 0 {
                return Err(RangeMapError::EmptyEntry(entry));
            }
            if entry.source.checked_add(entry.length).is_none()
                || entry.destination.checked_add(entry.length).is_none()
            {
                return Err(RangeMapError::Overflow(entry));
            }
            if let Some(first) = sorted.insert(entry.source, entry) {
                return Err(RangeMapError::Overlap {
                    first,
                    second: entry,
                });
            }
        }

        if let Some((first, second)) = sorted
            .values()
            .zip(sorted.values().skip(1))
            .find(|(first, second)| first.source_span().end() > second.source)
        {
            return Err(RangeMapError::Overlap {
                first: *first,
                second: *second,
            });
        }

        Ok(Self {
            entries: sorted
                .into_values()
                .map(|entry| (entry.source, entry.destination_span()))
                .collect(),
        })
    }

    /// Translates a single key.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{MapEntry, RangeMap};
    ///
    /// let map = RangeMap::from_entries([MapEntry::new(50, 98, 2), MapEntry::new(52, 50, 48)]);
    /// assert_eq!(map.get(79), 81);
    /// assert_eq!(map.get(14), 14);
    /// ```
    pub fn get(&self, key: u64) -> u64 {
        self.entries
            .range(..=key)
            .next_back()
            .and_then(|(&source, destination)| {
                Span::new(source, destination.length)
                    .offset_of(key)
                    .map(|offset| destination.start + offset)
            })
            .unwrap_or(key)
    }

    /// Translates a whole span, splitting it wherever it crosses an entry
    /// boundary.
    ///
    /// The returned spans follow the order of the source keys they came from
    /// and their lengths add up to the number of keys in `span`: `span.length`
    /// whenever [`Span::last`] exists. Keys past `u64::MAX` do not exist and
    /// are not translated. An empty span maps to nothing.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{RangeMap, Span};
    ///
    /// let identity = RangeMap::identity();
    /// assert_eq!(identity.lookup(Span::new(u64::MAX, 1)), vec![Span::new(u64::MAX, 1)]);
    /// ```
    pub fn lookup(&self, span: Span) -> Vec<Span> {
        let mut mapped = Vec::new();
        if span.is_empty() {
            return mapped;
        }

        let last = span.start.saturating_add(span.length - 1);
        let mut cursor = span.start;
        // Keys `cursor..=last` are still to be mapped.
        let mut remaining = last - cursor + 1;

        if let Some((&source, destination)) = self.entries.range(..=cursor).next_back()
            && let Some(offset) = Span::new(source, destination.length).offset_of(cursor)
        {
            let length = (destination.length - offset).min(remaining);
            mapped.push(Span::new(destination.start + offset, length));
            remaining -= length;
            if remaining == 0 {
                return mapped;
            }
            cursor += length;
        }

        for (&source, destination) in self.entries.range(cursor..=last) {
            if cursor < source {
                let gap = source - cursor;
                mapped.push(Span::new(cursor, gap));
                remaining -= gap;
                cursor = source;
            }
            let length = destination.length.min(remaining);
            mapped.push(Span::new(destination.start, length));
            remaining -= length;
            if remaining == 0 {
                return mapped;
            }
            cursor += length;
        }

        mapped.push(Span::new(cursor, remaining));
        mapped
    }

    /// Stored entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = MapEntry> + '_ {
        self.entries
            .iter()
            .map(|(&source, destination)| MapEntry::new(destination.start, source, destination.length))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MapEntry> for RangeMap {
    fn from_iter<I: IntoIterator<Item = MapEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
