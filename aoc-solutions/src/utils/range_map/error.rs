//! Errors raised by strict range map construction.

use thiserror::Error;

use super::span::MapEntry;

/// Reasons [`RangeMap::try_from_entries`](super::RangeMap::try_from_entries)
/// refuses a list of entries.
///
/// Lookups and composition never fail; only the strict constructor reports
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeMapError {
    /// An entry covers no keys.
    #[error("entry {0:?} has zero length")]
    EmptyEntry(MapEntry),

    /// `source + length` or `destination + length` does not fit in a `u64`.
    #[error("entry {0:?} overflows the key space")]
    Overflow(MapEntry),

    /// Two entries claim some of the same source keys.
    #[error("source keys of {first:?} overlap those of {second:?}")]
    Overlap { first: MapEntry, second: MapEntry },
}
