//! Composition of range maps.

use std::collections::BTreeMap;

use tracing::trace;

use super::map::RangeMap;
use super::span::Span;

impl RangeMap {
    /// Composes two maps: `self` is applied first, then `other`.
    ///
    /// The result satisfies `a.join(&b).get(k) == b.get(a.get(k))` for every
    /// key and is a regular map, so it can be joined again. Neither input is
    /// touched.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{MapEntry, RangeMap};
    ///
    /// let a = RangeMap::from_entries([MapEntry::new(0, 10, 5)]);
    /// let b = RangeMap::from_entries([MapEntry::new(100, 0, 5)]);
    /// assert_eq!(a.join(&b).get(12), 102);
    /// ```
    pub fn join(&self, other: &RangeMap) -> RangeMap {
        let mut merged = BTreeMap::new();

        // Keys `self` leaves in place but `other` moves.
        for (&source, destination) in &other.entries {
            let mut consumed = 0;
            for piece in self.lookup(Span::new(source, destination.length)) {
                let key = source + consumed;
                if piece.start == key {
                    insert_agreeing(
                        &mut merged,
                        key,
                        Span::new(destination.start + consumed, piece.length),
                    );
                }
                consumed += piece.length;
            }
        }
        let passed_through = merged.len();

        // Keys `self` moves, followed through `other`.
        for (&source, destination) in &self.entries {
            let mut key = source;
            for piece in other.lookup(*destination) {
                insert_agreeing(&mut merged, key, piece);
                key += piece.length;
            }
        }
        let total = merged.len();

        merged.retain(|source, destination| *source != destination.start);
        trace!(
            passed_through,
            moved = total - passed_through,
            kept = merged.len(),
            "joined range maps"
        );

        RangeMap { entries: merged }
    }

    /// Folds [`join`](Self::join) over `maps` in order, starting from the
    /// identity map.
    ///
    /// ```rust
    /// use aoc_solutions::utils::range_map::{MapEntry, RangeMap};
    ///
    /// let stages = [
    ///     RangeMap::from_entries([MapEntry::new(20, 10, 5)]),
    ///     RangeMap::from_entries([MapEntry::new(30, 20, 5)]),
    /// ];
    /// assert_eq!(RangeMap::compose_all(&stages).get(11), 31);
    /// assert_eq!(RangeMap::compose_all([]).get(11), 11);
    /// ```
    pub fn compose_all<'a, I>(maps: I) -> RangeMap
    where
        I: IntoIterator<Item = &'a RangeMap>,
    {
        maps.into_iter()
            .fold(RangeMap::identity(), |composed, map| composed.join(map))
    }
}

/// Both passes may emit the same source start; when they do they must agree.
fn insert_agreeing(merged: &mut BTreeMap<u64, Span>, source: u64, destination: Span) {
    let previous = merged.insert(source, destination);
    debug_assert!(
        previous.is_none_or(|previous| previous == destination),
        "composition passes disagree at source {source}: {previous:?} vs {destination:?}"
    );
}
