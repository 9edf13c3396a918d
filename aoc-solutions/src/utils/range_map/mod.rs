//! Interval range maps with range lookup and composition
//!
//! A [`RangeMap`] translates `u64` keys piece by piece: each entry moves a
//! contiguous run of source keys onto a run of destination keys by a constant
//! offset, and every key no entry covers maps to itself. This is the shape of
//! an almanac stage ("seed-to-soil", "soil-to-fertilizer", ...) but it also
//! fits relocation tables or numeric binning.
//!
//! # Operations
//!
//! - [`RangeMap::get`]: translate one key, `O(log n)` predecessor search
//! - [`RangeMap::lookup`]: translate a whole [`Span`], split at entry boundaries
//! - [`RangeMap::join`]: compose two maps into one equivalent map
//! - [`RangeMap::compose_all`]: collapse a chain of stages into a single map
//!
//! # Construction
//!
//! [`RangeMap::from_entries`] accepts anything and resolves conflicts (later
//! duplicates win, overlapping entries are cut at the next entry's start).
//! [`RangeMap::try_from_entries`] refuses conflicting input with a
//! [`RangeMapError`] instead.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::range_map::{MapEntry, RangeMap, Span};
//!
//! let seed_to_soil = RangeMap::try_from_entries([
//!     MapEntry::new(50, 98, 2),
//!     MapEntry::new(52, 50, 48),
//! ])
//! .unwrap();
//!
//! assert_eq!(seed_to_soil.get(79), 81);
//! assert_eq!(seed_to_soil.get(13), 13);
//! assert_eq!(seed_to_soil.lookup(Span::new(79, 14)), vec![Span::new(81, 14)]);
//!
//! let soil_to_fertilizer = RangeMap::try_from_entries([
//!     MapEntry::new(0, 15, 37),
//!     MapEntry::new(37, 52, 2),
//!     MapEntry::new(39, 0, 15),
//! ])
//! .unwrap();
//!
//! let seed_to_fertilizer = seed_to_soil.join(&soil_to_fertilizer);
//! assert_eq!(seed_to_fertilizer.get(79), 81);
//! assert_eq!(seed_to_fertilizer.get(14), 53);
//! ```

mod compose;
mod error;
mod map;
mod span;

pub use error::RangeMapError;
pub use map::RangeMap;
pub use span::{MapEntry, Span};
