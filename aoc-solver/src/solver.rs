//! Parse and solve traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on.
///
/// `SharedData` may borrow from the input (`&'a str`) or own what it parsed.
/// Parts receive it mutably, so a part can cache work for the parts after it.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Seeds;
///
/// impl AocParser for Seeds {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(format!("bad seed `{n}`"))))
///             .collect()
///     }
/// }
///
/// assert_eq!(Seeds::parse("79 14 55").unwrap(), vec![79, 14, 55]);
/// ```
pub trait AocParser {
    /// Parsed input plus whatever the parts want to keep between them.
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement it once per part and let `#[derive(AocSolver)]` write the
/// [`Solver`] impl that dispatches to each of them.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: a parser plus a part dispatcher.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct LowestSeed;
///
/// impl AocParser for LowestSeed {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for LowestSeed {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().min().copied().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut seeds = LowestSeed::parse("79 14 55 13").unwrap();
/// assert_eq!(LowestSeed::solve_part(&mut seeds, 1).unwrap(), "13");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part. Unknown parts return [`SolveError::PartNotImplemented`].
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking on top of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Like `solve_part`, but rejects part 0 and parts above `PARTS` with
    /// [`SolveError::PartOutOfRange`] before the solver sees them.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
