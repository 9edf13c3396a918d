//! Parsed, timed solver instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Wall-clock bounds of one parse or solve step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

fn timed<T>(step: impl FnOnce() -> T) -> (T, Timing) {
    let start = Utc::now();
    let value = step();
    let end = Utc::now();
    (value, Timing { start, end })
}

/// One answered part.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// An input parsed once by `S`, ready to answer any of its parts.
///
/// Parts run against the same shared data in whatever order they are asked
/// for, so a later part sees what an earlier one cached.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_timing) = timed(|| S::parse(input));
        let shared = shared?;
        debug!(year, day, elapsed = ?parse_timing.duration(), "parsed input");

        Ok(Self {
            year,
            day,
            shared,
            parse_timing,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// A [`SolverInstance`] with its solver type erased, as handed out by
/// [`SolverRegistry::create_solver`](crate::SolverRegistry::create_solver).
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn lowest_locations(mut almanac: Box<dyn DynSolver + '_>) -> Result<Vec<String>, aoc_solver::SolveError> {
///     (1..=almanac.parts())
///         .map(|part| almanac.solve(part).map(|result| result.answer))
///         .collect()
/// }
/// ```
pub trait DynSolver {
    /// Solves `part`; parts outside `1..=parts()` are `PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_timing(&self) -> Timing;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        let answer = answer?;
        debug!(
            year = self.year,
            day = self.day,
            part,
            elapsed = ?timing.duration(),
            "solved part"
        );

        Ok(SolveResult { answer, timing })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }
}
