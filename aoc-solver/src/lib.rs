//! Advent of Code Solver Library
//!
//! A small, type-safe framework for puzzle solvers. Each solver parses its
//! input once into shared data, then answers its parts on demand; solvers
//! register themselves as plugins and are looked up by year and day.
//!
//! # Overview
//!
//! - [`AocParser`] + [`PartSolver`]: parse once, solve each part separately
//! - [`Solver`]: the part dispatcher, usually written by `#[derive(AocSolver)]`
//! - [`SolverInstance`] / [`DynSolver`]: a parsed input with parse and solve timings
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`]: `(year, day)` lookup, fed by
//!   `#[derive(AutoRegisterSolver)]` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Seeds;
//!
//! impl AocParser for Seeds {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Seeds {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().min().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Seeds {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! let mut seeds = Seeds::parse("79 14 55 13").unwrap();
//! assert_eq!(Seeds::solve_part(&mut seeds, 1).unwrap(), "13");
//! assert_eq!(Seeds::solve_part(&mut seeds, 2).unwrap(), "79");
//! assert!(Seeds::solve_part(&mut seeds, 3).is_err());
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
