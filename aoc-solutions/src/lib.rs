//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under [`my_solutions`], organized by year, and register
//! themselves with the `aoc-solver` plugin registry through the
//! `AutoRegisterSolver` derive macro. Reusable building blocks shared by
//! solutions live under [`utils`]; the main one is
//! [`utils::range_map`], a piecewise key translation with range lookup and
//! composition.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
