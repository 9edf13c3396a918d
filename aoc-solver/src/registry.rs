//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::SolverExt;
use std::collections::BTreeMap;
use tracing::debug;

/// Parses an input and wraps it in a type-erased solver for `(year, day)`.
pub type SolverFactory =
    for<'a> fn(u16, u8, &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// The [`SolverFactory`] for solver type `S`.
fn create_instance<'a, S>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: SolverExt + 'static,
{
    Ok(Box::new(SolverInstance::<'a, S>::new(year, day, input)?))
}

/// Collects solver factories, refusing duplicates, then freezes them into a
/// [`SolverRegistry`].
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegisterableSolver, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = Echo
///     .register_with(SolverRegistryBuilder::new(), 2023, 5)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 5, "seeds").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "seeds");
/// assert!(registry.create_solver(2023, 6, "seeds").is_err());
/// ```
pub struct SolverRegistryBuilder {
    solvers: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a factory for `(year, day)`.
    ///
    /// Fails with [`RegistrationError::DuplicateSolver`] if one is already
    /// registered.
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers
            .insert((year, day), FactoryEntry { factory, parts });
        Ok(self)
    }

    /// Register every [`SolverPlugin`] linked into the binary.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the linked plugins `filter` accepts.
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.tags.contains(&"range-map"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                debug!(year = plugin.year, day = plugin.day, tags = ?plugin.tags, "registering plugin");
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from `(year, day)` to solver factory.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `(year, day)`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((entry.factory)(year, day, input)?)
    }

    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.solvers.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Metadata for every registered solver, in `(year, day)` order.
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Lets a solver value register its own type, so plugins of different
/// solver types can be collected together.
///
/// Implemented for every [`Solver`](crate::Solver).
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: SolverExt + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, create_instance::<S>)
    }
}

/// A solver submitted for automatic registration, normally through
/// `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering, e.g. `"range-map"`
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
