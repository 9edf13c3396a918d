//! Tests for solver registration and lookup

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, FactoryInfo, ParseError, PartSolver,
    RegisterableSolver, RegistrationError, SolveError, SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 1999, day = 24, tags = ["test", "seeds"])]
struct Seeds;

impl AocParser for Seeds {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
            .collect()
    }
}

impl PartSolver<1> for Seeds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().min().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Seeds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 1999, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trim().to_string())
    }
}

fn test_plugins() -> SolverRegistryBuilder {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 1999)
        .unwrap()
}

#[test]
fn test_plugins_are_collected() {
    let registry = test_plugins().build();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.iter_info().collect::<Vec<_>>(),
        vec![
            FactoryInfo { year: 1999, day: 24, parts: 2 },
            FactoryInfo { year: 1999, day: 25, parts: 1 },
        ]
    );
}

#[test]
fn test_plugin_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"seeds"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.info(1999, 24),
        Some(FactoryInfo { year: 1999, day: 24, parts: 2 })
    );
    assert_eq!(registry.info(1999, 25), None);
}

#[test]
fn test_solve_through_registry() {
    let registry = test_plugins().build();
    let mut solver = registry.create_solver(1999, 24, "79 14 55 13").unwrap();

    assert_eq!(solver.year(), 1999);
    assert_eq!(solver.day(), 24);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "13");
    assert_eq!(solver.solve(2).unwrap().answer, "4");
    assert!(solver.parse_timing().end >= solver.parse_timing().start);
    assert_eq!(solver.parse_duration(), solver.parse_timing().duration());

    let result = solver.solve(1).unwrap();
    assert!(result.duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_out_of_range_part_through_registry() {
    let registry = test_plugins().build();
    let mut solver = registry.create_solver(1999, 25, "seeds").unwrap();

    assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn test_not_found() {
    let registry = test_plugins().build();

    assert!(matches!(
        registry.create_solver(2023, 5, "seeds"),
        Err(SolverError::NotFound(2023, 5))
    ));
}

#[test]
fn test_parse_error_propagates() {
    let registry = test_plugins().build();

    assert!(matches!(
        registry.create_solver(1999, 25, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_duplicate_plugin_registration_refused() {
    let result = test_plugins().register_solver_plugins(|plugin| plugin.year == 1999);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(1999, 24 | 25))
    ));
}

#[test]
fn test_empty_registry() {
    let registry = SolverRegistryBuilder::default().build();

    assert!(registry.is_empty());
    assert_eq!(registry.iter_info().count(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Each `(year, day)` takes one registration; the second is refused.
    #[test]
    fn prop_register_once(year in 2015u16..2030, day in 1u8..=25) {
        let builder = Seeds.register_with(SolverRegistryBuilder::new(), year, day).unwrap();

        match Untagged.register_with(builder, year, day) {
            Err(RegistrationError::DuplicateSolver(y, d)) => {
                prop_assert_eq!((y, d), (year, day));
            }
            Ok(_) => prop_assert!(false, "duplicate registration accepted"),
        }
    }

    /// Every registered pair can be looked up; nothing else can.
    #[test]
    fn prop_lookup_matches_registrations(
        days in prop::collection::btree_set(1u8..=25, 0..10),
        probe in 1u8..=25,
    ) {
        let registry = days
            .iter()
            .try_fold(SolverRegistryBuilder::new(), |builder, &day| {
                Seeds.register_with(builder, 2023, day)
            })
            .unwrap()
            .build();

        prop_assert_eq!(registry.len(), days.len());
        prop_assert_eq!(registry.info(2023, probe).is_some(), days.contains(&probe));
        prop_assert_eq!(
            registry.create_solver(2023, probe, "1 2").is_ok(),
            days.contains(&probe)
        );
    }
}
