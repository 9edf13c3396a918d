//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

fn parse_seeds(input: &str) -> Result<Vec<u64>, ParseError> {
    input
        .split_whitespace()
        .map(|n| {
            n.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad seed `{n}`")))
        })
        .collect()
}

fn render(seeds: &[u64]) -> String {
    seeds
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Part 1 is the lowest seed, part 2 the highest.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SeedBounds;

impl AocParser for SeedBounds {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_seeds(input)
    }
}

impl PartSolver<1> for SeedBounds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().min().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for SeedBounds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or(0).to_string())
    }
}

mod dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// `solve_part(N)` is `PartSolver<N>::solve`.
        #[test]
        fn solve_part_dispatches_to_part_solver(
            seeds in prop::collection::vec(0u64..1_000, 1..8),
            part in 1u8..=2,
        ) {
            let input = render(&seeds);
            let mut via_dispatch = SeedBounds::parse(&input).unwrap();
            let mut direct = SeedBounds::parse(&input).unwrap();

            let dispatched = SeedBounds::solve_part(&mut via_dispatch, part).unwrap();
            let expected = match part {
                1 => <SeedBounds as PartSolver<1>>::solve(&mut direct),
                _ => <SeedBounds as PartSolver<2>>::solve(&mut direct),
            }
            .unwrap();

            prop_assert_eq!(dispatched, expected);
        }

        /// Parts the derive did not generate report `PartNotImplemented`.
        #[test]
        fn unknown_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = SeedBounds::parse("79 14 55 13").unwrap();

            match SeedBounds::solve_part(&mut shared, part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartNotImplemented for {}, got {:?}", part, other),
            }
        }
    }

    #[test]
    fn parts_constant_matches_attribute() {
        assert_eq!(SeedBounds::PARTS, 2);
    }
}

mod borrowed {
    use super::*;

    /// Keeps the input lines borrowed; part 1 counts them.
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 1)]
    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.lines().filter(|l| !l.is_empty()).collect())
        }
    }

    impl PartSolver<1> for Lines {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    proptest! {
        #[test]
        fn borrowed_lines_are_counted(words in prop::collection::vec("[a-z]{1,8}", 0..10)) {
            let input = words.join("\n");
            let mut shared = Lines::parse(&input).unwrap();

            prop_assert_eq!(Lines::solve_part(&mut shared, 1).unwrap(), words.len().to_string());
            prop_assert_eq!(shared, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

mod caching {
    use super::*;

    #[derive(Debug)]
    struct Cached {
        seeds: Vec<u64>,
        total: Option<u64>,
    }

    /// Part 1 caches the seed total; part 2 reuses it.
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct SeedTotals;

    impl AocParser for SeedTotals {
        type SharedData<'a> = Cached;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(Cached {
                seeds: parse_seeds(input)?,
                total: None,
            })
        }
    }

    impl PartSolver<1> for SeedTotals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total: u64 = shared.seeds.iter().sum();
            shared.total = Some(total);
            Ok(total.to_string())
        }
    }

    impl PartSolver<2> for SeedTotals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared
                .total
                .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
            Ok((total * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn later_part_sees_earlier_cache(seeds in prop::collection::vec(0u64..1_000, 1..8)) {
            let expected: u64 = seeds.iter().sum();
            let mut shared = SeedTotals::parse(&render(&seeds)).unwrap();

            prop_assert_eq!(SeedTotals::solve_part(&mut shared, 1).unwrap(), expected.to_string());
            prop_assert_eq!(shared.total, Some(expected));
            prop_assert_eq!(SeedTotals::solve_part(&mut shared, 2).unwrap(), (expected * 2).to_string());
        }
    }

    #[test]
    fn part_two_alone_fails() {
        let mut shared = SeedTotals::parse("1 2 3").unwrap();
        assert!(matches!(
            SeedTotals::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }
}

#[test]
fn parse_error_surfaces() {
    assert_eq!(
        SeedBounds::parse("79 fourteen").unwrap_err(),
        ParseError::InvalidFormat("bad seed `fourteen`".to_string())
    );
}
