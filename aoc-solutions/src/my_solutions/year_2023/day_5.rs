use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::range_map::{MapEntry, RangeMap, Span};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["almanac", "range-map"])]
pub struct Solver;

/// Seeds plus the chain of conversion stages they are pushed through.
#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    stages: Vec<Stage>,
    composed: Option<RangeMap>,
}

/// One `<from>-to-<to> map:` block.
#[derive(Debug)]
pub struct Stage {
    from: String,
    to: String,
    map: RangeMap,
}

impl Almanac {
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}

impl Stage {
    /// Category this stage converts from, e.g. `seed`.
    pub fn from_category(&self) -> &str {
        &self.from
    }

    /// Category this stage converts to, e.g. `soil`.
    pub fn to_category(&self) -> &str {
        &self.to
    }

    pub fn map(&self) -> &RangeMap {
        &self.map
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = composed(&mut shared.composed, &shared.stages);
        let lowest = shared
            .seeds
            .iter()
            .map(|&seed| map.get(seed))
            .min()
            .unwrap_or(0);
        Ok(lowest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let pairs = shared.seeds.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err(SolveError::SolveFailed(
                anyhow!(
                    "seed ranges come in start/length pairs, got {} numbers",
                    shared.seeds.len()
                )
                .into(),
            ));
        }

        let spans: Vec<Span> = pairs
            .map(|pair| Span::new(pair[0], pair[1]))
            .filter(|span| !span.is_empty())
            .collect();
        if let Some(span) = spans.iter().find(|span| span.last().is_none()) {
            return Err(SolveError::SolveFailed(
                anyhow!(
                    "seed range {} {} runs past the largest seed number",
                    span.start,
                    span.length
                )
                .into(),
            ));
        }

        let map = composed(&mut shared.composed, &shared.stages);
        let lowest = spans
            .into_iter()
            .flat_map(|span| map.lookup(span))
            .map(|piece| piece.start)
            .min()
            .unwrap_or(0);
        Ok(lowest.to_string())
    }
}

/// All stages collapsed into a single map, built on first use.
fn composed<'a>(cache: &'a mut Option<RangeMap>, stages: &[Stage]) -> &'a RangeMap {
    cache.get_or_insert_with(|| {
        let map = RangeMap::compose_all(stages.iter().map(|stage| &stage.map));
        debug!(
            stages = stages.len(),
            entries = map.len(),
            "composed almanac stages"
        );
        map
    })
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = blocks(input).into_iter();

    let seeds_block = blocks.next().ok_or_else(|| anyhow!("input is empty"))?;
    let (line_no, seeds_line) = seeds_block[0];
    let seeds = seeds_line
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("(line {line_no}) expected `seeds: <numbers>`"))
        .and_then(|numbers| {
            parse_numbers(numbers).with_context(|| format!("(line {line_no}) invalid seeds"))
        })?;
    if let Some((line_no, _)) = seeds_block.get(1) {
        bail!("(line {line_no}) expected a blank line after the seeds");
    }

    let stages = blocks.try_fold(Vec::new(), |mut stages, block| -> anyhow::Result<Vec<Stage>> {
        let stage = parse_stage(&block)?;
        if let Some(previous) = stages.last()
            && previous.to != stage.from
        {
            bail!(
                "(line {}) `{}-to-{}` does not continue from `{}`",
                block[0].0,
                stage.from,
                stage.to,
                previous.to
            );
        }
        stages.push(stage);
        Ok(stages)
    })?;

    debug!(
        seeds = seeds.len(),
        stages = stages.len(),
        "parsed almanac"
    );

    Ok(Almanac {
        seeds,
        stages,
        composed: None,
    })
}

fn parse_stage(block: &[(usize, &str)]) -> anyhow::Result<Stage> {
    let (header_no, header) = block[0];
    let (from, to) = header
        .strip_suffix(" map:")
        .and_then(|name| name.split_once("-to-"))
        .ok_or_else(|| anyhow!("(line {header_no}) expected `<from>-to-<to> map:`"))?;

    let entries = block[1..]
        .iter()
        .map(|&(line_no, line)| {
            let numbers = parse_numbers(line).with_context(|| format!("(line {line_no})"))?;
            match numbers[..] {
                [destination, source, length] => Ok(MapEntry::new(destination, source, length)),
                _ => Err(anyhow!(
                    "(line {line_no}) expected `<destination> <source> <length>`, got {} numbers",
                    numbers.len()
                )),
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let map = RangeMap::try_from_entries(entries)
        .with_context(|| format!("(line {header_no}) invalid `{from}-to-{to}` map"))?;

    Ok(Stage {
        from: from.to_string(),
        to: to.to_string(),
        map,
    })
}

/// Non-empty lines with their 1-based line numbers, grouped by blank lines.
fn blocks(input: &str) -> Vec<Vec<(usize, &str)>> {
    let mut blocks = Vec::new();
    let mut block = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                blocks.push(std::mem::take(&mut block));
            }
        } else {
            block.push((idx + 1, line));
        }
    }
    if !block.is_empty() {
        blocks.push(block);
    }
    blocks
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid number `{token}`"))
        })
        .collect()
}
