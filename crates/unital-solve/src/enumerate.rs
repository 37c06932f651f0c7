//! The recursive pivot search.

#![allow(clippy::float_cmp)] // basic-column classification compares against exact 0 and 1

use rustc_hash::FxHashSet;
use unital_linalg::Matrix;
use unital_value::Composite;

/// Tolerance used by the final near-duplicate pass over solutions.
const DEDUP_TOLERANCE: f64 = 1e-5;

/// Reported magnitudes are rounded to this many fractional digits.
const ROUND_FACTOR: f64 = 1e7;

/// Execution statistics of one enumeration run.
///
/// The counter is owned by the caller and threaded through the
/// recursion; it is reporting state only and takes no part in the
/// algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of pivot-search invocations, across all recursion levels.
    pub executions: u64,
}

/// A pivot placement: `(row, column)` of the anchor.
type Config = (usize, usize);

struct Candidate {
    /// The pivoted matrix, collapsed to its plain-number parts.
    numeric: Matrix,
    /// The basic-solution vector read off the pivoted matrix.
    solution: Vec<f64>,
}

/// Enumerates the distinct basic solutions of an augmented system
/// `[A|b]`, chasing zero-pivot branches `deepness` levels deep.
///
/// Solution vectors have length `width − 1` (the augmented column is
/// excluded); free variables hold 0. The returned set is deduplicated
/// under a `1e-5` tolerance and rounded to 7 fractional digits, keeping
/// the first representative of each distinct vector in discovery order.
///
/// Degenerate pivots produce non-finite intermediate values; those flow
/// through the search silently and never panic.
#[must_use]
pub fn enumerate_basic_solutions(m: &Matrix, deepness: usize) -> Vec<Vec<f64>> {
    let mut stats = SearchStats::default();
    enumerate_with_stats(m, deepness, &mut stats)
}

/// Like [`enumerate_basic_solutions`], with caller-owned statistics.
#[must_use]
pub fn enumerate_with_stats(
    m: &Matrix,
    deepness: usize,
    stats: &mut SearchStats,
) -> Vec<Vec<f64>> {
    let raw = search(m, deepness, &FxHashSet::default(), stats);

    let mut distinct: Vec<Vec<f64>> = Vec::new();
    for solution in raw {
        if !distinct
            .iter()
            .any(|kept| same_vector(kept, &solution, DEDUP_TOLERANCE))
        {
            distinct.push(solution);
        }
    }
    for solution in &mut distinct {
        for value in solution.iter_mut() {
            *value = (*value * ROUND_FACTOR).round() / ROUND_FACTOR;
        }
    }
    distinct
}

fn search(
    m: &Matrix,
    deepness: usize,
    done: &FxHashSet<Config>,
    stats: &mut SearchStats,
) -> Vec<Vec<f64>> {
    stats.executions += 1;
    if stats.executions % 100 == 0 {
        log::debug!("{} pivot searches", stats.executions);
    }

    let height = m.height();
    let width = m.width();

    // Every pivot placement over the non-augmented columns, minus the
    // placements the parent level already explored.
    let configs: Vec<Config> = (0..height)
        .flat_map(|row| (0..width - 1).map(move |col| (row, col)))
        .filter(|config| !done.contains(config))
        .collect();

    let candidates: Vec<Candidate> = configs
        .iter()
        .map(|&(row, col)| {
            let pivoted = m.base_vector(row, col);
            Candidate {
                solution: extract_solution(&pivoted),
                numeric: pivoted.numerized(),
            }
        })
        .collect();

    // First representative of each distinct vector wins, exact equality.
    let mut solutions: Vec<Vec<f64>> = Vec::new();
    for candidate in &candidates {
        if !solutions
            .iter()
            .any(|kept| same_vector(kept, &candidate.solution, 0.0))
        {
            solutions.push(candidate.solution.clone());
        }
    }

    // Cells that are currently zero cannot be pivoted here; if depth
    // remains, re-enter from a prior result where the cell is live.
    let missing: Vec<Config> = configs
        .iter()
        .copied()
        .filter(|&(row, col)| entry(m, row, col) == 0.0)
        .collect();

    if deepness > 0 {
        let missing_set: FxHashSet<Config> = missing.iter().copied().collect();
        for &(row, col) in &missing {
            let live = candidates.iter().find(|c| {
                let value = entry(&c.numeric, row, col);
                value != 0.0 && value.is_finite()
            });
            if let Some(candidate) = live {
                solutions.extend(search(
                    &candidate.numeric,
                    deepness - 1,
                    &missing_set,
                    stats,
                ));
            }
        }
    }

    solutions
}

/// Reads the basic-solution vector off a pivoted matrix.
///
/// A column counts as basic only if every numerized entry is exactly 0
/// or 1 and exactly one entry is 1; its value is then the augmented
/// entry on that row. All other variables default to 0.
fn extract_solution(pivoted: &Matrix) -> Vec<f64> {
    let columns = pivoted.columns();
    let n = columns.len() - 1;
    let augmented = &columns[n];

    let mut solution = vec![0.0; n];
    for (i, column) in columns[..n].iter().enumerate() {
        let numeric = column.to_numeric();
        let binary = numeric.iter().all(|&v| v == 0.0 || v == 1.0);
        let ones = numeric.iter().filter(|&&v| v == 1.0).count();
        if binary && ones == 1 {
            let row = numeric
                .iter()
                .position(|&v| v == 1.0)
                .expect("counted a 1 above");
            solution[i] = augmented.values()[row].numerize();
        }
    }
    solution
}

fn entry(m: &Matrix, row: usize, col: usize) -> f64 {
    m.get(row, col).map_or(0.0, Composite::numerize)
}

/// Positional vector equality within a tolerance; zero tolerance means
/// exact equality. Vectors holding NaN are never equal to anything.
fn same_vector(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= tolerance)
}
