//! # unital-solve
//!
//! Basic-solution enumeration for underdetermined linear systems.
//!
//! Given an augmented matrix `[A|b]`, the enumerator tries every pivot
//! placement, reads off the basic (determined) variables of each pivoted
//! matrix, and chases degenerate zero-pivot cells a bounded number of
//! recursion levels deep. The result is the set of distinct basic
//! solutions reachable by pivoting — a heuristic, depth-limited relative
//! of the simplex method's basic-feasible-solution search, not a
//! complete enumeration.
//!
//! The branching factor is `height × (width − 1)` configurations per
//! level across up to `deepness` levels, so worst-case work is
//! exponential in `deepness`; the depth bound is the only cutoff.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod enumerate;

pub use enumerate::{enumerate_basic_solutions, enumerate_with_stats, SearchStats};
