//! # unital-value
//!
//! Unit-typed scalar algebra for the unital engine.
//!
//! This crate provides:
//! - [`Value`]: a magnitude tagged with an interned unit identity
//! - [`Composite`]: an ordered sum of unit-terms, one per distinct unit
//! - Parsing of term strings such as `"2i+3j"` and the matching
//!   stringification rules
//!
//! ## Unit Arithmetic
//!
//! Multiplication composes units (equal units merge, the number unit is
//! neutral, distinct units concatenate their names into a new interned
//! unit); division always collapses to the number unit. Division by a
//! zero magnitude yields IEEE-754 infinities or NaN and is never an
//! error — callers validate results through residual checks instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod composite;
pub mod value;

#[cfg(test)]
mod proptests;

pub use composite::{Composite, ParseTermError};
pub use value::Value;
