//! Sums of unit-terms.
//!
//! A [`Composite`] holds one [`Value`] per distinct unit, in insertion
//! order. Addition and division merge operands pairwise over shared
//! units; multiplication expands the full Cartesian product of terms,
//! polynomial-style. The asymmetry is deliberate and observable.

use std::fmt;
use std::str::FromStr;

use num_traits::Zero;
use thiserror::Error;
use unital_core::{unit, UnitId};

use crate::value::{Value, DEFAULT_PRECISION};

/// Errors produced when parsing a term string such as `"2i+3j-4"`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseTermError {
    /// The input contained no terms.
    #[error("empty term string")]
    Empty,

    /// A term's leading numeric run did not parse as a magnitude.
    #[error("invalid magnitude in term `{0}`")]
    InvalidMagnitude(String),

    /// A term's trailing unit name contained non-alphabetic characters.
    #[error("invalid unit name in term `{0}`")]
    InvalidUnit(String),
}

/// The partition of two composites' unit sets.
///
/// Orders are insertion orders of the source composites, left first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitUnits {
    /// Units present only in the left operand.
    pub only_left: Vec<UnitId>,
    /// Units present only in the right operand.
    pub only_right: Vec<UnitId>,
    /// Units present in both operands.
    pub shared: Vec<UnitId>,
}

/// An ordered sum of unit-terms, one term per distinct unit.
///
/// A composite with a single number-unit term represents a plain scalar;
/// an empty composite is the additive zero. Insertion order is irrelevant
/// to the algebra but preserved for deterministic stringification, so
/// equality compares term sets, not term order.
#[derive(Clone, Debug, Default)]
pub struct Composite {
    terms: Vec<Value>,
}

impl Composite {
    /// Builds a composite from values.
    ///
    /// A later value with an already-present unit overwrites the earlier
    /// term in place, as map insertion would.
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut composite = Self::zero();
        for value in values {
            composite.insert(value);
        }
        composite
    }

    /// Creates a plain-number composite.
    #[must_use]
    pub fn num(magnitude: f64) -> Self {
        Self {
            terms: vec![Value::num(magnitude)],
        }
    }

    /// Converts a slice of plain numbers into number-unit composites.
    #[must_use]
    pub fn from_slice(nums: &[f64]) -> Vec<Self> {
        nums.iter().copied().map(Self::num).collect()
    }

    /// Returns the terms in insertion order.
    #[must_use]
    pub fn terms(&self) -> &[Value] {
        &self.terms
    }

    /// Returns the term for a unit, if present.
    #[must_use]
    pub fn get(&self, unit: UnitId) -> Option<&Value> {
        self.terms.iter().find(|v| v.unit == unit)
    }

    fn insert(&mut self, value: Value) {
        match self.terms.iter_mut().find(|v| v.unit == value.unit) {
            Some(slot) => *slot = value,
            None => self.terms.push(value),
        }
    }

    /// Partitions the unit sets of two composites.
    #[must_use]
    pub fn split_units(&self, other: &Self) -> SplitUnits {
        let mut split = SplitUnits::default();
        for v in &self.terms {
            if other.get(v.unit).is_some() {
                split.shared.push(v.unit);
            } else {
                split.only_left.push(v.unit);
            }
        }
        for v in &other.terms {
            if self.get(v.unit).is_none() {
                split.only_right.push(v.unit);
            }
        }
        split
    }

    /// Combines two composites pairwise over shared units.
    ///
    /// Terms exclusive to either operand pass through unchanged (left
    /// operand's first); shared units combine via `op`.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value,
    {
        let split = self.split_units(other);

        let mut values = Vec::with_capacity(
            split.only_left.len() + split.only_right.len() + split.shared.len(),
        );
        for id in &split.only_left {
            values.push(*self.get(*id).expect("unit from split"));
        }
        for id in &split.only_right {
            values.push(*other.get(*id).expect("unit from split"));
        }
        for id in &split.shared {
            let left = self.get(*id).expect("unit from split");
            let right = other.get(*id).expect("unit from split");
            values.push(op(left, right));
        }

        Self::from_values(values)
    }

    /// Adds two composites over the merged unit set.
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        self.zip_with(other, Value::sum)
    }

    /// Applies `f` to every term.
    #[must_use]
    pub fn map<F: Fn(&Value) -> Value>(&self, f: F) -> Self {
        Self::from_values(self.terms.iter().map(f))
    }

    /// Negates every term.
    #[must_use]
    pub fn negation(&self) -> Self {
        self.map(Value::negation)
    }

    /// Subtracts `other` from `self` over the merged unit set.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.sum(&other.negation())
    }

    /// Takes the absolute value of every term.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(Value::abs)
    }

    /// Multiplies two composites by full polynomial expansion.
    ///
    /// Every term of `self` is multiplied against every term of `other`;
    /// each cross product forms a one-term composite and the results are
    /// folded together with [`Composite::sum`], so cross terms landing on
    /// the same unit accumulate. Not the pairwise shared-unit scheme used
    /// by `sum` and `divide` — the asymmetry is part of the contract.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut acc = Self::zero();
        for left in &self.terms {
            for right in &other.terms {
                let cross = Self::from_values([left.multiply(right)]);
                acc = acc.sum(&cross);
            }
        }
        acc
    }

    /// Divides pairwise over shared units.
    ///
    /// Each quotient collapses to the number unit per [`Value::divide`];
    /// zero divisors propagate as infinities or NaN.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        self.zip_with(other, Value::divide)
    }

    /// Extracts the number-unit magnitude, or 0 when absent.
    ///
    /// This is the coercion back to a plain scalar for computations known
    /// to be unit-free; any non-number terms are dropped.
    #[must_use]
    pub fn numerize(&self) -> f64 {
        self.get(UnitId::NUMBER).map_or(0.0, Value::numerize)
    }

    /// Sums the magnitudes of all terms, ignoring units.
    #[must_use]
    pub fn magnitude_sum(&self) -> f64 {
        self.terms.iter().map(Value::numerize).sum()
    }

    /// Renders the terms joined by spaces.
    ///
    /// With `spaced_sign`, every term after the first carries an explicit
    /// sign separated from its digits, reading like a written-out sum.
    #[must_use]
    pub fn format(&self, precision: usize, spaced_sign: bool) -> String {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, v)| v.format(precision, spaced_sign && i != 0))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Composite {
    /// Term-set equality: same units, same magnitudes, any order.
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .all(|v| other.get(v.unit).map(|o| o.magnitude) == Some(v.magnitude))
    }
}

impl Zero for Composite {
    fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    #[allow(clippy::float_cmp)] // additive zero means every magnitude is exactly 0
    fn is_zero(&self) -> bool {
        self.terms.iter().all(|v| v.magnitude == 0.0)
    }
}

impl std::ops::Add for &Composite {
    type Output = Composite;

    fn add(self, rhs: Self) -> Composite {
        self.sum(rhs)
    }
}

impl std::ops::Sub for &Composite {
    type Output = Composite;

    fn sub(self, rhs: Self) -> Composite {
        self.subtract(rhs)
    }
}

impl std::ops::Mul for &Composite {
    type Output = Composite;

    fn mul(self, rhs: Self) -> Composite {
        self.multiply(rhs)
    }
}

impl std::ops::Div for &Composite {
    type Output = Composite;

    fn div(self, rhs: Self) -> Composite {
        self.divide(rhs)
    }
}

impl std::ops::Neg for &Composite {
    type Output = Composite;

    fn neg(self) -> Composite {
        self.negation()
    }
}

impl std::ops::Add for Composite {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.sum(&rhs)
    }
}

impl std::ops::Sub for Composite {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul for Composite {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Div for Composite {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(&rhs)
    }
}

impl std::ops::Neg for Composite {
    type Output = Self;

    fn neg(self) -> Self {
        self.negation()
    }
}

impl FromStr for Composite {
    type Err = ParseTermError;

    /// Parses a concatenated-signed-terms string such as `"2i+3j-4"`.
    ///
    /// Each term is a leading numeric run (default magnitude 1 when
    /// absent) followed by an alphabetic unit name (the number unit when
    /// absent). Terms are split at `+` and `-` boundaries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTermError::Empty);
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        for (i, c) in trimmed.char_indices() {
            if (c == '+' || c == '-') && i > start {
                pieces.push(&trimmed[start..i]);
                start = i;
            }
        }
        pieces.push(&trimmed[start..]);

        let mut values = Vec::with_capacity(pieces.len());
        for piece in pieces {
            values.push(parse_term(piece)?);
        }
        Ok(Self::from_values(values))
    }
}

fn parse_term(piece: &str) -> Result<Value, ParseTermError> {
    let (sign, body) = match piece.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, piece.strip_prefix('+').unwrap_or(piece)),
    };

    let split = body
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(body.len());
    let (digits, name) = body.split_at(split);

    let magnitude = if digits.is_empty() {
        1.0
    } else {
        digits
            .parse::<f64>()
            .map_err(|_| ParseTermError::InvalidMagnitude(piece.to_owned()))?
    };

    if name.is_empty() {
        if digits.is_empty() {
            // A bare sign with neither digits nor unit is malformed.
            return Err(ParseTermError::InvalidMagnitude(piece.to_owned()));
        }
        return Ok(Value::num(sign * magnitude));
    }
    if !name.chars().all(char::is_alphabetic) {
        return Err(ParseTermError::InvalidUnit(piece.to_owned()));
    }
    Ok(Value::with_unit(sign * magnitude, unit(name)))
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DEFAULT_PRECISION, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_merges_keys() {
        let a: Composite = "2i+3".parse().unwrap();
        let b: Composite = "4i+5j".parse().unwrap();

        let s = a.sum(&b);
        assert_eq!(s.get(unit("i")).unwrap().magnitude, 6.0);
        assert_eq!(s.get(unit("j")).unwrap().magnitude, 5.0);
        assert_eq!(s.numerize(), 3.0);
    }

    #[test]
    fn test_split_units() {
        let a: Composite = "1i+2j".parse().unwrap();
        let b: Composite = "3j+4k".parse().unwrap();

        let split = a.split_units(&b);
        assert_eq!(split.only_left, vec![unit("i")]);
        assert_eq!(split.only_right, vec![unit("k")]);
        assert_eq!(split.shared, vec![unit("j")]);
    }

    #[test]
    fn test_multiply_is_cartesian() {
        // (2i + 3) * (4j + 5) = 8ij + 10i + 12j + 15
        let a: Composite = "2i+3".parse().unwrap();
        let b: Composite = "4j+5".parse().unwrap();

        let p = a.multiply(&b);
        assert_eq!(p.get(unit("ij")).unwrap().magnitude, 8.0);
        assert_eq!(p.get(unit("i")).unwrap().magnitude, 10.0);
        assert_eq!(p.get(unit("j")).unwrap().magnitude, 12.0);
        assert_eq!(p.numerize(), 15.0);
    }

    #[test]
    fn test_multiply_accumulates_colliding_cross_terms() {
        // (2i) * (3i + 4): both cross terms land on unit i (equal units
        // merge rather than concatenate), so they accumulate: 6i + 8i.
        let a: Composite = "2i".parse().unwrap();
        let b: Composite = "3i+4".parse().unwrap();

        let p = a.multiply(&b);
        assert_eq!(p.terms().len(), 1);
        assert_eq!(p.get(unit("i")).unwrap().magnitude, 14.0);
    }

    #[test]
    fn test_divide_is_pairwise() {
        let a: Composite = "6i+9j".parse().unwrap();
        let b: Composite = "2i+3j".parse().unwrap();

        let q = a.divide(&b);
        // Both quotients collapse onto the number unit; the second insert
        // overwrites the first, map-style.
        assert_eq!(q.terms().len(), 1);
        assert!(q.terms()[0].is_number());
    }

    #[test]
    fn test_numerize_defaults_to_zero() {
        let c: Composite = "2i".parse().unwrap();
        assert_eq!(c.numerize(), 0.0);
        assert_eq!(c.magnitude_sum(), 2.0);
    }

    #[test]
    fn test_parse_defaults() {
        let c: Composite = "i".parse().unwrap();
        assert_eq!(c.get(unit("i")).unwrap().magnitude, 1.0);

        let d: Composite = "-j+2".parse().unwrap();
        assert_eq!(d.get(unit("j")).unwrap().magnitude, -1.0);
        assert_eq!(d.numerize(), 2.0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Composite>(), Err(ParseTermError::Empty));
        assert!(matches!(
            "2i+3%".parse::<Composite>(),
            Err(ParseTermError::InvalidUnit(_))
        ));
        assert!(matches!(
            "+".parse::<Composite>(),
            Err(ParseTermError::InvalidMagnitude(_))
        ));
    }

    #[test]
    fn test_format_spaced_signs() {
        let c: Composite = "2i+3j-4".parse().unwrap();
        assert_eq!(c.format(10, true), "2i + 3j - 4");
        assert_eq!(c.format(10, false), "2i 3j -4");
    }

    #[test]
    fn test_zero_identity() {
        let c: Composite = "2i+3".parse().unwrap();
        assert_eq!(Composite::zero().sum(&c), c);
        assert_eq!(c.sum(&Composite::zero()), c);
        assert!(Composite::zero().is_zero());
        assert!(c.subtract(&c).is_zero());
    }
}
