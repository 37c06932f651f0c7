//! The unit-typed scalar.

use std::fmt;

use unital_core::{unit, unit_name, UnitId};

/// Default number of fractional digits used by [`fmt::Display`].
pub(crate) const DEFAULT_PRECISION: usize = 10;

/// A magnitude tagged with a symbolic unit identity.
///
/// Binary operations assume unit-compatible operands at this level; the
/// merge rules over mismatched unit sets live in
/// [`Composite`](crate::Composite).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Value {
    /// The numeric magnitude.
    pub magnitude: f64,
    /// The interned unit identity.
    pub unit: UnitId,
}

impl Value {
    /// Creates a plain number (unit-free) value.
    #[must_use]
    pub fn num(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: UnitId::NUMBER,
        }
    }

    /// Creates a value with an explicit unit.
    #[must_use]
    pub fn with_unit(magnitude: f64, unit: UnitId) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a unit-tagged value, interning the unit name.
    #[must_use]
    pub fn unit(name: &str, magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: unit(name),
        }
    }

    /// Converts a slice of plain numbers into number-unit values.
    #[must_use]
    pub fn from_slice(nums: &[f64]) -> Vec<Self> {
        nums.iter().copied().map(Self::num).collect()
    }

    /// Returns true if the unit is the pure-number unit.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.unit.is_number()
    }

    /// Returns the bare magnitude, discarding the unit.
    #[must_use]
    pub fn numerize(&self) -> f64 {
        self.magnitude
    }

    /// Adds two values; the left operand's unit is kept.
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        Self {
            magnitude: self.magnitude + other.magnitude,
            unit: self.unit,
        }
    }

    /// Negates the magnitude, keeping the unit.
    #[must_use]
    pub fn negation(&self) -> Self {
        Self {
            magnitude: -self.magnitude,
            unit: self.unit,
        }
    }

    /// Subtracts `other` from `self`; the left operand's unit is kept.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.sum(&other.negation())
    }

    /// Multiplies two values, composing units.
    ///
    /// Equal units merge; a number-unit operand is neutral and the result
    /// takes the other operand's unit; two distinct non-number units
    /// concatenate their names into a new interned unit, so repeated
    /// products of the same pair map to the same identity.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let unit = if self.unit == other.unit {
            self.unit
        } else if self.is_number() {
            other.unit
        } else if other.is_number() {
            self.unit
        } else {
            unit(&format!("{}{}", unit_name(self.unit), unit_name(other.unit)))
        };

        Self {
            magnitude: self.magnitude * other.magnitude,
            unit,
        }
    }

    /// Divides `self` by `other`, collapsing to the number unit.
    ///
    /// Division does not invert units. A zero divisor yields an infinite
    /// or NaN magnitude and is never an error; degenerate results flow
    /// through later arithmetic unchanged.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        Self::num(self.magnitude / other.magnitude)
    }

    /// Returns the absolute value, keeping the unit.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            unit: self.unit,
        }
    }

    /// Renders the value with `precision` fractional digits.
    ///
    /// Integral magnitudes print without a fractional part. A magnitude
    /// of exactly 1 with a non-number unit prints as the bare unit name.
    /// With `spaced_sign` the sign character is written explicitly (`+`
    /// for positives) and separated from the digits by a space, which is
    /// how [`Composite`](crate::Composite) joins its middle terms.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact-1 elision is part of the format contract
    pub fn format(&self, precision: usize, spaced_sign: bool) -> String {
        let name = unit_name(self.unit);

        if self.magnitude == 1.0 && !self.is_number() {
            return name;
        }

        let abs = self.magnitude.abs();
        let digits = if abs.round() == abs {
            format!("{abs}")
        } else {
            format!("{abs:.precision$}")
        };
        let sign = if self.magnitude < 0.0 {
            "-"
        } else if spaced_sign {
            "+"
        } else {
            ""
        };
        let gap = if spaced_sign { " " } else { "" };

        format!("{sign}{gap}{digits}{name}")
    }
}

impl std::ops::Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl std::ops::Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl std::ops::Div for Value {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl std::ops::Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negation()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DEFAULT_PRECISION, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_keeps_left_unit() {
        let a = Value::unit("i", 2.0);
        let b = Value::unit("i", 3.0);
        let s = a + b;
        assert_eq!(s.magnitude, 5.0);
        assert_eq!(s.unit, unit("i"));
    }

    #[test]
    fn test_multiply_number_is_neutral() {
        let p = Value::num(2.0) * Value::unit("i", 3.0);
        assert_eq!(p.magnitude, 6.0);
        assert_eq!(p.unit, unit("i"));

        let q = Value::unit("i", 3.0) * Value::num(2.0);
        assert_eq!(q.unit, unit("i"));
    }

    #[test]
    fn test_multiply_concatenates_units() {
        let p = Value::unit("i", 2.0) * Value::unit("j", 3.0);
        assert_eq!(p.magnitude, 6.0);
        assert_eq!(p.unit, unit("ij"));

        // The composed identity is interned: a second product maps to it.
        let q = Value::unit("i", 1.0) * Value::unit("j", 1.0);
        assert_eq!(p.unit, q.unit);
    }

    #[test]
    fn test_divide_collapses_to_number() {
        let q = Value::unit("i", 6.0) / Value::num(2.0);
        assert_eq!(q.magnitude, 3.0);
        assert!(q.is_number());
    }

    #[test]
    fn test_divide_by_zero_is_silent() {
        let q = Value::num(1.0) / Value::num(0.0);
        assert!(q.magnitude.is_infinite());

        let r = Value::num(0.0) / Value::num(0.0);
        assert!(r.magnitude.is_nan());
    }

    #[test]
    fn test_format_rules() {
        assert_eq!(Value::num(2.0).format(10, false), "2");
        assert_eq!(Value::num(-2.0).format(10, false), "-2");
        assert_eq!(Value::unit("i", 1.0).format(10, false), "i");
        assert_eq!(Value::unit("i", -1.0).format(10, false), "-1i");
        assert_eq!(Value::unit("j", 3.0).format(10, true), "+ 3j");
        assert_eq!(Value::unit("j", -3.0).format(10, true), "- 3j");
        assert_eq!(Value::num(0.5).format(2, false), "0.50");
    }

    #[test]
    fn test_from_slice_yields_number_values() {
        let values = Value::from_slice(&[1.0, -2.5, 0.0]);
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(Value::is_number));
        assert_eq!(values[1].magnitude, -2.5);
    }

    #[test]
    fn test_abs_and_negation() {
        let v = Value::unit("i", -4.0);
        assert_eq!(v.abs().magnitude, 4.0);
        assert_eq!((-v).magnitude, 4.0);
        assert_eq!(v.abs().unit, unit("i"));
    }
}
