use crate::error::FractionError;
use crate::numeric::{abs_pair, approx_eq, is_divisible_exactly, EPSILON};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

const DIVIDERS: [i64; 4] = [2, 3, 5, 7];

/// A reduced, immutable fraction.
///
/// The sign lives in the numerator; the denominator is always positive.
/// Reduction only removes common factors 2, 3, 5 and 7 (plus the cases where
/// one side divides the other), so `22 / 33` stays as it is.
#[derive(Clone)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
    sign: i32,
    pub(crate) view: OnceLock<String>,
}

impl Fraction {
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, FractionError> {
        Self::from_wide(numerator.into(), denominator.into())
    }

    /// Builds a fraction from intermediate results that may not fit in `i32`
    /// before reduction.
    pub(crate) fn from_wide(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            tracing::debug!(numerator, "rejected fraction with zero denominator");
            return Err(FractionError::InvalidArgument);
        }

        let sign = if numerator.signum() * denominator.signum() >= 0 {
            1
        } else {
            -1
        };

        let (abs_numerator, abs_denominator) = abs_pair(numerator, denominator);
        let (new_numerator, new_denominator) = simplify(abs_numerator, abs_denominator);

        tracing::trace!(
            numerator,
            denominator,
            new_numerator,
            new_denominator,
            "simplified fraction"
        );

        Ok(Self {
            numerator: narrow(i64::from(sign) * new_numerator)?,
            denominator: narrow(new_denominator)?,
            sign,
            view: OnceLock::new(),
        })
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// `1` for zero and positive fractions, `-1` otherwise.
    pub fn sign(&self) -> i32 {
        self.sign
    }

    /// Same denominator, new numerator.
    ///
    /// When this fraction is negative and `numerator` is negative too, the
    /// absolute value of `numerator` is used: `(-1 / 1).with_numerator(-1)`
    /// is `1 / 1`.
    pub fn with_numerator(&self, numerator: i32) -> Result<Self, FractionError> {
        self.with_wide_numerator(numerator.into())
    }

    pub(crate) fn with_wide_numerator(&self, numerator: i64) -> Result<Self, FractionError> {
        let numerator = if self.sign == -1 && numerator < 0 {
            numerator.abs()
        } else {
            numerator
        };

        Self::from_wide(numerator, self.denominator.into())
    }

    pub fn with_denominator(&self, denominator: i32) -> Result<Self, FractionError> {
        Self::new(self.numerator, denominator)
    }

    /// Swaps numerator and denominator. Fails for a zero fraction.
    pub fn reverse(&self) -> Result<Self, FractionError> {
        Self::from_wide(self.denominator.into(), self.numerator.into())
    }

    /// Non-negative fraction with the same magnitude. Only `i32::MIN / 1`
    /// overflows.
    pub fn abs(&self) -> Result<Self, FractionError> {
        let (abs_numerator, abs_denominator) =
            abs_pair(self.numerator.into(), self.denominator.into());

        Self::from_wide(abs_numerator, abs_denominator)
    }

    /// Integer part, truncated toward zero.
    pub fn whole_part(&self) -> i32 {
        self.numerator / self.denominator
    }

    pub fn as_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    pub fn is_close_to(&self, value: f64) -> bool {
        approx_eq(self.as_f64(), value, EPSILON)
    }

    pub(crate) fn is_whole_number(&self) -> bool {
        self.numerator == 0
            || self.denominator == 1
            || self.numerator.unsigned_abs() == self.denominator.unsigned_abs()
    }

    pub(crate) fn has_same_denominator(&self, other: &Fraction) -> bool {
        self.denominator.unsigned_abs() == other.denominator.unsigned_abs()
    }

    fn is_greater_than(&self, other: &Fraction) -> bool {
        if self.has_same_denominator(other) {
            return self.numerator > other.numerator;
        }

        cross_multiplication(self, other) > cross_multiplication(other, self)
    }
}

/// `fraction1.numerator * fraction2.denominator`, without overflow.
pub(crate) fn cross_multiplication(fraction1: &Fraction, fraction2: &Fraction) -> i64 {
    i64::from(fraction1.numerator) * i64::from(fraction2.denominator)
}

fn simplify(numerator: i64, denominator: i64) -> (i64, i64) {
    if numerator == denominator {
        return (1, 1);
    }

    if is_divisible_exactly(numerator, denominator) {
        return (numerator / denominator, 1);
    }

    if is_divisible_exactly(denominator, numerator) {
        return (1, denominator / numerator);
    }

    brute_force_dividers(numerator, denominator)
}

fn brute_force_dividers(mut numerator: i64, mut denominator: i64) -> (i64, i64) {
    for divider in DIVIDERS {
        while is_divisible_exactly(numerator, divider) && is_divisible_exactly(denominator, divider)
        {
            numerator /= divider;
            denominator /= divider;
        }
    }

    (numerator, denominator)
}

fn narrow(n: i64) -> Result<i32, FractionError> {
    i32::try_from(n).map_err(|_| FractionError::Overflow(n))
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self {
            numerator: n,
            denominator: 1,
            sign: if n >= 0 { 1 } else { -1 },
            view: OnceLock::new(),
        }
    }
}

impl TryFrom<(i32, i32)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::from(0)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fraction")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .finish()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator.unsigned_abs() == other.numerator.unsigned_abs()
            && self.has_same_denominator(other)
            && self.sign == other.sign
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.numerator.unsigned_abs(), self.denominator.unsigned_abs()).hash(state);
        self.sign.hash(state);
    }
}

// Fractions with the same value but different canonical forms (`22 / 33` and
// `2 / 3`) are incomparable.
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_greater_than(other) {
            Some(Ordering::Greater)
        } else if other.is_greater_than(self) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}
