use crate::error::FractionError;
use crate::fraction::{cross_multiplication, Fraction};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Fraction {
    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if self.has_same_denominator(other) {
            return Fraction::from_wide(
                i64::from(self.numerator()) + i64::from(other.numerator()),
                self.denominator().into(),
            );
        }

        let new_denominator = i64::from(self.denominator()) * i64::from(other.denominator());
        let new_numerator = cross_multiplication(self, other) + cross_multiplication(other, self);

        Fraction::from_wide(new_numerator, new_denominator)
    }

    pub fn checked_neg(&self) -> Result<Fraction, FractionError> {
        self.with_wide_numerator(-i64::from(self.numerator()))
    }

    pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        self.checked_add(&other.checked_neg()?)
    }

    pub fn checked_mul(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        Fraction::from_wide(
            i64::from(self.numerator()) * i64::from(other.numerator()),
            i64::from(self.denominator()) * i64::from(other.denominator()),
        )
    }

    /// Fails with [`FractionError::InvalidArgument`] when `other` is zero.
    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        self.checked_mul(&other.reverse()?)
    }
}

fn unwrap_op(result: Result<Fraction, FractionError>, op: &str) -> Fraction {
    match result {
        Ok(fraction) => fraction,
        Err(e) => panic!("attempt to {} fractions failed: {}", op, e),
    }
}

// Operators panic where the `checked_*` methods return an error.
macro_rules! forward_binary_op {
    ( $( $trait:ident, $method:ident, $checked:ident );* $(;)? ) => {
        $(
            impl $trait<&Fraction> for &Fraction {
                type Output = Fraction;

                fn $method(self, rhs: &Fraction) -> Fraction {
                    unwrap_op(self.$checked(rhs), stringify!($method))
                }
            }

            impl $trait<Fraction> for &Fraction {
                type Output = Fraction;

                fn $method(self, rhs: Fraction) -> Fraction {
                    $trait::$method(self, &rhs)
                }
            }

            impl $trait<&Fraction> for Fraction {
                type Output = Fraction;

                fn $method(self, rhs: &Fraction) -> Fraction {
                    $trait::$method(&self, rhs)
                }
            }

            impl $trait for Fraction {
                type Output = Fraction;

                fn $method(self, rhs: Fraction) -> Fraction {
                    $trait::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_binary_op! {
    Add, add, checked_add;
    Sub, sub, checked_sub;
    Mul, mul, checked_mul;
    Div, div, checked_div;
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        unwrap_op(self.checked_neg(), "negate")
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -&self
    }
}
