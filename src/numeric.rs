//! Small integer and float helpers the fraction type is built on.

/// Tolerance used for float near-equality.
pub const EPSILON: f64 = 1e-11;

pub fn abs_pair(number1: i64, number2: i64) -> (i64, i64) {
    (number1.abs(), number2.abs())
}

/// Number of decimal digits of `|n|`. Zero has one digit.
pub fn digit_length(n: i64) -> usize {
    let mut rest = n.unsigned_abs();
    let mut length = 1;

    while rest >= 10 {
        rest /= 10;
        length += 1;
    }

    length
}

pub fn approx_eq(number1: f64, number2: f64, e: f64) -> bool {
    (number1 - number2).abs() < e
}

/// `divider` must be nonzero.
pub fn is_divisible_exactly(number: i64, divider: i64) -> bool {
    number % divider == 0
}
