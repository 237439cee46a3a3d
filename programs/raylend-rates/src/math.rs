//! Ray-scale fixed-point arithmetic.
//!
//! Values are `u128` integers read as value x 1e27. Products of two ray
//! values need up to 256 bits, so every multiply-then-divide goes through a
//! local U256 and fails with [`RaylendError::MathOverflow`] if the scaled
//! result does not fit back into `u128`. Nothing here truncates silently.

use crate::constants::RAY;
use crate::errors::RaylendError;
use anchor_lang::prelude::*;

mod u256 {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit integer for intermediate products of ray-scaled values.
        pub struct U256(4);
    }
}
use u256::U256;

/// Fixed-point multiply: `(a * b) / RAY`.
///
/// Returns 0 immediately if either operand is 0.
pub fn ray_mul(a: u128, b: u128) -> Result<u128> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let scaled = U256::from(a) * U256::from(b) / U256::from(RAY);
    if scaled > U256::from(u128::MAX) {
        return err!(RaylendError::MathOverflow);
    }
    Ok(scaled.as_u128())
}

/// Fixed-point divide: `(a * RAY) / b`.
///
/// The numerator is widened to 256 bits before scaling, so `a * RAY` cannot
/// wrap; only a quotient too large for `u128` fails.
pub fn ray_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return err!(RaylendError::DivisionByZero);
    }
    let quotient = U256::from(a) * U256::from(RAY) / U256::from(b);
    if quotient > U256::from(u128::MAX) {
        return err!(RaylendError::MathOverflow);
    }
    Ok(quotient.as_u128())
}

/// Integer power of a ray value by repeated multiplication.
///
/// `x^0 == RAY` for any x, including 0. Callers cap the exponent at 365
/// periods, so the loop stays short.
pub fn ray_pow(x: u128, n: u32) -> Result<u128> {
    if n == 0 {
        return Ok(RAY);
    }
    let mut acc = x;
    for _ in 1..n {
        acc = ray_mul(acc, x)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mul_by_one_is_identity() {
        assert_eq!(ray_mul(0, RAY).unwrap(), 0);
        assert_eq!(ray_mul(123_456_789, RAY).unwrap(), 123_456_789);
        assert_eq!(ray_mul(RAY, RAY).unwrap(), RAY);
        assert_eq!(ray_mul(u128::MAX, RAY).unwrap(), u128::MAX);
    }

    #[test]
    fn mul_zero_short_circuits() {
        assert_eq!(ray_mul(0, u128::MAX).unwrap(), 0);
        assert_eq!(ray_mul(u128::MAX, 0).unwrap(), 0);
    }

    #[test]
    fn mul_truncates_toward_zero() {
        // 1e-27 * 1e-27 rounds to zero
        assert_eq!(ray_mul(1, 1).unwrap(), 0);
        assert_eq!(ray_mul(RAY / 2, RAY / 2).unwrap(), RAY / 4);
    }

    #[test]
    fn mul_overflow_detected() {
        assert_eq!(
            ray_mul(u128::MAX, u128::MAX).unwrap_err(),
            RaylendError::MathOverflow.into()
        );
    }

    #[test]
    fn div_by_self_is_one() {
        for a in [1u128, 7, 10_000, RAY, 123 * RAY, u128::MAX] {
            assert_eq!(ray_div(a, a).unwrap(), RAY);
        }
    }

    #[test]
    fn div_by_zero_detected() {
        assert_eq!(
            ray_div(1, 0).unwrap_err(),
            RaylendError::DivisionByZero.into()
        );
        assert_eq!(
            ray_div(0, 0).unwrap_err(),
            RaylendError::DivisionByZero.into()
        );
    }

    #[test]
    fn div_quotient_overflow_detected() {
        assert_eq!(
            ray_div(u128::MAX, 1).unwrap_err(),
            RaylendError::MathOverflow.into()
        );
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        assert_eq!(ray_pow(0, 0).unwrap(), RAY);
        assert_eq!(ray_pow(RAY, 0).unwrap(), RAY);
        assert_eq!(ray_pow(u128::MAX, 0).unwrap(), RAY);
    }

    #[test]
    fn pow_one_is_identity() {
        assert_eq!(ray_pow(0, 1).unwrap(), 0);
        assert_eq!(ray_pow(42, 1).unwrap(), 42);
        assert_eq!(ray_pow(3 * RAY, 1).unwrap(), 3 * RAY);
    }

    #[test]
    fn pow_small_cases() {
        assert_eq!(ray_pow(2 * RAY, 3).unwrap(), 8 * RAY);
        assert_eq!(ray_pow(RAY / 2, 2).unwrap(), RAY / 4);
        assert_eq!(ray_pow(0, 5).unwrap(), 0);
        assert_eq!(ray_pow(RAY, 365).unwrap(), RAY);
    }

    #[test]
    fn pow_overflow_propagates() {
        // (1e8 ray)^2 = 1e16 ray, which is past the u128 ceiling
        let big = 100_000_000 * RAY;
        assert_eq!(
            ray_pow(big, 2).unwrap_err(),
            RaylendError::MathOverflow.into()
        );
    }

    proptest! {
        #[test]
        fn prop_mul_ray_identity(a in any::<u128>()) {
            prop_assert_eq!(ray_mul(a, RAY).unwrap(), a);
        }

        #[test]
        fn prop_div_self(a in 1..u128::MAX) {
            prop_assert_eq!(ray_div(a, a).unwrap(), RAY);
        }

        #[test]
        fn prop_mul_div_round_trip(
            a in 0u128..1_000_000_000_000_000_000_000_000_000_000u128,
            b in RAY..1_000_000_000_000_000_000_000_000_000_000u128,
        ) {
            let product = ray_mul(a, b).unwrap();
            let back = ray_div(product, b).unwrap();
            prop_assert!(back <= a);
            prop_assert!(a - back <= 1);
        }

        #[test]
        fn prop_pow_zero_exponent(x in any::<u128>()) {
            prop_assert_eq!(ray_pow(x, 0).unwrap(), RAY);
        }
    }
}
