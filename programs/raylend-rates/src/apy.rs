//! Conversions between per-second rates, APR, and compounding APY, plus
//! time-value-of-money helpers.

use crate::constants::{MAX_COMPOUNDING_PERIODS, RAY, SECONDS_PER_YEAR_RAY};
use crate::errors::RaylendError;
use crate::math::{ray_div, ray_mul, ray_pow};
use anchor_lang::prelude::*;

/// Annualize a per-second rate without compounding (365.25-day year).
pub fn per_second_to_apr(rate_per_second: u128) -> Result<u128> {
    ray_mul(rate_per_second, SECONDS_PER_YEAR_RAY)
}

/// Annual percentage yield from an APR compounded `periods_per_year` times.
///
/// Repeated fixed-point rounding can leave the compounded factor a hair
/// under RAY, so the result floors at zero; APY is never negative.
pub fn apr_to_apy(apr: u128, periods_per_year: u32) -> Result<u128> {
    if periods_per_year == 0 {
        return err!(RaylendError::DivisionByZero);
    }
    require!(
        periods_per_year <= MAX_COMPOUNDING_PERIODS,
        RaylendError::PeriodsTooHigh
    );

    let rate_per_period = ray_div(apr, periods_per_year as u128 * RAY)?;
    let one_plus = RAY
        .checked_add(rate_per_period)
        .ok_or(RaylendError::MathOverflow)?;
    let compounded = ray_pow(one_plus, periods_per_year)?;
    Ok(compounded.saturating_sub(RAY))
}

/// Compound `principal` forward by `rate_per_period` over `periods`.
pub fn future_value(principal: u128, rate_per_period: u128, periods: u32) -> Result<u128> {
    if periods == 0 {
        return Ok(principal);
    }
    require!(
        periods <= MAX_COMPOUNDING_PERIODS,
        RaylendError::PeriodsTooHigh
    );

    let growth = growth_factor(rate_per_period, periods)?;
    ray_mul(principal, growth)
}

/// Discount `fv` back by `rate_per_period` over `periods`. Inverse of
/// [`future_value`].
pub fn present_value(fv: u128, rate_per_period: u128, periods: u32) -> Result<u128> {
    if periods == 0 {
        return Ok(fv);
    }
    require!(
        periods <= MAX_COMPOUNDING_PERIODS,
        RaylendError::PeriodsTooHigh
    );

    let growth = growth_factor(rate_per_period, periods)?;
    ray_div(fv, growth)
}

fn growth_factor(rate_per_period: u128, periods: u32) -> Result<u128> {
    let one_plus = RAY
        .checked_add(rate_per_period)
        .ok_or(RaylendError::MathOverflow)?;
    ray_pow(one_plus, periods)
}
