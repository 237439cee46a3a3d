//! Utilization and the kinked borrow-rate curve.
//!
//! Uses a two-slope model like Aave/Compound: a gentle linear ramp up to the
//! kink utilization, then a steep segment that discourages pools from
//! staying over-utilized.

use crate::constants::{BPS_DENOMINATOR, RAY};
use crate::errors::RaylendError;
use crate::math::{ray_div, ray_mul};
use crate::state::RateModel;
use anchor_lang::prelude::*;

/// Pool utilization as a ray ratio of borrows to total liquidity.
///
/// An empty pool is unutilized. A pool with outstanding debt and no cash is
/// fully utilized; the special case keeps the denominator nonzero.
pub fn utilization(cash: u128, borrows: u128) -> Result<u128> {
    if borrows == 0 {
        return Ok(0);
    }
    if cash == 0 {
        return Ok(RAY);
    }
    let total = cash
        .checked_add(borrows)
        .ok_or(RaylendError::MathOverflow)?;
    ray_div(borrows, total)
}

/// Per-second borrow rate from the kinked curve.
///
/// Continuous and non-decreasing in utilization: the below-kink branch ramps
/// from `base` at u = 0 to exactly `base + slope_below_kink` at u = kink,
/// where the steep segment takes over.
pub fn borrow_rate_per_second(cash: u128, borrows: u128, model: &RateModel) -> Result<u128> {
    let u = utilization(cash, borrows)?;
    if u == 0 {
        return Ok(model.base_rate_per_second);
    }

    if u <= model.kink_utilization {
        let ramp = ray_mul(model.slope_below_kink, ray_div(u, model.kink_utilization)?)?;
        return model
            .base_rate_per_second
            .checked_add(ramp)
            .ok_or(RaylendError::MathOverflow.into());
    }

    let at_kink = model
        .base_rate_per_second
        .checked_add(model.slope_below_kink)
        .ok_or(RaylendError::MathOverflow)?;

    // A kink at 100% utilization leaves the steep segment without a domain;
    // the curve collapses to its at-kink value.
    let headroom = RAY - model.kink_utilization;
    if headroom == 0 {
        return Ok(at_kink);
    }

    let excess = u - model.kink_utilization;
    let steep = ray_mul(model.slope_above_kink, ray_div(excess, headroom)?)?;
    at_kink
        .checked_add(steep)
        .ok_or(RaylendError::MathOverflow.into())
}

/// Per-second supply rate: the borrow rate earned on the utilized share of
/// the pool, net of the protocol fee.
pub fn supply_rate_per_second(
    cash: u128,
    borrows: u128,
    model: &RateModel,
    fee_bps: u16,
) -> Result<u128> {
    let u = utilization(cash, borrows)?;
    if u == 0 {
        return Ok(0);
    }

    let borrow_rate = borrow_rate_per_second(cash, borrows, model)?;
    let gross = ray_mul(borrow_rate, u)?;

    let net_share = BPS_DENOMINATOR
        .checked_sub(fee_bps)
        .ok_or(RaylendError::FeeTooHigh)? as u128;
    gross
        .checked_mul(net_share)
        .ok_or(RaylendError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(RaylendError::DivisionByZero.into())
}
