use crate::constants::{MAX_RATE, RAY};
use crate::errors::RaylendError;
use anchor_lang::prelude::*;

/// Kinked-curve parameters. All rates are ray-scaled per-second values; the
/// kink is a ray utilization in [0, RAY].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace)]
pub struct RateModel {
    /// Utilization where the curve switches from the gentle to the steep slope
    pub kink_utilization: u128,
    /// Rate added linearly across the [0, kink] segment
    pub slope_below_kink: u128,
    /// Rate added linearly across the (kink, 100%] segment
    pub slope_above_kink: u128,
    /// Rate charged at zero utilization
    pub base_rate_per_second: u128,
}

impl RateModel {
    /// Range checks applied before a model is accepted into the config.
    pub fn validate(&self) -> Result<()> {
        require!(self.kink_utilization <= RAY, RaylendError::KinkOutOfRange);
        require!(
            self.base_rate_per_second <= MAX_RATE,
            RaylendError::RateTooHigh
        );
        require!(self.slope_below_kink <= MAX_RATE, RaylendError::RateTooHigh);
        require!(self.slope_above_kink <= MAX_RATE, RaylendError::RateTooHigh);
        Ok(())
    }
}

/// Rate engine configuration and last computed state
#[account]
#[derive(InitSpace)]
pub struct RateConfig {
    pub admin: Pubkey,
    pub keeper: Pubkey,
    pub model: RateModel,
    pub protocol_fee_bps: u16,
    pub last_rate_per_second: u128,
    pub last_utilization: u128,
    pub last_snapshot_slot: u64,
    pub last_snapshot_ts: i64,
    pub bump: u8,
}
