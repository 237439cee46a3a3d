use anchor_lang::prelude::*;

#[event]
pub struct RateConfigInitialized {
    pub admin: Pubkey,
    pub keeper: Pubkey,
}

#[event]
pub struct RateModelUpdated {
    pub kink_utilization: u128,
    pub slope_below_kink: u128,
    pub slope_above_kink: u128,
    pub base_rate_per_second: u128,
}

#[event]
pub struct ProtocolFeeUpdated {
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
}

#[event]
pub struct KeeperUpdated {
    pub old_keeper: Pubkey,
    pub new_keeper: Pubkey,
}

#[event]
pub struct RateSnapshotRecorded {
    pub utilization: u128,
    pub rate_per_second: u128,
    pub apr: u128,
    pub slot: u64,
    pub timestamp: i64,
}
