/// Fixed-point scale for all rate math: 1e27 ("ray")
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// Seconds in a 365.25-day year (accounts for leap years)
pub const SECONDS_PER_YEAR: u128 = 31_557_600;

/// Seconds per year as a ray value, for fixed-point multiplication
pub const SECONDS_PER_YEAR_RAY: u128 = SECONDS_PER_YEAR * RAY;

/// Cap on compounding periods per year
pub const MAX_COMPOUNDING_PERIODS: u32 = 365;

/// Ceiling on configured rates: 100x scale (10,000%)
pub const MAX_RATE: u128 = 100 * RAY;

/// Basis points denominator (100% = 10000)
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Seed for the RateConfig account PDA
pub const RATE_CONFIG_SEED: &[u8] = b"rate_config";
