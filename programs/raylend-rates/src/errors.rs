use anchor_lang::prelude::*;

#[error_code]
pub enum RaylendError {
    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Compounding periods exceed the cap")]
    PeriodsTooHigh,

    #[msg("Kink utilization outside [0, RAY]")]
    KinkOutOfRange,

    #[msg("Rate exceeds the configured ceiling")]
    RateTooHigh,

    #[msg("Fee exceeds 10000 basis points")]
    FeeTooHigh,

    #[msg("Snapshot marker must increase")]
    SnapshotNotNewer,
}
