use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod apy;
pub mod constants;
pub mod errors;
pub mod events;
pub mod interest;
pub mod math;
pub mod state;

pub use apy::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use interest::*;
pub use math::*;
pub use state::*;

#[program]
pub mod raylend_rates {
    use super::*;

    /// Create the rate engine config
    pub fn initialize(
        ctx: Context<Initialize>,
        keeper: Pubkey,
        model: RateModel,
        protocol_fee_bps: u16,
    ) -> Result<()> {
        model.validate()?;
        require!(
            protocol_fee_bps <= BPS_DENOMINATOR,
            RaylendError::FeeTooHigh
        );

        let config = &mut ctx.accounts.config;
        config.admin = ctx.accounts.admin.key();
        config.keeper = keeper;
        config.model = model;
        config.protocol_fee_bps = protocol_fee_bps;
        config.last_rate_per_second = 0;
        config.last_utilization = 0;
        config.last_snapshot_slot = 0;
        config.last_snapshot_ts = 0;
        config.bump = ctx.bumps.config;

        emit!(RateConfigInitialized {
            admin: config.admin,
            keeper,
        });
        msg!("Rate config initialized with admin: {}", config.admin);
        Ok(())
    }

    /// Replace the curve parameters (admin only)
    pub fn update_rate_model(ctx: Context<AdminOnly>, model: RateModel) -> Result<()> {
        model.validate()?;
        ctx.accounts.config.model = model;

        emit!(RateModelUpdated {
            kink_utilization: model.kink_utilization,
            slope_below_kink: model.slope_below_kink,
            slope_above_kink: model.slope_above_kink,
            base_rate_per_second: model.base_rate_per_second,
        });
        msg!("Rate model updated");
        Ok(())
    }

    /// Set the protocol's share of interest (admin only)
    pub fn set_protocol_fee(ctx: Context<AdminOnly>, fee_bps: u16) -> Result<()> {
        require!(fee_bps <= BPS_DENOMINATOR, RaylendError::FeeTooHigh);

        let config = &mut ctx.accounts.config;
        let old_fee_bps = config.protocol_fee_bps;
        config.protocol_fee_bps = fee_bps;

        emit!(ProtocolFeeUpdated {
            old_fee_bps,
            new_fee_bps: fee_bps,
        });
        msg!("Protocol fee updated: {} -> {} bps", old_fee_bps, fee_bps);
        Ok(())
    }

    /// Rotate the keeper authority (admin only)
    pub fn set_keeper(ctx: Context<AdminOnly>, new_keeper: Pubkey) -> Result<()> {
        let config = &mut ctx.accounts.config;
        let old_keeper = config.keeper;
        config.keeper = new_keeper;

        emit!(KeeperUpdated {
            old_keeper,
            new_keeper,
        });
        msg!("Keeper updated: {}", new_keeper);
        Ok(())
    }

    /// Recompute the borrow rate from current pool balances and store it
    /// (keeper only)
    pub fn record_rate_snapshot(
        ctx: Context<KeeperOnly>,
        cash: u128,
        borrows: u128,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let config = &mut ctx.accounts.config;
        require!(
            clock.slot > config.last_snapshot_slot,
            RaylendError::SnapshotNotNewer
        );

        let current_utilization = utilization(cash, borrows)?;
        let rate = borrow_rate_per_second(cash, borrows, &config.model)?;
        let apr = per_second_to_apr(rate)?;

        config.last_utilization = current_utilization;
        config.last_rate_per_second = rate;
        config.last_snapshot_slot = clock.slot;
        config.last_snapshot_ts = clock.unix_timestamp;

        emit!(RateSnapshotRecorded {
            utilization: current_utilization,
            rate_per_second: rate,
            apr,
            slot: clock.slot,
            timestamp: clock.unix_timestamp,
        });
        msg!(
            "Rate snapshot: utilization {}, rate {} per second",
            current_utilization,
            rate
        );
        Ok(())
    }
}

// ========== ACCOUNTS ==========

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RateConfig::INIT_SPACE,
        seeds = [RATE_CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, RateConfig>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AdminOnly<'info> {
    #[account(
        mut,
        seeds = [RATE_CONFIG_SEED],
        bump = config.bump,
        has_one = admin
    )]
    pub config: Account<'info, RateConfig>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct KeeperOnly<'info> {
    #[account(
        mut,
        seeds = [RATE_CONFIG_SEED],
        bump = config.bump,
        has_one = keeper
    )]
    pub config: Account<'info, RateConfig>,
    pub keeper: Signer<'info>,
}
